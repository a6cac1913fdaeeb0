use crate::ui::terminal::{detect_capabilities, TerminalCapabilities};

/// Rendering decisions made once at startup
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct UiContext {
    pub json: bool,
    pub caps: TerminalCapabilities,
    pub color: bool,
    pub unicode: bool,
}

impl UiContext {
    pub fn new(json: bool) -> Self {
        Self::from_caps(json, detect_capabilities())
    }

    pub(crate) fn from_caps(json: bool, caps: TerminalCapabilities) -> Self {
        Self {
            json,
            caps,
            color: !json && caps.supports_color && !caps.is_ci,
            unicode: caps.supports_unicode,
        }
    }
}
