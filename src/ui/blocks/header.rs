use crate::config::DeployConfig;
use crate::ui::primitives::icon::Icon;
use crate::ui::primitives::text::ColoredText;

#[derive(Debug, Clone)]
pub struct CommandHeader {
    icon: Icon,
    title: String,
    items: Vec<(String, String)>,
}

impl CommandHeader {
    pub fn new(icon: Icon, title: impl Into<String>) -> Self {
        Self {
            icon,
            title: title.into(),
            items: Vec::new(),
        }
    }

    /// Banner shown before triggering. Never includes the token.
    pub fn for_deploy(config: &DeployConfig) -> Self {
        let mut header = Self::new(Icon::Deploy, "Remote Deploy");
        header.add("Remote URL", config.remote_url.as_str());
        header.add("App ID", config.app_id.as_str());
        header.add("Path Prefix", config.path_prefix.as_str());
        header.add(
            "Command ID",
            config.command_id.as_deref().unwrap_or("(default)"),
        );
        header.add("Wait", config.wait.to_string());
        header.add("Timeout", format!("{}s", config.timeout_secs));
        header
    }

    pub fn add(&mut self, label: impl Into<String>, value: impl Into<String>) {
        self.items.push((label.into(), value.into()));
    }

    pub fn render(&self, supports_color: bool, supports_unicode: bool) -> String {
        let mut out = String::new();
        let title = ColoredText::info(self.title.as_str())
            .bold()
            .render(supports_color);
        out.push_str(&format!(
            "{} {}\n",
            self.icon.colored(supports_color, supports_unicode),
            title
        ));
        for (label, value) in &self.items {
            let label = ColoredText::dim(format!("{label}:")).render(supports_color);
            out.push_str(&format!("{} {}\n", label, value));
        }
        out
    }
}
