//! Runner-provided inputs
//!
//! The Actions runner exposes each `with:` input as `INPUT_<NAME>`.

use std::collections::HashMap;

use crate::domain::ports::InputSource;

/// Environment variable carrying input `name`
///
/// Upper-cased with spaces replaced by `_`; hyphens are kept
/// (`remote-url` -> `INPUT_REMOTE-URL`).
pub fn input_env_key(name: &str) -> String {
    format!("INPUT_{}", name.replace(' ', "_").to_uppercase())
}

/// Reads inputs from `INPUT_*` environment variables
pub struct ActionInputs<F = fn(&str) -> Option<String>>
where
    F: Fn(&str) -> Option<String>,
{
    get_env: F,
}

impl ActionInputs {
    /// Inputs from the process environment
    pub fn from_env() -> Self {
        Self {
            get_env: |key| std::env::var(key).ok(),
        }
    }
}

impl<F: Fn(&str) -> Option<String>> ActionInputs<F> {
    pub fn with_env(get_env: F) -> Self {
        Self { get_env }
    }
}

impl<F: Fn(&str) -> Option<String>> InputSource for ActionInputs<F> {
    fn get(&self, name: &str) -> Option<String> {
        (self.get_env)(&input_env_key(name))
    }
}

/// Explicit values (CLI flags) layered over a fallback source
pub struct LayeredInputs<S: InputSource> {
    overrides: HashMap<String, String>,
    fallback: S,
}

impl<S: InputSource> LayeredInputs<S> {
    pub fn new(overrides: HashMap<String, String>, fallback: S) -> Self {
        Self {
            overrides,
            fallback,
        }
    }
}

impl<S: InputSource> InputSource for LayeredInputs<S> {
    fn get(&self, name: &str) -> Option<String> {
        self.overrides
            .get(name)
            .cloned()
            .or_else(|| self.fallback.get(name))
    }
}
