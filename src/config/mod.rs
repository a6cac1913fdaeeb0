//! Configuration module for remote-deploy
//!
//! Inputs are resolved in this order:
//! 1. CLI flags (highest priority)
//! 2. `INPUT_*` environment variables (workflow `with:` block)
//! 3. Built-in defaults (lowest priority)
//!
//! The result is one validated [`DeployConfig`], built once at startup.

mod env_validator;
mod loader;
mod types;

pub use env_validator::{levenshtein, InputValidator};
pub use types::{inputs, DeployConfig, DEFAULT_PATH_PREFIX, DEFAULT_TIMEOUT_SECS};
