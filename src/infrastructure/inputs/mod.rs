//! Input Source Implementations

mod env;

pub use env::{input_env_key, ActionInputs, LayeredInputs};
