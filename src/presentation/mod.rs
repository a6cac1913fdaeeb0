//! Presentation Layer
//!
//! This layer handles:
//! - CLI argument parsing (via clap)
//! - Creating the use case and sinks with infrastructure dependencies
//!
//! ## Structure
//!
//! - `cli` - Flags mirroring the action inputs
//! - `factory` - Creates the use case with proper dependencies (dependency injection)
//!
//! ## Usage
//!
//! ```ignore
//! use remote_deploy::presentation::{factory, Cli};
//!
//! let config = factory::load_config(&cli)?;
//! let use_case = factory::create_deploy_use_case(&config, events)?;
//! ```

pub mod cli;
pub mod factory;

pub use cli::Cli;
pub use factory::{create_deploy_use_case, load_config};
