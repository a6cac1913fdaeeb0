//! Deploy Module
//!
//! Orchestrates a trigger-and-observe run.
//!
//! ## Structure
//!
//! - `result` - Result types (`RunReport`, `RunVerdict`)
//! - `use_case` - Core use case logic (`DeployUseCase`)
//!
//! ## Usage
//!
//! ```ignore
//! use remote_deploy::application::deploy::DeployUseCase;
//!
//! let use_case = DeployUseCase::new(api).with_events(events);
//! let report = use_case.run(&config, &mut sink).await;
//! ```

mod result;
mod use_case;

pub use result::{RunReport, RunVerdict};
pub use use_case::DeployUseCase;
