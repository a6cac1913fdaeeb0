//! Common test utilities for remote-deploy integration tests.
//!
//! This module provides:
//! - `FakeDeployService`: raw-TCP stand-in for the deploy service
//! - `MemorySink`: result sink recording outputs in memory

#![allow(dead_code)]

pub mod fake_service;
pub mod sinks;

pub use fake_service::*;
pub use sinks::*;
