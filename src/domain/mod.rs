//! Domain Layer
//!
//! The core of remote-deploy: execution state, the event-stream record parser,
//! and the ports the observation protocol talks through.
//!
//! ## Structure
//!
//! - `entities/` - Execution status, trigger/status envelopes, outcomes
//! - `services/` - Event-stream parsing, output truncation
//! - `ports/` - Interface definitions for infrastructure
//!
//! ## Design Principles
//!
//! 1. **No I/O** - This layer never touches the network or the environment directly
//! 2. **Pure Functions** - Services are stateless or own only their buffer
//! 3. **Ports & Adapters** - All I/O goes through trait-defined ports

pub mod entities;
pub mod ports;
pub mod services;
