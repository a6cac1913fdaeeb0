//! Completion Observation
//!
//! The two wait paths an execution can be followed with:
//!
//! - `stream` - `StreamObserver`, push-based, primary
//! - `poller` - `CompletionPoller`, pull-based, fallback
//!
//! Only one runs at a time; the deploy use case decides when to fall back.

mod poller;
mod policy;
mod stream;

pub use poller::CompletionPoller;
pub use policy::WaitPolicy;
pub use stream::StreamObserver;

#[cfg(test)]
pub(crate) mod testing;
