//! Console rendering
//!
//! Design tokens, primitives and blocks used by the console event sink and
//! the startup banner.

pub mod blocks;
pub mod ci;
pub mod context;
pub mod primitives;
pub mod terminal;
pub mod theme;

pub use context::UiContext;
