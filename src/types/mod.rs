//! Shared types for the graph-walk library.

pub mod error;

pub use error::{WalkError, WalkResult};
