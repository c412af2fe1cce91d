//! Unified error types for the deck generator.
//!
//! Package-level errors from the OOXML writer are folded into a single
//! [`Error`] so callers only ever match on one type.

// Submodule declarations
pub mod conversions;
pub mod types;

// Re-exports
pub use types::{Error, Result};
