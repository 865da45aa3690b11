//! Prelude module for date_mask crate.
//!
//! Re-exports the derive macros shared by the value types.

pub use derive_more::Display;
