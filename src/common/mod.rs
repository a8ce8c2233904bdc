//! Common types and utilities shared across the crate.

pub mod color;
pub mod error;
pub mod unit;
pub mod xml;

// Re-exports for convenience
pub use color::{Color, RGBColor};
pub use error::{Error, Result};
