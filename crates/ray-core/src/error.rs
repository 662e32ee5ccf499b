// File: crates/ray-core/src/error.rs
// Summary: Error type for figure drawing helpers.

use thiserror::Error;

#[derive(Debug, Error, PartialEq)]
pub enum FigureError {
    /// A ray parameter was NaN or infinite; nothing was drawn.
    #[error("ray parameter `{name}` must be finite, got {value}")]
    NonFinite { name: &'static str, value: f64 },
}
