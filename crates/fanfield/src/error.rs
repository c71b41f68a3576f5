//! Input validation errors.
//!
//! Degenerate geometry is never an error; only malformed input records are.

use thiserror::Error;

/// Errors raised before planning starts.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum PlanError {
    /// Non-finite or out-of-range coordinate.
    #[error("portal {id}: invalid coordinate ({lat}, {lng})")]
    InvalidCoordinate { id: String, lat: f64, lng: f64 },
    /// Two records share the same id.
    #[error("duplicate portal id {id}")]
    DuplicateId { id: String },
    /// A record without an id.
    #[error("portal at index {index} has an empty id")]
    EmptyId { index: usize },
}
