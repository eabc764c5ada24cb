//! Error types for kernutil

use thiserror::Error;

/// Result type alias using kernutil's Error
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur in kernutil operations
///
/// The utility layer is deliberately error-light: the only failure it can
/// surface is an element-count overflow from the checked product entry point.
/// Negative extents are a caller precondition violation, not an error here.
#[derive(Error, Debug)]
pub enum Error {
    /// Element count exceeded the i64 accumulator range
    #[error("Element count overflow for shape {shape:?}")]
    ElementCountOverflow {
        /// The shape whose extents overflowed the accumulator
        shape: Vec<i32>,
    },
}

impl Error {
    /// Create an element-count overflow error
    pub fn element_count_overflow(shape: &[i32]) -> Self {
        Self::ElementCountOverflow {
            shape: shape.to_vec(),
        }
    }
}
