//! # kernutil
//!
//! **Utility primitives for numerical-kernel execution backends.**
//!
//! kernutil is the leaf utility layer shared by kernel-dispatch and
//! buffer-allocation code: it turns tensor shapes into element counts and
//! layout strides, and renders small sequences for diagnostics. Every
//! consumer of a shape must agree on its element count, so the arithmetic
//! here is the single source of truth for buffer sizes and iteration bounds.
//!
//! ## Features
//!
//! - **Element counts**: product of a shape's extents, with an explicit
//!   widened-accumulator overflow policy and a checked variant
//! - **Shapes**: stack-allocated [`Shape`](shape::Shape) type for up to
//!   4 dimensions without heap allocation
//! - **Strides**: row-major stride computation and linear offsets
//! - **Diagnostics**: bracketed one-line sequence printing for debugging,
//!   off every correctness and latency path
//!
//! ## Quick Start
//!
//! ```rust
//! use kernutil::prelude::*;
//!
//! assert_eq!(element_count(&[2, 3, 4]), 24);
//! assert_eq!(element_count(&[]), 1); // rank-0 scalar holds one element
//!
//! let shape = Shape::from([2, 3, 4]);
//! assert_eq!(shape.rank(), 3);
//! assert_eq!(shape.elem_count(), 24);
//! ```
//!
//! ## Contract
//!
//! This crate is the trust boundary's callee, not its enforcer: shapes are
//! assumed already validated by upstream shape inference. Negative extents
//! are a caller contract violation and flow through the product unvalidated.

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod debug;
pub mod error;
pub mod shape;
pub mod strides;

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::debug::{log_sequence, DecimalDisplay};
    pub use crate::error::{Error, Result};
    pub use crate::shape::{checked_element_count, element_count, Shape};
    pub use crate::strides::{contiguous_strides, Strides};
}
