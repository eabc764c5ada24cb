//! Row-major stride computation and linear offsets
//!
//! Strides are element offsets (not bytes) between consecutive elements
//! along each dimension, widened to `i64` because a stride is itself a
//! product of extents and can exceed the `i32` range.

use crate::shape::STACK_DIMS;
use smallvec::SmallVec;

/// Strides type: element offsets between consecutive elements along each
/// dimension, innermost stride last
pub type Strides = SmallVec<[i64; STACK_DIMS]>;

/// Compute row-major (C-order) strides for a shape.
///
/// The innermost dimension has stride 1; each outer stride is the product
/// of all inner extents. The empty shape yields empty strides.
///
/// # Example
/// ```
/// use kernutil::strides::contiguous_strides;
/// assert_eq!(contiguous_strides(&[2, 3, 4]).as_slice(), &[12, 4, 1]);
/// ```
pub fn contiguous_strides(shape: &[i32]) -> Strides {
    if shape.is_empty() {
        return SmallVec::new();
    }

    let mut strides: Strides = SmallVec::with_capacity(shape.len());
    let mut stride = 1i64;

    // Compute strides from last dimension to first
    for &extent in shape.iter().rev() {
        strides.push(stride);
        stride *= extent as i64;
    }

    strides.reverse();
    strides
}

/// Compute the linear element offset for the given indices.
///
/// Returns `None` when the index count does not match the stride count.
/// Indices are not bounds-checked against any shape; that is the caller's
/// contract, as with extents.
pub fn linear_offset(indices: &[i32], strides: &[i64]) -> Option<i64> {
    if indices.len() != strides.len() {
        return None;
    }

    let mut linear = 0i64;
    for (&idx, &stride) in indices.iter().zip(strides.iter()) {
        linear += idx as i64 * stride;
    }

    Some(linear)
}
