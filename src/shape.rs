//! Shape type and element-count computation
//!
//! A shape is an ordered list of per-axis extents, outermost axis first.
//! Extents are `i32` because that is the kernel ABI's shape element type;
//! they are expected to be non-negative but are never validated here, so a
//! negative extent flows through the product deterministically.
//!
//! # Overflow policy
//!
//! [`element_count`] accumulates into a widened `i64`, so the product of any
//! two `i32` extents is always exact. Past the `i64` range the accumulation
//! wraps (two's-complement), left-to-right, which is deterministic and
//! reproducible. Callers sizing allocations should use
//! [`checked_element_count`], which reports overflow instead of wrapping.

use crate::error::{Error, Result};
use smallvec::SmallVec;
use std::fmt;
use std::iter::FromIterator;
use std::ops::{Deref, DerefMut};

/// Stack allocation threshold for dimensions
/// Most tensors have 4 or fewer dimensions, so we stack-allocate up to 4
pub(crate) const STACK_DIMS: usize = 4;

/// Total number of elements described by a shape.
///
/// Folds the extents left-to-right into an `i64` accumulator starting at 1,
/// so the empty shape (rank-0 scalar) yields exactly 1 and a zero extent
/// anywhere collapses the count to 0. Pure function: no validation, no side
/// effects, identical output for identical input.
///
/// Overflow past `i64` wraps; see the module docs and
/// [`checked_element_count`].
///
/// # Example
/// ```
/// use kernutil::shape::element_count;
/// assert_eq!(element_count(&[2, 3, 4]), 24);
/// assert_eq!(element_count(&[]), 1);
/// assert_eq!(element_count(&[0, 3, 4]), 0);
/// ```
#[inline]
pub fn element_count(shape: &[i32]) -> i64 {
    shape
        .iter()
        .fold(1i64, |count, &extent| count.wrapping_mul(extent as i64))
}

/// Total number of elements described by a shape, failing on overflow.
///
/// Identical to [`element_count`] except that exceeding the `i64` range
/// returns [`Error::ElementCountOverflow`] instead of wrapping. Use this
/// entry point when the count feeds a buffer allocation.
pub fn checked_element_count(shape: &[i32]) -> Result<i64> {
    let mut count = 1i64;
    for &extent in shape {
        count = count
            .checked_mul(extent as i64)
            .ok_or_else(|| Error::element_count_overflow(shape))?;
    }
    Ok(count)
}

/// Shape type: per-axis extents of a tensor, outermost first
#[derive(Clone, PartialEq, Eq, Default)]
pub struct Shape(SmallVec<[i32; STACK_DIMS]>);

impl Shape {
    /// Create an empty (rank-0, scalar) shape.
    pub fn new() -> Self {
        Self(SmallVec::new())
    }

    /// Create an empty shape with capacity.
    pub fn with_capacity(capacity: usize) -> Self {
        Self(SmallVec::with_capacity(capacity))
    }

    /// Push an extent.
    pub fn push(&mut self, extent: i32) {
        self.0.push(extent);
    }

    /// Remove extent at index.
    pub fn remove(&mut self, index: usize) -> i32 {
        self.0.remove(index)
    }

    /// Insert an extent at index.
    pub fn insert(&mut self, index: usize, value: i32) {
        self.0.insert(index, value);
    }

    /// Swap two extents.
    pub fn swap(&mut self, a: usize, b: usize) {
        self.0.swap(a, b);
    }

    /// View shape as a slice.
    pub fn as_slice(&self) -> &[i32] {
        self.0.as_slice()
    }

    /// Number of axes in this shape.
    #[inline]
    pub fn rank(&self) -> usize {
        self.0.len()
    }

    /// Whether this shape is rank-0 (a scalar).
    #[inline]
    pub fn is_scalar(&self) -> bool {
        self.0.is_empty()
    }

    /// Total number of elements; see [`element_count`].
    #[inline]
    pub fn elem_count(&self) -> i64 {
        element_count(self.as_slice())
    }

    /// Total number of elements, failing on overflow;
    /// see [`checked_element_count`].
    pub fn checked_elem_count(&self) -> Result<i64> {
        checked_element_count(self.as_slice())
    }
}

impl Deref for Shape {
    type Target = [i32];

    fn deref(&self) -> &Self::Target {
        self.0.as_slice()
    }
}

impl DerefMut for Shape {
    fn deref_mut(&mut self) -> &mut Self::Target {
        self.0.as_mut_slice()
    }
}

impl fmt::Debug for Shape {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

impl AsRef<[i32]> for Shape {
    fn as_ref(&self) -> &[i32] {
        self.0.as_slice()
    }
}

impl From<SmallVec<[i32; STACK_DIMS]>> for Shape {
    fn from(value: SmallVec<[i32; STACK_DIMS]>) -> Self {
        Self(value)
    }
}

impl From<Vec<i32>> for Shape {
    fn from(value: Vec<i32>) -> Self {
        Self(value.into_iter().collect())
    }
}

impl From<&[i32]> for Shape {
    fn from(value: &[i32]) -> Self {
        Self(value.iter().copied().collect())
    }
}

impl<const N: usize> From<[i32; N]> for Shape {
    fn from(value: [i32; N]) -> Self {
        Self(value.into_iter().collect())
    }
}

impl FromIterator<i32> for Shape {
    fn from_iter<T: IntoIterator<Item = i32>>(iter: T) -> Self {
        Self(iter.into_iter().collect())
    }
}
