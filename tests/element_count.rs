//! Integration tests for shape element counts
//!
//! Tests verify correctness across:
//! - Product identities (rank-1, zero extents, scalar case)
//! - Accumulation order independence
//! - The explicit overflow policy (widened accumulator, wrap vs checked)
//! - Purity (idempotence, thread-parallel determinism)

use kernutil::error::Error;
use kernutil::shape::{checked_element_count, element_count, Shape};

// ============================================================================
// Product Identity Tests
// ============================================================================

#[test]
fn test_product_of_extents() {
    assert_eq!(element_count(&[2, 3, 4]), 24);
    assert_eq!(element_count(&[1, 1, 1, 1]), 1);
    assert_eq!(element_count(&[7, 11]), 77);
}

#[test]
fn test_rank0_scalar_is_one() {
    assert_eq!(element_count(&[]), 1);
}

#[test]
fn test_rank1_is_identity() {
    assert_eq!(element_count(&[5]), 5);
    assert_eq!(element_count(&[1]), 1);
    assert_eq!(element_count(&[0]), 0);
}

#[test]
fn test_zero_extent_collapses_count() {
    assert_eq!(element_count(&[0, 3, 4]), 0);
    assert_eq!(element_count(&[2, 0, 4]), 0);
    assert_eq!(element_count(&[2, 3, 0]), 0);
}

#[test]
fn test_order_independence() {
    // Multiplication is commutative; any permutation gives the same count.
    let shape = [2, 3, 4, 5];
    let mut reversed = shape;
    reversed.reverse();
    assert_eq!(element_count(&shape), element_count(&reversed));
    assert_eq!(element_count(&shape), 120);
}

#[test]
fn test_negative_extent_flows_through() {
    // Negative extents are a caller contract violation; the product is
    // still deterministic, with the sign carried through.
    assert_eq!(element_count(&[-2, 3]), -6);
    assert_eq!(element_count(&[-2, -3]), 6);
}

// ============================================================================
// Overflow Policy Tests
// ============================================================================

#[test]
fn test_widened_accumulator_is_exact_past_i32() {
    // Any two i32 extents are exact in the i64 accumulator.
    assert_eq!(element_count(&[i32::MAX, 2]), 4_294_967_294);
    assert_eq!(
        element_count(&[i32::MAX, i32::MAX]),
        i32::MAX as i64 * i32::MAX as i64
    );
}

#[test]
fn test_wrapping_past_i64_is_deterministic() {
    // Four extents of 2^20 multiply to 2^80, whose low 64 bits are zero.
    let shape = [1 << 20, 1 << 20, 1 << 20, 1 << 20];
    assert_eq!(element_count(&shape), 0);
    assert_eq!(element_count(&shape), element_count(&shape));
}

#[test]
fn test_checked_reports_overflow() {
    let shape = [i32::MAX, i32::MAX, i32::MAX];
    match checked_element_count(&shape) {
        Err(Error::ElementCountOverflow { shape: reported }) => {
            assert_eq!(reported, shape.to_vec());
        }
        other => panic!("expected overflow error, got {other:?}"),
    }
}

#[test]
fn test_checked_agrees_with_wrapping_in_range() {
    for shape in [&[][..], &[5][..], &[2, 3, 4][..], &[i32::MAX, 2][..]] {
        assert_eq!(checked_element_count(shape).unwrap(), element_count(shape));
    }
}

// ============================================================================
// Purity Tests
// ============================================================================

#[test]
fn test_idempotence() {
    let shape = [3, 5, 7];
    assert_eq!(element_count(&shape), element_count(&shape));
}

#[test]
fn test_concurrent_calls_match_sequential() {
    let shapes: Vec<Vec<i32>> = (0..64)
        .map(|i| vec![i % 7 + 1, i % 5 + 1, i % 3 + 1, i + 1])
        .collect();
    let expected: Vec<i64> = shapes.iter().map(|s| element_count(s)).collect();

    let handles: Vec<_> = shapes
        .iter()
        .cloned()
        .map(|shape| std::thread::spawn(move || element_count(&shape)))
        .collect();

    let results: Vec<i64> = handles.into_iter().map(|h| h.join().unwrap()).collect();
    assert_eq!(results, expected);
}

// ============================================================================
// Shape Type Tests
// ============================================================================

#[test]
fn test_shape_elem_count_matches_free_function() {
    let shape = Shape::from([2, 3, 4]);
    assert_eq!(shape.elem_count(), element_count(shape.as_slice()));
    assert_eq!(shape.checked_elem_count().unwrap(), 24);
}

#[test]
fn test_shape_conversions() {
    let from_vec = Shape::from(vec![2, 3]);
    let from_slice = Shape::from(&[2, 3][..]);
    let from_iter: Shape = [2, 3].into_iter().collect();
    assert_eq!(from_vec, from_slice);
    assert_eq!(from_vec, from_iter);
    assert_eq!(from_vec.elem_count(), 6);
}
