#![cfg(feature = "dev")]
//! Tests for plane (Givens) rotations.
//!
//! ## Test Organization
//!
//! 1. **Rotation Construction** - Annihilation, degenerate pivots
//! 2. **Rotation Application** - Norm preservation, in-place helpers

use approx::assert_relative_eq;

use splinefit::internals::math::givens::{apply_rotation, compute_rotation, rotate_into, Rotation};

// ============================================================================
// Rotation Construction Tests
// ============================================================================

/// Test the rotation of a 3-4-5 triangle.
///
/// Verifies the cosine, sine, and new diagonal.
#[test]
fn test_compute_rotation_basic() {
    let (rot, dd) = compute_rotation(3.0, 4.0);

    assert_relative_eq!(dd, 5.0, epsilon = 1e-15);
    assert_relative_eq!(rot.cos, 0.8, epsilon = 1e-15);
    assert_relative_eq!(rot.sin, 0.6, epsilon = 1e-15);
}

/// Test that the rotation annihilates the pivot.
///
/// Verifies that applying the rotation to (pivot, diagonal) gives (0, dd).
#[test]
fn test_rotation_annihilates_pivot() {
    for &(pivot, diag) in &[(3.0, 4.0), (-2.0, 0.5), (1e-8, 7.0), (5.0, -1.0)] {
        let (rot, dd) = compute_rotation(pivot, diag);
        let (a, b) = rot.apply(pivot, diag);

        assert_relative_eq!(a, 0.0, epsilon = 1e-12);
        assert_relative_eq!(b, dd, epsilon = 1e-12);
    }
}

/// Test the zero pivot.
///
/// Verifies that a zero pivot leaves the diagonal unchanged.
#[test]
fn test_zero_pivot() {
    let (rot, dd) = compute_rotation(0.0, 2.0);

    assert_relative_eq!(dd, 2.0, epsilon = 1e-15);
    assert_relative_eq!(rot.cos, 1.0, epsilon = 1e-15);
    assert_relative_eq!(rot.sin, 0.0, epsilon = 1e-15);
}

/// Test both entries zero.
///
/// Verifies that the identity rotation is returned instead of dividing by zero.
#[test]
fn test_both_zero_identity() {
    let (rot, dd) = compute_rotation(0.0_f64, 0.0);

    assert_eq!(rot, Rotation::identity());
    assert_eq!(dd, 0.0);
}

// ============================================================================
// Rotation Application Tests
// ============================================================================

/// Test norm preservation.
///
/// Verifies that rotations are orthogonal.
#[test]
fn test_rotation_preserves_norm() {
    let (rot, _) = compute_rotation(1.5, -2.5);

    for &(a, b) in &[(1.0, 2.0), (-3.0, 0.5), (0.0, 4.0)] {
        let (ra, rb) = rot.apply(a, b);
        assert_relative_eq!(ra * ra + rb * rb, a * a + b * b, epsilon = 1e-12);
    }
}

/// Test the in-place helpers.
///
/// Verifies that `rotate_into` updates the diagonal and `apply_rotation`
/// matches `Rotation::apply`.
#[test]
fn test_in_place_helpers() {
    let mut diag = 4.0;
    let rot = rotate_into(3.0, &mut diag);
    assert_relative_eq!(diag, 5.0, epsilon = 1e-15);

    let (mut a, mut b) = (2.0, -1.0);
    let (ea, eb) = rot.apply(a, b);
    apply_rotation(rot, &mut a, &mut b);

    assert_relative_eq!(a, ea, epsilon = 1e-15);
    assert_relative_eq!(b, eb, epsilon = 1e-15);
}

/// Test f32 support.
///
/// Verifies that the rotation is generic over float types.
#[test]
fn test_rotation_f32() {
    let (rot, dd) = compute_rotation(3.0_f32, 4.0);

    assert_relative_eq!(dd, 5.0_f32, epsilon = 1e-6);
    assert_relative_eq!(rot.cos, 0.8_f32, epsilon = 1e-6);
}
