#![cfg(feature = "dev")]
//! Tests for banded back-substitution.
//!
//! ## Test Organization
//!
//! 1. **Solutions** - Known systems of several bandwidths
//! 2. **Singular Systems** - Zero and negligible diagonal detection

use approx::assert_relative_eq;

use splinefit::internals::math::backsub::back_substitute;
use splinefit::internals::primitives::banded::BandedMatrix;
use splinefit::internals::primitives::errors::SplineError;

// ============================================================================
// Helper Functions
// ============================================================================

/// Upper triangular bandwidth-2 system with solution [1, 2, 3].
fn bidiagonal() -> (BandedMatrix<f64>, Vec<f64>) {
    let mut a = BandedMatrix::new(3, 2);
    a.reset(3);
    a[(0, 0)] = 2.0;
    a[(0, 1)] = 1.0;
    a[(1, 0)] = 4.0;
    a[(1, 1)] = 1.0;
    a[(2, 0)] = 5.0;

    // z = A c for c = [1, 2, 3]
    let z = vec![4.0, 11.0, 15.0];
    (a, z)
}

// ============================================================================
// Solution Tests
// ============================================================================

/// Test a bidiagonal system.
///
/// Verifies the solution of a bandwidth-2 system.
#[test]
fn test_bidiagonal_solution() {
    let (a, z) = bidiagonal();
    let mut c = vec![0.0; 3];

    back_substitute(&a, &z, 3, 2, &mut c).unwrap();

    assert_relative_eq!(c[0], 1.0, epsilon = 1e-14);
    assert_relative_eq!(c[1], 2.0, epsilon = 1e-14);
    assert_relative_eq!(c[2], 3.0, epsilon = 1e-14);
}

/// Test a wider band.
///
/// Verifies that entries beyond the last row are not read.
#[test]
fn test_wide_band_solution() {
    let mut a = BandedMatrix::new(4, 3);
    a.reset(4);
    // Row i: a(i,0) on the diagonal, a(i,1), a(i,2) to the right
    let rows = [[1.0, 2.0, 3.0], [2.0, 1.0, 1.0], [3.0, 1.0, 9.0], [4.0, 9.0, 9.0]];
    for (i, row) in rows.iter().enumerate() {
        a.row_mut(i).copy_from_slice(row);
    }

    let expected = [1.0, -1.0, 2.0, 0.5];
    let z: Vec<f64> = (0..4)
        .map(|i| {
            (0..3)
                .filter(|&l| i + l < 4)
                .map(|l| rows[i][l] * expected[i + l])
                .sum()
        })
        .collect();

    let mut c = vec![0.0; 4];
    back_substitute(&a, &z, 4, 3, &mut c).unwrap();

    for (ci, ei) in c.iter().zip(expected) {
        assert_relative_eq!(*ci, ei, epsilon = 1e-13);
    }
}

/// Test the empty system.
///
/// Verifies that n = 0 is a no-op.
#[test]
fn test_empty_system() {
    let a = BandedMatrix::<f64>::new(1, 2);
    let mut c: Vec<f64> = vec![];

    assert!(back_substitute(&a, &[], 0, 2, &mut c).is_ok());
}

// ============================================================================
// Singular System Tests
// ============================================================================

/// Test a zero diagonal in the last row.
///
/// Verifies that the offending row is reported.
#[test]
fn test_singular_last_row() {
    let (mut a, z) = bidiagonal();
    a[(2, 0)] = 0.0;
    let mut c = vec![0.0; 3];

    let res = back_substitute(&a, &z, 3, 2, &mut c);
    assert_eq!(res, Err(SplineError::SingularSystem { row: 2 }));
}

/// Test a zero diagonal in an inner row.
///
/// Verifies that the offending row is reported.
#[test]
fn test_singular_inner_row() {
    let (mut a, z) = bidiagonal();
    a[(0, 0)] = 0.0;
    let mut c = vec![0.0; 3];

    let res = back_substitute(&a, &z, 3, 2, &mut c);
    assert_eq!(res, Err(SplineError::SingularSystem { row: 0 }));
}

/// Test a negligible diagonal.
///
/// Verifies that a pivot far below machine precision relative to the largest
/// diagonal is reported instead of amplifying rounding error.
#[test]
fn test_negligible_diagonal() {
    let (mut a, z) = bidiagonal();
    a[(1, 0)] = 1.5e-18;
    let mut c = vec![0.0; 3];

    let res = back_substitute(&a, &z, 3, 2, &mut c);
    assert_eq!(res, Err(SplineError::SingularSystem { row: 1 }));
}

/// Test a badly scaled but regular system.
///
/// Verifies that small diagonals are accepted when the whole system is small.
#[test]
fn test_uniformly_small_system() {
    let (mut a, mut z) = bidiagonal();
    for i in 0..3 {
        for l in 0..2 {
            a[(i, l)] *= 1e-20;
        }
        z[i] *= 1e-20;
    }
    let mut c = vec![0.0; 3];

    back_substitute(&a, &z, 3, 2, &mut c).unwrap();

    assert_relative_eq!(c[0], 1.0, epsilon = 1e-12);
    assert_relative_eq!(c[2], 3.0, epsilon = 1e-12);
}
