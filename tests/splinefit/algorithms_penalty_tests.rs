#![cfg(feature = "dev")]
//! Tests for the discontinuity jump rows of the smoothing penalty.
//!
//! ## Test Organization
//!
//! 1. **Shape** - Number of rows and bandwidth
//! 2. **Polynomial Null Space** - Jumps of a global polynomial vanish
//! 3. **Detection** - Jumps of a single basis function do not

use splinefit::internals::algorithms::penalty::discontinuity_jumps;
use splinefit::internals::algorithms::reduction::reduce_observations;
use splinefit::internals::primitives::banded::BandedMatrix;
use splinefit::internals::primitives::buffer::FitWorkspace;
use splinefit::internals::primitives::data::Observations;

// ============================================================================
// Helper Functions
// ============================================================================

/// Cubic knots on [0, 10] with uneven interior knots.
fn knots() -> Vec<f64> {
    vec![0.0, 0.0, 0.0, 0.0, 1.5, 4.0, 5.0, 8.5, 10.0, 10.0, 10.0, 10.0]
}

/// Apply row `r` of the jump matrix to `c`; returns the sum and the sum of magnitudes.
fn apply_row(jumps: &BandedMatrix<f64>, r: usize, c: &[f64]) -> (f64, f64) {
    jumps.row(r).iter().enumerate().fold((0.0, 0.0), |(s, a), (j, &b)| {
        let term = b * c[r + j];
        (s + term, a + term.abs())
    })
}

// ============================================================================
// Shape Tests
// ============================================================================

/// Test the number of rows.
///
/// Verifies one row per interior knot with k + 2 entries.
#[test]
fn test_jump_matrix_shape() {
    let t = knots();
    let mut jumps = BandedMatrix::new(t.len(), 5);

    discontinuity_jumps(&t, 3, &mut jumps);

    assert_eq!(jumps.rows(), 4);
    assert_eq!(jumps.width(), 5);
    for r in 0..jumps.rows() {
        assert!(jumps.row(r).iter().any(|&v| v != 0.0), "row {r} is empty");
    }
}

// ============================================================================
// Polynomial Null Space Tests
// ============================================================================

/// Test that polynomials have no jumps.
///
/// Verifies that the coefficients of a global cubic are annihilated by every row.
#[test]
fn test_polynomial_has_no_jumps() {
    let t = knots();
    let x: Vec<f64> = (0..41).map(|i| i as f64 * 0.25).collect();
    let y: Vec<f64> = x.iter().map(|&v| 2.0 - v + 0.3 * v * v - 0.02 * v * v * v).collect();
    let w = vec![1.0; x.len()];
    let data = Observations::new(&x, &y, &w, 0.0, 10.0);

    let mut ws = FitWorkspace::new(x.len(), 3, t.len());
    reduce_observations(&data, &t, 3, &mut ws).unwrap();
    discontinuity_jumps(&t, 3, &mut ws.jumps);

    for r in 0..ws.jumps.rows() {
        let (sum, magnitude) = apply_row(&ws.jumps, r, &ws.coefficients);
        assert!(
            sum.abs() <= 1e-9 * magnitude,
            "row {r}: jump {sum} of a cubic should vanish"
        );
    }
}

/// Test lower degrees.
///
/// Verifies the null space for linear and quadratic splines.
#[test]
fn test_polynomial_has_no_jumps_low_degree() {
    let x: Vec<f64> = (0..21).map(|i| i as f64 * 0.5).collect();
    let w = vec![1.0; x.len()];

    for k in 1..=2 {
        let mut t = vec![0.0; k + 1];
        t.extend([2.0, 5.5, 7.0]);
        t.extend(vec![10.0; k + 1]);

        let y: Vec<f64> = x.iter().map(|&v| 1.0 + 0.5 * v - 0.04 * v * v * (k - 1) as f64).collect();
        let data = Observations::new(&x, &y, &w, 0.0, 10.0);

        let mut ws = FitWorkspace::new(x.len(), k, t.len());
        reduce_observations(&data, &t, k, &mut ws).unwrap();
        discontinuity_jumps(&t, k, &mut ws.jumps);

        for r in 0..ws.jumps.rows() {
            let (sum, magnitude) = apply_row(&ws.jumps, r, &ws.coefficients);
            assert!(sum.abs() <= 1e-9 * magnitude, "degree {k}, row {r}: {sum}");
        }
    }
}

// ============================================================================
// Detection Tests
// ============================================================================

/// Test a single basis function.
///
/// Verifies that a B-spline has a nonzero jump at its own interior knots.
#[test]
fn test_basis_function_has_jumps() {
    let t = knots();
    let mut jumps = BandedMatrix::new(t.len(), 5);
    discontinuity_jumps(&t, 3, &mut jumps);

    let mut c = vec![0.0; t.len() - 4];
    c[3] = 1.0;

    let total: f64 = (0..jumps.rows())
        .map(|r| apply_row(&jumps, r, &c).0.abs())
        .sum();
    assert!(total > 0.0);
}
