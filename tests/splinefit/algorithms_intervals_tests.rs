#![cfg(feature = "dev")]
//! Tests for the knot interval residual table.
//!
//! ## Test Organization
//!
//! 1. **Construction** - Polynomial table, counting, stored parts
//! 2. **Residual Update** - Attribution of point residuals to intervals
//! 3. **Interval Selection** - Worst interval with interior data

use approx::assert_relative_eq;

use splinefit::internals::algorithms::intervals::KnotIntervalTracker;
use splinefit::internals::algorithms::reduction::reduce_observations;
use splinefit::internals::primitives::buffer::FitWorkspace;
use splinefit::internals::primitives::data::Observations;

// ============================================================================
// Construction Tests
// ============================================================================

/// Test the polynomial table.
///
/// Verifies one interval holding all but the two end points.
#[test]
fn test_polynomial_table() {
    let table = KnotIntervalTracker::<f64>::polynomial(10, 16);

    assert_eq!(table.intervals(), 1);
    assert_eq!(table.nrdata, vec![8]);
    assert_eq!(table.fpint, vec![0.0]);
}

/// Test counting interior points.
///
/// Verifies that points on a knot belong to neither neighbouring interval.
#[test]
fn test_count_on_data_knot() {
    let x: Vec<f64> = (0..10).map(|i| i as f64).collect();
    let knots = vec![0.0, 0.0, 0.0, 0.0, 4.0, 9.0, 9.0, 9.0, 9.0];

    let table = KnotIntervalTracker::count(&knots, 3, &x);

    assert_eq!(table.nrdata, vec![3, 4]);
    assert_eq!(table.fpint, vec![0.0, 0.0]);
    assert_eq!(table.data_begin(0), 0);
    assert_eq!(table.data_begin(1), 4);
}

/// Test counting on a wider domain.
///
/// Verifies that the first and last data points are never counted, as in the
/// polynomial table.
#[test]
fn test_count_wide_domain() {
    let x: Vec<f64> = (1..9).map(|i| i as f64).collect();
    let knots = vec![0.0, 0.0, 0.0, 0.0, 4.0, 10.0, 10.0, 10.0, 10.0];

    let poly_knots = vec![0.0, 0.0, 0.0, 0.0, 10.0, 10.0, 10.0, 10.0];

    let table = KnotIntervalTracker::count(&knots, 3, &x);
    let polynomial = KnotIntervalTracker::count(&poly_knots, 3, &x);

    // Points 2, 3 and 5, 6, 7; 1 and 8 stand on the boundary
    assert_eq!(table.nrdata, vec![2, 3]);
    assert_eq!(polynomial.nrdata, KnotIntervalTracker::<f64>::polynomial(8, 8).nrdata);
}

/// Test rebuilding from parts.
///
/// Verifies that stored session state is taken as is.
#[test]
fn test_from_parts() {
    let table = KnotIntervalTracker::from_parts(vec![1.0, 2.0], vec![3, 4]);

    assert_eq!(table.intervals(), 2);
    assert_eq!(table.fpint, vec![1.0, 2.0]);
}

// ============================================================================
// Residual Update Tests
// ============================================================================

/// Test residual attribution.
///
/// Verifies that interval residuals and point residuals both sum to `fp`.
#[test]
fn test_update_conserves_residual() {
    let x: Vec<f64> = (0..21).map(|i| i as f64 * 0.5).collect();
    let y: Vec<f64> = x.iter().map(|&v| (v * 0.8).sin() + 0.02 * v * v).collect();
    let w = vec![1.0; x.len()];
    let data = Observations::new(&x, &y, &w, 0.0, 10.0);

    let knots = vec![0.0, 0.0, 0.0, 0.0, 3.0, 6.0, 10.0, 10.0, 10.0, 10.0];
    let mut ws = FitWorkspace::new(x.len(), 3, knots.len());
    let fp = reduce_observations(&data, &knots, 3, &mut ws).unwrap();

    let mut table = KnotIntervalTracker::count(&knots, 3, &x);
    table.update(&data, 3, &mut ws);

    let interval_sum: f64 = table.fpint.iter().sum();
    let point_sum: f64 = ws.point_residuals.iter().sum();

    assert_eq!(table.intervals(), 3);
    assert!(table.fpint.iter().all(|&v| v >= 0.0));
    assert_relative_eq!(interval_sum, fp, max_relative = 1e-9);
    assert_relative_eq!(point_sum, fp, max_relative = 1e-9);
}

// ============================================================================
// Interval Selection Tests
// ============================================================================

/// Test selection of the worst interval.
///
/// Verifies that intervals without interior data are skipped.
#[test]
fn test_worst_interval_skips_empty() {
    let table = KnotIntervalTracker::from_parts(vec![1.0, 5.0, 3.0], vec![2, 0, 4]);

    assert_eq!(table.worst_interval(), Some((2, 3.0)));
}

/// Test that ties keep the first interval.
///
/// Verifies deterministic selection.
#[test]
fn test_worst_interval_tie() {
    let table = KnotIntervalTracker::from_parts(vec![2.0, 2.0], vec![1, 1]);

    assert_eq!(table.worst_interval(), Some((0, 2.0)));
}

/// Test a table with no insertable interval.
///
/// Verifies that `None` is returned.
#[test]
fn test_worst_interval_none() {
    let table = KnotIntervalTracker::from_parts(vec![1.0, 2.0], vec![0, 0]);

    assert_eq!(table.worst_interval(), None);
}
