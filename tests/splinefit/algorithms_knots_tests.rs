#![cfg(feature = "dev")]
//! Tests for knot set construction, knot insertion, and the growth policy.
//!
//! ## Test Organization
//!
//! 1. **Knot Sets** - Polynomial, interpolation, boundary knots
//! 2. **Knot Insertion** - Placement, table split, exhausted intervals
//! 3. **Growth Policy** - Number of knots added per pass

use approx::assert_relative_eq;

use splinefit::internals::algorithms::intervals::KnotIntervalTracker;
use splinefit::internals::algorithms::knots::{
    growth_count, insert_knot, interpolation_knots, polynomial_knots, set_boundary_knots,
};

// ============================================================================
// Knot Set Tests
// ============================================================================

/// Test the polynomial knot set.
///
/// Verifies k + 1 copies of each boundary.
#[test]
fn test_polynomial_knots() {
    let mut knots = vec![9.0; 3];
    polynomial_knots(&mut knots, 3, 0.0, 1.0);

    assert_eq!(knots, vec![0.0, 0.0, 0.0, 0.0, 1.0, 1.0, 1.0, 1.0]);
}

/// Test interpolation knots for odd degree.
///
/// Verifies that interior knots are abscissas.
#[test]
fn test_interpolation_knots_odd() {
    let x: Vec<f64> = (0..8).map(|i| i as f64).collect();
    let mut knots = Vec::new();
    interpolation_knots(&mut knots, &x, 3, 0.0, 7.0);

    assert_eq!(knots.len(), x.len() + 4);
    assert_eq!(&knots[4..8], &[2.0, 3.0, 4.0, 5.0]);
    assert!(knots[..4].iter().all(|&t| t == 0.0));
    assert!(knots[8..].iter().all(|&t| t == 7.0));
}

/// Test interpolation knots for even degree.
///
/// Verifies that interior knots are midpoints between abscissas.
#[test]
fn test_interpolation_knots_even() {
    let x: Vec<f64> = (0..6).map(|i| i as f64).collect();
    let mut knots = Vec::new();
    interpolation_knots(&mut knots, &x, 2, 0.0, 5.0);

    assert_eq!(knots.len(), x.len() + 3);
    assert_eq!(&knots[3..6], &[1.5, 2.5, 3.5]);
}

/// Test interpolation knots for a linear spline.
///
/// Verifies that every inner abscissa becomes a knot.
#[test]
fn test_interpolation_knots_linear() {
    let x = vec![0.0, 0.5, 2.0, 3.0];
    let mut knots = Vec::new();
    interpolation_knots(&mut knots, &x, 1, 0.0, 3.0);

    assert_eq!(knots, vec![0.0, 0.0, 0.5, 2.0, 3.0, 3.0]);
}

/// Test boundary knot assignment.
///
/// Verifies that interior knots survive and boundaries are overwritten.
#[test]
fn test_set_boundary_keeps_interior() {
    let mut knots = vec![9.0, 9.0, 0.5, 9.0, 9.0];
    set_boundary_knots(&mut knots, 5, 1, 0.0, 1.0);

    assert_eq!(knots, vec![0.0, 0.0, 0.5, 1.0, 1.0]);
}

// ============================================================================
// Knot Insertion Tests
// ============================================================================

/// Test insertion at a residual peak.
///
/// Verifies that the new knot lands on the point carrying the residual.
#[test]
fn test_insert_at_residual_peak() {
    let x: Vec<f64> = (0..11).map(|i| i as f64).collect();
    let mut residuals = vec![0.0; 11];
    residuals[7] = 1.0;

    let mut knots = Vec::new();
    polynomial_knots(&mut knots, 3, 0.0, 10.0);
    let mut table = KnotIntervalTracker::polynomial(11, 16);
    table.fpint[0] = 1.0;

    assert!(insert_knot(&mut knots, 3, &x, &residuals, &mut table));

    assert_eq!(knots.len(), 9);
    assert_eq!(knots[4], 7.0);
    assert_eq!(table.nrdata, vec![6, 2]);
    assert_relative_eq!(table.fpint[0], 6.0 / 9.0, epsilon = 1e-15);
    assert_relative_eq!(table.fpint[1], 2.0 / 9.0, epsilon = 1e-15);
}

/// Test insertion with vanishing residuals.
///
/// Verifies the median fallback.
#[test]
fn test_insert_median_fallback() {
    let x: Vec<f64> = (0..11).map(|i| i as f64).collect();
    let residuals = vec![0.0; 11];

    let mut knots = Vec::new();
    polynomial_knots(&mut knots, 3, 0.0, 10.0);
    let mut table = KnotIntervalTracker::polynomial(11, 16);

    assert!(insert_knot(&mut knots, 3, &x, &residuals, &mut table));
    assert_eq!(knots[4], 5.0);
    assert_eq!(table.nrdata, vec![4, 4]);
}

/// Test insertion into the second interval.
///
/// Verifies that knots stay sorted and the right data range is used.
#[test]
fn test_insert_second_interval() {
    let x: Vec<f64> = (0..11).map(|i| i as f64).collect();
    let mut residuals = vec![0.0; 11];
    residuals[8] = 2.0;
    residuals[9] = 2.0;

    // Knot at x = 4: interval 0 holds 1..=3, interval 1 holds 5..=9
    let mut knots = vec![0.0, 0.0, 0.0, 0.0, 4.0, 10.0, 10.0, 10.0, 10.0];
    let mut table = KnotIntervalTracker::count(&knots, 3, &x);
    table.fpint = vec![0.1, 4.0];

    assert!(insert_knot(&mut knots, 3, &x, &residuals, &mut table));

    assert!(knots.windows(2).all(|p| p[0] <= p[1]));
    assert_eq!(knots[5], 8.0);
    assert_eq!(table.nrdata, vec![3, 3, 1]);
}

/// Test an exhausted table.
///
/// Verifies that nothing is inserted when no interval has interior data.
#[test]
fn test_insert_exhausted() {
    let x = vec![0.0, 1.0, 2.0];
    let residuals = vec![1.0; 3];
    let mut knots = vec![0.0, 0.0, 1.0, 2.0, 2.0];
    let mut table = KnotIntervalTracker::from_parts(vec![1.0, 1.0], vec![0, 0]);

    assert!(!insert_knot(&mut knots, 1, &x, &residuals, &mut table));
    assert_eq!(knots.len(), 5);
}

// ============================================================================
// Growth Policy Tests
// ============================================================================

/// Test the first growth step.
///
/// Verifies that leaving the polynomial adds one knot.
#[test]
fn test_growth_first_step() {
    assert_eq!(growth_count(None, 10.0, 8.0, 0.0, 0.01), 1);
}

/// Test growth capped at doubling.
///
/// Verifies that a large estimate is limited to twice the last count.
#[test]
fn test_growth_doubling_cap() {
    assert_eq!(growth_count(Some(1), 10.0, 8.0, 12.0, 0.01), 2);
}

/// Test growth when the residual stalls.
///
/// Verifies doubling when the last pass barely lowered the residual.
#[test]
fn test_growth_stalled() {
    assert_eq!(growth_count(Some(4), 10.0, 8.0, 10.0, 0.01), 8);
}

/// Test growth close to the target.
///
/// Verifies the lower bound of half the last count.
#[test]
fn test_growth_near_target() {
    assert_eq!(growth_count(Some(4), 10.0, 0.5, 20.0, 0.01), 2);
}

/// Test the minimum growth.
///
/// Verifies that at least one knot is added.
#[test]
fn test_growth_at_least_one() {
    assert_eq!(growth_count(Some(1), 10.0, 0.01, 20.0, 0.001), 1);
}
