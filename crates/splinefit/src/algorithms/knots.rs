//! Knot vector construction and growth.
//!
//! ## Purpose
//!
//! This module builds and grows the knot vector of the adaptive fit:
//! - the boundary knots of multiplicity `k + 1` at both ends of the domain,
//! - the interpolating knot set used when `s = 0` or when growth reaches `m + k + 1`,
//! - single knot insertion into the worst-fitting interval,
//! - the number of knots to add after each least-squares pass.
//!
//! ## Design notes
//!
//! * **Knots on data**: New interior knots are always placed at data abscissas,
//!   so every interval keeps a data point on its left boundary.
//! * **Residual centroid**: Inside the chosen interval the knot goes to the
//!   interior point nearest the residual-weighted mean abscissa, which puts it
//!   where the misfit is concentrated. The median interior point is used when
//!   the interval carries no residual.
//! * **Capacity**: The knot vector is allocated for `nest` knots; insertions never
//!   reallocate.
//!
//! ## Key concepts
//!
//! * **`nmin = 2k + 2`**: Polynomial knot set, no interior knots.
//! * **`nmax = m + k + 1`**: Interpolating knot set.
//! * **Growth count**: Extrapolates the residual decrease of the last pass to
//!   estimate how many knots are needed to reach `s`, clamped between half and
//!   double the previous count.
//!
//! ## Invariants
//!
//! * Interior knots stay strictly increasing and strictly inside `(xb, xe)`.
//! * `nrdata` and `fpint` keep one entry per knot interval after each insertion.

// Feature-gated imports
#[cfg(not(feature = "std"))]
use alloc::vec::Vec;
#[cfg(feature = "std")]
use std::vec::Vec;

// External dependencies
use num_traits::Float;

// Internal dependencies
use crate::algorithms::intervals::KnotIntervalTracker;

// ============================================================================
// Knot Set Construction
// ============================================================================

/// Fill `knots` with `n` knots whose boundary knots are `xb` and `xe`.
///
/// Interior entries are left untouched when the vector already holds `n` knots.
pub fn set_boundary_knots<T: Float>(knots: &mut Vec<T>, n: usize, k: usize, xb: T, xe: T) {
    knots.resize(n, xb);
    for i in 0..=k {
        knots[i] = xb;
        knots[n - 1 - i] = xe;
    }
}

/// Knot vector of the polynomial fit: `k + 1` copies of `xb` then of `xe`.
pub fn polynomial_knots<T: Float>(knots: &mut Vec<T>, k: usize, xb: T, xe: T) {
    knots.clear();
    set_boundary_knots(knots, 2 * (k + 1), k, xb, xe);
}

/// Knot vector of the interpolating spline through all `m` abscissas.
///
/// For odd `k` the interior knots are the abscissas `x[k/2 + 1 ..]`, for even
/// `k` the midpoints between consecutive abscissas, giving `n = m + k + 1`.
pub fn interpolation_knots<T: Float>(knots: &mut Vec<T>, x: &[T], k: usize, xb: T, xe: T) {
    let m = x.len();
    let k1 = k + 1;
    let half = T::from(0.5).unwrap();
    let offset = k / 2 + 1;

    knots.clear();
    set_boundary_knots(knots, m + k1, k, xb, xe);
    for i in 0..m - k1 {
        knots[k1 + i] = if k % 2 == 1 {
            x[offset + i]
        } else {
            (x[offset + i] + x[offset + i - 1]) * half
        };
    }
}

// ============================================================================
// Knot Insertion
// ============================================================================

/// Insert one knot into the worst-fitting interval that still holds interior
/// data points.
///
/// `residuals` are the per-point weighted squared residuals of the last pass.
/// Returns `false` when no interval can take another knot.
pub fn insert_knot<T: Float>(
    knots: &mut Vec<T>,
    k: usize,
    x: &[T],
    residuals: &[T],
    table: &mut KnotIntervalTracker<T>,
) -> bool {
    let Some((number, fpmax)) = table.worst_interval() else {
        return false;
    };

    let maxpt = table.nrdata[number];
    let begin = table.data_begin(number);
    let offset = centroid_offset(&x[begin + 1..=begin + maxpt], &residuals[begin + 1..=begin + maxpt]);

    let left = offset;
    let right = maxpt - offset - 1;
    let total = T::from(maxpt).unwrap();
    table.nrdata[number] = left;
    table.nrdata.insert(number + 1, right);
    table.fpint[number] = fpmax * T::from(left).unwrap() / total;
    table.fpint.insert(number + 1, fpmax * T::from(right).unwrap() / total);

    knots.insert(number + k + 1, x[begin + 1 + offset]);
    true
}

/// Zero-based position among `xs` of the point nearest the residual-weighted
/// centroid, or of the median point when all residuals vanish.
fn centroid_offset<T: Float>(xs: &[T], residuals: &[T]) -> usize {
    let weight = residuals.iter().fold(T::zero(), |acc, &r| acc + r);
    if !(weight > T::zero()) || !weight.is_finite() {
        return xs.len() / 2;
    }

    let centroid = xs
        .iter()
        .zip(residuals)
        .fold(T::zero(), |acc, (&x, &r)| acc + x * r)
        / weight;

    let mut best = 0;
    let mut best_distance = (xs[0] - centroid).abs();
    for (i, &x) in xs.iter().enumerate().skip(1) {
        let distance = (x - centroid).abs();
        if distance < best_distance {
            best = i;
            best_distance = distance;
        }
    }
    best
}

// ============================================================================
// Growth Policy
// ============================================================================

/// Number of knots to add after a pass with residual `fp`.
///
/// `previous` is the count added after the last pass, `None` when leaving the
/// polynomial knot set. `fpms = fp - s` and `fpold` is the previous pass residual.
pub fn growth_count<T: Float>(previous: Option<usize>, fp: T, fpms: T, fpold: T, acc: T) -> usize {
    let Some(nplus) = previous else {
        return 1;
    };

    let mut npl1 = 2 * nplus;
    let decrease = fpold - fp;
    if decrease > acc {
        let estimate = (T::from(nplus).unwrap() * fpms / decrease).floor();
        npl1 = estimate.to_usize().unwrap_or(npl1);
    }
    (2 * nplus).min(npl1.max(nplus / 2).max(1))
}
