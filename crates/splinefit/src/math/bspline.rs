//! B-spline basis evaluation.
//!
//! ## Purpose
//!
//! This module evaluates the `k + 1` B-spline basis functions that are nonzero
//! at a point, and builds spline values and derivatives on top of them.
//!
//! ## Design notes
//!
//! * **De Boor–Cox**: The stable triangular recurrence of order `k`, one
//!   degree at a time, with no division by zero: a recurrence term whose two
//!   knots coincide contributes zero.
//! * **No allocation**: Scratch space is a fixed array sized for the maximum degree.
//! * **Generics**: All functions are generic over `Float` types.
//!
//! ## Key concepts
//!
//! * **Knot interval**: Index `l` with `t[l] <= x < t[l + 1]`, `k <= l <= n - k - 2`.
//!   The nonzero basis functions at `x` are `N_{l-k}, ..., N_l`.
//! * **Clamping**: Points at or beyond the right boundary use the last interval,
//!   points left of the domain use the first, so evaluation extrapolates the
//!   end polynomial pieces.
//! * **Derivatives**: Coefficients of the derivative spline follow from
//!   `d_i = k (c_{i+1} - c_i) / (t_{i+k+1} - t_{i+1})` on the knot vector
//!   without its first and last knot.
//!
//! ## Invariants
//!
//! * The basis values at any point inside the domain sum to one.
//! * The degree never exceeds [`MAX_DEGREE`].

// Feature-gated imports
#[cfg(not(feature = "std"))]
use alloc::vec::Vec;
#[cfg(feature = "std")]
use std::vec::Vec;

// External dependencies
use num_traits::Float;

/// Highest supported spline degree.
pub const MAX_DEGREE: usize = 5;

// ============================================================================
// Interval Location
// ============================================================================

/// Find the knot interval `l` containing `x`, clamped to `[k, n - k - 2]`.
#[inline]
pub fn locate_interval<T: Float>(knots: &[T], k: usize, x: T) -> usize {
    let nk1 = knots.len() - k - 1;
    k + knots[k + 1..nk1].partition_point(|&t| t <= x)
}

// ============================================================================
// Basis Evaluation
// ============================================================================

/// Evaluate the `k + 1` nonzero basis functions at `x` into `out[..=k]`.
///
/// `out[i]` holds `N_{l-k+i}(x)`. The caller guarantees `t[l] <= x < t[l + 1]`
/// (or the clamped end intervals) and `out.len() > k`.
pub fn basis_functions<T: Float>(knots: &[T], k: usize, x: T, l: usize, out: &mut [T]) {
    debug_assert!(k <= MAX_DEGREE, "basis_functions: degree {k} exceeds maximum");
    let mut previous = [T::zero(); MAX_DEGREE + 1];

    out[0] = T::one();
    for j in 1..=k {
        previous[..j].copy_from_slice(&out[..j]);
        out[0] = T::zero();
        for i in 1..=j {
            let right = knots[l + i];
            let left = knots[l + i - j];
            if right == left {
                out[i] = T::zero();
                continue;
            }
            let f = previous[i - 1] / (right - left);
            out[i - 1] = out[i - 1] + f * (right - x);
            out[i] = f * (x - left);
        }
    }
}

// ============================================================================
// Spline Evaluation
// ============================================================================

/// Evaluate the spline `sum c_i N_i(x)` of degree `k`.
pub fn evaluate<T: Float>(knots: &[T], coefficients: &[T], k: usize, x: T) -> T {
    let l = locate_interval(knots, k, x);
    let mut h = [T::zero(); MAX_DEGREE + 1];
    basis_functions(knots, k, x, l, &mut h);

    let base = l - k;
    h[..=k]
        .iter()
        .enumerate()
        .fold(T::zero(), |acc, (j, &hj)| acc + coefficients[base + j] * hj)
}

/// Coefficients of the first derivative of a degree-`k` spline.
///
/// The derivative spline has degree `k - 1` and lives on `knots[1..n - 1]`.
pub fn derivative_coefficients<T: Float>(knots: &[T], coefficients: &[T], k: usize) -> Vec<T> {
    let ncoef = knots.len() - k - 1;
    let kk = T::from(k).unwrap_or_else(T::one);
    (0..ncoef - 1)
        .map(|i| {
            let span = knots[i + k + 1] - knots[i + 1];
            if span > T::zero() {
                kk * (coefficients[i + 1] - coefficients[i]) / span
            } else {
                T::zero()
            }
        })
        .collect()
}

/// Evaluate the `nu`-th derivative of the spline at `x`.
///
/// Derivatives of order greater than `k` are identically zero.
pub fn derivative<T: Float>(knots: &[T], coefficients: &[T], k: usize, x: T, nu: usize) -> T {
    if nu == 0 {
        return evaluate(knots, coefficients, k, x);
    }
    if nu > k {
        return T::zero();
    }

    let n = knots.len();
    let mut coefs: Vec<T> = coefficients[..n - k - 1].to_vec();
    for order in 0..nu {
        let reduced = &knots[order..n - order];
        coefs = derivative_coefficients(reduced, &coefs, k - order);
    }
    evaluate(&knots[nu..n - nu], &coefs, k - nu, x)
}
