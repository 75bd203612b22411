//! Banded least-squares reduction by Givens rotations.
//!
//! ## Purpose
//!
//! This module computes the least-squares spline for a fixed knot vector. Each
//! observation row (the `k + 1` nonzero weighted basis values of one point) is
//! rotated into an upper-triangular band of width `k + 1`, one Givens rotation
//! per nonzero value. What is rotated out of the right-hand side accumulates
//! into the weighted residual sum `fp`, so no residuals need to be recomputed
//! for the unpenalized fit.
//!
//! The penalized variant takes the reduced system, rotates in one row of
//! `k`-th derivative jumps per interior knot scaled by `1/p`, and solves the
//! resulting band of width `k + 2`.
//!
//! ## Design notes
//!
//! * **Streaming**: Points are processed in ascending order with a monotone
//!   interval pointer; no normal equations are ever formed.
//! * **Cached basis**: Each point's unweighted basis row and interval index are
//!   stored so the penalized fits can recompute residuals without re-evaluating
//!   the basis.
//! * **Workspace**: All storage lives in the caller's [`FitWorkspace`].
//!
//! ## Key concepts
//!
//! * **Observation row**: `(w_i N_{l-k}(x_i), ..., w_i N_l(x_i) | w_i y_i)`.
//! * **Rotated residual**: The part of `w_i y_i` left over after the row has been
//!   annihilated; its square is that point's contribution to `fp`.
//! * **Penalty row**: Row of the jump matrix, `k + 2` wide, starting at the
//!   column of its interior knot.
//!
//! ## Invariants
//!
//! * The diagonal of the reduced band is non-negative.
//! * `fp` equals `Σ (w_i (s(x_i) - y_i))²` for the returned coefficients.
//!
//! ## Non-goals
//!
//! * This module does not choose knots or the penalty weight.

// Feature-gated imports
#[cfg(not(feature = "std"))]
use alloc::vec::Vec;
#[cfg(feature = "std")]
use std::vec::Vec;

// External dependencies
use num_traits::Float;

// Internal dependencies
use crate::math::backsub::back_substitute;
use crate::math::bspline::{basis_functions, MAX_DEGREE};
use crate::math::givens::{apply_rotation, rotate_into};
use crate::primitives::buffer::FitWorkspace;
use crate::primitives::data::Observations;
use crate::primitives::errors::SplineError;

// ============================================================================
// Least-Squares Reduction
// ============================================================================

/// Fit the least-squares spline of degree `k` on `knots`.
///
/// On return the workspace holds the reduced band (`observation`, `rhs`), the
/// coefficients, and the cached basis rows and interval indices of every
/// point. Returns the weighted residual sum `fp`.
pub fn reduce_observations<T: Float>(
    data: &Observations<'_, T>,
    knots: &[T],
    k: usize,
    ws: &mut FitWorkspace<T>,
) -> Result<T, SplineError> {
    let k1 = k + 1;
    let n = knots.len();
    let nk1 = n - k1;
    let m = data.len();

    ws.observation.reset(nk1);
    ws.rhs.reset(nk1, T::zero());
    ws.basis_rows.reset(m);
    ws.spans.reset(m, 0);

    let mut fp = T::zero();
    let mut l = k;
    let mut h = [T::zero(); MAX_DEGREE + 1];

    for it in 0..m {
        let xi = data.x[it];
        let wi = data.w[it];

        while l + 1 < nk1 && xi >= knots[l + 1] {
            l += 1;
        }

        basis_functions(knots, k, xi, l, &mut h);
        ws.basis_rows.row_mut(it)[..k1].copy_from_slice(&h[..k1]);
        ws.spans[it] = l;

        for hj in h[..k1].iter_mut() {
            *hj = *hj * wi;
        }
        let mut yi = data.y[it] * wi;

        let first = l - k;
        for i in 0..k1 {
            let piv = h[i];
            if piv == T::zero() {
                continue;
            }
            let j = first + i;
            let rotation = rotate_into(piv, &mut ws.observation[(j, 0)]);
            apply_rotation(rotation, &mut yi, &mut ws.rhs[j]);
            if i == k {
                break;
            }
            for i1 in i + 1..k1 {
                apply_rotation(rotation, &mut h[i1], &mut ws.observation[(j, i1 - i)]);
            }
        }

        fp = fp + yi * yi;
    }

    ws.coefficients.reset(nk1, T::zero());
    back_substitute(&ws.observation, &ws.rhs, nk1, k1, &mut ws.coefficients)?;

    Ok(fp)
}

// ============================================================================
// Penalized Fit
// ============================================================================

/// Fit the penalized spline for penalty weight `p`.
///
/// Requires a preceding [`reduce_observations`] on the same knots and the jump
/// rows in `ws.jumps`. The coefficients land in `ws.penalized_coefficients`.
/// Returns the weighted residual sum of the penalized spline.
pub fn penalized_fit<T: Float>(
    data: &Observations<'_, T>,
    knots: &[T],
    k: usize,
    p: T,
    ws: &mut FitWorkspace<T>,
) -> Result<T, SplineError> {
    let k1 = k + 1;
    let k2 = k + 2;
    let n = knots.len();
    let nk1 = n - k1;
    let n8 = n - 2 * k1;
    let pinv = T::one() / p;

    ws.penalized.copy_from(&ws.observation);
    ws.penalized_rhs.clear();
    ws.penalized_rhs.extend_from_slice(&ws.rhs[..nk1]);

    let mut h = [T::zero(); MAX_DEGREE + 2];
    for it in 0..n8 {
        for (hi, &bi) in h[..k2].iter_mut().zip(ws.jumps.row(it)) {
            *hi = bi * pinv;
        }
        let mut yi = T::zero();

        for j in it..nk1 {
            let rotation = rotate_into(h[0], &mut ws.penalized[(j, 0)]);
            apply_rotation(rotation, &mut yi, &mut ws.penalized_rhs[j]);
            if j == nk1 - 1 {
                break;
            }
            let i2 = if j + 1 > n8 { nk1 - j - 1 } else { k1 };
            for i in 0..i2 {
                apply_rotation(rotation, &mut h[i + 1], &mut ws.penalized[(j, i + 1)]);
                h[i] = h[i + 1];
            }
            h[i2] = T::zero();
        }
    }

    ws.penalized_coefficients.reset(nk1, T::zero());
    back_substitute(
        &ws.penalized,
        &ws.penalized_rhs,
        nk1,
        k2,
        &mut ws.penalized_coefficients,
    )?;

    Ok(residual_sum(data, k, ws, &ws.penalized_coefficients))
}

// ============================================================================
// Residuals
// ============================================================================

/// Spline value at data point `it` under `coefficients`.
#[inline]
pub fn point_value<T: Float>(k: usize, ws: &FitWorkspace<T>, coefficients: &[T], it: usize) -> T {
    let first = ws.spans[it] - k;
    ws.basis_rows.row(it)[..=k]
        .iter()
        .enumerate()
        .fold(T::zero(), |acc, (j, &q)| acc + coefficients[first + j] * q)
}

/// Weighted squared residual of point `it` under `coefficients`.
#[inline]
pub fn point_residual<T: Float>(
    data: &Observations<'_, T>,
    k: usize,
    ws: &FitWorkspace<T>,
    coefficients: &[T],
    it: usize,
) -> T {
    let r = data.w[it] * (point_value(k, ws, coefficients, it) - data.y[it]);
    r * r
}

/// `Σ (w_i (s(x_i) - y_i))²` using the cached basis rows.
pub fn residual_sum<T: Float>(
    data: &Observations<'_, T>,
    k: usize,
    ws: &FitWorkspace<T>,
    coefficients: &[T],
) -> T {
    (0..data.len()).fold(T::zero(), |acc, it| {
        acc + point_residual(data, k, ws, coefficients, it)
    })
}

/// Spline values at all data points using the cached basis rows.
pub fn fitted_values<T: Float>(m: usize, k: usize, ws: &FitWorkspace<T>, coefficients: &[T]) -> Vec<T> {
    (0..m).map(|it| point_value(k, ws, coefficients, it)).collect()
}
