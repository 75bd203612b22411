//! Discontinuity jumps of the `k`-th derivative.
//!
//! ## Purpose
//!
//! The smoothing penalty of the fit is the sum of squared jumps of the `k`-th
//! derivative of the spline at its interior knots. Each jump is a linear
//! combination of `k + 2` consecutive coefficients; this module computes those
//! combinations as the rows of a band matrix of width `k + 2`, one row per
//! interior knot.
//!
//! ## Key concepts
//!
//! * **Scaling**: Rows are divided by `(nrint / (xe - xb))^k` so the penalty is
//!   insensitive to the length of the domain and the number of intervals.
//!
//! ## Invariants
//!
//! * Row `r` belongs to interior knot `t[k + 1 + r]` and starts at column `r`.
//! * Applied to the coefficients of a global polynomial, every row gives zero.

// External dependencies
use num_traits::Float;

// Internal dependencies
use crate::math::bspline::MAX_DEGREE;
use crate::primitives::banded::BandedMatrix;

/// Fill `jumps` with the scaled discontinuity jump rows for `knots`.
pub fn discontinuity_jumps<T: Float>(knots: &[T], k: usize, jumps: &mut BandedMatrix<T>) {
    let k1 = k + 1;
    let k2 = k + 2;
    let n = knots.len();
    let nk1 = n - k1;
    let nrint = nk1 - k;

    let span = knots[nk1] - knots[k];
    let fac = T::from(nrint).unwrap() / span;
    let scale = fac.powi(k as i32);

    jumps.reset(n - 2 * k1);

    let mut h = [T::zero(); 2 * (MAX_DEGREE + 1)];
    for l0 in k1..nk1 {
        let row = l0 - k1;
        for jj in 0..k1 {
            h[jj] = knots[l0] - knots[l0 - k1 + jj];
            h[jj + k1] = knots[l0] - knots[l0 + 1 + jj];
        }

        for jj in 0..k2 {
            let prod = h[jj..=jj + k].iter().fold(T::one(), |acc, &v| acc * v) * scale;
            jumps[(row, jj)] = (knots[row + jj + k1] - knots[row + jj]) / prod;
        }
    }
}
