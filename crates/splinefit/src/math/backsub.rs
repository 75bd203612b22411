//! Back-substitution for banded upper-triangular systems.
//!
//! ## Purpose
//!
//! Solves `A c = z` where `A` is `n × n` upper triangular with bandwidth `bw`,
//! stored as a [`BandedMatrix`] (column `0` of row `i` is the diagonal).
//!
//! ## Invariants
//!
//! * Only the first `bw` columns of each row are read.
//! * A diagonal that is zero, or negligible against the largest diagonal
//!   (`|a_ii| <= eps * max |a_jj|`), is reported as
//!   [`SplineError::SingularSystem`] rather than producing meaningless coefficients.

// Internal dependencies
use crate::primitives::banded::BandedMatrix;
use crate::primitives::errors::SplineError;

// External dependencies
use num_traits::Float;

/// Solve the `n × n` banded triangular system in `a` with right-hand side `z`.
///
/// The solution is written into `c[..n]`.
pub fn back_substitute<T: Float>(
    a: &BandedMatrix<T>,
    z: &[T],
    n: usize,
    bw: usize,
    c: &mut [T],
) -> Result<(), SplineError> {
    if n == 0 {
        return Ok(());
    }

    let scale = (0..n).fold(T::zero(), |acc, i| acc.max(a[(i, 0)].abs()));
    let negligible = T::epsilon() * scale;

    let last = n - 1;
    let diag = a[(last, 0)];
    if diag.abs() <= negligible {
        return Err(SplineError::SingularSystem { row: last });
    }
    c[last] = z[last] / diag;

    for i in (0..last).rev() {
        let reach = (bw - 1).min(last - i);
        let mut store = z[i];
        for l in 1..=reach {
            store = store - c[i + l] * a[(i, l)];
        }
        let diag = a[(i, 0)];
        if diag.abs() <= negligible {
            return Err(SplineError::SingularSystem { row: i });
        }
        c[i] = store / diag;
    }

    Ok(())
}
