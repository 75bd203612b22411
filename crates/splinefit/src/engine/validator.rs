//! Input validation for spline configuration and data.
//!
//! ## Purpose
//!
//! This module provides the validation functions run before any fit: input
//! shape and finiteness, ordering and weights, the approximation interval,
//! degree, smoothing factor, tolerance, knot storage, caller-supplied
//! knot vectors (including the Schoenberg–Whitney conditions), and carried-over
//! session state.
//!
//! ## Design notes
//!
//! * **Fail-Fast**: Validation stops at the first error encountered.
//! * **Efficiency**: Checks are ordered from cheap to expensive.
//! * **Generics**: Validation is generic over `Float` types.
//!
//! ## Key concepts
//!
//! * **Schoenberg–Whitney**: A knot vector admits a unique least-squares spline
//!   only if a strictly increasing subsequence of abscissas can be matched to
//!   the basis functions so that each lies in the interior of its support.
//!
//! ## Invariants
//!
//! * All validated inputs satisfy their respective mathematical constraints.
//! * Validation logic is deterministic and side-effect free.
//!
//! ## Non-goals
//!
//! * This module does not sort, transform, or filter input data.
//! * This module does not provide automatic correction of invalid inputs.
//! * This module does not perform the fit itself.

// Feature-gated imports
#[cfg(not(feature = "std"))]
use alloc::format;

// External dependencies
use core::cmp::Ordering;
use num_traits::Float;

// Internal dependencies
use crate::algorithms::intervals::KnotIntervalTracker;
use crate::engine::session::KnotState;
use crate::math::bspline::MAX_DEGREE;
use crate::primitives::errors::SplineError;

// ============================================================================
// Validator
// ============================================================================

/// Validation utility for spline configuration and input data.
///
/// Provides static methods for validating the fit parameters and input data.
/// All methods return `Result<(), SplineError>` and fail fast upon identifying
/// the first violation.
pub struct Validator;

impl Validator {
    // ========================================================================
    // Core Input Validation
    // ========================================================================

    /// Validate the data arrays: non-empty, equal lengths, finite values.
    pub fn validate_inputs<T: Float>(x: &[T], y: &[T], w: Option<&[T]>) -> Result<(), SplineError> {
        // Check 1: Non-empty arrays
        if x.is_empty() || y.is_empty() {
            return Err(SplineError::EmptyInput);
        }

        // Check 2: Matching lengths
        let m = x.len();
        if m != y.len() {
            return Err(SplineError::MismatchedInputs {
                x_len: m,
                other_len: y.len(),
            });
        }
        if let Some(w) = w {
            if m != w.len() {
                return Err(SplineError::MismatchedInputs {
                    x_len: m,
                    other_len: w.len(),
                });
            }
        }

        // Check 3: All values finite
        for i in 0..m {
            Self::validate_scalar(x[i], "x", i)?;
            Self::validate_scalar(y[i], "y", i)?;
            if let Some(w) = w {
                Self::validate_scalar(w[i], "w", i)?;
            }
        }

        Ok(())
    }

    /// Validate a single array element for finiteness.
    pub fn validate_scalar<T: Float>(val: T, name: &str, index: usize) -> Result<(), SplineError> {
        if !val.is_finite() {
            return Err(SplineError::InvalidNumericValue(format!(
                "{}[{}]={}",
                name,
                index,
                val.to_f64().unwrap_or(f64::NAN)
            )));
        }
        Ok(())
    }

    /// Validate that abscissas are strictly ascending.
    pub fn validate_ascending<T: Float>(x: &[T]) -> Result<(), SplineError> {
        match x.windows(2).position(|pair| pair[1] <= pair[0]) {
            Some(i) => Err(SplineError::UnsortedAbscissas { index: i + 1 }),
            None => Ok(()),
        }
    }

    /// Validate that every weight is strictly positive.
    pub fn validate_weights<T: Float>(w: &[T]) -> Result<(), SplineError> {
        match w.iter().position(|&wi| wi <= T::zero()) {
            Some(index) => Err(SplineError::NonPositiveWeight {
                index,
                value: w[index].to_f64().unwrap_or(f64::NAN),
            }),
            None => Ok(()),
        }
    }

    /// Validate that `[xb, xe]` contains all abscissas.
    pub fn validate_domain<T: Float>(xb: T, xe: T, x: &[T]) -> Result<(), SplineError> {
        let inside = xb.is_finite()
            && xe.is_finite()
            && xb < xe
            && xb <= x[0]
            && xe >= x[x.len() - 1];
        if !inside {
            return Err(SplineError::InvalidDomain {
                xb: xb.to_f64().unwrap_or(f64::NAN),
                xe: xe.to_f64().unwrap_or(f64::NAN),
            });
        }
        Ok(())
    }

    // ========================================================================
    // Parameter Validation
    // ========================================================================

    /// Validate the spline degree.
    pub fn validate_degree(k: usize) -> Result<(), SplineError> {
        if k == 0 || k > MAX_DEGREE {
            return Err(SplineError::InvalidDegree(k));
        }
        Ok(())
    }

    /// Validate that there are more points than the degree.
    pub fn validate_min_points(m: usize, k: usize) -> Result<(), SplineError> {
        if m <= k {
            return Err(SplineError::TooFewPoints { got: m, min: k + 1 });
        }
        Ok(())
    }

    /// Validate the smoothing factor `s >= 0`.
    pub fn validate_smoothing_factor<T: Float>(s: T) -> Result<(), SplineError> {
        if !s.is_finite() || s < T::zero() {
            return Err(SplineError::InvalidSmoothingFactor(
                s.to_f64().unwrap_or(f64::NAN),
            ));
        }
        Ok(())
    }

    /// Validate the relative tolerance `0 < tol < 1`.
    pub fn validate_tolerance<T: Float>(tol: T) -> Result<(), SplineError> {
        if !tol.is_finite() || tol <= T::zero() || tol >= T::one() {
            return Err(SplineError::InvalidTolerance(
                tol.to_f64().unwrap_or(f64::NAN),
            ));
        }
        Ok(())
    }

    /// Validate the iteration cap of the penalty search.
    pub fn validate_iterations(max_iterations: usize) -> Result<(), SplineError> {
        if max_iterations == 0 {
            return Err(SplineError::InvalidIterations(max_iterations));
        }
        Ok(())
    }

    /// Validate the knot storage ceiling.
    ///
    /// At least the polynomial knot set must fit, and an interpolating fit
    /// (`s = 0`) needs room for `m + k + 1` knots.
    pub fn validate_storage<T: Float>(nest: usize, k: usize, m: usize, s: T) -> Result<(), SplineError> {
        let nmin = 2 * (k + 1);
        if nest < nmin {
            return Err(SplineError::InsufficientStorage { got: nest, min: nmin });
        }
        let nmax = m + k + 1;
        if s == T::zero() && nest < nmax {
            return Err(SplineError::InsufficientStorage { got: nest, min: nmax });
        }
        Ok(())
    }

    // ========================================================================
    // Knot Validation
    // ========================================================================

    /// Validate a complete knot vector against the data.
    ///
    /// Checks the number of basis functions, the ordering of the boundary and
    /// interior knots, coverage of the data, and the Schoenberg–Whitney conditions.
    pub fn validate_knots<T: Float>(knots: &[T], k: usize, x: &[T]) -> Result<(), SplineError> {
        let n = knots.len();
        let m = x.len();
        let k1 = k + 1;
        if n < 2 * k1 {
            return Err(SplineError::InvalidKnots(format!(
                "{} knots given, a degree {} spline needs at least {}",
                n,
                k,
                2 * k1
            )));
        }
        let nk1 = n - k1;

        // Check 1: no more basis functions than data points
        if nk1 > m {
            return Err(SplineError::InvalidKnots(format!(
                "{} basis functions exceed the {} data points",
                nk1, m
            )));
        }

        // Check 2: boundary knots are non-decreasing
        for i in 0..k {
            if knots[i] > knots[i + 1] || knots[n - 1 - i] < knots[n - 2 - i] {
                return Err(SplineError::InvalidKnots(format!(
                    "boundary knots are not ordered near position {}",
                    i
                )));
            }
        }

        // Check 3: interior knots strictly increasing and strictly inside the domain
        for i in k1..=nk1 {
            if knots[i] <= knots[i - 1] {
                return Err(SplineError::InvalidKnots(format!(
                    "knot {} is not greater than its predecessor",
                    i
                )));
            }
        }

        // Check 4: the domain covers the data
        if x[0] < knots[k] || x[m - 1] > knots[nk1] {
            return Err(SplineError::InvalidKnots(format!(
                "data range [{}, {}] is not covered by the knot domain",
                x[0].to_f64().unwrap_or(f64::NAN),
                x[m - 1].to_f64().unwrap_or(f64::NAN)
            )));
        }

        Self::validate_schoenberg_whitney(knots, k, x)
    }

    /// Validate the Schoenberg–Whitney conditions with a greedy matching of
    /// abscissas to basis functions.
    pub fn validate_schoenberg_whitney<T: Float>(knots: &[T], k: usize, x: &[T]) -> Result<(), SplineError> {
        let n = knots.len();
        let m = x.len();
        let nk1 = n - k - 1;

        if x[0] >= knots[k + 1] {
            return Err(SplineError::SchoenbergWhitney { basis: 0 });
        }
        if x[m - 1] <= knots[nk1 - 1] {
            return Err(SplineError::SchoenbergWhitney { basis: nk1 - 1 });
        }

        let mut i = 0;
        for basis in 1..nk1.saturating_sub(1) {
            let left = knots[basis];
            let right = knots[basis + k + 1];
            loop {
                i += 1;
                if i >= m - 1 {
                    return Err(SplineError::SchoenbergWhitney { basis });
                }
                if x[i] > left {
                    break;
                }
            }
            if x[i] >= right {
                return Err(SplineError::SchoenbergWhitney { basis });
            }
        }

        Ok(())
    }

    // ========================================================================
    // Builder Validation
    // ========================================================================

    /// Validate that no parameters were set multiple times in the builder.
    pub fn validate_no_duplicates(duplicate_param: Option<&'static str>) -> Result<(), SplineError> {
        if let Some(param) = duplicate_param {
            return Err(SplineError::DuplicateParameter { parameter: param });
        }
        Ok(())
    }

    /// Validate that a resumable session state belongs to a data set of `m` points.
    pub fn validate_session(expected: usize, m: usize) -> Result<(), SplineError> {
        if expected != m {
            return Err(SplineError::SessionMismatch { expected, got: m });
        }
        Ok(())
    }

    /// Validate a carried-over knot placement state against the current data.
    ///
    /// The stored knots must be a valid knot vector for `x` on `[xb, xe]`, and
    /// the interval table must describe those knots. Below the interpolation
    /// knot count, interior knots must also stand on data points, which the
    /// insertion step relies on to locate each interval's data.
    pub fn validate_state<T: Float>(
        state: &KnotState<T>,
        k: usize,
        x: &[T],
        xb: T,
        xe: T,
        nest: usize,
    ) -> Result<(), SplineError> {
        let m = x.len();

        // Check 1: same data size, degree, and room for the stored knots
        Self::validate_session(state.m, m)?;
        if state.degree != k {
            return Err(SplineError::InvalidKnots(format!(
                "session state was built for degree {}, but degree {} was requested",
                state.degree, k
            )));
        }
        let n = state.len();
        if n > nest {
            return Err(SplineError::InsufficientStorage { got: nest, min: n });
        }

        // Check 2: the stored knots fit the domain and the data
        if state.knots.first() != Some(&xb) || state.knots.last() != Some(&xe) {
            return Err(SplineError::InvalidKnots(format!(
                "session knots do not span the domain [{}, {}]",
                xb.to_f64().unwrap_or(f64::NAN),
                xe.to_f64().unwrap_or(f64::NAN)
            )));
        }
        Self::validate_knots(&state.knots, k, x)?;

        // Check 3: one table entry per knot interval
        let nrint = n - 2 * k - 1;
        if state.fpint.len() != nrint || state.nrdata.len() != nrint {
            return Err(SplineError::InvalidKnots(format!(
                "session table has {} residuals and {} counts for {} knot intervals",
                state.fpint.len(),
                state.nrdata.len(),
                nrint
            )));
        }

        // Check 4: the counts match the data
        let counted = KnotIntervalTracker::<T>::count(&state.knots, k, x);
        if let Some(j) = (0..nrint).find(|&j| counted.nrdata[j] != state.nrdata[j]) {
            return Err(SplineError::InvalidKnots(format!(
                "session table holds {} points in interval {}, the data has {}",
                state.nrdata[j], j, counted.nrdata[j]
            )));
        }

        // Check 5: partial knot sets grow from data points
        if n < m + k + 1 {
            let interior = &state.knots[k + 1..n - k - 1];
            let on_data = |t: &T| {
                x.binary_search_by(|xi| xi.partial_cmp(t).unwrap_or(Ordering::Less))
                    .is_ok()
            };
            if let Some(i) = interior.iter().position(|t| !on_data(t)) {
                return Err(SplineError::InvalidKnots(format!(
                    "session knot {} is not a data abscissa",
                    i + k + 1
                )));
            }
        }

        // Check 6: finite residual history
        Self::validate_scalar(state.fp0, "fp0", 0)?;
        Self::validate_scalar(state.fpold, "fpold", 0)?;

        Ok(())
    }
}
