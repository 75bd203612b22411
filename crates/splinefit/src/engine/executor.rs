//! Execution engine for spline fitting.
//!
//! ## Purpose
//!
//! This module provides the driver that orchestrates a fit. It validates the
//! data and configuration, sizes the workspace from the knot storage ceiling,
//! and runs one of three modes:
//!
//! * **Least squares on fixed knots**: a single reduction pass.
//! * **Adaptive fit**: knot placement from the polynomial knot set, followed by
//!   the penalty search when the least-squares spline undershoots `s`.
//! * **Resumed adaptive fit**: as above, but knot placement continues from a
//!   [`KnotState`] left by an earlier fit on the same data.
//!
//! ## Design notes
//!
//! * **Single workspace**: All passes of one call share one [`FitWorkspace`].
//! * **Recoverable stops**: Storage exhaustion and a non-converged penalty
//!   search end the fit with a status, not an error.
//! * **Logging**: Each knot placement pass and penalty iteration is logged at
//!   `debug` level through the `log` facade; recoverable stops at `warn`.
//! * Generic over `Float` types to support f32 and f64.
//!
//! ## Key concepts
//!
//! * **`nmin = 2k + 2`**: No interior knots; the fit is a polynomial.
//! * **`nmax = m + k + 1`**: The least-squares spline interpolates.
//! * **`acc = tol * s`**: Absolute tolerance on `|fp - s|`.
//!
//! ## Invariants
//!
//! * The knot count never exceeds the storage ceiling `nest`.
//! * The knot count only grows during knot placement.
//! * At most `m` knot placement passes are run.
//!
//! ## Non-goals
//!
//! * This module does not format results (handled by adapters and `output`).
//! * This module does not choose the spline degree.

// Feature-gated imports
#[cfg(not(feature = "std"))]
use alloc::vec;
#[cfg(not(feature = "std"))]
use alloc::vec::Vec;
#[cfg(feature = "std")]
use std::vec;
#[cfg(feature = "std")]
use std::vec::Vec;

// External dependencies
use log::{debug, warn};
use num_traits::Float;

// Internal dependencies
use crate::algorithms::intervals::KnotIntervalTracker;
use crate::algorithms::knots::{
    growth_count, insert_knot, interpolation_knots, polynomial_knots, set_boundary_knots,
};
use crate::algorithms::penalty::discontinuity_jumps;
use crate::algorithms::reduction::{fitted_values, penalized_fit, reduce_observations};
use crate::engine::output::FitStatus;
use crate::engine::session::KnotState;
use crate::engine::smoothing::{PenaltyStep, SmoothingParameterSolver};
use crate::engine::validator::Validator;
use crate::primitives::buffer::FitWorkspace;
use crate::primitives::data::Observations;
use crate::primitives::errors::SplineError;

// ============================================================================
// Fit Mode
// ============================================================================

/// How the knots of a fit are obtained.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FitMode {
    /// Least-squares spline on caller-supplied interior knots.
    LeastSquares,

    /// Adaptive knot placement from the polynomial knot set.
    #[default]
    Fresh,

    /// Adaptive knot placement continuing from a previous fit's state.
    Resume,
}

// ============================================================================
// Executor Output
// ============================================================================

/// Output from spline execution.
#[derive(Debug, Clone)]
pub struct ExecutorOutput<T> {
    /// Full knot vector.
    pub knots: Vec<T>,

    /// B-spline coefficients.
    pub coefficients: Vec<T>,

    /// Spline values at the data abscissas.
    pub fitted: Vec<T>,

    /// Achieved weighted residual.
    pub residual: T,

    /// Smoothing factor used (resolved default included).
    pub smoothing_factor: T,

    /// Outcome of the fit.
    pub status: FitStatus,

    /// Final penalty weight, when the smoothing phase ran.
    pub penalty: Option<T>,

    /// Knot placement passes performed.
    pub iterations: usize,

    /// Penalty search iterations performed, when the smoothing phase ran.
    pub penalty_iterations: Option<usize>,

    /// State to resume from (adaptive modes only).
    pub state: Option<KnotState<T>>,
}

// ============================================================================
// Configuration
// ============================================================================

/// Configuration for spline execution.
#[derive(Debug, Clone)]
pub struct SplineConfig<T> {
    /// Spline degree `k` in `[1, 5]`.
    pub degree: usize,

    /// Smoothing factor `s >= 0`. `None` uses the number of data points.
    pub smoothing_factor: Option<T>,

    /// Knot storage ceiling. `None` uses `m + k + 1`.
    pub knot_storage: Option<usize>,

    /// Approximation interval. `None` uses the data range.
    pub domain: Option<(T, T)>,

    /// Relative tolerance on `|fp - s| / s`.
    pub tolerance: T,

    /// Iteration cap of the penalty search.
    pub max_iterations: usize,

    /// Interior knots for [`FitMode::LeastSquares`].
    pub interior_knots: Option<Vec<T>>,

    /// How the knots are obtained.
    pub mode: FitMode,
}

impl<T: Float> Default for SplineConfig<T> {
    fn default() -> Self {
        Self {
            degree: 3,
            smoothing_factor: None,
            knot_storage: None,
            domain: None,
            tolerance: T::from(0.001).unwrap(),
            max_iterations: 20,
            interior_knots: None,
            mode: FitMode::default(),
        }
    }
}

/// Where the knot placement loop stopped.
enum Placement<T> {
    /// Final least-squares fit on the current knots.
    Done(FitStatus),

    /// Hand over to the penalty search; carries `fp - s` at `p = ∞`.
    Smooth(T),
}

/// Floats do not implement `Display` generically; logs go through `f64`.
#[inline]
fn lg<T: Float>(v: T) -> f64 {
    v.to_f64().unwrap_or(f64::NAN)
}

// ============================================================================
// Executor
// ============================================================================

/// Unified executor for spline fitting.
#[derive(Debug, Clone, Copy, Default)]
pub struct SplineExecutor;

impl SplineExecutor {
    // ========================================================================
    // Main Entry Point
    // ========================================================================

    /// Validate the inputs and run the configured fit.
    ///
    /// `w = None` means unit weights. `state` is only consulted in
    /// [`FitMode::Resume`].
    pub fn run<T: Float>(
        x: &[T],
        y: &[T],
        w: Option<&[T]>,
        config: &SplineConfig<T>,
        state: Option<&KnotState<T>>,
    ) -> Result<ExecutorOutput<T>, SplineError> {
        let k = config.degree;
        Validator::validate_degree(k)?;
        Validator::validate_inputs(x, y, w)?;

        let m = x.len();
        Validator::validate_min_points(m, k)?;
        Validator::validate_ascending(x)?;
        if let Some(w) = w {
            Validator::validate_weights(w)?;
        }

        let (xb, xe) = config.domain.unwrap_or((x[0], x[m - 1]));
        Validator::validate_domain(xb, xe, x)?;

        let s = match config.smoothing_factor {
            Some(s) => s,
            None => T::from(m).unwrap_or_else(T::one),
        };
        Validator::validate_smoothing_factor(s)?;
        Validator::validate_tolerance(config.tolerance)?;
        Validator::validate_iterations(config.max_iterations)?;

        let nest = config.knot_storage.unwrap_or(m + k + 1);

        let unit;
        let w = match w {
            Some(w) => w,
            None => {
                unit = vec![T::one(); m];
                &unit[..]
            }
        };
        let data = Observations::new(x, y, w, xb, xe);

        match config.mode {
            FitMode::LeastSquares => {
                let interior = config.interior_knots.as_deref().unwrap_or(&[]);
                Self::fit_fixed_knots(&data, k, interior, nest)
            }
            FitMode::Fresh => Self::fit_adaptive(&data, config, k, s, nest, None),
            FitMode::Resume => {
                if let Some(st) = state {
                    Validator::validate_state(st, k, x, xb, xe, nest)?;
                }
                Self::fit_adaptive(&data, config, k, s, nest, state)
            }
        }
    }

    // ========================================================================
    // Fixed Knots
    // ========================================================================

    /// Least-squares spline on `[xb; k+1] ++ interior ++ [xe; k+1]`.
    fn fit_fixed_knots<T: Float>(
        data: &Observations<'_, T>,
        k: usize,
        interior: &[T],
        nest: usize,
    ) -> Result<ExecutorOutput<T>, SplineError> {
        let k1 = k + 1;
        for (i, &t) in interior.iter().enumerate() {
            Validator::validate_scalar(t, "interior_knots", i)?;
        }

        let n = interior.len() + 2 * k1;
        let mut knots = Vec::with_capacity(n);
        knots.resize(k1, data.xb);
        knots.extend_from_slice(interior);
        knots.resize(n, data.xe);

        Validator::validate_knots(&knots, k, data.x)?;
        if nest < n {
            return Err(SplineError::InsufficientStorage { got: nest, min: n });
        }

        let mut ws = FitWorkspace::new(data.len(), k, n);
        let fp = reduce_observations(data, &knots, k, &mut ws)?;
        debug!("fixed knots: n={}, fp={}", n, lg(fp));

        let fitted = fitted_values(data.len(), k, &ws, &ws.coefficients);
        Ok(ExecutorOutput {
            coefficients: ws.coefficients.as_vec().clone(),
            knots,
            fitted,
            residual: fp,
            smoothing_factor: fp,
            status: FitStatus::LeastSquares,
            penalty: None,
            iterations: 1,
            penalty_iterations: None,
            state: None,
        })
    }

    // ========================================================================
    // Adaptive Fit
    // ========================================================================

    /// Knot placement followed, when needed, by the penalty search.
    fn fit_adaptive<T: Float>(
        data: &Observations<'_, T>,
        config: &SplineConfig<T>,
        k: usize,
        s: T,
        nest: usize,
        state: Option<&KnotState<T>>,
    ) -> Result<ExecutorOutput<T>, SplineError> {
        let m = data.len();
        let k1 = k + 1;
        let nmin = 2 * k1;
        let nmax = m + k1;
        let acc = config.tolerance * s;

        Validator::validate_storage(nest, k, m, s)?;
        let mut ws = FitWorkspace::new(m, k, nest.min(nmax).max(nmin));
        let mut knots: Vec<T> = Vec::with_capacity(nest);

        // Interpolating spline
        if s == T::zero() {
            interpolation_knots(&mut knots, data.x, k, data.xb, data.xe);
            let fp = reduce_observations(data, &knots, k, &mut ws)?;
            debug!("interpolating: n={}, fp={}", knots.len(), lg(fp));

            let fitted = fitted_values(m, k, &ws, &ws.coefficients);
            return Ok(ExecutorOutput {
                coefficients: ws.coefficients.as_vec().clone(),
                knots,
                fitted,
                residual: fp,
                smoothing_factor: s,
                status: FitStatus::Interpolating,
                penalty: None,
                iterations: 1,
                penalty_iterations: None,
                state: None,
            });
        }

        // Starting knot set
        let mut fp0 = T::zero();
        let mut fpold = T::zero();
        let mut nplus: Option<usize> = None;
        let mut table;
        match state.filter(|st| !st.is_polynomial() && st.fp0 > s) {
            Some(st) => {
                debug!("resuming from {} knots (fp0={})", st.len(), lg(st.fp0));
                knots.extend_from_slice(&st.knots);
                table = KnotIntervalTracker::from_parts(st.fpint.clone(), st.nrdata.clone());
                fp0 = st.fp0;
                fpold = st.fpold;
                nplus = Some(st.nplus).filter(|&c| c > 0);
            }
            None => {
                polynomial_knots(&mut knots, k, data.xb, data.xe);
                table = KnotIntervalTracker::polynomial(m, nest);
            }
        }

        // Knot placement
        let mut fp = T::zero();
        let mut passes = 0;
        let placement = loop {
            if passes == m {
                warn!("knot placement stopped after {} passes", passes);
                break Placement::Done(FitStatus::NotConverged);
            }
            passes += 1;

            let n = knots.len();
            set_boundary_knots(&mut knots, n, k, data.xb, data.xe);
            fp = reduce_observations(data, &knots, k, &mut ws)?;
            if n == nmin {
                fp0 = fp;
            }
            let fpms = fp - s;
            debug!(
                "knot placement pass {}: n={}, fp={}, s={}",
                passes,
                n,
                lg(fp),
                lg(s)
            );

            if fpms.abs() < acc {
                let status = if n == nmin {
                    FitStatus::Polynomial
                } else {
                    FitStatus::Converged
                };
                break Placement::Done(status);
            }
            if fpms < T::zero() {
                if n == nmin {
                    break Placement::Done(FitStatus::Polynomial);
                }
                break Placement::Smooth(fpms);
            }
            if n == nmax {
                break Placement::Done(FitStatus::Interpolating);
            }
            if n == nest {
                warn!(
                    "knot storage exhausted at n={} with fp={} > s={}",
                    n,
                    lg(fp),
                    lg(s)
                );
                break Placement::Done(FitStatus::StorageExceeded);
            }

            let previous = if n == nmin { None } else { nplus };
            let count = growth_count(previous, fp, fpms, fpold, acc);
            nplus = Some(count);
            fpold = fp;
            table.update(data, k, &mut ws);

            let mut added = 0;
            for _ in 0..count {
                if !insert_knot(&mut knots, k, data.x, &ws.point_residuals, &mut table) {
                    break;
                }
                added += 1;
                if knots.len() == nmax {
                    interpolation_knots(&mut knots, data.x, k, data.xb, data.xe);
                    table = KnotIntervalTracker::count(&knots, k, data.x);
                    break;
                }
                if knots.len() == nest {
                    break;
                }
            }
            if added == 0 {
                warn!("no knot interval can take another knot at n={}", n);
                break Placement::Done(FitStatus::StorageExceeded);
            }
        };

        let n = knots.len();
        let carry = |table: KnotIntervalTracker<T>, knots: &[T], fpold: T, nplus: Option<usize>| {
            KnotState {
                knots: knots.to_vec(),
                fpint: table.fpint,
                nrdata: table.nrdata,
                fp0,
                fpold,
                nplus: nplus.unwrap_or(0),
                degree: k,
                m,
            }
        };

        let fpms = match placement {
            Placement::Done(status) => {
                let fitted = fitted_values(m, k, &ws, &ws.coefficients);
                return Ok(ExecutorOutput {
                    coefficients: ws.coefficients.as_vec().clone(),
                    state: Some(carry(table, &knots, fpold, nplus)),
                    knots,
                    fitted,
                    residual: fp,
                    smoothing_factor: s,
                    status,
                    penalty: None,
                    iterations: passes,
                    penalty_iterations: None,
                });
            }
            Placement::Smooth(fpms) => fpms,
        };

        // Penalty search
        discontinuity_jumps(&knots, k, &mut ws.jumps);
        let nk1 = n - k1;
        let initial = T::from(nk1).unwrap_or_else(T::one) / ws.observation.diagonal_sum();
        let mut solver =
            SmoothingParameterSolver::new(fp0 - s, fpms, initial, acc, config.max_iterations);

        let mut iteration = 0;
        let (status, p, fpp) = loop {
            iteration += 1;
            let p = solver.current();
            let fpp = penalized_fit(data, &knots, k, p, &mut ws)?;
            debug!(
                "penalty iteration {}: p={}, fp={}, s={}",
                iteration,
                lg(p),
                lg(fpp),
                lg(s)
            );

            match solver.advance(iteration, fpp - s)? {
                PenaltyStep::Converged => break (FitStatus::Converged, p, fpp),
                PenaltyStep::Exhausted => {
                    warn!(
                        "penalty search stopped after {} iterations with fp={} (s={})",
                        iteration,
                        lg(fpp),
                        lg(s)
                    );
                    break (FitStatus::NotConverged, p, fpp);
                }
                PenaltyStep::Next(_) => {}
            }
        };

        let fitted = fitted_values(m, k, &ws, &ws.penalized_coefficients);
        Ok(ExecutorOutput {
            coefficients: ws.penalized_coefficients.as_vec().clone(),
            state: Some(carry(table, &knots, fpold, nplus)),
            knots,
            fitted,
            residual: fpp,
            smoothing_factor: s,
            status,
            penalty: Some(p),
            iterations: passes,
            penalty_iterations: Some(iteration),
        })
    }
}
