//! Fixed-knot adapter for least-squares splines.
//!
//! ## Purpose
//!
//! This module fits the weighted least-squares spline on interior knots given
//! by the caller. No knots are placed and no penalty is applied.
//!
//! ## Design notes
//!
//! * **Validation**: The knot vector is checked against the data before fitting,
//!   including the Schoenberg–Whitney conditions that make the fit unique.
//! * **Delegation**: Delegates computation to the execution engine.
//!
//! ## Invariants
//!
//! * Interior knots are strictly increasing and strictly inside the domain.
//!
//! ## Non-goals
//!
//! * This adapter does not use a smoothing factor.

// Feature-gated imports
#[cfg(not(feature = "std"))]
use alloc::vec::Vec;
#[cfg(feature = "std")]
use std::vec::Vec;

// External dependencies
use num_traits::Float;

// Internal dependencies
use crate::engine::executor::{FitMode, SplineConfig, SplineExecutor};
use crate::engine::output::FitResult;
use crate::engine::validator::Validator;
use crate::primitives::errors::SplineError;

// ============================================================================
// Fixed-Knot Spline Builder
// ============================================================================

/// Builder for the least-squares spline on fixed knots.
#[derive(Debug, Clone)]
pub struct FixedKnotSplineBuilder<T: Float> {
    /// Spline degree
    pub degree: usize,

    /// Interior knots (empty: least-squares polynomial)
    pub interior_knots: Vec<T>,

    /// Knot storage ceiling (default: `m + k + 1`)
    pub knot_storage: Option<usize>,

    /// Approximation interval (default: data range)
    pub domain: Option<(T, T)>,

    /// Deferred error from adapter conversion
    pub deferred_error: Option<SplineError>,

    /// Whether to compute diagnostic statistics
    pub return_diagnostics: bool,

    /// Whether to return residuals
    pub return_residuals: bool,

    /// Tracks if any parameter was set multiple times (for validation)
    #[doc(hidden)]
    pub(crate) duplicate_param: Option<&'static str>,
}

impl<T: Float> Default for FixedKnotSplineBuilder<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Float> FixedKnotSplineBuilder<T> {
    /// Create a new fixed-knot builder with default parameters.
    fn new() -> Self {
        Self {
            degree: 3,
            interior_knots: Vec::new(),
            knot_storage: None,
            domain: None,
            deferred_error: None,
            return_diagnostics: false,
            return_residuals: false,
            duplicate_param: None,
        }
    }

    /// Set the spline degree.
    pub fn degree(mut self, degree: usize) -> Self {
        self.degree = degree;
        self
    }

    /// Set the interior knots.
    pub fn interior_knots(mut self, knots: Vec<T>) -> Self {
        self.interior_knots = knots;
        self
    }

    /// Set the knot storage ceiling.
    pub fn knot_storage(mut self, nest: usize) -> Self {
        self.knot_storage = Some(nest);
        self
    }

    /// Set the approximation interval.
    pub fn domain(mut self, xb: T, xe: T) -> Self {
        self.domain = Some((xb, xe));
        self
    }

    /// Enable returning residuals in the output.
    pub fn return_residuals(mut self, enabled: bool) -> Self {
        self.return_residuals = enabled;
        self
    }

    /// Enable returning diagnostics in the result.
    pub fn return_diagnostics(mut self, enabled: bool) -> Self {
        self.return_diagnostics = enabled;
        self
    }

    /// Build the fixed-knot fitter.
    pub fn build(self) -> Result<FixedKnotSpline<T>, SplineError> {
        if let Some(err) = self.deferred_error {
            return Err(err);
        }
        Validator::validate_no_duplicates(self.duplicate_param)?;
        Validator::validate_degree(self.degree)?;

        Ok(FixedKnotSpline { config: self })
    }
}

// ============================================================================
// Fixed-Knot Spline Fitter
// ============================================================================

/// Least-squares spline fitter on caller-supplied knots.
#[derive(Debug, Clone)]
pub struct FixedKnotSpline<T: Float> {
    config: FixedKnotSplineBuilder<T>,
}

impl<T: Float> FixedKnotSpline<T> {
    /// Fit with unit weights.
    pub fn fit(&self, x: &[T], y: &[T]) -> Result<FitResult<T>, SplineError> {
        self.run(x, y, None)
    }

    /// Fit with per-point weights.
    pub fn fit_weighted(&self, x: &[T], y: &[T], w: &[T]) -> Result<FitResult<T>, SplineError> {
        self.run(x, y, Some(w))
    }

    fn run(&self, x: &[T], y: &[T], w: Option<&[T]>) -> Result<FitResult<T>, SplineError> {
        let config = SplineConfig {
            degree: self.config.degree,
            knot_storage: self.config.knot_storage,
            domain: self.config.domain,
            interior_knots: Some(self.config.interior_knots.clone()),
            mode: FitMode::LeastSquares,
            ..SplineConfig::default()
        };
        let output = SplineExecutor::run(x, y, w, &config, None)?;

        Ok(FitResult::assemble(
            output,
            x,
            y,
            w,
            self.config.return_residuals,
            self.config.return_diagnostics,
        ))
    }
}
