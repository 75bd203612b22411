//! Smoothing adapter for adaptive spline fitting.
//!
//! ## Purpose
//!
//! This module provides the standard execution adapter: every call starts knot
//! placement from the polynomial knot set and returns the smoothing spline
//! whose weighted residual matches the smoothing factor.
//!
//! ## Design notes
//!
//! * **Stateless**: Each fit is independent; refitting identical input gives
//!   identical output.
//! * **Delegation**: Delegates computation to the execution engine.
//! * **Generics**: Generic over `Float` types.
//!
//! ## Key concepts
//!
//! * **Builder Pattern**: Fluent API for configuration with sensible defaults.
//! * **Deferred validation**: Parameters are checked on `build()`, data on `fit()`.
//!
//! ## Invariants
//!
//! * Input arrays x, y (and w) must have the same length.
//! * Abscissas must be strictly ascending; the adapter does not sort.
//!
//! ## Non-goals
//!
//! * This adapter does not reuse knots between calls (use the resumable adapter).
//! * This adapter does not accept caller-supplied knots (use the fixed-knot adapter).

// External dependencies
use num_traits::Float;

// Internal dependencies
use crate::engine::executor::{FitMode, SplineConfig, SplineExecutor};
use crate::engine::output::FitResult;
use crate::engine::validator::Validator;
use crate::primitives::errors::SplineError;

// ============================================================================
// Smoothing Spline Builder
// ============================================================================

/// Builder for the adaptive smoothing spline.
#[derive(Debug, Clone)]
pub struct SmoothingSplineBuilder<T: Float> {
    /// Spline degree
    pub degree: usize,

    /// Target weighted residual (default: number of points)
    pub smoothing_factor: Option<T>,

    /// Knot storage ceiling (default: `m + k + 1`)
    pub knot_storage: Option<usize>,

    /// Approximation interval (default: data range)
    pub domain: Option<(T, T)>,

    /// Relative tolerance on the residual
    pub tolerance: T,

    /// Iteration cap of the penalty search
    pub max_iterations: usize,

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

impl<T: Float> Default for SmoothingSplineBuilder<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Float> SmoothingSplineBuilder<T> {
    /// Create a new smoothing spline builder with default parameters.
    fn new() -> Self {
        Self {
            degree: 3,
            smoothing_factor: None,
            knot_storage: None,
            domain: None,
            tolerance: T::from(0.001).unwrap(),
            max_iterations: 20,
            deferred_error: None,
            return_diagnostics: false,
            return_residuals: false,
            duplicate_param: None,
        }
    }

    // ========================================================================
    // Setters
    // ========================================================================

    /// Set the spline degree.
    pub fn degree(mut self, degree: usize) -> Self {
        self.degree = degree;
        self
    }

    /// Set the smoothing factor.
    pub fn smoothing_factor(mut self, s: T) -> Self {
        self.smoothing_factor = Some(s);
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

    /// Set the relative residual tolerance.
    pub fn tolerance(mut self, tol: T) -> Self {
        self.tolerance = tol;
        self
    }

    /// Set the penalty search iteration cap.
    pub fn max_iterations(mut self, max_iterations: usize) -> Self {
        self.max_iterations = max_iterations;
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

    // ========================================================================
    // Build Method
    // ========================================================================

    /// Build the smoothing spline fitter.
    pub fn build(self) -> Result<SmoothingSpline<T>, SplineError> {
        if let Some(err) = self.deferred_error {
            return Err(err);
        }

        // Check for duplicate parameter configuration
        Validator::validate_no_duplicates(self.duplicate_param)?;

        Validator::validate_degree(self.degree)?;
        if let Some(s) = self.smoothing_factor {
            Validator::validate_smoothing_factor(s)?;
        }
        Validator::validate_tolerance(self.tolerance)?;
        Validator::validate_iterations(self.max_iterations)?;

        Ok(SmoothingSpline { config: self })
    }

    /// Engine configuration for this builder.
    pub(crate) fn to_config(&self, mode: FitMode) -> SplineConfig<T> {
        SplineConfig {
            degree: self.degree,
            smoothing_factor: self.smoothing_factor,
            knot_storage: self.knot_storage,
            domain: self.domain,
            tolerance: self.tolerance,
            max_iterations: self.max_iterations,
            interior_knots: None,
            mode,
        }
    }
}

// ============================================================================
// Smoothing Spline Fitter
// ============================================================================

/// Adaptive smoothing spline fitter.
#[derive(Debug, Clone)]
pub struct SmoothingSpline<T: Float> {
    config: SmoothingSplineBuilder<T>,
}

impl<T: Float> SmoothingSpline<T> {
    /// Recover the validated configuration.
    pub(crate) fn into_config(self) -> SmoothingSplineBuilder<T> {
        self.config
    }

    /// Fit with unit weights.
    pub fn fit(&self, x: &[T], y: &[T]) -> Result<FitResult<T>, SplineError> {
        self.run(x, y, None)
    }

    /// Fit with per-point weights.
    pub fn fit_weighted(&self, x: &[T], y: &[T], w: &[T]) -> Result<FitResult<T>, SplineError> {
        self.run(x, y, Some(w))
    }

    fn run(&self, x: &[T], y: &[T], w: Option<&[T]>) -> Result<FitResult<T>, SplineError> {
        let config = self.config.to_config(FitMode::Fresh);
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
