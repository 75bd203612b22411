//! Resumable adapter for repeated fits on the same data.
//!
//! ## Purpose
//!
//! This module provides a session that keeps the knot placement state between
//! calls. Lowering the smoothing factor on a later call continues knot growth
//! from the knots already placed instead of starting from the polynomial.
//!
//! ## Design notes
//!
//! * **Stateful**: The session owns the [`KnotState`] of its last fit.
//! * **Atomic update**: The stored state is replaced only when a fit returns
//!   successfully; a failed call leaves the session unchanged.
//! * **Delegation**: Delegates computation to the execution engine.
//!
//! ## Key concepts
//!
//! * **Resumption**: A stored state is used only when it already has interior
//!   knots and its polynomial residual exceeds the new smoothing factor.
//!   Otherwise knot placement restarts from the polynomial.
//!
//! ## Invariants
//!
//! * All calls of one session must use data of the same length and degree.
//!
//! ## Non-goals
//!
//! * This adapter does not detect changed data of the same length.

// External dependencies
use num_traits::Float;

// Internal dependencies
use crate::adapters::smoothing::SmoothingSplineBuilder;
use crate::engine::executor::{FitMode, SplineExecutor};
use crate::engine::output::FitResult;
use crate::engine::session::KnotState;
use crate::engine::validator::Validator;
use crate::primitives::errors::SplineError;

// ============================================================================
// Resumable Spline Builder
// ============================================================================

/// Builder for a resumable spline session.
///
/// Accepts the same options as the smoothing adapter.
#[derive(Debug, Clone)]
pub struct ResumableSplineBuilder<T: Float> {
    /// Shared smoothing configuration
    pub config: SmoothingSplineBuilder<T>,
}

impl<T: Float> Default for ResumableSplineBuilder<T> {
    fn default() -> Self {
        Self {
            config: SmoothingSplineBuilder::default(),
        }
    }
}

impl<T: Float> ResumableSplineBuilder<T> {
    /// Set the spline degree.
    pub fn degree(mut self, degree: usize) -> Self {
        self.config.degree = degree;
        self
    }

    /// Set the initial smoothing factor.
    pub fn smoothing_factor(mut self, s: T) -> Self {
        self.config.smoothing_factor = Some(s);
        self
    }

    /// Set the knot storage ceiling.
    pub fn knot_storage(mut self, nest: usize) -> Self {
        self.config.knot_storage = Some(nest);
        self
    }

    /// Set the approximation interval.
    pub fn domain(mut self, xb: T, xe: T) -> Self {
        self.config.domain = Some((xb, xe));
        self
    }

    /// Set the relative residual tolerance.
    pub fn tolerance(mut self, tol: T) -> Self {
        self.config.tolerance = tol;
        self
    }

    /// Set the penalty search iteration cap.
    pub fn max_iterations(mut self, max_iterations: usize) -> Self {
        self.config.max_iterations = max_iterations;
        self
    }

    /// Enable returning residuals in the output.
    pub fn return_residuals(mut self, enabled: bool) -> Self {
        self.config.return_residuals = enabled;
        self
    }

    /// Enable returning diagnostics in the result.
    pub fn return_diagnostics(mut self, enabled: bool) -> Self {
        self.config.return_diagnostics = enabled;
        self
    }

    /// Build an empty session.
    pub fn build(self) -> Result<SplineSession<T>, SplineError> {
        // Reuse the smoothing builder's validation
        let config = self.config.build()?.into_config();

        Ok(SplineSession {
            config,
            state: None,
        })
    }
}

// ============================================================================
// Spline Session
// ============================================================================

/// Resumable fitting session.
#[derive(Debug, Clone)]
pub struct SplineSession<T: Float> {
    config: SmoothingSplineBuilder<T>,
    state: Option<KnotState<T>>,
}

impl<T: Float> SplineSession<T> {
    /// Seed the session with a previously exported state.
    pub fn with_state(mut self, state: KnotState<T>) -> Self {
        self.state = Some(state);
        self
    }

    /// State left by the last successful fit.
    pub fn state(&self) -> Option<&KnotState<T>> {
        self.state.as_ref()
    }

    /// Consume the session, returning its state.
    pub fn into_state(self) -> Option<KnotState<T>> {
        self.state
    }

    /// Smoothing factor for subsequent fits (`None`: number of points).
    pub fn smoothing_factor(&self) -> Option<T> {
        self.config.smoothing_factor
    }

    /// Change the smoothing factor for subsequent fits.
    pub fn set_smoothing_factor(&mut self, s: T) -> Result<(), SplineError> {
        Validator::validate_smoothing_factor(s)?;
        self.config.smoothing_factor = Some(s);
        Ok(())
    }

    /// Drop the stored state; the next fit starts from the polynomial.
    pub fn reset(&mut self) {
        self.state = None;
    }

    /// Fit with unit weights, continuing from the stored state.
    pub fn fit(&mut self, x: &[T], y: &[T]) -> Result<FitResult<T>, SplineError> {
        self.run(x, y, None)
    }

    /// Fit with per-point weights, continuing from the stored state.
    pub fn fit_weighted(
        &mut self,
        x: &[T],
        y: &[T],
        w: &[T],
    ) -> Result<FitResult<T>, SplineError> {
        self.run(x, y, Some(w))
    }

    fn run(&mut self, x: &[T], y: &[T], w: Option<&[T]>) -> Result<FitResult<T>, SplineError> {
        let config = self.config.to_config(FitMode::Resume);
        let mut output = SplineExecutor::run(x, y, w, &config, self.state.as_ref())?;

        // s = 0 fits leave no state; keep the previous one
        if let Some(state) = output.state.take() {
            self.state = Some(state);
        }

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
