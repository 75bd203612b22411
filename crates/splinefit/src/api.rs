//! High-level API for spline fitting.
//!
//! ## Purpose
//!
//! This module provides the primary user-facing entry point. It implements a
//! fluent builder for the fit parameters and the choice of an execution
//! adapter (Smoothing, FixedKnots, or Resumable).
//!
//! ## Design notes
//!
//! * **Ergonomic**: Fluent builder with sensible defaults for all parameters.
//! * **Polymorphic**: Uses marker types to transition to specialized adapter builders.
//! * **Validated**: Parameters are validated when `.build()` is called on the adapter.
//! * **Type-Safe**: Generic over `Float` types for flexible precision.
//!
//! ## Key concepts
//!
//! * **Execution Adapters**: Smoothing, FixedKnots, and Resumable modes.
//! * **Unsupported options**: Setting an option the chosen adapter does not
//!   use (e.g. interior knots on the smoothing adapter) fails at `.build()`.
//!
//! ### Configuration Flow
//!
//! 1. Create a [`SplineBuilder`] via `Spline::new()`.
//! 2. Chain configuration methods (`.degree()`, `.smoothing_factor()`, etc.).
//! 3. Select an adapter via `.adapter(Adapter::Smoothing)` to get an execution builder.

// Feature-gated imports
#[cfg(not(feature = "std"))]
use alloc::vec::Vec;
#[cfg(feature = "std")]
use std::vec::Vec;

// External dependencies
use num_traits::Float;

// Internal dependencies
use crate::adapters::fixed::FixedKnotSplineBuilder;
use crate::adapters::resumable::ResumableSplineBuilder;
use crate::adapters::smoothing::SmoothingSplineBuilder;

// Publicly re-exported types
pub use crate::adapters::fixed::FixedKnotSpline;
pub use crate::adapters::resumable::SplineSession;
pub use crate::adapters::smoothing::SmoothingSpline;
pub use crate::engine::output::{FitResult, FitStatus};
pub use crate::engine::session::KnotState;
pub use crate::evaluation::diagnostics::Diagnostics;
pub use crate::primitives::errors::{ErrorKind, SplineError};

/// Marker types for selecting execution adapters.
#[allow(non_snake_case)]
pub mod Adapter {
    pub use super::{FixedKnots, Resumable, Smoothing};
}

/// Fluent builder for configuring spline parameters and execution modes.
#[derive(Debug, Clone)]
pub struct SplineBuilder<T> {
    /// Spline degree in `[1, 5]`.
    pub degree: Option<usize>,

    /// Smoothing factor `s >= 0`.
    pub smoothing_factor: Option<T>,

    /// Knot storage ceiling.
    pub knot_storage: Option<usize>,

    /// Approximation interval `[xb, xe]`.
    pub domain: Option<(T, T)>,

    /// Relative tolerance on the residual.
    pub tolerance: Option<T>,

    /// Iteration cap of the penalty search.
    pub max_iterations: Option<usize>,

    /// Interior knots (FixedKnots only).
    pub interior_knots: Option<Vec<T>>,

    /// Enable fit quality diagnostics.
    pub return_diagnostics: Option<bool>,

    /// Return residuals `y - ŷ`.
    pub return_residuals: Option<bool>,

    /// Tracks if any parameter was set multiple times (for validation).
    #[doc(hidden)]
    pub duplicate_param: Option<&'static str>,
}

impl<T: Float> Default for SplineBuilder<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Float> SplineBuilder<T> {
    /// Select an execution adapter to transition to an execution builder.
    pub fn adapter<A>(self, _adapter: A) -> A::Output
    where
        A: SplineAdapter<T>,
    {
        A::convert(self)
    }

    /// Create a new builder with default settings.
    pub fn new() -> Self {
        Self {
            degree: None,
            smoothing_factor: None,
            knot_storage: None,
            domain: None,
            tolerance: None,
            max_iterations: None,
            interior_knots: None,
            return_diagnostics: None,
            return_residuals: None,
            duplicate_param: None,
        }
    }

    /// Set the spline degree (default 3).
    pub fn degree(mut self, degree: usize) -> Self {
        if self.degree.is_some() {
            self.duplicate_param = Some("degree");
        }
        self.degree = Some(degree);
        self
    }

    /// Set the smoothing factor (default: number of points).
    pub fn smoothing_factor(mut self, s: T) -> Self {
        if self.smoothing_factor.is_some() {
            self.duplicate_param = Some("smoothing_factor");
        }
        self.smoothing_factor = Some(s);
        self
    }

    /// Set the knot storage ceiling (default: `m + k + 1`).
    pub fn knot_storage(mut self, nest: usize) -> Self {
        if self.knot_storage.is_some() {
            self.duplicate_param = Some("knot_storage");
        }
        self.knot_storage = Some(nest);
        self
    }

    /// Set the approximation interval (default: data range).
    pub fn domain(mut self, xb: T, xe: T) -> Self {
        if self.domain.is_some() {
            self.duplicate_param = Some("domain");
        }
        self.domain = Some((xb, xe));
        self
    }

    /// Set the relative tolerance on the residual (default 0.001).
    pub fn tolerance(mut self, tol: T) -> Self {
        if self.tolerance.is_some() {
            self.duplicate_param = Some("tolerance");
        }
        self.tolerance = Some(tol);
        self
    }

    /// Set the penalty search iteration cap (default 20).
    pub fn max_iterations(mut self, max_iterations: usize) -> Self {
        if self.max_iterations.is_some() {
            self.duplicate_param = Some("max_iterations");
        }
        self.max_iterations = Some(max_iterations);
        self
    }

    /// Set the interior knots for a least-squares fit.
    pub fn interior_knots(mut self, knots: &[T]) -> Self {
        if self.interior_knots.is_some() {
            self.duplicate_param = Some("interior_knots");
        }
        self.interior_knots = Some(knots.to_vec());
        self
    }

    /// Include fit quality diagnostics in output.
    pub fn return_diagnostics(mut self) -> Self {
        self.return_diagnostics = Some(true);
        self
    }

    /// Include residuals in output.
    pub fn return_residuals(mut self) -> Self {
        self.return_residuals = Some(true);
        self
    }

    /// Copy the options shared by the adaptive adapters.
    fn into_smoothing(self, adapter: &'static str) -> SmoothingSplineBuilder<T> {
        let mut result = SmoothingSplineBuilder::default();

        if let Some(degree) = self.degree {
            result.degree = degree;
        }
        if let Some(s) = self.smoothing_factor {
            result.smoothing_factor = Some(s);
        }
        if let Some(nest) = self.knot_storage {
            result.knot_storage = Some(nest);
        }
        if let Some(domain) = self.domain {
            result.domain = Some(domain);
        }
        if let Some(tol) = self.tolerance {
            result.tolerance = tol;
        }
        if let Some(it) = self.max_iterations {
            result.max_iterations = it;
        }
        if let Some(rd) = self.return_diagnostics {
            result.return_diagnostics = rd;
        }
        if let Some(rr) = self.return_residuals {
            result.return_residuals = rr;
        }

        if self.interior_knots.is_some() {
            result.deferred_error = Some(SplineError::UnsupportedOption {
                adapter,
                option: "interior_knots",
            });
        }
        result.duplicate_param = self.duplicate_param;

        result
    }
}

/// Trait for transitioning from a generic builder to an execution builder.
pub trait SplineAdapter<T: Float> {
    /// The output execution builder.
    type Output;

    /// Convert a generic [`SplineBuilder`] into a specialized execution builder.
    fn convert(builder: SplineBuilder<T>) -> Self::Output;
}

/// Marker for adaptive smoothing fits.
#[derive(Debug, Clone, Copy)]
pub struct Smoothing;

impl<T: Float> SplineAdapter<T> for Smoothing {
    type Output = SmoothingSplineBuilder<T>;

    fn convert(builder: SplineBuilder<T>) -> Self::Output {
        builder.into_smoothing("Smoothing")
    }
}

/// Marker for least-squares fits on caller-supplied knots.
#[derive(Debug, Clone, Copy)]
pub struct FixedKnots;

impl<T: Float> SplineAdapter<T> for FixedKnots {
    type Output = FixedKnotSplineBuilder<T>;

    fn convert(builder: SplineBuilder<T>) -> Self::Output {
        let mut result = FixedKnotSplineBuilder::default();

        if let Some(degree) = builder.degree {
            result.degree = degree;
        }
        if let Some(knots) = builder.interior_knots {
            result.interior_knots = knots;
        }
        if let Some(nest) = builder.knot_storage {
            result.knot_storage = Some(nest);
        }
        if let Some(domain) = builder.domain {
            result.domain = Some(domain);
        }
        if let Some(rd) = builder.return_diagnostics {
            result.return_diagnostics = rd;
        }
        if let Some(rr) = builder.return_residuals {
            result.return_residuals = rr;
        }

        // Options of the adaptive fit have no meaning here
        let unsupported = if builder.smoothing_factor.is_some() {
            Some("smoothing_factor")
        } else if builder.tolerance.is_some() {
            Some("tolerance")
        } else if builder.max_iterations.is_some() {
            Some("max_iterations")
        } else {
            None
        };
        if let Some(option) = unsupported {
            result.deferred_error = Some(SplineError::UnsupportedOption {
                adapter: "FixedKnots",
                option,
            });
        }
        result.duplicate_param = builder.duplicate_param;

        result
    }
}

/// Marker for resumable sessions that keep knots between fits.
#[derive(Debug, Clone, Copy)]
pub struct Resumable;

impl<T: Float> SplineAdapter<T> for Resumable {
    type Output = ResumableSplineBuilder<T>;

    fn convert(builder: SplineBuilder<T>) -> Self::Output {
        ResumableSplineBuilder {
            config: builder.into_smoothing("Resumable"),
        }
    }
}
