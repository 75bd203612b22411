//! Error types for spline fitting operations.
//!
//! ## Purpose
//!
//! This module defines the error conditions that can occur while fitting a
//! smoothing spline: malformed input data, invalid parameters, invalid
//! caller-supplied knots, and the rare algorithmic invariant violations of
//! the least-squares and penalty-search machinery.
//!
//! ## Design notes
//!
//! * **Contextual**: Errors include relevant values (indices, offending values, limits).
//! * **Deferred**: Builder errors are stored during configuration and raised on `build()`.
//! * **No-std**: Supports `no_std` environments by using `alloc` for dynamic messages.
//! * **Classified**: [`SplineError::kind`] separates validation failures from
//!   algorithm invariant violations.
//!
//! ## Key concepts
//!
//! 1. **Validation**: Input shape, ordering, weights, domain, degree, storage, knots.
//! 2. **Algorithm invariants**: Singular triangular systems and a broken convexity
//!    assumption during the penalty search. These should not occur for valid input.
//!
//! Recoverable outcomes (storage exhaustion, non-convergence of the penalty
//! search) are not errors: they are reported through
//! [`FitStatus`](crate::engine::output::FitStatus) together with the best fit.
//!
//! ## Non-goals
//!
//! * This module does not perform the validation logic itself.
//! * This module does not provide error recovery or fallback strategies.

// Feature-gated imports
#[cfg(not(feature = "std"))]
use alloc::string::String;
#[cfg(feature = "std")]
use std::error::Error;
#[cfg(feature = "std")]
use std::string::String;

// External dependencies
use core::fmt::{Display, Formatter, Result};

// ============================================================================
// Error Classification
// ============================================================================

/// Broad classification of a [`SplineError`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// Input data or configuration was rejected before fitting started.
    Validation,

    /// A numerical invariant of the fitting algorithm was broken mid-fit.
    AlgorithmInvariant,
}

// ============================================================================
// Error Type
// ============================================================================

/// Error type for spline fitting operations.
#[derive(Debug, Clone, PartialEq)]
pub enum SplineError {
    /// Input arrays are empty.
    EmptyInput,

    /// `x`, `y` (and `w`) must have the same number of elements.
    MismatchedInputs {
        /// Number of abscissas.
        x_len: usize,
        /// Number of ordinates or weights that did not match.
        other_len: usize,
    },

    /// Input data contains NaN or infinite values.
    InvalidNumericValue(String),

    /// Too few data points for the requested degree (need at least `k + 1`).
    TooFewPoints {
        /// Number of points provided.
        got: usize,
        /// Minimum required points.
        min: usize,
    },

    /// Spline degree must be in `[1, 5]`.
    InvalidDegree(usize),

    /// Abscissas must be strictly ascending.
    UnsortedAbscissas {
        /// Index of the first point that is not greater than its predecessor.
        index: usize,
    },

    /// Weights must be strictly positive.
    NonPositiveWeight {
        /// Index of the offending weight.
        index: usize,
        /// The weight value.
        value: f64,
    },

    /// The approximation interval must contain all abscissas.
    InvalidDomain {
        /// Requested left boundary.
        xb: f64,
        /// Requested right boundary.
        xe: f64,
    },

    /// Smoothing factor must be non-negative and finite.
    InvalidSmoothingFactor(f64),

    /// Tolerance must be strictly between 0 and 1.
    InvalidTolerance(f64),

    /// The penalty search needs at least one iteration.
    InvalidIterations(usize),

    /// Knot storage is too small for the requested mode.
    InsufficientStorage {
        /// Storage ceiling provided.
        got: usize,
        /// Minimum storage needed.
        min: usize,
    },

    /// Caller-supplied knots violate the knot vector invariants.
    InvalidKnots(String),

    /// Caller-supplied knots admit no data subset satisfying Schoenberg–Whitney.
    SchoenbergWhitney {
        /// Zero-based index of the first basis function without a supporting abscissa.
        basis: usize,
    },

    /// A resumable session was reused with a different data set size.
    SessionMismatch {
        /// Number of points the session state belongs to.
        expected: usize,
        /// Number of points supplied.
        got: usize,
    },

    /// Parameter was set multiple times in the builder.
    DuplicateParameter {
        /// Name of the parameter that was set multiple times.
        parameter: &'static str,
    },

    /// Selected adapter does not accept the requested option.
    UnsupportedOption {
        /// Name of the adapter.
        adapter: &'static str,
        /// Name of the option.
        option: &'static str,
    },

    /// Back-substitution met an exactly zero diagonal entry.
    SingularSystem {
        /// Zero-based row of the zero diagonal entry.
        row: usize,
    },

    /// The residual function of the penalty search was not convex and decreasing.
    ConvexityViolated {
        /// Iteration at which the bracket degenerated.
        iteration: usize,
        /// Trial penalty value at that iteration.
        p: f64,
    },
}

impl SplineError {
    /// Classify this error.
    pub fn kind(&self) -> ErrorKind {
        match self {
            Self::SingularSystem { .. } | Self::ConvexityViolated { .. } => {
                ErrorKind::AlgorithmInvariant
            }
            _ => ErrorKind::Validation,
        }
    }
}

// ============================================================================
// Display Implementation
// ============================================================================

impl Display for SplineError {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        match self {
            Self::EmptyInput => write!(f, "Input arrays are empty"),
            Self::MismatchedInputs { x_len, other_len } => {
                write!(
                    f,
                    "Length mismatch: x has {x_len} points, companion array has {other_len}"
                )
            }
            Self::InvalidNumericValue(s) => write!(f, "Invalid numeric value: {s}"),
            Self::TooFewPoints { got, min } => {
                write!(f, "Too few points: got {got}, need at least {min}")
            }
            Self::InvalidDegree(k) => write!(f, "Invalid degree: {k} (must be in [1, 5])"),
            Self::UnsortedAbscissas { index } => {
                write!(
                    f,
                    "Abscissas must be strictly ascending: x[{index}] <= x[{}]",
                    index.saturating_sub(1)
                )
            }
            Self::NonPositiveWeight { index, value } => {
                write!(f, "Invalid weight: w[{index}]={value} (must be > 0)")
            }
            Self::InvalidDomain { xb, xe } => {
                write!(
                    f,
                    "Invalid domain: [{xb}, {xe}] does not contain all abscissas"
                )
            }
            Self::InvalidSmoothingFactor(s) => {
                write!(f, "Invalid smoothing factor: {s} (must be >= 0 and finite)")
            }
            Self::InvalidTolerance(tol) => {
                write!(f, "Invalid tolerance: {tol} (must be > 0 and < 1)")
            }
            Self::InvalidIterations(it) => {
                write!(f, "Invalid max_iterations: {it} (must be at least 1)")
            }
            Self::InsufficientStorage { got, min } => {
                write!(f, "Insufficient knot storage: {got} (need at least {min})")
            }
            Self::InvalidKnots(msg) => write!(f, "Invalid knots: {msg}"),
            Self::SchoenbergWhitney { basis } => {
                write!(
                    f,
                    "Knots violate the Schoenberg-Whitney conditions at basis function {basis}"
                )
            }
            Self::SessionMismatch { expected, got } => {
                write!(
                    f,
                    "Session state belongs to {expected} points, but {got} were supplied"
                )
            }
            Self::DuplicateParameter { parameter } => {
                write!(
                    f,
                    "Parameter '{parameter}' was set multiple times. Each parameter can only be configured once."
                )
            }
            Self::UnsupportedOption { adapter, option } => {
                write!(f, "Adapter '{adapter}' does not support option: {option}")
            }
            Self::SingularSystem { row } => {
                write!(f, "Singular triangular system: zero diagonal at row {row}")
            }
            Self::ConvexityViolated { iteration, p } => {
                write!(
                    f,
                    "Penalty search broke the convexity assumption at iteration {iteration} (p={p})"
                )
            }
        }
    }
}

// ============================================================================
// Standard Error Trait
// ============================================================================

#[cfg(feature = "std")]
impl Error for SplineError {}
