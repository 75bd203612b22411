//! # splinefit — Adaptive Smoothing Splines for Rust
//!
//! Weighted smoothing B-spline curve fitting with automatic knot placement.
//!
//! ## What is a smoothing spline?
//!
//! Given data `(x_i, y_i)` with weights `w_i`, the smoothing spline of degree
//! `k` is the smoothest spline `s(x)` whose weighted residual
//!
//! ```text
//! fp = Σ (w_i (y_i - s(x_i)))²
//! ```
//!
//! does not exceed a smoothing factor `S`. Knots are added where the residual
//! concentrates until the least-squares spline undershoots `S`. A penalty on the
//! jumps of the `k`-th derivative at the interior knots is then tuned until
//! `fp = S` within a relative tolerance. `S = 0` gives the interpolating spline;
//! a large `S` gives the least-squares polynomial of degree `k`.
//!
//! ## Quick Start
//!
//! ```rust
//! use splinefit::prelude::*;
//!
//! let x: Vec<f64> = (0..20).map(|i| i as f64 * 0.25).collect();
//! let y: Vec<f64> = x.iter().map(|&v| v.sin()).collect();
//!
//! // Build the model
//! let model = Spline::new()
//!     .degree(3)
//!     .smoothing_factor(0.01)
//!     .adapter(Smoothing)
//!     .build()?;
//!
//! // Fit the model to the data
//! let result = model.fit(&x, &y)?;
//!
//! assert!(result.status.is_success());
//! let value = result.evaluate(1.3);
//! let slope = result.derivative(1.3, 1);
//! # let _ = (value, slope);
//! # Result::<(), SplineError>::Ok(())
//! ```
//!
//! ### Fixed knots
//!
//! ```rust
//! use splinefit::prelude::*;
//!
//! let x: Vec<f64> = (0..12).map(|i| i as f64).collect();
//! let y: Vec<f64> = x.iter().map(|&v| v * v).collect();
//!
//! let model = Spline::new()
//!     .interior_knots(&[4.0, 8.0])
//!     .adapter(FixedKnots)
//!     .build()?;
//!
//! let result = model.fit(&x, &y)?;
//! assert_eq!(result.interior_knots(), &[4.0, 8.0]);
//! # Result::<(), SplineError>::Ok(())
//! ```
//!
//! ### Resumable sessions
//!
//! Lowering the smoothing factor step by step is cheaper when each fit
//! continues from the knots of the previous one:
//!
//! ```rust
//! use splinefit::prelude::*;
//!
//! let x: Vec<f64> = (0..30).map(|i| i as f64 / 29.0).collect();
//! let y: Vec<f64> = x.iter().map(|&v| (6.0 * v).cos()).collect();
//!
//! let mut session = Spline::new()
//!     .smoothing_factor(1.0)
//!     .adapter(Resumable)
//!     .build()?;
//!
//! let coarse = session.fit(&x, &y)?;
//! session.set_smoothing_factor(0.01)?;
//! let fine = session.fit(&x, &y)?;
//!
//! assert!(fine.knots.len() >= coarse.knots.len());
//! # Result::<(), SplineError>::Ok(())
//! ```
//!
//! ### Result and Error Handling
//!
//! The `fit` methods return a `Result<FitResult<T>, SplineError>`.
//!
//! - **`Ok(FitResult<T>)`**: The spline and a [`FitStatus`](prelude::FitStatus).
//!   Exhausted knot storage and a penalty search that hit its iteration cap
//!   still return the best available spline, flagged by the status.
//! - **`Err(SplineError)`**: Invalid input or configuration, or a numerical
//!   breakdown that leaves no usable spline.
//!
//! ## Minimal Usage (no_std)
//!
//! The crate supports `no_std` environments with `alloc`:
//!
//! ```toml
//! [dependencies]
//! splinefit = { version = "0.3", default-features = false }
//! ```
//!
//! ## References
//!
//! - Dierckx, P. (1975). "An algorithm for smoothing, differentiation and
//!   integration of experimental data using spline functions"
//! - Dierckx, P. (1993). "Curve and Surface Fitting with Splines"

#![cfg_attr(not(feature = "std"), no_std)]

#[cfg(not(feature = "std"))]
#[macro_use]
extern crate alloc;

// Layer 1: Primitives - data structures and basic utilities.
mod primitives;

// Layer 2: Math - B-spline basis, rotations, and root finding.
mod math;

// Layer 3: Algorithms - reduction, knot placement, and penalty.
mod algorithms;

// Layer 4: Evaluation - fit diagnostics.
mod evaluation;

// Layer 5: Engine - orchestration and execution control.
mod engine;

// Layer 6: Adapters - execution mode adapters.
mod adapters;

// High-level fluent API for spline fitting.
mod api;

// Standard spline prelude.
pub mod prelude {
    pub use crate::api::{
        Adapter::{FixedKnots, Resumable, Smoothing},
        Diagnostics, ErrorKind, FitResult, FitStatus, FixedKnotSpline, KnotState,
        SmoothingSpline, SplineBuilder as Spline, SplineError, SplineSession,
    };
}

// Internal modules for development and testing.
//
// This module re-exports internal modules for development and testing purposes.
// It is only available with the `dev` feature enabled.
#[cfg(feature = "dev")]
pub mod internals {
    pub mod primitives {
        pub use crate::primitives::*;
    }
    pub mod math {
        pub use crate::math::*;
    }
    pub mod algorithms {
        pub use crate::algorithms::*;
    }
    pub mod engine {
        pub use crate::engine::*;
    }
    pub mod evaluation {
        pub use crate::evaluation::*;
    }
    pub mod adapters {
        pub use crate::adapters::*;
    }
    pub mod api {
        pub use crate::api::*;
    }
}
