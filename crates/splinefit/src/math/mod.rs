//! Layer 2: Math
//!
//! # Purpose
//!
//! This layer provides pure mathematical functions used throughout the spline fit:
//! - B-spline basis evaluation, spline values and derivatives
//! - Givens plane rotations for incremental QR reduction
//! - Back-substitution for banded upper-triangular systems
//! - Rational interpolation for monotone root finding
//!
//! These are reusable mathematical building blocks with no algorithm-specific logic.
//!
//! # Architecture
//!
//! ```text
//! Layer 7: API
//!   ↓
//! Layer 6: Adapters
//!   ↓
//! Layer 5: Engine
//!   ↓
//! Layer 4: Evaluation
//!   ↓
//! Layer 3: Algorithms
//!   ↓
//! Layer 2: Math ← You are here
//!   ↓
//! Layer 1: Primitives
//! ```

/// B-spline basis functions and spline evaluation.
pub mod bspline;

/// Givens plane rotations.
pub mod givens;

/// Banded back-substitution.
pub mod backsub;

/// Rational interpolation root step.
pub mod rational;
