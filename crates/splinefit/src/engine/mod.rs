//! Layer 5: Engine
//!
//! # Purpose
//!
//! This layer orchestrates the fit by coordinating between primitives
//! (workspace, errors) and algorithms (reduction, knot insertion, penalty).
//! It provides the knot placement loop, the penalty search, input
//! validation, and the result types.
//!
//! # Architecture
//!
//! ```text
//! Layer 7: API
//!   ↓
//! Layer 6: Adapters
//!   ↓
//! Layer 5: Engine ← You are here
//!   ↓
//! Layer 4: Evaluation
//!   ↓
//! Layer 3: Algorithms
//!   ↓
//! Layer 2: Math
//!   ↓
//! Layer 1: Primitives
//! ```

/// Unified execution engine for spline fitting.
pub mod executor;

/// Validation utilities.
pub mod validator;

/// Penalty weight search of the smoothing phase.
pub mod smoothing;

/// Output types for spline fits.
pub mod output;

/// Carry-over state for resumable fits.
pub mod session;
