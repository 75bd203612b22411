//! Layer 6: Adapters
//!
//! # Purpose
//!
//! This layer provides user-facing APIs that adapt the engine layer for different
//! execution modes and use cases:
//!
//! - **Smoothing**: Adaptive knot placement and penalty search on every call
//! - **FixedKnots**: Least-squares spline on caller-supplied knots
//! - **Resumable**: Session that continues knot placement across calls
//!
//! # Architecture
//!
//! ```text
//! Layer 7: API
//!   ↓
//! Layer 6: Adapters ← You are here
//!   ↓
//! Layer 5: Engine
//!   ↓
//! Layer 4: Evaluation
//!   ↓
//! Layer 3: Algorithms
//!   ↓
//! Layer 2: Math
//!   ↓
//! Layer 1: Primitives
//! ```

/// Adaptive smoothing spline adapter.
pub mod smoothing;

/// Least-squares spline on fixed knots.
pub mod fixed;

/// Resumable sessions for repeated fits on the same data.
pub mod resumable;
