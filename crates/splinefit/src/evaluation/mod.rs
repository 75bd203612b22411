//! Layer 4: Evaluation
//!
//! # Purpose
//!
//! This layer calculates fit-quality metrics from a fitted spline:
//! - Error metrics and goodness of fit
//! - A coefficient-count information criterion
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
//! Layer 4: Evaluation ← You are here
//!   ↓
//! Layer 3: Algorithms
//!   ↓
//! Layer 2: Math
//!   ↓
//! Layer 1: Primitives
//! ```

/// Diagnostic metrics for fit quality assessment.
pub mod diagnostics;
