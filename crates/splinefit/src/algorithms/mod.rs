//! Layer 3: Algorithms
//!
//! This layer implements the core logic of adaptive spline fitting: the banded
//! least-squares reduction, per-interval residual bookkeeping, knot insertion,
//! and the smoothing penalty rows. It contains the "business logic" of the fit
//! but is orchestrated by the engine layer.

// Givens reduction of the observation and penalized systems.
pub mod reduction;

// Per-interval residuals and data counts.
pub mod intervals;

// Knot set construction, insertion, and growth policy.
pub mod knots;

// Discontinuity jumps of the k-th derivative.
pub mod penalty;
