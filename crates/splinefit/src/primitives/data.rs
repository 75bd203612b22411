//! Borrowed view of a weighted data set.
//!
//! ## Purpose
//!
//! The fitting layers read the data through [`Observations`], which bundles the
//! abscissas, ordinates, weights, and the approximation interval `[xb, xe]`.
//!
//! ## Invariants
//!
//! * `x`, `y`, and `w` have the same length `m`.
//! * `x` is strictly ascending and `xb <= x[0]`, `x[m - 1] <= xe`.
//! * All weights are strictly positive.
//!
//! These are established by the engine validator before an `Observations`
//! reaches the algorithms; this module does not check them.

// External dependencies
use num_traits::Float;

/// Weighted data points and the approximation interval.
#[derive(Debug, Clone, Copy)]
pub struct Observations<'a, T> {
    /// Strictly ascending abscissas.
    pub x: &'a [T],

    /// Ordinates.
    pub y: &'a [T],

    /// Strictly positive weights.
    pub w: &'a [T],

    /// Left boundary of the approximation interval.
    pub xb: T,

    /// Right boundary of the approximation interval.
    pub xe: T,
}

impl<'a, T: Float> Observations<'a, T> {
    /// Bundle data over an explicit interval.
    pub fn new(x: &'a [T], y: &'a [T], w: &'a [T], xb: T, xe: T) -> Self {
        Self { x, y, w, xb, xe }
    }

    /// Number of data points `m`.
    #[inline]
    pub fn len(&self) -> usize {
        self.x.len()
    }
}
