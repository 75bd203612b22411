//! Carry-over state between resumable fits.
//!
//! ## Purpose
//!
//! A resumable fit continues knot placement from where the previous call on
//! the same data left off, which is much cheaper than starting from the
//! polynomial when the smoothing factor is lowered step by step. This module
//! defines the state handed from one call to the next.
//!
//! ## Key concepts
//!
//! * **`fp0`**: Residual of the least-squares polynomial. If it does not exceed the
//!   new smoothing factor, the polynomial (or a penalized fit on few knots)
//!   already suffices and the stored knots are discarded.
//! * **`fpold`, `nplus`**: Residual and growth count of the last knot placement
//!   pass, feeding the growth policy on resumption.
//!
//! ## Invariants
//!
//! * `fpint.len() == nrdata.len() == knots.len() - 2 * degree - 1`.
//! * The state only applies to a data set of exactly `m` points.

// Feature-gated imports
#[cfg(not(feature = "std"))]
use alloc::vec::Vec;
#[cfg(feature = "std")]
use std::vec::Vec;

// External dependencies
use num_traits::Float;

/// Knot placement state carried between resumable fits.
#[derive(Debug, Clone, PartialEq)]
pub struct KnotState<T> {
    /// Knot vector reached by the last fit.
    pub knots: Vec<T>,

    /// Residual attributed to each knot interval.
    pub fpint: Vec<T>,

    /// Data points strictly inside each knot interval.
    pub nrdata: Vec<usize>,

    /// Residual of the least-squares polynomial.
    pub fp0: T,

    /// Residual of the last knot placement pass.
    pub fpold: T,

    /// Knots added after the last pass.
    pub nplus: usize,

    /// Degree the knots were built for.
    pub degree: usize,

    /// Number of data points the state belongs to.
    pub m: usize,
}

impl<T: Float> KnotState<T> {
    /// Whether the stored knot set is the bare polynomial one.
    pub fn is_polynomial(&self) -> bool {
        self.knots.len() <= 2 * (self.degree + 1)
    }

    /// Number of stored knots.
    pub fn len(&self) -> usize {
        self.knots.len()
    }

    /// Whether no knots are stored.
    pub fn is_empty(&self) -> bool {
        self.knots.is_empty()
    }
}
