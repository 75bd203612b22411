//! Working memory for spline fitting.
//!
//! ## Purpose
//!
//! This module provides the workspace that one fit call owns exclusively: the
//! triangularised observation matrix, the penalized system, the discontinuity
//! jump rows, the per-point basis rows, and the right-hand side and
//! coefficient vectors. Everything is sized once from the data size `m`, the
//! degree `k`, and the knot storage ceiling `nest`.
//!
//! ## Design notes
//!
//! * **Allocated up front**: Capacities are fixed before the first trial knot set;
//!   growing the knot set only changes the active lengths.
//! * **Slots**: Vectors are wrapped in [`Slot`] so they can be logically reset
//!   between trials without touching the allocator.
//!
//! ## Key concepts
//!
//! * **Slot**: A reusable vector wrapper with automatic capacity management.
//! * **FitWorkspace**: All scratch space of one fit call.
//!
//! ## Invariants
//!
//! * Matrix row capacity equals `nest` (or `m` for the basis rows).
//! * Slots are only logically cleared (`clear`/`reset`), never shrunk.
//!
//! ## Non-goals
//!
//! * Sharing a workspace between concurrent fits.
//! * Reallocation when the knot storage ceiling is reached (that is a normal stop).

// Feature-gated dependencies
#[cfg(not(feature = "std"))]
use alloc::vec::Vec;
#[cfg(feature = "std")]
use std::vec::Vec;

// External dependencies
use core::ops::{Deref, DerefMut};
use num_traits::Float;

// Internal dependencies
use crate::primitives::banded::BandedMatrix;

// ============================================================================
// Slot - Unified Vector Abstraction
// ============================================================================

/// A reusable vector slot with automatic capacity management.
#[derive(Debug, Clone)]
pub struct Slot<T>(Vec<T>);

impl<T> Slot<T> {
    /// Create a new slot with the given initial capacity.
    #[inline]
    pub fn new(capacity: usize) -> Self {
        Self(Vec::with_capacity(capacity))
    }

    /// Clear the slot (sets length to 0, preserves capacity).
    #[inline]
    pub fn clear(&mut self) {
        self.0.clear();
    }

    /// Get a reference to the underlying vector.
    #[inline]
    pub fn as_vec(&self) -> &Vec<T> {
        &self.0
    }
}

impl<T: Clone> Slot<T> {
    /// Set the length to `len`, filling every entry with `value`.
    #[inline]
    pub fn reset(&mut self, len: usize, value: T) {
        self.0.clear();
        self.0.resize(len, value);
    }
}

impl<T> Default for Slot<T> {
    fn default() -> Self {
        Self(Vec::new())
    }
}

impl<T> Deref for Slot<T> {
    type Target = Vec<T>;
    #[inline]
    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl<T> DerefMut for Slot<T> {
    #[inline]
    fn deref_mut(&mut self) -> &mut Self::Target {
        &mut self.0
    }
}

impl<T> From<Vec<T>> for Slot<T> {
    fn from(v: Vec<T>) -> Self {
        Self(v)
    }
}

// ============================================================================
// FitWorkspace - Working Memory for One Fit
// ============================================================================

/// Scratch space for one spline fit, sized from the knot storage ceiling.
#[derive(Debug, Clone)]
pub struct FitWorkspace<T> {
    /// Triangularised observation matrix, bandwidth `k + 1`.
    pub observation: BandedMatrix<T>,

    /// Rotated right-hand side of the observation system.
    pub rhs: Slot<T>,

    /// Least-squares coefficients for the current knot set.
    pub coefficients: Slot<T>,

    /// Unweighted nonzero basis values of every data point (`m` rows of `k + 1`).
    pub basis_rows: BandedMatrix<T>,

    /// Knot interval index `l` (`t[l] <= x < t[l + 1]`) of every data point.
    pub spans: Slot<usize>,

    /// Weighted squared residual of every data point.
    pub point_residuals: Slot<T>,

    /// Discontinuity jumps of the `k`-th derivative, one row per interior knot.
    pub jumps: BandedMatrix<T>,

    /// Penalized triangular system, bandwidth `k + 2`.
    pub penalized: BandedMatrix<T>,

    /// Right-hand side of the penalized system.
    pub penalized_rhs: Slot<T>,

    /// Coefficients of the penalized fit.
    pub penalized_coefficients: Slot<T>,
}

impl<T: Float> FitWorkspace<T> {
    /// Allocate a workspace for `m` points, degree `k`, and at most `nest` knots.
    pub fn new(m: usize, k: usize, nest: usize) -> Self {
        let k1 = k + 1;
        let k2 = k + 2;
        Self {
            observation: BandedMatrix::new(nest, k1),
            rhs: Slot::new(nest),
            coefficients: Slot::new(nest),
            basis_rows: BandedMatrix::new(m, k1),
            spans: Slot::new(m),
            point_residuals: Slot::new(m),
            jumps: BandedMatrix::new(nest, k2),
            penalized: BandedMatrix::new(nest, k2),
            penalized_rhs: Slot::new(nest),
            penalized_coefficients: Slot::new(nest),
        }
    }
}
