//! Flat storage for banded upper-triangular matrices.
//!
//! ## Purpose
//!
//! The observation and penalty systems of the spline fit are upper triangular
//! with a small bandwidth (`k + 1` or `k + 2`). This module stores such a matrix
//! as a flat row-major array of `rows × width` entries where column `0` of
//! each row is the diagonal and column `j` is the entry `j` places to its right.
//!
//! ## Design notes
//!
//! * **Fixed capacity**: Rows are allocated once for the knot storage ceiling and
//!   never reallocated; only the active row count changes between trials.
//! * **Stride indexing**: Entry `(i, j)` lives at `i * width + j`.
//!
//! ## Invariants
//!
//! * `active_rows <= capacity_rows`.
//! * Entries beyond the active rows are never read by the solvers.

// Feature-gated imports
#[cfg(not(feature = "std"))]
use alloc::vec;
#[cfg(not(feature = "std"))]
use alloc::vec::Vec;
#[cfg(feature = "std")]
use std::vec;
#[cfg(feature = "std")]
use std::vec::Vec;

// External dependencies
use core::ops::{Index, IndexMut};
use num_traits::Float;

// ============================================================================
// Banded Matrix
// ============================================================================

/// Row-major banded matrix with a fixed bandwidth stride.
#[derive(Debug, Clone, PartialEq)]
pub struct BandedMatrix<T> {
    data: Vec<T>,
    width: usize,
    capacity_rows: usize,
    active_rows: usize,
}

impl<T: Float> BandedMatrix<T> {
    /// Allocate a zeroed matrix able to hold `capacity_rows` rows of `width` entries.
    pub fn new(capacity_rows: usize, width: usize) -> Self {
        Self {
            data: vec![T::zero(); capacity_rows * width],
            width,
            capacity_rows,
            active_rows: 0,
        }
    }

    /// Zero the first `rows` rows and make them the active system.
    ///
    /// `rows` is clamped to the allocated capacity.
    pub fn reset(&mut self, rows: usize) {
        let rows = rows.min(self.capacity_rows);
        self.data[..rows * self.width].fill(T::zero());
        self.active_rows = rows;
    }

    /// Copy the leading columns of `other` into this matrix and zero the rest.
    ///
    /// Used to seed the penalized system (width `k + 2`) from the triangularised
    /// observation matrix (width `k + 1`).
    pub fn copy_from(&mut self, other: &BandedMatrix<T>) {
        let rows = other.active_rows.min(self.capacity_rows);
        let shared = self.width.min(other.width);
        self.reset(rows);
        for i in 0..rows {
            let src = other.row(i);
            self.row_mut(i)[..shared].copy_from_slice(&src[..shared]);
        }
    }

    /// Number of stored entries per row.
    #[cfg(feature = "dev")]
    #[inline]
    pub fn width(&self) -> usize {
        self.width
    }

    /// Number of rows currently in use.
    #[cfg(feature = "dev")]
    #[inline]
    pub fn rows(&self) -> usize {
        self.active_rows
    }

    /// Borrow a full stored row.
    #[inline]
    pub fn row(&self, i: usize) -> &[T] {
        let start = i * self.width;
        &self.data[start..start + self.width]
    }

    /// Mutably borrow a full stored row.
    #[inline]
    pub fn row_mut(&mut self, i: usize) -> &mut [T] {
        let start = i * self.width;
        &mut self.data[start..start + self.width]
    }

    /// Diagonal entry of row `i`.
    #[inline]
    pub fn diagonal(&self, i: usize) -> T {
        self.data[i * self.width]
    }

    /// Sum of the active diagonal entries.
    pub fn diagonal_sum(&self) -> T {
        (0..self.active_rows).fold(T::zero(), |acc, i| acc + self.diagonal(i))
    }
}

impl<T> Index<(usize, usize)> for BandedMatrix<T> {
    type Output = T;

    #[inline]
    fn index(&self, (i, j): (usize, usize)) -> &T {
        &self.data[i * self.width + j]
    }
}

impl<T> IndexMut<(usize, usize)> for BandedMatrix<T> {
    #[inline]
    fn index_mut(&mut self, (i, j): (usize, usize)) -> &mut T {
        &mut self.data[i * self.width + j]
    }
}
