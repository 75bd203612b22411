//! Per-interval residual bookkeeping.
//!
//! ## Purpose
//!
//! After a least-squares pass, the knot placement loop needs to know where the
//! spline fits badly. This module distributes each point's weighted squared
//! residual over the knot intervals and keeps the number of data points
//! strictly inside each interval, which is what the insertion policy consumes.
//!
//! ## Design notes
//!
//! * **Boundary split**: The first point of a new interval usually sits on the
//!   knot that was inserted there, so its residual is split in half between the
//!   two adjacent intervals.
//! * **Incremental counts**: Interval counts are not recounted from the data;
//!   they are split when a knot is inserted (see [`insert_knot`](super::knots::insert_knot)).
//!
//! ## Key concepts
//!
//! * **Interval `j`**: `[t[j + k], t[j + k + 1])`, `0 <= j < n - 2k - 1`.
//! * **`fpint[j]`**: Residual attributed to interval `j`.
//! * **`nrdata[j]`**: Data points strictly inside interval `j`.
//!
//! ## Invariants
//!
//! * `Σ fpint[j]` equals the residual sum of the pass.
//! * `fpint` and `nrdata` have one entry per knot interval.

// Feature-gated imports
#[cfg(not(feature = "std"))]
use alloc::vec::Vec;
#[cfg(feature = "std")]
use std::vec::Vec;

// External dependencies
use num_traits::Float;

// Internal dependencies
use crate::algorithms::reduction::point_residual;
use crate::primitives::buffer::FitWorkspace;
use crate::primitives::data::Observations;

// ============================================================================
// Interval Tracker
// ============================================================================

/// Residual and data-count table of the knot intervals.
#[derive(Debug, Clone, PartialEq)]
pub struct KnotIntervalTracker<T> {
    /// Weighted squared residual attributed to each interval.
    pub fpint: Vec<T>,

    /// Number of data points strictly inside each interval.
    pub nrdata: Vec<usize>,
}

impl<T: Float> KnotIntervalTracker<T> {
    /// Table for the polynomial knot set: one interval holding all interior points.
    pub fn polynomial(m: usize, capacity: usize) -> Self {
        let mut fpint = Vec::with_capacity(capacity);
        fpint.push(T::zero());
        let mut nrdata = Vec::with_capacity(capacity);
        nrdata.push(m.saturating_sub(2));
        Self { fpint, nrdata }
    }

    /// Table for an arbitrary knot vector, counting the data points strictly
    /// inside each interval. Residuals start at zero.
    ///
    /// As in the polynomial table, the first and last data points stand on the
    /// boundary knots and are never counted.
    pub fn count(knots: &[T], k: usize, x: &[T]) -> Self {
        let nrint = knots.len() - 2 * k - 1;
        let inner: &[T] = if x.len() > 2 { &x[1..x.len() - 1] } else { &[] };
        let nrdata = (0..nrint)
            .map(|j| {
                let (left, right) = (knots[j + k], knots[j + k + 1]);
                inner.iter().filter(|&&xi| xi > left && xi < right).count()
            })
            .collect();
        let mut fpint = Vec::with_capacity(nrint);
        fpint.resize(nrint, T::zero());
        Self { fpint, nrdata }
    }

    /// Rebuild a table from stored session state.
    pub fn from_parts(fpint: Vec<T>, nrdata: Vec<usize>) -> Self {
        Self { fpint, nrdata }
    }

    /// Number of knot intervals.
    #[inline]
    pub fn intervals(&self) -> usize {
        self.nrdata.len()
    }

    /// Recompute the per-point residuals and the per-interval residuals of the
    /// least-squares coefficients, using the basis rows cached by the last reduction.
    pub fn update(&mut self, data: &Observations<'_, T>, k: usize, ws: &mut FitWorkspace<T>) {
        let m = data.len();
        let nrint = self.intervals();
        let half = T::from(0.5).unwrap();

        ws.point_residuals.reset(m, T::zero());
        self.fpint.clear();
        self.fpint.resize(nrint, T::zero());

        let mut fpart = T::zero();
        let mut current = 0;
        for it in 0..m {
            let term = point_residual(data, k, ws, &ws.coefficients, it);
            ws.point_residuals[it] = term;

            let interval = (ws.spans[it] - k).min(nrint - 1);
            if interval > current {
                let store = term * half;
                self.fpint[current] = fpart + term - store;
                current = interval;
                fpart = store;
            } else {
                fpart = fpart + term;
            }
        }
        self.fpint[current] = fpart;
    }

    /// Index of the interval with the largest residual among those that still
    /// contain interior data points, with its residual.
    pub fn worst_interval(&self) -> Option<(usize, T)> {
        let mut best: Option<(usize, T)> = None;
        for (j, (&fp, &count)) in self.fpint.iter().zip(&self.nrdata).enumerate() {
            if count == 0 {
                continue;
            }
            match best {
                Some((_, fpmax)) if fpmax >= fp => {}
                _ => best = Some((j, fp)),
            }
        }
        best
    }

    /// Index of the first data point on or before interval `j`'s left knot.
    ///
    /// Interior points of interval `j` are `begin + 1 ..= begin + nrdata[j]`.
    pub fn data_begin(&self, j: usize) -> usize {
        self.nrdata[..j].iter().map(|&c| c + 1).sum()
    }
}
