//! Output types and result structures for spline fitting.
//!
//! ## Purpose
//!
//! This module defines the [`FitResult`] struct which encapsulates all
//! outputs of a fit: the knot vector and B-spline coefficients, the achieved
//! weighted residual, the outcome status, and optional per-point outputs.
//!
//! ## Design notes
//!
//! * **Self-contained**: A result can evaluate its spline and derivatives
//!   without the data it was fitted to.
//! * **Memory Efficiency**: All optional outputs use `Option<Vec<T>>`.
//! * **Generics**: Results are generic over `Float` types.
//! * **Ergonomics**: Implements `Display` for human-readable output.
//!
//! ## Key concepts
//!
//! * **Status**: Every returned result carries a [`FitStatus`]. Storage
//!   exhaustion and a non-converged penalty search are statuses, not errors:
//!   the best available spline is still returned.
//!
//! ## Invariants
//!
//! * `coefficients.len() == knots.len() - degree - 1`.
//! * `x`, `fitted`, and the optional per-point vectors have the data length.
//!
//! ## Non-goals
//!
//! * This module does not perform the fit; it only stores results.
//! * This module does not provide serialization/deserialization logic.

// Feature-gated imports
#[cfg(not(feature = "std"))]
use alloc::vec::Vec;
#[cfg(feature = "std")]
use std::vec::Vec;

// External dependencies
use core::fmt::{Debug, Display, Formatter, Result};
use num_traits::Float;

// Internal dependencies
use crate::engine::executor::ExecutorOutput;
use crate::evaluation::diagnostics::Diagnostics;
use crate::math::bspline;

// ============================================================================
// Fit Status
// ============================================================================

/// Outcome of a fit.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FitStatus {
    /// The residual matches the smoothing factor within tolerance.
    Converged,

    /// Least-squares spline on caller-supplied knots.
    LeastSquares,

    /// The spline interpolates the data (`s = 0` or knot growth reached `m + k + 1`).
    Interpolating,

    /// The least-squares polynomial already satisfies the smoothing factor.
    Polynomial,

    /// Knot growth stopped at the storage ceiling before the target was met.
    StorageExceeded,

    /// The penalty search (or, rarely, knot placement) hit its iteration cap.
    NotConverged,
}

impl FitStatus {
    /// Whether the result satisfies the requested fit.
    ///
    /// `StorageExceeded` and `NotConverged` return the best available spline
    /// but not one that meets the smoothing factor.
    pub fn is_success(self) -> bool {
        !matches!(self, Self::StorageExceeded | Self::NotConverged)
    }
}

impl Display for FitStatus {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        let label = match self {
            Self::Converged => "converged",
            Self::LeastSquares => "least squares (fixed knots)",
            Self::Interpolating => "interpolating",
            Self::Polynomial => "polynomial",
            Self::StorageExceeded => "knot storage exceeded",
            Self::NotConverged => "iteration limit reached",
        };
        f.write_str(label)
    }
}

// ============================================================================
// Result Structure
// ============================================================================

/// Fitted spline with fit metadata.
#[derive(Debug, Clone, PartialEq)]
pub struct FitResult<T> {
    /// Full knot vector, boundary knots included.
    pub knots: Vec<T>,

    /// B-spline coefficients (`knots.len() - degree - 1` of them).
    pub coefficients: Vec<T>,

    /// Spline degree `k`.
    pub degree: usize,

    /// Achieved weighted residual `Σ (w_i (y_i - s(x_i)))²`.
    pub residual: T,

    /// Smoothing factor the fit targeted (the achieved residual for fixed knots).
    pub smoothing_factor: T,

    /// Outcome of the fit.
    pub status: FitStatus,

    /// Final penalty weight, when the smoothing phase ran.
    pub penalty: Option<T>,

    /// Number of least-squares passes of the knot placement loop.
    pub iterations: usize,

    /// Number of penalty search iterations, when the smoothing phase ran.
    pub penalty_iterations: Option<usize>,

    /// Data abscissas.
    pub x: Vec<T>,

    /// Spline values at the data abscissas.
    pub fitted: Vec<T>,

    /// Residuals `y - ŷ` (if requested).
    pub residuals: Option<Vec<T>>,

    /// Fit quality metrics (if requested).
    pub diagnostics: Option<Diagnostics<T>>,
}

impl<T: Float> FitResult<T> {
    /// Assemble a result from the executor output and the fitted data.
    ///
    /// `w = None` means unit weights.
    pub(crate) fn assemble(
        output: ExecutorOutput<T>,
        x: &[T],
        y: &[T],
        w: Option<&[T]>,
        return_residuals: bool,
        return_diagnostics: bool,
    ) -> Self {
        let residuals = return_residuals.then(|| {
            y.iter()
                .zip(&output.fitted)
                .map(|(&yi, &fi)| yi - fi)
                .collect::<Vec<T>>()
        });

        let diagnostics = return_diagnostics.then(|| match w {
            Some(w) => Diagnostics::compute(y, &output.fitted, w, output.coefficients.len()),
            None => {
                let unit: Vec<T> = y.iter().map(|_| T::one()).collect();
                Diagnostics::compute(y, &output.fitted, &unit, output.coefficients.len())
            }
        });

        Self {
            degree: output.knots.len() - output.coefficients.len() - 1,
            knots: output.knots,
            coefficients: output.coefficients,
            residual: output.residual,
            smoothing_factor: output.smoothing_factor,
            status: output.status,
            penalty: output.penalty,
            iterations: output.iterations,
            penalty_iterations: output.penalty_iterations,
            x: x.to_vec(),
            fitted: output.fitted,
            residuals,
            diagnostics,
        }
    }

    /// Evaluate the spline at `x`.
    ///
    /// Outside the domain the end polynomial pieces are extrapolated.
    pub fn evaluate(&self, x: T) -> T {
        bspline::evaluate(&self.knots, &self.coefficients, self.degree, x)
    }

    /// Evaluate the spline at every point of `xs`.
    pub fn evaluate_many(&self, xs: &[T]) -> Vec<T> {
        xs.iter().map(|&x| self.evaluate(x)).collect()
    }

    /// Evaluate the `nu`-th derivative at `x` (zero for `nu > degree`).
    pub fn derivative(&self, x: T, nu: usize) -> T {
        bspline::derivative(&self.knots, &self.coefficients, self.degree, x, nu)
    }

    /// Interior knots only.
    pub fn interior_knots(&self) -> &[T] {
        let k1 = self.degree + 1;
        &self.knots[k1..self.knots.len() - k1]
    }

    /// Approximation interval `[xb, xe]`.
    pub fn domain(&self) -> (T, T) {
        (self.knots[self.degree], self.knots[self.knots.len() - self.degree - 1])
    }

    /// Check if diagnostics are present.
    pub fn has_diagnostics(&self) -> bool {
        self.diagnostics.is_some()
    }
}

// ============================================================================
// Display Implementation
// ============================================================================

impl<T: Float + Display + Debug> Display for FitResult<T> {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        writeln!(f, "Summary:")?;
        writeln!(f, "  Data points:      {}", self.x.len())?;
        writeln!(f, "  Degree:           {}", self.degree)?;
        writeln!(f, "  Knots:            {}", self.knots.len())?;
        writeln!(f, "  Smoothing factor: {}", self.smoothing_factor)?;
        writeln!(f, "  Residual:         {}", self.residual)?;
        writeln!(f, "  Status:           {}", self.status)?;
        writeln!(f, "  Passes:           {}", self.iterations)?;

        if let Some(p) = self.penalty {
            writeln!(f, "  Penalty:          {}", p)?;
        }
        writeln!(f)?;

        if let Some(diag) = &self.diagnostics {
            writeln!(f, "{}", diag)?;
        }

        writeln!(f, "Fitted Data:")?;
        let has_resid = self.residuals.is_some();

        write!(f, "{:>8} {:>12}", "X", "Y_fit")?;
        if has_resid {
            write!(f, " {:>12}", "Residual")?;
        }
        writeln!(f)?;

        let line_width = 21 + if has_resid { 13 } else { 0 };
        writeln!(f, "{:-<width$}", "", width = line_width)?;

        // Data rows (show first 10 and last 10 if more than 20 points)
        let n = self.x.len();
        let rows_to_show: Vec<usize> = if n <= 20 {
            (0..n).collect()
        } else {
            (0..10).chain(n - 10..n).collect()
        };

        let mut prev_idx = 0;
        for (i, &idx) in rows_to_show.iter().enumerate() {
            if i > 0 && idx != prev_idx + 1 {
                writeln!(f, "{:>8}", "...")?;
            }
            prev_idx = idx;

            write!(f, "{:>8.2} {:>12.6}", self.x[idx], self.fitted[idx])?;
            if let Some(resid) = &self.residuals {
                write!(f, " {:>12.6}", resid[idx])?;
            }
            writeln!(f)?;
        }

        Ok(())
    }
}
