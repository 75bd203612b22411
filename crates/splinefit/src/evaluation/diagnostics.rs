//! Diagnostic metrics for spline fit quality assessment.
//!
//! ## Purpose
//!
//! This module computes goodness-of-fit metrics for a fitted spline from the
//! data, the fitted values at the data abscissas, and the weights: error
//! metrics, the coefficient of determination, the weighted residual sum, and
//! an information criterion based on the number of spline coefficients.
//!
//! ## Design notes
//!
//! * **Residual-based**: Metrics are computed from residuals (y - ŷ) and fitted values.
//! * **Weighted sum**: `weighted_rss` is the quantity the fit controls,
//!   `Σ (w_i (y_i - ŷ_i))²`, and matches the reported residual `fp`.
//! * **Generics**: All computations are generic over `Float` types.
//!
//! ## Key concepts
//!
//! * **Residual Metrics**: RMSE, MAE, and the largest absolute residual.
//! * **Goodness-of-Fit**: R^2 measures variance explained by the spline.
//! * **Model Complexity**: The number of coefficients `n - k - 1` bounds the
//!   effective degrees of freedom from above; penalized fits use fewer.
//!
//! ## Invariants
//!
//! * Error metrics are non-negative.
//! * R^2 <= 1 (R^2 = 1 is a perfect fit).
//!
//! ## Non-goals
//!
//! * This module does not perform the fit.
//! * This module does not estimate the trace of the penalized smoother matrix.

// External dependencies
use core::fmt::{Display, Formatter, Result};
use num_traits::Float;

// ============================================================================
// Diagnostics Structure
// ============================================================================

/// Diagnostic metrics for assessing spline fit quality.
#[derive(Debug, Clone, PartialEq)]
pub struct Diagnostics<T> {
    /// Root Mean Squared Error (RMSE).
    pub rmse: T,

    /// Mean Absolute Error (MAE).
    pub mae: T,

    /// Largest absolute residual.
    pub max_abs_residual: T,

    /// Coefficient of determination (R^2).
    pub r_squared: T,

    /// Weighted residual sum of squares.
    pub weighted_rss: T,

    /// Number of spline coefficients.
    pub coefficients: usize,

    /// Akaike Information Criterion with the coefficient count as complexity.
    pub aic: Option<T>,

    /// Residual standard deviation `sqrt(RSS / (m - coefficients))`.
    pub residual_sd: Option<T>,
}

impl<T: Float> Diagnostics<T> {
    // ========================================================================
    // Main Computation
    // ========================================================================

    /// Compute diagnostic statistics from fit results.
    pub fn compute(y: &[T], fitted: &[T], weights: &[T], coefficients: usize) -> Self {
        let rss = Self::calculate_rss(y, fitted);
        let m = y.len();

        let residual_sd = if m > coefficients {
            let dof = T::from(m - coefficients).unwrap_or(T::one());
            Some((rss / dof).sqrt())
        } else {
            None
        };

        Diagnostics {
            rmse: Self::calculate_rmse(y, fitted),
            mae: Self::calculate_mae(y, fitted),
            max_abs_residual: Self::calculate_max_abs_residual(y, fitted),
            r_squared: Self::calculate_r_squared(y, fitted),
            weighted_rss: Self::calculate_weighted_rss(y, fitted, weights),
            coefficients,
            aic: Self::calculate_aic(rss, m, coefficients),
            residual_sd,
        }
    }

    // ========================================================================
    // Error Metrics
    // ========================================================================

    /// RSS = sum (y_i - y_hat_i)^2.
    fn calculate_rss(y: &[T], fitted: &[T]) -> T {
        y.iter().zip(fitted).fold(T::zero(), |acc, (&yi, &fi)| {
            let r = yi - fi;
            acc + r * r
        })
    }

    /// Compute the root mean squared error (RMSE).
    /// RMSE = sqrt((1/n) * sum (y_i - y_hat_i)^2).
    pub fn calculate_rmse(y: &[T], fitted: &[T]) -> T {
        let n_t = T::from(y.len()).unwrap_or(T::one());
        (Self::calculate_rss(y, fitted) / n_t).sqrt()
    }

    /// Compute the mean absolute error (MAE).
    /// MAE = (1/n) * sum |y_i - y_hat_i|.
    pub fn calculate_mae(y: &[T], fitted: &[T]) -> T {
        let n_t = T::from(y.len()).unwrap_or(T::one());
        let sum = y
            .iter()
            .zip(fitted)
            .fold(T::zero(), |acc, (&yi, &fi)| acc + (yi - fi).abs());

        sum / n_t
    }

    /// Largest |y_i - y_hat_i|.
    pub fn calculate_max_abs_residual(y: &[T], fitted: &[T]) -> T {
        y.iter()
            .zip(fitted)
            .fold(T::zero(), |acc, (&yi, &fi)| acc.max((yi - fi).abs()))
    }

    /// Weighted residual sum sum (w_i (y_i - y_hat_i))^2.
    pub fn calculate_weighted_rss(y: &[T], fitted: &[T], weights: &[T]) -> T {
        y.iter()
            .zip(fitted)
            .zip(weights)
            .fold(T::zero(), |acc, ((&yi, &fi), &wi)| {
                let r = wi * (yi - fi);
                acc + r * r
            })
    }

    // ========================================================================
    // Goodness-of-Fit Metrics
    // ========================================================================

    /// Compute the coefficient of determination (R^2).
    /// R^2 = 1 - SS_res / SS_tot, where SS_res is the residual
    /// sum of squares and SS_tot is the total sum of squares.
    pub fn calculate_r_squared(y: &[T], fitted: &[T]) -> T {
        let n = y.len();
        if n == 1 {
            return T::one();
        }

        let n_t = T::from(n).unwrap_or(T::one());
        let mean = y.iter().copied().fold(T::zero(), |acc, v| acc + v) / n_t;

        let (ss_tot, ss_res) =
            y.iter()
                .zip(fitted)
                .fold((T::zero(), T::zero()), |(tot, res), (&yi, &fi)| {
                    let deviation = yi - mean;
                    let residual = yi - fi;
                    (tot + deviation * deviation, res + residual * residual)
                });

        if ss_tot == T::zero() {
            // All y values are identical
            if ss_res == T::zero() {
                T::one()
            } else {
                T::zero()
            }
        } else {
            T::one() - ss_res / ss_tot
        }
    }

    // ========================================================================
    // Model Selection Criteria
    // ========================================================================

    /// AIC = n * ln(RSS / n) + 2 * coefficients.
    ///
    /// `None` for an exact fit, where the log-likelihood is unbounded.
    pub fn calculate_aic(rss: T, m: usize, coefficients: usize) -> Option<T> {
        let n = T::from(m).unwrap_or(T::one());
        if rss <= T::zero() || m == 0 {
            return None;
        }
        let df = T::from(coefficients).unwrap_or(T::zero());
        Some(n * (rss / n).ln() + (df + df))
    }
}

// ============================================================================
// Display Implementation
// ============================================================================

impl<T: Float + Display> Display for Diagnostics<T> {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        writeln!(f, "Spline Diagnostics:")?;
        writeln!(f, "  RMSE:         {:.6}", self.rmse)?;
        writeln!(f, "  MAE:          {:.6}", self.mae)?;
        writeln!(f, "  Max |resid|:  {:.6}", self.max_abs_residual)?;
        writeln!(f, "  R²:           {:.6}", self.r_squared)?;
        writeln!(f, "  Weighted RSS: {:.6}", self.weighted_rss)?;
        writeln!(f, "  Coefficients: {}", self.coefficients)?;

        if let Some(sd) = self.residual_sd {
            writeln!(f, "  Residual SD:  {:.6}", sd)?;
        }
        if let Some(aic) = self.aic {
            writeln!(f, "  AIC:          {:.2}", aic)?;
        }

        Ok(())
    }
}
