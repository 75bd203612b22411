//! Penalty weight search of the smoothing phase.
//!
//! ## Purpose
//!
//! Once knot placement stops with a least-squares residual below the smoothing
//! factor `s`, the fit is relaxed by a smoothness penalty. The penalized
//! residual `fp(p)` grows from `fp(∞)` (plain least squares) to `fp(0)` (the
//! polynomial residual `fp0`) as the penalty weight `1/p` grows. This module
//! drives the search for the `p` with `fp(p) = s`.
//!
//! ## Design notes
//!
//! * **State machine**: The engine evaluates `fp(p)` and feeds `F(p) = fp(p) - s`
//!   to [`SmoothingParameterSolver::advance`], which answers with the next
//!   trial `p` or a terminal outcome.
//! * **Safeguards**: Until a sign change has been confirmed on a side of the
//!   bracket, `p` is scaled by a fixed factor (0.04 or 1/0.04) instead of
//!   trusting the rational step.
//!
//! ## Key concepts
//!
//! * **Bracket**: `(p1, f1)` with `f1 > 0` and `(p3, f3)` with `f3 < 0`; `p3`
//!   starts at infinity.
//! * **Convexity**: `F` is convex and decreasing in `p`. A new value outside
//!   `(f3, f1)` means that assumption broke, which is reported as an error.
//!
//! ## Invariants
//!
//! * `p1 < p3` whenever `p3` is finite.
//! * Every trial `p` is strictly positive.

// External dependencies
use num_traits::Float;

// Internal dependencies
use crate::math::rational::{rational_step, BracketPoint};
use crate::primitives::errors::SplineError;

// ============================================================================
// Search Step
// ============================================================================

/// Outcome of feeding one evaluation to the solver.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum PenaltyStep<T> {
    /// `|F(p)|` is within the tolerance: the current `p` is the answer.
    Converged,

    /// The iteration cap was reached; the current `p` is the best available.
    Exhausted,

    /// Evaluate `fp` at this penalty next.
    Next(T),
}

// ============================================================================
// Solver
// ============================================================================

/// Safeguarded rational-interpolation root finder for `F(p) = fp(p) - s`.
#[derive(Debug, Clone)]
pub struct SmoothingParameterSolver<T> {
    lower: BracketPoint<T>,
    upper: BracketPoint<T>,
    p: T,
    lower_confirmed: bool,
    upper_confirmed: bool,
    acc: T,
    max_iterations: usize,
}

impl<T: Float> SmoothingParameterSolver<T> {
    // ========================================================================
    // Constants
    // ========================================================================

    /// Factor applied to `p` while a side of the bracket is unconfirmed.
    const STEP: f64 = 0.04;

    /// Weight of the old end point when a scaled step overshoots the bracket.
    const PULL_BACK: f64 = 0.9;

    // ========================================================================
    // Construction
    // ========================================================================

    /// Start a search.
    ///
    /// `f0 = fp0 - s > 0` is the excess at `p = 0`, `f_inf = fp - s < 0` the
    /// excess of the least-squares fit, and `initial` the first trial penalty.
    pub fn new(f0: T, f_inf: T, initial: T, acc: T, max_iterations: usize) -> Self {
        Self {
            lower: BracketPoint {
                p: Some(T::zero()),
                f: f0,
            },
            upper: BracketPoint { p: None, f: f_inf },
            p: initial,
            lower_confirmed: false,
            upper_confirmed: false,
            acc,
            max_iterations,
        }
    }

    /// Penalty at which `fp` should be evaluated next.
    #[inline]
    pub fn current(&self) -> T {
        self.p
    }

    /// Feed `F(p) = fp(p) - s` for the current `p`, one-based `iteration`.
    pub fn advance(&mut self, iteration: usize, f2: T) -> Result<PenaltyStep<T>, SplineError> {
        if f2.abs() < self.acc {
            return Ok(PenaltyStep::Converged);
        }
        if iteration >= self.max_iterations {
            return Ok(PenaltyStep::Exhausted);
        }

        let step = T::from(Self::STEP).unwrap();
        let pull = T::from(Self::PULL_BACK).unwrap();
        let push = T::one() - pull;
        let p2 = self.p;
        let p1 = self.lower.p.unwrap_or_else(T::zero);

        if !self.upper_confirmed {
            if f2 - self.upper.f <= self.acc {
                // p too large: fp(p) barely differs from the least-squares residual
                self.upper = BracketPoint { p: Some(p2), f: f2 };
                let mut p = p2 * step;
                if p <= p1 {
                    p = p1 * pull + p2 * push;
                }
                self.p = p;
                return Ok(PenaltyStep::Next(p));
            }
            if f2 < T::zero() {
                self.upper_confirmed = true;
            }
        }

        if !self.lower_confirmed {
            if self.lower.f - f2 <= self.acc {
                // p too small: fp(p) barely differs from the polynomial residual
                self.lower = BracketPoint { p: Some(p2), f: f2 };
                let mut p = p2 / step;
                if let Some(p3) = self.upper.p {
                    if p >= p3 {
                        p = p2 * push + p3 * pull;
                    }
                }
                self.p = p;
                return Ok(PenaltyStep::Next(p));
            }
            if f2 > T::zero() {
                self.lower_confirmed = true;
            }
        }

        if f2 >= self.lower.f || f2 <= self.upper.f {
            return Err(SplineError::ConvexityViolated {
                iteration,
                p: p2.to_f64().unwrap_or(f64::NAN),
            });
        }

        self.p = rational_step(&mut self.lower, p2, f2, &mut self.upper);
        Ok(PenaltyStep::Next(self.p))
    }
}
