//! Rational interpolation step for monotone root finding.
//!
//! ## Purpose
//!
//! The penalty search looks for the root of a convex, decreasing function
//! `F(p)`. Given a bracket `(p1, f1)`, `(p3, f3)` with `f1 > 0 > f3` and a new
//! evaluation `(p2, f2)`, this module fits the rational function
//! `r(p) = (u p + v) / (p + w)` through the three points and returns its root.
//! The bracket is then shrunk around the sign change.
//!
//! ## Key concepts
//!
//! * **Unbounded right end**: While no `p3` with `F(p3) < 0` has been seen, the
//!   right end is `p = ∞` and the interpolant degenerates; `p3` is `None` then
//!   and the limiting formula is used.
//!
//! ## Invariants
//!
//! * After the call the bracket still satisfies `f1 >= 0 > f3`.

// External dependencies
use num_traits::Float;

/// One end of the bracket: a trial penalty and its residual excess.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BracketPoint<T> {
    /// Trial penalty, `None` for `p = ∞`.
    pub p: Option<T>,
    /// Residual excess `F(p)`.
    pub f: T,
}

/// Return the root of the rational interpolant and update the bracket.
///
/// `(p2, f2)` is the newest evaluation; it replaces the left end when `f2 >= 0`
/// and the right end otherwise.
pub fn rational_step<T: Float>(
    lower: &mut BracketPoint<T>,
    p2: T,
    f2: T,
    upper: &mut BracketPoint<T>,
) -> T {
    let p1 = lower.p.unwrap_or_else(T::zero);
    let f1 = lower.f;
    let f3 = upper.f;

    let p = match upper.p {
        None => (p1 * (f1 - f3) * f2 - p2 * (f2 - f3) * f1) / ((f1 - f2) * f3),
        Some(p3) => {
            let h1 = f1 * (f2 - f3);
            let h2 = f2 * (f3 - f1);
            let h3 = f3 * (f1 - f2);
            -(p1 * p2 * h3 + p2 * p3 * h1 + p3 * p1 * h2) / (p1 * h1 + p2 * h2 + p3 * h3)
        }
    };

    let replaced = BracketPoint { p: Some(p2), f: f2 };
    if f2 >= T::zero() {
        *lower = replaced;
    } else {
        *upper = replaced;
    }
    p
}
