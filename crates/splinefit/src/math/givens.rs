//! Givens plane rotations.
//!
//! ## Purpose
//!
//! The observation and penalty matrices are triangularised one row at a time
//! by rotating each new row against the current triangle. This module provides
//! the two primitive operations: computing a rotation that annihilates a pivot
//! against a diagonal entry, and applying it to a pair of values.
//!
//! ## Design notes
//!
//! * **Overflow-safe norm**: `sqrt(a² + b²)` is formed by scaling with the larger
//!   magnitude, so no intermediate square overflows.
//! * **Zero pivot**: Both entries zero yields the identity rotation.
//!
//! ## Invariants
//!
//! * `cos² + sin² = 1` for every rotation returned.
//! * The new diagonal is non-negative whenever the old diagonal was.

// External dependencies
use num_traits::Float;

/// A plane rotation `(cos, sin)`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Rotation<T> {
    /// Cosine of the rotation angle.
    pub cos: T,
    /// Sine of the rotation angle.
    pub sin: T,
}

impl<T: Float> Rotation<T> {
    /// Rotation that leaves both components unchanged.
    #[inline]
    pub fn identity() -> Self {
        Self {
            cos: T::one(),
            sin: T::zero(),
        }
    }

    /// Apply the rotation to `(a, b)`, where `b` is the component in the
    /// triangle and `a` the one in the incoming row.
    ///
    /// Returns the new `(a, b)`.
    #[inline]
    pub fn apply(&self, a: T, b: T) -> (T, T) {
        let rotated_b = self.cos * b + self.sin * a;
        let rotated_a = self.cos * a - self.sin * b;
        (rotated_a, rotated_b)
    }
}

/// Compute the rotation annihilating `pivot` against `diagonal`.
///
/// Returns the rotation and the new diagonal `sqrt(pivot² + diagonal²)`.
#[inline]
pub fn compute_rotation<T: Float>(pivot: T, diagonal: T) -> (Rotation<T>, T) {
    let store = pivot.abs();
    let ww = diagonal.abs();
    let dd = if store >= ww {
        if store == T::zero() {
            return (Rotation::identity(), diagonal);
        }
        store * (T::one() + (diagonal / pivot).powi(2)).sqrt()
    } else {
        ww * (T::one() + (pivot / diagonal).powi(2)).sqrt()
    };

    let rotation = Rotation {
        cos: diagonal / dd,
        sin: pivot / dd,
    };
    (rotation, dd)
}

/// Rotate `pivot` into the triangle at diagonal slot `diagonal`.
///
/// Updates the diagonal in place and returns the rotation to apply to the
/// rest of the row.
#[inline]
pub fn rotate_into<T: Float>(pivot: T, diagonal: &mut T) -> Rotation<T> {
    let (rotation, dd) = compute_rotation(pivot, *diagonal);
    *diagonal = dd;
    rotation
}

/// Apply `rotation` to the incoming value `a` and the stored value `b` in place.
#[inline]
pub fn apply_rotation<T: Float>(rotation: Rotation<T>, a: &mut T, b: &mut T) {
    let (na, nb) = rotation.apply(*a, *b);
    *a = na;
    *b = nb;
}
