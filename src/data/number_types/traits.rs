//! # Traits
//!
//! The tableau engine is written against a small trait rather than against `f64` directly, so that
//! it reads the same for any floating point type. The contract is "mathematically exact" only in
//! name: finite representation means that comparisons are always made with a tolerance.
use std::fmt::{Debug, Display};

use num_traits::{Float, NumCast};

/// The simplex algorithm is defined over the ordered fields.
///
/// All methods containing algorithmic logic are defined to work on this trait. It is
/// automatically implemented for all types satisfying the bounds, in practice `f64` and `f32`.
pub trait OrderedField: Float + Display + Debug + Send + Sync + 'static {
    /// Convert a tolerance given as a `f64` (e.g. read from a configuration file) into this type.
    ///
    /// Falls back to the machine epsilon of the type when the value can't be represented.
    fn tolerance(epsilon: f64) -> Self {
        <Self as NumCast>::from(epsilon)
            .filter(|value| value.is_finite() && *value >= Self::zero())
            .unwrap_or_else(Self::epsilon)
    }

    /// Whether this value is within `epsilon` of zero, or larger.
    fn is_nonnegative_within(self, epsilon: Self) -> bool {
        self >= -epsilon
    }

    /// Snap values in `[-epsilon, 0)` to zero.
    ///
    /// Values further below zero are left untouched.
    #[must_use]
    fn clamp_negative_zero(self, epsilon: Self) -> Self {
        if self < Self::zero() && self >= -epsilon {
            Self::zero()
        } else {
            self
        }
    }
}

impl<T: Float + Display + Debug + Send + Sync + 'static> OrderedField for T {}
