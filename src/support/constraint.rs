//! Type-level numeric constraints with zero runtime cost.
//!
//! The input side of the sizing engine is full of quantities that are only
//! meaningful on part of the number line: mass flows and diameters must be
//! strictly positive, fouling resistances non-negative, baffle cuts inside
//! the unit interval. Rather than re-checking these invariants inside every
//! correlation, values are checked once at construction and carried in a
//! [`Constrained<T, C>`] wrapper whose marker type `C` names the invariant.
//!
//! # Provided constraints
//!
//! - [`NonNegative`]: Zero or greater
//! - [`StrictlyPositive`]: Greater than zero
//! - [`UnitInterval`]: Closed unit interval `0 ≤ x ≤ 1`
//!
//! Each marker also provides an associated `new()` constructor (e.g.,
//! `StrictlyPositive::new(5.0)`).
//!
//! # Extending
//!
//! Custom numeric invariants can be added by implementing [`Constraint<T>`]
//! for a zero-sized marker type.

mod non_negative;
mod strictly_positive;
mod unit_interval;

use std::marker::PhantomData;

use thiserror::Error;

pub use non_negative::NonNegative;
pub use strictly_positive::StrictlyPositive;
pub use unit_interval::UnitInterval;

/// A trait for enforcing numeric invariants at construction time.
///
/// Implement this trait for a marker type representing a numeric constraint,
/// such as [`NonNegative`] or [`StrictlyPositive`].
pub trait Constraint<T> {
    /// Checks that the given value satisfies this constraint.
    ///
    /// # Errors
    ///
    /// Returns a [`ConstraintError`] if the value does not satisfy the
    /// constraint.
    fn check(value: &T) -> Result<(), ConstraintError>;
}

/// An error returned when a [`Constraint`] is violated.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[non_exhaustive]
pub enum ConstraintError {
    #[error("value must not be negative")]
    Negative,
    #[error("value must not be zero")]
    Zero,
    #[error("value is not a number")]
    NotANumber,
    #[error("value is below the minimum allowed")]
    BelowMinimum,
    #[error("value is above the maximum allowed")]
    AboveMaximum,
}

/// A result type alias to use with [`Constraint`].
pub type ConstraintResult<T, E = ConstraintError> = Result<T, E>;

/// A wrapper enforcing a numeric constraint at construction time.
///
/// Combine this with one of the provided marker types (such as
/// [`StrictlyPositive`]) or your own [`Constraint<T>`] implementation.
///
/// # Example
///
/// ```
/// use hx_sizing::support::constraint::{Constrained, StrictlyPositive};
///
/// let flow = Constrained::<_, StrictlyPositive>::new(13.9).unwrap();
/// assert_eq!(flow.into_inner(), 13.9);
///
/// assert!(Constrained::<f64, StrictlyPositive>::new(-1.0).is_err());
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord)]
pub struct Constrained<T, C: Constraint<T>> {
    value: T,
    _marker: PhantomData<C>,
}

impl<T, C: Constraint<T>> Constrained<T, C> {
    /// Constructs a new constrained value.
    ///
    /// # Errors
    ///
    /// Returns an error if the value does not satisfy the constraint.
    pub fn new(value: T) -> Result<Self, ConstraintError> {
        C::check(&value)?;
        Ok(Self {
            value,
            _marker: PhantomData,
        })
    }

    /// Consumes the wrapper, returning the inner value.
    pub fn into_inner(self) -> T {
        self.value
    }
}

impl<T, C: Constraint<T>> AsRef<T> for Constrained<T, C> {
    fn as_ref(&self) -> &T {
        &self.value
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn wrapper_round_trips_valid_values() {
        let x = Constrained::<i64, NonNegative>::new(0).unwrap();
        assert_eq!(x.into_inner(), 0);

        let y = Constrained::<f64, StrictlyPositive>::new(2.5).unwrap();
        assert_eq!(y.as_ref(), &2.5);
    }

    #[test]
    fn wrapper_rejects_invalid_values() {
        assert_eq!(
            Constrained::<f64, StrictlyPositive>::new(0.0),
            Err(ConstraintError::Zero)
        );
        assert_eq!(
            Constrained::<f64, NonNegative>::new(-0.1),
            Err(ConstraintError::Negative)
        );
        assert_eq!(
            Constrained::<f64, UnitInterval>::new(1.2),
            Err(ConstraintError::AboveMaximum)
        );
    }
}
