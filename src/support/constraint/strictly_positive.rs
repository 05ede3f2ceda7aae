use std::cmp::Ordering;

use num_traits::Zero;

use super::{Constrained, Constraint, ConstraintError};

/// Marker type enforcing that a value is strictly positive (greater than
/// zero).
///
/// This is the workhorse constraint for process inputs: flows, diameters,
/// densities, viscosities, and specific heats are all physically meaningless
/// at or below zero.
///
/// # Examples
///
/// ```
/// use hx_sizing::support::constraint::StrictlyPositive;
///
/// let pitch = StrictlyPositive::new(0.025).unwrap();
/// assert_eq!(pitch.into_inner(), 0.025);
///
/// assert!(StrictlyPositive::new(0.0).is_err());
/// assert!(StrictlyPositive::new(-1.0).is_err());
/// assert!(StrictlyPositive::new(f64::NAN).is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct StrictlyPositive;

impl StrictlyPositive {
    /// Constructs a [`Constrained<T, StrictlyPositive>`] if the value is
    /// strictly positive.
    ///
    /// # Errors
    ///
    /// Returns an error if the value is zero, negative, or not a number.
    pub fn new<T: PartialOrd + Zero>(
        value: T,
    ) -> Result<Constrained<T, StrictlyPositive>, ConstraintError> {
        Constrained::<T, StrictlyPositive>::new(value)
    }
}

impl<T: PartialOrd + Zero> Constraint<T> for StrictlyPositive {
    fn check(value: &T) -> Result<(), ConstraintError> {
        match value.partial_cmp(&T::zero()) {
            Some(Ordering::Greater) => Ok(()),
            Some(Ordering::Equal) => Err(ConstraintError::Zero),
            Some(Ordering::Less) => Err(ConstraintError::Negative),
            None => Err(ConstraintError::NotANumber),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use uom::si::{f64::Length, length::meter};

    #[test]
    fn floats() {
        assert!(StrictlyPositive::new(0.019).is_ok());
        assert!(StrictlyPositive::new(0.0).is_err());
        assert!(StrictlyPositive::new(-5.0).is_err());
        assert!(StrictlyPositive::new(f64::NAN).is_err());
    }

    #[test]
    fn quantities() {
        assert!(StrictlyPositive::new(Length::new::<meter>(6.096)).is_ok());
        assert!(StrictlyPositive::new(Length::new::<meter>(0.0)).is_err());
        assert!(StrictlyPositive::new(Length::new::<meter>(-1.0)).is_err());
    }
}
