use std::cmp::Ordering;

use num_traits::Zero;

use super::{Constrained, Constraint, ConstraintError};

/// Marker type enforcing that a value is zero or greater.
///
/// Used for quantities where zero is a legitimate operating point, such as
/// fouling resistances (a clean exchanger) or a target NTU.
///
/// # Examples
///
/// ```
/// use hx_sizing::support::constraint::NonNegative;
///
/// let fouling = NonNegative::new(0.0).unwrap();
/// assert_eq!(fouling.into_inner(), 0.0);
///
/// assert!(NonNegative::new(-0.0002).is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct NonNegative;

impl NonNegative {
    /// Constructs a [`Constrained<T, NonNegative>`] if the value is zero or
    /// greater.
    ///
    /// # Errors
    ///
    /// Returns an error if the value is negative or not a number.
    pub fn new<T: PartialOrd + Zero>(
        value: T,
    ) -> Result<Constrained<T, NonNegative>, ConstraintError> {
        Constrained::<T, NonNegative>::new(value)
    }
}

impl<T: PartialOrd + Zero> Constraint<T> for NonNegative {
    fn check(value: &T) -> Result<(), ConstraintError> {
        match value.partial_cmp(&T::zero()) {
            Some(Ordering::Greater | Ordering::Equal) => Ok(()),
            Some(Ordering::Less) => Err(ConstraintError::Negative),
            None => Err(ConstraintError::NotANumber),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accepts_zero_and_positive() {
        assert!(NonNegative::new(0.0).is_ok());
        assert!(NonNegative::new(0.00035).is_ok());
    }

    #[test]
    fn rejects_negative_and_nan() {
        assert_eq!(NonNegative::new(-1.0), Err(ConstraintError::Negative));
        assert_eq!(NonNegative::new(f64::NAN), Err(ConstraintError::NotANumber));
    }
}
