use uom::si::{f64::Ratio, ratio::ratio};

use super::{Constrained, Constraint, ConstraintError};

/// Supplies 0 and 1 for types used in the closed unit interval [0, 1].
///
/// Implemented for `f64` and `uom::si::f64::Ratio`, the two types this crate
/// keeps fractions in (baffle cut, effectiveness, fan coverage).
pub trait UnitBounds: PartialOrd {
    fn zero() -> Self;
    fn one() -> Self;
}

impl UnitBounds for f64 {
    fn zero() -> Self {
        0.0
    }
    fn one() -> Self {
        1.0
    }
}

impl UnitBounds for Ratio {
    fn zero() -> Self {
        Ratio::new::<ratio>(0.0)
    }
    fn one() -> Self {
        Ratio::new::<ratio>(1.0)
    }
}

/// Marker type enforcing that a value lies in the closed unit interval:
/// `0 ≤ x ≤ 1`.
///
/// # Examples
///
/// ```
/// use hx_sizing::support::constraint::UnitInterval;
///
/// let baffle_cut = UnitInterval::new(0.25).unwrap();
/// assert_eq!(baffle_cut.into_inner(), 0.25);
///
/// assert!(UnitInterval::new(-0.0001).is_err());
/// assert!(UnitInterval::new(1.0001).is_err());
/// assert!(UnitInterval::new(f64::NAN).is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct UnitInterval;

impl UnitInterval {
    /// Constructs `Constrained<T, UnitInterval>` if `0 ≤ value ≤ 1`.
    ///
    /// # Errors
    ///
    /// - [`ConstraintError::Negative`] if less than zero.
    /// - [`ConstraintError::AboveMaximum`] if greater than one.
    /// - [`ConstraintError::NotANumber`] if comparison is undefined.
    pub fn new<T: UnitBounds>(value: T) -> Result<Constrained<T, UnitInterval>, ConstraintError> {
        Constrained::<T, UnitInterval>::new(value)
    }
}

impl<T: UnitBounds> Constraint<T> for UnitInterval {
    fn check(value: &T) -> Result<(), ConstraintError> {
        if value != value {
            return Err(ConstraintError::NotANumber);
        }
        if *value < T::zero() {
            return Err(ConstraintError::Negative);
        }
        if *value > T::one() {
            return Err(ConstraintError::AboveMaximum);
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn endpoints_are_included() {
        assert!(UnitInterval::new(0.0).is_ok());
        assert!(UnitInterval::new(1.0).is_ok());
    }

    #[test]
    fn ratios() {
        let r = UnitInterval::new(Ratio::new::<ratio>(0.45)).unwrap();
        assert_eq!(r.into_inner().get::<ratio>(), 0.45);

        assert!(UnitInterval::new(Ratio::new::<ratio>(1.01)).is_err());
    }
}
