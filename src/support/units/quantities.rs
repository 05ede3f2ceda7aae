use std::marker::PhantomData;

use uom::{
    si::{ISQ, Quantity, SI},
    typenum::{N1, P1, P3, Z0},
};

/// Thermal insulance (fouling resistance), m²·K/W in SI.
///
/// A value of this type divided into unity composes with film coefficients
/// (`uom`'s `HeatTransfer`, W/m²·K) in the overall-coefficient resistance
/// chain `1/U = 1/h + Rf + …`.
pub type FoulingResistance = Quantity<ISQ<Z0, N1, P3, Z0, P1, Z0, Z0>, SI<f64>, f64>;

/// Constructs a [`FoulingResistance`] from its SI value (m²·K/W).
///
/// `uom` names no unit for thermal insulance, so the quantity is built from
/// its coherent value directly.
#[must_use]
pub fn fouling_resistance(value: f64) -> FoulingResistance {
    FoulingResistance {
        dimension: PhantomData,
        units: PhantomData,
        value,
    }
}
