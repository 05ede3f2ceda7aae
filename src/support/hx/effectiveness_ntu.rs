//! Effectiveness-NTU relations.

use std::ops::Deref;

use crate::support::constraint::{Constrained, ConstraintResult, NonNegative, UnitInterval};
use uom::si::{
    f64::{Area, HeatTransfer, Ratio, ThermalConductance},
    ratio::ratio,
};

use super::{CapacitanceRate, CapacityRatio, FlowArrangement};

/// `|Cr - 1|` below this switches to the balanced-streams closed form.
const CR_DEGENERACY: f64 = 1e-3;

/// The effectiveness of a heat exchanger: actual heat transferred over the
/// thermodynamic maximum. Always in [0, 1].
#[derive(Debug, Clone, Copy)]
pub struct Effectiveness(Constrained<Ratio, UnitInterval>);

impl Effectiveness {
    /// Create an [`Effectiveness`] from a scalar value.
    ///
    /// # Errors
    ///
    /// Returns `Err` if the value lies outside [0, 1].
    pub fn new(value: f64) -> ConstraintResult<Self> {
        Ok(Self(UnitInterval::new(Ratio::new::<ratio>(value))?))
    }
}

impl Deref for Effectiveness {
    type Target = Ratio;

    fn deref(&self) -> &Self::Target {
        self.0.as_ref()
    }
}

/// Number of transfer units, `UA / Cmin`: the dimensionless thermal size of
/// the exchanger. Always non-negative.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd)]
pub struct Ntu(Constrained<Ratio, NonNegative>);

impl Ntu {
    /// Create an [`Ntu`] from a scalar value.
    ///
    /// # Errors
    ///
    /// Returns `Err` if the value is negative.
    pub fn new(value: f64) -> ConstraintResult<Self> {
        Ok(Self(NonNegative::new(Ratio::new::<ratio>(value))?))
    }

    /// Create an [`Ntu`] from an overall coefficient, area, and the two
    /// capacitance rates (the smaller of which enters the definition).
    ///
    /// # Errors
    ///
    /// Returns `Err` if the resulting NTU would be negative.
    pub fn from_coefficient_and_area(
        u: HeatTransfer,
        area: Area,
        rates: [CapacitanceRate; 2],
    ) -> ConstraintResult<Self> {
        let ua: ThermalConductance = u * area;
        Ok(Self(NonNegative::new(ua / rates[0].min(*rates[1]))?))
    }
}

impl Deref for Ntu {
    type Target = Ratio;

    fn deref(&self) -> &Self::Target {
        self.0.as_ref()
    }
}

/// Computes the effectiveness for an arrangement.
///
/// Parallel flow uses the co-current relation; every other arrangement,
/// matching the counter-flow LMTD convention it shares, uses the
/// counter-current relation. Both carry documented substitutions at the
/// degenerate capacity ratios:
///
/// - `Cr = 0` (one stream effectively isothermal): `ε = 1 − e^(−NTU)`.
/// - `Cr ≈ 1`, counter flow: `ε = NTU / (1 + NTU)`.
#[must_use]
pub fn effectiveness(arrangement: FlowArrangement, ntu: Ntu, cr: CapacityRatio) -> Effectiveness {
    let ntu = ntu.get::<ratio>();
    let cr = cr.get::<ratio>();

    let eff = if arrangement.uses_parallel_differences() {
        parallel_flow(ntu, cr)
    } else {
        counter_flow(ntu, cr)
    };

    Effectiveness::new(eff.min(1.0))
        .expect("a non-negative NTU and a capacity ratio in [0, 1] always yield a valid effectiveness")
}

fn counter_flow(ntu: f64, cr: f64) -> f64 {
    if cr == 0.0 {
        1.0 - (-ntu).exp()
    } else if (cr - 1.0).abs() < CR_DEGENERACY {
        ntu / (1.0 + ntu)
    } else {
        let e = (-ntu * (1.0 - cr)).exp();
        (1.0 - e) / (1.0 - cr * e)
    }
}

fn parallel_flow(ntu: f64, cr: f64) -> f64 {
    if cr == 0.0 {
        1.0 - (-ntu).exp()
    } else {
        (1.0 - (-ntu * (1.0 + cr)).exp()) / (1.0 + cr)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use approx::assert_relative_eq;

    #[test]
    fn families_agree_at_zero_capacity_ratio() -> ConstraintResult<()> {
        let cr = CapacityRatio::new(0.0)?;

        for ntu_value in [0.0, 0.3, 1.0, 2.5, 8.0] {
            let ntu = Ntu::new(ntu_value)?;
            let counter = effectiveness(FlowArrangement::CounterFlow, ntu, cr);
            let parallel = effectiveness(FlowArrangement::ParallelFlow, ntu, cr);
            let expected = 1.0 - (-ntu_value).exp();

            assert_relative_eq!(counter.get::<ratio>(), expected);
            assert_relative_eq!(parallel.get::<ratio>(), expected);
        }
        Ok(())
    }

    #[test]
    fn balanced_counter_flow_uses_the_closed_form() -> ConstraintResult<()> {
        let eff = effectiveness(
            FlowArrangement::CounterFlow,
            Ntu::new(2.0)?,
            CapacityRatio::new(1.0)?,
        );

        assert_relative_eq!(eff.get::<ratio>(), 2.0 / 3.0);
        Ok(())
    }

    #[test]
    fn counter_flow_general_case() -> ConstraintResult<()> {
        // NTU = 1.5, Cr = 0.5.
        let eff = effectiveness(
            FlowArrangement::CounterFlow,
            Ntu::new(1.5)?,
            CapacityRatio::new(0.5)?,
        );

        let e = (-1.5_f64 * 0.5).exp();
        assert_relative_eq!(eff.get::<ratio>(), (1.0 - e) / (1.0 - 0.5 * e));
        Ok(())
    }

    #[test]
    fn parallel_flow_is_bounded_by_its_asymptote() -> ConstraintResult<()> {
        // ε → 1 / (1 + Cr) as NTU grows.
        let eff = effectiveness(
            FlowArrangement::ParallelFlow,
            Ntu::new(50.0)?,
            CapacityRatio::new(0.8)?,
        );

        assert_relative_eq!(eff.get::<ratio>(), 1.0 / 1.8, epsilon = 1e-9);
        Ok(())
    }

    #[test]
    fn ntu_from_coefficient_and_area() -> ConstraintResult<()> {
        use uom::si::{
            area::square_meter, heat_transfer::watt_per_square_meter_kelvin,
            thermal_conductance::watt_per_kelvin,
        };

        let rates = [
            CapacitanceRate::from_quantity(ThermalConductance::new::<watt_per_kelvin>(25_000.0))?,
            CapacitanceRate::from_quantity(ThermalConductance::new::<watt_per_kelvin>(50_000.0))?,
        ];

        let ntu = Ntu::from_coefficient_and_area(
            HeatTransfer::new::<watt_per_square_meter_kelvin>(850.0),
            Area::new::<square_meter>(100.0),
            rates,
        )?;

        assert_relative_eq!(ntu.get::<ratio>(), 85_000.0 / 25_000.0);
        Ok(())
    }
}
