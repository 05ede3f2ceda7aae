//! Log-mean temperature difference.

use thiserror::Error;
use uom::si::{
    f64::{TemperatureInterval, ThermodynamicTemperature},
    temperature_interval::kelvin as delta_kelvin,
};

use crate::support::units::TemperatureDifference;

use super::FlowArrangement;

/// Terminal temperature differences below this (in kelvin) are treated as
/// equal, removing the removable singularity of the log-mean formula.
pub(crate) const DELTA_T_DEGENERACY: f64 = 1e-3;

/// The two terminal temperature differences feeding the LMTD.
#[derive(Debug, Clone, Copy)]
pub struct TerminalDifferences {
    pub delta_t1: TemperatureInterval,
    pub delta_t2: TemperatureInterval,
}

/// An infeasible temperature cross: one or both terminal differences are not
/// strictly positive.
///
/// Surfaced as a named condition rather than clamped, so the caller can
/// distinguish it from a generic invalid configuration.
#[derive(Debug, Clone, Copy, PartialEq, Error)]
#[error(
    "temperature cross: terminal differences must be positive \
     (ΔT1 = {delta_t1_kelvin} K, ΔT2 = {delta_t2_kelvin} K)"
)]
pub struct TemperatureCross {
    pub delta_t1_kelvin: f64,
    pub delta_t2_kelvin: f64,
}

/// Computes the terminal temperature differences for an arrangement.
///
/// Parallel flow pairs inlet with inlet and outlet with outlet. Counter flow
/// and all shell/cross variants (whose correction factor is applied on top
/// of the counter-flow LMTD) pair each stream's inlet with the other's
/// outlet.
#[must_use]
pub fn terminal_differences(
    arrangement: FlowArrangement,
    hot_inlet: ThermodynamicTemperature,
    hot_outlet: ThermodynamicTemperature,
    cold_inlet: ThermodynamicTemperature,
    cold_outlet: ThermodynamicTemperature,
) -> TerminalDifferences {
    if arrangement.uses_parallel_differences() {
        TerminalDifferences {
            delta_t1: hot_inlet.minus(cold_inlet),
            delta_t2: hot_outlet.minus(cold_outlet),
        }
    } else {
        TerminalDifferences {
            delta_t1: hot_inlet.minus(cold_outlet),
            delta_t2: hot_outlet.minus(cold_inlet),
        }
    }
}

/// Computes the log-mean of the two terminal differences.
///
/// When the differences agree to within 1 mK the LMTD is `ΔT1` exactly,
/// avoiding the `0/ln(1)` form.
///
/// # Errors
///
/// Returns [`TemperatureCross`] if either difference is not strictly
/// positive; no value is produced for an infeasible temperature profile.
pub fn log_mean_temperature_difference(
    differences: TerminalDifferences,
) -> Result<TemperatureInterval, TemperatureCross> {
    let dt1 = differences.delta_t1.get::<delta_kelvin>();
    let dt2 = differences.delta_t2.get::<delta_kelvin>();

    if dt1 <= 0.0 || dt2 <= 0.0 {
        return Err(TemperatureCross {
            delta_t1_kelvin: dt1,
            delta_t2_kelvin: dt2,
        });
    }

    let lmtd = if (dt1 - dt2).abs() < DELTA_T_DEGENERACY {
        dt1
    } else {
        (dt1 - dt2) / (dt1 / dt2).ln()
    };

    Ok(TemperatureInterval::new::<delta_kelvin>(lmtd))
}

#[cfg(test)]
mod tests {
    use super::*;

    use approx::assert_relative_eq;
    use uom::si::thermodynamic_temperature::degree_celsius;

    fn celsius(value: f64) -> ThermodynamicTemperature {
        ThermodynamicTemperature::new::<degree_celsius>(value)
    }

    #[test]
    fn counter_flow_pairs_inlets_with_outlets() {
        let d = terminal_differences(
            FlowArrangement::CounterFlow,
            celsius(150.0),
            celsius(90.0),
            celsius(25.0),
            celsius(70.0),
        );

        assert_relative_eq!(d.delta_t1.get::<delta_kelvin>(), 80.0);
        assert_relative_eq!(d.delta_t2.get::<delta_kelvin>(), 65.0);
    }

    #[test]
    fn parallel_flow_pairs_like_terminals() {
        let d = terminal_differences(
            FlowArrangement::ParallelFlow,
            celsius(150.0),
            celsius(90.0),
            celsius(25.0),
            celsius(70.0),
        );

        assert_relative_eq!(d.delta_t1.get::<delta_kelvin>(), 125.0);
        assert_relative_eq!(d.delta_t2.get::<delta_kelvin>(), 20.0);
    }

    #[test]
    fn log_mean_of_distinct_differences() {
        let d = terminal_differences(
            FlowArrangement::CounterFlow,
            celsius(150.0),
            celsius(90.0),
            celsius(25.0),
            celsius(70.0),
        );

        let lmtd = log_mean_temperature_difference(d).unwrap();

        // (80 - 65) / ln(80 / 65)
        assert_relative_eq!(lmtd.get::<delta_kelvin>(), 72.2406, epsilon = 1e-3);
    }

    #[test]
    fn equal_differences_avoid_the_singularity() {
        // A balanced counter-flow exchanger: ΔT1 = ΔT2 = 30 K.
        let d = terminal_differences(
            FlowArrangement::CounterFlow,
            celsius(100.0),
            celsius(60.0),
            celsius(30.0),
            celsius(70.0),
        );

        let lmtd = log_mean_temperature_difference(d).unwrap();

        assert_relative_eq!(lmtd.get::<delta_kelvin>(), 30.0);
    }

    #[test]
    fn temperature_cross_is_a_named_error() {
        // Cold outlet above hot inlet: ΔT1 goes non-positive.
        let d = terminal_differences(
            FlowArrangement::CounterFlow,
            celsius(80.0),
            celsius(60.0),
            celsius(30.0),
            celsius(85.0),
        );

        let err = log_mean_temperature_difference(d).unwrap_err();

        assert!(err.delta_t1_kelvin <= 0.0);
    }
}
