//! Thermal performance: duty, corrected LMTD, the U chain, and the
//! design/rating solve.

use uom::{
    ConstZero,
    si::{
        f64::{
            Area, HeatTransfer, Power, Ratio, TemperatureInterval, ThermodynamicTemperature,
        },
        heat_transfer::watt_per_square_meter_kelvin,
        length::meter,
        ratio::ratio,
        thermal_conductivity::watt_per_meter_kelvin,
    },
};

use crate::support::{
    hx::{
        CapacityRatio, Effectiveness, Ntu, correction_factor, effectiveness,
        log_mean_temperature_difference, terminal_differences,
    },
    units::TemperatureDifference,
};

use super::{
    error::ExchangerError,
    input::{CalculationMode, ExchangerInput},
    pressure::{shell_flow, tube_flow},
};

/// Thermal performance of the exchanger.
///
/// Coefficient naming:
///
/// - `u_clean`: the sizing basis before fouling — the caller's overall-U
///   estimate when one is supplied (audited-estimate precedence), otherwise
///   the film-derived clean coefficient.
/// - `u_fouled` / `u_service`: `u_clean` degraded by both fouling
///   resistances; the coefficient available in service.
/// - `u_required`: the coefficient the duty actually demands from the
///   installed area at the effective MTD. Equal to `u_fouled` in design
///   mode, where the area is chosen to make it so.
#[derive(Debug, Clone, Copy)]
pub struct ThermalResult {
    pub duty: Power,
    /// Relative mismatch between hot- and cold-side duties, from the given
    /// terminal temperatures. Informational; beyond 5 % it surfaces as a
    /// compliance warning, never as an error.
    pub duty_imbalance: Ratio,
    pub lmtd: TemperatureInterval,
    pub correction_factor: Ratio,
    pub effective_lmtd: TemperatureInterval,
    pub u_clean: HeatTransfer,
    pub u_fouled: HeatTransfer,
    pub u_required: HeatTransfer,
    pub u_service: HeatTransfer,
    pub tube_film_coefficient: HeatTransfer,
    pub shell_film_coefficient: HeatTransfer,
    pub effectiveness: Effectiveness,
    pub ntu: Ntu,
    pub required_area: Area,
    /// Excess coefficient (equivalently, area) margin beyond the strict
    /// thermal requirement. Zero in design mode.
    pub oversurface: Ratio,
    /// Hot outlet: the given temperature in design mode, the solved one in
    /// rating mode.
    pub hot_outlet: ThermodynamicTemperature,
    pub cold_outlet: ThermodynamicTemperature,
}

/// Runs the thermal performance calculation.
///
/// # Errors
///
/// - [`ExchangerError::TemperatureCross`] for an infeasible temperature
///   profile.
/// - [`ExchangerError::InvalidConfiguration`] when a capacitance rate or
///   coefficient degenerates to a non-positive value.
pub fn performance(input: &ExchangerInput) -> Result<ThermalResult, ExchangerError> {
    let c_hot = input
        .hot
        .capacitance_rate()
        .map_err(|source| ExchangerError::invalid("hot", "capacitance_rate", source))?;
    let c_cold = input
        .cold
        .capacitance_rate()
        .map_err(|source| ExchangerError::invalid("cold", "capacitance_rate", source))?;
    let rates = [c_hot, c_cold];
    let cr = CapacityRatio::from_capacitance_rates(rates);
    let c_min = c_hot.min(*c_cold);

    let duty_hot: Power =
        *c_hot * input.hot.inlet_temperature.minus(input.hot.outlet_temperature);
    let duty_cold: Power =
        *c_cold * input.cold.outlet_temperature.minus(input.cold.inlet_temperature);
    let duty_imbalance = if duty_hot == Power::ZERO {
        Ratio::ZERO
    } else {
        ((duty_hot - duty_cold) / duty_hot).abs()
    };

    let (h_tube, h_shell) = film_coefficients(input);
    let u_film = clean_coefficient(input, h_tube, h_shell);

    let u_clean = input.overall_u_estimate.unwrap_or(u_film);
    let u_fouled = fouled_coefficient(input, u_clean)?;

    match input.mode {
        CalculationMode::Design => {
            let differences = terminal_differences(
                input.arrangement,
                input.hot.inlet_temperature,
                input.hot.outlet_temperature,
                input.cold.inlet_temperature,
                input.cold.outlet_temperature,
            );
            let lmtd = log_mean_temperature_difference(differences)?;
            let f = correction_factor(
                input.arrangement,
                input.hot.inlet_temperature,
                input.hot.outlet_temperature,
                input.cold.inlet_temperature,
                input.cold.outlet_temperature,
            );
            let effective_lmtd = lmtd * f;

            let required_area: Area = duty_hot / (u_fouled * effective_lmtd);
            let ntu = Ntu::from_coefficient_and_area(u_fouled, required_area, rates)
                .map_err(|source| ExchangerError::invalid("thermal", "ntu", source))?;

            Ok(ThermalResult {
                duty: duty_hot,
                duty_imbalance,
                lmtd,
                correction_factor: f,
                effective_lmtd,
                u_clean,
                u_fouled,
                u_required: u_fouled,
                u_service: u_fouled,
                tube_film_coefficient: h_tube,
                shell_film_coefficient: h_shell,
                effectiveness: effectiveness(input.arrangement, ntu, cr),
                ntu,
                required_area,
                oversurface: Ratio::ZERO,
                hot_outlet: input.hot.outlet_temperature,
                cold_outlet: input.cold.outlet_temperature,
            })
        }
        CalculationMode::Rating { area } => {
            let ntu = Ntu::from_coefficient_and_area(u_fouled, area, rates)
                .map_err(|source| ExchangerError::invalid("thermal", "ntu", source))?;
            let eff = effectiveness(input.arrangement, ntu, cr);

            let q_max: Power =
                c_min * input.hot.inlet_temperature.minus(input.cold.inlet_temperature);
            let duty: Power = *eff * q_max;

            let hot_outlet = input.hot.inlet_temperature - duty / *c_hot;
            let cold_outlet = input.cold.inlet_temperature + duty / *c_cold;

            let differences = terminal_differences(
                input.arrangement,
                input.hot.inlet_temperature,
                hot_outlet,
                input.cold.inlet_temperature,
                cold_outlet,
            );
            let lmtd = log_mean_temperature_difference(differences)?;
            let f = correction_factor(
                input.arrangement,
                input.hot.inlet_temperature,
                hot_outlet,
                input.cold.inlet_temperature,
                cold_outlet,
            );
            let effective_lmtd = lmtd * f;

            let u_required: HeatTransfer = duty / (area * effective_lmtd);
            let required_area: Area = duty / (u_fouled * effective_lmtd);
            let oversurface = u_fouled / u_required - Ratio::new::<ratio>(1.0);

            Ok(ThermalResult {
                duty,
                duty_imbalance,
                lmtd,
                correction_factor: f,
                effective_lmtd,
                u_clean,
                u_fouled,
                u_required,
                u_service: u_fouled,
                tube_film_coefficient: h_tube,
                shell_film_coefficient: h_shell,
                effectiveness: eff,
                ntu,
                required_area,
                oversurface,
                hot_outlet,
                cold_outlet,
            })
        }
    }
}

/// Tube- and shell-side film coefficients.
///
/// Tube side: Dittus–Boelter `Nu = 0.023·Re^0.8·Pr^0.4`, falling back to the
/// constant-wall-temperature laminar asymptote `Nu = 3.66` below the regime
/// boundary. Shell side: Kern's `Nu = 0.36·Re^0.55·Pr^(1/3)` on the
/// equivalent diameter. Degenerate flow states yield zero coefficients.
fn film_coefficients(input: &ExchangerInput) -> (HeatTransfer, HeatTransfer) {
    let geometry = &input.geometry;

    let tube = {
        let flow = tube_flow(&input.cold, geometry);
        if flow.reynolds <= 0.0 {
            0.0
        } else {
            let pr = input.cold.prandtl().get::<ratio>();
            let nu = if flow.reynolds < 2300.0 {
                3.66
            } else {
                0.023 * flow.reynolds.powf(0.8) * pr.powf(0.4)
            };
            nu * input.cold.thermal_conductivity.get::<watt_per_meter_kelvin>()
                / geometry.tube_inner_diameter().get::<meter>()
        }
    };

    let shell = {
        let flow = shell_flow(&input.hot, geometry);
        if flow.reynolds <= 0.0 {
            0.0
        } else {
            let pr = input.hot.prandtl().get::<ratio>();
            let nu = 0.36 * flow.reynolds.powf(0.55) * pr.powf(1.0 / 3.0);
            nu * input.hot.thermal_conductivity.get::<watt_per_meter_kelvin>()
                / geometry.equivalent_diameter().get::<meter>()
        }
    };

    (
        HeatTransfer::new::<watt_per_square_meter_kelvin>(tube),
        HeatTransfer::new::<watt_per_square_meter_kelvin>(shell),
    )
}

/// Clean overall coefficient referenced to the outside area:
/// `1/U = 1/h_s + d_o·ln(d_o/d_i)/(2·k_w) + d_o/(d_i·h_t)`.
fn clean_coefficient(
    input: &ExchangerInput,
    h_tube: HeatTransfer,
    h_shell: HeatTransfer,
) -> HeatTransfer {
    let h_t = h_tube.get::<watt_per_square_meter_kelvin>();
    let h_s = h_shell.get::<watt_per_square_meter_kelvin>();
    if h_t <= 0.0 || h_s <= 0.0 {
        return HeatTransfer::ZERO;
    }

    let d_o = input.geometry.tube_outer_diameter.get::<meter>();
    let d_i = input.geometry.tube_inner_diameter().get::<meter>();
    let k_w = input
        .geometry
        .tube_wall_conductivity
        .get::<watt_per_meter_kelvin>();

    let resistance = 1.0 / h_s + d_o * (d_o / d_i).ln() / (2.0 * k_w) + d_o / (d_i * h_t);

    HeatTransfer::new::<watt_per_square_meter_kelvin>(1.0 / resistance)
}

/// `1/U_fouled = 1/U_clean + Rf_hot + Rf_cold`.
fn fouled_coefficient(
    input: &ExchangerInput,
    u_clean: HeatTransfer,
) -> Result<HeatTransfer, ExchangerError> {
    let u = u_clean.get::<watt_per_square_meter_kelvin>();
    if u <= 0.0 {
        return Err(ExchangerError::invalid(
            "thermal",
            "u_clean",
            crate::support::constraint::ConstraintError::Zero,
        ));
    }

    // Fouling resistances are SI-coherent (m²·K/W), so raw values compose
    // directly with 1/U.
    let resistance = 1.0 / u + input.hot.fouling_resistance.value + input.cold.fouling_resistance.value;

    Ok(HeatTransfer::new::<watt_per_square_meter_kelvin>(
        1.0 / resistance,
    ))
}

#[cfg(test)]
mod tests {
    use super::{
        super::input::{Phase, test_support::*},
        *,
    };

    use approx::assert_relative_eq;
    use uom::si::{
        area::square_meter, power::watt, temperature_interval::kelvin as delta_kelvin,
        thermodynamic_temperature::kelvin,
    };

    use crate::support::units::fouling_resistance;

    #[test]
    fn counter_flow_design_case() {
        // Hot 150→90 °C at 60,000 kg/h, cold 25→70 °C at 80,000 kg/h,
        // U = 850 W/m²·K, zero fouling.
        let mut input = counter_flow_input();
        input.hot.specific_heat =
            uom::si::f64::SpecificHeatCapacity::new::<
                uom::si::specific_heat_capacity::joule_per_kilogram_kelvin,
            >(2100.0);

        let result = performance(&input).unwrap();

        assert!(result.duty.get::<watt>() > 0.0);
        assert_relative_eq!(result.correction_factor.get::<ratio>(), 1.0);
        assert!(result.lmtd.get::<delta_kelvin>() > 0.0);
        assert!(result.lmtd.get::<delta_kelvin>().is_finite());
        assert!(result.required_area.get::<square_meter>() > 0.0);
        assert!(result.required_area.get::<square_meter>().is_finite());

        // Q = ṁ·cp·ΔT = (60000/3600)·2100·60
        assert_relative_eq!(result.duty.get::<watt>(), 2_100_000.0, epsilon = 1.0);
    }

    #[test]
    fn hydrocarbon_against_water_design_case() {
        // Hot hydrocarbon 150→90 °C at 50,000 kg/h (cp 2.1 kJ/kg·K), cold
        // water 25→70 °C at 80,000 kg/h, U = 850 W/m²·K, zero fouling. The
        // duties disagree; sizing follows the hot side.
        let mut input = counter_flow_input();
        input.hot = water_stream(150.0, 90.0, 50_000.0, Phase::Liquid);
        input.hot.specific_heat =
            uom::si::f64::SpecificHeatCapacity::new::<
                uom::si::specific_heat_capacity::joule_per_kilogram_kelvin,
            >(2100.0);

        let result = performance(&input).unwrap();

        assert!(result.lmtd.get::<delta_kelvin>() > 0.0);
        assert!(result.lmtd.get::<delta_kelvin>().is_finite());
        assert_relative_eq!(result.correction_factor.get::<ratio>(), 1.0);
        assert!(result.required_area.get::<square_meter>() > 0.0);
        assert!(result.required_area.get::<square_meter>().is_finite());

        // Q = ṁ·cp·ΔT = (50000/3600)·2100·60
        assert_relative_eq!(result.duty.get::<watt>(), 1_750_000.0, epsilon = 1.0);
    }

    #[test]
    fn duty_imbalance_is_informational() {
        let mut input = counter_flow_input();
        // Shrink the cold-side temperature rise so the two duties disagree.
        input.cold.outlet_temperature =
            ThermodynamicTemperature::new::<kelvin>(
                input.cold.inlet_temperature.get::<kelvin>() + 20.0,
            );

        let result = performance(&input).unwrap();

        assert!(result.duty_imbalance.get::<ratio>() > 0.05);
    }

    #[test]
    fn design_then_rating_round_trip() {
        let input = counter_flow_input();
        let designed = performance(&input).unwrap();

        let mut rating = input;
        rating.mode = CalculationMode::Rating {
            area: designed.required_area,
        };
        let rated = performance(&rating).unwrap();

        assert_relative_eq!(
            rated.duty.get::<watt>(),
            designed.duty.get::<watt>(),
            max_relative = 1e-6
        );
        assert_relative_eq!(
            rated.hot_outlet.get::<kelvin>(),
            input.hot.outlet_temperature.get::<kelvin>(),
            max_relative = 1e-6
        );
        assert_relative_eq!(
            rated.cold_outlet.get::<kelvin>(),
            input.cold.outlet_temperature.get::<kelvin>(),
            max_relative = 1e-6
        );
    }

    #[test]
    fn fouling_degrades_the_service_coefficient() {
        let mut input = counter_flow_input();
        input.hot.fouling_resistance = fouling_resistance(2.0e-4);
        input.cold.fouling_resistance = fouling_resistance(3.5e-4);

        let result = performance(&input).unwrap();

        let u_clean = result.u_clean.get::<watt_per_square_meter_kelvin>();
        let u_fouled = result.u_fouled.get::<watt_per_square_meter_kelvin>();

        assert!(u_fouled < u_clean);
        assert_relative_eq!(1.0 / u_fouled, 1.0 / u_clean + 5.5e-4, epsilon = 1e-9);
    }

    #[test]
    fn temperature_cross_halts_the_calculation() {
        let mut input = counter_flow_input();
        input.cold.outlet_temperature = ThermodynamicTemperature::new::<kelvin>(
            input.hot.inlet_temperature.get::<kelvin>() + 5.0,
        );

        assert!(matches!(
            performance(&input),
            Err(ExchangerError::TemperatureCross(_))
        ));
    }

    #[test]
    fn film_coefficients_are_positive_for_a_live_exchanger() {
        let input = counter_flow_input();
        let result = performance(&input).unwrap();

        assert!(result.tube_film_coefficient.get::<watt_per_square_meter_kelvin>() > 0.0);
        assert!(result.shell_film_coefficient.get::<watt_per_square_meter_kelvin>() > 0.0);
    }
}
