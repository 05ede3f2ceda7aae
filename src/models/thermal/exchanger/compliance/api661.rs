//! API 661 rules for air-cooled exchangers.

use uom::si::{
    length::meter, pressure::pascal, ratio::ratio, velocity::meter_per_second,
};

use super::{
    super::input::AirCooledDuty, RuleContext, Severity, Standard, StandardReport,
    ValidationRule,
};

/// Design face velocity band, m/s.
const FACE_VELOCITY_BAND: (f64, f64) = (2.5, 4.0);
/// Minimum air-side pressure drop for stable flow distribution, Pa.
const MIN_AIR_SIDE_DROP: f64 = 100.0;
/// Standard bundle widths, m.
const STANDARD_BUNDLE_WIDTHS: [f64; 4] = [2.0, 2.5, 3.0, 3.5];
const BUNDLE_WIDTH_TOLERANCE: f64 = 1.0e-3;
/// Fin density band, fins per metre.
const FIN_DENSITY_BAND: (f64, f64) = (275.0, 433.0);
/// Standard tube outside diameters, m.
const STANDARD_TUBE_DIAMETERS: [f64; 3] = [25.4e-3, 31.75e-3, 38.1e-3];
const TUBE_DIAMETER_TOLERANCE: f64 = 1.0e-4;
/// Allowable stress for the header plate check, Pa.
const ALLOWABLE_STRESS: f64 = 137.9e6;
/// Characteristic unsupported span of the header plate, m.
const HEADER_SPAN: f64 = 0.2;
/// Manufacturing floor on header plate thickness, m.
const MIN_HEADER_FLOOR: f64 = 8.0e-3;
const MIN_FAN_COVERAGE: f64 = 0.40;

pub(super) fn report(context: &RuleContext<'_>, duty: &AirCooledDuty) -> StandardReport {
    let geometry = &context.input.geometry;
    let mut rules = Vec::new();

    let width = duty.bundle_width.get::<meter>();
    let standard_width = STANDARD_BUNDLE_WIDTHS
        .iter()
        .any(|nominal| (width - nominal).abs() <= BUNDLE_WIDTH_TOLERANCE);
    rules.push(ValidationRule::check(
        "7.1.3",
        "Standard bundle width",
        format!("{width:.3} m"),
        "2.0, 2.5, 3.0 or 3.5 m".to_string(),
        standard_width,
        Severity::Warning,
    ));

    let face_velocity = duty.face_velocity.get::<meter_per_second>();
    rules.push(ValidationRule::check(
        "7.1.6.1",
        "Air face velocity within the design band",
        format!("{face_velocity:.2} m/s"),
        format!(
            "{:.1} to {:.1} m/s",
            FACE_VELOCITY_BAND.0, FACE_VELOCITY_BAND.1
        ),
        (FACE_VELOCITY_BAND.0..=FACE_VELOCITY_BAND.1).contains(&face_velocity),
        Severity::Warning,
    ));

    let air_drop = duty.air_side_pressure_drop.get::<pascal>();
    rules.push(ValidationRule::check(
        "7.1.6.2",
        "Minimum air-side pressure drop for flow distribution",
        format!("{air_drop:.0} Pa"),
        format!("≥ {MIN_AIR_SIDE_DROP:.0} Pa"),
        air_drop >= MIN_AIR_SIDE_DROP,
        Severity::Critical,
    ));

    // Flat-plate header under design pressure, plus a manufacturing floor.
    let design_pressure = context.input.design_pressure.get::<pascal>();
    let header = duty.header_thickness.get::<meter>();
    let required_header = (design_pressure * HEADER_SPAN / (2.0 * ALLOWABLE_STRESS))
        .max(MIN_HEADER_FLOOR);
    rules.push(ValidationRule::check(
        "7.1.7",
        "Minimum header plate thickness for design pressure",
        format!("{:.1} mm", header * 1000.0),
        format!("≥ {:.1} mm", required_header * 1000.0),
        header >= required_header,
        Severity::Critical,
    ));

    rules.push(ValidationRule::check(
        "7.1.9",
        "Fin density within the standard band",
        format!("{:.0} fins/m", duty.fin_density),
        format!(
            "{:.0} to {:.0} fins/m",
            FIN_DENSITY_BAND.0, FIN_DENSITY_BAND.1
        ),
        (FIN_DENSITY_BAND.0..=FIN_DENSITY_BAND.1).contains(&duty.fin_density),
        Severity::Warning,
    ));

    let d_o = geometry.tube_outer_diameter.get::<meter>();
    let standard_diameter = STANDARD_TUBE_DIAMETERS
        .iter()
        .any(|nominal| (d_o - nominal).abs() <= TUBE_DIAMETER_TOLERANCE);
    rules.push(ValidationRule::check(
        "7.1.10",
        "Standard tube outside diameter",
        format!("{:.2} mm", d_o * 1000.0),
        "25.40, 31.75 or 38.10 mm".to_string(),
        standard_diameter,
        Severity::Warning,
    ));

    let coverage = duty.fan_coverage.get::<ratio>();
    rules.push(ValidationRule::check(
        "7.1.11",
        "Fan coverage of the bundle plan area",
        format!("{:.0} %", coverage * 100.0),
        format!("≥ {:.0} %", MIN_FAN_COVERAGE * 100.0),
        coverage >= MIN_FAN_COVERAGE,
        Severity::Warning,
    ));

    StandardReport {
        standard: Standard::Api661,
        rules,
    }
}

#[cfg(test)]
mod tests {
    use super::{
        super::{
            super::{
                input::{ExchangerInput, ExchangerKind, test_support::*},
                pressure::pressure_drops,
                thermal, vibration,
            },
            validate_exchanger,
        },
        *,
    };

    use uom::si::{
        f64::{Length, Pressure, Ratio, Velocity},
        length::millimeter,
    };

    fn air_cooled_duty() -> AirCooledDuty {
        AirCooledDuty {
            face_velocity: Velocity::new::<meter_per_second>(3.0),
            bundle_width: Length::new::<meter>(3.0),
            fin_density: 354.0,
            fan_coverage: Ratio::new::<ratio>(0.45),
            header_thickness: Length::new::<millimeter>(10.0),
            air_side_pressure_drop: Pressure::new::<pascal>(140.0),
        }
    }

    fn air_cooled_input() -> ExchangerInput {
        let mut input = counter_flow_input();
        input.kind = ExchangerKind::AirCooled(air_cooled_duty());
        input.geometry.tube_outer_diameter = Length::new::<millimeter>(25.4);
        input
    }

    #[test]
    fn air_cooled_dispatch_runs_only_api_661() {
        let input = air_cooled_input();
        let thermal = thermal::performance(&input).unwrap();
        let pressure = pressure_drops(&input);
        let vibration = vibration::assess(&input, &pressure);

        let reports = validate_exchanger(&input, &thermal, &pressure, &vibration);

        assert_eq!(reports.len(), 1);
        assert_eq!(reports[0].standard, Standard::Api661);
    }

    #[test]
    fn rules_are_emitted_in_ascending_clause_order() {
        let input = air_cooled_input();
        let thermal = thermal::performance(&input).unwrap();
        let pressure = pressure_drops(&input);
        let vibration = vibration::assess(&input, &pressure);
        let reports = validate_exchanger(&input, &thermal, &pressure, &vibration);

        let sections: Vec<_> = reports[0].rules.iter().map(|r| r.section.as_str()).collect();
        assert_eq!(
            sections,
            ["7.1.3", "7.1.6.1", "7.1.6.2", "7.1.7", "7.1.9", "7.1.10", "7.1.11"]
        );
    }

    #[test]
    fn starved_air_side_is_a_critical_failure() {
        let mut input = air_cooled_input();
        if let ExchangerKind::AirCooled(duty) = &mut input.kind {
            duty.air_side_pressure_drop = Pressure::new::<pascal>(60.0);
        }

        let thermal = thermal::performance(&input).unwrap();
        let pressure = pressure_drops(&input);
        let vibration = vibration::assess(&input, &pressure);
        let reports = validate_exchanger(&input, &thermal, &pressure, &vibration);

        let report = &reports[0];
        assert!(!report.is_valid());
        assert!(
            report
                .errors()
                .any(|rule| rule.requirement.contains("pressure drop"))
        );
    }

    #[test]
    fn conforming_air_cooled_bundle_is_valid() {
        let input = air_cooled_input();
        let thermal = thermal::performance(&input).unwrap();
        let pressure = pressure_drops(&input);
        let vibration = vibration::assess(&input, &pressure);
        let reports = validate_exchanger(&input, &thermal, &pressure, &vibration);

        assert!(reports[0].is_valid());
    }
}
