//! TEMA mechanical rules for shell-and-tube exchangers.

use uom::si::{length::meter, pressure::pascal, ratio::ratio};

use super::{RuleContext, Severity, Standard, StandardReport, ValidationRule};

/// Allowable stress for the tube wall check, Pa. Carbon steel at moderate
/// temperature.
const ALLOWABLE_STRESS: f64 = 137.9e6;
/// Practical manufacturing floor on tube wall thickness, m.
const MIN_WALL_FLOOR: f64 = 1.2e-3;

/// Standard nominal tube lengths, m.
const STANDARD_TUBE_LENGTHS: [f64; 6] = [2.438, 3.048, 3.658, 4.877, 6.096, 7.315];
const TUBE_LENGTH_TOLERANCE: f64 = 1.0e-3;

/// Headroom allowed over the estimated maximum packable tube count.
const TUBE_COUNT_MARGIN: f64 = 1.1;

pub(super) fn report(context: &RuleContext<'_>) -> StandardReport {
    let geometry = &context.input.geometry;
    let mut rules = Vec::new();

    let length = geometry.tube_length.get::<meter>();
    let standard_length = STANDARD_TUBE_LENGTHS
        .iter()
        .any(|nominal| (length - nominal).abs() <= TUBE_LENGTH_TOLERANCE);
    rules.push(ValidationRule::check(
        "RCB-2.1",
        "Standard nominal tube length",
        format!("{length:.3} m"),
        "2.438, 3.048, 3.658, 4.877, 6.096 or 7.315 m".to_string(),
        standard_length,
        Severity::Warning,
    ));

    // Thin-wall hoop stress plus a manufacturing floor.
    let design_pressure = context.input.design_pressure.get::<pascal>();
    let d_o = geometry.tube_outer_diameter.get::<meter>();
    let wall = geometry.tube_wall_thickness.get::<meter>();
    let required_wall =
        (design_pressure * d_o / (2.0 * ALLOWABLE_STRESS)).max(MIN_WALL_FLOOR);
    rules.push(ValidationRule::check(
        "RCB-2.31",
        "Minimum tube wall thickness for design pressure",
        format!("{:.2} mm", wall * 1000.0),
        format!("≥ {:.2} mm", required_wall * 1000.0),
        wall >= required_wall,
        Severity::Critical,
    ));

    let max_count = f64::from(geometry.estimated_max_tube_count()) * TUBE_COUNT_MARGIN;
    rules.push(ValidationRule::check(
        "RCB-2.5",
        "Tube count within the packable bundle",
        format!("{}", geometry.tube_count),
        format!("≤ {:.0}", max_count.floor()),
        f64::from(geometry.tube_count) <= max_count,
        Severity::Warning,
    ));

    let cut = geometry.baffle_cut.get::<ratio>();
    rules.push(ValidationRule::check(
        "RCB-4.41",
        "Baffle cut between 15 % and 45 %",
        format!("{:.0} %", cut * 100.0),
        "15 % to 45 %".to_string(),
        (0.15..=0.45).contains(&cut),
        Severity::Warning,
    ));

    let shell_id = geometry.shell_inner_diameter.get::<meter>();
    let spacing = geometry.baffle_spacing.get::<meter>();
    let min_spacing = (0.2 * shell_id).max(0.05);
    rules.push(ValidationRule::check(
        "RCB-4.51",
        "Baffle spacing above the minimum",
        format!("{spacing:.3} m"),
        format!("≥ {min_spacing:.3} m"),
        spacing >= min_spacing,
        Severity::Warning,
    ));
    rules.push(ValidationRule::check(
        "RCB-4.52",
        "Baffle spacing within the shell diameter",
        format!("{spacing:.3} m"),
        format!("≤ {shell_id:.3} m"),
        spacing <= shell_id,
        Severity::Warning,
    ));

    StandardReport {
        standard: Standard::Tema,
        rules,
    }
}
