//! API 660 rules for shell-and-tube exchangers.

use uom::si::{ratio::ratio, velocity::meter_per_second};

use super::{
    super::vibration::VibrationStatus, RuleContext, Severity, Standard, StandardReport,
    ValidationRule, shell_velocity_limit, tube_velocity_limit,
};

/// Maximum tolerated mismatch between hot- and cold-side duties.
const DUTY_IMBALANCE_LIMIT: f64 = 0.05;

pub(super) fn report(context: &RuleContext<'_>) -> StandardReport {
    let input = context.input;
    let mut rules = Vec::new();

    let imbalance = context.thermal.duty_imbalance.get::<ratio>();
    rules.push(ValidationRule::check(
        "7.3.2",
        "Hot- and cold-side duties balanced",
        format!("{:.1} %", imbalance * 100.0),
        format!("≤ {:.1} %", DUTY_IMBALANCE_LIMIT * 100.0),
        imbalance <= DUTY_IMBALANCE_LIMIT,
        Severity::Warning,
    ));

    let tube_velocity = context.pressure.tube.velocity.get::<meter_per_second>();
    let tube_limit = tube_velocity_limit(input.service, input.cold.phase);
    rules.push(ValidationRule::check(
        "7.4.3",
        "Tube-side velocity within service limit",
        format!("{tube_velocity:.2} m/s"),
        format!("≤ {tube_limit:.2} m/s"),
        tube_velocity <= tube_limit,
        Severity::Critical,
    ));

    let shell_velocity = context.pressure.shell.velocity.get::<meter_per_second>();
    let shell_limit = shell_velocity_limit(input.service, input.hot.phase);
    rules.push(ValidationRule::check(
        "7.4.4",
        "Shell-side crossflow velocity within service limit",
        format!("{shell_velocity:.2} m/s"),
        format!("≤ {shell_limit:.2} m/s"),
        shell_velocity <= shell_limit,
        Severity::Warning,
    ));

    let pitch_ratio = input.geometry.pitch_ratio().get::<ratio>();
    rules.push(ValidationRule::check(
        "7.5.4",
        "Tube pitch ratio at least 1.25",
        format!("{pitch_ratio:.3}"),
        "≥ 1.250".to_string(),
        pitch_ratio >= 1.25,
        Severity::Critical,
    ));

    // Informational gate in gas service: the vibration screening must come
    // back safe. Never blocks validity.
    if input.hot.phase.is_gas() || input.cold.phase.is_gas() {
        rules.push(ValidationRule::check(
            "7.6.1",
            "Vibration analysis required for gas service",
            format!("{:?}", context.vibration.status),
            "Safe".to_string(),
            context.vibration.status == VibrationStatus::Safe,
            Severity::Warning,
        ));
    }

    StandardReport {
        standard: Standard::Api660,
        rules,
    }
}
