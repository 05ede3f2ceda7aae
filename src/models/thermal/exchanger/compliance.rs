//! Standards-compliance rule engine.
//!
//! Each standard is an ordered list of rule evaluators over the input
//! configuration and the prior calculation stages. A rule compares an actual
//! value against a limit and yields a status; reports aggregate rules per
//! standard. Evaluation order is fixed (by standard, then by clause) so a
//! given input always produces an identical report.

mod api660;
mod api661;
mod tema;

use std::fmt;

use super::{
    input::{ExchangerInput, ExchangerKind, Phase, ServiceType},
    pressure::PressureDropResult,
    thermal::ThermalResult,
    vibration::VibrationResult,
};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RuleStatus {
    Pass,
    Warning,
    Fail,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum Severity {
    Info,
    Warning,
    /// A violation invalidates the design.
    Critical,
}

/// One evaluated rule: `(actual, limit) → status`.
#[derive(Debug, Clone)]
pub struct ValidationRule {
    /// Clause reference within the standard.
    pub section: String,
    pub requirement: String,
    pub actual: String,
    pub limit: String,
    pub status: RuleStatus,
    pub severity: Severity,
}

impl ValidationRule {
    /// A satisfied rule passes; a violated one fails at critical severity and
    /// warns otherwise.
    pub(crate) fn check(
        section: &str,
        requirement: &str,
        actual: String,
        limit: String,
        satisfied: bool,
        severity: Severity,
    ) -> Self {
        let status = if satisfied {
            RuleStatus::Pass
        } else if severity == Severity::Critical {
            RuleStatus::Fail
        } else {
            RuleStatus::Warning
        };
        Self {
            section: section.to_string(),
            requirement: requirement.to_string(),
            actual,
            limit,
            status,
            severity,
        }
    }

    fn is_error(&self) -> bool {
        self.severity == Severity::Critical && self.status == RuleStatus::Fail
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Standard {
    Api660,
    Api661,
    Tema,
}

impl fmt::Display for Standard {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Api660 => "API 660",
            Self::Api661 => "API 661",
            Self::Tema => "TEMA",
        })
    }
}

/// All rules evaluated for one standard, in clause order.
#[derive(Debug, Clone)]
pub struct StandardReport {
    pub standard: Standard,
    pub rules: Vec<ValidationRule>,
}

impl StandardReport {
    /// Rules whose violation invalidates the design: critical failures.
    pub fn errors(&self) -> impl Iterator<Item = &ValidationRule> {
        self.rules.iter().filter(|rule| rule.is_error())
    }

    /// Every other non-pass rule.
    pub fn warnings(&self) -> impl Iterator<Item = &ValidationRule> {
        self.rules
            .iter()
            .filter(|rule| rule.status != RuleStatus::Pass && !rule.is_error())
    }

    #[must_use]
    pub fn is_valid(&self) -> bool {
        self.errors().next().is_none()
    }
}

/// Read-only view of the input and the prior calculation stages, shared by
/// every rule evaluator.
pub(crate) struct RuleContext<'a> {
    pub input: &'a ExchangerInput,
    pub thermal: &'a ThermalResult,
    pub pressure: &'a PressureDropResult,
    pub vibration: &'a VibrationResult,
}

/// Runs the rule sets applicable to the exchanger type: API 660 and TEMA for
/// shell-and-tube, API 661 for air-cooled.
#[must_use]
pub fn validate_exchanger(
    input: &ExchangerInput,
    thermal: &ThermalResult,
    pressure: &PressureDropResult,
    vibration: &VibrationResult,
) -> Vec<StandardReport> {
    let context = RuleContext {
        input,
        thermal,
        pressure,
        vibration,
    };

    match &input.kind {
        ExchangerKind::ShellAndTube => {
            vec![api660::report(&context), tema::report(&context)]
        }
        ExchangerKind::AirCooled(duty) => vec![api661::report(&context, duty)],
    }
}

/// Maximum tube-side velocity by service and phase, m/s.
fn tube_velocity_limit(service: ServiceType, phase: Phase) -> f64 {
    if phase.is_gas() {
        return 30.0;
    }
    match service {
        ServiceType::General | ServiceType::CoolingWater => 3.0,
        ServiceType::Hydrocarbon => 4.6,
    }
}

/// Maximum shell-side crossflow velocity by service and phase, m/s.
fn shell_velocity_limit(service: ServiceType, phase: Phase) -> f64 {
    if phase.is_gas() {
        return 15.0;
    }
    match service {
        ServiceType::General | ServiceType::CoolingWater => 1.5,
        ServiceType::Hydrocarbon => 1.8,
    }
}

#[cfg(test)]
mod tests {
    use super::{
        super::{input::test_support::*, pressure::pressure_drops, thermal, vibration},
        *,
    };

    use uom::si::{f64::Length, length::millimeter};

    fn reports_for(input: &ExchangerInput) -> Vec<StandardReport> {
        let thermal = thermal::performance(input).unwrap();
        let pressure = pressure_drops(input);
        let vibration = vibration::assess(input, &pressure);
        validate_exchanger(input, &thermal, &pressure, &vibration)
    }

    #[test]
    fn shell_and_tube_runs_api_660_and_tema() {
        let reports = reports_for(&counter_flow_input());

        assert_eq!(reports.len(), 2);
        assert_eq!(reports[0].standard, Standard::Api660);
        assert_eq!(reports[1].standard, Standard::Tema);
    }

    #[test]
    fn rules_are_emitted_in_ascending_clause_order() {
        let reports = reports_for(&counter_flow_input());

        let api660: Vec<_> = reports[0].rules.iter().map(|r| r.section.as_str()).collect();
        assert_eq!(api660, ["7.3.2", "7.4.3", "7.4.4", "7.5.4"]);

        let tema: Vec<_> = reports[1].rules.iter().map(|r| r.section.as_str()).collect();
        assert_eq!(
            tema,
            ["RCB-2.1", "RCB-2.31", "RCB-2.5", "RCB-4.41", "RCB-4.51", "RCB-4.52"]
        );
    }

    #[test]
    fn tight_pitch_is_a_critical_failure() {
        let mut input = counter_flow_input();
        // 22.86 mm pitch on a 19.05 mm tube: ratio 1.20.
        input.geometry.tube_pitch = Length::new::<millimeter>(22.86);

        let reports = reports_for(&input);
        let api660 = &reports[0];

        assert!(!api660.is_valid());
        let error = api660.errors().next().unwrap();
        assert_eq!(error.severity, Severity::Critical);
        assert_eq!(error.status, RuleStatus::Fail);
        assert!(error.requirement.contains("pitch"));
    }

    #[test]
    fn validity_mirrors_the_error_list() {
        for report in reports_for(&counter_flow_input()) {
            assert_eq!(report.is_valid(), report.errors().count() == 0);
            for error in report.errors() {
                assert_eq!(error.severity, Severity::Critical);
                assert_eq!(error.status, RuleStatus::Fail);
            }
            for warning in report.warnings() {
                assert!(warning.status != RuleStatus::Pass);
            }
        }
    }

    #[test]
    fn reports_are_reproducible() {
        let input = counter_flow_input();
        let first = reports_for(&input);
        let second = reports_for(&input);

        for (a, b) in first.iter().zip(&second) {
            assert_eq!(a.standard, b.standard);
            let sections_a: Vec<_> = a.rules.iter().map(|r| &r.section).collect();
            let sections_b: Vec<_> = b.rules.iter().map(|r| &r.section).collect();
            assert_eq!(sections_a, sections_b);
            for (ra, rb) in a.rules.iter().zip(&b.rules) {
                assert_eq!(ra.actual, rb.actual);
                assert_eq!(ra.status, rb.status);
            }
        }
    }
}
