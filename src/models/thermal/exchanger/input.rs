//! Input configuration for the sizing pipeline.
//!
//! These records arrive already normalized to SI by the excluded
//! unit/geometry normalizer. Construction is plain struct literal syntax;
//! [`ExchangerInput::validate`] is the single gate that turns a bad
//! configuration into a "no result" error before any correlation runs.

use uom::si::{
    f64::{
        Area, DynamicViscosity, HeatTransfer, Length, MassDensity, MassRate, Pressure, Ratio,
        SpecificHeatCapacity, ThermalConductivity, ThermodynamicTemperature, Velocity,
    },
    length::meter,
    ratio::ratio,
};

use crate::support::{
    constraint::{ConstraintError, NonNegative, StrictlyPositive, UnitInterval},
    hx::{CapacitanceRate, FlowArrangement},
    units::FoulingResistance,
};

use super::error::ExchangerError;

/// Phase of a process stream.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Phase {
    Liquid,
    Vapor,
    TwoPhase,
    Condensing,
    Boiling,
}

impl Phase {
    /// Whether the stream carries a gas phase, which gates the mandatory
    /// vibration-analysis rule and the acoustic-resonance check.
    #[must_use]
    pub fn is_gas(self) -> bool {
        matches!(self, Self::Vapor | Self::TwoPhase)
    }
}

/// One process stream, immutable for the duration of a calculation.
///
/// The hot stream flows on the shell side, the cold stream on the tube side.
/// The Prandtl number is derived on demand from `cp·μ/k`, never stored.
#[derive(Debug, Clone, Copy)]
pub struct FluidStream {
    pub inlet_temperature: ThermodynamicTemperature,
    pub outlet_temperature: ThermodynamicTemperature,
    pub mass_flow: MassRate,
    pub specific_heat: SpecificHeatCapacity,
    pub density: MassDensity,
    pub viscosity: DynamicViscosity,
    pub thermal_conductivity: ThermalConductivity,
    pub fouling_resistance: FoulingResistance,
    pub phase: Phase,
}

impl FluidStream {
    /// Prandtl number, `cp·μ/k`.
    #[must_use]
    pub fn prandtl(&self) -> Ratio {
        self.specific_heat * self.viscosity / self.thermal_conductivity
    }

    /// Capacitance rate, `ṁ·cp`.
    ///
    /// # Errors
    ///
    /// Returns `Err` if the product is not strictly positive.
    pub fn capacitance_rate(&self) -> Result<CapacitanceRate, ConstraintError> {
        CapacitanceRate::from_mass_rate_and_specific_heat(self.mass_flow, self.specific_heat)
    }

    fn validate(&self, side: &'static str) -> Result<(), ExchangerError> {
        let invalid = |field: &'static str| {
            move |source: ConstraintError| ExchangerError::invalid(side, field, source)
        };

        StrictlyPositive::new(self.mass_flow).map_err(invalid("mass_flow"))?;
        StrictlyPositive::new(self.specific_heat).map_err(invalid("specific_heat"))?;
        StrictlyPositive::new(self.density).map_err(invalid("density"))?;
        StrictlyPositive::new(self.viscosity).map_err(invalid("viscosity"))?;
        StrictlyPositive::new(self.thermal_conductivity).map_err(invalid("thermal_conductivity"))?;
        NonNegative::new(self.fouling_resistance).map_err(invalid("fouling_resistance"))?;

        for (field, temperature) in [
            ("inlet_temperature", self.inlet_temperature),
            ("outlet_temperature", self.outlet_temperature),
        ] {
            StrictlyPositive::new(temperature.value).map_err(invalid(field))?;
        }

        Ok(())
    }
}

/// Tube layout pattern.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TubePattern {
    Triangular30,
    Triangular60,
    Square90,
    RotatedSquare45,
}

impl TubePattern {
    /// Whether the layout is triangular (30° or 60°).
    #[must_use]
    pub fn is_triangular(self) -> bool {
        matches!(self, Self::Triangular30 | Self::Triangular60)
    }

    /// Tube layout constant used in bundle-diameter and tube-count
    /// estimates: the fraction of layout-square area a tube cell occupies.
    pub(crate) fn layout_constant(self) -> f64 {
        if self.is_triangular() { 0.87 } else { 1.0 }
    }
}

/// Primary geometry of the bundle and shell.
///
/// Derived quantities (inner diameter, flow areas, equivalent diameter,
/// bundle diameter, baffle count) are computed, never stored, so they cannot
/// diverge from the primary fields.
#[derive(Debug, Clone, Copy)]
pub struct ExchangerGeometry {
    pub tube_outer_diameter: Length,
    pub tube_wall_thickness: Length,
    pub tube_length: Length,
    pub tube_count: u32,
    pub tube_pitch: Length,
    pub tube_pattern: TubePattern,
    pub tube_passes: u32,
    /// Wall-material conductivity, part of the tube specification (enters
    /// the clean overall coefficient).
    pub tube_wall_conductivity: ThermalConductivity,
    pub shell_inner_diameter: Length,
    pub shell_passes: u32,
    pub baffle_spacing: Length,
    /// Baffle cut as a fraction of shell inner diameter, in [0, 1].
    pub baffle_cut: Ratio,
    pub baffle_thickness: Length,
}

impl ExchangerGeometry {
    /// Tube inner diameter, `d_o − 2t`.
    #[must_use]
    pub fn tube_inner_diameter(&self) -> Length {
        self.tube_outer_diameter - 2.0 * self.tube_wall_thickness
    }

    /// Pitch ratio, `pitch / d_o`.
    #[must_use]
    pub fn pitch_ratio(&self) -> Ratio {
        self.tube_pitch / self.tube_outer_diameter
    }

    /// Outside heat-transfer area, `π·d_o·L·N`.
    #[must_use]
    pub fn heat_transfer_area(&self) -> Area {
        std::f64::consts::PI
            * self.tube_outer_diameter
            * self.tube_length
            * f64::from(self.tube_count)
    }

    /// Tube-side flow area of one pass, `(N/passes)·π·d_i²/4`.
    #[must_use]
    pub fn tube_flow_area_per_pass(&self) -> Area {
        let d_i = self.tube_inner_diameter();
        let tubes_per_pass = f64::from(self.tube_count) / f64::from(self.tube_passes.max(1));

        tubes_per_pass * std::f64::consts::FRAC_PI_4 * d_i * d_i
    }

    /// Shell-side crossflow area at the bundle centerline (Kern),
    /// `D_s·B·(pitch − d_o)/pitch`.
    #[must_use]
    pub fn crossflow_area(&self) -> Area {
        let clearance = self.tube_pitch - self.tube_outer_diameter;

        self.shell_inner_diameter * self.baffle_spacing * (clearance / self.tube_pitch)
    }

    /// Shell-side equivalent diameter (Kern), pattern dependent.
    #[must_use]
    pub fn equivalent_diameter(&self) -> Length {
        let p = self.tube_pitch.get::<meter>();
        let d = self.tube_outer_diameter.get::<meter>();
        let pi = std::f64::consts::PI;

        let de = if self.tube_pattern.is_triangular() {
            4.0 * (p * p * 3.0_f64.sqrt() / 4.0 - pi * d * d / 8.0) / (pi * d / 2.0)
        } else {
            4.0 * (p * p - pi * d * d / 4.0) / (pi * d)
        };

        Length::new::<meter>(de)
    }

    /// Estimated bundle outer diameter from the tube-count/layout relation.
    #[must_use]
    pub fn bundle_diameter(&self) -> Length {
        let cl = self.tube_pattern.layout_constant();
        let ctp = self.tube_count_constant();
        let p = self.tube_pitch.get::<meter>();
        let n = f64::from(self.tube_count);

        Length::new::<meter>((4.0 * n * cl * p * p / (std::f64::consts::PI * ctp)).sqrt())
    }

    /// Geometrically estimated maximum packable tube count for the shell.
    ///
    /// Assumes a 12.5 mm diametral bundle-to-shell clearance; a coarse
    /// estimate intended for the compliance check, not for detailed layout.
    #[must_use]
    pub fn estimated_max_tube_count(&self) -> u32 {
        let available = self.shell_inner_diameter.get::<meter>() - 0.0125;
        if available <= 0.0 {
            return 0;
        }

        let cl = self.tube_pattern.layout_constant();
        let ctp = self.tube_count_constant();
        let p = self.tube_pitch.get::<meter>();

        let count = ctp * std::f64::consts::FRAC_PI_4 * available * available / (cl * p * p);

        count.max(0.0) as u32
    }

    /// Number of baffles, `floor(L / B) − 1` (never negative).
    #[must_use]
    pub fn baffle_count(&self) -> u32 {
        let spans = (self.tube_length / self.baffle_spacing).get::<ratio>().floor();

        (spans as i64 - 1).max(0) as u32
    }

    /// Tube-count calculation constant by pass count (fraction of the shell
    /// circle the bundle can occupy).
    fn tube_count_constant(&self) -> f64 {
        match self.tube_passes {
            0 | 1 => 0.93,
            2 => 0.90,
            _ => 0.85,
        }
    }

    fn validate(&self) -> Result<(), ExchangerError> {
        let invalid = |field: &'static str| {
            move |source: ConstraintError| ExchangerError::invalid("geometry", field, source)
        };

        StrictlyPositive::new(self.tube_outer_diameter).map_err(invalid("tube_outer_diameter"))?;
        StrictlyPositive::new(self.tube_wall_thickness).map_err(invalid("tube_wall_thickness"))?;
        StrictlyPositive::new(self.tube_inner_diameter()).map_err(invalid("tube_inner_diameter"))?;
        StrictlyPositive::new(self.tube_length).map_err(invalid("tube_length"))?;
        StrictlyPositive::new(f64::from(self.tube_count)).map_err(invalid("tube_count"))?;
        StrictlyPositive::new(self.tube_pitch).map_err(invalid("tube_pitch"))?;
        StrictlyPositive::new(f64::from(self.tube_passes)).map_err(invalid("tube_passes"))?;
        StrictlyPositive::new(self.tube_wall_conductivity)
            .map_err(invalid("tube_wall_conductivity"))?;
        StrictlyPositive::new(self.shell_inner_diameter).map_err(invalid("shell_inner_diameter"))?;
        StrictlyPositive::new(f64::from(self.shell_passes)).map_err(invalid("shell_passes"))?;
        StrictlyPositive::new(self.baffle_spacing).map_err(invalid("baffle_spacing"))?;
        UnitInterval::new(self.baffle_cut).map_err(invalid("baffle_cut"))?;
        NonNegative::new(self.baffle_thickness).map_err(invalid("baffle_thickness"))?;

        // A pitch at or below the tube OD means touching tubes and a zero or
        // negative crossflow window.
        StrictlyPositive::new(self.tube_pitch - self.tube_outer_diameter)
            .map_err(invalid("tube_pitch"))?;

        Ok(())
    }
}

/// What the calculation is solving for.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum CalculationMode {
    /// Area is the unknown: size the exchanger for the given temperatures.
    Design,
    /// Area is given: solve the outlet temperatures via effectiveness.
    Rating {
        /// Installed outside heat-transfer area.
        area: Area,
    },
}

/// Service class, which keys the velocity-limit table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ServiceType {
    General,
    CoolingWater,
    Hydrocarbon,
}

/// Air-cooled (API 661) duty data, carried only by air-cooled exchangers.
#[derive(Debug, Clone, Copy)]
pub struct AirCooledDuty {
    /// Face velocity of air across the bundle.
    pub face_velocity: Velocity,
    /// Overall bundle width.
    pub bundle_width: Length,
    /// Fin density in fins per metre of finned length.
    pub fin_density: f64,
    /// Fan coverage: fraction of bundle face area swept by the fans.
    pub fan_coverage: Ratio,
    /// Header plate thickness.
    pub header_thickness: Length,
    /// Air-side static pressure drop.
    pub air_side_pressure_drop: Pressure,
}

/// Exchanger family, selecting which standards apply.
#[derive(Debug, Clone, Copy)]
pub enum ExchangerKind {
    /// Shell-and-tube: validated against API 660 and TEMA.
    ShellAndTube,
    /// Air-cooled: validated against API 661.
    AirCooled(AirCooledDuty),
}

/// The complete, immutable input configuration for one calculation.
#[derive(Debug, Clone, Copy)]
pub struct ExchangerInput {
    pub kind: ExchangerKind,
    /// Hot stream (shell side).
    pub hot: FluidStream,
    /// Cold stream (tube side).
    pub cold: FluidStream,
    pub geometry: ExchangerGeometry,
    pub arrangement: FlowArrangement,
    pub mode: CalculationMode,
    pub service: ServiceType,
    /// Mechanical design pressure, used by the wall-thickness rules.
    pub design_pressure: Pressure,
    /// Overall heat-transfer coefficient estimate. When present it is the
    /// sizing basis (audited-estimate precedence); when absent the clean
    /// coefficient is built from the film correlations.
    pub overall_u_estimate: Option<HeatTransfer>,
}

impl ExchangerInput {
    /// Checks the whole configuration, returning the first violation found.
    ///
    /// # Errors
    ///
    /// Returns [`ExchangerError::InvalidConfiguration`] naming the offending
    /// field. No calculation result exists for an invalid configuration.
    pub fn validate(&self) -> Result<(), ExchangerError> {
        self.hot.validate("hot")?;
        self.cold.validate("cold")?;
        self.geometry.validate()?;

        if let CalculationMode::Rating { area } = self.mode {
            StrictlyPositive::new(area)
                .map_err(|source| ExchangerError::invalid("mode", "area", source))?;
        }

        if let Some(u) = self.overall_u_estimate {
            StrictlyPositive::new(u)
                .map_err(|source| ExchangerError::invalid("input", "overall_u_estimate", source))?;
        }

        StrictlyPositive::new(self.design_pressure)
            .map_err(|source| ExchangerError::invalid("input", "design_pressure", source))?;

        if let ExchangerKind::AirCooled(duty) = &self.kind {
            let invalid = |field: &'static str| {
                move |source: ConstraintError| ExchangerError::invalid("air_cooled", field, source)
            };

            StrictlyPositive::new(duty.face_velocity).map_err(invalid("face_velocity"))?;
            StrictlyPositive::new(duty.bundle_width).map_err(invalid("bundle_width"))?;
            StrictlyPositive::new(duty.fin_density).map_err(invalid("fin_density"))?;
            UnitInterval::new(duty.fan_coverage).map_err(invalid("fan_coverage"))?;
            StrictlyPositive::new(duty.header_thickness).map_err(invalid("header_thickness"))?;
            NonNegative::new(duty.air_side_pressure_drop)
                .map_err(invalid("air_side_pressure_drop"))?;
        }

        Ok(())
    }
}
