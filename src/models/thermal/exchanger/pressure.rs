//! Tube- and shell-side pressure drop via Kern's method.

use uom::{
    ConstZero,
    si::{
        area::square_meter,
        dynamic_viscosity::pascal_second,
        f64::{Pressure, Velocity},
        length::meter,
        mass_density::kilogram_per_cubic_meter,
        mass_rate::kilogram_per_second,
        pressure::pascal,
        velocity::meter_per_second,
    },
};

use super::input::{ExchangerGeometry, ExchangerInput, FluidStream};

/// Flow regime classification by Reynolds number.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FlowRegime {
    Laminar,
    Transitional,
    Turbulent,
}

impl FlowRegime {
    /// Conventional pipe-flow bands: laminar below 2 300, turbulent above
    /// 4 000.
    #[must_use]
    pub fn classify(reynolds: f64) -> Self {
        if reynolds < 2300.0 {
            Self::Laminar
        } else if reynolds < 4000.0 {
            Self::Transitional
        } else {
            Self::Turbulent
        }
    }
}

/// Tube-side drop, itemized.
#[derive(Debug, Clone, Copy)]
pub struct TubeSideDrop {
    /// Straight-run friction term.
    pub friction: Pressure,
    /// Four velocity heads per pass for the return bends.
    pub return_losses: Pressure,
    pub total: Pressure,
    pub velocity: Velocity,
    pub reynolds: f64,
    pub regime: FlowRegime,
}

/// Shell-side drop.
///
/// Kern's correlation lumps the window and end-zone losses into the single
/// crossflow term, so there is exactly one component.
#[derive(Debug, Clone, Copy)]
pub struct ShellSideDrop {
    pub crossflow: Pressure,
    pub total: Pressure,
    pub velocity: Velocity,
    pub reynolds: f64,
    pub regime: FlowRegime,
}

/// Both sides of the exchanger.
#[derive(Debug, Clone, Copy)]
pub struct PressureDropResult {
    pub tube: TubeSideDrop,
    pub shell: ShellSideDrop,
}

/// Tube-side Fanning friction factor with the documented regime switches.
///
/// `16/Re` below 2 300, Blasius `0.079·Re^−0.25` up to 1e5, and
/// `0.046·Re^−0.2` beyond. The regime boundaries are audited values and are
/// not smoothed.
pub(crate) fn tube_friction_factor(reynolds: f64) -> f64 {
    if reynolds < 2300.0 {
        16.0 / reynolds
    } else if reynolds < 1.0e5 {
        0.079 * reynolds.powf(-0.25)
    } else {
        0.046 * reynolds.powf(-0.2)
    }
}

/// Resolved tube-side flow state, shared with the film-coefficient and
/// compliance stages.
#[derive(Debug, Clone, Copy, Default)]
pub(crate) struct TubeFlow {
    /// m/s
    pub(crate) velocity: f64,
    pub(crate) reynolds: f64,
}

/// Resolved shell-side crossflow state.
#[derive(Debug, Clone, Copy, Default)]
pub(crate) struct ShellFlow {
    /// m/s
    pub(crate) velocity: f64,
    /// Mass velocity Gs, kg/m²·s
    pub(crate) mass_velocity: f64,
    pub(crate) reynolds: f64,
}

/// Tube-side velocity and Reynolds number.
///
/// Guards against zero or negative flow area, density, or diameter by
/// returning the zero state rather than dividing by zero.
pub(crate) fn tube_flow(stream: &FluidStream, geometry: &ExchangerGeometry) -> TubeFlow {
    let area = geometry.tube_flow_area_per_pass().get::<square_meter>();
    let density = stream.density.get::<kilogram_per_cubic_meter>();
    let diameter = geometry.tube_inner_diameter().get::<meter>();
    let viscosity = stream.viscosity.get::<pascal_second>();

    if area <= 0.0 || density <= 0.0 || diameter <= 0.0 || viscosity <= 0.0 {
        return TubeFlow::default();
    }

    let velocity = stream.mass_flow.get::<kilogram_per_second>() / (density * area);
    if velocity <= 0.0 {
        return TubeFlow::default();
    }

    TubeFlow {
        velocity,
        reynolds: density * velocity * diameter / viscosity,
    }
}

/// Shell-side crossflow mass velocity, velocity, and Reynolds number, with
/// the same zero-state guard as [`tube_flow`].
pub(crate) fn shell_flow(stream: &FluidStream, geometry: &ExchangerGeometry) -> ShellFlow {
    let area = geometry.crossflow_area().get::<square_meter>();
    let density = stream.density.get::<kilogram_per_cubic_meter>();
    let de = geometry.equivalent_diameter().get::<meter>();
    let viscosity = stream.viscosity.get::<pascal_second>();

    if area <= 0.0 || density <= 0.0 || de <= 0.0 || viscosity <= 0.0 {
        return ShellFlow::default();
    }

    let mass_velocity = stream.mass_flow.get::<kilogram_per_second>() / area;
    if mass_velocity <= 0.0 {
        return ShellFlow::default();
    }

    ShellFlow {
        velocity: mass_velocity / density,
        mass_velocity,
        reynolds: de * mass_velocity / viscosity,
    }
}

/// Computes both pressure drops for the configuration.
///
/// Degenerate geometry or properties yield a zero-drop, zero-Reynolds side
/// rather than an error; upstream validation decides whether such a
/// configuration is acceptable at all.
#[must_use]
pub fn pressure_drops(input: &ExchangerInput) -> PressureDropResult {
    PressureDropResult {
        tube: tube_side(&input.cold, &input.geometry),
        shell: shell_side(&input.hot, &input.geometry),
    }
}

fn tube_side(stream: &FluidStream, geometry: &ExchangerGeometry) -> TubeSideDrop {
    let flow = tube_flow(stream, geometry);
    if flow.reynolds <= 0.0 {
        return TubeSideDrop {
            friction: Pressure::ZERO,
            return_losses: Pressure::ZERO,
            total: Pressure::ZERO,
            velocity: Velocity::ZERO,
            reynolds: 0.0,
            regime: FlowRegime::Laminar,
        };
    }

    let density = stream.density.get::<kilogram_per_cubic_meter>();
    let length = geometry.tube_length.get::<meter>();
    let diameter = geometry.tube_inner_diameter().get::<meter>();
    let passes = f64::from(geometry.tube_passes.max(1));
    let head = density * flow.velocity * flow.velocity;

    let f = tube_friction_factor(flow.reynolds);
    let friction = 4.0 * f * length * passes * head / (2.0 * diameter);
    let return_losses = 4.0 * passes * head / 2.0;

    TubeSideDrop {
        friction: Pressure::new::<pascal>(friction),
        return_losses: Pressure::new::<pascal>(return_losses),
        total: Pressure::new::<pascal>(friction + return_losses),
        velocity: Velocity::new::<meter_per_second>(flow.velocity),
        reynolds: flow.reynolds,
        regime: FlowRegime::classify(flow.reynolds),
    }
}

fn shell_side(stream: &FluidStream, geometry: &ExchangerGeometry) -> ShellSideDrop {
    let flow = shell_flow(stream, geometry);
    if flow.reynolds <= 0.0 {
        return ShellSideDrop {
            crossflow: Pressure::ZERO,
            total: Pressure::ZERO,
            velocity: Velocity::ZERO,
            reynolds: 0.0,
            regime: FlowRegime::Laminar,
        };
    }

    let density = stream.density.get::<kilogram_per_cubic_meter>();
    let shell_id = geometry.shell_inner_diameter.get::<meter>();
    let de = geometry.equivalent_diameter().get::<meter>();
    let crossings = f64::from(geometry.baffle_count() + 1);

    let f = if flow.reynolds > 500.0 {
        (0.576 - 0.19 * flow.reynolds.ln()).exp()
    } else {
        1.0
    };

    let drop = (f * flow.mass_velocity * flow.mass_velocity * shell_id * crossings
        / (2.0 * density * de))
        .max(0.0);

    ShellSideDrop {
        crossflow: Pressure::new::<pascal>(drop),
        total: Pressure::new::<pascal>(drop),
        velocity: Velocity::new::<meter_per_second>(flow.velocity),
        reynolds: flow.reynolds,
        regime: FlowRegime::classify(flow.reynolds),
    }
}
