//! LMTD correction factor (F).

use uom::si::{
    f64::{Ratio, ThermodynamicTemperature},
    ratio::ratio,
    thermodynamic_temperature::kelvin,
};

use super::FlowArrangement;

/// Heuristic default used when the temperature effectiveness `P` or the
/// capacity-rate ratio `R` leaves the domain of the closed-form expressions,
/// or when the expressions themselves go non-finite.
///
/// This is a documented engineering default carried over from audited sizing
/// practice, not a computed value; it must not be replaced by NaN
/// propagation.
pub const F_FALLBACK: f64 = 0.9;

/// `|R - 1|` below this switches to the degenerate closed form.
const R_DEGENERACY: f64 = 1e-3;

/// Computes the LMTD correction factor for an arrangement.
///
/// Counter and parallel flow need no correction (`F = 1`). All other
/// arrangements use the one-shell-pass Bowman–Mueller–Nagle form, with the
/// degenerate closed form at `R ≈ 1`. The result is clamped to `[0.5, 1.0]`;
/// out-of-domain parameters or a non-finite evaluation yield
/// [`F_FALLBACK`].
#[must_use]
pub fn correction_factor(
    arrangement: FlowArrangement,
    hot_inlet: ThermodynamicTemperature,
    hot_outlet: ThermodynamicTemperature,
    cold_inlet: ThermodynamicTemperature,
    cold_outlet: ThermodynamicTemperature,
) -> Ratio {
    if arrangement.has_unit_correction_factor() {
        return Ratio::new::<ratio>(1.0);
    }

    let t_hi = hot_inlet.get::<kelvin>();
    let t_ho = hot_outlet.get::<kelvin>();
    let t_ci = cold_inlet.get::<kelvin>();
    let t_co = cold_outlet.get::<kelvin>();

    // Temperature effectiveness and capacity-rate ratio of the correction
    // charts.
    let p = (t_co - t_ci) / (t_hi - t_ci);
    let r = (t_hi - t_ho) / (t_co - t_ci);

    if p.is_nan() || r.is_nan() || p <= 0.0 || p >= 1.0 || r <= 0.0 {
        return Ratio::new::<ratio>(F_FALLBACK);
    }

    let sqrt2 = std::f64::consts::SQRT_2;
    let f = if (r - 1.0).abs() < R_DEGENERACY {
        // R → 1 limit of the general form.
        p * sqrt2 / ((1.0 - p) * ((2.0 - p * (2.0 - sqrt2)) / (2.0 - p * (2.0 + sqrt2))).ln())
    } else {
        let s = (r * r + 1.0).sqrt();
        (s * ((1.0 - p) / (1.0 - p * r)).ln())
            / ((r - 1.0) * ((2.0 - p * (r + 1.0 - s)) / (2.0 - p * (r + 1.0 + s))).ln())
    };

    if f.is_finite() {
        Ratio::new::<ratio>(f.clamp(0.5, 1.0))
    } else {
        Ratio::new::<ratio>(F_FALLBACK)
    }
}
