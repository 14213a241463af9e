//! Rocket propulsion formulas
//!
//! Both formulas are total: a degenerate input returns `0.0` instead of an
//! error.

use crate::constants::BOLTZMANN_CONSTANT_EV;

/// Tsiolkovsky rocket equation
///
/// Returns the delta-v `ve * ln(m0 / mf)` for an effective exhaust velocity
/// `ve`, initial total mass `m0` (with propellant) and final mass `mf`
/// (without propellant).
///
/// Returns `0.0` when `mf == 0`. Other inputs are not validated, so a
/// non-positive mass ratio yields NaN or negative infinity from `ln`.
#[must_use]
pub fn tsiolkovsky_delta_v(ve: f64, m0: f64, mf: f64) -> f64 {
    if mf == 0.0 {
        return 0.0;
    }

    let mass_ratio = m0 / mf;
    ve * mass_ratio.ln()
}

/// Thermal velocity of a heated gas
///
/// Computes `(1 / g) * sqrt(3 * k_B[eV/K] * t / m)` for the sea-level
/// gravitational acceleration `g`, the temperature `t` in Kelvin and the
/// mass of exhaust per molecule `m`.
///
/// Returns `0.0` when `t < 0`, `g == 0` or `m == 0`. A negative `m` with a
/// non-negative `t` is not guarded and yields NaN.
#[must_use]
pub fn thermal_velocity_of_heated_gas(g: f64, t: f64, m: f64) -> f64 {
    if t < 0.0 || g == 0.0 || m == 0.0 {
        return 0.0;
    }

    let inverse_g = 1.0 / g;
    let boltzmann_ratio = 3.0 * BOLTZMANN_CONSTANT_EV * t / m;
    inverse_g * boltzmann_ratio.sqrt()
}
