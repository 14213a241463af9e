//! Relativistic and gravitational formulas

use crate::constants::{GRAVITATIONAL_CONSTANT, SPEED_OF_LIGHT, TWENTY_FOUR_PI_CUBED};

/// Lorentz factor `1 / sqrt(1 - v^2 / c^2)` for a velocity in m/s
///
/// Returns `0.0` rather than infinity when `v == c`, and also when the
/// square root rounds to zero. Superluminal velocities are not guarded and
/// yield NaN.
#[must_use]
pub fn lorentz_factor(v: f64) -> f64 {
    if v == SPEED_OF_LIGHT {
        return 0.0;
    }

    let square_factor = 1.0 - (v * v) / (SPEED_OF_LIGHT * SPEED_OF_LIGHT);
    let root = square_factor.sqrt();
    if root == 0.0 {
        return 0.0;
    }

    1.0 / root
}

/// Perihelion shift of an orbit, in radians per revolution
///
/// `l` is the semi-major axis, `t` the orbital speed and `e` the orbital
/// eccentricity. The speed of light enters scaled by 1000.
///
/// Returns `0.0` when the divisor `t^2 * (1000 c)^2 * (1 - e^2)` is zero,
/// i.e. for `t == 0` or `|e| == 1`.
#[must_use]
pub fn perihelion_shift(l: f64, t: f64, e: f64) -> f64 {
    let dividend = TWENTY_FOUR_PI_CUBED * l * l;
    let divisor = perihelion_divisor(t, e);
    if divisor == 0.0 {
        return 0.0;
    }

    dividend / divisor
}

/// `t^2 * (1000 c)^2 * (1 - e^2)`, shared with the checked variant
pub(crate) fn perihelion_divisor(t: f64, e: f64) -> f64 {
    let c_km = SPEED_OF_LIGHT * 1000.0;
    t * t * c_km * c_km * (1.0 - e * e)
}

/// Schwarzschild radius `2GM / c^2`, in metres, for a mass in kg
///
/// Returns `0.0` for `m <= 0`.
#[must_use]
pub fn schwarzschild_radius(m: f64) -> f64 {
    if m <= 0.0 {
        return 0.0;
    }

    (2.0 * GRAVITATIONAL_CONSTANT * m) / (SPEED_OF_LIGHT * SPEED_OF_LIGHT)
}
