//! Electromagnetic radiation formulas

use std::f64::consts::PI;

use crate::constants::{PLANCK_CONSTANT, SPEED_OF_LIGHT};

/// Energy of a photon, in Joules, for a wavelength in metres
///
/// Returns `0.0` when `wavelength == 0`.
#[must_use]
pub fn photon_energy(wavelength: f64) -> f64 {
    if wavelength == 0.0 {
        return 0.0;
    }

    PLANCK_CONSTANT * SPEED_OF_LIGHT / wavelength
}

/// Abraham-Lorentz radiation reaction force
///
/// Computes `q^2 / (6 * pi * e0 * c^3) * a` for a charge `q`, electric
/// constant `e0` and jerk `a`. The electric constant is a parameter rather
/// than [`crate::constants::VACUUM_PERMITTIVITY`] so that media other than a
/// vacuum can be described.
///
/// Returns `0.0` when `e0 == 0`.
#[must_use]
pub fn abraham_lorentz_force(q: f64, e0: f64, a: f64) -> f64 {
    if e0 == 0.0 {
        return 0.0;
    }

    let charged_field = 6.0 * PI * e0 * SPEED_OF_LIGHT * SPEED_OF_LIGHT * SPEED_OF_LIGHT;
    (q * q) / charged_field * a
}
