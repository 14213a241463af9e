//! Checked companions of the formulas
//!
//! Each function mirrors the formula of the same name but reports the
//! degenerate-input sentinel as [`FormularyError::Degenerate`] instead of
//! returning `0.0`. The guards are exactly those of the plain formulas: an
//! input the plain formula evaluates is evaluated here too, so unguarded NaN
//! results come back as `Ok(NaN)`.

use log::debug;

use crate::constants::SPEED_OF_LIGHT;
use crate::formulas::relativity::perihelion_divisor;
use crate::formulas::{self, Formula};
use crate::{FormularyError, Result};

fn degenerate(formula: Formula, reason: &'static str) -> FormularyError {
    debug!("{formula}: rejecting degenerate input ({reason})");
    FormularyError::Degenerate { formula, reason }
}

/// Checked [`formulas::tsiolkovsky_delta_v`]
pub fn tsiolkovsky_delta_v(ve: f64, m0: f64, mf: f64) -> Result<f64> {
    if mf == 0.0 {
        return Err(degenerate(Formula::TsiolkovskyDeltaV, "final mass is zero"));
    }
    Ok(formulas::tsiolkovsky_delta_v(ve, m0, mf))
}

/// Checked [`formulas::photon_energy`]
pub fn photon_energy(wavelength: f64) -> Result<f64> {
    if wavelength == 0.0 {
        return Err(degenerate(Formula::PhotonEnergy, "wavelength is zero"));
    }
    Ok(formulas::photon_energy(wavelength))
}

/// Checked [`formulas::thermal_velocity_of_heated_gas`]
pub fn thermal_velocity_of_heated_gas(g: f64, t: f64, m: f64) -> Result<f64> {
    let formula = Formula::ThermalVelocityOfHeatedGas;
    if t < 0.0 {
        return Err(degenerate(formula, "temperature is negative"));
    }
    if g == 0.0 {
        return Err(degenerate(formula, "gravitational acceleration is zero"));
    }
    if m == 0.0 {
        return Err(degenerate(formula, "molecular mass is zero"));
    }
    Ok(formulas::thermal_velocity_of_heated_gas(g, t, m))
}

/// Checked [`formulas::lorentz_factor`]
///
/// Both sentinel paths of the plain formula are reported: `v == c`, and a
/// square root that evaluates to exactly zero (e.g. `v == -c`).
pub fn lorentz_factor(v: f64) -> Result<f64> {
    let formula = Formula::LorentzFactor;
    if v == SPEED_OF_LIGHT {
        return Err(degenerate(formula, "velocity equals c"));
    }
    let factor = formulas::lorentz_factor(v);
    if factor == 0.0 {
        return Err(degenerate(formula, "velocity magnitude equals c"));
    }
    Ok(factor)
}

/// Checked [`formulas::abraham_lorentz_force`]
pub fn abraham_lorentz_force(q: f64, e0: f64, a: f64) -> Result<f64> {
    if e0 == 0.0 {
        let formula = Formula::AbrahamLorentzForce;
        return Err(degenerate(formula, "electric constant is zero"));
    }
    Ok(formulas::abraham_lorentz_force(q, e0, a))
}

/// Checked [`formulas::perihelion_shift`]
///
/// A zero semi-major axis is not degenerate; it evaluates to `Ok(0.0)`.
pub fn perihelion_shift(l: f64, t: f64, e: f64) -> Result<f64> {
    if perihelion_divisor(t, e) == 0.0 {
        return Err(degenerate(Formula::PerihelionShift, "divisor is zero"));
    }
    Ok(formulas::perihelion_shift(l, t, e))
}

/// Checked [`formulas::schwarzschild_radius`]
pub fn schwarzschild_radius(m: f64) -> Result<f64> {
    if m <= 0.0 {
        let formula = Formula::SchwarzschildRadius;
        return Err(degenerate(formula, "mass is not positive"));
    }
    Ok(formulas::schwarzschild_radius(m))
}
