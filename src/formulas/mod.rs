//! The formula set
//!
//! Every function here is pure and total. Degenerate inputs named in each
//! function's documentation return a `0.0` sentinel; everything else is plain
//! IEEE-754 arithmetic, NaN included. Nothing in this module reads mutable
//! state, so the formulas can be called from any number of threads.
//!
//! [`Formula`] names the formulas as data, which is how the
//! [`crate::reference`] suite refers to them.

pub mod radiation;
pub mod relativity;
pub mod rocketry;

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::{FormularyError, Result};

pub use radiation::{abraham_lorentz_force, photon_energy};
pub use relativity::{lorentz_factor, perihelion_shift, schwarzschild_radius};
pub use rocketry::{thermal_velocity_of_heated_gas, tsiolkovsky_delta_v};

/// Identifies one of the formulas of this crate
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Formula {
    /// [`tsiolkovsky_delta_v`]: `(ve, m0, mf)`
    TsiolkovskyDeltaV,
    /// [`photon_energy`]: `(wavelength)`
    PhotonEnergy,
    /// [`thermal_velocity_of_heated_gas`]: `(g, t, m)`
    ThermalVelocityOfHeatedGas,
    /// [`lorentz_factor`]: `(v)`
    LorentzFactor,
    /// [`abraham_lorentz_force`]: `(q, e0, a)`
    AbrahamLorentzForce,
    /// [`perihelion_shift`]: `(l, t, e)`
    PerihelionShift,
    /// [`schwarzschild_radius`]: `(m)`
    SchwarzschildRadius,
}

impl Formula {
    /// All formulas, in declaration order
    pub const ALL: [Formula; 7] = [
        Formula::TsiolkovskyDeltaV,
        Formula::PhotonEnergy,
        Formula::ThermalVelocityOfHeatedGas,
        Formula::LorentzFactor,
        Formula::AbrahamLorentzForce,
        Formula::PerihelionShift,
        Formula::SchwarzschildRadius,
    ];

    /// The snake_case name of the formula, identical to its function name
    pub fn name(self) -> &'static str {
        match self {
            Formula::TsiolkovskyDeltaV => "tsiolkovsky_delta_v",
            Formula::PhotonEnergy => "photon_energy",
            Formula::ThermalVelocityOfHeatedGas => "thermal_velocity_of_heated_gas",
            Formula::LorentzFactor => "lorentz_factor",
            Formula::AbrahamLorentzForce => "abraham_lorentz_force",
            Formula::PerihelionShift => "perihelion_shift",
            Formula::SchwarzschildRadius => "schwarzschild_radius",
        }
    }

    /// Number of scalar inputs the formula takes
    pub fn arity(self) -> usize {
        match self {
            Formula::PhotonEnergy | Formula::LorentzFactor | Formula::SchwarzschildRadius => 1,
            Formula::TsiolkovskyDeltaV
            | Formula::ThermalVelocityOfHeatedGas
            | Formula::AbrahamLorentzForce
            | Formula::PerihelionShift => 3,
        }
    }

    /// Evaluate the formula on a slice of inputs, in parameter order
    ///
    /// Fails only when the slice length does not match [`Formula::arity`];
    /// degenerate inputs still produce the formula's sentinel value.
    pub fn evaluate(self, inputs: &[f64]) -> Result<f64> {
        let value = match (self, inputs) {
            (Formula::TsiolkovskyDeltaV, &[ve, m0, mf]) => tsiolkovsky_delta_v(ve, m0, mf),
            (Formula::PhotonEnergy, &[wavelength]) => photon_energy(wavelength),
            (Formula::ThermalVelocityOfHeatedGas, &[g, t, m]) => {
                thermal_velocity_of_heated_gas(g, t, m)
            }
            (Formula::LorentzFactor, &[v]) => lorentz_factor(v),
            (Formula::AbrahamLorentzForce, &[q, e0, a]) => abraham_lorentz_force(q, e0, a),
            (Formula::PerihelionShift, &[l, t, e]) => perihelion_shift(l, t, e),
            (Formula::SchwarzschildRadius, &[m]) => schwarzschild_radius(m),
            _ => {
                return Err(FormularyError::Arity {
                    formula: self,
                    expected: self.arity(),
                    found: inputs.len(),
                })
            }
        };
        Ok(value)
    }
}

impl fmt::Display for Formula {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Formula {
    type Err = FormularyError;

    fn from_str(s: &str) -> Result<Self> {
        Formula::ALL
            .iter()
            .copied()
            .find(|formula| formula.name() == s)
            .ok_or_else(|| FormularyError::UnknownFormula(s.to_string()))
    }
}
