//! Formulary: closed-form physics and astrodynamics formulas
//!
//! This crate provides a small set of pure formulas (rocket delta-v, photon
//! energy, thermal velocity of a heated gas, Lorentz factor, Abraham-Lorentz
//! force, perihelion shift and Schwarzschild radius) together with the
//! physical constants they are parameterized by.
//!
//! The plain formulas in [`formulas`] never fail: degenerate inputs yield a
//! `0.0` sentinel, and a handful of unguarded inputs propagate NaN. The
//! [`checked`] module offers the same formulas with the sentinel surfaced as
//! an error.
//!
//! ```rust
//! use formulary::{constants::MASS_OF_EARTH, schwarzschild_radius};
//!
//! let radius = schwarzschild_radius(MASS_OF_EARTH);
//! assert_eq!(radius, 0.008870062974351377);
//! ```

use thiserror::Error;

pub mod checked;
pub mod constants;
pub mod formulas;
pub mod reference;

// Re-export commonly used items
pub use formulas::{
    abraham_lorentz_force, lorentz_factor, perihelion_shift, photon_energy, schwarzschild_radius,
    thermal_velocity_of_heated_gas, tsiolkovsky_delta_v, Formula,
};
pub use reference::{CaseOutcome, ReferenceCase, ReferenceSuite, SuiteReport};

/// Main error type for the formulary library
#[derive(Debug, Error)]
pub enum FormularyError {
    #[error("{formula}: degenerate input ({reason})")]
    Degenerate {
        /// The formula whose guard rejected the input
        formula: Formula,
        /// Which guard fired
        reason: &'static str,
    },

    #[error("{formula} takes {expected} inputs, got {found}")]
    Arity {
        formula: Formula,
        expected: usize,
        found: usize,
    },

    #[error("Unknown formula: {0}")]
    UnknownFormula(String),

    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),

    #[error("I/O error: {0}")]
    IoError(#[from] std::io::Error),
}

/// Result type for formulary operations
pub type Result<T> = std::result::Result<T, FormularyError>;
