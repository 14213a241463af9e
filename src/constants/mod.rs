//! Constants module for the formula library
//!
//! Values that carry a power of ten are written as `mantissa * 1e-n` const
//! expressions. The product is rounded once, so e.g. [`VACUUM_PERMITTIVITY`]
//! sits one ulp below the literal `8.854187817e-12`. The reference values in
//! [`crate::reference`] depend on these exact bits.

// Time constants
/// Seconds in a single Earth day
pub const SECONDS_IN_A_DAY: f64 = 86_400.0;

// Physics
/// Speed of light in a vacuum, in m/s
pub const SPEED_OF_LIGHT: f64 = 299_792_458.0;
/// Short alias for [`SPEED_OF_LIGHT`]
pub const C: f64 = SPEED_OF_LIGHT;
/// Universal gravitational constant, in m^3 kg^-1 s^-2
pub const GRAVITATIONAL_CONSTANT: f64 = 0.000_000_000_066_740_8;
/// Short alias for [`GRAVITATIONAL_CONSTANT`]
pub const G: f64 = GRAVITATIONAL_CONSTANT;
/// Planck constant, in J s
pub const PLANCK_CONSTANT: f64 = 6.626_069_934 * 1e-34;
/// Boltzmann constant, in J/K
pub const BOLTZMANN_CONSTANT_JOULES: f64 = 1.380_648_52 * 1e-23;
/// Boltzmann constant, in eV/K
pub const BOLTZMANN_CONSTANT_EV: f64 = 8.617_330_3 * 1e-5;
/// Vacuum permittivity (electric constant), in F/m
pub const VACUUM_PERMITTIVITY: f64 = 8.854_187_817 * 1e-12;

// Earth constants
/// Mass of the Earth, in kg
pub const MASS_OF_EARTH: f64 = 5.972_37 * 1e24;

// Derived constants
/// 24π³, rounded once
///
/// Evaluating `24.0 * PI * PI * PI` at run time rounds three times and lands
/// one ulp lower.
pub const TWENTY_FOUR_PI_CUBED: f64 = 744.150_640_327_195_7;
