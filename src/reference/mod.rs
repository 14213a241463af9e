//! Reference-value suite
//!
//! A [`ReferenceSuite`] is a list of formula evaluations with their expected
//! results. [`ReferenceSuite::builtin`] holds the canonical values the
//! formulas must reproduce bit for bit; further suites can be stored as JSON.
//!
//! Running a suite never prints or exits. It returns a [`SuiteReport`] and
//! leaves presentation to the caller.

use std::fs;
use std::path::Path;

use log::{debug, warn};
use serde::{Deserialize, Serialize};

use crate::constants::{MASS_OF_EARTH, SECONDS_IN_A_DAY, SPEED_OF_LIGHT, VACUUM_PERMITTIVITY};
use crate::formulas::Formula;
use crate::Result;

fn unit_scale() -> f64 {
    1.0
}

fn is_unit_scale(scale: &f64) -> bool {
    *scale == 1.0
}

/// A single formula evaluation with its expected result
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ReferenceCase {
    /// Human-readable name of the case
    pub label: String,
    /// Formula under test
    pub formula: Formula,
    /// Inputs, in the formula's parameter order
    pub inputs: Vec<f64>,
    /// Factor applied to the formula result before comparison
    #[serde(default = "unit_scale", skip_serializing_if = "is_unit_scale")]
    pub scale: f64,
    /// Expected (scaled) result
    pub expected: f64,
    /// Relative tolerance; `None` demands exact equality
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tolerance: Option<f64>,
}

impl ReferenceCase {
    /// Create an exact-match case with unit scale
    pub fn new(
        label: impl Into<String>,
        formula: Formula,
        inputs: Vec<f64>,
        expected: f64,
    ) -> Self {
        Self {
            label: label.into(),
            formula,
            inputs,
            scale: 1.0,
            expected,
            tolerance: None,
        }
    }

    /// Set the factor applied to the result before comparison
    pub fn with_scale(mut self, scale: f64) -> Self {
        self.scale = scale;
        self
    }

    /// Accept results within a relative tolerance of the expected value
    pub fn with_tolerance(mut self, tolerance: f64) -> Self {
        self.tolerance = Some(tolerance);
        self
    }

    /// Evaluate the case's formula and apply the scale
    pub fn actual(&self) -> Result<f64> {
        Ok(self.formula.evaluate(&self.inputs)? * self.scale)
    }

    /// Whether `actual` satisfies this case
    ///
    /// Without a tolerance this is plain `==`, so NaN never matches.
    pub fn accepts(&self, actual: f64) -> bool {
        match self.tolerance {
            None => actual == self.expected,
            Some(tolerance) => (actual - self.expected).abs() <= tolerance * self.expected.abs(),
        }
    }

    /// Evaluate and compare, turning evaluation errors into a failed outcome
    pub fn run(&self) -> CaseOutcome {
        let actual = match self.actual() {
            Ok(value) => value,
            Err(err) => {
                warn!("{}: {err}", self.label);
                f64::NAN
            }
        };
        let (label, formula, expected) = (&self.label, self.formula, self.expected);
        let passed = self.accepts(actual);
        if passed {
            debug!("{label}: {formula} passed ({actual:e})");
        } else {
            warn!("{label}: {formula} expected {expected:e}, got {actual:e}");
        }
        CaseOutcome {
            label: self.label.clone(),
            formula: self.formula,
            expected: self.expected,
            actual,
            passed,
        }
    }
}

/// Result of running one [`ReferenceCase`]
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CaseOutcome {
    pub label: String,
    pub formula: Formula,
    pub expected: f64,
    /// NaN when the case could not be evaluated
    pub actual: f64,
    pub passed: bool,
}

/// Outcomes of a whole suite, in case order
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct SuiteReport {
    pub outcomes: Vec<CaseOutcome>,
}

impl SuiteReport {
    /// True when every case passed (vacuously true for an empty suite)
    pub fn all_passed(&self) -> bool {
        self.outcomes.iter().all(|outcome| outcome.passed)
    }

    /// The failed outcomes
    pub fn failures(&self) -> impl Iterator<Item = &CaseOutcome> {
        self.outcomes.iter().filter(|outcome| !outcome.passed)
    }

    /// Number of outcomes, one per case run
    pub fn len(&self) -> usize {
        self.outcomes.len()
    }

    /// True when no case was run
    pub fn is_empty(&self) -> bool {
        self.outcomes.is_empty()
    }
}

/// An ordered collection of reference cases
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ReferenceSuite {
    pub cases: Vec<ReferenceCase>,
}

impl ReferenceSuite {
    /// Create a suite from cases, kept in the given order
    pub fn new(cases: Vec<ReferenceCase>) -> Self {
        Self { cases }
    }

    /// The canonical reference values
    ///
    /// Inputs are built from the crate constants. The photon wavelength is
    /// `400.0 * 1e-9`, one ulp above the literal `400e-9`, and the perihelion
    /// shift is scaled by the seconds in 59 days.
    pub fn builtin() -> Self {
        Self::new(vec![
            ReferenceCase::new(
                "Tsiolkovsky delta-v launch",
                Formula::TsiolkovskyDeltaV,
                vec![17000.0, 5000.0, 3000.0],
                8684.035604021843,
            ),
            ReferenceCase::new(
                "Energy of a 400nm photon",
                Formula::PhotonEnergy,
                vec![400.0 * 1e-9],
                4.966114480984394e-19,
            ),
            ReferenceCase::new(
                "Thermal velocity of RP-1 exhaust",
                Formula::ThermalVelocityOfHeatedGas,
                vec![9.8, 3670.0, 0.81],
                0.11043619735553113,
            ),
            ReferenceCase::new(
                "Lorentz factor at half c",
                Formula::LorentzFactor,
                vec![SPEED_OF_LIGHT / 2.0],
                1.1547005383792517,
            ),
            ReferenceCase::new(
                "Abraham-Lorentz force on an up quark",
                Formula::AbrahamLorentzForce,
                vec![0.66666666, VACUUM_PERMITTIVITY, 9.8],
                9.685712793458884e-16,
            ),
            ReferenceCase::new(
                "Perihelion shift of Mercury",
                Formula::PerihelionShift,
                vec![57909050.0, 47.362, 0.205630],
                0.06588417945476678,
            )
            .with_scale(SECONDS_IN_A_DAY * 59.0),
            ReferenceCase::new(
                "Schwarzschild radius of the Earth",
                Formula::SchwarzschildRadius,
                vec![MASS_OF_EARTH],
                0.008870062974351377,
            ),
        ])
    }

    /// Parse a suite from JSON
    pub fn from_json(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    /// Load a suite from a JSON file
    pub fn from_path<P: AsRef<Path>>(path: P) -> Result<Self> {
        let contents = fs::read_to_string(path)?;
        Self::from_json(&contents)
    }

    /// Serialize the suite as pretty-printed JSON
    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Run every case, in order
    pub fn run(&self) -> SuiteReport {
        let outcomes: Vec<CaseOutcome> = self.cases.iter().map(ReferenceCase::run).collect();
        let total = outcomes.len();
        let passed = outcomes.iter().filter(|outcome| outcome.passed).count();
        debug!("{passed} of {total} reference cases passed");
        SuiteReport { outcomes }
    }

    /// Number of cases in the suite
    pub fn len(&self) -> usize {
        self.cases.len()
    }

    /// True when the suite holds no cases
    pub fn is_empty(&self) -> bool {
        self.cases.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::FormularyError;
    use std::io::Write;

    #[test]
    fn test_builtin_suite_passes() {
        let suite = ReferenceSuite::builtin();
        assert_eq!(suite.len(), 7);

        let report = suite.run();
        let failures: Vec<_> = report.failures().collect();
        assert!(failures.is_empty(), "failed cases: {failures:?}");
        assert!(report.all_passed());
    }

    #[test]
    fn test_builtin_covers_every_formula() {
        let suite = ReferenceSuite::builtin();
        for formula in Formula::ALL {
            assert!(suite.cases.iter().any(|case| case.formula == formula));
        }
    }

    #[test]
    fn test_mismatch_reported() {
        let inputs = vec![400.0 * 1e-9];
        let case = ReferenceCase::new("off", Formula::PhotonEnergy, inputs, 5e-19);
        let outcome = case.run();
        assert!(!outcome.passed);
        assert_eq!(outcome.actual, 4.966114480984394e-19);
    }

    #[test]
    fn test_tolerance() {
        let expected = 4.966114480984394e-19;
        let case = ReferenceCase::new("loose", Formula::PhotonEnergy, vec![400e-9], expected);
        let case = case.with_tolerance(1e-12);
        assert!(case.run().passed);

        let case = case.with_tolerance(0.0);
        assert!(!case.run().passed);
    }

    #[test]
    fn test_nan_never_matches() {
        let inputs = vec![2.0 * SPEED_OF_LIGHT];
        let case = ReferenceCase::new("nan", Formula::LorentzFactor, inputs, f64::NAN);
        assert!(!case.run().passed);
        let case = case.with_tolerance(1.0);
        assert!(!case.run().passed);
    }

    #[test]
    fn test_arity_error_is_failed_outcome() {
        let suite = ReferenceSuite::new(vec![
            ReferenceCase::new("short", Formula::PerihelionShift, vec![1.0], 0.0),
            ReferenceCase::new("fine", Formula::SchwarzschildRadius, vec![-1.0], 0.0),
        ]);
        let report = suite.run();
        assert_eq!(report.len(), 2);
        assert!(!report.outcomes[0].passed);
        assert!(report.outcomes[0].actual.is_nan());
        assert!(report.outcomes[1].passed);
        assert!(!report.all_passed());
        assert_eq!(report.failures().count(), 1);
    }

    #[test]
    fn test_empty_suite() {
        let suite = ReferenceSuite::default();
        assert!(suite.is_empty());
        let report = suite.run();
        assert!(report.is_empty());
        assert_eq!(report.len(), 0);
        assert!(report.all_passed());
    }

    #[test]
    fn test_json_defaults() {
        let json = r#"{
            "cases": [
                {
                    "label": "zero wavelength",
                    "formula": "photon_energy",
                    "inputs": [0.0],
                    "expected": 0.0
                }
            ]
        }"#;
        let suite = ReferenceSuite::from_json(json).unwrap();
        assert_eq!(suite.cases[0].scale, 1.0);
        assert_eq!(suite.cases[0].tolerance, None);
        assert!(suite.run().all_passed());
    }

    #[test]
    fn test_json_preserves_builtin_bits() {
        let suite = ReferenceSuite::builtin();
        let json = suite.to_json().unwrap();
        assert!(json.contains("\"perihelion_shift\""));

        let parsed = ReferenceSuite::from_json(&json).unwrap();
        assert_eq!(parsed, suite);
        assert!(parsed.run().all_passed());
    }

    #[test]
    fn test_json_unknown_formula() {
        let json = r#"{"cases": [
            {"label": "x", "formula": "warp_drive", "inputs": [], "expected": 0.0}
        ]}"#;
        let err = ReferenceSuite::from_json(json).unwrap_err();
        assert!(matches!(err, FormularyError::SerializationError(_)));
    }

    #[test]
    fn test_from_path() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        let json = r#"{"cases": [{"label": "earth", "formula": "schwarzschild_radius",
            "inputs": [5.97237e24], "expected": 0.008870062974351377}]}"#;
        file.write_all(json.as_bytes()).unwrap();

        let suite = ReferenceSuite::from_path(file.path()).unwrap();
        assert!(suite.run().all_passed());
    }

    #[test]
    fn test_from_missing_path() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("missing.json");
        let err = ReferenceSuite::from_path(path).unwrap_err();
        assert!(matches!(err, FormularyError::IoError(_)));
    }
}
