//! Power-law potential
//!
//! Evaluates `V(r, x) = v·(r/a)^x` over integer radii and exponents, prints the
//! table, and plots the potential as continuous curves in both variables.

pub mod equations_ui;
pub mod potential;
pub mod report;
pub mod sweep;
pub mod view;

use potential::PowerLaw;

/// Parameters of the potential sweep
#[derive(Debug, Clone, PartialEq)]
pub struct PotentialConfig {
    pub law: PowerLaw,
    /// Inclusive integer radius range of the printed table
    pub radii: (i32, i32),
    /// Inclusive integer exponent range of the printed table
    pub exponents: (i32, i32),
    /// Continuous exponent span for the V(k) curves
    pub exponent_span: (f64, f64),
    /// Continuous radius span for the V(r) curves; must stay above zero
    pub radius_span: (f64, f64),
    /// Exponents drawn as V(r) curves
    pub radius_curve_exponents: Vec<i32>,
    /// Samples per continuous curve
    pub curve_samples: usize,
}

impl Default for PotentialConfig {
    fn default() -> Self {
        Self {
            law: PowerLaw::default(),
            radii: (1, 5),
            exponents: (0, 10),
            exponent_span: (0.0, 10.0),
            radius_span: (0.1, 5.0),
            radius_curve_exponents: (0..=5).collect(),
            curve_samples: 1000,
        }
    }
}
