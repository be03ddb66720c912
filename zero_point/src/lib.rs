//! Zero-point vs. Thermal Oscillator Energy
//!
//! Compares the ground-state energy ½ħω of a quantum oscillator with its mean
//! thermal energy ħω / (exp(ħω/kT) − 1) across the optical and infrared
//! spectrum, with a closer look at 6000 Å.

pub mod equations_ui;
pub mod oscillator;
pub mod report;
pub mod sweep;
pub mod view;

/// Parameters of the spectrum sweep
#[derive(Debug, Clone, PartialEq)]
pub struct SpectrumConfig {
    /// Wavelength span in nanometres
    pub wavelength_nm: (f64, f64),
    pub samples: usize,
    /// Kelvin
    pub temperature: f64,
    /// Wavelength of the detailed calculation, in ångström
    pub highlight_angstrom: f64,
    /// Range of the temperature slider, in kelvin
    pub temperature_range: (f64, f64),
}

impl Default for SpectrumConfig {
    fn default() -> Self {
        Self {
            wavelength_nm: (100.0, 10000.0),
            samples: 500,
            temperature: 300.0,
            highlight_angstrom: 6000.0,
            temperature_range: (10.0, 3000.0),
        }
    }
}

impl SpectrumConfig {
    /// Highlighted wavelength in metres
    pub fn highlight_wavelength(&self) -> f64 {
        self.highlight_angstrom * 1e-10
    }

    pub fn highlight_nm(&self) -> f64 {
        self.highlight_angstrom / 10.0
    }
}
