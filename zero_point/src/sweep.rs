//! Energies across the spectrum at one temperature

use common::{PhysicsResult, SweepGrid, PHYSICAL};
use ndarray::Array1;

use crate::oscillator::{thermal_energy_array, zero_point_energy_array, OscillatorSample};
use crate::SpectrumConfig;

/// Both energy curves in eV, on a wavelength grid in nm
#[derive(Debug, Clone, PartialEq)]
pub struct Spectrum {
    pub temperature: f64,
    pub wavelengths_nm: Array1<f64>,
    pub zero_point_ev: Array1<f64>,
    pub thermal_ev: Array1<f64>,
    /// Exact evaluation at the highlighted wavelength
    pub highlight: OscillatorSample,
}

pub fn spectrum(config: &SpectrumConfig) -> PhysicsResult<Spectrum> {
    let (start, stop) = config.wavelength_nm;
    let grid = SweepGrid::linspace(start, stop, config.samples)?;
    let metres = grid.scaled(1e-9);

    let zero_point_ev = zero_point_energy_array(&metres)?.mapv(|e| PHYSICAL.to_ev(e));
    let thermal_ev = thermal_energy_array(&metres, config.temperature)?.mapv(|e| PHYSICAL.to_ev(e));
    let highlight = OscillatorSample::evaluate(config.highlight_wavelength(), config.temperature)?;

    log::debug!(
        "Spectrum at {} K: {} wavelengths, {} above the overflow guard",
        config.temperature,
        grid.len(),
        thermal_ev.iter().filter(|e| **e == 0.0).count()
    );

    Ok(Spectrum {
        temperature: config.temperature,
        wavelengths_nm: grid.values().clone(),
        zero_point_ev,
        thermal_ev,
        highlight,
    })
}

fn points(x: &Array1<f64>, y: &Array1<f64>) -> Vec<[f64; 2]> {
    x.iter().zip(y.iter()).map(|(x, y)| [*x, *y]).collect()
}

impl Spectrum {
    pub fn zero_point_points(&self) -> Vec<[f64; 2]> {
        points(&self.wavelengths_nm, &self.zero_point_ev)
    }

    pub fn thermal_points(&self) -> Vec<[f64; 2]> {
        points(&self.wavelengths_nm, &self.thermal_ev)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_spectrum_shape() {
        let s = spectrum(&SpectrumConfig::default()).unwrap();
        assert_eq!(s.wavelengths_nm.len(), 500);
        assert_eq!(s.wavelengths_nm[0], 100.0);
        assert_eq!(s.wavelengths_nm[499], 10000.0);
        assert_eq!(s.zero_point_ev.len(), 500);
        assert_eq!(s.thermal_ev.len(), 500);
    }

    #[test]
    fn short_wavelengths_hit_the_guard() {
        let s = spectrum(&SpectrumConfig::default()).unwrap();
        // ħω/kT at 100 nm and 300 K is far beyond the threshold.
        assert_eq!(s.thermal_ev[0], 0.0);
        assert!(s.thermal_ev[499] > 0.0);
        assert!(s.zero_point_ev.iter().all(|e| *e > 0.0));
    }

    #[test]
    fn zero_point_falls_with_wavelength() {
        let s = spectrum(&SpectrumConfig::default()).unwrap();
        assert!(s.zero_point_ev.to_vec().windows(2).all(|w| w[1] < w[0]));
    }

    #[test]
    fn hotter_spectrum_has_more_thermal_energy() {
        let cold = spectrum(&SpectrumConfig::default()).unwrap();
        let hot = spectrum(&SpectrumConfig {
            temperature: 1000.0,
            ..SpectrumConfig::default()
        })
        .unwrap();
        assert_eq!(cold.zero_point_ev, hot.zero_point_ev);
        assert!(hot.thermal_ev[499] > cold.thermal_ev[499]);
        assert!(hot.highlight.thermal > cold.highlight.thermal);
    }

    #[test]
    fn zero_temperature_aborts_the_sweep() {
        let config = SpectrumConfig {
            temperature: 0.0,
            ..SpectrumConfig::default()
        };
        assert!(spectrum(&config).is_err());
    }
}
