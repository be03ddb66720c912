//! Quantum harmonic oscillator energies for light of a given wavelength
//!
//! All functions take SI units (metres, kelvin) and return joules unless
//! noted. The thermal term is guarded against overflow: once ħω/kT passes
//! [`OVERFLOW_THRESHOLD`] it is exactly zero and the exponential is never
//! evaluated. The array forms map the scalar functions element by element,
//! so both always agree.

use std::f64::consts::PI;

use common::{PhysicsError, PhysicsResult, PHYSICAL};
use ndarray::Array1;

/// Largest ħω/kT for which the Bose-Einstein term is evaluated
pub const OVERFLOW_THRESHOLD: f64 = 100.0;

fn check_wavelength(wavelength: f64) -> PhysicsResult<()> {
    if !wavelength.is_finite() || wavelength <= 0.0 {
        return Err(PhysicsError::domain(
            "angular frequency",
            format!("λ = {wavelength} m"),
            "wavelength must be positive and finite",
        ));
    }
    Ok(())
}

fn check_temperature(temperature: f64) -> PhysicsResult<()> {
    if !temperature.is_finite() || temperature <= 0.0 {
        return Err(PhysicsError::domain(
            "thermal energy",
            format!("T = {temperature} K"),
            "temperature must be positive and finite",
        ));
    }
    Ok(())
}

/// ω = 2πc/λ, in rad/s
pub fn angular_frequency(wavelength: f64) -> PhysicsResult<f64> {
    check_wavelength(wavelength)?;
    Ok(2.0 * PI * PHYSICAL.speed_of_light / wavelength)
}

/// Energy quantum ħω
pub fn quantum_energy(wavelength: f64) -> PhysicsResult<f64> {
    Ok(PHYSICAL.hbar() * angular_frequency(wavelength)?)
}

/// E₀ = ½ħω
pub fn zero_point_energy(wavelength: f64) -> PhysicsResult<f64> {
    Ok(0.5 * quantum_energy(wavelength)?)
}

/// ħω/kT
pub fn boltzmann_exponent(wavelength: f64, temperature: f64) -> PhysicsResult<f64> {
    check_temperature(temperature)?;
    Ok(quantum_energy(wavelength)? / (PHYSICAL.boltzmann * temperature))
}

fn occupation_energy(quantum: f64, exponent: f64) -> f64 {
    if exponent > OVERFLOW_THRESHOLD {
        0.0
    } else {
        quantum / exponent.exp_m1()
    }
}

/// Mean thermal energy ħω / (exp(ħω/kT) − 1)
pub fn thermal_energy(wavelength: f64, temperature: f64) -> PhysicsResult<f64> {
    let exponent = boltzmann_exponent(wavelength, temperature)?;
    Ok(occupation_energy(quantum_energy(wavelength)?, exponent))
}

/// [`zero_point_energy`] at every wavelength
pub fn zero_point_energy_array(wavelengths: &Array1<f64>) -> PhysicsResult<Array1<f64>> {
    wavelengths
        .iter()
        .map(|&l| zero_point_energy(l))
        .collect::<PhysicsResult<Vec<_>>>()
        .map(Array1::from)
}

/// [`thermal_energy`] at every wavelength, sharing one temperature
pub fn thermal_energy_array(
    wavelengths: &Array1<f64>,
    temperature: f64,
) -> PhysicsResult<Array1<f64>> {
    check_temperature(temperature)?;
    wavelengths
        .iter()
        .map(|&l| thermal_energy(l, temperature))
        .collect::<PhysicsResult<Vec<_>>>()
        .map(Array1::from)
}

/// Everything the detailed calculation reports for one wavelength
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct OscillatorSample {
    /// m
    pub wavelength: f64,
    /// K
    pub temperature: f64,
    /// rad/s
    pub angular_frequency: f64,
    /// J
    pub zero_point: f64,
    /// J
    pub thermal: f64,
    /// ħω/kT
    pub exponent: f64,
}

impl OscillatorSample {
    pub fn evaluate(wavelength: f64, temperature: f64) -> PhysicsResult<Self> {
        Ok(Self {
            wavelength,
            temperature,
            angular_frequency: angular_frequency(wavelength)?,
            zero_point: zero_point_energy(wavelength)?,
            thermal: thermal_energy(wavelength, temperature)?,
            exponent: boltzmann_exponent(wavelength, temperature)?,
        })
    }

    pub fn zero_point_ev(&self) -> f64 {
        PHYSICAL.to_ev(self.zero_point)
    }

    pub fn thermal_ev(&self) -> f64 {
        PHYSICAL.to_ev(self.thermal)
    }

    /// ħω in eV
    pub fn quantum_ev(&self) -> f64 {
        PHYSICAL.to_ev(PHYSICAL.hbar() * self.angular_frequency)
    }

    /// kT in eV
    pub fn thermal_scale_ev(&self) -> f64 {
        PHYSICAL.to_ev(PHYSICAL.boltzmann * self.temperature)
    }

    /// E_thermal / E₀, or 0 when E₀ vanishes
    pub fn ratio(&self) -> f64 {
        if self.zero_point == 0.0 {
            0.0
        } else {
            self.thermal / self.zero_point
        }
    }
}
