//! Bohr-model orbit and the electron's de Broglie wavelength
//!
//! The orbit radius and energy depend only on the quantum number. The
//! wavelength, and therefore how many wavelengths fit around the orbit,
//! depends on the speed the electron is given.

use std::f64::consts::PI;

use common::{PhysicsError, PhysicsResult, PHYSICAL};

fn check_quantum_number(n: u32) -> PhysicsResult<f64> {
    if n == 0 {
        return Err(PhysicsError::domain(
            "Bohr orbit",
            "n = 0",
            "quantum number must be at least 1",
        ));
    }
    Ok(f64::from(n))
}

/// Orbit radius r = ε₀h²n² / (π·mₑ·e²)
pub fn bohr_radius(n: u32) -> PhysicsResult<f64> {
    let n = check_quantum_number(n)?;
    let c = &PHYSICAL;
    Ok(c.vacuum_permittivity * c.planck.powi(2) * n * n
        / (PI * c.electron_mass * c.electron_charge.powi(2)))
}

/// Orbit energy E = −mₑe⁴ / (8ε₀²h²n²), in joules
pub fn orbit_energy(n: u32) -> PhysicsResult<f64> {
    let n = check_quantum_number(n)?;
    let c = &PHYSICAL;
    Ok(-(c.electron_mass * c.electron_charge.powi(4))
        / (8.0 * c.vacuum_permittivity.powi(2) * c.planck.powi(2) * n * n))
}

/// Orbital speed of the Bohr model, v = e² / (2ε₀hn)
pub fn bohr_velocity(n: u32) -> PhysicsResult<f64> {
    let n = check_quantum_number(n)?;
    let c = &PHYSICAL;
    Ok(c.electron_charge.powi(2) / (2.0 * c.vacuum_permittivity * c.planck * n))
}

/// de Broglie wavelength λ = h / (mₑ·v). Undefined for v = 0.
pub fn de_broglie_wavelength(velocity: f64) -> PhysicsResult<f64> {
    if !velocity.is_finite() {
        return Err(PhysicsError::domain(
            "de Broglie wavelength",
            format!("v = {velocity} m/s"),
            "velocity must be finite",
        ));
    }
    if velocity == 0.0 {
        return Err(PhysicsError::domain(
            "de Broglie wavelength",
            "v = 0 m/s",
            "division by zero momentum",
        ));
    }
    Ok(PHYSICAL.planck / (PHYSICAL.electron_mass * velocity))
}

/// Snapshot of the electron on orbit `quantum_number` moving at `velocity`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AtomState {
    pub quantum_number: u32,
    /// m/s
    pub velocity: f64,
    /// m
    pub radius: f64,
    /// m
    pub wavelength: f64,
    /// m
    pub circumference: f64,
    /// Wavelengths that fit around the orbit
    pub wave_count: f64,
    /// J
    pub energy: f64,
}

impl AtomState {
    /// Compute every field from scratch.
    pub fn recompute(quantum_number: u32, velocity: f64) -> PhysicsResult<Self> {
        let radius = bohr_radius(quantum_number)?;
        let energy = orbit_energy(quantum_number)?;
        let wavelength = de_broglie_wavelength(velocity)?;
        let circumference = 2.0 * PI * radius;

        Ok(Self {
            quantum_number,
            velocity,
            radius,
            wavelength,
            circumference,
            wave_count: circumference / wavelength,
            energy,
        })
    }

    /// Same orbit, different speed
    pub fn with_velocity(&self, velocity: f64) -> PhysicsResult<Self> {
        Self::recompute(self.quantum_number, velocity)
    }

    pub fn energy_ev(&self) -> f64 {
        PHYSICAL.to_ev(self.energy)
    }

    /// Whether a whole, non-zero number of wavelengths fits the orbit
    pub fn is_standing_wave(&self, tolerance: f64) -> bool {
        let nearest = self.wave_count.abs().round();
        nearest >= 1.0 && (self.wave_count.abs() - nearest).abs() <= tolerance
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ground_state_radius_is_bohr_radius() {
        let r = bohr_radius(1).unwrap();
        assert!((r - PHYSICAL.bohr_radius).abs() / PHYSICAL.bohr_radius < 1e-3);
    }

    #[test]
    fn radius_grows_with_n_squared() {
        let r1 = bohr_radius(1).unwrap();
        let r3 = bohr_radius(3).unwrap();
        assert!((r3 / r1 - 9.0).abs() < 1e-12);
    }

    #[test]
    fn ground_state_energy_is_thirteen_point_six_ev() {
        let e = PHYSICAL.to_ev(orbit_energy(1).unwrap());
        assert!((e + 13.6).abs() < 0.01, "E1 = {e}");
    }

    #[test]
    fn bohr_speed_fits_exactly_one_wavelength() {
        let v = bohr_velocity(1).unwrap();
        let state = AtomState::recompute(1, v).unwrap();
        assert!((state.wave_count - 1.0).abs() < 1e-3);
        assert!(state.is_standing_wave(1e-3));
    }

    #[test]
    fn bohr_speed_fits_n_wavelengths_on_orbit_n() {
        for n in 1..=4 {
            let state = AtomState::recompute(n, bohr_velocity(n).unwrap()).unwrap();
            assert!((state.wave_count - f64::from(n)).abs() < 1e-2);
        }
    }

    #[test]
    fn zero_velocity_is_domain_error() {
        assert!(matches!(
            de_broglie_wavelength(0.0),
            Err(PhysicsError::Domain { .. })
        ));
        assert!(AtomState::recompute(1, 0.0).is_err());
        assert!(AtomState::recompute(1, f64::INFINITY).is_err());
    }

    #[test]
    fn zero_quantum_number_is_domain_error() {
        assert!(bohr_radius(0).is_err());
        assert!(AtomState::recompute(0, 1e6).is_err());
    }

    #[test]
    fn fractional_wave_count_is_not_standing() {
        let v = bohr_velocity(1).unwrap();
        assert!(!AtomState::recompute(1, 0.6 * v).unwrap().is_standing_wave(0.05));
        assert!(!AtomState::recompute(1, 1.8 * v).unwrap().is_standing_wave(0.05));
    }
}
