//! Physical constants shared by the exercises
//!
//! Values are given to four significant figures, matching the textbook
//! problems the programs reproduce.

use std::f64::consts::PI;

/// Read-only table of the SI constants the exercises use.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PhysicalConstants {
    /// Planck constant (J·s)
    pub planck: f64,
    /// Vacuum permittivity (C²/N·m²)
    pub vacuum_permittivity: f64,
    /// Elementary charge (C)
    pub electron_charge: f64,
    /// Electron mass (kg)
    pub electron_mass: f64,
    /// Bohr radius (m)
    pub bohr_radius: f64,
    /// Speed of light (m/s)
    pub speed_of_light: f64,
    /// Boltzmann constant (J/K)
    pub boltzmann: f64,
    /// One electronvolt in joules
    pub electron_volt: f64,
}

/// The process-wide constant table.
pub const PHYSICAL: PhysicalConstants = PhysicalConstants {
    planck: 6.626e-34,
    vacuum_permittivity: 8.854e-12,
    electron_charge: 1.602e-19,
    electron_mass: 9.109e-31,
    bohr_radius: 5.292e-11,
    speed_of_light: 2.998e8,
    boltzmann: 1.381e-23,
    electron_volt: 1.602e-19,
};

impl PhysicalConstants {
    /// Reduced Planck constant ħ = h / 2π
    pub fn hbar(&self) -> f64 {
        self.planck / (2.0 * PI)
    }

    /// Convert an energy in joules to electronvolts
    pub fn to_ev(&self, joules: f64) -> f64 {
        joules / self.electron_volt
    }

    /// Symbol, value and unit of every entry, in display order
    pub fn entries(&self) -> [(&'static str, f64, &'static str); 8] {
        [
            ("h", self.planck, "J·s"),
            ("ε₀", self.vacuum_permittivity, "C²/N·m²"),
            ("e", self.electron_charge, "C"),
            ("mₑ", self.electron_mass, "kg"),
            ("a₀", self.bohr_radius, "m"),
            ("c", self.speed_of_light, "m/s"),
            ("k", self.boltzmann, "J/K"),
            ("eV", self.electron_volt, "J"),
        ]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn hbar_is_planck_over_two_pi() {
        let hbar = PHYSICAL.hbar();
        assert!((hbar * 2.0 * PI - PHYSICAL.planck).abs() < 1e-45);
        assert!((hbar - 1.0546e-34).abs() / 1.0546e-34 < 1e-3);
    }

    #[test]
    fn electron_volt_conversion() {
        assert!((PHYSICAL.to_ev(1.602e-19) - 1.0).abs() < 1e-12);
    }

    #[test]
    fn entries_cover_every_field() {
        let entries = PHYSICAL.entries();
        assert_eq!(entries[0], ("h", 6.626e-34, "J·s"));
        assert_eq!(entries[5].1, PHYSICAL.speed_of_light);
        assert!(entries.iter().all(|(_, value, _)| *value > 0.0));
    }
}
