//! Bohr Orbits and de Broglie Waves
//!
//! Fixes the electron on the n-th Bohr orbit and gives it a speed that is
//! either too high or too low. The de Broglie wave then either overruns or
//! falls short of the orbit's circumference, which the program prints and
//! draws side by side with a bar chart of the wave count.

pub mod atom;
pub mod cases;
pub mod equations_ui;
pub mod orbit;
pub mod report;
pub mod view;

/// Parameters of the orbit comparison
#[derive(Debug, Clone, PartialEq)]
pub struct OrbitConfig {
    /// Principal quantum number of the orbit
    pub quantum_number: u32,
    /// Speed of the "too fast" case, as a multiple of the Bohr speed
    pub high_factor: f64,
    /// Speed of the "too slow" case, as a multiple of the Bohr speed
    pub low_factor: f64,
    /// Angles sampled along the drawn wave
    pub wave_samples: usize,
    /// Wave amplitude as a fraction of the orbit radius
    pub wave_amplitude: f64,
    /// Range of the interactive speed factor slider
    pub explorer_range: (f64, f64),
}

impl Default for OrbitConfig {
    fn default() -> Self {
        Self {
            quantum_number: 1,
            high_factor: 1.8,
            low_factor: 0.6,
            wave_samples: 200,
            wave_amplitude: 0.1,
            explorer_range: (0.2, 3.0),
        }
    }
}
