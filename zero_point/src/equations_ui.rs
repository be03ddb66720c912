//! Equations shown next to the spectrum chart

use common::equations_ui::Equation;

pub const OSCILLATOR_EQUATIONS: &[Equation] = &[
    Equation {
        name: "Angular Frequency",
        formula: "ω = 2πc / λ",
        description: "Oscillator frequency for light of wavelength λ",
    },
    Equation {
        name: "Zero-point Energy",
        formula: "E₀ = ½ħω",
        description: "Energy left in the oscillator at absolute zero",
    },
    Equation {
        name: "Thermal Energy",
        formula: "E_th = ħω / (e^(ħω/kT) − 1)",
        description: "Mean Bose-Einstein energy above the ground state",
    },
    Equation {
        name: "Overflow Guard",
        formula: "ħω/kT > 100 ⇒ E_th = 0",
        description: "The exponential is not evaluated past the threshold",
    },
];

pub const OSCILLATOR_VARIABLES: &[(&str, &str)] = &[
    ("λ", "Wavelength"),
    ("ω", "Angular frequency"),
    ("ħ", "Reduced Planck constant h/2π"),
    ("k", "Boltzmann constant"),
    ("T", "Temperature"),
];
