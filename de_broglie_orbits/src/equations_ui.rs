//! Equations shown next to the orbit diagrams

use common::equations_ui::Equation;

pub const ORBIT_EQUATIONS: &[Equation] = &[
    Equation {
        name: "Bohr Radius",
        formula: "rₙ = ε₀h²n² / (π·mₑ·e²)",
        description: "Orbit radius for quantum number n",
    },
    Equation {
        name: "Orbit Energy",
        formula: "Eₙ = −mₑe⁴ / (8ε₀²h²n²)",
        description: "−13.6 eV for the ground state",
    },
    Equation {
        name: "de Broglie Wavelength",
        formula: "λ = h / (mₑ·v)",
        description: "Wavelength of the moving electron",
    },
    Equation {
        name: "Waves in Orbit",
        formula: "N = 2πr / λ",
        description: "Wavelengths that fit the circumference",
    },
];

pub const ORBIT_VARIABLES: &[(&str, &str)] = &[
    ("n", "Principal quantum number"),
    ("r", "Orbit radius"),
    ("v", "Orbital speed"),
    ("λ", "de Broglie wavelength"),
    ("C", "Orbit circumference"),
    ("N", "Number of wavelengths in the orbit"),
];
