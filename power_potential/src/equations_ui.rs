//! Equations shown next to the potential charts

use common::equations_ui::Equation;

pub const POTENTIAL_EQUATIONS: &[Equation] = &[
    Equation {
        name: "Power-law potential",
        formula: "V(r) = v·(r/a)ˣ",
        description: "Strength v at the reference radius a",
    },
    Equation {
        name: "Zero exponent",
        formula: "V(r, 0) = v",
        description: "Independent of r",
    },
    Equation {
        name: "Growth in x",
        formula: "∂V/∂x = V·ln(r/a)",
        description: "Increasing for r > a, decreasing for r < a",
    },
];

pub const POTENTIAL_VARIABLES: &[(&str, &str)] = &[
    ("r", "Radius (r > 0)"),
    ("x", "Exponent (k on the left chart)"),
    ("v", "Potential strength (2.0)"),
    ("a", "Reference radius (1.0)"),
];
