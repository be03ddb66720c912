//! Text output: per-case numbers and the stability analysis prompt

use std::fmt::Write;

use crate::atom::AtomState;
use crate::cases::OrbitCase;

const RULE: &str = "================================================================================";

/// Key numbers of one case. The atom views show this same text.
pub fn case_block(state: &AtomState) -> String {
    format!(
        "v = {:.2e} m/s\nλ = {:.2e} m\nC = {:.2e} m\nWaves in orbit: {:.2}",
        state.velocity, state.wavelength, state.circumference, state.wave_count
    )
}

/// Orbit parameters shared by every case
pub fn orbit_summary(state: &AtomState) -> String {
    format!(
        "Orbit n = {}: r = {:.3e} m, E = {:.2} eV",
        state.quantum_number,
        state.radius,
        state.energy_ev()
    )
}

/// The full stdout report for the compared cases
pub fn stability_report(cases: &[OrbitCase]) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "{RULE}");
    let _ = writeln!(out, "ANALYSIS OF ORBITAL STABILITY IN THE HYDROGEN ATOM");
    let _ = writeln!(out, "{RULE}");

    if let Some(first) = cases.first() {
        let _ = writeln!(out, "{}", orbit_summary(&first.state));
    }
    for case in cases {
        let _ = writeln!(out, "\n{} ({})", case.title.to_uppercase(), case.caption);
        for line in case_block(&case.state).lines() {
            let _ = writeln!(out, "   {line}");
        }
    }

    out.push_str(
        "\nOBSERVATIONS FROM THE CASES SHOWN:\n\
         \nCASE A - SPEED TOO HIGH:\n   \
         • The de Broglie wavelength is too short\n   \
         • Too many oscillations in the orbital circumference\n   \
         • A coherent standing wave pattern does not form\n\
         \nCASE B - SPEED TOO LOW:\n   \
         • The de Broglie wavelength is too long\n   \
         • The wave does not complete the orbital circumference\n   \
         • Complete constructive interference is lacking\n",
    );

    let _ = writeln!(out, "\n{RULE}");
    out.push_str(
        "QUESTION FOR ANALYSIS:\n\
         What condition must the orbital speed meet so that\n\
         the electron's de Broglie wave forms a stable and\n\
         complete pattern around the nucleus?\n\
         \n\
         CONSIDER:\n\
         - The relationship between wavelength and speed\n\
         - The need for constructive interference\n\
         - The quantization of stationary states\n",
    );
    let _ = writeln!(out, "{RULE}");
    out
}
