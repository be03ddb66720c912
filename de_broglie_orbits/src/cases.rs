//! The two unstable speeds the exercise compares

use common::PhysicsResult;

use crate::atom::{bohr_velocity, AtomState};
use crate::OrbitConfig;

/// One speed choice drawn as its own atom view
#[derive(Debug, Clone, PartialEq)]
pub struct OrbitCase {
    pub title: &'static str,
    pub caption: &'static str,
    /// Name on the comparison chart's category axis
    pub category: &'static str,
    /// Speed as a multiple of the Bohr speed
    pub factor: f64,
    pub state: AtomState,
}

/// One bar of the comparison chart
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct OrbitComparison {
    pub label: &'static str,
    pub velocity: f64,
    pub wavelength: f64,
    pub wave_count: f64,
}

/// Case A (too fast) and case B (too slow), in that order
pub fn unstable_cases(config: &OrbitConfig) -> PhysicsResult<[OrbitCase; 2]> {
    let n = config.quantum_number;
    let reference = bohr_velocity(n)?;

    Ok([
        OrbitCase {
            title: "Case A: Speed Too High",
            caption: "λ too short, does not fit correctly",
            category: "Higher velocity",
            factor: config.high_factor,
            state: AtomState::recompute(n, reference * config.high_factor)?,
        },
        OrbitCase {
            title: "Case B: Speed Too Low",
            caption: "λ too long, extra space",
            category: "Lower velocity",
            factor: config.low_factor,
            state: AtomState::recompute(n, reference * config.low_factor)?,
        },
    ])
}

/// Bars for the comparison chart, slowest first
pub fn comparison(cases: &[OrbitCase]) -> Vec<OrbitComparison> {
    let mut bars: Vec<OrbitComparison> = cases
        .iter()
        .map(|case| OrbitComparison {
            label: case.category,
            velocity: case.state.velocity,
            wavelength: case.state.wavelength,
            wave_count: case.state.wave_count,
        })
        .collect();
    bars.sort_by(|a, b| a.velocity.total_cmp(&b.velocity));
    bars
}
