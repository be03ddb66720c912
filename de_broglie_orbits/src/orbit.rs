//! Orbit diagram geometry in metres, centred on the nucleus

use std::f64::consts::TAU;

use common::{PhysicsError, PhysicsResult, SweepGrid};
use glam::DVec2;

use crate::atom::AtomState;

/// Nucleus disc radius as a fraction of the orbit radius
pub const NUCLEUS_FRACTION: f64 = 0.1;

#[derive(Debug, Clone, PartialEq)]
pub struct OrbitGeometry {
    pub radius: f64,
    pub nucleus_radius: f64,
    /// The de Broglie wave wrapped around the orbit
    pub wave: Vec<DVec2>,
    /// Evenly spaced node markers on the orbit
    pub nodes: Vec<DVec2>,
}

fn on_circle(radius: f64, angle: f64) -> DVec2 {
    DVec2::new(angle.cos(), angle.sin()) * radius
}

/// `floor(|N|) + 1`, refused once the wave would need more nodes than it
/// has samples to draw with.
fn node_count(wave_count: f64, samples: usize) -> PhysicsResult<usize> {
    let whole = wave_count.abs().floor();
    if !whole.is_finite() || whole >= samples as f64 {
        return Err(PhysicsError::domain(
            "orbit diagram",
            format!("N = {wave_count:.3e} with {samples} samples"),
            "too many wavelengths to draw around the orbit",
        ));
    }
    Ok(whole as usize + 1)
}

impl OrbitGeometry {
    /// Wave `r + amplitude·r·sin(N·θ)` over `samples` angles, and
    /// `floor(|N|) + 1` nodes spread over the full turn. Fails when `|N|`
    /// reaches `samples`.
    pub fn new(state: &AtomState, samples: usize, amplitude: f64) -> PhysicsResult<Self> {
        let r = state.radius;
        let n = state.wave_count;

        let wave = SweepGrid::linspace(0.0, TAU, samples)?
            .iter()
            .map(|theta| on_circle(r + amplitude * r * (n * theta).sin(), theta))
            .collect();

        let nodes = SweepGrid::linspace(0.0, TAU, node_count(n, samples)?)?
            .iter()
            .map(|theta| on_circle(r, theta))
            .collect();

        Ok(Self {
            radius: r,
            nucleus_radius: r * NUCLEUS_FRACTION,
            wave,
            nodes,
        })
    }

    /// Half-width of the square that frames the diagram
    pub fn extent(&self) -> f64 {
        1.5 * self.radius
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::atom::bohr_velocity;

    fn state(factor: f64) -> AtomState {
        AtomState::recompute(1, bohr_velocity(1).unwrap() * factor).unwrap()
    }

    #[test]
    fn wave_stays_within_amplitude_band() {
        let s = state(1.8);
        let geometry = OrbitGeometry::new(&s, 200, 0.1).unwrap();
        assert_eq!(geometry.wave.len(), 200);
        for p in &geometry.wave {
            let d = p.length();
            assert!(d >= 0.9 * s.radius * (1.0 - 1e-12) && d <= 1.1 * s.radius * (1.0 + 1e-12));
        }
    }

    #[test]
    fn node_count_follows_wave_count() {
        assert_eq!(OrbitGeometry::new(&state(1.8), 200, 0.1).unwrap().nodes.len(), 2);
        assert_eq!(OrbitGeometry::new(&state(0.6), 200, 0.1).unwrap().nodes.len(), 1);
        assert_eq!(OrbitGeometry::new(&state(3.2), 200, 0.1).unwrap().nodes.len(), 4);
    }

    #[test]
    fn nodes_lie_on_the_orbit() {
        let s = state(2.5);
        let geometry = OrbitGeometry::new(&s, 50, 0.1).unwrap();
        for node in &geometry.nodes {
            assert!((node.length() - s.radius).abs() < 1e-20);
        }
        assert!((geometry.nodes[0] - DVec2::new(s.radius, 0.0)).length() < 1e-20);
    }

    #[test]
    fn wave_starts_on_the_orbit() {
        let s = state(1.8);
        let geometry = OrbitGeometry::new(&s, 200, 0.1).unwrap();
        assert!((geometry.wave[0].length() - s.radius).abs() < 1e-20);
        assert_eq!(geometry.nucleus_radius, s.radius * NUCLEUS_FRACTION);
    }

    #[test]
    fn huge_wave_count_is_refused() {
        let fast = AtomState::recompute(1, 1e300).unwrap();
        assert!(matches!(
            OrbitGeometry::new(&fast, 200, 0.1),
            Err(PhysicsError::Domain { .. })
        ));
    }

    #[test]
    fn node_count_is_bounded_by_samples() {
        assert!(OrbitGeometry::new(&state(199.5), 200, 0.1).is_ok());
        assert!(OrbitGeometry::new(&state(200.5), 200, 0.1).is_err());
        assert!(OrbitGeometry::new(&state(-1.8), 200, 0.1).is_ok());
    }
}
