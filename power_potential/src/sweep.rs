//! Sweeps of the potential over radius and exponent

use common::{PhysicsResult, SweepGrid};

use crate::potential::PowerLaw;
use crate::PotentialConfig;

/// One evaluated table entry
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PotentialSample {
    pub radius: f64,
    pub exponent: f64,
    pub value: f64,
}

/// A labeled continuous curve, `[input, V]` pairs in grid order
#[derive(Debug, Clone, PartialEq)]
pub struct Curve {
    pub label: String,
    pub points: Vec<[f64; 2]>,
}

/// Cartesian product of the two grids: outer loop over radius, inner over exponent.
pub fn integer_table(
    law: &PowerLaw,
    radii: &SweepGrid,
    exponents: &SweepGrid,
) -> PhysicsResult<Vec<PotentialSample>> {
    let mut table = Vec::with_capacity(radii.len() * exponents.len());
    for radius in radii.iter() {
        for exponent in exponents.iter() {
            table.push(PotentialSample {
                radius,
                exponent,
                value: law.eval(radius, exponent)?,
            });
        }
    }
    Ok(table)
}

/// V as a function of the exponent, one curve per radius
pub fn curves_over_exponent(
    law: &PowerLaw,
    radii: &SweepGrid,
    exponents: &SweepGrid,
) -> PhysicsResult<Vec<Curve>> {
    radii
        .iter()
        .map(|r| -> PhysicsResult<Curve> {
            Ok(Curve {
                label: format!("r = {r}"),
                points: exponents.evaluate(|x| Ok([x, law.eval(r, x)?]))?,
            })
        })
        .collect()
}

/// V as a function of the radius, one curve per exponent
pub fn curves_over_radius(
    law: &PowerLaw,
    exponents: &[i32],
    radii: &SweepGrid,
) -> PhysicsResult<Vec<Curve>> {
    exponents
        .iter()
        .map(|&x| -> PhysicsResult<Curve> {
            let x = f64::from(x);
            Ok(Curve {
                label: format!("x = {x}"),
                points: radii.evaluate(|r| Ok([r, law.eval(r, x)?]))?,
            })
        })
        .collect()
}

/// Everything the potential program prints and plots
#[derive(Debug, Clone, PartialEq)]
pub struct PotentialSweep {
    pub table: Vec<PotentialSample>,
    pub exponent_curves: Vec<Curve>,
    pub radius_curves: Vec<Curve>,
}

impl PotentialSweep {
    pub fn run(config: &PotentialConfig) -> PhysicsResult<Self> {
        let radii = SweepGrid::integer_range(config.radii.0, config.radii.1)?;
        let exponents = SweepGrid::integer_range(config.exponents.0, config.exponents.1)?;
        let table = integer_table(&config.law, &radii, &exponents)?;
        log::debug!(
            "Evaluated {} table entries ({} radii x {} exponents)",
            table.len(),
            radii.len(),
            exponents.len()
        );

        let exponent_grid = SweepGrid::linspace(
            config.exponent_span.0,
            config.exponent_span.1,
            config.curve_samples,
        )?;
        let exponent_curves = curves_over_exponent(&config.law, &radii, &exponent_grid)?;

        let radius_grid = SweepGrid::linspace(
            config.radius_span.0,
            config.radius_span.1,
            config.curve_samples,
        )?;
        let radius_curves =
            curves_over_radius(&config.law, &config.radius_curve_exponents, &radius_grid)?;
        log::debug!(
            "Evaluated {} V(k) and {} V(r) curves of {} samples",
            exponent_curves.len(),
            radius_curves.len(),
            config.curve_samples
        );

        Ok(Self {
            table,
            exponent_curves,
            radius_curves,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn table_order_is_radius_major() {
        let radii = SweepGrid::integer_range(1, 2).unwrap();
        let exponents = SweepGrid::integer_range(0, 2).unwrap();
        let table = integer_table(&PowerLaw::default(), &radii, &exponents).unwrap();
        let order: Vec<(f64, f64)> = table.iter().map(|s| (s.radius, s.exponent)).collect();
        assert_eq!(
            order,
            vec![(1.0, 0.0), (1.0, 1.0), (1.0, 2.0), (2.0, 0.0), (2.0, 1.0), (2.0, 2.0)]
        );
        assert_eq!(table[5].value, 8.0);
    }

    #[test]
    fn default_sweep_sizes() {
        let sweep = PotentialSweep::run(&PotentialConfig::default()).unwrap();
        assert_eq!(sweep.table.len(), 5 * 11);
        assert_eq!(sweep.exponent_curves.len(), 5);
        assert!(sweep.exponent_curves.iter().all(|c| c.points.len() == 1000));
        assert_eq!(sweep.exponent_curves[0].label, "r = 1");
        assert_eq!(sweep.radius_curves.len(), 6);
        assert_eq!(sweep.radius_curves[2].label, "x = 2");
    }

    #[test]
    fn radius_one_curve_is_flat() {
        let sweep = PotentialSweep::run(&PotentialConfig::default()).unwrap();
        assert!(sweep.exponent_curves[0].points.iter().all(|p| (p[1] - 2.0).abs() < 1e-12));
    }

    #[test]
    fn sweep_through_zero_radius_aborts() {
        let config = PotentialConfig {
            radius_span: (0.0, 5.0),
            radius_curve_exponents: vec![-1],
            ..PotentialConfig::default()
        };
        assert!(PotentialSweep::run(&config).is_err());
    }
}
