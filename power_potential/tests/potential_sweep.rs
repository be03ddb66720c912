use common::{PhysicsError, SweepGrid};
use power_potential::potential::PowerLaw;
use power_potential::report::sweep_report;
use power_potential::sweep::{integer_table, PotentialSweep};
use power_potential::PotentialConfig;
use proptest::prelude::*;

fn single_point_report(r: i32, x: i32) -> String {
    let radii = SweepGrid::integer_range(r, r).unwrap();
    let exponents = SweepGrid::integer_range(x, x).unwrap();
    let table = integer_table(&PowerLaw::default(), &radii, &exponents).unwrap();
    sweep_report(&table)
}

#[test]
fn unit_radius_zero_exponent() {
    assert_eq!(single_point_report(1, 0), "V(r=1, x=0) = 2.00\n");
}

#[test]
fn radius_two_exponent_one() {
    assert_eq!(single_point_report(2, 1), "V(r=2, x=1) = 4.00\n");
}

#[test]
fn default_report_layout() {
    let sweep = PotentialSweep::run(&PotentialConfig::default()).unwrap();
    let report = sweep_report(&sweep.table);
    let lines: Vec<&str> = report.lines().collect();

    assert_eq!(lines.len(), 55);
    assert_eq!(lines[0], "V(r=1, x=0) = 2.00");
    assert_eq!(lines[11], "V(r=2, x=0) = 2.00");
    assert_eq!(lines[13], "V(r=2, x=2) = 8.00");
    assert_eq!(lines[54], "V(r=5, x=10) = 19531250.00");
}

#[test]
fn report_is_idempotent() {
    let config = PotentialConfig::default();
    let first = sweep_report(&PotentialSweep::run(&config).unwrap().table);
    let second = sweep_report(&PotentialSweep::run(&config).unwrap().table);
    assert_eq!(first, second);
}

#[test]
fn zero_radius_with_negative_exponent_aborts_table() {
    let radii = SweepGrid::integer_range(0, 2).unwrap();
    let exponents = SweepGrid::integer_range(-1, 1).unwrap();
    let err = integer_table(&PowerLaw::default(), &radii, &exponents).unwrap_err();
    assert!(matches!(err, PhysicsError::Domain { .. }));
}

proptest! {
    #[test]
    fn matches_closed_form(r in 0.01f64..10.0, x in -10i32..=10) {
        let law = PowerLaw::default();
        let value = law.eval(r, f64::from(x)).unwrap();
        let expected = 2.0 * (r / 1.0).powi(x);
        prop_assert!((value - expected).abs() <= 1e-12 * expected.abs().max(1.0));
    }

    #[test]
    fn zero_exponent_is_strength(r in 0.01f64..1e6) {
        prop_assert_eq!(PowerLaw::default().eval(r, 0.0).unwrap(), 2.0);
    }

    #[test]
    fn increasing_in_exponent_above_reference(r in 1.01f64..5.0, x in 0i32..10) {
        let law = PowerLaw::default();
        let lower = law.eval(r, f64::from(x)).unwrap();
        let upper = law.eval(r, f64::from(x + 1)).unwrap();
        prop_assert!(upper > lower);
    }

    #[test]
    fn decreasing_in_exponent_below_reference(r in 0.05f64..0.99, x in 0i32..10) {
        let law = PowerLaw::default();
        let lower = law.eval(r, f64::from(x)).unwrap();
        let upper = law.eval(r, f64::from(x + 1)).unwrap();
        prop_assert!(upper < lower);
    }
}
