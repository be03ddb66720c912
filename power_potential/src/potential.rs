//! The power-law potential V(r, x) = v·(r/a)^x

use common::{PhysicsError, PhysicsResult};

const QUANTITY: &str = "V(r, x)";

/// Potential strength `v` at the reference radius `a`
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PowerLaw {
    pub v: f64,
    pub a: f64,
}

impl Default for PowerLaw {
    fn default() -> Self {
        Self { v: 2.0, a: 1.0 }
    }
}

impl PowerLaw {
    pub fn new(v: f64, a: f64) -> Self {
        Self { v, a }
    }

    /// Evaluate `v·(r/a)^x`.
    ///
    /// Integer exponents go through `powi`, so `V(r, 0)` is exactly `v`.
    /// Fails where the power is undefined over the reals: a zero base with a
    /// negative or fractional exponent, or a negative base with a fractional
    /// exponent.
    pub fn eval(&self, r: f64, x: f64) -> PhysicsResult<f64> {
        let input = || format!("r = {r}, x = {x}");

        if !r.is_finite() || !x.is_finite() {
            return Err(PhysicsError::domain(QUANTITY, input(), "inputs must be finite"));
        }
        if self.a == 0.0 {
            return Err(PhysicsError::domain(QUANTITY, input(), "reference radius a is zero"));
        }

        let ratio = r / self.a;
        let integer = x.fract() == 0.0;

        if ratio == 0.0 && x < 0.0 {
            return Err(PhysicsError::domain(QUANTITY, input(), "negative power of zero"));
        }
        if ratio == 0.0 && !integer {
            return Err(PhysicsError::domain(QUANTITY, input(), "fractional power of zero"));
        }
        if ratio < 0.0 && !integer {
            return Err(PhysicsError::domain(
                QUANTITY,
                input(),
                "fractional power of a negative base is complex",
            ));
        }

        let power = if integer && x.abs() <= f64::from(i32::MAX) {
            ratio.powi(x as i32)
        } else {
            ratio.powf(x)
        };
        let value = self.v * power;

        if !value.is_finite() {
            return Err(PhysicsError::non_finite(QUANTITY, input()));
        }
        Ok(value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn zero_exponent_returns_strength() {
        let law = PowerLaw::default();
        for r in [0.0, 0.5, 1.0, 3.0, 5.0] {
            assert_eq!(law.eval(r, 0.0).unwrap(), 2.0);
        }
    }

    #[test]
    fn integer_points() {
        let law = PowerLaw::default();
        assert_eq!(law.eval(2.0, 1.0).unwrap(), 4.0);
        assert_eq!(law.eval(2.0, 3.0).unwrap(), 16.0);
        assert_eq!(law.eval(5.0, 10.0).unwrap(), 2.0 * 9_765_625.0);
    }

    #[test]
    fn reference_radius_scales_the_base() {
        let law = PowerLaw::new(3.0, 2.0);
        assert_eq!(law.eval(4.0, 2.0).unwrap(), 12.0);
        assert_eq!(law.eval(1.0, -1.0).unwrap(), 6.0);
    }

    #[test]
    fn fractional_exponent_uses_powf() {
        let law = PowerLaw::default();
        let value = law.eval(4.0, 0.5).unwrap();
        assert!((value - 4.0).abs() < 1e-12);
    }

    #[test]
    fn zero_radius_negative_exponent_is_domain_error() {
        let err = PowerLaw::default().eval(0.0, -2.0).unwrap_err();
        assert!(matches!(err, PhysicsError::Domain { reason: "negative power of zero", .. }));
    }

    #[test]
    fn zero_radius_fractional_exponent_is_domain_error() {
        let err = PowerLaw::default().eval(0.0, 0.5).unwrap_err();
        assert!(matches!(err, PhysicsError::Domain { .. }));
    }

    #[test]
    fn negative_base_fractional_exponent_is_domain_error() {
        assert!(PowerLaw::default().eval(-2.0, 1.5).is_err());
        assert_eq!(PowerLaw::default().eval(-2.0, 3.0).unwrap(), -16.0);
    }

    #[test]
    fn zero_reference_radius_is_rejected() {
        assert!(PowerLaw::new(2.0, 0.0).eval(1.0, 1.0).is_err());
    }

    #[test]
    fn overflow_is_reported() {
        let err = PowerLaw::default().eval(1e10, 400.0).unwrap_err();
        assert!(matches!(err, PhysicsError::NonFinite { .. }));
    }
}
