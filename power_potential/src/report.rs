//! Text output of the potential table

use std::fmt::Write;

use crate::sweep::PotentialSample;

/// `V(r=<r>, x=<x>) = <value>` with two decimals
pub fn format_sample(sample: &PotentialSample) -> String {
    format!(
        "V(r={}, x={}) = {:.2}",
        sample.radius, sample.exponent, sample.value
    )
}

/// One line per sample, in table order
pub fn sweep_report(samples: &[PotentialSample]) -> String {
    samples.iter().fold(String::new(), |mut out, sample| {
        let _ = writeln!(out, "{}", format_sample(sample));
        out
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn integer_inputs_print_without_decimals() {
        let sample = PotentialSample {
            radius: 3.0,
            exponent: 4.0,
            value: 162.0,
        };
        assert_eq!(format_sample(&sample), "V(r=3, x=4) = 162.00");
    }

    #[test]
    fn report_has_one_line_per_sample() {
        let samples = [
            PotentialSample { radius: 1.0, exponent: 0.0, value: 2.0 },
            PotentialSample { radius: 1.0, exponent: 1.0, value: 2.0 },
        ];
        assert_eq!(sweep_report(&samples), "V(r=1, x=0) = 2.00\nV(r=1, x=1) = 2.00\n");
        assert_eq!(sweep_report(&[]), "");
    }
}
