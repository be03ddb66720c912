//! The detailed 6000 Å calculation printed before the chart opens

use std::fmt::Write;

use crate::oscillator::OscillatorSample;

const RULE: &str = "============================================================";

pub fn detailed_calculation(sample: &OscillatorSample) -> String {
    let angstrom = sample.wavelength * 1e10;
    let mut out = String::new();
    let _ = writeln!(out, "{RULE}");
    let _ = writeln!(out, "DETAILED CALCULATION FOR {angstrom:.0} Å");
    let _ = writeln!(out, "{RULE}");
    let _ = writeln!(out, "Wavelength: {angstrom:.1} Å");
    let _ = writeln!(out, "Angular frequency (ω): {:.3e} rad/s", sample.angular_frequency);
    let _ = writeln!(out, "Zero-point energy (E₀): {:.4} eV", sample.zero_point_ev());
    let _ = writeln!(out, "ħω: {:.4} eV", sample.quantum_ev());
    let _ = writeln!(out, "kT ({:.0}K): {:.6} eV", sample.temperature, sample.thermal_scale_ev());
    let _ = writeln!(out, "Exponent (ħω/kT): {:.1}", sample.exponent);
    let _ = writeln!(out, "Thermal energy: {:.3e} eV", sample.thermal_ev());
    let _ = writeln!(out, "Ratio E_thermal/E₀: {:.3e}", sample.ratio());
    let _ = writeln!(out, "{RULE}");
    out
}

/// Text of the chart's info box
pub fn highlight_summary(sample: &OscillatorSample) -> String {
    let angstrom = sample.wavelength * 1e10;
    format!(
        "For {:.0} Å ({:.0} nm):\nE₀ = {:.3} eV\nE_thermal = {:.3e} eV\nRatio = {:.3e}",
        angstrom,
        angstrom / 10.0,
        sample.zero_point_ev(),
        sample.thermal_ev(),
        sample.ratio()
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    fn green() -> OscillatorSample {
        OscillatorSample::evaluate(6000e-10, 300.0).unwrap()
    }

    #[test]
    fn detailed_block_layout() {
        let report = detailed_calculation(&green());
        let lines: Vec<&str> = report.lines().collect();
        assert_eq!(lines.len(), 12);
        assert_eq!(lines[0], RULE);
        assert_eq!(lines[1], "DETAILED CALCULATION FOR 6000 Å");
        assert_eq!(lines[3], "Wavelength: 6000.0 Å");
        assert_eq!(lines[4], "Angular frequency (ω): 3.139e15 rad/s");
        assert_eq!(lines[5], "Zero-point energy (E₀): 1.0333 eV");
        assert_eq!(lines[6], "ħω: 2.0667 eV");
        assert_eq!(lines[7], "kT (300K): 0.025861 eV");
        assert_eq!(lines[8], "Exponent (ħω/kT): 79.9");
        assert_eq!(lines[9], "Thermal energy: 4.069e-35 eV");
        assert_eq!(lines[10], "Ratio E_thermal/E₀: 3.938e-35");
        assert_eq!(lines[11], RULE);
    }

    #[test]
    fn guarded_sample_reports_zero_ratio() {
        let cold = OscillatorSample::evaluate(6000e-10, 50.0).unwrap();
        assert_eq!(cold.thermal, 0.0);
        let report = detailed_calculation(&cold);
        assert!(report.contains("Thermal energy: 0.000e0 eV"));
        assert!(report.contains("Ratio E_thermal/E₀: 0.000e0"));
    }

    #[test]
    fn summary_matches_info_box_layout() {
        assert_eq!(
            highlight_summary(&green()),
            "For 6000 Å (600 nm):\nE₀ = 1.033 eV\nE_thermal = 4.069e-35 eV\nRatio = 3.938e-35"
        );
    }
}
