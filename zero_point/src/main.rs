//! Zero-point vs. Thermal Oscillator Energy
//!
//! Prints the detailed calculation at 6000 Å and 300 K, then plots both
//! energies from 100 nm to 10 µm on a logarithmic energy axis.
//!
//! Controls:
//! - Slider: Temperature (re-sweeps the thermal curve)
//! - Escape: Close

use std::error::Error;
use std::process::ExitCode;

use common::{run_figure, AppError};
use zero_point::oscillator::OscillatorSample;
use zero_point::report::detailed_calculation;
use zero_point::view::SpectrumFigure;
use zero_point::SpectrumConfig;

fn run() -> Result<(), AppError> {
    let config = SpectrumConfig::default();

    let sample = OscillatorSample::evaluate(config.highlight_wavelength(), config.temperature)?;
    print!("{}", detailed_calculation(&sample));

    run_figure(
        "Zero-point Energy vs Thermal Energy",
        1200,
        800,
        SpectrumFigure::new(config)?,
    )?;
    Ok(())
}

fn main() -> ExitCode {
    env_logger::init();

    if let Err(e) = run() {
        eprintln!("Error: {}", e);

        let mut source = e.source();
        while let Some(s) = source {
            eprintln!("Caused by: {}", s);
            source = s.source();
        }

        ExitCode::FAILURE
    } else {
        ExitCode::SUCCESS
    }
}
