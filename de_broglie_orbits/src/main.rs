//! Bohr Orbits and de Broglie Waves
//!
//! Prints the stability analysis for an electron on the n = 1 orbit moving
//! 1.8× and 0.6× the Bohr speed, then draws both atoms, a speed explorer,
//! and a bar chart of how many wavelengths fit the orbit.
//!
//! Controls:
//! - Slider: Explorer speed factor (standing waves are flagged)
//! - Escape: Close

use std::error::Error;
use std::process::ExitCode;

use common::{run_figure, AppError};
use de_broglie_orbits::cases::unstable_cases;
use de_broglie_orbits::report::stability_report;
use de_broglie_orbits::view::OrbitFigure;
use de_broglie_orbits::OrbitConfig;

fn run() -> Result<(), AppError> {
    let config = OrbitConfig::default();

    println!("Simulating unstable orbital conditions...");
    let cases = unstable_cases(&config)?;
    print!("{}", stability_report(&cases));

    let figure = OrbitFigure::new(config, &cases)?;
    run_figure("Bohr Orbits - de Broglie Waves", 1400, 1000, figure)?;
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
