//! Power-law Potential
//!
//! Prints V(r, x) = v·(r/a)^x for r = 1..5 and x = 0..10, then plots the
//! potential against the exponent (one curve per radius) and against the
//! radius (one curve per exponent).
//!
//! Controls:
//! - Checkbox: Toggle logarithmic V axis
//! - Escape: Close

use std::error::Error;
use std::process::ExitCode;

use common::{run_figure, AppError};
use power_potential::report::sweep_report;
use power_potential::sweep::PotentialSweep;
use power_potential::view::PotentialFigure;
use power_potential::PotentialConfig;

fn run() -> Result<(), AppError> {
    let config = PotentialConfig::default();
    let sweep = PotentialSweep::run(&config)?;

    print!("{}", sweep_report(&sweep.table));

    run_figure(
        "Power-law Potential V(r, x)",
        1600,
        700,
        PotentialFigure::new(sweep),
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
