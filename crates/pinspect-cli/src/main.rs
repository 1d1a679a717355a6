//! # pinspect — pinned-package CI gate
//!
//! Verifies that a container image contains every package listed in a
//! pinned-dependency manifest. Single linear pipeline: parse pins, list
//! installed packages from the image, report the difference.

mod check;
mod report;

use std::process::ExitCode;

use clap::Parser;

use crate::check::Cli;

#[allow(clippy::print_stdout)]
fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
        )
        .init();

    let cli = Cli::parse();
    match check::execute(&cli) {
        Ok(outcome) => {
            print!("{}", outcome.render());
            ExitCode::from(outcome.exit_code())
        }
        Err(err) => {
            report::print_failure(&err);
            ExitCode::from(report::exit_code_for(&err))
        }
    }
}
