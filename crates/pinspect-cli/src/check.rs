//! CLI definition and the check pipeline.

use std::collections::BTreeSet;
use std::path::PathBuf;

use clap::Parser;

use pinspect_common::constants;
use pinspect_common::error::Result;
use pinspect_common::types::{ImageRef, PackageName};

use crate::report::{self, CheckOutcome};

/// pinspect — verify that a container image contains every pinned package.
#[derive(Parser, Debug)]
#[command(name = constants::BIN_NAME, version, about, long_about = None)]
pub struct Cli {
    /// Container image to inspect.
    #[arg(long)]
    pub image: String,

    /// Environment name to query inside the image.
    #[arg(long, default_value = constants::DEFAULT_ENV_NAME)]
    pub env: String,

    /// Path to the pinned-package manifest.
    #[arg(long, default_value = constants::DEFAULT_PINS_FILE)]
    pub pins: PathBuf,

    /// Package names to exclude from the required set.
    #[arg(long, num_args = 0..)]
    pub ignore: Vec<String>,
}

/// Runs the check pipeline: parse pins, inspect the image, compare.
///
/// The pins manifest is parsed first so a missing file never launches a
/// container.
///
/// # Errors
///
/// Propagates pins-file and container-runtime failures; a non-empty missing
/// list is a normal outcome, not an error.
pub fn execute(cli: &Cli) -> Result<CheckOutcome> {
    let required = pinspect_pins::manifest::parse_export_file(&cli.pins)?;
    let ignore: BTreeSet<PackageName> = cli.ignore.iter().map(PackageName::new).collect();

    let image = ImageRef::new(&cli.image);
    let installed = pinspect_image::listing::list_packages(&image, &cli.env)?;

    Ok(report::compare(
        image,
        &cli.env,
        &cli.pins,
        &required,
        &ignore,
        &installed,
    ))
}
