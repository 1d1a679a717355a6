//! Comparison and report rendering.
//!
//! Output goes to stdout as plain text with a stable alphabetical order so
//! CI logs stay diffable across runs.

use std::collections::{BTreeMap, BTreeSet};
use std::fmt::Write as _;
use std::path::{Path, PathBuf};

use pinspect_common::constants;
use pinspect_common::error::PinspectError;
use pinspect_common::types::{ImageRef, PackageName};

/// Result of comparing the required set against the installed map.
#[derive(Debug)]
pub struct CheckOutcome {
    /// Image that was inspected.
    pub image: ImageRef,
    /// Environment name that was queried.
    pub env: String,
    /// Pins manifest the required set came from.
    pub pins: PathBuf,
    /// Number of required packages after ignore filtering.
    pub required_count: usize,
    /// Number of packages installed in the image environment.
    pub installed_count: usize,
    /// Required packages absent from the image, alphabetically sorted.
    pub missing: Vec<PackageName>,
}

/// Computes `required − ignore − installed` and packages the result for
/// reporting. BTree collections keep the missing list alphabetical without
/// an explicit sort.
#[must_use]
pub fn compare(
    image: ImageRef,
    env: &str,
    pins: &Path,
    required: &BTreeSet<PackageName>,
    ignore: &BTreeSet<PackageName>,
    installed: &BTreeMap<PackageName, String>,
) -> CheckOutcome {
    let required: BTreeSet<PackageName> = required.difference(ignore).cloned().collect();
    let missing: Vec<PackageName> = required
        .iter()
        .filter(|name| !installed.contains_key(*name))
        .cloned()
        .collect();

    tracing::debug!(
        required = required.len(),
        installed = installed.len(),
        missing = missing.len(),
        "compared required set against installed map"
    );

    CheckOutcome {
        image,
        env: env.to_string(),
        pins: pins.to_path_buf(),
        required_count: required.len(),
        installed_count: installed.len(),
        missing,
    }
}

impl CheckOutcome {
    /// Returns `true` when no required package is missing.
    #[must_use]
    pub fn is_ok(&self) -> bool {
        self.missing.is_empty()
    }

    /// Exit code for this outcome.
    #[must_use]
    pub fn exit_code(&self) -> u8 {
        if self.is_ok() {
            constants::EXIT_OK
        } else {
            constants::EXIT_MISSING
        }
    }

    /// Renders the human-readable report.
    #[must_use]
    pub fn render(&self) -> String {
        let mut out = String::new();
        let _ = writeln!(out, "Image: {}", self.image);
        let _ = writeln!(out, "Env: {}", self.env);
        let _ = writeln!(out, "Pins file: {}", self.pins.display());
        let _ = writeln!(out, "Required packages (from pins): {}", self.required_count);
        let _ = writeln!(out, "Installed packages (from image): {}", self.installed_count);
        let _ = writeln!(out);

        if self.is_ok() {
            let _ = writeln!(
                out,
                "OK: all packages in {} are present in the image.",
                self.pins.display()
            );
        } else {
            let _ = writeln!(out, "MISSING packages (present in pins file, absent in image):");
            for name in &self.missing {
                let _ = writeln!(out, "  - {name}");
            }
            let _ = writeln!(out);
        }
        out
    }
}

/// Maps a pipeline error to its exit code: 2 for a missing pins file, 3 for
/// everything in the external-tool class.
#[must_use]
pub fn exit_code_for(err: &PinspectError) -> u8 {
    match err {
        PinspectError::PinsNotFound { .. } => constants::EXIT_PINS_NOT_FOUND,
        _ => constants::EXIT_TOOL_FAILURE,
    }
}

/// Prints a pipeline failure to stderr, including the captured runtime
/// transcript when one exists.
#[allow(clippy::print_stderr)]
pub fn print_failure(err: &PinspectError) {
    eprintln!("ERROR: {err}");
    if let Some(transcript) = err.transcript() {
        eprintln!("{transcript}");
    }
}
