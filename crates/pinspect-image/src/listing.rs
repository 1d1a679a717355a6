//! Installed-package listing for a named environment inside an image.
//!
//! Runs `conda list -n <env> --json` in a disposable container and parses
//! the JSON array it emits into a normalized name→version map.

use std::collections::BTreeMap;
use std::path::Path;

use serde::Deserialize;

use pinspect_common::error::{PinspectError, Result};
use pinspect_common::types::{ImageRef, PackageName};

use crate::runtime::{self, RunOutput};

/// One record from the package manager's JSON listing. Fields beyond name
/// and version (channel, build string, platform) are ignored.
#[derive(Debug, Deserialize)]
struct ListingRecord {
    #[serde(default)]
    name: Option<String>,
    #[serde(default)]
    version: Option<String>,
}

/// Lists the packages installed in environment `env` of `image`.
///
/// # Errors
///
/// Returns [`PinspectError::RuntimeFailed`] if the container exits non-zero
/// and [`PinspectError::Listing`] if its output is not a valid listing;
/// both carry the captured transcript. Resolution and spawn failures
/// propagate from [`runtime::run_in_image`]. No partial map is returned on
/// failure.
pub fn list_packages(image: &ImageRef, env: &str) -> Result<BTreeMap<PackageName, String>> {
    let runtime = runtime::resolve_runtime()?;
    list_packages_with(&runtime, image, env)
}

/// Lists packages as [`list_packages`] does, using an explicit runtime
/// binary instead of resolving one from `PATH`.
///
/// # Errors
///
/// Same failure modes as [`list_packages`].
pub fn list_packages_with(
    runtime: &Path,
    image: &ImageRef,
    env: &str,
) -> Result<BTreeMap<PackageName, String>> {
    let output =
        runtime::run_with_runtime(runtime, image, &["conda", "list", "-n", env, "--json"])?;

    if output.exit_code != 0 {
        return Err(PinspectError::RuntimeFailed {
            exit_code: output.exit_code,
            transcript: output.transcript(),
        });
    }

    let installed = parse_listing(&output)?;
    tracing::info!(image = %image, env, count = installed.len(), "listed installed packages");
    Ok(installed)
}

/// Parses the JSON array on stdout into a normalized name→version map.
///
/// Records without a name are skipped; a missing version becomes `""`.
fn parse_listing(output: &RunOutput) -> Result<BTreeMap<PackageName, String>> {
    let records: Vec<ListingRecord> =
        serde_json::from_str(&output.stdout).map_err(|e| PinspectError::Listing {
            source: e,
            transcript: output.transcript(),
        })?;

    let mut installed = BTreeMap::new();
    for record in records {
        let Some(name) = record.name else { continue };
        let name = PackageName::new(&name);
        if name.is_empty() {
            continue;
        }
        let _ = installed.insert(name, record.version.unwrap_or_default());
    }
    Ok(installed)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn output(stdout: &str) -> RunOutput {
        RunOutput {
            stdout: stdout.into(),
            stderr: String::new(),
            exit_code: 0,
        }
    }

    #[test]
    fn parses_name_version_records() {
        let installed = parse_listing(&output(
            r#"[{"name":"numpy","version":"2.1.0","channel":"conda-forge"},
                {"name":"pandas","version":"2.2.2"}]"#,
        ))
        .expect("parse");
        assert_eq!(
            installed.get(&PackageName::new("numpy")).map(String::as_str),
            Some("2.1.0")
        );
        assert_eq!(
            installed.get(&PackageName::new("pandas")).map(String::as_str),
            Some("2.2.2")
        );
    }

    #[test]
    fn normalizes_record_names() {
        let installed =
            parse_listing(&output(r#"[{"name":"Scikit_Learn","version":"1.5.1"}]"#)).expect("parse");
        assert!(installed.contains_key(&PackageName::new("scikit-learn")));
    }

    #[test]
    fn missing_version_defaults_to_empty() {
        let installed = parse_listing(&output(r#"[{"name":"zlib"}]"#)).expect("parse");
        assert_eq!(
            installed.get(&PackageName::new("zlib")).map(String::as_str),
            Some("")
        );
    }

    #[test]
    fn records_without_name_are_skipped() {
        let installed =
            parse_listing(&output(r#"[{"version":"1.0"},{"name":"numpy","version":"2.1.0"}]"#))
                .expect("parse");
        assert_eq!(installed.len(), 1);
    }

    #[test]
    fn empty_array_yields_empty_map() {
        assert!(parse_listing(&output("[]")).expect("parse").is_empty());
    }

    #[test]
    fn malformed_json_is_listing_error_with_transcript() {
        let out = RunOutput {
            stdout: "CondaEnvironmentError: no such environment\n".into(),
            stderr: String::new(),
            exit_code: 0,
        };
        let err = parse_listing(&out).expect_err("should fail");
        assert!(matches!(err, PinspectError::Listing { .. }));
        assert!(
            err.transcript()
                .expect("listing errors carry a transcript")
                .contains("CondaEnvironmentError")
        );
    }
}
