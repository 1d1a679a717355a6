//! Line-oriented parser for `conda list --export` style manifests.
//!
//! Each non-comment, non-blank line is `name`, `name=version`, or
//! `name=version=build`. Only the name matters here: pins fix versions at
//! build time, while this tool checks presence, not version satisfaction.

use std::collections::BTreeSet;
use std::path::Path;

use pinspect_common::error::{PinspectError, Result};
use pinspect_common::types::PackageName;

/// Reads a pins manifest and returns the set of normalized package names.
///
/// The file is read lossily so a stray non-UTF-8 byte cannot abort a CI run.
///
/// # Errors
///
/// Returns [`PinspectError::PinsNotFound`] if the path does not exist, or
/// [`PinspectError::Io`] if the file exists but cannot be read.
pub fn parse_export_file(path: &Path) -> Result<BTreeSet<PackageName>> {
    if !path.exists() {
        return Err(PinspectError::PinsNotFound {
            path: path.to_path_buf(),
        });
    }

    let bytes = std::fs::read(path).map_err(|e| PinspectError::Io {
        path: path.to_path_buf(),
        source: e,
    })?;
    let text = String::from_utf8_lossy(&bytes);

    let required = parse_export_str(&text);
    tracing::debug!(path = %path.display(), count = required.len(), "parsed pins manifest");
    Ok(required)
}

/// Parses export-format text into a set of normalized package names.
///
/// `#`-prefixed and blank lines are skipped. Each remaining line is split on
/// the first `=` and the left token is taken as the name. Channel-prefixed
/// or URL-style lines are not special-cased; their left-of-`=` token is used
/// as-is.
#[must_use]
pub fn parse_export_str(text: &str) -> BTreeSet<PackageName> {
    let mut required = BTreeSet::new();
    for raw in text.lines() {
        let line = raw.trim();
        if line.is_empty() || line.starts_with('#') {
            continue;
        }
        let name = PackageName::new(line.split('=').next().unwrap_or(""));
        if name.is_empty() {
            continue;
        }
        let _ = required.insert(name);
    }
    required
}

#[cfg(test)]
mod tests {
    use super::*;

    fn names(set: &BTreeSet<PackageName>) -> Vec<&str> {
        set.iter().map(PackageName::as_str).collect()
    }

    #[test]
    fn parses_all_line_forms() {
        let text = "# comment\n\na=1.0=0\nb=2.0\nc\n";
        let required = parse_export_str(text);
        assert_eq!(names(&required), vec!["a", "b", "c"]);
    }

    #[test]
    fn skips_comments_and_blank_lines() {
        let text = "# This file may be used to create an environment\n#\n\n  \nnumpy=2.1.0=py312\n";
        let required = parse_export_str(text);
        assert_eq!(names(&required), vec!["numpy"]);
    }

    #[test]
    fn normalizes_names() {
        let required = parse_export_str("Scikit_Learn=1.5.1=py312\n");
        assert_eq!(names(&required), vec!["scikit-learn"]);
    }

    #[test]
    fn deduplicates_case_variants() {
        let required = parse_export_str("NumPy=2.1.0\nnumpy=2.1.0\n");
        assert_eq!(required.len(), 1);
    }

    #[test]
    fn skips_lines_reducing_to_empty_name() {
        let required = parse_export_str("=1.0\n   =2.0\npandas=2.2\n");
        assert_eq!(names(&required), vec!["pandas"]);
    }

    #[test]
    fn url_style_line_keeps_left_token() {
        // Accepted edge case: channel/URL prefixes are not stripped.
        let required = parse_export_str("https://conda.anaconda.org/conda-forge/linux-64/zlib=1.3=h4ab18f5\n");
        assert_eq!(
            names(&required),
            vec!["https://conda.anaconda.org/conda-forge/linux-64/zlib"]
        );
    }

    #[test]
    fn empty_input_yields_empty_set() {
        assert!(parse_export_str("").is_empty());
    }

    #[test]
    fn missing_file_is_distinct_error() {
        let dir = tempfile::tempdir().expect("tempdir");
        let path = dir.path().join("no-such-pins.yaml");
        let err = parse_export_file(&path).expect_err("should fail");
        assert!(matches!(err, PinspectError::PinsNotFound { .. }));
    }

    #[test]
    fn reads_manifest_from_disk() {
        let dir = tempfile::tempdir().expect("tempdir");
        let path = dir.path().join("pins.yaml");
        std::fs::write(&path, "# pins\npandas=2.2.2=py312\nPyYAML=6.0\n").expect("write pins");

        let required = parse_export_file(&path).expect("parse");
        assert_eq!(names(&required), vec!["pandas", "pyyaml"]);
    }

    #[test]
    fn reads_invalid_utf8_lossily() {
        let dir = tempfile::tempdir().expect("tempdir");
        let path = dir.path().join("pins.yaml");
        std::fs::write(&path, b"numpy=2.1.0\n\xff\xfe\npandas=2.2\n").expect("write pins");

        let required = parse_export_file(&path).expect("parse");
        assert!(required.contains(&PackageName::new("numpy")));
        assert!(required.contains(&PackageName::new("pandas")));
    }
}
