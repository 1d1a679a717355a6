//! System-wide constants and defaults.

/// Default environment name queried inside the image.
pub const DEFAULT_ENV_NAME: &str = "notebook";

/// Default path of the pinned-package manifest.
pub const DEFAULT_PINS_FILE: &str = "packages-python-pinned.yaml";

/// Default container runtime binary.
pub const DEFAULT_RUNTIME: &str = "docker";

/// Environment variable that overrides the container runtime binary.
pub const RUNTIME_ENV_VAR: &str = "PINSPECT_RUNTIME";

/// Application name used in CLI output.
pub const APP_NAME: &str = "pinspect";

/// Binary name for the CLI.
pub const BIN_NAME: &str = "pinspect";

/// Exit code when every required package is present.
pub const EXIT_OK: u8 = 0;

/// Exit code when one or more required packages are missing.
pub const EXIT_MISSING: u8 = 1;

/// Exit code when the pins manifest does not exist.
pub const EXIT_PINS_NOT_FOUND: u8 = 2;

/// Exit code when the runtime is absent, fails, or emits unparseable output.
pub const EXIT_TOOL_FAILURE: u8 = 3;

/// Returns the container runtime binary for this run, honoring the
/// `PINSPECT_RUNTIME` override.
#[must_use]
pub fn runtime_binary() -> String {
    std::env::var(RUNTIME_ENV_VAR).unwrap_or_else(|_| DEFAULT_RUNTIME.to_string())
}
