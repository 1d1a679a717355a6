//! Container runtime invocation.
//!
//! The runtime (docker by default, any drop-in such as podman via the
//! `PINSPECT_RUNTIME` environment variable) is the only external process
//! this tool launches. The instance is started with `--rm` so nothing
//! persists on the host, and the call blocks until the container exits; no
//! timeout is imposed beyond what the runtime itself enforces.

use std::path::{Path, PathBuf};
use std::process::Command;

use pinspect_common::error::{PinspectError, Result};
use pinspect_common::types::ImageRef;

/// Output captured from a container invocation.
#[derive(Debug, Clone)]
pub struct RunOutput {
    /// Standard output from the command.
    pub stdout: String,
    /// Standard error from the command.
    pub stderr: String,
    /// Exit code returned by the command.
    pub exit_code: i32,
}

impl RunOutput {
    /// Returns stdout and stderr concatenated for diagnostic display.
    #[must_use]
    pub fn transcript(&self) -> String {
        let mut transcript = self.stdout.clone();
        if !self.stderr.is_empty() {
            if !transcript.is_empty() && !transcript.ends_with('\n') {
                transcript.push('\n');
            }
            transcript.push_str(&self.stderr);
        }
        transcript
    }
}

/// Resolves the configured runtime binary on `PATH`.
///
/// # Errors
///
/// Returns [`PinspectError::RuntimeNotFound`] if the binary cannot be found.
pub fn resolve_runtime() -> Result<PathBuf> {
    let binary = pinspect_common::constants::runtime_binary();
    which::which(&binary).map_err(|_| PinspectError::RuntimeNotFound { binary })
}

/// Runs `command` inside a disposable instance of `image` using the
/// configured runtime. The instance is removed by the runtime on exit.
///
/// # Errors
///
/// Returns an error if the runtime binary is absent or cannot be spawned.
/// A non-zero exit from the container is reported in [`RunOutput`], not as
/// an error; the caller decides whether that is fatal.
pub fn run_in_image(image: &ImageRef, command: &[&str]) -> Result<RunOutput> {
    let runtime = resolve_runtime()?;
    run_with_runtime(&runtime, image, command)
}

/// Runs `command` inside a disposable instance of `image` using an explicit
/// runtime binary.
///
/// # Errors
///
/// Returns [`PinspectError::Io`] if the runtime cannot be spawned.
pub fn run_with_runtime(runtime: &Path, image: &ImageRef, command: &[&str]) -> Result<RunOutput> {
    tracing::info!(runtime = %runtime.display(), image = %image, cmd = ?command, "launching disposable container");

    let output = Command::new(runtime)
        .args(["run", "--rm", image.as_str()])
        .args(command)
        .output()
        .map_err(|e| PinspectError::Io {
            path: runtime.to_path_buf(),
            source: e,
        })?;

    Ok(RunOutput {
        stdout: String::from_utf8_lossy(&output.stdout).to_string(),
        stderr: String::from_utf8_lossy(&output.stderr).to_string(),
        exit_code: output.status.code().unwrap_or(-1),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn transcript_concatenates_streams() {
        let output = RunOutput {
            stdout: "[]".into(),
            stderr: "WARNING: something".into(),
            exit_code: 0,
        };
        assert_eq!(output.transcript(), "[]\nWARNING: something");
    }

    #[test]
    fn transcript_omits_empty_stderr() {
        let output = RunOutput {
            stdout: "[]\n".into(),
            stderr: String::new(),
            exit_code: 0,
        };
        assert_eq!(output.transcript(), "[]\n");
    }

    #[test]
    fn transcript_with_empty_stdout_is_stderr() {
        let output = RunOutput {
            stdout: String::new(),
            stderr: "docker: image not found\n".into(),
            exit_code: 125,
        };
        assert_eq!(output.transcript(), "docker: image not found\n");
    }
}
