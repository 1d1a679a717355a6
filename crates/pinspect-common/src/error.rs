//! Unified error types for the pinspect workspace.
//!
//! The CLI maps each variant to a distinct exit code, so the taxonomy here
//! mirrors the exit-code contract: configuration problems (missing pins
//! file) are separated from external-tool failures (the container runtime).

use std::path::PathBuf;

use thiserror::Error;

/// Top-level error type shared across the workspace.
#[derive(Debug, Error)]
pub enum PinspectError {
    /// The pins manifest does not exist at the given path.
    #[error("pins file not found: {path}")]
    PinsNotFound {
        /// Path that was checked.
        path: PathBuf,
    },

    /// An I/O operation failed.
    #[error("I/O error at {path}: {source}")]
    Io {
        /// Path where the I/O error occurred.
        path: PathBuf,
        /// Underlying I/O error.
        source: std::io::Error,
    },

    /// The container runtime binary could not be located on `PATH`.
    #[error("container runtime not found: {binary} (install it or set PINSPECT_RUNTIME)")]
    RuntimeNotFound {
        /// Binary name that was searched for.
        binary: String,
    },

    /// The container runtime invocation exited with a non-zero status.
    #[error("container runtime exited with status {exit_code}")]
    RuntimeFailed {
        /// Exit code reported by the runtime (-1 if killed by a signal).
        exit_code: i32,
        /// Combined stdout/stderr captured from the invocation.
        transcript: String,
    },

    /// The package listing emitted by the image could not be parsed.
    #[error("unparseable package listing: {source}")]
    Listing {
        /// Underlying JSON error.
        source: serde_json::Error,
        /// Combined stdout/stderr captured from the invocation.
        transcript: String,
    },
}

impl PinspectError {
    /// Returns the captured invocation transcript, if this error carries one.
    #[must_use]
    pub fn transcript(&self) -> Option<&str> {
        match self {
            Self::RuntimeFailed { transcript, .. } | Self::Listing { transcript, .. } => {
                Some(transcript)
            }
            _ => None,
        }
    }
}

/// Convenience alias used throughout the workspace.
pub type Result<T> = std::result::Result<T, PinspectError>;
