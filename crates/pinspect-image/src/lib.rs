//! # pinspect-image
//!
//! Image inspection: launches a disposable container from a given image,
//! asks the package manager inside it for a machine-readable listing of a
//! named environment, and parses the result into a name→version map.

#![cfg_attr(test, allow(clippy::expect_used, clippy::unwrap_used))]

pub mod listing;
pub mod runtime;
