//! # pinspect-pins
//!
//! Parser for pinned-package manifests in the conda `list --export` line
//! format. Produces the normalized required set consumed by the comparator.

#![cfg_attr(test, allow(clippy::expect_used, clippy::unwrap_used))]

pub mod manifest;
