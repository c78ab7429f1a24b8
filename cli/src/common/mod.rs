//! # gencode Common Utilities
//!
//! File: cli/src/common/mod.rs
//!
//! ## Overview
//!
//! Shared, domain-agnostic helpers. Currently only filesystem utilities
//! (`common::fs`) live here; the detectors in `crate::detect` and the command
//! in `crate::commands` build on them.
//!
pub mod fs;
