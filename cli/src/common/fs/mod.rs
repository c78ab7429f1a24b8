//! # gencode Filesystem Utilities (`common::fs`)
//!
//! File: cli/src/common/fs/mod.rs
//!
//! ## Overview
//!
//! Filesystem helpers shared by the scanner and the prompt writer:
//! - **`io`**: directory creation, whole-file reads and writes with error context.
//! - **`walk`**: the recursive project walker and its exclusion rules.
//!
pub mod io;
pub mod walk;
