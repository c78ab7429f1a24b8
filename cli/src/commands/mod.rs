//! # gencode Commands
//!
//! File: cli/src/commands/mod.rs
//!
//! ## Overview
//!
//! Command handlers invoked from `main`. gencode has a single action,
//! `generate`, which runs when the binary is called with an optional project
//! directory.
//!
pub mod generate;
