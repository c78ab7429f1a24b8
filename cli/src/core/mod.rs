//! # gencode Core Infrastructure
//!
//! File: cli/src/core/mod.rs
//!
//! ## Overview
//!
//! This module aggregates the core infrastructure components that the scanner
//! and prompt assembler build on:
//! - `config`: Configuration loading, merging, and validation
//! - `error`: Error types and error handling utilities
//! - `templating`: Tera rendering for the prompt template
//!
//! ## Usage
//!
//! ```rust
//! use crate::core::config; // For loading configuration
//! use crate::core::error::{GencodeError, Result}; // For error handling
//! use crate::core::templating; // For prompt rendering
//! ```
//!
pub mod config;
pub mod error;
pub mod templating;
