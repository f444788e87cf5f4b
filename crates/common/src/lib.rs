//! Common constants, types, and utilities used across the stevedore codebase.
//!
//! This crate provides shared functionality for the stevedore toolkit,
//! including the plan data model produced by the discovery phase and
//! general utility functions.

/// Constants used throughout the stevedore codebase.
pub mod constants;

/// The plan data model: the discovery-phase artifact describing an
/// application's deployable components.
pub mod plan;

/// General utility functions and types for common tasks.
pub mod utils;
