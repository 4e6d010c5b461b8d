//! Shared utilities for the feedback service workspace.
//!
//! - [`config`]: explicit, environment-driven application configuration.

pub mod config;
