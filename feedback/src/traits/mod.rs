//! Traits at the boundaries of the feedback pipeline.
//!
//! - [`generator`]: the external text-generation capability.

pub mod generator;
