//! Nodelens Core
//!
//! Shared utilities for the nodelens inspector crates.

pub mod alloc;
pub mod logging;
#[cfg(feature = "profiling")]
pub mod profiling;
