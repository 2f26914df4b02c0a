//! Core utilities shared by the lighting crates.
//!
//! Currently this is the logging setup used by every binary in the workspace.

mod logging;

pub use logging::{DEFAULT_FILTER, init_logging};
