//! Library surface of the theme generator CLI.
//!
//! The binary lives in `main.rs`; logging setup and the generation pipeline
//! are exposed here so integration tests can drive them directly.

pub mod logging;
pub mod pipeline;
