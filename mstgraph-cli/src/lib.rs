//! Support library for the `mstgraph` binary.
//!
//! Exposes the command pipeline and logging setup so tests can drive them
//! without spawning a subprocess.

pub mod cli;
pub mod logging;
