//! Configuration loading and command-line front end for `cadenza-core`.

pub mod cli;
pub mod config;
pub mod machine;

/// Logical axes handled by the binary: X, Y, Z, A, B, C.
pub const AXES: usize = 6;

/// Motor channels handled by the binary.
pub const MOTORS: usize = 4;
