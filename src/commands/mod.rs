//! # CLI Command Implementations
//!
//! Each command is defined in its own file. A command module typically
//! contains:
//! - An `Args` struct that defines the command-specific arguments and options,
//!   derived using `clap`.
//! - An `execute` function that takes the parsed `Args` and calls into the
//!   `buildpack_order` library to do the work.

pub mod analyze;
pub mod completions;
