//! # Error Handling
//!
//! This module defines the centralized error type for the `buildpack-order`
//! library. It uses the `thiserror` library to describe every failure the
//! analysis pipeline can report.
//!
//! ## Key Components
//!
//! - **`Error`**: The main enum that represents all possible errors that can
//!   occur while loading a descriptor, analyzing its order groups, or
//!   rendering the result.
//!
//! - **`Result<T>`**: A type alias for `std::result::Result<T, Error>`, used
//!   throughout the library to simplify function signatures.
//!
//! None of these errors are recovered locally. The command layer reports them
//! and terminates the run without printing partial output.

use thiserror::Error;

/// Main error type for buildpack-order operations
#[derive(Error, Debug)]
pub enum Error {
    /// The descriptor declares no `[[order]]` groups, so there is nothing to
    /// compare.
    #[error("No order groups found: {context}")]
    NoOrderGroups { context: String },

    /// An error occurred while serializing the structured summary.
    #[error("Serialization error: {message}")]
    Serialization { message: String },

    /// An I/O error, wrapped from `std::io::Error`.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// A TOML syntax error, or a field holding the wrong type, wrapped from
    /// `toml::de::Error`.
    #[error("TOML parsing error: {0}")]
    Toml(#[from] toml::de::Error),
}

/// A convenient type alias for `Result<T, Error>`.
pub type Result<T> = std::result::Result<T, Error>;
