//! Error types for the edition publisher binary.
//!
//! [`EngineError`] wraps every failure mode between reading the inputs and
//! writing the published edition.

use std::path::PathBuf;

/// Top-level error for the edition publisher binary.
#[derive(Debug, thiserror::Error)]
pub enum EngineError {
    /// Configuration loading failed.
    #[error("config error: {source}")]
    Config {
        /// The underlying config error.
        #[from]
        source: frontpage_core::config::ConfigError,
    },

    /// The edition input file could not be read.
    #[error("failed to read {}: {source}", path.display())]
    Read {
        /// Path of the input file.
        path: PathBuf,
        /// The underlying I/O error.
        source: std::io::Error,
    },

    /// The edition input file is not valid edition JSON.
    #[error("failed to parse {}: {source}", path.display())]
    Input {
        /// Path of the input file.
        path: PathBuf,
        /// The underlying JSON error.
        source: serde_json::Error,
    },

    /// Publishing the edition failed.
    #[error("publish error: {source}")]
    Publish {
        /// The underlying publish error.
        #[from]
        source: frontpage_core::publish::PublishError,
    },

    /// The result could not be serialized.
    #[error("failed to write output: {source}")]
    Output {
        /// The underlying JSON error.
        source: serde_json::Error,
    },
}
