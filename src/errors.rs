/*!
 * Error types for the episode-translator application.
 *
 * Library functions propagate `anyhow::Error`, but the failures that callers may
 * want to inspect are raised as `AppError` values so they can be recovered with
 * `downcast_ref::<AppError>()`.
 */

use std::path::PathBuf;
use thiserror::Error;

/// Main application error type
#[derive(Error, Debug)]
pub enum AppError {
    /// The source directory is missing or cannot be listed
    #[error("Cannot access directory {path:?}: {source}")]
    DirectoryAccess {
        /// Directory that failed
        path: PathBuf,
        /// Underlying I/O error
        #[source]
        source: std::io::Error,
    },

    /// A chapter file could not be read (missing, permissions, invalid UTF-8)
    #[error("Failed to read file {path:?}: {source}")]
    ReadFile {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// A translated chapter could not be written
    #[error("Failed to write file {path:?}: {source}")]
    WriteFile {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// A user glossary file is malformed
    #[error("Glossary error: {0}")]
    Glossary(String),

    /// Invalid configuration values
    #[error("Configuration error: {0}")]
    Config(String),
}
