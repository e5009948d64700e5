//! Error types for mapping generation and runtime loading.

use std::io;
use std::path::PathBuf;
use thiserror::Error;

/// Failures while scanning component directories or writing the artifact.
///
/// A missing scan directory is not an error; everything here aborts setup.
#[derive(Debug, Error)]
pub enum GenerateError {
    /// A scan directory exists but could not be walked.
    #[error("failed to scan '{}': {source}", .path.display())]
    Scan {
        path: PathBuf,
        #[source]
        source: walkdir::Error,
    },

    /// A scan directory entry points at something other than a directory.
    #[error("scan path '{}' is not a directory", .0.display())]
    NotADirectory(PathBuf),

    /// The artifact's parent directory could not be created.
    #[error("failed to create output directory '{}': {source}", .path.display())]
    CreateDir {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// Writing (or replacing) a generated file failed.
    #[error("failed to write '{}': {source}", .path.display())]
    Write {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// The JSON manifest could not be serialized.
    #[error("failed to serialize components manifest: {0}")]
    Manifest(#[from] serde_json::Error),

    /// The configured output path has no file name or parent directory, or
    /// the manifest would be written over it.
    #[error("invalid output file '{}'", .0.display())]
    InvalidOutput(PathBuf),
}

/// Failures around the runtime components mapping.
#[derive(Debug, Error)]
pub enum RuntimeError {
    #[error("failed to read components manifest '{}': {source}", .path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("invalid components manifest: {0}")]
    Parse(#[from] serde_json::Error),

    /// The process-wide mapping is write-once.
    #[error("components mapping is already installed")]
    AlreadyInstalled,

    /// Only produced by the strict factory; the default factory returns an
    /// entry without a component instead.
    #[error("no component registered under key '{0}'")]
    UnknownKey(String),
}
