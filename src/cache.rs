use serde::Serialize;
use sha2::{Digest, Sha256};
use std::fs;
use std::path::{Path, PathBuf};
use tracing::debug;

use crate::error::GenerateError;

/// What happened to a generated file on disk.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum WriteOutcome {
    Written,
    /// The file already held identical content and was left alone.
    Unchanged,
}

pub fn compute_hash(source: &str) -> String {
    let mut hasher = Sha256::new();
    hasher.update(source.as_bytes());
    format!("{:x}", hasher.finalize())
}

/// Write `contents` to `path` unless it already holds the same bytes.
///
/// The replacement goes through a sibling temp file and a rename, so readers
/// never observe a partially written artifact.
pub fn write_if_changed(path: &Path, contents: &str) -> Result<WriteOutcome, GenerateError> {
    if let Ok(existing) = fs::read_to_string(path) {
        if compute_hash(&existing) == compute_hash(contents) {
            debug!(path = %path.display(), "generated file unchanged");
            return Ok(WriteOutcome::Unchanged);
        }
    }

    let tmp_path = temp_path_for(path)?;
    fs::write(&tmp_path, contents).map_err(|source| GenerateError::Write {
        path: tmp_path.clone(),
        source,
    })?;
    if let Err(source) = fs::rename(&tmp_path, path) {
        fs::remove_file(&tmp_path).ok();
        return Err(GenerateError::Write {
            path: path.to_path_buf(),
            source,
        });
    }

    Ok(WriteOutcome::Written)
}

fn temp_path_for(path: &Path) -> Result<PathBuf, GenerateError> {
    let file_name = path
        .file_name()
        .ok_or_else(|| GenerateError::InvalidOutput(path.to_path_buf()))?;
    let mut tmp_name = file_name.to_os_string();
    tmp_name.push(".tmp");
    Ok(path.with_file_name(tmp_name))
}
