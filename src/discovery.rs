//! Discovery Module
//!
//! Recursively scans component directories and builds one `ComponentRecord`
//! per component file. Nothing here parses component sources; a file's path
//! and the presence of its sibling props declaration are all that matter.

use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::path::{Component, Path, PathBuf};
use tracing::{debug, warn};
use walkdir::WalkDir;

use crate::error::GenerateError;
use crate::naming::{derive_key, is_valid_identifier};
use crate::options::ModuleOptions;

// ═══════════════════════════════════════════════════════════════════════════════
// METADATA TYPES
// ═══════════════════════════════════════════════════════════════════════════════

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ComponentRecord {
    pub key: String,
    pub display_name: String,
    pub source_path: String,
    /// Specifier of the component module, relative to the artifact's directory.
    pub import_path: String,
    pub has_props: bool,
    /// Specifier of the props declaration; only imported when `has_props`.
    pub props_import_path: String,
}

impl ComponentRecord {
    /// Name of the type exported by the props declaration.
    pub fn props_type_name(&self) -> String {
        format!("{}Props", self.display_name)
    }
}

// ═══════════════════════════════════════════════════════════════════════════════
// FILE SCANNING
// ═══════════════════════════════════════════════════════════════════════════════

/// Find every component file under `target_dirs`, each joined onto `root_dir`.
///
/// Directories are concatenated in the order given. Missing directories are
/// skipped; unreadable ones and regular files fail the scan.
pub fn find_component_files(
    root_dir: &Path,
    target_dirs: &[String],
    extension: &str,
) -> Result<Vec<PathBuf>, GenerateError> {
    let mut files = Vec::new();

    for dir in target_dirs {
        let full_path = root_dir.join(dir);
        if !full_path.exists() {
            debug!(dir = %full_path.display(), "scan directory missing, skipping");
            continue;
        }
        if !full_path.is_dir() {
            return Err(GenerateError::NotADirectory(full_path));
        }
        files.extend(walk_component_files(&full_path, extension)?);
    }

    Ok(files)
}

/// Depth-first walk of one directory, entries sorted by file name.
fn walk_component_files(dir: &Path, extension: &str) -> Result<Vec<PathBuf>, GenerateError> {
    let mut files = Vec::new();

    for entry in WalkDir::new(dir).sort_by_file_name() {
        let entry = entry.map_err(|source| GenerateError::Scan {
            path: source.path().unwrap_or(dir).to_path_buf(),
            source,
        })?;

        // Symlinks are neither followed nor kept.
        if !entry.file_type().is_file() {
            continue;
        }
        if entry.path().extension().is_some_and(|ext| ext == extension) {
            files.push(entry.into_path());
        }
    }

    Ok(files)
}

// ═══════════════════════════════════════════════════════════════════════════════
// METADATA BUILDING
// ═══════════════════════════════════════════════════════════════════════════════

/// Build component records for `files`, with import paths relative to
/// `output_dir` (the directory the artifact is written to).
pub fn build_component_records(
    files: &[PathBuf],
    output_dir: &Path,
    options: &ModuleOptions,
) -> Vec<ComponentRecord> {
    let mut seen: HashMap<String, String> = HashMap::new();
    let mut records = Vec::with_capacity(files.len());

    for file_path in files {
        let record = build_record(file_path, output_dir, options);

        if !is_valid_identifier(&record.display_name) {
            warn!(
                component = %record.display_name,
                path = %record.source_path,
                "component name is not a valid identifier; the generated mapping will not compile"
            );
        }
        if let Some(previous) = seen.insert(record.key.clone(), record.source_path.clone()) {
            warn!(
                key = %record.key,
                previous = %previous,
                current = %record.source_path,
                "duplicate component key, the later component wins"
            );
        }

        debug!(key = %record.key, props = record.has_props, "discovered component");
        records.push(record);
    }

    records
}

fn build_record(file_path: &Path, output_dir: &Path, options: &ModuleOptions) -> ComponentRecord {
    let display_name = file_path
        .file_stem()
        .map(|s| s.to_string_lossy().into_owned())
        .unwrap_or_default();
    let key = derive_key(&display_name, &options.key_suffix);

    let import_path = import_specifier(output_dir, file_path);

    let props_path = file_path.with_extension(&options.props_extension);
    let component_suffix = format!(".{}", options.component_extension);
    let props_import_path = format!(
        "{}.{}",
        import_path
            .strip_suffix(&component_suffix)
            .unwrap_or(&import_path),
        options.props_module_suffix()
    );

    ComponentRecord {
        key,
        display_name,
        source_path: file_path.to_string_lossy().into_owned(),
        import_path,
        has_props: props_path.exists(),
        props_import_path,
    }
}

/// Relative module specifier from `from_dir` to `target`, `/`-separated.
///
/// Specifiers that stay inside `from_dir` get a `./` prefix so they are never
/// read as package names.
pub fn import_specifier(from_dir: &Path, target: &Path) -> String {
    let relative = relative_path(from_dir, target);
    let parts: Vec<String> = relative
        .components()
        .map(|c| c.as_os_str().to_string_lossy().into_owned())
        .collect();
    let joined = parts.join("/").replace('\\', "/");

    if joined.starts_with("../") {
        joined
    } else {
        format!("./{}", joined)
    }
}

fn relative_path(from_dir: &Path, target: &Path) -> PathBuf {
    let from = normalize(from_dir);
    let to = normalize(target);

    let from_parts: Vec<Component> = from.components().collect();
    let to_parts: Vec<Component> = to.components().collect();
    let common = from_parts
        .iter()
        .zip(&to_parts)
        .take_while(|(a, b)| a == b)
        .count();

    let mut relative = PathBuf::new();
    for _ in common..from_parts.len() {
        relative.push("..");
    }
    for part in &to_parts[common..] {
        relative.push(part.as_os_str());
    }
    relative
}

/// Absolute, lexically normalized form of `path` (`.` and `..` resolved).
fn normalize(path: &Path) -> PathBuf {
    let absolute = std::path::absolute(path).unwrap_or_else(|_| path.to_path_buf());
    let mut normalized = PathBuf::new();
    for component in absolute.components() {
        match component {
            Component::CurDir => {}
            Component::ParentDir => {
                normalized.pop();
            }
            other => normalized.push(other.as_os_str()),
        }
    }
    normalized
}
