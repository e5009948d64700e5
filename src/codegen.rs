//! Codegen module
//!
//! Renders discovered components into the generated TypeScript unit
//! (`ComponentsKey`, `ComponentPropsMap`, `componentsMapping`) and the JSON
//! manifest, and writes both to disk. This is the only module that writes.

use serde::Serialize;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::info;

use crate::cache::{write_if_changed, WriteOutcome};
use crate::discovery::{build_component_records, find_component_files, ComponentRecord};
use crate::error::GenerateError;
use crate::mapping::ComponentsMapping;
use crate::naming::is_valid_identifier;
use crate::options::ModuleOptions;

pub const GENERATED_HEADER: &str = "// Auto-generated by dynamic-ui. Do not edit manually.";

// ═══════════════════════════════════════════════════════════════════════════════
// REPORT
// ═══════════════════════════════════════════════════════════════════════════════

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GenerationReport {
    pub output_file: PathBuf,
    pub outcome: WriteOutcome,
    pub manifest_file: Option<PathBuf>,
    pub components: Vec<ComponentRecord>,
}

// ═══════════════════════════════════════════════════════════════════════════════
// PIPELINE
// ═══════════════════════════════════════════════════════════════════════════════

/// Scan the configured directories under `root_dir` and (re)generate the
/// components mapping.
///
/// Any filesystem failure aborts generation; a scan directory that does not
/// exist simply contributes nothing.
pub fn generate_components_mapping(
    root_dir: &Path,
    options: &ModuleOptions,
) -> Result<GenerationReport, GenerateError> {
    let output_file = options.output_path(root_dir);
    let output_dir = output_file
        .parent()
        .filter(|_| output_file.file_name().is_some())
        .ok_or_else(|| GenerateError::InvalidOutput(output_file.clone()))?;
    // An output file already ending in `.json` would be replaced by the manifest.
    if options.manifest && options.manifest_path(root_dir) == output_file {
        return Err(GenerateError::InvalidOutput(output_file.clone()));
    }

    fs::create_dir_all(output_dir).map_err(|source| GenerateError::CreateDir {
        path: output_dir.to_path_buf(),
        source,
    })?;

    let files = find_component_files(root_dir, &options.target_dirs, &options.component_extension)?;
    let components = build_component_records(&files, output_dir, options);

    let artifact = render_components_mapping(&components);

    // The manifest goes first: if its write fails the artifact is left untouched.
    let manifest_file = if options.manifest {
        let path = options.manifest_path(root_dir);
        let manifest = ComponentsMapping::from_records(&components).to_json()?;
        write_if_changed(&path, &format!("{}\n", manifest))?;
        Some(path)
    } else {
        None
    };

    let outcome = write_if_changed(&output_file, &artifact)?;

    info!(
        path = %output_file.display(),
        components = components.len(),
        ?outcome,
        "components mapping generated"
    );

    Ok(GenerationReport {
        output_file,
        outcome,
        manifest_file,
        components,
    })
}

// ═══════════════════════════════════════════════════════════════════════════════
// RENDERING
// ═══════════════════════════════════════════════════════════════════════════════

/// Render the TypeScript artifact. Output depends only on `records`.
pub fn render_components_mapping(records: &[ComponentRecord]) -> String {
    let mut out = String::new();

    out.push_str(GENERATED_HEADER);
    out.push('\n');
    out.push_str("import type { Component } from 'vue'\n");
    for record in records {
        out.push_str(&format!(
            "import {} from {}\n",
            record.display_name,
            quote(&record.import_path)
        ));
    }
    // A props module is only imported when it exists on disk.
    for record in records.iter().filter(|r| r.has_props) {
        out.push_str(&format!(
            "import type {{ {} }} from {}\n",
            record.props_type_name(),
            quote(&record.props_import_path)
        ));
    }
    out.push('\n');

    out.push_str(&format!(
        "export type ComponentsKey = {};\n\n",
        render_key_union(records)
    ));

    let props_entries: Vec<String> = records
        .iter()
        .map(|r| {
            let props_type = if r.has_props {
                r.props_type_name()
            } else {
                "undefined".to_string()
            };
            format!("  {}: {};", property_key(&r.key), props_type)
        })
        .collect();
    out.push_str(&format!(
        "export type ComponentPropsMap = {};\n\n",
        render_block(&props_entries)
    ));

    let mapping_entries: Vec<String> = records
        .iter()
        .map(|r| format!("  {}: {},", property_key(&r.key), r.display_name))
        .collect();
    out.push_str(&format!(
        "export const componentsMapping: Record<ComponentsKey, Component> = {};\n",
        render_block(&mapping_entries)
    ));

    out
}

fn render_key_union(records: &[ComponentRecord]) -> String {
    if records.is_empty() {
        return "never".to_string();
    }
    records
        .iter()
        .map(|r| quote(&r.key))
        .collect::<Vec<_>>()
        .join(" | ")
}

fn render_block(entries: &[String]) -> String {
    if entries.is_empty() {
        "{}".to_string()
    } else {
        format!("{{\n{}\n}}", entries.join("\n"))
    }
}

fn property_key(key: &str) -> String {
    if is_valid_identifier(key) {
        key.to_string()
    } else {
        quote(key)
    }
}

/// Single-quoted TypeScript string literal.
fn quote(value: &str) -> String {
    format!("'{}'", value.replace('\\', "\\\\").replace('\'', "\\'"))
}
