//! Node-API entry points for the JavaScript host module.
//!
//! The host calls `generateComponentsMappingNative` once during setup and
//! imports the generated artifact afterwards.

use napi_derive::napi;
use std::path::Path;

use crate::codegen::generate_components_mapping;
use crate::dynamic_ui::component_id;
use crate::logging::init_tracing;
use crate::options::ModuleOptions;

/// Generate the components mapping under `root_dir`.
///
/// `options_json` is the host's module options object; omitted fields take
/// their defaults. Returns the generation report.
#[napi]
pub fn generate_components_mapping_native(
    root_dir: String,
    options_json: Option<String>,
) -> napi::Result<serde_json::Value> {
    init_tracing("info");

    let options = match options_json {
        Some(json) => {
            ModuleOptions::from_json(&json).map_err(|e| napi::Error::from_reason(e.to_string()))?
        }
        None => ModuleOptions::default(),
    };

    let report = generate_components_mapping(Path::new(&root_dir), &options)
        .map_err(|e| napi::Error::from_reason(e.to_string()))?;
    serde_json::to_value(report).map_err(|e| napi::Error::from_reason(e.to_string()))
}

/// Deterministic entry ID, identical to the one the Rust factory assigns.
#[napi]
pub fn component_id_native(key: String, props_json: Option<String>) -> napi::Result<String> {
    let props = props_json
        .map(|json| serde_json::from_str::<serde_json::Value>(&json))
        .transpose()
        .map_err(|e| napi::Error::from_reason(e.to_string()))?;
    Ok(component_id(&key, props.as_ref()))
}
