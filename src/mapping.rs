//! Runtime form of the generated components mapping.
//!
//! Generation writes a JSON manifest next to the TypeScript artifact. It maps
//! every key to its bindings: the component implementation and, when the
//! component declares one, its props type. The manifest is loaded once into
//! process-wide read-only state before the first render; until then every
//! lookup misses.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fs;
use std::path::Path;
use std::sync::OnceLock;

use crate::discovery::ComponentRecord;
use crate::error::RuntimeError;

/// An importable binding: the identifier the artifact binds and the module
/// specifier it is imported from.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ModuleRef {
    pub name: String,
    #[serde(rename = "ref")]
    pub path: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "camelCase")]
pub enum Binding {
    Implementation(ModuleRef),
    PropsType(ModuleRef),
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ComponentsMapping {
    components: BTreeMap<String, Vec<Binding>>,
}

impl ComponentsMapping {
    /// Build the mapping from discovery records. On duplicate keys the later
    /// record replaces the earlier one.
    pub fn from_records(records: &[ComponentRecord]) -> Self {
        let mut components = BTreeMap::new();
        for record in records {
            let mut bindings = vec![Binding::Implementation(ModuleRef {
                name: record.display_name.clone(),
                path: record.import_path.clone(),
            })];
            if record.has_props {
                bindings.push(Binding::PropsType(ModuleRef {
                    name: record.props_type_name(),
                    path: record.props_import_path.clone(),
                }));
            }
            components.insert(record.key.clone(), bindings);
        }
        Self { components }
    }

    pub fn from_json(json: &str) -> Result<Self, RuntimeError> {
        Ok(serde_json::from_str(json)?)
    }

    pub fn load(path: &Path) -> Result<Self, RuntimeError> {
        let json = fs::read_to_string(path).map_err(|source| RuntimeError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_json(&json)
    }

    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(self)
    }

    pub fn implementation(&self, key: &str) -> Option<&ModuleRef> {
        self.bindings(key).iter().find_map(|binding| match binding {
            Binding::Implementation(module) => Some(module),
            Binding::PropsType(_) => None,
        })
    }

    pub fn props_type(&self, key: &str) -> Option<&ModuleRef> {
        self.bindings(key).iter().find_map(|binding| match binding {
            Binding::PropsType(module) => Some(module),
            Binding::Implementation(_) => None,
        })
    }

    pub fn bindings(&self, key: &str) -> &[Binding] {
        self.components.get(key).map(Vec::as_slice).unwrap_or(&[])
    }

    pub fn contains_key(&self, key: &str) -> bool {
        self.components.contains_key(key)
    }

    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.components.keys().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.components.len()
    }

    pub fn is_empty(&self) -> bool {
        self.components.is_empty()
    }
}

// ═══════════════════════════════════════════════════════════════════════════════
// PROCESS-WIDE MAPPING
// ═══════════════════════════════════════════════════════════════════════════════

static COMPONENTS_MAPPING: OnceLock<ComponentsMapping> = OnceLock::new();

/// Install the process-wide mapping. Must run before the first render and
/// only once.
pub fn install_components_mapping(
    mapping: ComponentsMapping,
) -> Result<&'static ComponentsMapping, RuntimeError> {
    COMPONENTS_MAPPING
        .set(mapping)
        .map_err(|_| RuntimeError::AlreadyInstalled)?;
    COMPONENTS_MAPPING.get().ok_or(RuntimeError::AlreadyInstalled)
}

pub fn installed_components_mapping() -> Option<&'static ComponentsMapping> {
    COMPONENTS_MAPPING.get()
}
