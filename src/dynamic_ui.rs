//! Runtime entry factory.
//!
//! Page content is an ordered list of `ComponentEntry` values, each built by
//! `generate_component` from a key of the generated mapping and optional
//! props. Entry IDs are derived from the key and props only, so rebuilding a
//! page with the same inputs yields the same IDs.
//!
//! A key that is not in the mapping is not an error: the entry simply carries
//! no component. Only keys from the generated `ComponentsKey` union should be
//! used; `try_generate_component` is available where a miss must be explicit.

use lazy_static::lazy_static;
use serde::Serialize;
use serde_json::Value;

use crate::error::RuntimeError;
use crate::mapping::{installed_components_mapping, ComponentsMapping, ModuleRef};

// ═══════════════════════════════════════════════════════════════════════════════
// TYPES
// ═══════════════════════════════════════════════════════════════════════════════

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ComponentEntry {
    /// `None` when the key is not registered.
    pub component: Option<ModuleRef>,
    pub props: Option<Value>,
    pub id: String,
}

pub type PageContent = Vec<ComponentEntry>;

/// Props supplied indirectly, resolved when the entry is built.
pub enum Connector {
    Direct(Value),
    Lazy(Box<dyn FnOnce() -> Option<Value>>),
}

impl Connector {
    pub fn lazy<F>(resolve: F) -> Self
    where
        F: FnOnce() -> Option<Value> + 'static,
    {
        Connector::Lazy(Box::new(resolve))
    }

    fn resolve(self) -> Option<Value> {
        match self {
            Connector::Direct(value) => Some(value),
            Connector::Lazy(resolve) => resolve(),
        }
    }
}

impl std::fmt::Debug for Connector {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Connector::Direct(value) => f.debug_tuple("Direct").field(value).finish(),
            Connector::Lazy(_) => f.write_str("Lazy(..)"),
        }
    }
}

#[derive(Debug, Default)]
pub struct ComponentOptions {
    pub props: Option<Value>,
    pub connector: Option<Connector>,
}

impl ComponentOptions {
    pub fn with_props(props: Value) -> Self {
        Self {
            props: Some(props),
            connector: None,
        }
    }

    pub fn with_connector(connector: Connector) -> Self {
        Self {
            props: None,
            connector: Some(connector),
        }
    }

    /// Direct props win; the connector is only consulted without them.
    fn resolve_props(self) -> Option<Value> {
        let props = self.props.filter(|v| !v.is_null());
        match props {
            Some(props) => Some(props),
            None => self
                .connector
                .and_then(Connector::resolve)
                .filter(|v| !v.is_null()),
        }
    }
}

// ═══════════════════════════════════════════════════════════════════════════════
// IDS
// ═══════════════════════════════════════════════════════════════════════════════

/// Rolling hash (`hash * 31 + unit`, wrapping i32) over UTF-16 code units.
pub fn hash_string(s: &str) -> String {
    let mut hash: i32 = 0;
    for unit in s.encode_utf16() {
        hash = hash.wrapping_mul(31).wrapping_add(i32::from(unit));
    }
    format_id(hash)
}

pub(crate) fn format_id(hash: i32) -> String {
    format!("id_{}", hash.unsigned_abs())
}

/// Deterministic ID for a key and its props; absent props hash as `{}`.
///
/// Props are serialized in member insertion order, so objects with the same
/// members in a different order may get different IDs.
pub fn component_id(key: &str, props: Option<&Value>) -> String {
    let serialized = match props {
        Some(value) if !value.is_null() => value.to_string(),
        _ => "{}".to_string(),
    };
    hash_string(&format!("{}{}", key, serialized))
}

// ═══════════════════════════════════════════════════════════════════════════════
// FACTORY
// ═══════════════════════════════════════════════════════════════════════════════

/// Entry factory bound to one components mapping.
#[derive(Debug, Clone, Copy)]
pub struct DynamicUi<'a> {
    mapping: &'a ComponentsMapping,
}

lazy_static! {
    static ref EMPTY_MAPPING: ComponentsMapping = ComponentsMapping::default();
}

/// Factory over the process-wide mapping, or an empty one before it is
/// installed.
pub fn use_dynamic_ui() -> DynamicUi<'static> {
    DynamicUi::new(installed_components_mapping().unwrap_or(&*EMPTY_MAPPING))
}

impl<'a> DynamicUi<'a> {
    pub fn new(mapping: &'a ComponentsMapping) -> Self {
        Self { mapping }
    }

    pub fn generate_component(&self, key: &str, options: ComponentOptions) -> ComponentEntry {
        let props = options.resolve_props();
        let id = component_id(key, props.as_ref());

        ComponentEntry {
            component: self.mapping.implementation(key).cloned(),
            props,
            id,
        }
    }

    /// Like `generate_component`, but an unregistered key is an error.
    pub fn try_generate_component(
        &self,
        key: &str,
        options: ComponentOptions,
    ) -> Result<ComponentEntry, RuntimeError> {
        if !self.mapping.contains_key(key) {
            return Err(RuntimeError::UnknownKey(key.to_string()));
        }
        Ok(self.generate_component(key, options))
    }
}

/// Build an entry against the process-wide mapping.
pub fn generate_component(key: &str, options: ComponentOptions) -> ComponentEntry {
    use_dynamic_ui().generate_component(key, options)
}

pub fn try_generate_component(
    key: &str,
    options: ComponentOptions,
) -> Result<ComponentEntry, RuntimeError> {
    use_dynamic_ui().try_generate_component(key, options)
}
