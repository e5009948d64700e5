//! # Dynamic UI Native
//!
//! Pages are rendered from a declarative list of component entries instead of
//! hard-coded markup. This crate has two halves:
//!
//! 1. **Generation** (setup time, once): scan component directories, derive a
//!    key per component file (`HeroSection.vue` → `hero`), detect optional
//!    `<Name>.props.ts` declarations, and write a TypeScript mapping
//!    (`ComponentsKey`, `ComponentPropsMap`, `componentsMapping`) plus a JSON
//!    manifest of the same associations.
//!
//! 2. **Entry factory** (render time, any number of calls): given a key and
//!    optional props, build a `ComponentEntry` whose ID is a deterministic
//!    hash of the key and props.
//!
//! ## Invariants
//!
//! - Missing scan directories contribute no components; any other filesystem
//!   failure aborts generation.
//! - Generation output depends only on the discovered files, so an unchanged
//!   tree regenerates byte-identical text.
//! - The process-wide mapping is installed once, before the first render.
//! - An unregistered key yields an entry without a component, never an error.

#[cfg(feature = "napi")]
mod bridge;
mod cache;
mod codegen;
mod discovery;
mod dynamic_ui;
mod error;
mod logging;
mod mapping;
mod naming;
mod options;

#[cfg(test)]
mod discovery_tests;

#[cfg(feature = "napi")]
pub use bridge::{component_id_native, generate_components_mapping_native};

pub use cache::WriteOutcome;
pub use codegen::{generate_components_mapping, render_components_mapping, GenerationReport};
pub use discovery::{build_component_records, find_component_files, ComponentRecord};
pub use dynamic_ui::{
    component_id, generate_component, try_generate_component, use_dynamic_ui, ComponentEntry,
    ComponentOptions, Connector, DynamicUi, PageContent,
};
pub use error::{GenerateError, RuntimeError};
pub use logging::init_tracing;
pub use mapping::{
    install_components_mapping, installed_components_mapping, Binding, ComponentsMapping,
    ModuleRef,
};
pub use naming::derive_key;
pub use options::ModuleOptions;
