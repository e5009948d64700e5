use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

use crate::naming::DEFAULT_KEY_SUFFIX;

/// Host-facing configuration for mapping generation.
///
/// Every field has a default, so `{}` is a complete configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ModuleOptions {
    /// Directories to scan, relative to the project root.
    pub target_dirs: Vec<String>,
    /// Artifact location, relative to the project root unless absolute.
    pub output_file: PathBuf,
    pub key_suffix: String,
    pub component_extension: String,
    /// Extension of the sibling props declaration, without the leading dot.
    pub props_extension: String,
    /// Also write the JSON manifest next to the TypeScript artifact.
    pub manifest: bool,
}

impl Default for ModuleOptions {
    fn default() -> Self {
        Self {
            target_dirs: vec!["components".to_string()],
            output_file: PathBuf::from(".nuxt/dynamic-ui/components-mapping.ts"),
            key_suffix: DEFAULT_KEY_SUFFIX.to_string(),
            component_extension: "vue".to_string(),
            props_extension: "props.ts".to_string(),
            manifest: true,
        }
    }
}

impl ModuleOptions {
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }

    /// Absolute (or root-joined) path of the TypeScript artifact.
    pub fn output_path(&self, root_dir: &Path) -> PathBuf {
        root_dir.join(&self.output_file)
    }

    /// The manifest shares the artifact's stem with a `.json` extension.
    pub fn manifest_path(&self, root_dir: &Path) -> PathBuf {
        self.output_path(root_dir).with_extension("json")
    }

    /// Module specifier suffix used to import a props declaration.
    ///
    /// `props.ts` imports as `.props`; TypeScript resolves the `.ts` itself.
    pub(crate) fn props_module_suffix(&self) -> &str {
        self.props_extension
            .strip_suffix(".ts")
            .or_else(|| self.props_extension.strip_suffix(".js"))
            .unwrap_or(&self.props_extension)
    }
}
