use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::path::PathBuf;
use tsconvert_compiler::CompileOptions;
use tsconvert_typemap::ScalarTable;

pub const DEFAULT_CONFIG_NAME: &str = "tsconvert.config.json";

/// tsconvert configuration file format
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Config {
    /// Directory searched for .cs files by `build`
    #[serde(default = "default_src_dir")]
    pub src_dir: String,

    /// Directory `build` writes .ts files into
    #[serde(default = "default_out_dir")]
    pub out_dir: String,

    /// Spaces per indentation level in generated interfaces
    #[serde(default = "default_indent_width")]
    pub indent_width: usize,

    /// Emit `export interface` rather than `interface`
    #[serde(default = "default_export")]
    pub export: bool,

    /// Fail on property types that are neither scalars nor declared classes
    #[serde(default)]
    pub strict: bool,

    /// Extra or overriding scalar mappings, e.g. `{ "DateTime": "string" }`
    #[serde(default, skip_serializing_if = "BTreeMap::is_empty")]
    pub scalar_types: BTreeMap<String, String>,

    /// Extra single-argument collection wrappers, e.g. `["HashSet"]`
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub collection_types: Vec<String>,
}

fn default_src_dir() -> String {
    "src".to_string()
}

fn default_out_dir() -> String {
    "dist".to_string()
}

fn default_indent_width() -> usize {
    4
}

fn default_export() -> bool {
    true
}

impl Config {
    /// Load config from a directory
    pub fn load(cwd: &str) -> anyhow::Result<Self> {
        let config_path = PathBuf::from(cwd).join(DEFAULT_CONFIG_NAME);

        if config_path.exists() {
            let content = std::fs::read_to_string(&config_path)?;
            let config: Config = serde_json::from_str(&content)?;
            tracing::debug!(path = %config_path.display(), "Loaded config");
            Ok(config)
        } else {
            // Return default config if none exists
            Ok(Config::default())
        }
    }

    /// Get absolute path to source directory
    pub fn get_src_dir(&self, cwd: &str) -> PathBuf {
        PathBuf::from(cwd).join(&self.src_dir)
    }

    pub fn get_out_dir(&self, cwd: &str) -> PathBuf {
        PathBuf::from(cwd).join(&self.out_dir)
    }

    /// Compiler options with the configured scalar and collection additions
    pub fn compile_options(&self) -> CompileOptions {
        let mut scalars = ScalarTable::default();
        for (source, target) in &self.scalar_types {
            scalars.insert_scalar(source, target);
        }
        for name in &self.collection_types {
            scalars.insert_collection(name);
        }

        CompileOptions {
            indent_width: self.indent_width,
            export: self.export,
            strict: self.strict,
            scalars,
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            src_dir: default_src_dir(),
            out_dir: default_out_dir(),
            indent_width: default_indent_width(),
            export: default_export(),
            strict: false,
            scalar_types: BTreeMap::new(),
            collection_types: vec![],
        }
    }
}
