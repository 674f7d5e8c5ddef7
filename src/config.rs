//! Compile options
//!
//! Everything the orchestrator needs besides the input and output paths.
//! Options come from defaults, an optional TOML file, and CLI overrides, in
//! that order.

use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

use crate::error::{CompileError, Result};
use crate::styles::DEFAULT_THEME_IMPORT;

pub const DEFAULT_THEME_SOURCE: &str = "../src/styles/theme.scss";
pub const DEFAULT_THEME_TARGET: &str =
    "../runtime/projects/dynamic-components/src/styles/theme.scss";
pub const DEFAULT_MODULE_NAME: &str = "dynamic-components";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "kebab-case")]
pub struct CompileOptions {
    /// Copy the shared theme stylesheet once per run
    pub copy_theme: bool,
    pub theme: ThemeAsset,
    /// Path used in each page stylesheet's `@import`
    pub theme_import: String,
    /// Emit the module / public API / routes barrel when set
    pub library: Option<LibraryOptions>,
}

impl Default for CompileOptions {
    fn default() -> Self {
        CompileOptions {
            copy_theme: true,
            theme: ThemeAsset::default(),
            theme_import: DEFAULT_THEME_IMPORT.to_string(),
            library: None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "kebab-case")]
pub struct ThemeAsset {
    pub source: PathBuf,
    pub target: PathBuf,
}

impl Default for ThemeAsset {
    fn default() -> Self {
        ThemeAsset {
            source: PathBuf::from(DEFAULT_THEME_SOURCE),
            target: PathBuf::from(DEFAULT_THEME_TARGET),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "kebab-case")]
pub struct LibraryOptions {
    pub module_name: String,
}

impl Default for LibraryOptions {
    fn default() -> Self {
        LibraryOptions {
            module_name: DEFAULT_MODULE_NAME.to_string(),
        }
    }
}

impl CompileOptions {
    pub fn from_toml_str(source: &str, path: &Path) -> Result<Self> {
        toml::from_str(source).map_err(|e| CompileError::ParseConfig {
            path: path.to_path_buf(),
            source: e,
        })
    }

    pub fn from_toml_file(path: &Path) -> Result<Self> {
        let source = fs::read_to_string(path).map_err(|e| CompileError::ReadConfig {
            path: path.to_path_buf(),
            source: e,
        })?;
        Self::from_toml_str(&source, path)
    }
}
