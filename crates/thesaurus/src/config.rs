use crate::error::Result;
use crate::types::ROOT_NAME;
use serde::Deserialize;
use std::path::{Path, PathBuf};

/// Settings for loading and displaying the thesaurus.
///
/// Read from JSON or TOML; every key is optional.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ThesaurusConfig {
    /// Record file to load (`.json` or tab-separated)
    pub data_path: Option<PathBuf>,

    /// Reserved name identifying the root record
    pub root_name: String,

    /// Render matches as their full path from the root
    pub with_tree: bool,

    /// Spaces per depth level in tree output
    pub indent_width: usize,
}

impl Default for ThesaurusConfig {
    fn default() -> Self {
        Self {
            data_path: None,
            root_name: ROOT_NAME.to_string(),
            with_tree: true,
            indent_width: 6,
        }
    }
}

impl ThesaurusConfig {
    pub fn from_file(path: &Path) -> Result<Self> {
        let bytes = std::fs::read(path)?;
        let mut config = Self::from_bytes(&bytes)?;

        // Relative data paths are taken relative to the config file.
        config.data_path = config.data_path.map(|data_path| match path.parent() {
            Some(base) if data_path.is_relative() => base.join(data_path),
            _ => data_path,
        });

        Ok(config)
    }

    /// Parse JSON, falling back to TOML.
    pub fn from_bytes(bytes: &[u8]) -> Result<Self> {
        match serde_json::from_slice(bytes) {
            Ok(config) => Ok(config),
            Err(json_err) => {
                let text = String::from_utf8_lossy(bytes);
                let config = toml::from_str(&text).map_err(|toml_err| {
                    log::debug!("Config is not JSON ({json_err}), TOML parse failed too");
                    toml_err
                })?;
                Ok(config)
            }
        }
    }
}
