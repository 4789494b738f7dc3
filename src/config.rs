use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

use crate::constants::{CONSTANTS_FILE_NAME, DEFAULT_OUTPUT_DIR, DEFAULT_SEARCH_ROOT};
use crate::error::{AppError, Result};

/// Where the generator looks for, and falls back to writing, the constants file.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct GeneratorConfig {
    /// Tree scanned for an existing constants file.
    pub search_root: PathBuf,
    /// Directory under `search_root` used when no existing file is found.
    pub default_dir: PathBuf,
    pub file_name: String,
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        Self {
            search_root: PathBuf::from(DEFAULT_SEARCH_ROOT),
            default_dir: PathBuf::from(DEFAULT_OUTPUT_DIR),
            file_name: CONSTANTS_FILE_NAME.to_string(),
        }
    }
}

impl GeneratorConfig {
    pub fn with_search_root(search_root: impl Into<PathBuf>) -> Self {
        Self {
            search_root: search_root.into(),
            ..Default::default()
        }
    }

    pub fn default_path(&self) -> PathBuf {
        self.search_root
            .join(&self.default_dir)
            .join(&self.file_name)
    }

    pub fn from_toml_str(content: &str) -> Result<Self> {
        let config: Self = toml::from_str(content).map_err(|e| AppError::Config {
            message: format!("Failed to parse generator config: {}", e),
        })?;
        config.validate()?;
        Ok(config)
    }

    pub fn load(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path).map_err(|e| AppError::Config {
            message: format!("Failed to read config '{}': {}", path.display(), e),
        })?;
        Self::from_toml_str(&content)
    }

    fn validate(&self) -> Result<()> {
        let is_bare_name = Path::new(&self.file_name)
            .file_name()
            .is_some_and(|name| name == self.file_name.as_str());
        if self.file_name.is_empty() || !is_bare_name {
            return Err(AppError::Config {
                message: format!(
                    "file_name must be a bare file name, got '{}'",
                    self.file_name
                ),
            });
        }
        if self.default_dir.is_absolute() {
            return Err(AppError::Config {
                message: format!(
                    "default_dir must be relative to search_root, got '{}'",
                    self.default_dir.display()
                ),
            });
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_path() {
        let config = GeneratorConfig::default();
        assert_eq!(
            config.default_path(),
            Path::new("Assets")
                .join("SuperUnityBuild")
                .join("BuildConstants.cs")
        );
    }

    #[test]
    fn test_partial_toml_keeps_defaults() {
        let config = GeneratorConfig::from_toml_str("search_root = \"game/Assets\"\n").unwrap();
        assert_eq!(config.search_root, PathBuf::from("game/Assets"));
        assert_eq!(config.default_dir, PathBuf::from("SuperUnityBuild"));
        assert_eq!(config.file_name, "BuildConstants.cs");
    }

    #[test]
    fn test_rejects_file_name_with_directory() {
        let result = GeneratorConfig::from_toml_str("file_name = \"gen/BuildConstants.cs\"\n");
        assert!(matches!(result, Err(AppError::Config { .. })));
    }

    #[test]
    fn test_rejects_empty_file_name() {
        let result = GeneratorConfig::from_toml_str("file_name = \"\"\n");
        assert!(matches!(result, Err(AppError::Config { .. })));
    }

    #[test]
    fn test_rejects_unknown_shape() {
        let result = GeneratorConfig::from_toml_str("search_root = 5\n");
        assert!(matches!(result, Err(AppError::Config { .. })));
    }
}
