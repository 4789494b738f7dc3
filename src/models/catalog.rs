use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

use crate::error::{AppError, Result};

fn default_true() -> bool {
    true
}

/// A named catalog entry that can be switched off without being removed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CatalogEntry {
    pub name: String,
    #[serde(default = "default_true")]
    pub enabled: bool,
}

impl CatalogEntry {
    pub fn new(name: impl Into<String>, enabled: bool) -> Self {
        Self {
            name: name.into(),
            enabled,
        }
    }
}

pub type Architecture = CatalogEntry;
pub type Distribution = CatalogEntry;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Platform {
    pub name: String,
    #[serde(default = "default_true")]
    pub enabled: bool,
    #[serde(default)]
    pub architectures: Vec<Architecture>,
    #[serde(default)]
    pub distributions: Vec<Distribution>,
}

impl Platform {
    pub fn new(name: impl Into<String>, enabled: bool) -> Self {
        Self {
            name: name.into(),
            enabled,
            architectures: Vec::new(),
            distributions: Vec::new(),
        }
    }

    pub fn with_architecture(mut self, name: impl Into<String>, enabled: bool) -> Self {
        self.architectures.push(CatalogEntry::new(name, enabled));
        self
    }

    pub fn with_distribution(mut self, name: impl Into<String>, enabled: bool) -> Self {
        self.distributions.push(CatalogEntry::new(name, enabled));
        self
    }
}

/// Read-only view of every release type and platform configured for a build.
///
/// Order is significant: enumerations are emitted in catalog order and the
/// first entry wins when two names sanitize to the same identifier.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Catalog {
    #[serde(default)]
    pub release_types: Vec<String>,
    #[serde(default)]
    pub platforms: Vec<Platform>,
}

impl Catalog {
    pub fn release_type_names(&self) -> impl Iterator<Item = &str> {
        self.release_types.iter().map(String::as_str)
    }

    pub fn enabled_platforms(&self) -> impl Iterator<Item = &Platform> {
        self.platforms.iter().filter(|p| p.enabled)
    }

    pub fn enabled_platform_names(&self) -> impl Iterator<Item = &str> {
        self.enabled_platforms().map(|p| p.name.as_str())
    }

    /// Architectures of every enabled platform, pooled in catalog order.
    pub fn enabled_architecture_names(&self) -> impl Iterator<Item = &str> {
        self.enabled_platforms()
            .flat_map(|p| p.architectures.iter())
            .filter(|a| a.enabled)
            .map(|a| a.name.as_str())
    }

    /// Distributions of every enabled platform, pooled in catalog order.
    pub fn enabled_distribution_names(&self) -> impl Iterator<Item = &str> {
        self.enabled_platforms()
            .flat_map(|p| p.distributions.iter())
            .filter(|d| d.enabled)
            .map(|d| d.name.as_str())
    }

    pub fn from_json_str(content: &str) -> Result<Self> {
        serde_json::from_str(content).map_err(|e| AppError::Catalog {
            message: format!("Failed to parse catalog JSON: {}", e),
        })
    }

    pub fn from_toml_str(content: &str) -> Result<Self> {
        toml::from_str(content).map_err(|e| AppError::Catalog {
            message: format!("Failed to parse catalog TOML: {}", e),
        })
    }

    pub fn load(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path).map_err(|e| AppError::Catalog {
            message: format!("Failed to read catalog '{}': {}", path.display(), e),
        })?;

        let catalog = match path.extension().and_then(|e| e.to_str()) {
            Some("json") => Self::from_json_str(&content)?,
            Some("toml") => Self::from_toml_str(&content)?,
            other => {
                return Err(AppError::Catalog {
                    message: format!(
                        "Unsupported catalog format '{}' for '{}' (expected .json or .toml)",
                        other.unwrap_or(""),
                        path.display()
                    ),
                })
            }
        };

        log::debug!(
            "Loaded catalog from {}: {} release types, {} platforms",
            path.display(),
            catalog.release_types.len(),
            catalog.platforms.len()
        );

        Ok(catalog)
    }
}
