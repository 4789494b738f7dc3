pub mod codegen;
pub mod config;
pub mod constants;
pub mod error;
pub mod file_storage;
pub mod generator;
pub mod host;
pub mod models;

use chrono::{DateTime, Utc};
use std::path::{Path, PathBuf};

pub use config::GeneratorConfig;
pub use error::{AppError, Result};
pub use generator::ConstantsFileGenerator;
pub use host::{FsHost, HostEnvironment};
pub use models::{BuildSelection, Catalog, Selection};

/// Regenerates the constants file on the plain filesystem host.
pub fn generate(
    catalog: &Catalog,
    config: GeneratorConfig,
    build_time: DateTime<Utc>,
    selection: &BuildSelection,
) -> Result<PathBuf> {
    ConstantsFileGenerator::new(catalog, config).generate(build_time, selection)
}

/// Inputs gathered by the command-line host before a run.
#[derive(Debug, Clone, Default)]
pub struct CliRequest {
    pub catalog_path: PathBuf,
    pub config_path: Option<PathBuf>,
    pub search_root: Option<PathBuf>,
    pub build_time: Option<String>,
    pub selection: BuildSelection,
}

pub fn parse_build_time(value: &str) -> Result<DateTime<Utc>> {
    DateTime::parse_from_rfc3339(value)
        .map(|dt| dt.with_timezone(&Utc))
        .map_err(|e| AppError::InvalidInput {
            message: format!("Invalid build time '{}': {}", value, e),
        })
}

fn load_config(config_path: Option<&Path>, search_root: Option<PathBuf>) -> Result<GeneratorConfig> {
    let mut config = match config_path {
        Some(path) => GeneratorConfig::load(path)?,
        None => GeneratorConfig::default(),
    };
    if let Some(root) = search_root {
        config.search_root = root;
    }
    Ok(config)
}

pub fn run_cli(request: CliRequest) -> std::result::Result<PathBuf, String> {
    let build_time = match request.build_time.as_deref() {
        Some(value) => parse_build_time(value).map_err(|e| e.to_string())?,
        None => Utc::now(),
    };
    let config = load_config(request.config_path.as_deref(), request.search_root)
        .map_err(|e| e.to_string())?;
    let catalog = Catalog::load(&request.catalog_path).map_err(|e| e.to_string())?;

    generate(&catalog, config, build_time, &request.selection).map_err(|e| e.to_string())
}
