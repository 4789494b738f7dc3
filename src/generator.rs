//! Orchestrates a single generation run: resolve the enumerations and
//! selections, find where the constants file lives, replace it, then tell the
//! host.

use chrono::{DateTime, Utc};
use std::path::PathBuf;

use crate::codegen::ConstantsFile;
use crate::config::GeneratorConfig;
use crate::error::{AppError, Result};
use crate::file_storage::{locate_output_file, write_atomically};
use crate::host::{FsHost, HostEnvironment};
use crate::models::{BuildSelection, Catalog};

pub struct ConstantsFileGenerator<'a, H: HostEnvironment = FsHost> {
    catalog: &'a Catalog,
    config: GeneratorConfig,
    host: H,
}

impl<'a> ConstantsFileGenerator<'a, FsHost> {
    pub fn new(catalog: &'a Catalog, config: GeneratorConfig) -> Self {
        Self::with_host(catalog, config, FsHost)
    }
}

impl<'a, H: HostEnvironment> ConstantsFileGenerator<'a, H> {
    pub fn with_host(catalog: &'a Catalog, config: GeneratorConfig, host: H) -> Self {
        Self {
            catalog,
            config,
            host,
        }
    }

    pub fn config(&self) -> &GeneratorConfig {
        &self.config
    }

    pub fn host(&self) -> &H {
        &self.host
    }

    /// Regenerates the constants file and returns the path written.
    ///
    /// Identifier errors surface before anything on disk is touched. The host
    /// refresh hook only runs once the new file is in place.
    pub fn generate(
        &self,
        build_time: DateTime<Utc>,
        selection: &BuildSelection,
    ) -> Result<PathBuf> {
        let file = ConstantsFile::resolve(self.catalog, &build_time, selection)?;
        let content = file.render();

        let location = locate_output_file(&self.config)?;
        let path = location.path().to_path_buf();

        if !location.exists() {
            if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
                self.host
                    .ensure_directories(parent)
                    .map_err(|e| AppError::generation(parent, e))?;
            }
        }

        write_atomically(&path, &content)?;

        log::info!(
            "Wrote {} (version '{}', {} {} {} {})",
            path.display(),
            selection.version,
            file.release_type,
            file.platform,
            file.architecture,
            file.distribution
        );

        self.host.refresh(&path);
        Ok(path)
    }
}
