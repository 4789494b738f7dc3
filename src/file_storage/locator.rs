use std::io;
use std::path::{Path, PathBuf};

use walkdir::WalkDir;

use crate::config::GeneratorConfig;
use crate::error::{AppError, Result};

/// Resolved target of a generation run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum OutputLocation {
    /// A constants file already present somewhere under the search root.
    Existing(PathBuf),
    /// Nothing was found; write to the configured default path.
    Default(PathBuf),
}

impl OutputLocation {
    pub fn path(&self) -> &Path {
        match self {
            OutputLocation::Existing(path) | OutputLocation::Default(path) => path,
        }
    }

    pub fn exists(&self) -> bool {
        matches!(self, OutputLocation::Existing(_))
    }
}

/// Finds the first file named `file_name` under `search_root`.
///
/// The walk is sorted by file name so repeated runs pick the same file when
/// several copies exist. Symlinked files match; symlinked directories are not
/// descended into. Entries that cannot be read below the root are
/// skipped; failing to read the root itself is an error.
pub fn find_constants_file(search_root: &Path, file_name: &str) -> Result<Option<PathBuf>> {
    if !search_root.exists() {
        return Ok(None);
    }

    for entry in WalkDir::new(search_root)
        .follow_links(false)
        .sort_by_file_name()
    {
        let entry = match entry {
            Ok(entry) => entry,
            Err(e) if e.depth() == 0 => {
                return Err(AppError::generation(search_root, io::Error::from(e)));
            }
            Err(e) => {
                log::debug!("Skipping unreadable entry while searching: {}", e);
                continue;
            }
        };

        // `Path::is_file` follows symlinks, so a linked constants file matches.
        if entry.file_name() == file_name && entry.path().is_file() {
            return Ok(Some(entry.into_path()));
        }
    }

    Ok(None)
}

pub fn locate_output_file(config: &GeneratorConfig) -> Result<OutputLocation> {
    match find_constants_file(&config.search_root, &config.file_name)? {
        Some(path) => {
            log::debug!("Found existing constants file at {}", path.display());
            Ok(OutputLocation::Existing(path))
        }
        None => {
            let path = config.default_path();
            log::debug!(
                "No existing {} under {}; using {}",
                config.file_name,
                config.search_root.display(),
                path.display()
            );
            Ok(OutputLocation::Default(path))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn test_missing_root_uses_default() {
        let dir = TempDir::new().unwrap();
        let config = GeneratorConfig::with_search_root(dir.path().join("Assets"));

        let location = locate_output_file(&config).unwrap();
        assert!(!location.exists());
        assert_eq!(location.path(), config.default_path());
    }

    #[test]
    fn test_finds_relocated_file() {
        let dir = TempDir::new().unwrap();
        let nested = dir.path().join("Scripts").join("Generated");
        fs::create_dir_all(&nested).unwrap();
        fs::write(nested.join("BuildConstants.cs"), "old").unwrap();

        let config = GeneratorConfig::with_search_root(dir.path());
        let location = locate_output_file(&config).unwrap();
        assert_eq!(
            location,
            OutputLocation::Existing(nested.join("BuildConstants.cs"))
        );
    }

    #[test]
    fn test_ignores_similar_names_and_directories() {
        let dir = TempDir::new().unwrap();
        fs::create_dir_all(dir.path().join("BuildConstants.cs")).unwrap();
        fs::write(dir.path().join("BuildConstants.cs.meta"), "").unwrap();
        fs::write(dir.path().join("OldBuildConstants.cs"), "").unwrap();

        let found = find_constants_file(dir.path(), "BuildConstants.cs").unwrap();
        assert_eq!(found, None);
    }

    #[cfg(unix)]
    #[test]
    fn test_finds_symlinked_file() {
        let outside = TempDir::new().unwrap();
        let real = outside.path().join("BuildConstants.cs");
        fs::write(&real, "old").unwrap();

        let dir = TempDir::new().unwrap();
        let link_dir = dir.path().join("Scripts");
        fs::create_dir_all(&link_dir).unwrap();
        std::os::unix::fs::symlink(&real, link_dir.join("BuildConstants.cs")).unwrap();

        let config = GeneratorConfig::with_search_root(dir.path());
        let location = locate_output_file(&config).unwrap();
        assert_eq!(
            location,
            OutputLocation::Existing(link_dir.join("BuildConstants.cs"))
        );
    }

    #[test]
    fn test_first_match_is_deterministic() {
        let dir = TempDir::new().unwrap();
        for sub in ["b", "a"] {
            let d = dir.path().join(sub);
            fs::create_dir_all(&d).unwrap();
            fs::write(d.join("BuildConstants.cs"), sub).unwrap();
        }

        let found = find_constants_file(dir.path(), "BuildConstants.cs").unwrap();
        assert_eq!(found, Some(dir.path().join("a").join("BuildConstants.cs")));
    }
}
