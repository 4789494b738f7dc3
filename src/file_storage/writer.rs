use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};

use crate::constants::TEMP_FILE_MARKER;
use crate::error::{AppError, Result};

fn temp_path_for(path: &Path) -> PathBuf {
    let file_name = path
        .file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_default();
    path.with_file_name(format!(
        "{}.{}{}",
        file_name,
        TEMP_FILE_MARKER,
        uuid::Uuid::new_v4()
    ))
}

/// Follows a symlinked `path` to the file it points at, so the rename
/// replaces the target and leaves the link in place.
fn resolve_write_target(path: &Path) -> std::io::Result<PathBuf> {
    match fs::symlink_metadata(path) {
        Ok(meta) if meta.file_type().is_symlink() => fs::canonicalize(path),
        _ => Ok(path.to_path_buf()),
    }
}

/// Replaces `path` with `content` via a synced sibling temp file and a rename.
///
/// Readers see either the previous file or the complete new one. The parent
/// directory must already exist. A symlink is written through, never replaced.
pub fn write_atomically(path: &Path, content: &str) -> Result<()> {
    let target = resolve_write_target(path).map_err(|e| AppError::generation(path, e))?;
    let temp_path = temp_path_for(&target);

    let written = (|| -> std::io::Result<()> {
        let mut file = fs::File::create(&temp_path)?;
        file.write_all(content.as_bytes())?;
        file.sync_all()?;
        drop(file);
        fs::rename(&temp_path, &target)
    })();

    if let Err(e) = written {
        if temp_path.exists() {
            if let Err(cleanup) = fs::remove_file(&temp_path) {
                log::warn!(
                    "Failed to remove temp file '{}': {}",
                    temp_path.display(),
                    cleanup
                );
            }
        }
        return Err(AppError::generation(path, e));
    }

    // Ensure directory metadata is also synced to disk if possible
    if let Some(parent) = target.parent() {
        if let Ok(dir) = fs::File::open(parent) {
            let _ = dir.sync_all();
        }
    }

    Ok(())
}
