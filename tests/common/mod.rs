#![allow(dead_code)]
//! Shared test helpers for integration tests.
//!
//! Include in each test file with:
//!   mod common;
//! then build a catalog with `common::sample_catalog()` and pass a
//! `common::RecordingHost` to the generator.

use std::cell::RefCell;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use buildconst_lib::models::Platform;
use buildconst_lib::{Catalog, HostEnvironment};

/// Host that records every hook call and creates directories for real.
#[derive(Default)]
pub struct RecordingHost {
    pub ensured: RefCell<Vec<PathBuf>>,
    pub refreshed: RefCell<Vec<PathBuf>>,
}

impl HostEnvironment for RecordingHost {
    fn ensure_directories(&self, dir: &Path) -> io::Result<()> {
        self.ensured.borrow_mut().push(dir.to_path_buf());
        fs::create_dir_all(dir)
    }

    fn refresh(&self, written: &Path) {
        self.refreshed.borrow_mut().push(written.to_path_buf());
    }
}

/// Catalog from the documented example: one enabled and one disabled platform.
pub fn sample_catalog() -> Catalog {
    Catalog {
        release_types: vec!["Beta".into(), "Beta".into(), "Release".into()],
        platforms: vec![
            Platform::new("Win 64!", true)
                .with_architecture("x86_64", true)
                .with_distribution("Steam", true)
                .with_distribution("Epic", false),
            Platform::new("Linux", false).with_architecture("arm", true),
        ],
    }
}

/// Every file under `root`, relative and sorted.
pub fn list_files(root: &Path) -> Vec<PathBuf> {
    let mut files: Vec<PathBuf> = walkdir::WalkDir::new(root)
        .into_iter()
        .filter_map(|e| e.ok())
        .filter(|e| e.file_type().is_file())
        .map(|e| e.path().strip_prefix(root).unwrap().to_path_buf())
        .collect();
    files.sort();
    files
}
