use std::fs;
use std::io;
use std::path::Path;

/// Services the generator borrows from whatever runs it (an editor, a build
/// orchestrator, the CLI).
pub trait HostEnvironment {
    /// Creates `dir` and any missing parents.
    fn ensure_directories(&self, dir: &Path) -> io::Result<()>;

    /// Called once after the constants file has been replaced.
    fn refresh(&self, written: &Path);
}

/// Plain filesystem host used when nothing needs to be notified.
#[derive(Debug, Clone, Copy, Default)]
pub struct FsHost;

impl HostEnvironment for FsHost {
    fn ensure_directories(&self, dir: &Path) -> io::Result<()> {
        fs::create_dir_all(dir)
    }

    fn refresh(&self, written: &Path) {
        log::info!("Generated sources updated: {}", written.display());
    }
}

impl<H: HostEnvironment + ?Sized> HostEnvironment for &H {
    fn ensure_directories(&self, dir: &Path) -> io::Result<()> {
        (**self).ensure_directories(dir)
    }

    fn refresh(&self, written: &Path) {
        (**self).refresh(written)
    }
}
