use std::path::Path;
use std::path::PathBuf;

/// Training output that lives as one file in an artifact directory.
pub trait Artifact: Sized {
    /// File name inside the artifact directory.
    fn name() -> &'static str;
    /// Read from `dir`.
    fn load(dir: &Path) -> anyhow::Result<Self>;
    /// Write into `dir`, creating it if needed.
    fn save(&self, dir: &Path) -> anyhow::Result<()>;
    /// Path to the file on disk.
    fn path(dir: &Path) -> PathBuf {
        dir.join(Self::name())
    }
    /// Check if the file exists on disk.
    fn done(dir: &Path) -> bool {
        std::fs::metadata(Self::path(dir)).is_ok()
    }
}
