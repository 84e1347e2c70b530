/// Output directory layout and file naming.
///
/// Every item owns two paths under the output directory:
/// `<stem>.webm` (raw download) and `<stem>.mp4` (final), where the stem is
/// the item name with spaces replaced by underscores.
use std::path::{Path, PathBuf};
use tracing::info;

use bootanim_shared::errors::{BootAnimError, BootAnimResult};

pub const INTERMEDIATE_EXT: &str = "webm";
pub const FINAL_EXT: &str = "mp4";

/// File stem for an item name.
pub fn file_stem(name: &str) -> String {
    name.replace(' ', "_")
}

#[derive(Debug, Clone)]
pub struct OutputLayout {
    dir: PathBuf,
}

impl OutputLayout {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }

    /// Create the output directory and its parents if missing.
    pub fn ensure(&self) -> BootAnimResult<()> {
        if self.dir.is_dir() {
            return Ok(());
        }
        std::fs::create_dir_all(&self.dir).map_err(|source| BootAnimError::DirectoryCreate {
            path: self.dir.clone(),
            source,
        })?;
        info!("Created output directory: {}", self.dir.display());
        Ok(())
    }

    pub fn intermediate_path(&self, name: &str) -> PathBuf {
        self.dir.join(format!("{}.{}", file_stem(name), INTERMEDIATE_EXT))
    }

    pub fn final_path(&self, name: &str) -> PathBuf {
        self.dir.join(format!("{}.{}", file_stem(name), FINAL_EXT))
    }

    /// The final MP4 path, only if that file already exists.
    pub fn existing_final(&self, name: &str) -> Option<PathBuf> {
        let path = self.final_path(name);
        path.is_file().then_some(path)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn test_spaces_become_underscores() {
        let layout = OutputLayout::new("videos");
        assert_eq!(file_stem("game boy  advance"), "game_boy__advance");
        assert_eq!(
            layout.intermediate_path("game boy advance"),
            PathBuf::from("videos/game_boy_advance.webm")
        );
        assert_eq!(
            layout.final_path("game boy advance"),
            PathBuf::from("videos/game_boy_advance.mp4")
        );
    }

    #[test]
    fn test_existing_final() {
        let dir = tempdir().unwrap();
        let layout = OutputLayout::new(dir.path());
        assert_eq!(layout.existing_final("ps1"), None);

        std::fs::write(dir.path().join("ps1.mp4"), b"done").unwrap();
        assert_eq!(layout.existing_final("ps1"), Some(dir.path().join("ps1.mp4")));

        // The raw download is not a completion marker.
        std::fs::write(dir.path().join("gba.webm"), b"raw").unwrap();
        assert_eq!(layout.existing_final("gba"), None);
    }

    #[test]
    fn test_ensure_creates_parents() {
        let dir = tempdir().unwrap();
        let nested = dir.path().join("boot-animations").join("videos");
        let layout = OutputLayout::new(&nested);
        layout.ensure().unwrap();
        assert!(nested.is_dir());
        // Second call is a no-op.
        layout.ensure().unwrap();
    }

    #[test]
    fn test_ensure_fails_when_path_is_a_file() {
        let dir = tempdir().unwrap();
        let blocker = dir.path().join("videos");
        std::fs::write(&blocker, b"not a dir").unwrap();

        let err = OutputLayout::new(blocker.join("inner")).ensure().unwrap_err();
        assert!(matches!(err, BootAnimError::DirectoryCreate { .. }));
    }
}
