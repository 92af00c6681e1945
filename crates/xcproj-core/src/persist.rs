//! Writing the project bundle to disk.

use std::fs;
use std::path::{Path, PathBuf};

use tracing::{debug, info};

use crate::error::{PersistError, Result};

/// File name of the descriptor inside the project bundle.
pub const DESCRIPTOR_FILE_NAME: &str = "project.pbxproj";

/// Paths making up a `.xcodeproj` bundle.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProjectLayout {
    pub root: PathBuf,
    pub user_data_dir: PathBuf,
    pub schemes_dir: PathBuf,
    pub descriptor_path: PathBuf,
}

impl ProjectLayout {
    /// Layout of `<parent>/<bundle_dir_name>`.
    pub fn new(parent: &Path, bundle_dir_name: &str) -> Self {
        let root = parent.join(bundle_dir_name);
        Self {
            user_data_dir: root.join("xcuserdata"),
            schemes_dir: root.join("xcshareddata").join("xcschemes"),
            descriptor_path: root.join(DESCRIPTOR_FILE_NAME),
            root,
        }
    }

    /// Directories that must exist before the descriptor is written.
    pub fn directories(&self) -> [&Path; 3] {
        [&self.root, &self.user_data_dir, &self.schemes_dir]
    }
}

/// Create the bundle directories and write the descriptor into them.
///
/// Directories are created first, so a failure there never leaves a
/// descriptor behind. An existing descriptor is replaced. Nothing is rolled
/// back on failure.
pub fn persist(descriptor: &str, layout: &ProjectLayout) -> Result<()> {
    for dir in layout.directories() {
        fs::create_dir_all(dir).map_err(|e| PersistError::io("create directory", dir, e))?;
        debug!(path = %dir.display(), "ensured directory");
    }

    fs::write(&layout.descriptor_path, descriptor)
        .map_err(|e| PersistError::io("write", &layout.descriptor_path, e))?;

    info!(
        path = %layout.descriptor_path.display(),
        bytes = descriptor.len(),
        "wrote descriptor"
    );
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_layout_paths() {
        let layout = ProjectLayout::new(Path::new("/work"), "epubTTS.xcodeproj");
        assert_eq!(layout.root, PathBuf::from("/work/epubTTS.xcodeproj"));
        assert_eq!(
            layout.user_data_dir,
            PathBuf::from("/work/epubTTS.xcodeproj/xcuserdata")
        );
        assert_eq!(
            layout.schemes_dir,
            PathBuf::from("/work/epubTTS.xcodeproj/xcshareddata/xcschemes")
        );
        assert_eq!(
            layout.descriptor_path,
            PathBuf::from("/work/epubTTS.xcodeproj/project.pbxproj")
        );
    }

    #[test]
    fn test_persist_writes_descriptor() {
        let dir = tempfile::tempdir().unwrap();
        let layout = ProjectLayout::new(dir.path(), "Demo.xcodeproj");

        persist("// !$*UTF8*$!\n{\n}\n", &layout).unwrap();

        assert!(layout.user_data_dir.is_dir());
        assert!(layout.schemes_dir.is_dir());
        assert_eq!(
            fs::read_to_string(&layout.descriptor_path).unwrap(),
            "// !$*UTF8*$!\n{\n}\n"
        );
    }
}
