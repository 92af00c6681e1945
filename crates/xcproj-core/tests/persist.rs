//! Filesystem scenarios for writing the project bundle.

use std::fs;

use tempfile::tempdir;
use xcproj_core::{
    OutputMode, PersistError, ProjectConfig, ProjectLayout, build_descriptor, persist,
};

fn epub_tts_layout(parent: &std::path::Path) -> ProjectLayout {
    ProjectLayout::new(parent, &ProjectConfig::EPUB_TTS.bundle_dir_name())
}

#[test]
fn test_fresh_run_creates_layout() {
    let dir = tempdir().unwrap();
    let layout = epub_tts_layout(dir.path());
    let descriptor = build_descriptor(OutputMode::Legacy);

    persist(&descriptor, &layout).unwrap();

    assert!(dir.path().join("epubTTS.xcodeproj").is_dir());
    assert!(dir.path().join("epubTTS.xcodeproj/xcuserdata").is_dir());
    assert!(dir.path().join("epubTTS.xcodeproj/xcshareddata/xcschemes").is_dir());
    let written = fs::read_to_string(dir.path().join("epubTTS.xcodeproj/project.pbxproj")).unwrap();
    assert_eq!(written.lines().next(), Some("// !$*UTF8*$!"));
    assert_eq!(written, descriptor);
}

#[test]
fn test_second_run_is_idempotent() {
    let dir = tempdir().unwrap();
    let layout = epub_tts_layout(dir.path());
    let descriptor = build_descriptor(OutputMode::Legacy);

    persist(&descriptor, &layout).unwrap();
    let first = fs::read(&layout.descriptor_path).unwrap();
    persist(&descriptor, &layout).unwrap();
    let second = fs::read(&layout.descriptor_path).unwrap();

    assert_eq!(first, second);
    let mut entries: Vec<_> = fs::read_dir(&layout.root)
        .unwrap()
        .map(|entry| entry.unwrap().file_name().into_string().unwrap())
        .collect();
    entries.sort();
    assert_eq!(entries, ["project.pbxproj", "xcshareddata", "xcuserdata"]);
    assert_eq!(fs::read_dir(&layout.user_data_dir).unwrap().count(), 0);
    assert_eq!(fs::read_dir(&layout.schemes_dir).unwrap().count(), 0);
}

#[test]
fn test_existing_descriptor_is_replaced() {
    let dir = tempdir().unwrap();
    let layout = epub_tts_layout(dir.path());
    fs::create_dir_all(&layout.root).unwrap();
    fs::write(
        &layout.descriptor_path,
        "stale content that is much longer than nothing at all\n".repeat(500),
    )
    .unwrap();

    let descriptor = build_descriptor(OutputMode::Legacy);
    persist(&descriptor, &layout).unwrap();

    assert_eq!(fs::read_to_string(&layout.descriptor_path).unwrap(), descriptor);
}

#[test]
fn test_directory_collision_fails_without_descriptor() {
    let dir = tempdir().unwrap();
    let layout = epub_tts_layout(dir.path());
    // A regular file where the bundle directory should go.
    fs::write(&layout.root, b"not a directory").unwrap();

    let err = persist(&build_descriptor(OutputMode::Legacy), &layout).unwrap_err();

    let PersistError::Io { operation, path, .. } = &err;
    assert_eq!(*operation, "create directory");
    assert_eq!(path, &layout.root);
    assert!(layout.root.is_file());
    assert!(!layout.descriptor_path.exists());
}

#[test]
fn test_nested_directory_collision_fails_without_descriptor() {
    let dir = tempdir().unwrap();
    let layout = epub_tts_layout(dir.path());
    fs::create_dir_all(&layout.root).unwrap();
    fs::write(layout.root.join("xcshareddata"), b"").unwrap();

    let err = persist(&build_descriptor(OutputMode::Legacy), &layout).unwrap_err();

    assert_eq!(err.path(), layout.schemes_dir.as_path());
    // Directories created before the failure are left in place.
    assert!(layout.user_data_dir.is_dir());
    assert!(!layout.descriptor_path.exists());
}

#[cfg(unix)]
mod permissions {
    use std::fs;
    use std::os::unix::fs::PermissionsExt;
    use std::path::Path;

    use tempfile::tempdir;
    use xcproj_core::{OutputMode, PersistError, build_descriptor, persist};

    use super::epub_tts_layout;

    fn set_mode(path: &Path, mode: u32) {
        fs::set_permissions(path, fs::Permissions::from_mode(mode)).unwrap();
    }

    /// Privileged users ignore directory modes; those runs have nothing to check.
    fn is_writable(dir: &Path) -> bool {
        let marker = dir.join(".writable");
        let writable = fs::write(&marker, b"").is_ok();
        let _ = fs::remove_file(&marker);
        writable
    }

    #[test]
    fn test_read_only_parent_fails_without_descriptor() {
        let dir = tempdir().unwrap();
        let parent = dir.path().join("locked");
        fs::create_dir(&parent).unwrap();
        set_mode(&parent, 0o555);
        if is_writable(&parent) {
            set_mode(&parent, 0o755);
            return;
        }
        let layout = epub_tts_layout(&parent);

        let result = persist(&build_descriptor(OutputMode::Legacy), &layout);
        set_mode(&parent, 0o755);

        let err = result.unwrap_err();
        let PersistError::Io { operation, path, source } = &err;
        assert_eq!(*operation, "create directory");
        assert_eq!(path, &layout.root);
        assert_eq!(source.kind(), std::io::ErrorKind::PermissionDenied);
        assert!(!layout.root.exists());
        assert!(!layout.descriptor_path.exists());
    }

    #[test]
    fn test_read_only_bundle_fails_on_write() {
        let dir = tempdir().unwrap();
        let layout = epub_tts_layout(dir.path());
        for directory in layout.directories() {
            fs::create_dir_all(directory).unwrap();
        }
        set_mode(&layout.root, 0o555);
        if is_writable(&layout.root) {
            set_mode(&layout.root, 0o755);
            return;
        }

        let result = persist(&build_descriptor(OutputMode::Corrected), &layout);
        set_mode(&layout.root, 0o755);

        let err = result.unwrap_err();
        let PersistError::Io { operation, .. } = &err;
        assert_eq!(*operation, "write");
        assert_eq!(err.path(), layout.descriptor_path.as_path());
        assert!(!layout.descriptor_path.exists());
    }
}
