//! Integration tests for the generate command.

use std::fs;

use tempfile::tempdir;
use xcproj_cli::commands::{GenerateOptions, run_generate};
use xcproj_core::OutputMode;

fn options_in(dir: &std::path::Path) -> GenerateOptions {
    GenerateOptions {
        output_dir: dir.to_path_buf(),
        ..GenerateOptions::default()
    }
}

#[test]
fn test_generate_writes_bundle() {
    let dir = tempdir().unwrap();

    let outcome = run_generate(&options_in(dir.path())).unwrap();

    assert!(outcome.written);
    assert_eq!(outcome.bundle_name, "epubTTS.xcodeproj");
    assert_eq!(
        outcome.digest,
        "3490ee7eeba273431c776e70333699b37428fa3a9f2fbef9f37a9ce55148286b"
    );
    let written = fs::read_to_string(dir.path().join("epubTTS.xcodeproj/project.pbxproj")).unwrap();
    assert_eq!(written, outcome.descriptor);
    assert!(dir.path().join("epubTTS.xcodeproj/xcuserdata").is_dir());
    assert!(dir.path().join("epubTTS.xcodeproj/xcshareddata/xcschemes").is_dir());
}

#[test]
fn test_repeated_runs_produce_identical_files() {
    let dir = tempdir().unwrap();
    let options = options_in(dir.path());

    let first = run_generate(&options).unwrap();
    let second = run_generate(&options).unwrap();

    assert_eq!(first.digest, second.digest);
    assert_eq!(
        fs::read_to_string(&second.layout.descriptor_path).unwrap(),
        first.descriptor
    );
}

#[test]
fn test_checked_corrected_run() {
    let dir = tempdir().unwrap();
    let options = GenerateOptions {
        mode: OutputMode::Corrected,
        check: true,
        ..options_in(dir.path())
    };

    let outcome = run_generate(&options).unwrap();

    assert!(outcome.written);
    assert!(outcome.descriptor.contains("productReference = AAAAAAAAAAAAAAAAAAAA000B;"));
}

#[test]
fn test_filesystem_error_is_reported() {
    let dir = tempdir().unwrap();
    fs::write(dir.path().join("epubTTS.xcodeproj"), b"").unwrap();

    let err = run_generate(&options_in(dir.path())).unwrap_err();

    assert!(err.to_string().starts_with("failed to create directory "));
    assert!(dir.path().join("epubTTS.xcodeproj").is_file());
}
