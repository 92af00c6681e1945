//! Integration tests for descriptor generation.

use xcproj_core::{
    Generator, IdentifierSet, OutputMode, Section, UTF8_MARKER, build_descriptor,
    check_structure, descriptor_digest,
};

const LEGACY_FIXTURE: &str = include_str!("fixtures/legacy.pbxproj");
const LEGACY_DIGEST: &str = "3490ee7eeba273431c776e70333699b37428fa3a9f2fbef9f37a9ce55148286b";

#[test]
fn test_legacy_matches_fixture_byte_for_byte() {
    let descriptor = build_descriptor(OutputMode::Legacy);
    assert_eq!(descriptor, LEGACY_FIXTURE);
    assert_eq!(descriptor_digest(&descriptor), LEGACY_DIGEST);
}

#[test]
fn test_generation_is_deterministic() {
    for mode in [OutputMode::Legacy, OutputMode::Corrected] {
        let first = build_descriptor(mode);
        let second = build_descriptor(mode);
        assert_eq!(first, second);
        assert_eq!(descriptor_digest(&first), descriptor_digest(&second));
    }
}

#[test]
fn test_first_line_is_utf8_marker() {
    let descriptor = build_descriptor(OutputMode::Legacy);
    assert_eq!(descriptor.lines().next(), Some(UTF8_MARKER));
    assert!(descriptor.ends_with("}\n"));
}

#[test]
fn test_sections_join_to_descriptor() {
    let generator = Generator::epub_tts(OutputMode::Corrected);
    let mut joined = generator.header();
    for section in Section::ALL {
        joined.push_str(&generator.section(section));
    }
    joined.push_str(&generator.footer());
    assert_eq!(joined, generator.build_descriptor());
}

#[test]
fn test_legacy_is_well_formed() {
    let summary = check_structure(&build_descriptor(OutputMode::Legacy)).unwrap();
    assert_eq!(summary.root_object, IdentifierSet::EPUB_TTS.project.as_str());
    assert_eq!(summary.object_count, 13);
    // The file reference and the Products group share one identifier.
    assert_eq!(
        summary.duplicate_ids,
        vec![IdentifierSet::EPUB_TTS.products_group.to_string()]
    );
}

#[test]
fn test_corrected_is_well_formed_without_duplicates() {
    let summary = check_structure(&build_descriptor(OutputMode::Corrected)).unwrap();
    assert_eq!(summary.root_object, IdentifierSet::EPUB_TTS.project.as_str());
    assert_eq!(summary.object_count, 13);
    assert!(summary.duplicate_ids.is_empty());
}

#[test]
fn test_single_root_object_assignment() {
    for mode in [OutputMode::Legacy, OutputMode::Corrected] {
        let descriptor = build_descriptor(mode);
        assert_eq!(descriptor.matches("rootObject = ").count(), 1);
        assert_eq!(descriptor.matches("isa = PBXProject;").count(), 1);
    }
}

#[test]
fn test_legacy_products_group_lists_itself() {
    let descriptor = build_descriptor(OutputMode::Legacy);
    assert!(descriptor.contains(
        "AAAAAAAAAAAAAAAAAAAA000A = {\nisa = PBXGroup;\nchildren = (\nAAAAAAAAAAAAAAAAAAAA000A,\n);\nname = Products;\n"
    ));
    assert!(descriptor.contains("LandscapeLe ft"));
    assert!(!descriptor.contains("AAAAAAAAAAAAAAAAAAAA000B"));
}

#[test]
fn test_corrected_products_group_lists_app() {
    let descriptor = build_descriptor(OutputMode::Corrected);
    assert!(descriptor.contains(
        "AAAAAAAAAAAAAAAAAAAA000A = {\nisa = PBXGroup;\nchildren = (\nAAAAAAAAAAAAAAAAAAAA000B,\n);\nname = Products;\n"
    ));
    assert!(
        descriptor.contains("AAAAAAAAAAAAAAAAAAAA000B /* epubTTS.app */ = {isa = PBXFileReference;")
    );
    assert!(descriptor.contains("productReference = AAAAAAAAAAAAAAAAAAAA000B;"));
    assert!(!descriptor.contains("LandscapeLe ft"));
}

#[test]
fn test_corrected_differs_from_legacy_only_in_known_lines() {
    let legacy = build_descriptor(OutputMode::Legacy);
    let corrected = build_descriptor(OutputMode::Corrected);
    let legacy_lines: Vec<_> = legacy.lines().collect();
    let corrected_lines: Vec<_> = corrected.lines().collect();
    assert_eq!(legacy_lines.len(), corrected_lines.len());

    let changed = legacy_lines
        .iter()
        .zip(&corrected_lines)
        .filter(|(a, b)| a != b)
        .count();
    // File reference, Products child, productReference, iPhone orientations.
    assert_eq!(changed, 4);
}
