//! Fixed object identifiers used in the generated descriptor.

use std::fmt;

/// A 24-character object identifier as it appears in `project.pbxproj`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct ObjectId(&'static str);

impl ObjectId {
    pub const fn from_static(value: &'static str) -> Self {
        Self(value)
    }

    pub fn as_str(&self) -> &'static str {
        self.0
    }

    /// True when the identifier is 24 uppercase hexadecimal characters.
    pub fn is_well_formed(&self) -> bool {
        self.0.len() == 24
            && self
                .0
                .bytes()
                .all(|b| b.is_ascii_digit() || (b'A'..=b'F').contains(&b))
    }
}

impl fmt::Display for ObjectId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.0)
    }
}

/// The twelve identifiers naming every object of the descriptor.
///
/// These are never generated at runtime: the output must be identical on
/// every invocation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct IdentifierSet {
    pub project: ObjectId,
    pub target: ObjectId,
    pub project_config_list: ObjectId,
    pub target_config_list: ObjectId,
    pub project_debug: ObjectId,
    pub project_release: ObjectId,
    pub target_debug: ObjectId,
    pub target_release: ObjectId,
    pub frameworks_phase: ObjectId,
    pub sources_phase: ObjectId,
    pub main_group: ObjectId,
    pub products_group: ObjectId,
}

impl IdentifierSet {
    pub const EPUB_TTS: Self = Self {
        project: ObjectId::from_static("AAAAAAAAAAAAAAAAAAAA0001"),
        target: ObjectId::from_static("AAAAAAAAAAAAAAAAAAAA0002"),
        project_config_list: ObjectId::from_static("AAAAAAAAAAAAAAAAAAAA0003"),
        project_debug: ObjectId::from_static("AAAAAAAAAAAAAAAAAAAA0004"),
        target_debug: ObjectId::from_static("AAAAAAAAAAAAAAAAAAAA0005"),
        target_config_list: ObjectId::from_static("AAAAAAAAAAAAAAAAAAAA0006"),
        frameworks_phase: ObjectId::from_static("AAAAAAAAAAAAAAAAAAAA0007"),
        sources_phase: ObjectId::from_static("AAAAAAAAAAAAAAAAAAAA0008"),
        main_group: ObjectId::from_static("AAAAAAAAAAAAAAAAAAAA0009"),
        products_group: ObjectId::from_static("AAAAAAAAAAAAAAAAAAAA000A"),
        project_release: ObjectId::from_static("AAAAAAAAAAAAAAAAAAAA0010"),
        target_release: ObjectId::from_static("AAAAAAAAAAAAAAAAAAAA0011"),
    };

    /// Identifier given to the `.app` file reference in corrected output.
    ///
    /// Legacy output reuses `products_group` for the file reference instead.
    pub const PRODUCT_FILE: ObjectId = ObjectId::from_static("AAAAAAAAAAAAAAAAAAAA000B");

    /// All identifiers paired with the role they name.
    pub fn entries(&self) -> [(&'static str, ObjectId); 12] {
        [
            ("project", self.project),
            ("target", self.target),
            ("project_config_list", self.project_config_list),
            ("target_config_list", self.target_config_list),
            ("project_debug", self.project_debug),
            ("project_release", self.project_release),
            ("target_debug", self.target_debug),
            ("target_release", self.target_release),
            ("frameworks_phase", self.frameworks_phase),
            ("sources_phase", self.sources_phase),
            ("main_group", self.main_group),
            ("products_group", self.products_group),
        ]
    }
}

impl Default for IdentifierSet {
    fn default() -> Self {
        Self::EPUB_TTS
    }
}

#[cfg(test)]
mod tests {
    use std::collections::BTreeSet;

    use super::*;

    #[test]
    fn test_identifiers_are_unique() {
        let ids: BTreeSet<_> = IdentifierSet::EPUB_TTS
            .entries()
            .iter()
            .map(|(_, id)| *id)
            .collect();
        assert_eq!(ids.len(), 12);
        assert!(!ids.contains(&IdentifierSet::PRODUCT_FILE));
    }

    #[test]
    fn test_identifiers_are_well_formed() {
        for (role, id) in IdentifierSet::EPUB_TTS.entries() {
            assert!(id.is_well_formed(), "{role} has malformed id {id}");
        }
        assert!(IdentifierSet::PRODUCT_FILE.is_well_formed());
    }

    #[test]
    fn test_malformed_identifier() {
        assert!(!ObjectId::from_static("aaaa").is_well_formed());
        assert!(!ObjectId::from_static("AAAAAAAAAAAAAAAAAAAA000G").is_well_formed());
    }
}
