//! Compiled-in project constants and generation options.

/// How the Products group and the `.app` file reference are emitted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputMode {
    /// Byte-for-byte reproduction of the historical descriptor.
    ///
    /// The Products group lists itself as its only child, the `.app` file
    /// reference shares the Products group identifier, and the iPhone
    /// orientation list of the Debug target keeps its `LandscapeLe ft` typo.
    #[default]
    Legacy,
    /// The `.app` file reference gets its own identifier and the Products
    /// group lists it as its child.
    Corrected,
}

impl OutputMode {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Legacy => "legacy",
            Self::Corrected => "corrected",
        }
    }
}

/// Scalar values interpolated into the descriptor.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ProjectConfig {
    pub name: &'static str,
    pub bundle_identifier: &'static str,
    pub deployment_target: &'static str,
    pub swift_version: &'static str,
    pub cxx_dialect: &'static str,
    pub marketing_version: &'static str,
    pub current_project_version: &'static str,
    pub archive_version: u32,
    pub object_version: u32,
    pub compatibility_version: &'static str,
    pub created_on_tools_version: &'static str,
    /// Value of both `LastSwiftUpdateCheck` and `LastUpgradeCheck`.
    pub last_upgrade_check: u32,
}

impl ProjectConfig {
    pub const EPUB_TTS: Self = Self {
        name: "epubTTS",
        bundle_identifier: "com.ulrichfrank.epubtts",
        deployment_target: "15.0",
        swift_version: "5.9",
        cxx_dialect: "c++20",
        marketing_version: "1.0",
        current_project_version: "1",
        archive_version: 1,
        object_version: 56,
        compatibility_version: "Xcode 14.0",
        created_on_tools_version: "15.0",
        last_upgrade_check: 1500,
    };

    /// File name of the built application bundle.
    pub fn product_file_name(&self) -> String {
        format!("{}.app", self.name)
    }

    /// Directory name of the project bundle.
    pub fn bundle_dir_name(&self) -> String {
        format!("{}.xcodeproj", self.name)
    }
}

impl Default for ProjectConfig {
    fn default() -> Self {
        Self::EPUB_TTS
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_derived_names() {
        let config = ProjectConfig::EPUB_TTS;
        assert_eq!(config.product_file_name(), "epubTTS.app");
        assert_eq!(config.bundle_dir_name(), "epubTTS.xcodeproj");
    }

    #[test]
    fn test_default_mode_is_legacy() {
        assert_eq!(OutputMode::default(), OutputMode::Legacy);
        assert_eq!(OutputMode::Corrected.as_str(), "corrected");
    }
}
