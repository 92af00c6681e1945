//! Build-setting tables for the four build configurations.

use std::collections::BTreeMap;

use crate::options::{OutputMode, ProjectConfig};
use crate::plist::PlistWriter;

const IPAD_ORIENTATIONS: &str = "UIInterfaceOrientationPortrait UIInterfaceOrientationPortraitUpsideDown UIInterfaceOrientationLandscapeLeft UIInterfaceOrientationLandscapeRight";
const IPHONE_ORIENTATIONS: &str = "UIInterfaceOrientationPortrait UIInterfaceOrientationLandscapeLeft UIInterfaceOrientationLandscapeRight";
const IPHONE_ORIENTATIONS_LEGACY_DEBUG: &str = "UIInterfaceOrientationPortrait UIInterfaceOrientationLandscapeLe ft UIInterfaceOrientationLandscapeRight";

/// Debug or Release.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Configuration {
    Debug,
    Release,
}

impl Configuration {
    pub const ALL: [Self; 2] = [Self::Debug, Self::Release];

    pub fn name(self) -> &'static str {
        match self {
            Self::Debug => "Debug",
            Self::Release => "Release",
        }
    }
}

/// A build-setting value.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SettingValue {
    Scalar(String),
    List(Vec<String>),
}

impl From<&str> for SettingValue {
    fn from(value: &str) -> Self {
        Self::Scalar(value.to_string())
    }
}

impl<const N: usize> From<[&str; N]> for SettingValue {
    fn from(values: [&str; N]) -> Self {
        Self::List(values.iter().map(|v| (*v).to_string()).collect())
    }
}

/// Build settings keyed by name; written in byte-wise key order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BuildSettings {
    entries: BTreeMap<&'static str, SettingValue>,
}

impl BuildSettings {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set(&mut self, key: &'static str, value: impl Into<SettingValue>) -> &mut Self {
        self.entries.insert(key, value.into());
        self
    }

    pub fn get(&self, key: &str) -> Option<&SettingValue> {
        self.entries.get(key)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn keys(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.entries.keys().copied()
    }

    /// Write the settings as a `buildSettings = { ... };` block.
    pub fn write_to(&self, writer: &mut PlistWriter) {
        writer.dict("buildSettings", |w| {
            for (key, value) in &self.entries {
                match value {
                    SettingValue::Scalar(value) => w.assign(key, value),
                    SettingValue::List(items) => w.list(key, items),
                };
            }
        });
    }
}

/// Settings shared by every target of the project.
pub fn project_settings(config: &ProjectConfig, configuration: Configuration) -> BuildSettings {
    let mut settings = BuildSettings::new();
    settings
        .set("ALWAYS_SEARCH_USER_PATHS", "NO")
        .set("CLANG_ANALYZER_NONNULL", "YES")
        .set("CLANG_ANALYZER_NUMBER_OBJECT_CONVERSION", "YES_AGGRESSIVE")
        .set("CLANG_CXX_LANGUAGE_DIALECT", config.cxx_dialect)
        .set("CLANG_CXX_LIBRARY", "libc++")
        .set("CLANG_ENABLE_MODULES", "YES")
        .set("CLANG_ENABLE_OBJC_ARC", "YES")
        .set("CLANG_WARN_BLOCK_CAPTURE_AUTORELEASING", "YES")
        .set("CLANG_WARN_BOOL_CONVERSION", "YES")
        .set("CLANG_WARN_COMMA", "YES")
        .set("CLANG_WARN_CONSTANT_CONVERSION", "YES")
        .set("CLANG_WARN_DEPRECATED_OBJC_IMPLEMENTATIONS", "YES")
        .set("CLANG_WARN_DIRECT_OBJC_ISA_USAGE", "YES_ERROR")
        .set("CLANG_WARN_DOCUMENTATION_COMMENTS", "YES")
        .set("CLANG_WARN_EMPTY_BODY", "YES")
        .set("CLANG_WARN_ENUM_CONVERSION", "YES")
        .set("CLANG_WARN_INFINITE_RECURSION", "YES")
        .set("CLANG_WARN_INT_CONVERSION", "YES")
        .set("CLANG_WARN_NON_LITERAL_NULL_CONVERSION", "YES")
        .set("CLANG_WARN_OBJC_IMPLICIT_RETAIN_SELF", "YES")
        .set("CLANG_WARN_OBJC_LITERAL_CONVERSION", "YES")
        .set("CLANG_WARN_OBJC_ROOT_CLASS", "YES_ERROR")
        .set("CLANG_WARN_QUOTED_INCLUDE_IN_FRAMEWORK_HEADER", "YES")
        .set("CLANG_WARN_RANGE_LOOP_ANALYSIS", "YES")
        .set("CLANG_WARN_STRICT_PROTOTYPES", "YES")
        .set("CLANG_WARN_SUSPICIOUS_MOVE", "YES")
        .set("CLANG_WARN_SUSPICIOUS_MOVES", "YES")
        .set("CLANG_WARN_UNREACHABLE_CODE", "YES")
        .set("CLANG_WARN__DUPLICATE_METHOD_MATCH", "YES")
        .set("COPY_PHASE_STRIP", "NO")
        .set("ENABLE_STRICT_OBJC_MSGSEND", "YES")
        .set("GCC_C_LANGUAGE_DIALECT", "gnu99")
        .set("GCC_NO_COMMON_BLOCKS", "YES")
        .set("GCC_WARN_64_TO_32_BIT_CONVERSION", "YES")
        .set("GCC_WARN_ABOUT_RETURN_TYPE", "YES_ERROR")
        .set("GCC_WARN_UNDECLARED_SELECTOR", "YES")
        .set("GCC_WARN_UNINITIALIZED_AUTOS", "YES_AGGRESSIVE")
        .set("GCC_WARN_UNUSED_FUNCTION", "YES")
        .set("GCC_WARN_UNUSED_VARIABLE", "YES")
        .set("IPHONEOS_DEPLOYMENT_TARGET", config.deployment_target)
        .set("MTL_FAST_MATH", "YES")
        .set("SDKROOT", "iphoneos")
        .set("SWIFT_VERSION", config.swift_version);

    match configuration {
        Configuration::Debug => {
            settings
                .set("DEBUG_INFORMATION_FORMAT", "dwarf")
                .set("ENABLE_TESTABILITY", "YES")
                .set("GCC_DYNAMIC_NO_PIC", "NO")
                .set("GCC_OPTIMIZATION_LEVEL", "0")
                .set("GCC_PREPROCESSOR_DEFINITIONS", ["DEBUG=1", "$(inherited)"])
                .set("MTL_ENABLE_DEBUG_INFO", "INCLUDE_SOURCE")
                .set("ONLY_ACTIVE_ARCH", "YES")
                .set("SWIFT_ACTIVE_COMPILATION_CONDITIONS", "DEBUG")
                .set("SWIFT_OPTIMIZATION_LEVEL", "-Onone");
        }
        Configuration::Release => {
            settings
                .set("DEBUG_INFORMATION_FORMAT", "dwarf-with-dsym")
                .set("ENABLE_NS_ASSERTIONS", "NO")
                .set("MTL_ENABLE_DEBUG_INFO", "NO")
                .set("SWIFT_COMPILATION_MODE", "wholemodule")
                .set("SWIFT_OPTIMIZATION_LEVEL", "-O")
                .set("VALIDATE_PRODUCT", "YES");
        }
    }
    settings
}

/// Settings of the application target.
pub fn target_settings(
    config: &ProjectConfig,
    configuration: Configuration,
    mode: OutputMode,
) -> BuildSettings {
    let iphone_orientations = match (mode, configuration) {
        (OutputMode::Legacy, Configuration::Debug) => IPHONE_ORIENTATIONS_LEGACY_DEBUG,
        _ => IPHONE_ORIENTATIONS,
    };
    let emit_loc_strings = match configuration {
        Configuration::Debug => "YES",
        Configuration::Release => "NO",
    };

    let mut settings = BuildSettings::new();
    settings
        .set("ASSETCATALOG_COMPILER_APPICON_NAME", "AppIcon")
        .set("ASSETCATALOG_COMPILER_GLOBAL_ACCENT_COLOR_NAME", "AccentColor")
        .set("CODE_SIGN_STYLE", "Automatic")
        .set("CURRENT_PROJECT_VERSION", config.current_project_version)
        .set("GENERATE_INFOPLIST_FILE", "YES")
        .set("INFOPLIST_FILE", "Info.plist")
        .set("INFOPLIST_KEY_UIApplicationSceneManifest_Generation", "YES")
        .set("INFOPLIST_KEY_UIApplicationSupportsIndirectInputEvents", "YES")
        .set("INFOPLIST_KEY_UILaunchScreen_Generation", "YES")
        .set("INFOPLIST_KEY_UISupportedInterfaceOrientations_iPad", IPAD_ORIENTATIONS)
        .set(
            "INFOPLIST_KEY_UISupportedInterfaceOrientations_iPhone",
            iphone_orientations,
        )
        .set("IPHONEOS_DEPLOYMENT_TARGET", config.deployment_target)
        .set(
            "LD_RUNPATH_SEARCH_PATHS",
            ["$(inherited)", "@executable_path/Frameworks"],
        )
        .set("MARKETING_VERSION", config.marketing_version)
        .set("PRODUCT_BUNDLE_IDENTIFIER", config.bundle_identifier)
        .set("PRODUCT_NAME", "$(TARGET_NAME)")
        .set("SWIFT_EMIT_LOC_STRINGS", emit_loc_strings)
        .set("SWIFT_VERSION", config.swift_version)
        .set("TARGETED_DEVICE_FAMILY", "1,2");
    settings
}
