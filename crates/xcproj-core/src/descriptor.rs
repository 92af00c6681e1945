//! Descriptor generation.
//!
//! The descriptor is assembled from one text-building step per object
//! section, joined in [`Section::ALL`] order between a fixed header and
//! footer. Every step is pure: the same inputs always yield the same text.

use tracing::debug;

use crate::ids::{IdentifierSet, ObjectId};
use crate::options::{OutputMode, ProjectConfig};
use crate::plist::PlistWriter;
use crate::settings::{Configuration, project_settings, target_settings};

/// First line of every descriptor.
pub const UTF8_MARKER: &str = "// !$*UTF8*$!";

const BUILD_ACTION_MASK: &str = "2147483647";
const GROUP_SOURCE_TREE: &str = "<group>";
const APPLICATION_PRODUCT_TYPE: &str = "com.apple.product-type.application";

/// Object sections of the descriptor, in output order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Section {
    BuildFile,
    ContainerItemProxy,
    FileReference,
    FrameworksBuildPhase,
    Group,
    NativeTarget,
    Project,
    SourcesBuildPhase,
    BuildConfiguration,
    ConfigurationList,
}

impl Section {
    pub const ALL: [Self; 10] = [
        Self::BuildFile,
        Self::ContainerItemProxy,
        Self::FileReference,
        Self::FrameworksBuildPhase,
        Self::Group,
        Self::NativeTarget,
        Self::Project,
        Self::SourcesBuildPhase,
        Self::BuildConfiguration,
        Self::ConfigurationList,
    ];

    /// The `isa` name shared by the objects of this section.
    pub fn isa(self) -> &'static str {
        match self {
            Self::BuildFile => "PBXBuildFile",
            Self::ContainerItemProxy => "PBXContainerItemProxy",
            Self::FileReference => "PBXFileReference",
            Self::FrameworksBuildPhase => "PBXFrameworksBuildPhase",
            Self::Group => "PBXGroup",
            Self::NativeTarget => "PBXNativeTarget",
            Self::Project => "PBXProject",
            Self::SourcesBuildPhase => "PBXSourcesBuildPhase",
            Self::BuildConfiguration => "XCBuildConfiguration",
            Self::ConfigurationList => "XCConfigurationList",
        }
    }
}

/// Builds the `project.pbxproj` text for one fixed project.
#[derive(Debug, Clone, Copy, Default)]
pub struct Generator {
    config: ProjectConfig,
    ids: IdentifierSet,
    mode: OutputMode,
}

impl Generator {
    pub fn new(config: ProjectConfig, ids: IdentifierSet, mode: OutputMode) -> Self {
        Self { config, ids, mode }
    }

    /// Generator for the epubTTS project in the given output mode.
    pub fn epub_tts(mode: OutputMode) -> Self {
        Self::new(ProjectConfig::EPUB_TTS, IdentifierSet::EPUB_TTS, mode)
    }

    pub fn config(&self) -> &ProjectConfig {
        &self.config
    }

    pub fn ids(&self) -> &IdentifierSet {
        &self.ids
    }

    pub fn mode(&self) -> OutputMode {
        self.mode
    }

    /// Identifier of the `.app` file reference.
    pub fn product_file_id(&self) -> ObjectId {
        match self.mode {
            OutputMode::Legacy => self.ids.products_group,
            OutputMode::Corrected => IdentifierSet::PRODUCT_FILE,
        }
    }

    /// Build the complete descriptor.
    pub fn build_descriptor(&self) -> String {
        let mut text = self.header();
        for section in Section::ALL {
            let body = self.section(section);
            debug!(section = section.isa(), bytes = body.len(), "built section");
            text.push_str(&body);
        }
        text.push_str(&self.footer());
        text
    }

    /// Archive header up to and including the opening of `objects`.
    pub fn header(&self) -> String {
        let mut w = PlistWriter::new();
        w.line(UTF8_MARKER)
            .line("{")
            .assign("archiveVersion", self.config.archive_version.to_string())
            .dict("classes", |_| {})
            .assign("objectVersion", self.config.object_version.to_string())
            .line("objects = {");
        w.finish()
    }

    /// Closing of `objects`, the `rootObject` pointer and the final brace.
    pub fn footer(&self) -> String {
        let mut w = PlistWriter::new();
        w.line("};")
            .assign("rootObject", self.ids.project.as_str())
            .line("}");
        w.finish()
    }

    /// Text of a single section, including its begin/end markers.
    pub fn section(&self, section: Section) -> String {
        let mut w = PlistWriter::new();
        w.section(section.isa(), |w| match section {
            Section::BuildFile | Section::ContainerItemProxy => {}
            Section::FileReference => self.write_file_references(w),
            Section::FrameworksBuildPhase => {
                self.write_build_phase(w, section, self.ids.frameworks_phase, "Frameworks");
            }
            Section::Group => self.write_groups(w),
            Section::NativeTarget => self.write_native_target(w),
            Section::Project => self.write_project(w),
            Section::SourcesBuildPhase => {
                self.write_build_phase(w, section, self.ids.sources_phase, "Sources");
            }
            Section::BuildConfiguration => self.write_build_configurations(w),
            Section::ConfigurationList => self.write_configuration_lists(w),
        });
        w.finish()
    }

    fn write_file_references(&self, w: &mut PlistWriter) {
        let product = self.config.product_file_name();
        w.inline_dict(
            &format!("{} /* {product} */", self.product_file_id()),
            &[
                ("isa", Section::FileReference.isa()),
                ("explicitFileType", "wrapper.application"),
                ("includeInIndex", "0"),
                ("path", product.as_str()),
                ("sourceTree", "BUILT_PRODUCTS_DIR"),
            ],
        );
    }

    fn write_build_phase(&self, w: &mut PlistWriter, section: Section, id: ObjectId, name: &str) {
        w.dict(&format!("{id} /* {name} */"), |w| {
            w.assign("isa", section.isa())
                .assign("buildActionMask", BUILD_ACTION_MASK)
                .list("files", Vec::<&str>::new())
                .assign("runOnlyForDeploymentPostprocessing", "0");
        });
    }

    fn write_groups(&self, w: &mut PlistWriter) {
        let products_group = self.ids.products_group;
        // Legacy output lists the Products group as its own child.
        let products_child = match self.mode {
            OutputMode::Legacy => products_group,
            OutputMode::Corrected => self.product_file_id(),
        };

        w.dict(self.ids.main_group.as_str(), |w| {
            w.assign("isa", Section::Group.isa())
                .list("children", [products_group.as_str()])
                .assign("sourceTree", GROUP_SOURCE_TREE);
        });
        w.dict(products_group.as_str(), |w| {
            w.assign("isa", Section::Group.isa())
                .list("children", [products_child.as_str()])
                .assign("name", "Products")
                .assign("sourceTree", GROUP_SOURCE_TREE);
        });
    }

    fn write_native_target(&self, w: &mut PlistWriter) {
        let name = self.config.name;
        w.dict(&format!("{} /* {name} */", self.ids.target), |w| {
            w.assign("isa", Section::NativeTarget.isa())
                .assign("buildConfigurationList", self.ids.target_config_list.as_str())
                .list(
                    "buildPhases",
                    [self.ids.sources_phase.as_str(), self.ids.frameworks_phase.as_str()],
                )
                .list("buildRules", Vec::<&str>::new())
                .list("dependencies", Vec::<&str>::new())
                .assign("name", name)
                .assign("productName", name)
                .assign("productReference", self.product_file_id().as_str())
                .assign("productType", APPLICATION_PRODUCT_TYPE);
        });
    }

    fn write_project(&self, w: &mut PlistWriter) {
        let upgrade_check = self.config.last_upgrade_check.to_string();
        w.dict(&format!("{} /* Project object */", self.ids.project), |w| {
            w.assign("isa", Section::Project.isa());
            w.dict("attributes", |w| {
                w.assign("BuildIndependentTargetsInParallel", "1")
                    .assign("LastSwiftUpdateCheck", &upgrade_check)
                    .assign("LastUpgradeCheck", &upgrade_check)
                    .dict("TargetAttributes", |w| {
                        w.dict(self.ids.target.as_str(), |w| {
                            w.assign(
                                "CreatedOnToolsVersion",
                                self.config.created_on_tools_version,
                            );
                        });
                    });
            });
            w.assign("buildConfigurationList", self.ids.project_config_list.as_str())
                .assign("compatibilityVersion", self.config.compatibility_version)
                .assign("developmentRegion", "en")
                .assign("hasScannedForEncodings", "0")
                .list("knownRegions", ["en", "Base"])
                .assign("mainGroup", self.ids.main_group.as_str())
                .assign("productRefGroup", self.ids.products_group.as_str())
                .assign("projectDirPath", "")
                .assign("projectRoot", "")
                .list("targets", [self.ids.target.as_str()]);
        });
    }

    fn write_build_configurations(&self, w: &mut PlistWriter) {
        let project_ids = [self.ids.project_debug, self.ids.project_release];
        for (id, configuration) in project_ids.into_iter().zip(Configuration::ALL) {
            let settings = project_settings(&self.config, configuration);
            write_build_configuration(w, id, configuration, |w| settings.write_to(w));
        }
        let target_ids = [self.ids.target_debug, self.ids.target_release];
        for (id, configuration) in target_ids.into_iter().zip(Configuration::ALL) {
            let settings = target_settings(&self.config, configuration, self.mode);
            write_build_configuration(w, id, configuration, |w| settings.write_to(w));
        }
    }

    fn write_configuration_lists(&self, w: &mut PlistWriter) {
        let name = self.config.name;
        let lists = [
            (
                self.ids.project_config_list,
                Section::Project.isa(),
                [self.ids.project_debug, self.ids.project_release],
            ),
            (
                self.ids.target_config_list,
                Section::NativeTarget.isa(),
                [self.ids.target_debug, self.ids.target_release],
            ),
        ];
        for (id, owner, configurations) in lists {
            let key = format!("{id} /* Build configuration list for {owner} \"{name}\" */");
            w.dict(&key, |w| {
                w.assign("isa", Section::ConfigurationList.isa())
                    .list("buildConfigurations", configurations.map(|c| c.as_str()))
                    .assign("defaultConfigurationIsVisible", "0")
                    .assign("defaultConfigurationName", Configuration::Release.name());
            });
        }
    }
}

fn write_build_configuration(
    w: &mut PlistWriter,
    id: ObjectId,
    configuration: Configuration,
    settings: impl FnOnce(&mut PlistWriter),
) {
    let name = configuration.name();
    w.dict(&format!("{id} /* {name} */"), |w| {
        w.assign("isa", Section::BuildConfiguration.isa());
        settings(w);
        w.assign("name", name);
    });
}

/// Build the epubTTS descriptor in the given output mode.
pub fn build_descriptor(mode: OutputMode) -> String {
    Generator::epub_tts(mode).build_descriptor()
}
