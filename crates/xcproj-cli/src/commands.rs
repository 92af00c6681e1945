//! Project generation command.

use std::path::PathBuf;

use anyhow::{Result, anyhow};
use tracing::{debug, info, info_span, warn};

use xcproj_core::{
    Generator, OutputMode, ProjectLayout, check_structure, descriptor_digest, persist,
};

/// Options collected from the command line.
#[derive(Debug, Clone)]
pub struct GenerateOptions {
    /// Directory receiving the `.xcodeproj` bundle.
    pub output_dir: PathBuf,
    pub mode: OutputMode,
    /// Build the descriptor but do not write anything.
    pub dry_run: bool,
    /// Run the structural checks before writing.
    pub check: bool,
}

impl Default for GenerateOptions {
    fn default() -> Self {
        Self {
            output_dir: PathBuf::from("."),
            mode: OutputMode::Legacy,
            dry_run: false,
            check: false,
        }
    }
}

/// What a generation run produced.
#[derive(Debug)]
pub struct GenerateOutcome {
    /// Directory name of the bundle, e.g. `epubTTS.xcodeproj`.
    pub bundle_name: String,
    pub layout: ProjectLayout,
    pub descriptor: String,
    pub digest: String,
    /// False for dry runs.
    pub written: bool,
}

impl GenerateOutcome {
    /// The line printed after a successful write.
    pub fn confirmation(&self) -> String {
        format!("✅ Xcode project created: {}", self.bundle_name)
    }
}

/// Build the descriptor and, unless this is a dry run, write the bundle.
pub fn run_generate(options: &GenerateOptions) -> Result<GenerateOutcome> {
    let generator = Generator::epub_tts(options.mode);
    let config = generator.config();
    let span = info_span!(
        "generate",
        project = config.name,
        mode = generator.mode().as_str()
    );
    let _guard = span.enter();

    let bundle_name = config.bundle_dir_name();
    let layout = ProjectLayout::new(&options.output_dir, &bundle_name);
    let descriptor = generator.build_descriptor();
    let digest = descriptor_digest(&descriptor);
    info!(bytes = descriptor.len(), sha256 = %digest, "built descriptor");

    if options.check {
        let summary = check_structure(&descriptor)
            .map_err(|error| anyhow!("generated descriptor is not well-formed: {error}"))?;
        debug!(
            root_object = %summary.root_object,
            objects = summary.object_count,
            "structure check passed"
        );
        for id in &summary.duplicate_ids {
            warn!(id = %id, "object identifier declared more than once");
        }
    } else if options.mode == OutputMode::Legacy {
        note_legacy_products_group(&generator);
    }

    if options.dry_run {
        info!(path = %layout.root.display(), "dry run, nothing written");
        return Ok(GenerateOutcome {
            bundle_name,
            layout,
            descriptor,
            digest,
            written: false,
        });
    }

    persist(&descriptor, &layout)?;
    info!(path = %layout.root.display(), "project bundle ready");

    Ok(GenerateOutcome {
        bundle_name,
        layout,
        descriptor,
        digest,
        written: true,
    })
}

fn note_legacy_products_group(generator: &Generator) {
    let id = generator.product_file_id();
    if id == generator.ids().products_group {
        info!(
            id = %id,
            "legacy output: Products group lists itself and shares its id with the .app reference"
        );
    }
}
