//! Xcode project descriptor generation for the epubTTS application.
//!
//! This crate builds the fixed `project.pbxproj` text for the epubTTS iOS
//! target and writes it, together with the companion directories Xcode
//! expects, into an `epubTTS.xcodeproj` bundle.
//!
//! Generation and persistence are separate steps:
//!
//! - [`Generator::build_descriptor`] is pure and deterministic.
//! - [`persist`] performs all filesystem effects.
//!
//! # Example
//!
//! ```no_run
//! use std::path::Path;
//! use xcproj_core::{Generator, OutputMode, ProjectLayout, persist};
//!
//! let generator = Generator::epub_tts(OutputMode::Legacy);
//! let descriptor = generator.build_descriptor();
//! let layout = ProjectLayout::new(Path::new("."), &generator.config().bundle_dir_name());
//! persist(&descriptor, &layout)?;
//! # Ok::<(), xcproj_core::PersistError>(())
//! ```

pub mod descriptor;
mod error;
mod hash;
pub mod ids;
pub mod options;
mod persist;
pub mod plist;
pub mod settings;
mod structure;

// === Error Types ===
pub use error::{PersistError, Result, StructureError};

// === Generation ===
pub use descriptor::{Generator, Section, UTF8_MARKER, build_descriptor};
pub use ids::{IdentifierSet, ObjectId};
pub use options::{OutputMode, ProjectConfig};

// === Persistence ===
pub use persist::{DESCRIPTOR_FILE_NAME, ProjectLayout, persist};

// === Checks ===
pub use hash::descriptor_digest;
pub use structure::{StructureSummary, check_structure};
