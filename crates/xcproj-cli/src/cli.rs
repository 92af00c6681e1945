//! CLI argument definitions for the project generator.

use std::path::PathBuf;

use clap::{Parser, ValueEnum};
use clap_verbosity_flag::{Verbosity, WarnLevel};
use colorchoice_clap::Color;
use xcproj_core::OutputMode;

#[derive(Parser)]
#[command(
    name = "create-xcode-project",
    version,
    about = "Create the epubTTS Xcode project bundle",
    long_about = "Write epubTTS.xcodeproj (project.pbxproj plus the xcuserdata and\n\
                  xcshareddata/xcschemes directories) into the output directory.\n\n\
                  Without arguments the bundle is created in the current directory."
)]
pub struct Cli {
    /// Directory in which epubTTS.xcodeproj is created.
    #[arg(long = "output-dir", value_name = "DIR", default_value = ".")]
    pub output_dir: PathBuf,

    /// Descriptor variant to write.
    ///
    /// `legacy` reproduces the historical file exactly, including a Products
    /// group that lists itself as its child. `corrected` gives the .app file
    /// reference its own identifier and lists it under Products.
    #[arg(long = "mode", value_enum, default_value = "legacy")]
    pub mode: ModeArg,

    /// Print the descriptor to stdout without touching the filesystem.
    #[arg(long = "dry-run")]
    pub dry_run: bool,

    /// Verify the descriptor's structure before writing it.
    #[arg(long = "check")]
    pub check: bool,

    /// Adjust log verbosity (-v for info, -vv for debug, -q for errors only).
    #[command(flatten)]
    pub verbosity: Verbosity<WarnLevel>,

    /// Control ANSI color output (auto, always, never).
    #[command(flatten)]
    pub color: Color,

    /// Explicit log level (overrides -v/-q flags).
    #[arg(long = "log-level", value_enum)]
    pub log_level: Option<LogLevelArg>,

    /// Log output format (pretty for human, json for machine parsing).
    #[arg(long = "log-format", value_enum, default_value = "pretty")]
    pub log_format: LogFormatArg,

    /// Write logs to a file instead of stderr.
    #[arg(long = "log-file", value_name = "PATH")]
    pub log_file: Option<PathBuf>,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum ModeArg {
    Legacy,
    Corrected,
}

impl From<ModeArg> for OutputMode {
    fn from(mode: ModeArg) -> Self {
        match mode {
            ModeArg::Legacy => OutputMode::Legacy,
            ModeArg::Corrected => OutputMode::Corrected,
        }
    }
}

/// CLI log level choices.
#[derive(Clone, Copy, Debug, ValueEnum)]
pub enum LogLevelArg {
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

/// CLI log format choices.
#[derive(Clone, Copy, Debug, ValueEnum)]
pub enum LogFormatArg {
    Pretty,
    Compact,
    Json,
}
