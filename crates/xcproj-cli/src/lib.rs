//! CLI library components for the epubTTS project generator.

pub mod commands;
pub mod logging;
