//! CLI argument definitions and parsing.

use std::path::PathBuf;

use clap::Parser;

use crate::backend::DEFAULT_ENGINE_URL;
use crate::engine::GeneratorConfig;
use crate::manifest::{MANIFEST_FILE, Timeline};

/// Batch text-to-speech for scripts.
#[derive(Parser, Debug)]
#[command(name = "script-voice-rs")]
#[command(about = "Generate one audio file per script paragraph with a VOICEVOX-compatible engine")]
#[command(version)]
pub struct Args {
    /// Script text file; paragraphs are separated by blank lines
    #[arg(short, long, default_value = "script.txt")]
    pub input: PathBuf,

    /// Directory for audio files and the manifest
    #[arg(short, long, default_value = "audio")]
    pub output_dir: PathBuf,

    /// Synthesis engine base URL
    #[arg(long, env = "VOICEVOX_URL", default_value = DEFAULT_ENGINE_URL)]
    pub url: String,

    /// Speaker (style) id
    #[arg(long, env = "VOICEVOX_SPEAKER", default_value = "3")]
    pub speaker: u32,

    /// Speech speed multiplier
    #[arg(short, long, default_value = "1.3")]
    pub speed: f64,

    /// Prefix for audio paths recorded in the manifest
    #[arg(long, default_value = "audio")]
    pub audio_prefix: String,

    /// Annotate an existing manifest with audio durations and frame positions
    #[arg(long)]
    pub update_durations: bool,

    /// Remove the segment with this index from an existing manifest
    #[arg(long, value_name = "INDEX")]
    pub remove_segment: Option<usize>,

    /// Manifest to edit (defaults to <OUTPUT_DIR>/segments_info.json)
    #[arg(long)]
    pub manifest: Option<PathBuf>,

    /// Video frame rate for duration annotation
    #[arg(long, default_value = "30", value_parser = clap::value_parser!(u32).range(1..))]
    pub fps: u32,

    /// Frames of silence between segments
    #[arg(long, default_value = "10")]
    pub gap_frames: u64,

    /// Enable verbose output
    #[arg(short, long)]
    pub verbose: bool,
}

impl Args {
    /// Build the immutable generation settings from the parsed flags.
    pub fn generator_config(&self) -> GeneratorConfig {
        GeneratorConfig {
            base_url: self.url.clone(),
            speaker: self.speaker,
            speed: self.speed,
            output_dir: self.output_dir.clone(),
            audio_prefix: self.audio_prefix.clone(),
        }
    }

    pub fn timeline(&self) -> Timeline {
        Timeline {
            fps: self.fps,
            gap_frames: self.gap_frames,
        }
    }

    /// Manifest path for the editing commands.
    pub fn manifest_path(&self) -> PathBuf {
        self.manifest
            .clone()
            .unwrap_or_else(|| self.output_dir.join(MANIFEST_FILE))
    }
}
