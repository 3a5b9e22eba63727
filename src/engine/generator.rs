//! Script-to-audio generation.

use std::path::{Path, PathBuf};

use log::{info, warn};
use thiserror::Error;

use crate::backend::{Backend, BackendError, DEFAULT_ENGINE_URL};
use crate::manifest::{MANIFEST_FILE, ManifestEntry, ManifestError, write_manifest};
use crate::script::{ScriptError, Segment, read_script};

/// Errors that abort a whole generation run.
#[derive(Error, Debug)]
pub enum EngineError {
    #[error("Script error: {0}")]
    ScriptError(#[from] ScriptError),

    #[error("Failed to create output directory {path}: {source}")]
    OutputDir {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

/// Errors that fail a single segment; the run carries on with the next one.
#[derive(Error, Debug)]
pub enum SegmentError {
    #[error("Synthesis failed: {0}")]
    Synthesis(#[from] BackendError),

    #[error("Failed to write {path}: {source}")]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

/// Settings for a generation run.
#[derive(Debug, Clone, PartialEq)]
pub struct GeneratorConfig {
    /// Base URL of the synthesis engine.
    pub base_url: String,
    /// Engine speaker (style) id.
    pub speaker: u32,
    /// Speed multiplier written into every audio query.
    pub speed: f64,
    /// Directory receiving audio files and the manifest.
    pub output_dir: PathBuf,
    /// Prefix of `audio_file` paths recorded in the manifest.
    pub audio_prefix: String,
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_ENGINE_URL.to_string(),
            speaker: 3,
            speed: 1.3,
            output_dir: PathBuf::from("audio"),
            audio_prefix: "audio".to_string(),
        }
    }
}

impl GeneratorConfig {
    pub fn manifest_path(&self) -> PathBuf {
        self.output_dir.join(MANIFEST_FILE)
    }
}

/// A segment whose audio could not be produced.
#[derive(Debug)]
pub struct SegmentFailure {
    pub index: usize,
    pub error: SegmentError,
}

/// Outcome of a generation run.
///
/// Returned even when the manifest could not be written, so the caller can
/// still report how many files were produced.
#[derive(Debug)]
pub struct RunReport {
    pub segment_count: usize,
    pub generated: Vec<PathBuf>,
    pub failures: Vec<SegmentFailure>,
    pub output_dir: PathBuf,
    pub manifest_path: PathBuf,
    pub manifest_error: Option<ManifestError>,
}

/// Synthesize one piece of text: build the audio query, force its speed, render audio.
pub fn synthesize_segment<B: Backend + ?Sized>(
    backend: &B,
    text: &str,
    speaker: u32,
    speed: f64,
) -> Result<Vec<u8>, BackendError> {
    let mut config = backend.audio_query(text, speaker)?;
    config.set_speed(speed);

    backend.synthesis(&config, speaker)
}

/// Turns a script into numbered audio files plus a manifest.
pub struct Generator<B: Backend> {
    backend: B,
    config: GeneratorConfig,
}

impl<B: Backend> Generator<B> {
    /// Create a new generator.
    pub fn new(backend: B, config: GeneratorConfig) -> Self {
        Self { backend, config }
    }

    /// Generate audio for every segment of the script at `script_path`.
    ///
    /// Segments are processed one at a time in document order. A failing
    /// segment is logged and skipped; the manifest still lists it. A manifest
    /// write failure is carried in [`RunReport::manifest_error`].
    pub fn run(&self, script_path: &Path) -> Result<RunReport, EngineError> {
        let output_dir = &self.config.output_dir;
        std::fs::create_dir_all(output_dir).map_err(|source| EngineError::OutputDir {
            path: output_dir.clone(),
            source,
        })?;

        info!("Reading script: {}", script_path.display());
        let segments = Segment::enumerate(read_script(script_path)?);
        let total = segments.len();

        info!("Segments: {total}");
        info!("Speaker: {}", self.config.speaker);
        info!("Speed: {}x", self.config.speed);

        let mut generated = Vec::new();
        let mut failures = Vec::new();
        let mut entries = Vec::with_capacity(total);

        for segment in &segments {
            let file_name = segment.audio_file_name();
            info!("[{}/{total}] Generating...", segment.index + 1);
            info!("  Text: {}", segment.preview());

            match self.generate_segment(segment, &output_dir.join(&file_name)) {
                Ok(path) => {
                    info!("  Saved: {file_name}");
                    generated.push(path);
                }
                Err(error) => {
                    warn!(
                        "  Segment {} failed ({}): {error}",
                        segment.index,
                        segment.preview()
                    );
                    failures.push(SegmentFailure {
                        index: segment.index,
                        error,
                    });
                }
            }

            entries.push(ManifestEntry::new(
                segment.index,
                segment.text.clone(),
                &self.config.audio_prefix,
                &file_name,
            ));
        }

        let manifest_path = self.config.manifest_path();
        let manifest_error = write_manifest(&manifest_path, &entries).err();

        Ok(RunReport {
            segment_count: total,
            generated,
            failures,
            output_dir: output_dir.clone(),
            manifest_path,
            manifest_error,
        })
    }

    fn generate_segment(&self, segment: &Segment, path: &Path) -> Result<PathBuf, SegmentError> {
        let audio = synthesize_segment(
            &self.backend,
            &segment.text,
            self.config.speaker,
            self.config.speed,
        )?;

        std::fs::write(path, audio).map_err(|source| SegmentError::Write {
            path: path.to_path_buf(),
            source,
        })?;

        Ok(path.to_path_buf())
    }
}
