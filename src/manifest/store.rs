//! Manifest file storage and editing.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// File name of the manifest inside the output directory.
pub const MANIFEST_FILE: &str = "segments_info.json";

/// Errors that can occur while reading or editing a manifest.
#[derive(Error, Debug)]
pub enum ManifestError {
    #[error("Segment not found: {0}")]
    SegmentNotFound(usize),

    #[error("IO error on {path}: {source}")]
    IoError {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),
}

/// One manifest record, mapping a segment to its audio file.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ManifestEntry {
    pub index: usize,
    pub text: String,
    pub audio_file: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub duration_seconds: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub start_frame: Option<u64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub end_frame: Option<u64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub duration_frames: Option<u64>,
}

impl ManifestEntry {
    /// Create an entry without timeline information.
    ///
    /// `audio_prefix` is joined to `file_name` with `/`; an empty prefix keeps the bare name.
    pub fn new(index: usize, text: impl Into<String>, audio_prefix: &str, file_name: &str) -> Self {
        let prefix = audio_prefix.trim_end_matches('/');
        let audio_file = if prefix.is_empty() {
            file_name.to_string()
        } else {
            format!("{prefix}/{file_name}")
        };

        Self {
            index,
            text: text.into(),
            audio_file,
            duration_seconds: None,
            start_frame: None,
            end_frame: None,
            duration_frames: None,
        }
    }

    /// File name component of `audio_file`.
    pub fn audio_file_name(&self) -> &str {
        self.audio_file
            .rsplit('/')
            .next()
            .unwrap_or(&self.audio_file)
    }
}

/// Write the manifest as indented UTF-8 JSON, replacing any existing file.
pub fn write_manifest(path: &Path, entries: &[ManifestEntry]) -> Result<(), ManifestError> {
    let json = serde_json::to_string_pretty(entries)?;
    std::fs::write(path, json).map_err(|source| ManifestError::IoError {
        path: path.to_path_buf(),
        source,
    })
}

/// Load a manifest written by [`write_manifest`].
pub fn load_manifest(path: &Path) -> Result<Vec<ManifestEntry>, ManifestError> {
    let json = std::fs::read_to_string(path).map_err(|source| ManifestError::IoError {
        path: path.to_path_buf(),
        source,
    })?;
    let entries = serde_json::from_str(&json)?;

    Ok(entries)
}

/// Remove the entry with `index`, renumber the rest and close the timeline gap it leaves.
///
/// Entries after the removed one move back by its `duration_frames` plus
/// `gap_frames`. Entries without a timeline are only renumbered.
pub fn remove_segment(
    entries: &mut Vec<ManifestEntry>,
    index: usize,
    gap_frames: u64,
) -> Result<ManifestEntry, ManifestError> {
    let position = entries
        .iter()
        .position(|entry| entry.index == index)
        .ok_or(ManifestError::SegmentNotFound(index))?;

    let removed = entries.remove(position);
    let shift = removed
        .duration_frames
        .map(|frames| frames.saturating_add(gap_frames))
        .unwrap_or(0);

    for (i, entry) in entries.iter_mut().enumerate() {
        entry.index = i;

        if i >= position {
            entry.start_frame = entry.start_frame.map(|f| f.saturating_sub(shift));
            entry.end_frame = entry.end_frame.map(|f| f.saturating_sub(shift));
        }
    }

    Ok(removed)
}
