//! Audio durations and frame positions for manifest entries.

use std::path::Path;

use log::warn;

use super::store::ManifestEntry;

/// Frame rate and spacing used to lay segments out on a video timeline.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Timeline {
    pub fps: u32,
    /// Frames of silence between consecutive segments.
    pub gap_frames: u64,
}

impl Default for Timeline {
    fn default() -> Self {
        Self {
            fps: 30,
            gap_frames: 10,
        }
    }
}

impl Timeline {
    /// Number of frames needed to cover `seconds`, rounded up.
    ///
    /// Non-finite or negative durations take no frames.
    pub fn frames_for(&self, seconds: f64) -> u64 {
        let frames = (seconds * f64::from(self.fps)).ceil();
        if frames.is_finite() && frames > 0.0 {
            frames as u64
        } else {
            0
        }
    }

    /// Convert a frame count back to seconds.
    pub fn seconds_for(&self, frames: u64) -> f64 {
        if self.fps == 0 {
            return 0.0;
        }
        frames as f64 / f64::from(self.fps)
    }
}

/// Duration of a WAV file in seconds, read from its header.
pub fn wav_duration(path: &Path) -> Result<f64, hound::Error> {
    let reader = hound::WavReader::open(path)?;
    let spec = reader.spec();
    if spec.sample_rate == 0 {
        return Err(hound::Error::FormatError("sample rate is zero"));
    }

    Ok(f64::from(reader.duration()) / f64::from(spec.sample_rate))
}

/// Fill in durations and frame positions for every entry.
///
/// Audio is looked up in `audio_dir` by the file name of each entry's
/// `audio_file`. Missing or unreadable audio counts as zero length.
/// Returns the total number of frames, including the trailing gap.
pub fn annotate_durations(entries: &mut [ManifestEntry], audio_dir: &Path, timeline: Timeline) -> u64 {
    let mut cursor: u64 = 0;

    for entry in entries.iter_mut() {
        let path = audio_dir.join(entry.audio_file_name());
        let duration = wav_duration(&path).unwrap_or_else(|e| {
            warn!("Could not read {}: {e}", path.display());
            0.0
        });

        let frames = timeline.frames_for(duration);
        entry.duration_seconds = Some(duration);
        let end = cursor.saturating_add(frames);
        entry.start_frame = Some(cursor);
        entry.end_frame = Some(end);
        entry.duration_frames = Some(frames);

        cursor = end.saturating_add(timeline.gap_frames);
    }

    cursor
}
