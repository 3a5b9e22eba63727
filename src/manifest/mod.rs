//! Segment manifest (`segments_info.json`) storage and timeline annotation.
//!
//! The manifest lists every segment of a script in order, together with the
//! relative path of its audio file. It can later be annotated with audio
//! durations and frame positions, and edited to drop a segment.

mod store;
mod timeline;

pub use store::{
    MANIFEST_FILE, ManifestEntry, ManifestError, load_manifest, remove_segment, write_manifest,
};
pub use timeline::{Timeline, annotate_durations, wav_duration};
