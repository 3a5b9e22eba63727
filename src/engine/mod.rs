//! Generation orchestrator.
//!
//! This module ties the script reader, the synthesis backend and the
//! manifest together to turn a script into numbered audio files.

mod generator;

pub use generator::{
    EngineError, Generator, GeneratorConfig, RunReport, SegmentError, SegmentFailure,
    synthesize_segment,
};
