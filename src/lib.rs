//! script-voice-rs: batch text-to-speech for scripts.
//!
//! This crate splits a script into paragraphs, renders each one through a
//! local VOICEVOX-compatible engine and records the results in a JSON manifest.

pub mod backend;
pub mod cli;
pub mod engine;
pub mod manifest;
pub mod script;
