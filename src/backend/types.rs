//! Synthesis engine request/response types.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use thiserror::Error;

/// Key of the speed multiplier inside an audio query.
pub const SPEED_FIELD: &str = "speedScale";

/// Errors that can occur when communicating with the synthesis engine.
#[derive(Error, Debug)]
pub enum BackendError {
    #[error("Connection failed: {0}")]
    ConnectionFailed(String),

    #[error("Request failed with status {status}: {body}")]
    RequestFailed { status: u16, body: String },

    #[error("Invalid response: {0}")]
    InvalidResponse(String),

    #[error("Could not build HTTP client: {0}")]
    ClientBuild(String),
}

/// Audio query returned by the engine's query endpoint.
///
/// The object is opaque: only the speed multiplier is read or written, every
/// other field is sent back to the synthesis endpoint untouched.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SynthesisConfig(Map<String, Value>);

impl SynthesisConfig {
    /// Current speed multiplier, if the engine supplied a numeric one.
    pub fn speed(&self) -> Option<f64> {
        self.0.get(SPEED_FIELD).and_then(Value::as_f64)
    }

    /// Overwrite the speed multiplier.
    pub fn set_speed(&mut self, speed: f64) {
        self.0.insert(SPEED_FIELD.to_string(), Value::from(speed));
    }
}
