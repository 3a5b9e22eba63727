//! Communication with the speech synthesis engine.
//!
//! Provides the trait and HTTP implementation for talking to a
//! VOICEVOX-compatible engine (`/audio_query` then `/synthesis`).

mod client;
mod types;

pub use client::HttpBackend;
pub use types::{BackendError, SPEED_FIELD, SynthesisConfig};

/// Default address of a locally running engine.
pub const DEFAULT_ENGINE_URL: &str = "http://127.0.0.1:50021";

/// Trait for synthesis engine communication.
///
/// This trait abstracts the HTTP communication with the engine,
/// allowing for mock implementations in tests.
#[cfg_attr(test, mockall::automock)]
pub trait Backend {
    /// Report the engine version.
    fn version(&self) -> Result<String, BackendError>;

    /// Build an audio query for `text` spoken by `speaker`.
    fn audio_query(&self, text: &str, speaker: u32) -> Result<SynthesisConfig, BackendError>;

    /// Synthesize speech from an audio query.
    ///
    /// # Returns
    /// Raw WAV audio data
    fn synthesis(&self, config: &SynthesisConfig, speaker: u32) -> Result<Vec<u8>, BackendError>;
}

/// Create an HTTP backend for the engine at `base_url`.
pub fn create_backend(base_url: &str) -> Result<HttpBackend, BackendError> {
    HttpBackend::new(base_url)
}
