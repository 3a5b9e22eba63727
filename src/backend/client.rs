//! HTTP client for synthesis engine communication.

use std::time::Duration;

use log::debug;
use reqwest::blocking::Response;

use super::Backend;
use super::types::{BackendError, SynthesisConfig};

/// HTTP-based synthesis engine client.
pub struct HttpBackend {
    base_url: String,
    client: reqwest::blocking::Client,
}

impl HttpBackend {
    /// Create a new HTTP client for the engine at `base_url`.
    ///
    /// Requests carry no timeout: long segments may take the engine a while.
    pub fn new(base_url: &str) -> Result<Self, BackendError> {
        let client = reqwest::blocking::Client::builder()
            .timeout(None::<Duration>)
            .build()
            .map_err(|e| BackendError::ClientBuild(e.to_string()))?;

        Ok(Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            client,
        })
    }

    /// Get the base URL for this engine.
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Turn a non-success response into `RequestFailed`, keeping the body for diagnostics.
    fn check_status(response: Response) -> Result<Response, BackendError> {
        let status = response.status();
        if status.is_success() {
            return Ok(response);
        }

        let body = response.text().unwrap_or_default();
        Err(BackendError::RequestFailed {
            status: status.as_u16(),
            body,
        })
    }
}

impl Backend for HttpBackend {
    fn version(&self) -> Result<String, BackendError> {
        let url = format!("{}/version", self.base_url);

        let response = self
            .client
            .get(&url)
            .send()
            .map_err(|e| BackendError::ConnectionFailed(e.to_string()))?;
        let response = Self::check_status(response)?;

        let body = response
            .text()
            .map_err(|e| BackendError::InvalidResponse(e.to_string()))?;

        // The engine answers with a JSON string; fall back to the raw body otherwise.
        Ok(serde_json::from_str::<String>(&body).unwrap_or_else(|_| body.trim().to_string()))
    }

    fn audio_query(&self, text: &str, speaker: u32) -> Result<SynthesisConfig, BackendError> {
        let url = format!("{}/audio_query", self.base_url);
        debug!("POST {url} (speaker={speaker}, {} chars)", text.chars().count());

        let speaker = speaker.to_string();
        let response = self
            .client
            .post(&url)
            .query(&[("text", text), ("speaker", speaker.as_str())])
            .send()
            .map_err(|e| BackendError::ConnectionFailed(e.to_string()))?;
        let response = Self::check_status(response)?;

        response
            .json()
            .map_err(|e| BackendError::InvalidResponse(e.to_string()))
    }

    fn synthesis(&self, config: &SynthesisConfig, speaker: u32) -> Result<Vec<u8>, BackendError> {
        let url = format!("{}/synthesis", self.base_url);
        debug!("POST {url} (speaker={speaker}, speed={:?})", config.speed());

        let response = self
            .client
            .post(&url)
            .query(&[("speaker", speaker)])
            .json(config)
            .send()
            .map_err(|e| BackendError::ConnectionFailed(e.to_string()))?;
        let response = Self::check_status(response)?;

        response
            .bytes()
            .map(|b| b.to_vec())
            .map_err(|e| BackendError::InvalidResponse(e.to_string()))
    }
}
