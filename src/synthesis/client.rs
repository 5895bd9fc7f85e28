//! Thin HTTP client for the image-synthesis backend.
//!
//! One endpoint, one call: `generate` posts a [`SynthesisRequest`] to the
//! Grok Imagine edit endpoint on fal.run and parses the JSON response.
use reqwest::Client;

use crate::config::Config;
use crate::error::{AppError, AppResult};
use crate::synthesis::{SynthesisRequest, SynthesisResult};

pub const SYNTHESIS_ENDPOINT: &str = "https://fal.run/xai/grok-imagine-image/edit";

pub struct SynthesisClient {
    client: Client,
    endpoint: String,
    api_key: String,
}

impl SynthesisClient {
    /// Build a client from the loaded configuration.
    ///
    /// Fails with a configuration error when `FAL_KEY` is absent. This is
    /// the credential check the pipeline runs before any network call.
    pub fn from_config(config: &Config) -> AppResult<Self> {
        let api_key = config
            .fal_key
            .clone()
            .filter(|k| !k.is_empty())
            .ok_or_else(|| {
                AppError::Configuration("FAL_KEY environment variable not set".to_string())
            })?;
        Ok(SynthesisClient {
            client: Client::new(),
            endpoint: SYNTHESIS_ENDPOINT.to_string(),
            api_key,
        })
    }

    /// Issue the single generation request.
    ///
    /// Returns the parsed response on success. A non-success status maps to
    /// an upstream error carrying the raw response body; no retry.
    pub async fn generate(&self, request: &SynthesisRequest) -> AppResult<SynthesisResult> {
        tracing::info!("Sending synthesis request to {}", self.endpoint);
        tracing::debug!("Request payload: {:?}", request);

        let response = self
            .client
            .post(&self.endpoint)
            .header("Authorization", format!("Key {}", self.api_key))
            .json(request)
            .send()
            .await
            .map_err(AppError::HttpClient)?;

        if response.status().is_success() {
            let result = response.json().await.map_err(AppError::HttpClient)?;
            tracing::info!("Synthesis succeeded");
            Ok(result)
        } else {
            let error_body = response
                .text()
                .await
                .unwrap_or_else(|_| "Unable to read error body".to_string());
            tracing::error!("Synthesis backend returned an error: {}", error_body);
            Err(AppError::Upstream(error_body))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_credential_is_a_configuration_error() {
        let config = Config::default();
        match SynthesisClient::from_config(&config) {
            Err(AppError::Configuration(msg)) => assert!(msg.contains("FAL_KEY")),
            other => panic!("expected configuration error, got {:?}", other.map(|_| ())),
        }
    }

    #[test]
    fn empty_credential_is_a_configuration_error() {
        let config = Config {
            fal_key: Some(String::new()),
            ..Config::default()
        };
        assert!(matches!(
            SynthesisClient::from_config(&config),
            Err(AppError::Configuration(_))
        ));
    }

    #[test]
    fn configured_credential_builds_a_client() {
        let config = Config {
            fal_key: Some("fal-secret".into()),
            ..Config::default()
        };
        let client = SynthesisClient::from_config(&config).unwrap();
        assert_eq!(client.endpoint, SYNTHESIS_ENDPOINT);
    }
}
