use std::error::Error as _;
use std::time::Duration;

use axum::async_trait;
use reqwest::header::{HeaderMap, HeaderValue, ACCEPT_LANGUAGE};

use crate::config::Config;
use crate::models::{Coordinates, GeocodeResponse};

#[derive(Debug, thiserror::Error)]
pub enum GeocodeError {
    #[error("Failed to build HTTP client: {0}")]
    Client(String),

    #[error("Reverse geocoding request failed: {0}")]
    Http(String),

    #[error("Reverse geocoding returned HTTP {0}")]
    Status(u16),

    #[error("Failed to parse reverse geocoding response: {0}")]
    Decode(String),
}

/// Coordinates to place description lookup
#[async_trait]
pub trait ReverseGeocoder: Send + Sync {
    async fn reverse(&self, coordinates: Coordinates) -> Result<GeocodeResponse, GeocodeError>;
}

/// Client for a Nominatim-compatible `/reverse` endpoint
#[derive(Debug, Clone)]
pub struct NominatimClient {
    client: reqwest::Client,
    base_url: String,
}

impl NominatimClient {
    pub fn new(
        base_url: &str,
        user_agent: &str,
        timeout: Duration,
        language: Option<&str>,
    ) -> Result<Self, GeocodeError> {
        let mut headers = HeaderMap::new();
        if let Some(language) = language {
            let value = HeaderValue::from_str(language)
                .map_err(|e| GeocodeError::Client(format!("invalid language header: {}", e)))?;
            headers.insert(ACCEPT_LANGUAGE, value);
        }

        let client = reqwest::Client::builder()
            .user_agent(user_agent)
            .timeout(timeout)
            .default_headers(headers)
            .build()
            .map_err(|e| GeocodeError::Client(e.to_string()))?;

        Ok(Self {
            client,
            base_url: base_url.trim_end_matches('/').to_string(),
        })
    }

    pub fn from_config(config: &Config) -> Result<Self, GeocodeError> {
        Self::new(
            &config.geocoder_url,
            &config.geocoder_user_agent,
            config.geocoder_timeout(),
            config.geocoder_language.as_deref(),
        )
    }
}

#[async_trait]
impl ReverseGeocoder for NominatimClient {
    async fn reverse(&self, coordinates: Coordinates) -> Result<GeocodeResponse, GeocodeError> {
        tracing::info!(
            "🌍 Reverse geocoding ({}, {})",
            coordinates.latitude,
            coordinates.longitude
        );

        let lat = coordinates.latitude.to_string();
        let lon = coordinates.longitude.to_string();
        let response = self
            .client
            .get(format!("{}/reverse", self.base_url))
            .query(&[
                ("lat", lat.as_str()),
                ("lon", lon.as_str()),
                ("format", "json"),
                ("addressdetails", "1"),
            ])
            .send()
            .await
            .map_err(|e| {
                // Log full error chain for debugging
                let mut error_msg = format!("Reverse geocoding request failed: {}", e);
                let mut source = e.source();
                while let Some(err) = source {
                    error_msg.push_str(&format!("\n  Caused by: {}", err));
                    source = err.source();
                }
                tracing::warn!("{}", error_msg);
                GeocodeError::Http(e.to_string())
            })?;

        if !response.status().is_success() {
            let status = response.status();
            tracing::warn!("Reverse geocoding returned HTTP {}", status);
            return Err(GeocodeError::Status(status.as_u16()));
        }

        let data: GeocodeResponse = response
            .json()
            .await
            .map_err(|e| GeocodeError::Decode(e.to_string()))?;

        tracing::debug!("✅ Reverse geocoding responded successfully");
        Ok(data)
    }
}
