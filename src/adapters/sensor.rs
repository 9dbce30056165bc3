use crate::adapters::build_client;
use crate::config::RelayConfig;
use crate::core::{RawResponse, SensorSource};
use crate::utils::error::{RelayError, Result};
use async_trait::async_trait;
use reqwest::{Client, StatusCode};
use url::Url;

/// Fetches the sensor's status page with a single GET.
pub struct HttpSensorReader {
    url: Url,
    client: Client,
}

impl HttpSensorReader {
    pub fn new(config: &RelayConfig) -> Result<Self> {
        Ok(Self {
            url: config.sensor_url()?,
            client: build_client(config.timeout())?,
        })
    }

    pub fn url(&self) -> &Url {
        &self.url
    }
}

#[async_trait]
impl SensorSource for HttpSensorReader {
    async fn fetch(&self) -> Result<RawResponse> {
        let url = self.url.to_string();
        tracing::debug!("Making sensor request to: {}", url);

        let response = self
            .client
            .get(self.url.clone())
            .send()
            .await
            .map_err(|source| RelayError::SensorConnectionError {
                url: url.clone(),
                source,
            })?;

        tracing::debug!("Sensor response status: {}", response.status());

        if response.status() != StatusCode::OK {
            return Err(RelayError::SensorStatusError {
                url,
                status: response.status(),
            });
        }

        let body = response
            .text()
            .await
            .map_err(|source| RelayError::SensorConnectionError {
                url: url.clone(),
                source,
            })?;

        Ok(RawResponse { url, body })
    }
}
