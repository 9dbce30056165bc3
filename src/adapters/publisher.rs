use crate::adapters::build_client;
use crate::config::RelayConfig;
use crate::core::{PublishReceipt, Reading, TelemetrySink};
use crate::utils::error::{RelayError, Result};
use async_trait::async_trait;
use reqwest::header::ACCEPT;
use reqwest::{Client, StatusCode};
use url::Url;

/// Posts readings to a ThingSpeak-style `/update` endpoint as a urlencoded form.
pub struct ThingSpeakPublisher {
    endpoint: Url,
    write_key: String,
    client: Client,
}

impl ThingSpeakPublisher {
    pub fn new(config: &RelayConfig) -> Result<Self> {
        Ok(Self {
            endpoint: config.cloud_url()?,
            write_key: config.write_key.clone(),
            client: build_client(config.timeout())?,
        })
    }

    pub fn form_fields(&self, reading: &Reading) -> Vec<(&'static str, String)> {
        vec![
            ("field1", reading.temperature.to_string()),
            ("field2", reading.humidity.to_string()),
            ("key", self.write_key.clone()),
        ]
    }
}

#[async_trait]
impl TelemetrySink for ThingSpeakPublisher {
    async fn publish(&self, reading: &Reading) -> Result<PublishReceipt> {
        let url = self.endpoint.to_string();
        tracing::debug!("Posting reading to: {}", url);

        let response = self
            .client
            .post(self.endpoint.clone())
            .header(ACCEPT, "text/plain")
            .form(&self.form_fields(reading))
            .send()
            .await
            .map_err(|source| RelayError::CloudConnectionError {
                url: url.clone(),
                source,
            })?;

        tracing::debug!("Cloud response status: {}", response.status());

        if response.status() != StatusCode::OK {
            return Err(RelayError::CloudStatusError {
                url,
                status: response.status(),
            });
        }

        // The reply must drain completely; a non-numeric body is still a success.
        let body = response
            .text()
            .await
            .map_err(|source| RelayError::CloudConnectionError {
                url: url.clone(),
                source,
            })?;

        Ok(PublishReceipt {
            entry_id: body.trim().parse::<u64>().ok(),
        })
    }
}
