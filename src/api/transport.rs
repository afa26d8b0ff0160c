//! HTTP transport for the Canada Post web services.
//!
//! Wraps a shared `reqwest::Client` with the vendor media types, the en-CA
//! locale header, and basic auth, and maps non-success statuses to
//! [`Error::Api`] carrying the response body.

use std::time::Duration;

use reqwest::{Client, Response};
use tracing::debug;

use crate::config::Credentials;
use crate::error::{Error, Result};

/// Media type for the rating service.
pub const RATE_MEDIA_TYPE: &str = "application/vnd.cpc.ship.rate-v2+xml";

/// Media type for the shipment service.
pub const SHIPMENT_MEDIA_TYPE: &str = "application/vnd.cpc.shipment-v2+xml";

/// Locale requested for carrier messages.
const ACCEPT_LANGUAGE: &str = "en-CA";

pub(crate) struct Transport {
    client: Client,
    credentials: Credentials,
}

impl Transport {
    pub fn new(credentials: Credentials) -> Self {
        let client = Client::builder()
            .timeout(Duration::from_secs(30))
            .connect_timeout(Duration::from_secs(10))
            .user_agent(concat!("canada-post/", env!("CARGO_PKG_VERSION")))
            .build()
            .expect("Failed to create HTTP client");

        Transport {
            client,
            credentials,
        }
    }

    /// POST an XML document and return the response body.
    pub async fn post_xml(&self, url: &str, media_type: &str, body: String) -> Result<String> {
        debug!(url = %url, media_type = %media_type, "POST request");

        let response = self
            .client
            .post(url)
            .basic_auth(&self.credentials.username, Some(&self.credentials.password))
            .header("Accept", media_type)
            .header("Content-Type", media_type)
            .header("Accept-Language", ACCEPT_LANGUAGE)
            .body(body)
            .send()
            .await?;

        Self::success_body(response).await
    }

    /// DELETE a resource and return the response body.
    pub async fn delete(&self, url: &str, media_type: &str) -> Result<String> {
        debug!(url = %url, media_type = %media_type, "DELETE request");

        let response = self
            .client
            .delete(url)
            .basic_auth(&self.credentials.username, Some(&self.credentials.password))
            .header("Accept", media_type)
            .header("Accept-Language", ACCEPT_LANGUAGE)
            .send()
            .await?;

        Self::success_body(response).await
    }

    async fn success_body(response: Response) -> Result<String> {
        let status = response.status();
        debug!(status = %status, "response received");

        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(Error::Api {
                status: status.as_u16(),
                body,
            });
        }

        Ok(response.text().await?)
    }
}
