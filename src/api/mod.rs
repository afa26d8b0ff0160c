//! Canada Post web services client.
//!
//! One facade composes the credentials, the target environment, and a shared
//! HTTP client, and exposes each endpoint as a method:
//!
//! ```text
//!                ┌──────────────────────┐
//!                │   CanadaPostClient   │
//!                └──────────┬───────────┘
//!                           │
//!         ┌─────────────────┼──────────────────┐
//!         │                 │                  │
//!   ┌─────┴─────┐   ┌───────┴────────┐  ┌──────┴───────┐
//!   │ get_rates │   │ create_shipment│  │ void_shipment│
//!   │  (rating) │   │ (build + send) │  │   (DELETE)   │
//!   └───────────┘   └────────────────┘  └──────────────┘
//! ```
//!
//! Request building never touches the network; each send awaits exactly one
//! HTTP round trip.

pub mod models;
mod rating;
mod shipping;
mod transport;

pub use rating::RATE_NAMESPACE;
pub use shipping::SHIPMENT_NAMESPACE;
pub use transport::{RATE_MEDIA_TYPE, SHIPMENT_MEDIA_TYPE};

use crate::config::{Credentials, Environment};
use transport::Transport;

/// Entry point for the Canada Post web services.
///
/// The client is cheap to clone conceptually but designed to be shared: it
/// owns an immutable credential set and a pooled HTTP client, so one
/// instance can serve concurrent callers.
pub struct CanadaPostClient {
    credentials: Credentials,
    environment: Environment,
    base_url: String,
    transport: Transport,
}

impl CanadaPostClient {
    /// Create a client for the given account and environment.
    pub fn new(credentials: Credentials, environment: Environment) -> Self {
        let base_url = format!("https://{}", environment.host());
        let transport = Transport::new(credentials.clone());

        CanadaPostClient {
            credentials,
            environment,
            base_url,
            transport,
        }
    }

    /// Point the client at a different gateway base URL.
    ///
    /// Intended for tests and local gateways; production callers should rely
    /// on the environment's host.
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }

    /// The credentials this client was built with.
    pub fn credentials(&self) -> &Credentials {
        &self.credentials
    }

    /// The environment this client targets.
    pub fn environment(&self) -> Environment {
        self.environment
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_client_base_url_follows_environment() {
        let creds = Credentials::new("1234567", "user", "pass");
        let client = CanadaPostClient::new(creds, Environment::Development);
        assert_eq!(client.base_url, "https://ct.soa-gw.canadapost.ca");

        let creds = Credentials::new("1234567", "user", "pass");
        let client = CanadaPostClient::new(creds, Environment::Production);
        assert_eq!(client.base_url, "https://soa-gw.canadapost.ca");
    }

    #[test]
    fn test_base_url_override() {
        let creds = Credentials::new("1234567", "user", "pass");
        let client =
            CanadaPostClient::new(creds, Environment::Development).with_base_url("http://localhost:8080");
        assert_eq!(client.base_url, "http://localhost:8080");
    }
}
