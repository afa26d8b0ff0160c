//! Canada Post shipping API client.
//!
//! Wraps the Canada Post XML web services into typed Rust calls: rate
//! quoting for any origin/destination pair, plus shipment creation and void
//! under the Contract Shipping program. The crate builds the
//! namespace-qualified request documents (conditional fields, fixed-width
//! numeric formatting, country and province code normalization), performs
//! the HTTP round trip with the vendor media types and basic auth, and
//! extracts the fields callers act on from the responses.
//!
//! # Example
//!
//! ```no_run
//! use canada_post::{
//!     Address, CanadaPostClient, Credentials, Destination, Environment, Origin, Parcel,
//! };
//!
//! # async fn quote() -> canada_post::Result<()> {
//! let credentials = Credentials::new("1234567", "api-username", "api-password");
//! let client = CanadaPostClient::new(credentials, Environment::Development);
//!
//! let parcel = Parcel::new(1.5, 30.0, 20.0, 10.0, false)?;
//! let origin = Origin::new(Address {
//!     postal_code: Some("K2B8J6".to_string()),
//!     country_code: "CA".to_string(),
//!     ..Default::default()
//! });
//! let destination = Destination::new(Address {
//!     postal_code: Some("J0E1X0".to_string()),
//!     country_code: "CA".to_string(),
//!     ..Default::default()
//! });
//!
//! for quote in client.get_rates(&parcel, &origin, &destination).await? {
//!     println!("{}: {}", quote.service_code, quote.due);
//! }
//! # Ok(())
//! # }
//! ```

pub mod api;
pub mod config;
pub mod domain;
pub mod error;
mod xml;

pub use api::models::{RateQuote, ShipmentInfo, ShipmentRequest};
pub use api::CanadaPostClient;
pub use config::{Credentials, Environment};
pub use domain::{Address, Destination, Item, Origin, Parcel};
pub use error::{Error, Result};
