//! Shipping addresses and their sender/receiver roles.

use serde::{Deserialize, Serialize};

/// A civic address as the Canada Post API consumes it.
///
/// Only `country_code` is always required. Which of the remaining fields
/// must be present depends on the operation: rating needs postal codes,
/// contract shipping enforces the sender/destination preconditions at
/// request-build time.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Address {
    pub name: Option<String>,
    pub company: Option<String>,
    pub address1: Option<String>,
    pub address2: Option<String>,
    pub city: Option<String>,
    pub province: Option<String>,
    /// ISO 3166-1 alpha-2 country code, e.g. "CA".
    pub country_code: String,
    pub postal_code: Option<String>,
    pub phone: Option<String>,
    /// Additional address information (care-of lines and the like).
    pub extra: Option<String>,
}

impl Address {
    /// True when at least one street address line is set.
    pub fn has_street_line(&self) -> bool {
        self.address1.is_some() || self.address2.is_some()
    }

    /// True for addresses in countries that require a postal code.
    pub fn requires_postal_code(&self) -> bool {
        matches!(self.country_code.as_str(), "CA" | "US")
    }
}

/// The sender side of a shipment or rate request.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Origin {
    pub address: Address,
}

impl Origin {
    pub fn new(address: Address) -> Self {
        Origin { address }
    }
}

impl From<Address> for Origin {
    fn from(address: Address) -> Self {
        Origin::new(address)
    }
}

/// The receiving side of a shipment or rate request.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Destination {
    pub address: Address,
}

impl Destination {
    pub fn new(address: Address) -> Self {
        Destination { address }
    }
}

impl From<Address> for Destination {
    fn from(address: Address) -> Self {
        Destination::new(address)
    }
}
