//! Wire-facing result models for the Canada Post services.
//!
//! These mirror the response subtrees the client extracts fields from; they
//! are deliberately shallow and carry only what callers act on.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// One service quoted by the rating endpoint (a `price-quote` subtree).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RateQuote {
    /// Carrier service code, e.g. "DOM.EP".
    pub service_code: String,
    /// Human-readable service name, e.g. "Expedited Parcel".
    pub service_name: String,
    /// Amount due for the service.
    pub due: Decimal,
    /// Business-day transit estimate, when the carrier provides one.
    pub expected_transit_time: Option<u32>,
    /// Expected delivery date (YYYY-MM-DD), when the carrier provides one.
    pub expected_delivery_date: Option<String>,
}

/// A built-but-unsent shipment request.
///
/// [`build_shipment_request`](crate::CanadaPostClient::build_shipment_request)
/// produces this artifact so callers can inspect, persist, or defer the
/// network call;
/// [`send_shipment_request`](crate::CanadaPostClient::send_shipment_request)
/// performs it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ShipmentRequest {
    /// Fully-formed target URL.
    pub url: String,
    /// Media type sent as both Accept and Content-Type.
    pub content_type: String,
    /// Serialized `shipment` document.
    pub body: String,
}

/// Fields extracted from a create-shipment response.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ShipmentInfo {
    /// Identifier used to address the shipment resource (void, manifest).
    pub shipment_id: String,
    /// Carrier-reported status, e.g. "created".
    pub shipment_status: String,
    /// Tracking PIN, absent until the carrier assigns one.
    pub tracking_pin: Option<String>,
}
