//! End-to-end contract shipping calls against a mock gateway.

use canada_post::{
    Address, CanadaPostClient, Credentials, Destination, Environment, Error, Origin, Parcel,
};
use httpmock::prelude::*;

const SHIPMENT_RESPONSE: &str = r#"<?xml version="1.0" encoding="UTF-8"?>
<shipment-info xmlns="http://www.canadapost.ca/ws/shipment">
  <shipment-id>340531309186521749</shipment-id>
  <shipment-status>created</shipment-status>
  <tracking-pin>12345678901234</tracking-pin>
</shipment-info>"#;

fn client(base_url: &str) -> CanadaPostClient {
    let credentials =
        Credentials::new("1234567", "api-username", "api-password").with_contract("42708517");
    CanadaPostClient::new(credentials, Environment::Production).with_base_url(base_url)
}

fn parcel() -> Parcel {
    Parcel::new(1.5, 30.0, 20.0, 10.0, false).unwrap()
}

fn origin() -> Origin {
    Origin::new(Address {
        company: Some("Acme Widgets".to_string()),
        address1: Some("123 Main St".to_string()),
        city: Some("Ottawa".to_string()),
        province: Some("ON".to_string()),
        country_code: "CA".to_string(),
        postal_code: Some("K2B8J6".to_string()),
        phone: Some("613-555-0123".to_string()),
        ..Default::default()
    })
}

fn destination() -> Destination {
    Destination::new(Address {
        name: Some("John Smith".to_string()),
        address1: Some("456 Elm St".to_string()),
        city: Some("Waterville".to_string()),
        province: Some("QC".to_string()),
        country_code: "CA".to_string(),
        postal_code: Some("J0E1X0".to_string()),
        phone: Some("555-1234".to_string()),
        ..Default::default()
    })
}

#[tokio::test]
async fn create_shipment_round_trip() {
    let server = MockServer::start();
    let mock = server.mock(|when, then| {
        when.method(POST)
            .path("/rs/1234567/1234567/shipment")
            .header("accept", "application/vnd.cpc.shipment-v2+xml")
            .header("content-type", "application/vnd.cpc.shipment-v2+xml")
            .header_exists("authorization")
            .body_contains("<group-id>group-1</group-id>")
            .body_contains("<service-code>DOM.EP</service-code>")
            .body_contains("<contract-id>42708517</contract-id>");
        then.status(200)
            .header("content-type", "application/vnd.cpc.shipment-v2+xml")
            .body(SHIPMENT_RESPONSE);
    });

    let info = client(&server.base_url())
        .create_shipment(&parcel(), &origin(), &destination(), "DOM.EP", "group-1")
        .await
        .unwrap();

    mock.assert();
    assert_eq!(info.shipment_id, "340531309186521749");
    assert_eq!(info.shipment_status, "created");
    assert_eq!(info.tracking_pin.as_deref(), Some("12345678901234"));
}

#[tokio::test]
async fn build_then_send_separately() {
    let server = MockServer::start();
    let mock = server.mock(|when, then| {
        when.method(POST).path("/rs/1234567/1234567/shipment");
        then.status(200).body(SHIPMENT_RESPONSE);
    });

    let api = client(&server.base_url());
    let request = api
        .build_shipment_request(&parcel(), &origin(), &destination(), "DOM.EP", "group-1")
        .unwrap();

    // Building alone must not touch the network.
    mock.assert_hits(0);

    let info = api.send_shipment_request(&request).await.unwrap();
    mock.assert();
    assert_eq!(info.shipment_status, "created");
}

#[tokio::test]
async fn create_shipment_surfaces_api_errors() {
    let server = MockServer::start();
    server.mock(|when, then| {
        when.method(POST).path("/rs/1234567/1234567/shipment");
        then.status(400)
            .body("<messages><message><code>8516</code></message></messages>");
    });

    let result = client(&server.base_url())
        .create_shipment(&parcel(), &origin(), &destination(), "DOM.EP", "group-1")
        .await;

    match result {
        Err(Error::Api { status, body }) => {
            assert_eq!(status, 400);
            assert!(body.contains("8516"));
        }
        other => panic!("expected an API error, got {other:?}"),
    }
}

#[tokio::test]
async fn void_shipment_deletes_resource() {
    let server = MockServer::start();
    let mock = server.mock(|when, then| {
        when.method(DELETE)
            .path("/rs/1234567/1234567/shipment/340531309186521749")
            .header("accept", "application/vnd.cpc.shipment-v2+xml")
            .header_exists("authorization");
        then.status(204);
    });

    client(&server.base_url())
        .void_shipment("340531309186521749")
        .await
        .unwrap();

    mock.assert();
}

#[tokio::test]
async fn void_shipment_surfaces_api_errors() {
    let server = MockServer::start();
    server.mock(|when, then| {
        when.method(DELETE)
            .path("/rs/1234567/1234567/shipment/going-nowhere");
        then.status(404).body("no such shipment");
    });

    let result = client(&server.base_url())
        .void_shipment("going-nowhere")
        .await;

    match result {
        Err(Error::Api { status, .. }) => assert_eq!(status, 404),
        other => panic!("expected an API error, got {other:?}"),
    }
}
