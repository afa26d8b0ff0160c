//! Contract Shipping: shipment creation and voiding.
//!
//! Building a shipment request and sending it are independent operations.
//! [`CanadaPostClient::build_shipment_request`] validates the cross-field
//! preconditions and produces the unsent artifact;
//! [`CanadaPostClient::send_shipment_request`] performs the POST;
//! [`CanadaPostClient::create_shipment`] composes the two.

use std::io::{self, Write};

use quick_xml::events::Event;
use quick_xml::Writer;
use tracing::{debug, info};

use crate::api::models::{ShipmentInfo, ShipmentRequest};
use crate::api::transport::SHIPMENT_MEDIA_TYPE;
use crate::api::CanadaPostClient;
use crate::domain::{Address, Destination, Origin, Parcel};
use crate::error::{Error, Result};
use crate::xml;

/// XML namespace of the shipment request and response schemas.
pub const SHIPMENT_NAMESPACE: &str = "http://www.canadapost.ca/ws/shipment";

/// Services that refuse a destination without a contact phone number.
const PHONE_REQUIRED_SERVICES: [&str; 7] = [
    "USA.EP",
    "USA.XP",
    "INT.XP",
    "USA.PW.PARCEL",
    "USA.PW.PAK",
    "INT.PW.PARCEL",
    "INT.PK.PAK",
];

impl CanadaPostClient {
    /// Build a `shipment` document and its target URL without sending it.
    ///
    /// `service_code` is the carrier service to ship with (typically taken
    /// from a [`RateQuote`](crate::RateQuote)); `group_id` names the parcel
    /// group the shipment is added to.
    pub fn build_shipment_request(
        &self,
        parcel: &Parcel,
        origin: &Origin,
        destination: &Destination,
        service_code: &str,
        group_id: &str,
    ) -> Result<ShipmentRequest> {
        let sender = &origin.address;
        let receiver = &destination.address;

        let contract = self.credentials.contract_number.as_deref().ok_or_else(|| {
            Error::Precondition("a contract number is required for contract shipping".to_string())
        })?;
        let company = sender.company.as_deref().ok_or_else(|| {
            Error::Precondition("the sender needs a company name for contract shipping".to_string())
        })?;
        let sender_phone = sender.phone.as_deref().ok_or_else(|| {
            Error::Precondition("the sender needs a phone number for contract shipping".to_string())
        })?;
        if !sender.has_street_line() {
            return Err(Error::Precondition(
                "the sender needs an address line to create a shipment".to_string(),
            ));
        }
        if sender.city.is_none() {
            return Err(Error::Precondition(
                "the sender needs a city to create a shipment".to_string(),
            ));
        }
        if sender.province.is_none() {
            return Err(Error::Precondition(
                "the sender needs a province to create a shipment".to_string(),
            ));
        }
        let shipping_point = sender.postal_code.as_deref().ok_or_else(|| {
            Error::Precondition(
                "the sender needs a postal code as the requested shipping point".to_string(),
            )
        })?;

        if !receiver.has_street_line() {
            return Err(Error::Precondition(
                "the destination needs an address line to create a shipment".to_string(),
            ));
        }
        if receiver.province.is_none() && receiver.requires_postal_code() {
            return Err(Error::Precondition(format!(
                "a destination in {} requires a province or state",
                receiver.country_code
            )));
        }
        if receiver.phone.is_none() && PHONE_REQUIRED_SERVICES.contains(&service_code) {
            return Err(Error::Precondition(format!(
                "service {service_code} requires the destination to have a phone number"
            )));
        }
        postal_code_rule(receiver, "destination")?;

        let body = xml::document(
            "shipment",
            SHIPMENT_NAMESPACE,
            self.environment.is_development(),
            |w| {
                xml::write_text_element(w, "group-id", group_id)?;
                xml::write_text_element(w, "requested-shipping-point", shipping_point)?;

                w.create_element("delivery-spec").write_inner_content(|w| {
                    xml::write_text_element(w, "service-code", service_code)?;

                    w.create_element("sender").write_inner_content(|w| {
                        xml::write_optional_text(w, "name", sender.name.as_deref())?;
                        xml::write_text_element(w, "company", company)?;
                        xml::write_text_element(w, "contact-phone", sender_phone)?;
                        write_address_details(w, sender)
                    })?;

                    w.create_element("destination").write_inner_content(|w| {
                        xml::write_optional_text(w, "name", receiver.name.as_deref())?;
                        xml::write_optional_text(w, "company", receiver.company.as_deref())?;
                        xml::write_optional_text(
                            w,
                            "additional-address-info",
                            receiver.extra.as_deref(),
                        )?;
                        xml::write_optional_text(
                            w,
                            "client-voice-number",
                            receiver.phone.as_deref(),
                        )?;
                        write_address_details(w, receiver)
                    })?;

                    w.create_element("parcel-characteristics")
                        .write_inner_content(|w| {
                            xml::write_text_element(w, "weight", &parcel.weight().to_string())?;
                            if parcel.has_dimensions() {
                                w.create_element("dimensions").write_inner_content(|w| {
                                    xml::write_text_element(
                                        w,
                                        "length",
                                        &parcel.length().to_string(),
                                    )?;
                                    xml::write_text_element(
                                        w,
                                        "width",
                                        &parcel.width().to_string(),
                                    )?;
                                    xml::write_text_element(
                                        w,
                                        "height",
                                        &parcel.height().to_string(),
                                    )?;
                                    Ok(())
                                })?;
                            }
                            xml::write_bool_element(w, "unpackaged", parcel.unpackaged())?;
                            Ok(())
                        })?;

                    w.create_element("preferences").write_inner_content(|w| {
                        xml::write_bool_element(w, "show-packing-instructions", false)?;
                        xml::write_bool_element(w, "show-postage-rate", false)?;
                        xml::write_bool_element(w, "show-insured-value", false)?;
                        Ok(())
                    })?;

                    w.create_element("settlement-info").write_inner_content(|w| {
                        xml::write_text_element(w, "contract-id", contract)?;
                        xml::write_text_element(w, "intended-method-of-payment", "Account")?;
                        Ok(())
                    })?;

                    Ok(())
                })?;

                Ok(())
            },
        )?;

        let customer = &self.credentials.customer_number;
        // mobo equals the customer number when shipping on one's own behalf.
        let url = format!("{}/rs/{}/{}/shipment", self.base_url, customer, customer);

        Ok(ShipmentRequest {
            url,
            content_type: SHIPMENT_MEDIA_TYPE.to_string(),
            body,
        })
    }

    /// POST a previously built shipment request and extract the result.
    pub async fn send_shipment_request(&self, request: &ShipmentRequest) -> Result<ShipmentInfo> {
        info!(url = %request.url, "sending shipment request");
        debug!(body = %request.body, "shipment request");

        let response = self
            .transport
            .post_xml(&request.url, &request.content_type, request.body.clone())
            .await?;
        debug!(body = %response, "shipment response");

        parse_shipment_response(&response)
    }

    /// Build and send a shipment in one call.
    pub async fn create_shipment(
        &self,
        parcel: &Parcel,
        origin: &Origin,
        destination: &Destination,
        service_code: &str,
        group_id: &str,
    ) -> Result<ShipmentInfo> {
        let request =
            self.build_shipment_request(parcel, origin, destination, service_code, group_id)?;
        self.send_shipment_request(&request).await
    }

    /// Void a shipment that has not been manifested yet.
    pub async fn void_shipment(&self, shipment_id: &str) -> Result<()> {
        let customer = &self.credentials.customer_number;
        let url = format!(
            "{}/rs/{}/{}/shipment/{}",
            self.base_url, customer, customer, shipment_id
        );

        info!(url = %url, "voiding shipment");
        self.transport.delete(&url, SHIPMENT_MEDIA_TYPE).await?;
        Ok(())
    }
}

/// An address in CA/US must carry a postal code; elsewhere it may be absent.
fn postal_code_rule(address: &Address, role: &str) -> Result<()> {
    if address.postal_code.is_none() && address.requires_postal_code() {
        return Err(Error::Precondition(format!(
            "a {role} address in {} requires a postal code",
            address.country_code
        )));
    }
    Ok(())
}

/// Write the shared `address-details` block used by sender and destination.
fn write_address_details<W: Write>(writer: &mut Writer<W>, address: &Address) -> io::Result<()> {
    writer
        .create_element("address-details")
        .write_inner_content(|w| {
            xml::write_optional_text(w, "address-line-1", address.address1.as_deref())?;
            xml::write_optional_text(w, "address-line-2", address.address2.as_deref())?;
            xml::write_optional_text(w, "city", address.city.as_deref())?;
            xml::write_optional_text(w, "prov-state", address.province.as_deref())?;
            xml::write_text_element(w, "country-code", &address.country_code)?;
            xml::write_optional_text(w, "postal-zip-code", address.postal_code.as_deref())?;
            Ok(())
        })?;
    Ok(())
}

/// Extract the fields callers act on from a create-shipment response.
fn parse_shipment_response(body: &str) -> Result<ShipmentInfo> {
    let mut reader = xml::response_reader(body);
    let mut shipment_id = None;
    let mut shipment_status = None;
    let mut tracking_pin = None;

    loop {
        match reader.read_event()? {
            Event::Start(e) => match e.local_name().as_ref() {
                b"shipment-id" => shipment_id = Some(xml::read_text_content(&mut reader)?),
                b"shipment-status" => shipment_status = Some(xml::read_text_content(&mut reader)?),
                b"tracking-pin" => tracking_pin = Some(xml::read_text_content(&mut reader)?),
                _ => {}
            },
            Event::Eof => break,
            _ => {}
        }
    }

    Ok(ShipmentInfo {
        shipment_id: shipment_id
            .ok_or_else(|| Error::MissingElement("shipment-info/shipment-id".to_string()))?,
        shipment_status: shipment_status
            .ok_or_else(|| Error::MissingElement("shipment-info/shipment-status".to_string()))?,
        tracking_pin,
    })
}
