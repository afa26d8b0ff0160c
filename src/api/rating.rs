//! Rate quoting: `mailing-scenario` requests against the rating endpoint.

use quick_xml::events::Event;
use rust_decimal::Decimal;
use tracing::{debug, info};

use crate::api::models::RateQuote;
use crate::api::transport::RATE_MEDIA_TYPE;
use crate::api::CanadaPostClient;
use crate::domain::{Destination, Origin, Parcel};
use crate::error::{Error, Result};
use crate::xml;

/// XML namespace of the rating request and response schemas.
pub const RATE_NAMESPACE: &str = "http://www.canadapost.ca/ws/ship/rate-v2";

/// Destination block variants, keyed on the destination country.
enum RatingDestination<'a> {
    Domestic(&'a str),
    UnitedStates(&'a str),
    International(&'a str),
}

impl<'a> RatingDestination<'a> {
    fn for_address(destination: &'a Destination) -> Result<Self> {
        let address = &destination.address;
        match address.country_code.as_str() {
            "CA" => address
                .postal_code
                .as_deref()
                .map(RatingDestination::Domestic)
                .ok_or_else(|| {
                    Error::Precondition("a domestic destination requires a postal code".to_string())
                }),
            "US" => address
                .postal_code
                .as_deref()
                .map(RatingDestination::UnitedStates)
                .ok_or_else(|| {
                    Error::Precondition("a US destination requires a zip code".to_string())
                }),
            _ => Ok(RatingDestination::International(&address.country_code)),
        }
    }
}

impl CanadaPostClient {
    /// Quote every available service for a parcel between two addresses.
    ///
    /// Returns one [`RateQuote`] per service, in the order the carrier
    /// listed them.
    pub async fn get_rates(
        &self,
        parcel: &Parcel,
        origin: &Origin,
        destination: &Destination,
    ) -> Result<Vec<RateQuote>> {
        info!(
            weight_kg = parcel.weight(),
            destination_country = %destination.address.country_code,
            "requesting rates"
        );

        let body = self.build_rate_request(parcel, origin, destination)?;
        debug!(body = %body, "mailing-scenario request");

        let url = format!("{}/rs/ship/price", self.base_url);
        let response = self.transport.post_xml(&url, RATE_MEDIA_TYPE, body).await?;
        debug!(body = %response, "rating response");

        let quotes = parse_rate_response(&response)?;
        info!(quotes = quotes.len(), "rates received");
        Ok(quotes)
    }

    /// Build the `mailing-scenario` document without sending it.
    pub fn build_rate_request(
        &self,
        parcel: &Parcel,
        origin: &Origin,
        destination: &Destination,
    ) -> Result<String> {
        let origin_postal = origin.address.postal_code.as_deref().ok_or_else(|| {
            Error::Precondition("an origin postal code is required to quote rates".to_string())
        })?;
        let rating_destination = RatingDestination::for_address(destination)?;

        xml::document(
            "mailing-scenario",
            RATE_NAMESPACE,
            self.environment.is_development(),
            |w| {
                xml::write_text_element(w, "customer-number", &self.credentials.customer_number)?;
                if let Some(contract) = self.credentials.contract_number.as_deref() {
                    xml::write_text_element(w, "contract-id", contract)?;
                }

                w.create_element("parcel-characteristics")
                    .write_inner_content(|w| {
                        xml::write_text_element(w, "weight", &parcel.weight().to_string())?;
                        if parcel.has_dimensions() {
                            w.create_element("dimensions").write_inner_content(|w| {
                                xml::write_text_element(w, "length", &parcel.length().to_string())?;
                                xml::write_text_element(w, "width", &parcel.width().to_string())?;
                                xml::write_text_element(w, "height", &parcel.height().to_string())?;
                                Ok(())
                            })?;
                        }
                        Ok(())
                    })?;

                xml::write_text_element(w, "origin-postal-code", origin_postal)?;

                w.create_element("destination").write_inner_content(|w| {
                    match rating_destination {
                        RatingDestination::Domestic(postal_code) => {
                            w.create_element("domestic").write_inner_content(|w| {
                                xml::write_text_element(w, "postal-code", postal_code)
                            })?;
                        }
                        RatingDestination::UnitedStates(zip_code) => {
                            w.create_element("united-states").write_inner_content(|w| {
                                xml::write_text_element(w, "zip-code", zip_code)
                            })?;
                        }
                        RatingDestination::International(country_code) => {
                            w.create_element("international").write_inner_content(|w| {
                                xml::write_text_element(w, "country-code", country_code)
                            })?;
                        }
                    }
                    Ok(())
                })?;

                Ok(())
            },
        )
    }
}

/// Extract every `price-quote` subtree from a rating response.
fn parse_rate_response(body: &str) -> Result<Vec<RateQuote>> {
    let mut reader = xml::response_reader(body);
    let mut quotes = Vec::new();

    loop {
        match reader.read_event()? {
            Event::Start(e) if e.local_name().as_ref() == b"price-quote" => {
                quotes.push(parse_price_quote(&mut reader)?);
            }
            Event::Eof => break,
            _ => {}
        }
    }

    Ok(quotes)
}

/// Parse one `price-quote` element; the reader is positioned just after its
/// start tag and left just after its end tag.
fn parse_price_quote(reader: &mut quick_xml::Reader<&[u8]>) -> Result<RateQuote> {
    let mut service_code = None;
    let mut service_name = None;
    let mut due = None;
    let mut transit_time = None;
    let mut delivery_date = None;
    let mut depth = 0u32;

    loop {
        match reader.read_event()? {
            Event::Start(e) => match e.local_name().as_ref() {
                b"service-code" => service_code = Some(xml::read_text_content(reader)?),
                b"service-name" => service_name = Some(xml::read_text_content(reader)?),
                b"due" => due = Some(xml::read_text_content(reader)?),
                b"expected-transit-time" => transit_time = Some(xml::read_text_content(reader)?),
                b"expected-delivery-date" => delivery_date = Some(xml::read_text_content(reader)?),
                _ => depth += 1,
            },
            Event::End(_) => {
                if depth == 0 {
                    break;
                }
                depth -= 1;
            }
            Event::Eof => {
                return Err(Error::MissingElement("price-quote end tag".to_string()));
            }
            _ => {}
        }
    }

    let due_text =
        due.ok_or_else(|| Error::MissingElement("price-quote/price-details/due".to_string()))?;
    let due = due_text
        .trim()
        .parse::<Decimal>()
        .map_err(|e| Error::ParseValue(format!("invalid amount '{due_text}': {e}")))?;
    let expected_transit_time = transit_time
        .map(|t| t.trim().parse::<u32>())
        .transpose()
        .map_err(|e| Error::ParseValue(format!("invalid transit time: {e}")))?;

    Ok(RateQuote {
        service_code: service_code
            .ok_or_else(|| Error::MissingElement("price-quote/service-code".to_string()))?,
        service_name: service_name.unwrap_or_default(),
        due,
        expected_transit_time,
        expected_delivery_date: delivery_date,
    })
}
