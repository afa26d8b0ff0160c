//! Customs line items.
//!
//! An [`Item`] describes one article inside a parcel for customs purposes:
//! unit count, description, weight, value, and origin. The API consumes the
//! weight and value as fixed-width numeric strings, so those are exposed as
//! format-on-read accessors next to the raw values.

use serde::Serialize;

use crate::error::{Error, Result};

/// Canadian province/territory codes with their English names.
const PROVINCES: [(&str, &str); 13] = [
    ("AB", "Alberta"),
    ("BC", "British Columbia"),
    ("MB", "Manitoba"),
    ("NB", "New Brunswick"),
    ("NL", "Newfoundland"),
    ("NT", "Northwest Territories"),
    ("NS", "Nova Scotia"),
    ("NU", "Nunavut"),
    ("ON", "Ontario"),
    ("PE", "Prince Edward Island"),
    ("QC", "Québec"),
    ("SK", "Saskatchewan"),
    ("YT", "Yukon"),
];

/// Resolve a country to its ISO 3166-1 alpha-2 code.
///
/// Accepts a two-letter code in any case, or a full English country name.
pub fn resolve_country_code(value: &str) -> Result<String> {
    let trimmed = value.trim();
    if trimmed.chars().count() == 2 {
        let upper = trimmed.to_ascii_uppercase();
        return match rust_iso3166::from_alpha2(&upper) {
            Some(_) => Ok(upper),
            None => Err(Error::UnknownCountry(value.to_string())),
        };
    }

    rust_iso3166::ALL
        .iter()
        .find(|country| country.name.eq_ignore_ascii_case(trimmed))
        .map(|country| country.alpha2.to_string())
        .ok_or_else(|| Error::UnknownCountry(value.to_string()))
}

/// Resolve a Canadian province/territory to its two-letter code.
///
/// Accepts the code in any case, the English name, or the bare ASCII
/// spelling "quebec" (the official name carries an accent).
pub fn resolve_province_code(value: &str) -> Result<String> {
    let trimmed = value.trim();
    let upper = trimmed.to_ascii_uppercase();
    if PROVINCES.iter().any(|(code, _)| *code == upper) {
        return Ok(upper);
    }
    if let Some((code, _)) = PROVINCES.iter().find(|(_, name)| *name == trimmed) {
        return Ok((*code).to_string());
    }
    if trimmed.eq_ignore_ascii_case("quebec") {
        return Ok("QC".to_string());
    }

    Err(Error::UnknownProvince(value.to_string()))
}

/// One article in a parcel, as declared to customs.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Item {
    number_of_units: i32,
    description: String,
    unit_weight: f64,
    unit_value: f64,
    origin_country: String,
    origin_province: Option<String>,
}

impl Item {
    /// Create a customs item, validating every field.
    ///
    /// `origin_country` takes a two-letter code or a full English name and
    /// is stored as the alpha-2 code. `origin_province` may only be given
    /// when the origin country resolves to Canada.
    pub fn new(
        number_of_units: i32,
        description: &str,
        unit_weight: f64,
        unit_value: f64,
        origin_country: &str,
        origin_province: Option<&str>,
    ) -> Result<Self> {
        if !(0..=9999).contains(&number_of_units) {
            return Err(Error::Validation(format!(
                "number of units must be between 0 and 9999, got {number_of_units}"
            )));
        }
        if description.chars().count() > 45 {
            return Err(Error::Validation(
                "description must be at most 45 characters long".to_string(),
            ));
        }
        if !unit_weight.is_finite() || !(0.0..=99.999).contains(&unit_weight) {
            return Err(Error::Validation(format!(
                "unit weight must be between 0 and 99.999 kg, got {unit_weight}"
            )));
        }
        if !unit_value.is_finite() || !(0.0..=99999.99).contains(&unit_value) {
            return Err(Error::Validation(format!(
                "unit value must be between 0 and 99999.99, got {unit_value}"
            )));
        }

        let origin_country = resolve_country_code(origin_country)?;
        let origin_province = match origin_province {
            Some(province) if origin_country == "CA" => Some(resolve_province_code(province)?),
            Some(_) => {
                return Err(Error::Validation(
                    "an origin province is only valid when the origin country is Canada"
                        .to_string(),
                ));
            }
            None => None,
        };

        Ok(Item {
            number_of_units,
            description: description.to_string(),
            unit_weight,
            unit_value,
            origin_country,
            origin_province,
        })
    }

    /// Number of units of this article in the parcel.
    pub fn number_of_units(&self) -> i32 {
        self.number_of_units
    }

    /// Customs description.
    pub fn description(&self) -> &str {
        &self.description
    }

    /// Unit weight in kilograms.
    pub fn unit_weight(&self) -> f64 {
        self.unit_weight
    }

    /// Unit weight as the API's fixed-width field, e.g. 1.2 becomes "01.200".
    pub fn unit_weight_field(&self) -> String {
        format!("{:06.3}", self.unit_weight)
    }

    /// Unit value in the account currency.
    pub fn unit_value(&self) -> f64 {
        self.unit_value
    }

    /// Unit value as the API's fixed-width field, e.g. 1.2 becomes "00001.20".
    pub fn unit_value_field(&self) -> String {
        format!("{:08.2}", self.unit_value)
    }

    /// ISO 3166-1 alpha-2 origin country code.
    pub fn origin_country(&self) -> &str {
        &self.origin_country
    }

    /// Origin province code, set only for Canadian origins.
    pub fn origin_province(&self) -> Option<&str> {
        self.origin_province.as_deref()
    }
}
