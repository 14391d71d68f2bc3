//! Raw CSV row shapes and their conversion into core entities.
//!
//! Rows are deserialized by header name, so unrelated columns in the source
//! files are ignored. Numeric fields use strict parsing; a field that fails
//! to parse surfaces as a malformed-row error with its line number.

use airfield_core::{Airport, Country, CountryError, Runway};
use serde::Deserialize;

/// One row of the countries dataset.
#[derive(Debug, Deserialize)]
pub(crate) struct CountryRow {
    pub(crate) id: u64,
    pub(crate) code: String,
    pub(crate) name: String,
    pub(crate) continent: String,
    pub(crate) wikipedia_link: String,
    /// Comma-separated keyword list; commas inside the field arrive already
    /// unescaped by the CSV decoder.
    pub(crate) keywords: String,
}

/// One row of the airports dataset.
#[derive(Debug, Deserialize)]
pub(crate) struct AirportRow {
    pub(crate) id: u64,
    pub(crate) ident: String,
    #[serde(rename = "type")]
    pub(crate) kind: String,
    pub(crate) name: String,
    pub(crate) iso_country: String,
}

/// One row of the runways dataset.
#[derive(Debug, Deserialize)]
pub(crate) struct RunwayRow {
    pub(crate) id: u64,
    pub(crate) airport_ref: u64,
    pub(crate) le_ident: String,
    pub(crate) he_ident: String,
    pub(crate) surface: String,
    pub(crate) length_ft: Option<f64>,
    pub(crate) width_ft: Option<f64>,
}

impl CountryRow {
    pub(crate) fn into_country(self) -> Result<Country, CountryError> {
        Country::new(
            self.id,
            self.code,
            self.name,
            self.continent,
            self.wikipedia_link,
            split_keywords(&self.keywords),
        )
    }
}

impl AirportRow {
    pub(crate) fn into_airport(self) -> Airport {
        Airport::new(self.id, self.ident, self.kind, self.name, self.iso_country)
    }
}

impl RunwayRow {
    pub(crate) fn into_runway(self) -> Runway {
        Runway::new(
            self.id,
            self.airport_ref,
            self.surface,
            self.le_ident,
            self.he_ident,
            self.length_ft,
            self.width_ft,
        )
    }
}

/// Split the keywords field on commas, dropping blank entries but keeping
/// the source order.
fn split_keywords(raw: &str) -> Vec<String> {
    raw.split(',')
        .map(str::trim)
        .filter(|keyword| !keyword.is_empty())
        .map(ToOwned::to_owned)
        .collect()
}
