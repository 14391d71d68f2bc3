//! Core domain types and query/report engine for the airfield engine.
//!
//! The crate models one load of the three relational datasets (countries,
//! airports, runways) as immutable entities, derives an [`Index`] over them
//! exactly once, and answers fuzzy country lookups and aggregate reports as
//! pure reads against that index. Parsing raw rows lives in
//! `airfield-data`; presentation lives in `airfield-cli`.
//!
//! Because nothing is mutated after [`Index::build`], a built index can be
//! shared across threads without locking; refreshing data means building a
//! new index and letting in-flight readers finish on the old one.
//!
//! # Examples
//! ```
//! use airfield_core::{Airport, Country, Index, Runway, RunwayEnd};
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let countries = vec![
//!     Country::new(1, "ZW", "Zimbabwe", "AF", "", Vec::new())?,
//!     Country::new(2, "US", "United States", "NA", "", Vec::new())?,
//! ];
//! let airports = vec![Airport::new(10, "KLAX", "large_airport", "Los Angeles Intl", "US")];
//! let runways = vec![Runway::new(100, 10, "ASP", "06L", "24R", None, None)];
//! let index = Index::build(countries, airports, runways)?;
//!
//! let matches = index.lookup_country("zimb");
//! assert_eq!(matches[0].country.name, "Zimbabwe");
//! assert!(matches[0].airports.is_empty());
//!
//! let idents = index.top_runway_idents(10, RunwayEnd::Low);
//! assert_eq!(idents[0].ident, "06L");
//! # Ok(())
//! # }
//! ```

#![forbid(unsafe_code)]

mod airport;
mod country;
mod index;
mod query;
mod report;
mod runway;
mod text;

pub use airport::Airport;
pub use country::{Country, CountryError};
pub use index::{Index, IndexError, IndexStats, ReferentialError};
pub use query::{AirportRunways, CountryMatch};
pub use report::{
    AirportCountExtremes, CountryAirportCount, CountrySurfaces, IdentCount, RunwayEnd,
    UNKNOWN_SURFACE,
};
pub use runway::Runway;
