//! Facade crate for the airfield query and report engine.
//!
//! This crate re-exports the core domain types, index, and query/report
//! surface, and exposes the CSV loader behind the `data` feature.

#![forbid(unsafe_code)]

pub use airfield_core::{
    Airport, AirportCountExtremes, AirportRunways, Country, CountryAirportCount, CountryError,
    CountryMatch, CountrySurfaces, IdentCount, Index, IndexError, IndexStats, ReferentialError,
    Runway, RunwayEnd, UNKNOWN_SURFACE,
};

#[cfg(feature = "data")]
pub use airfield_data::{
    Dataset, LoadError, load_paths, load_readers, read_airports, read_countries, read_runways,
};
