//! Fail-fast CSV loading of the three datasets into an [`Index`].
//!
//! The loader parses countries, airports, and runways in dependency order,
//! aborting on the first malformed row so that no partially consistent index
//! can ever be observed. Cross-dataset validation (code uniqueness, foreign
//! keys) happens in [`Index::build`] once all three collections parsed.

use std::fmt;
use std::fs::File;
use std::io;

use airfield_core::{Airport, Country, CountryError, Index, IndexError, Runway};
use camino::{Utf8Path, Utf8PathBuf};
use csv::{Position, ReaderBuilder, StringRecord};
use log::info;
use serde::de::DeserializeOwned;
use thiserror::Error;

mod rows;

use rows::{AirportRow, CountryRow, RunwayRow};

/// Which of the three source datasets an error refers to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Dataset {
    /// The countries dataset.
    Countries,
    /// The airports dataset.
    Airports,
    /// The runways dataset.
    Runways,
}

impl fmt::Display for Dataset {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Countries => "countries",
            Self::Airports => "airports",
            Self::Runways => "runways",
        };
        f.write_str(name)
    }
}

/// Errors returned by the load entry points.
///
/// Row numbers are 1-based physical lines of the source, so the first data
/// row of a well-formed file is row 2.
#[derive(Debug, Error)]
pub enum LoadError {
    /// A dataset file could not be opened.
    #[error("failed to open {dataset} at {path}: {source}")]
    Open {
        /// Which dataset failed to open.
        dataset: Dataset,
        /// The path that was tried.
        path: Utf8PathBuf,
        /// Underlying I/O error.
        #[source]
        source: io::Error,
    },
    /// A row failed to decode: wrong field count, bad quoting, or an
    /// unparsable numeric field.
    #[error("malformed {dataset} row {row}: {source}")]
    Malformed {
        /// Which dataset carried the row.
        dataset: Dataset,
        /// 1-based line of the offending row.
        row: u64,
        /// Decoder error describing the defect.
        #[source]
        source: csv::Error,
    },
    /// A country row decoded but failed entity validation.
    #[error("invalid country row {row}: {source}")]
    InvalidCountry {
        /// 1-based line of the offending row.
        row: u64,
        /// The validation failure.
        #[source]
        source: CountryError,
    },
    /// Two country rows carry the same (case-insensitive) code.
    #[error("duplicate country code {code} at countries row {row}")]
    DuplicateCountryCode {
        /// 1-based line of the second occurrence.
        row: u64,
        /// The duplicated code.
        code: String,
    },
    /// Cross-dataset validation failed while building the index.
    #[error(transparent)]
    Index(#[from] IndexError),
}

/// Load the three datasets from readers and build the index.
///
/// This is the primary entry point for callers that already hold the raw
/// bytes (tests, in-memory callers, a download layer). The load is
/// fail-fast: the first defect aborts and no index is returned.
///
/// # Errors
/// Returns [`LoadError`] naming the dataset and row for parse defects, or
/// wrapping [`IndexError`] for duplicate codes and dangling references.
///
/// # Examples
/// ```
/// use airfield_data::load_readers;
///
/// # fn main() -> Result<(), airfield_data::LoadError> {
/// let countries = "id,code,name,continent,wikipedia_link,keywords\n\
///                  1,ZW,Zimbabwe,AF,https://en.wikipedia.org/wiki/Zimbabwe,\n";
/// let airports = "id,ident,type,name,iso_country\n";
/// let runways = "id,airport_ref,surface,le_ident,he_ident,length_ft,width_ft\n";
///
/// let index = load_readers(countries.as_bytes(), airports.as_bytes(), runways.as_bytes())?;
/// assert_eq!(index.stats().countries, 1);
/// # Ok(())
/// # }
/// ```
pub fn load_readers(
    countries: impl io::Read,
    airports: impl io::Read,
    runways: impl io::Read,
) -> Result<Index, LoadError> {
    let countries = read_countries(countries)?;
    let airports = read_airports(airports)?;
    let runways = read_runways(runways)?;

    let index = Index::build(countries, airports, runways)?;
    let stats = index.stats();
    info!(
        "indexed {} countries, {} airports, {} runways",
        stats.countries, stats.airports, stats.runways
    );
    Ok(index)
}

/// Load the three datasets from CSV files and build the index.
///
/// # Errors
/// Returns [`LoadError::Open`] when a file cannot be opened, otherwise the
/// same failures as [`load_readers`].
pub fn load_paths(
    countries: &Utf8Path,
    airports: &Utf8Path,
    runways: &Utf8Path,
) -> Result<Index, LoadError> {
    load_readers(
        open(Dataset::Countries, countries)?,
        open(Dataset::Airports, airports)?,
        open(Dataset::Runways, runways)?,
    )
}

fn open(dataset: Dataset, path: &Utf8Path) -> Result<File, LoadError> {
    File::open(path).map_err(|source| LoadError::Open {
        dataset,
        path: path.to_owned(),
        source,
    })
}

/// Parse the countries dataset, enforcing per-row validity and code
/// uniqueness.
///
/// # Errors
/// Returns [`LoadError`] on the first malformed, invalid, or duplicate row.
pub fn read_countries(reader: impl io::Read) -> Result<Vec<Country>, LoadError> {
    let rows = deserialize_rows::<CountryRow>(Dataset::Countries, reader)?;
    let mut seen = std::collections::HashSet::with_capacity(rows.len());
    let mut countries = Vec::with_capacity(rows.len());
    for (row, raw) in rows {
        if !seen.insert(raw.code.trim().to_lowercase()) {
            return Err(LoadError::DuplicateCountryCode {
                row,
                code: raw.code,
            });
        }
        let country = raw
            .into_country()
            .map_err(|source| LoadError::InvalidCountry { row, source })?;
        countries.push(country);
    }
    info!("loaded {} countries", countries.len());
    Ok(countries)
}

/// Parse the airports dataset.
///
/// # Errors
/// Returns [`LoadError::Malformed`] on the first undecodable row.
pub fn read_airports(reader: impl io::Read) -> Result<Vec<Airport>, LoadError> {
    let rows = deserialize_rows::<AirportRow>(Dataset::Airports, reader)?;
    let airports: Vec<Airport> = rows.into_iter().map(|(_, raw)| raw.into_airport()).collect();
    info!("loaded {} airports", airports.len());
    Ok(airports)
}

/// Parse the runways dataset.
///
/// # Errors
/// Returns [`LoadError::Malformed`] on the first undecodable row.
pub fn read_runways(reader: impl io::Read) -> Result<Vec<Runway>, LoadError> {
    let rows = deserialize_rows::<RunwayRow>(Dataset::Runways, reader)?;
    let runways: Vec<Runway> = rows.into_iter().map(|(_, raw)| raw.into_runway()).collect();
    info!("loaded {} runways", runways.len());
    Ok(runways)
}

/// Decode every row of one dataset, pairing each with its 1-based line.
///
/// Quoting and field-count rules follow RFC-style CSV as implemented by the
/// `csv` crate: fields containing the delimiter, quotes, or newlines must be
/// quoted, embedded quotes doubled, and every record must match the header's
/// field count.
fn deserialize_rows<T: DeserializeOwned>(
    dataset: Dataset,
    reader: impl io::Read,
) -> Result<Vec<(u64, T)>, LoadError> {
    let mut decoder = ReaderBuilder::new().has_headers(true).from_reader(reader);
    let headers = decoder
        .headers()
        .map_err(|source| LoadError::Malformed {
            dataset,
            row: 1,
            source,
        })?
        .clone();

    let mut rows = Vec::new();
    let mut record = StringRecord::new();
    loop {
        let line = decoder.position().line();
        match decoder.read_record(&mut record) {
            Ok(false) => break,
            Ok(true) => {
                let row: T = record.deserialize(Some(&headers)).map_err(|source| {
                    LoadError::Malformed {
                        dataset,
                        row: line,
                        source,
                    }
                })?;
                rows.push((line, row));
            }
            Err(source) => {
                let row = source.position().map_or(line, Position::line);
                return Err(LoadError::Malformed {
                    dataset,
                    row,
                    source,
                });
            }
        }
    }
    Ok(rows)
}
