//! The immutable relational index over loaded entities.
//!
//! [`Index::build`] consumes the three entity collections exactly once and
//! derives the lookup structures every query and report reads from. Nothing
//! is mutated afterwards, so a built index can be shared freely across
//! threads; refreshing data means building a new index and switching callers
//! over to it.

use std::collections::{BTreeMap, HashMap};

use thiserror::Error;

use crate::text::{fold, tokens};
use crate::{Airport, Country, Runway};

/// Immutable lookup structures derived from one load of the three datasets.
///
/// # Examples
/// ```
/// use airfield_core::{Airport, Country, Index};
///
/// # fn main() -> Result<(), Box<dyn std::error::Error>> {
/// let countries = vec![Country::new(1, "ZW", "Zimbabwe", "AF", "", Vec::new())?];
/// let airports = vec![Airport::new(10, "FVHA", "large_airport", "Harare Intl", "ZW")];
/// let index = Index::build(countries, airports, Vec::new())?;
///
/// assert_eq!(index.stats().airports, 1);
/// assert!(index.country_by_code("zw").is_some());
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct Index {
    pub(crate) countries: Vec<Country>,
    pub(crate) airports: Vec<Airport>,
    pub(crate) runways: Vec<Runway>,
    /// Folded country names, parallel to `countries`.
    pub(crate) folded_names: Vec<String>,
    /// Folded country code -> index into `countries`. Unique.
    pub(crate) by_code: HashMap<String, usize>,
    /// Folded name token -> indices of countries whose name contains it.
    pub(crate) name_tokens: BTreeMap<String, Vec<usize>>,
    /// Folded country code -> indices into `airports`, in load order.
    /// Every country is keyed, zero-airport countries included.
    pub(crate) airports_by_country: HashMap<String, Vec<usize>>,
    /// Airport id -> indices into `runways`, in load order.
    /// Every airport is keyed, runway-less airports included.
    pub(crate) runways_by_airport: HashMap<u64, Vec<usize>>,
}

/// A dangling foreign key discovered while building the index.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ReferentialError {
    /// An airport names a country code that no loaded country carries.
    #[error("airport {airport_ident} (id {airport_id}) references unknown country code {country_code}")]
    UnknownCountry {
        /// Identifier of the offending airport.
        airport_id: u64,
        /// Ident code of the offending airport.
        airport_ident: String,
        /// The unresolvable country code.
        country_code: String,
    },
    /// A runway names an airport id that no loaded airport carries.
    #[error("runway {runway_id} references unknown airport id {airport_id}")]
    UnknownAirport {
        /// Identifier of the offending runway.
        runway_id: u64,
        /// The unresolvable airport id.
        airport_id: u64,
    },
}

/// Errors returned by [`Index::build`].
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum IndexError {
    /// Two countries carry the same (case-folded) code.
    #[error("duplicate country code {code}")]
    DuplicateCountryCode {
        /// The duplicated code, as it appears on the second record.
        code: String,
    },
    /// A foreign key failed to resolve.
    #[error(transparent)]
    Referential(#[from] ReferentialError),
}

/// Entity counts held by an [`Index`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct IndexStats {
    /// Number of loaded countries.
    pub countries: usize,
    /// Number of loaded airports.
    pub airports: usize,
    /// Number of loaded runways.
    pub runways: usize,
}

impl Index {
    /// Builds the index from the loaded entity collections.
    ///
    /// Runs the cross-dataset validation the loader cannot do row by row:
    /// country-code uniqueness and foreign-key resolution. Entity order is
    /// preserved, so `airports_of` and `runways_of` yield children in load
    /// order.
    ///
    /// # Errors
    /// Returns [`IndexError::DuplicateCountryCode`] when two countries share
    /// a code, or [`IndexError::Referential`] when an airport or runway
    /// references a parent that was never loaded. On error nothing of the
    /// partially built index escapes.
    pub fn build(
        countries: Vec<Country>,
        airports: Vec<Airport>,
        runways: Vec<Runway>,
    ) -> Result<Self, IndexError> {
        let folded_names: Vec<String> = countries.iter().map(|c| fold(&c.name)).collect();

        let mut by_code = HashMap::with_capacity(countries.len());
        for (idx, country) in countries.iter().enumerate() {
            if by_code.insert(fold(&country.code), idx).is_some() {
                return Err(IndexError::DuplicateCountryCode {
                    code: country.code.clone(),
                });
            }
        }

        let mut name_tokens: BTreeMap<String, Vec<usize>> = BTreeMap::new();
        for (idx, folded) in folded_names.iter().enumerate() {
            for token in tokens(folded) {
                let postings = name_tokens.entry(token.to_owned()).or_default();
                if postings.last() != Some(&idx) {
                    postings.push(idx);
                }
            }
        }

        let mut airports_by_country: HashMap<String, Vec<usize>> = countries
            .iter()
            .map(|c| (fold(&c.code), Vec::new()))
            .collect();
        for (idx, airport) in airports.iter().enumerate() {
            let Some(code) = &airport.country_code else {
                continue;
            };
            match airports_by_country.get_mut(&fold(code)) {
                Some(children) => children.push(idx),
                None => {
                    return Err(ReferentialError::UnknownCountry {
                        airport_id: airport.id,
                        airport_ident: airport.ident.clone(),
                        country_code: code.clone(),
                    }
                    .into());
                }
            }
        }

        let mut runways_by_airport: HashMap<u64, Vec<usize>> =
            airports.iter().map(|a| (a.id, Vec::new())).collect();
        for (idx, runway) in runways.iter().enumerate() {
            match runways_by_airport.get_mut(&runway.airport_id) {
                Some(children) => children.push(idx),
                None => {
                    return Err(ReferentialError::UnknownAirport {
                        runway_id: runway.id,
                        airport_id: runway.airport_id,
                    }
                    .into());
                }
            }
        }

        Ok(Self {
            countries,
            airports,
            runways,
            folded_names,
            by_code,
            name_tokens,
            airports_by_country,
            runways_by_airport,
        })
    }

    /// All loaded countries, in load order.
    #[must_use]
    pub fn countries(&self) -> &[Country] {
        &self.countries
    }

    /// All loaded airports, in load order.
    #[must_use]
    pub fn airports(&self) -> &[Airport] {
        &self.airports
    }

    /// All loaded runways, in load order.
    #[must_use]
    pub fn runways(&self) -> &[Runway] {
        &self.runways
    }

    /// Entity counts for this index.
    #[must_use]
    pub fn stats(&self) -> IndexStats {
        IndexStats {
            countries: self.countries.len(),
            airports: self.airports.len(),
            runways: self.runways.len(),
        }
    }

    /// Resolves a country by code, case-insensitively.
    #[must_use]
    pub fn country_by_code(&self, code: &str) -> Option<&Country> {
        self.by_code
            .get(&fold(code))
            .and_then(|&idx| self.countries.get(idx))
    }

    /// The airports owned by `country`, in load order.
    ///
    /// Yields nothing for a country that owns no airports or that does not
    /// belong to this index.
    pub fn airports_of<'a>(&'a self, country: &Country) -> impl Iterator<Item = &'a Airport> {
        self.airports_by_country
            .get(&fold(&country.code))
            .into_iter()
            .flatten()
            .filter_map(|&idx| self.airports.get(idx))
    }

    /// The runways belonging to `airport`, in load order.
    pub fn runways_of<'a>(&'a self, airport: &Airport) -> impl Iterator<Item = &'a Runway> {
        self.runways_by_airport
            .get(&airport.id)
            .into_iter()
            .flatten()
            .filter_map(|&idx| self.runways.get(idx))
    }
}
