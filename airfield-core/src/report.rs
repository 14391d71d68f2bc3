//! Aggregate reports over the index.
//!
//! All three reports are pure reads with outer-join semantics: countries
//! with no airports and airports with no runways participate with zero
//! counts rather than dropping out.

use std::collections::{BTreeMap, HashMap};

use crate::{Country, Index};

/// Surface label used for runways whose surface field is blank.
pub const UNKNOWN_SURFACE: &str = "unknown";

/// Which end of a runway to tally in [`Index::top_runway_idents`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum RunwayEnd {
    /// Tally `le_ident` (the primary report).
    #[default]
    Low,
    /// Tally `he_ident`.
    High,
}

/// One country with its airport count.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct CountryAirportCount<'a> {
    /// The country.
    pub country: &'a Country,
    /// How many airports the country owns.
    pub count: usize,
}

/// Countries with the most and fewest airports.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct AirportCountExtremes<'a> {
    /// Up to `limit` countries, airport count descending.
    pub top: Vec<CountryAirportCount<'a>>,
    /// Up to `limit` countries, airport count ascending.
    pub bottom: Vec<CountryAirportCount<'a>>,
}

/// Per-surface runway counts for one country.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct CountrySurfaces<'a> {
    /// The country.
    pub country: &'a Country,
    /// Runway count per surface label, case-preserved; blank surfaces are
    /// grouped under [`UNKNOWN_SURFACE`]. Empty for runway-less countries.
    pub surfaces: BTreeMap<String, usize>,
}

/// One runway end identifier with its global occurrence count.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct IdentCount {
    /// The runway end identifier, e.g. `09` or `06L`.
    pub ident: String,
    /// How many runways carry it.
    pub count: usize,
}

impl Index {
    /// The countries with the most and the fewest airports.
    ///
    /// Ties are broken by ascending country name. Zero-airport countries
    /// compete like any other, so they dominate the bottom list. With few
    /// countries relative to `limit` the same country may appear in both
    /// lists; that is a property of the data, not an error.
    #[must_use]
    pub fn airport_count_extremes(&self, limit: usize) -> AirportCountExtremes<'_> {
        let mut counts: Vec<CountryAirportCount<'_>> = self
            .countries
            .iter()
            .map(|country| CountryAirportCount {
                country,
                count: self.airports_of(country).count(),
            })
            .collect();
        counts.sort_by(|a, b| {
            b.count
                .cmp(&a.count)
                .then_with(|| a.country.name.cmp(&b.country.name))
        });

        let top = counts.iter().take(limit).cloned().collect();
        counts.sort_by(|a, b| {
            a.count
                .cmp(&b.count)
                .then_with(|| a.country.name.cmp(&b.country.name))
        });
        let bottom = counts.into_iter().take(limit).collect();

        AirportCountExtremes { top, bottom }
    }

    /// Runway counts per surface type for every country.
    ///
    /// One entry per loaded country, sorted by ascending name. Runways are
    /// reached transitively through the country's airports.
    #[must_use]
    pub fn surface_types_by_country(&self) -> Vec<CountrySurfaces<'_>> {
        let mut rows: Vec<CountrySurfaces<'_>> = self
            .countries
            .iter()
            .map(|country| {
                let mut surfaces: BTreeMap<String, usize> = BTreeMap::new();
                for airport in self.airports_of(country) {
                    for runway in self.runways_of(airport) {
                        let label = if runway.surface.trim().is_empty() {
                            UNKNOWN_SURFACE.to_owned()
                        } else {
                            runway.surface.clone()
                        };
                        *surfaces.entry(label).or_default() += 1;
                    }
                }
                CountrySurfaces { country, surfaces }
            })
            .collect();
        rows.sort_by(|a, b| {
            a.country
                .name
                .cmp(&b.country.name)
                .then_with(|| a.country.code.cmp(&b.country.code))
        });
        rows
    }

    /// The most common runway end identifiers across all runways.
    ///
    /// Blank identifiers are excluded; they designate nothing. Results are
    /// ordered by count descending, then identifier ascending.
    #[must_use]
    pub fn top_runway_idents(&self, limit: usize, end: RunwayEnd) -> Vec<IdentCount> {
        let mut tallies: HashMap<&str, usize> = HashMap::new();
        for runway in &self.runways {
            let ident = match end {
                RunwayEnd::Low => runway.le_ident.as_deref(),
                RunwayEnd::High => runway.he_ident.as_deref(),
            };
            if let Some(ident) = ident.filter(|i| !i.trim().is_empty()) {
                *tallies.entry(ident).or_default() += 1;
            }
        }

        let mut ranked: Vec<IdentCount> = tallies
            .into_iter()
            .map(|(ident, count)| IdentCount {
                ident: ident.to_owned(),
                count,
            })
            .collect();
        ranked.sort_by(|a, b| b.count.cmp(&a.count).then_with(|| a.ident.cmp(&b.ident)));
        ranked.truncate(limit);
        ranked
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Airport, Country, Runway};
    use rstest::{fixture, rstest};

    fn country(id: u64, code: &str, name: &str) -> Country {
        Country::new(id, code, name, "", "", Vec::new()).expect("valid country")
    }

    #[fixture]
    fn index() -> Index {
        let countries = vec![country(1, "ZW", "Zimbabwe"), country(2, "US", "United States")];
        let airports = vec![
            Airport::new(10, "KLAX", "large_airport", "Los Angeles Intl", "US"),
            Airport::new(11, "KJFK", "large_airport", "John F Kennedy Intl", "US"),
            Airport::new(12, "KSEA", "large_airport", "Seattle Tacoma Intl", "US"),
        ];
        let runways = vec![
            Runway::new(100, 10, "ASP", "06L", "24R", None, None),
            Runway::new(101, 10, "asp", "06R", "24L", None, None),
            Runway::new(102, 11, "", "04L", "22R", None, None),
            Runway::new(103, 12, "CON", "", "34C", None, None),
        ];
        Index::build(countries, airports, runways).expect("valid dataset")
    }

    #[rstest]
    fn extremes_include_zero_airport_countries(index: Index) {
        let extremes = index.airport_count_extremes(1);
        assert_eq!(extremes.top.len(), 1);
        assert_eq!(extremes.top[0].country.code, "US");
        assert_eq!(extremes.top[0].count, 3);
        assert_eq!(extremes.bottom[0].country.code, "ZW");
        assert_eq!(extremes.bottom[0].count, 0);
    }

    #[rstest]
    fn extremes_truncate_to_country_count(index: Index) {
        let extremes = index.airport_count_extremes(10);
        assert_eq!(extremes.top.len(), 2);
        assert_eq!(extremes.bottom.len(), 2);
    }

    #[rstest]
    fn surfaces_preserve_case_and_group_blanks(index: Index) {
        let rows = index.surface_types_by_country();
        // Sorted by name: United States before Zimbabwe.
        assert_eq!(rows[0].country.code, "US");
        assert_eq!(rows[0].surfaces.get("ASP"), Some(&1));
        assert_eq!(rows[0].surfaces.get("asp"), Some(&1));
        assert_eq!(rows[0].surfaces.get("CON"), Some(&1));
        assert_eq!(rows[0].surfaces.get(UNKNOWN_SURFACE), Some(&1));
    }

    #[rstest]
    fn surfaces_keep_runway_less_countries(index: Index) {
        let rows = index.surface_types_by_country();
        assert_eq!(rows[1].country.code, "ZW");
        assert!(rows[1].surfaces.is_empty());
    }

    #[rstest]
    fn ident_report_skips_blank_idents(index: Index) {
        let low = index.top_runway_idents(10, RunwayEnd::Low);
        assert_eq!(low.len(), 3);
        assert!(low.iter().all(|entry| !entry.ident.is_empty()));

        let high = index.top_runway_idents(10, RunwayEnd::High);
        assert_eq!(high.len(), 4);
    }

    #[rstest]
    fn ident_report_breaks_count_ties_by_ident(index: Index) {
        let low = index.top_runway_idents(2, RunwayEnd::Low);
        assert_eq!(low[0].ident, "04L");
        assert_eq!(low[1].ident, "06L");
    }

    #[rstest]
    fn zero_limit_yields_empty_lists(index: Index) {
        let extremes = index.airport_count_extremes(0);
        assert!(extremes.top.is_empty());
        assert!(extremes.bottom.is_empty());
        assert!(index.top_runway_idents(0, RunwayEnd::Low).is_empty());
    }
}
