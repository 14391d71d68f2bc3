//! Fuzzy country lookup and nested result assembly.
//!
//! Lookup order: an exact (case-insensitive) code match wins outright;
//! otherwise every country whose folded name contains the query as a
//! contiguous substring matches, with prefix matches ranked ahead of
//! interior matches and ties broken by ascending name.

use std::collections::BTreeSet;

use crate::{Airport, Country, Index, Runway};

/// One matched country with its airports and their runways.
///
/// Assembly uses outer-join semantics: a matched country with no airports
/// still appears, with an empty `airports` list, and an airport keeps its
/// entry even when it has no runways.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct CountryMatch<'a> {
    /// The matched country.
    pub country: &'a Country,
    /// The country's airports, in load order; may be empty.
    pub airports: Vec<AirportRunways<'a>>,
}

/// An airport paired with its runways.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct AirportRunways<'a> {
    /// The airport.
    pub airport: &'a Airport,
    /// The airport's runways, in load order; may be empty.
    pub runways: Vec<&'a Runway>,
}

impl Index {
    /// Resolves free-text input to countries, best match first.
    ///
    /// An empty or whitespace-only query short-circuits to an empty result
    /// without scanning; no query outcome is an error.
    ///
    /// # Examples
    /// ```
    /// use airfield_core::{Country, Index};
    ///
    /// # fn main() -> Result<(), Box<dyn std::error::Error>> {
    /// let countries = vec![Country::new(1, "ZW", "Zimbabwe", "AF", "", Vec::new())?];
    /// let index = Index::build(countries, Vec::new(), Vec::new())?;
    ///
    /// let matches = index.lookup_country("zimb");
    /// assert_eq!(matches.len(), 1);
    /// assert_eq!(matches[0].country.code, "ZW");
    /// assert!(index.lookup_country("  ").is_empty());
    /// # Ok(())
    /// # }
    /// ```
    #[must_use]
    pub fn lookup_country(&self, query: &str) -> Vec<CountryMatch<'_>> {
        let needle = crate::text::fold(query);
        if needle.is_empty() {
            return Vec::new();
        }

        if let Some(&idx) = self.by_code.get(&needle) {
            return vec![self.assemble(idx)];
        }

        let mut ranked: Vec<usize> = self.name_candidates(&needle).into_iter().collect();
        ranked.sort_by(|&a, &b| {
            let a_prefix = self.folded_names.get(a).is_some_and(|n| n.starts_with(&needle));
            let b_prefix = self.folded_names.get(b).is_some_and(|n| n.starts_with(&needle));
            b_prefix
                .cmp(&a_prefix)
                .then_with(|| self.name_key(a).cmp(&self.name_key(b)))
        });

        ranked.into_iter().map(|idx| self.assemble(idx)).collect()
    }

    /// Countries whose folded name contains `needle` as a substring.
    ///
    /// A whitespace-free needle cannot span a token boundary, so it is
    /// resolved through the token postings; needles containing whitespace
    /// fall back to a scan over the folded names.
    fn name_candidates(&self, needle: &str) -> BTreeSet<usize> {
        if needle.contains(char::is_whitespace) {
            self.folded_names
                .iter()
                .enumerate()
                .filter(|(_, name)| name.contains(needle))
                .map(|(idx, _)| idx)
                .collect()
        } else {
            self.name_tokens
                .iter()
                .filter(|(token, _)| token.contains(needle))
                .flat_map(|(_, postings)| postings.iter().copied())
                .collect()
        }
    }

    fn name_key(&self, idx: usize) -> (Option<&String>, Option<&String>) {
        let country = self.countries.get(idx);
        (country.map(|c| &c.name), country.map(|c| &c.code))
    }

    fn assemble(&self, idx: usize) -> CountryMatch<'_> {
        // idx always comes from this index's own lookup structures.
        let country = &self.countries[idx];
        let airports = self
            .airports_of(country)
            .map(|airport| AirportRunways {
                airport,
                runways: self.runways_of(airport).collect(),
            })
            .collect();
        CountryMatch { country, airports }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::{fixture, rstest};

    fn country(id: u64, code: &str, name: &str) -> Country {
        Country::new(id, code, name, "", "", Vec::new()).expect("valid country")
    }

    #[fixture]
    fn index() -> Index {
        let countries = vec![
            country(1, "ZW", "Zimbabwe"),
            country(2, "US", "United States"),
            country(3, "GB", "United Kingdom"),
            country(4, "AE", "United Arab Emirates"),
            country(5, "TZ", "Tanzania"),
        ];
        Index::build(countries, Vec::new(), Vec::new()).expect("valid dataset")
    }

    #[rstest]
    #[case("")]
    #[case("   ")]
    #[case("\t\n")]
    fn blank_query_short_circuits(index: Index, #[case] query: &str) {
        assert!(index.lookup_country(query).is_empty());
    }

    #[rstest]
    #[case("ZW")]
    #[case("zw")]
    #[case(" zw ")]
    fn exact_code_is_sole_match(index: Index, #[case] query: &str) {
        let matches = index.lookup_country(query);
        assert_eq!(matches.len(), 1);
        assert_eq!(matches[0].country.code, "ZW");
    }

    #[rstest]
    fn partial_name_matches(index: Index) {
        let names: Vec<&str> = index
            .lookup_country("tan")
            .iter()
            .map(|m| m.country.name.as_str())
            .collect();
        assert_eq!(names, vec!["Tanzania"]);
    }

    #[rstest]
    fn interior_matches_sort_by_name(index: Index) {
        let names: Vec<&str> = index
            .lookup_country("united")
            .iter()
            .map(|m| m.country.name.as_str())
            .collect();
        assert_eq!(
            names,
            vec!["United Arab Emirates", "United Kingdom", "United States"]
        );
    }

    #[rstest]
    fn query_spanning_tokens_matches_full_name(index: Index) {
        let names: Vec<&str> = index
            .lookup_country("united ki")
            .iter()
            .map(|m| m.country.name.as_str())
            .collect();
        assert_eq!(names, vec!["United Kingdom"]);
    }

    #[rstest]
    fn no_match_is_empty_not_error(index: Index) {
        assert!(index.lookup_country("atlantis").is_empty());
    }
}
