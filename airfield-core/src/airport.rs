/// An airport record from the airports dataset.
///
/// `country_code` is `None` when the source row left the ISO country field
/// blank; a `Some` value must resolve to a loaded [`Country`](crate::Country)
/// when the [`Index`](crate::Index) is built.
///
/// # Examples
/// ```
/// use airfield_core::Airport;
///
/// let airport = Airport::new(3_632, "KLAX", "large_airport", "Los Angeles Intl", "US");
/// assert_eq!(airport.country_code.as_deref(), Some("US"));
///
/// let orphan = Airport::new(1, "ZZZZ", "closed", "Unplaced strip", "");
/// assert_eq!(orphan.country_code, None);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Airport {
    /// Unique numeric identifier.
    pub id: u64,
    /// Airport ident code, e.g. `KLAX`.
    pub ident: String,
    /// Airport type descriptor, e.g. `large_airport` or `heliport`.
    pub kind: String,
    /// Display name.
    pub name: String,
    /// Owning country code; `None` when the source field was blank.
    pub country_code: Option<String>,
}

impl Airport {
    /// Constructs an [`Airport`], normalising a blank country code to `None`.
    pub fn new(
        id: u64,
        ident: impl Into<String>,
        kind: impl Into<String>,
        name: impl Into<String>,
        country_code: impl Into<String>,
    ) -> Self {
        let country_code = country_code.into();
        Self {
            id,
            ident: ident.into(),
            kind: kind.into(),
            name: name.into(),
            country_code: (!country_code.trim().is_empty()).then_some(country_code),
        }
    }
}
