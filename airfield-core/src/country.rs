use thiserror::Error;

/// A country record from the countries dataset.
///
/// The `code` is the join key used by airports; it must be non-empty and is
/// unique across a loaded dataset (uniqueness is enforced when the
/// [`Index`](crate::Index) is built).
///
/// # Examples
/// ```
/// use airfield_core::Country;
///
/// # fn main() -> Result<(), airfield_core::CountryError> {
/// let country = Country::new(302_672, "ZW", "Zimbabwe", "AF", "", Vec::new())?;
/// assert_eq!(country.code, "ZW");
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Country {
    /// Unique numeric identifier.
    pub id: u64,
    /// ISO-style country code, unique across the dataset.
    pub code: String,
    /// Display name, e.g. `Zimbabwe`.
    pub name: String,
    /// Continent code, e.g. `AF`.
    pub continent: String,
    /// Wikipedia article URL for the country.
    pub wikipedia_link: String,
    /// Ordered search keywords associated with the country.
    pub keywords: Vec<String>,
}

/// Errors returned by [`Country::new`].
#[derive(Debug, Error, PartialEq, Eq)]
pub enum CountryError {
    /// The country code was empty or whitespace-only.
    #[error("country {id} has an empty code")]
    EmptyCode {
        /// Identifier of the offending record.
        id: u64,
    },
}

impl Country {
    /// Validates and constructs a [`Country`].
    ///
    /// # Errors
    /// Returns [`CountryError::EmptyCode`] when `code` is empty after
    /// trimming; an empty code could never be joined against.
    pub fn new(
        id: u64,
        code: impl Into<String>,
        name: impl Into<String>,
        continent: impl Into<String>,
        wikipedia_link: impl Into<String>,
        keywords: Vec<String>,
    ) -> Result<Self, CountryError> {
        let code = code.into();
        if code.trim().is_empty() {
            return Err(CountryError::EmptyCode { id });
        }
        Ok(Self {
            id,
            code,
            name: name.into(),
            continent: continent.into(),
            wikipedia_link: wikipedia_link.into(),
            keywords,
        })
    }
}
