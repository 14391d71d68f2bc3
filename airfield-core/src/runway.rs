/// A runway record from the runways dataset.
///
/// A runway belongs to exactly one airport via `airport_id`. The low/high end
/// identifiers and the physical dimensions are optional in the source data;
/// blank fields load as `None`.
///
/// # Examples
/// ```
/// use airfield_core::Runway;
///
/// let runway = Runway::new(269_408, 3_632, "ASP", "06L", "24R", Some(8_925.0), Some(150.0));
/// assert_eq!(runway.le_ident.as_deref(), Some("06L"));
/// assert_eq!(runway.surface, "ASP");
/// ```
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Runway {
    /// Unique numeric identifier.
    pub id: u64,
    /// Identifier of the owning airport.
    pub airport_id: u64,
    /// Free-text surface material descriptor; may be empty.
    pub surface: String,
    /// Low-end runway designation, e.g. `06L`; `None` when blank.
    pub le_ident: Option<String>,
    /// High-end runway designation, e.g. `24R`; `None` when blank.
    pub he_ident: Option<String>,
    /// Runway length in feet, when recorded.
    pub length_ft: Option<f64>,
    /// Runway width in feet, when recorded.
    pub width_ft: Option<f64>,
}

impl Runway {
    /// Constructs a [`Runway`], normalising blank end identifiers to `None`.
    pub fn new(
        id: u64,
        airport_id: u64,
        surface: impl Into<String>,
        le_ident: impl Into<String>,
        he_ident: impl Into<String>,
        length_ft: Option<f64>,
        width_ft: Option<f64>,
    ) -> Self {
        Self {
            id,
            airport_id,
            surface: surface.into(),
            le_ident: non_blank(le_ident.into()),
            he_ident: non_blank(he_ident.into()),
            length_ft,
            width_ft,
        }
    }
}

fn non_blank(value: String) -> Option<String> {
    (!value.trim().is_empty()).then_some(value)
}
