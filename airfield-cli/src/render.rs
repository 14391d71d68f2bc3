//! Text and JSON rendering of query and report results.

use airfield_core::{
    AirportCountExtremes, AirportRunways, CountryMatch, CountrySurfaces, IdentCount, Runway,
    UNKNOWN_SURFACE,
};
use serde::Serialize;

use crate::CliError;

/// Serialize any result type as pretty-printed JSON.
pub(crate) fn json<T: Serialize>(value: &T) -> Result<String, CliError> {
    serde_json::to_string_pretty(value).map_err(CliError::SerializeOutput)
}

pub(crate) fn lookup_text(matches: &[CountryMatch<'_>]) -> String {
    if matches.is_empty() {
        return "no matching country".to_owned();
    }
    let mut out = String::new();
    for matched in matches {
        let country = matched.country;
        out.push_str(&format!(
            "{} ({}): {} airport(s)\n",
            country.name,
            country.code,
            matched.airports.len()
        ));
        for entry in &matched.airports {
            out.push_str(&airport_line(entry));
            for runway in &entry.runways {
                out.push_str(&runway_line(runway));
            }
        }
    }
    out.trim_end().to_owned()
}

fn airport_line(entry: &AirportRunways<'_>) -> String {
    format!(
        "  {} {} ({}), {} runway(s)\n",
        entry.airport.ident,
        entry.airport.name,
        entry.airport.kind,
        entry.runways.len()
    )
}

fn runway_line(runway: &Runway) -> String {
    let le = runway.le_ident.as_deref().unwrap_or("-");
    let he = runway.he_ident.as_deref().unwrap_or("-");
    let surface = if runway.surface.trim().is_empty() {
        UNKNOWN_SURFACE
    } else {
        &runway.surface
    };
    let mut line = format!("    {le}/{he} surface {surface}");
    if let Some(length) = runway.length_ft {
        line.push_str(&format!(" length {length} ft"));
    }
    if let Some(width) = runway.width_ft {
        line.push_str(&format!(" width {width} ft"));
    }
    line.push('\n');
    line
}

pub(crate) fn extremes_text(extremes: &AirportCountExtremes<'_>) -> String {
    let mut out = String::from("Countries with the most airports:\n");
    push_counts(&mut out, &extremes.top);
    out.push_str("Countries with the fewest airports:\n");
    push_counts(&mut out, &extremes.bottom);
    out.trim_end().to_owned()
}

fn push_counts(out: &mut String, counts: &[airfield_core::CountryAirportCount<'_>]) {
    for (rank, entry) in counts.iter().enumerate() {
        out.push_str(&format!(
            "  {}. {} ({}): {}\n",
            rank + 1,
            entry.country.name,
            entry.country.code,
            entry.count
        ));
    }
}

pub(crate) fn surfaces_text(rows: &[CountrySurfaces<'_>]) -> String {
    let mut out = String::new();
    for row in rows {
        if row.surfaces.is_empty() {
            out.push_str(&format!(
                "{} ({}): no runways\n",
                row.country.name, row.country.code
            ));
            continue;
        }
        out.push_str(&format!("{} ({}):\n", row.country.name, row.country.code));
        for (surface, count) in &row.surfaces {
            out.push_str(&format!("  {surface}: {count}\n"));
        }
    }
    out.trim_end().to_owned()
}

pub(crate) fn idents_text(idents: &[IdentCount]) -> String {
    if idents.is_empty() {
        return "no runway identifiers recorded".to_owned();
    }
    let mut out = String::new();
    for (rank, entry) in idents.iter().enumerate() {
        out.push_str(&format!("  {}. {}: {}\n", rank + 1, entry.ident, entry.count));
    }
    out.trim_end().to_owned()
}
