//! Behaviour tests for fail-fast dataset loading.

use airfield_core::{IndexError, ReferentialError};
use airfield_data::{Dataset, LoadError, load_paths, load_readers};
use camino::Utf8PathBuf;
use rstest::{fixture, rstest};
use std::io::Write;

const COUNTRIES: &str = "\
id,code,name,continent,wikipedia_link,keywords
302672,ZW,Zimbabwe,AF,https://en.wikipedia.org/wiki/Zimbabwe,\"Rhodesia, Southern Rhodesia\"
302755,US,United States,NA,https://en.wikipedia.org/wiki/United_States,\"America, \"\"the states\"\"\"
";

const AIRPORTS: &str = "\
id,ident,type,name,iso_country,extra_column
3632,KLAX,large_airport,Los Angeles International Airport,US,ignored
3754,KJFK,large_airport,John F Kennedy International Airport,US,ignored
26708,ZZZZ,closed,Unplaced strip,,ignored
";

const RUNWAYS: &str = "\
id,airport_ref,le_ident,he_ident,surface,length_ft,width_ft
269408,3632,06L,24R,ASP,8925,150
269409,3632,06R,24L,ASP,10285,150
253546,3754,04L,22R,CON,12079,
";

fn load(countries: &str, airports: &str, runways: &str) -> Result<airfield_core::Index, LoadError> {
    load_readers(countries.as_bytes(), airports.as_bytes(), runways.as_bytes())
}

#[fixture]
fn index() -> airfield_core::Index {
    load(COUNTRIES, AIRPORTS, RUNWAYS).expect("fixture dataset is valid")
}

#[rstest]
fn loads_all_three_datasets(index: airfield_core::Index) {
    let stats = index.stats();
    assert_eq!(stats.countries, 2);
    assert_eq!(stats.airports, 3);
    assert_eq!(stats.runways, 3);
}

#[rstest]
fn unescapes_quoted_keyword_lists(index: airfield_core::Index) {
    let zimbabwe = index.country_by_code("ZW").expect("ZW is loaded");
    assert_eq!(zimbabwe.keywords, vec!["Rhodesia", "Southern Rhodesia"]);

    // Doubled quotes inside a quoted field unescape to literal quotes.
    let us = index.country_by_code("US").expect("US is loaded");
    assert_eq!(us.keywords, vec!["America", "\"the states\""]);
}

#[rstest]
fn blank_numeric_fields_load_as_none(index: airfield_core::Index) {
    let runway = index
        .runways()
        .iter()
        .find(|r| r.id == 253_546)
        .expect("runway is loaded");
    assert_eq!(runway.length_ft, Some(12_079.0));
    assert_eq!(runway.width_ft, None);
}

#[rstest]
fn wrong_field_count_aborts_with_row_number() {
    let bad = "\
id,code,name,continent,wikipedia_link,keywords
302672,ZW,Zimbabwe,AF,https://en.wikipedia.org/wiki/Zimbabwe,
302755,US,United States,NA
";
    let error = load(bad, AIRPORTS, RUNWAYS).expect_err("short row must abort");
    assert!(matches!(
        error,
        LoadError::Malformed { dataset: Dataset::Countries, row: 3, .. }
    ));
}

#[rstest]
fn unparsable_number_aborts_with_row_number() {
    let bad = "\
id,airport_ref,le_ident,he_ident,surface,length_ft,width_ft
269408,3632,06L,24R,ASP,eight-thousand,150
";
    let error = load(COUNTRIES, AIRPORTS, bad).expect_err("bad number must abort");
    assert!(matches!(
        error,
        LoadError::Malformed { dataset: Dataset::Runways, row: 2, .. }
    ));
}

#[rstest]
fn duplicate_country_code_aborts() {
    let bad = "\
id,code,name,continent,wikipedia_link,keywords
1,ZW,Zimbabwe,AF,,
2,zw,Zimbabwe Again,AF,,
";
    let error = load(bad, AIRPORTS, RUNWAYS).expect_err("duplicate code must abort");
    assert!(matches!(
        error,
        LoadError::DuplicateCountryCode { row: 3, ref code } if code == "zw"
    ));
}

#[rstest]
fn dangling_country_reference_aborts() {
    let bad = "\
id,ident,type,name,iso_country
3632,KLAX,large_airport,Los Angeles International Airport,XX
";
    let error = load(COUNTRIES, bad, RUNWAYS).expect_err("dangling code must abort");
    assert!(matches!(
        error,
        LoadError::Index(IndexError::Referential(ReferentialError::UnknownCountry { .. }))
    ));
}

#[rstest]
fn dangling_airport_reference_aborts() {
    let bad = "\
id,airport_ref,le_ident,he_ident,surface,length_ft,width_ft
269408,999999,06L,24R,ASP,8925,150
";
    let error = load(COUNTRIES, AIRPORTS, bad).expect_err("dangling ref must abort");
    assert!(matches!(
        error,
        LoadError::Index(IndexError::Referential(ReferentialError::UnknownAirport {
            airport_id: 999_999,
            ..
        }))
    ));
}

#[rstest]
fn blank_country_code_on_airport_is_valid(index: airfield_core::Index) {
    let orphan = index
        .airports()
        .iter()
        .find(|a| a.ident == "ZZZZ")
        .expect("orphan airport is loaded");
    assert_eq!(orphan.country_code, None);
}

#[rstest]
fn load_paths_reports_missing_file() {
    let missing = Utf8PathBuf::from("/non-existent/countries.csv");
    let error = load_paths(&missing, &missing, &missing).expect_err("missing file must fail");
    assert!(matches!(
        error,
        LoadError::Open { dataset: Dataset::Countries, .. }
    ));
}

#[rstest]
fn load_paths_reads_files_from_disk() {
    let dir = tempfile::tempdir().expect("create temp dir");
    let write = |name: &str, body: &str| {
        let path = dir.path().join(name);
        let mut file = std::fs::File::create(&path).expect("create dataset file");
        file.write_all(body.as_bytes()).expect("write dataset file");
        Utf8PathBuf::from_path_buf(path).expect("temp path is UTF-8")
    };
    let countries = write("countries.csv", COUNTRIES);
    let airports = write("airports.csv", AIRPORTS);
    let runways = write("runways.csv", RUNWAYS);

    let index = load_paths(&countries, &airports, &runways).expect("valid dataset on disk");
    assert_eq!(index.stats().countries, 2);
}
