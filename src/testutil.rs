//! Shared test fixture: a miniature cities500 snapshot, built through
//! the same schema code the `ingest` binary uses.

use std::path::PathBuf;

use rusqlite::Connection;
use tempfile::TempDir;

use crate::dataset::{self, AdminCode, AdminTable, GeonameRow};

/// Build a small snapshot in a temp directory. The returned `TempDir`
/// keeps the file alive; drop it to clean up.
pub(crate) fn fixture_db() -> (TempDir, PathBuf) {
    let dir = TempDir::new().expect("create temp dir");
    let path = dir.path().join("cities500.sqlite");

    let mut conn = Connection::open(&path).expect("create fixture db");
    dataset::create_schema(&conn).expect("create schema");
    dataset::insert_geonames(&mut conn, &places()).expect("insert places");
    dataset::insert_admin_codes(&mut conn, AdminTable::Admin1, &admin1_codes())
        .expect("insert admin1 codes");
    dataset::insert_admin_codes(&mut conn, AdminTable::Admin2, &admin2_codes())
        .expect("insert admin2 codes");
    dataset::create_indexes(&conn).expect("create indexes");

    (dir, path)
}

#[allow(clippy::too_many_arguments)]
fn place(
    geonameid: i64,
    name: &str,
    asciiname: &str,
    alternatenames: &str,
    latitude: f64,
    longitude: f64,
    country_code: &str,
    admin1_code: &str,
    admin2_code: &str,
    elevation: Option<i64>,
    timezone: &str,
) -> GeonameRow {
    GeonameRow {
        geonameid,
        name: name.to_string(),
        asciiname: asciiname.to_string(),
        alternatenames: alternatenames.to_string(),
        latitude: Some(latitude),
        longitude: Some(longitude),
        feature_class: "P".to_string(),
        feature_code: "PPL".to_string(),
        country_code: country_code.to_string(),
        admin1_code: admin1_code.to_string(),
        admin2_code: admin2_code.to_string(),
        elevation,
        timezone: timezone.to_string(),
        modification_date: "2024-01-01".to_string(),
        ..GeonameRow::default()
    }
}

fn places() -> Vec<GeonameRow> {
    vec![
        place(
            2643743,
            "London",
            "London",
            "City of London,Londres,Лондон",
            51.50853,
            -0.12574,
            "GB",
            "ENG",
            "GLA",
            None,
            "Europe/London",
        ),
        place(
            2657896,
            "Zürich",
            "Zurich",
            "Zuerich",
            47.36667,
            8.55,
            "CH",
            "ZH",
            "112",
            Some(408),
            "Europe/Zurich",
        ),
        place(
            2867714,
            "München",
            "Munich",
            "Muenchen,Monaco di Baviera",
            48.13743,
            11.57549,
            "DE",
            "02",
            "09162",
            Some(524),
            "Europe/Berlin",
        ),
        place(
            1277333,
            "Bengaluru",
            "Bangalore",
            "Bangalore,Bengalooru",
            12.97194,
            77.59369,
            "IN",
            "19",
            "583",
            Some(920),
            "Asia/Kolkata",
        ),
        place(
            1263814,
            "Madanapalle",
            "Madanapalle",
            "",
            13.5503,
            78.50288,
            "IN",
            "02",
            "",
            Some(695),
            "Asia/Kolkata",
        ),
        place(
            5391959,
            "San Francisco",
            "San Francisco",
            "SF,Frisco",
            37.77493,
            -122.41942,
            "US",
            "CA",
            "075",
            Some(16),
            "America/Los_Angeles",
        ),
        place(
            5391811,
            "San Diego",
            "San Diego",
            "",
            32.71533,
            -117.15726,
            "US",
            "CA",
            "073",
            Some(20),
            "America/Los_Angeles",
        ),
        place(
            5392171,
            "San Jose",
            "San Jose",
            "",
            37.33939,
            -121.89496,
            "US",
            "CA",
            "085",
            Some(26),
            "America/Los_Angeles",
        ),
        place(
            3583361,
            "San Salvador",
            "San Salvador",
            "",
            13.68935,
            -89.18718,
            "SV",
            "10",
            "",
            Some(658),
            "America/El_Salvador",
        ),
    ]
}

fn admin_code(code: &str, name: &str, geonameid: i64) -> AdminCode {
    AdminCode {
        code: code.to_string(),
        name: name.to_string(),
        asciiname: name.to_string(),
        geonameid,
    }
}

fn admin1_codes() -> Vec<AdminCode> {
    vec![
        admin_code("GB.ENG", "England", 6269131),
        admin_code("IN.02", "Andhra Pradesh", 1278629),
        admin_code("IN.19", "Karnataka", 1267701),
        admin_code("CH.ZH", "Zurich", 2657895),
        admin_code("DE.02", "Bavaria", 2951839),
        admin_code("US.CA", "California", 5332921),
        admin_code("SV.10", "San Salvador", 3583360),
    ]
}

fn admin2_codes() -> Vec<AdminCode> {
    vec![
        admin_code("GB.ENG.GLA", "Greater London", 2648110),
        admin_code("IN.19.583", "Bengaluru Urban", 1277306),
        admin_code("US.CA.075", "San Francisco County", 5391997),
        admin_code("DE.02.091", "Upper Bavaria", 2861322),
    ]
}
