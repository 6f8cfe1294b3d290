//! Building the SQLite snapshot from GeoNames exports.
//!
//! The lookup path never writes. This module backs the `ingest` binary
//! and the test fixtures, so both produce byte-identical schemas.

use rusqlite::{params, Connection};

/// Tab-separated fields in a row of the GeoNames main export.
pub const GEONAME_FIELDS: usize = 19;

const SCHEMA_SQL: &str = "\
    CREATE TABLE geoname (
        geonameid INTEGER PRIMARY KEY,
        name TEXT,
        asciiname TEXT,
        alternatenames TEXT,
        latitude REAL,
        longitude REAL,
        feature_class TEXT,
        feature_code TEXT,
        country_code TEXT,
        cc2 TEXT,
        admin1_code TEXT,
        admin2_code TEXT,
        admin3_code TEXT,
        admin4_code TEXT,
        population INTEGER,
        elevation INTEGER,
        dem INTEGER,
        timezone TEXT,
        modification_date TEXT
    );
    CREATE TABLE admin1_codes (
        code TEXT PRIMARY KEY,
        name TEXT,
        asciiname TEXT,
        geonameid INTEGER
    );
    CREATE TABLE admin2_codes (
        code TEXT PRIMARY KEY,
        name TEXT,
        asciiname TEXT,
        geonameid INTEGER
    );";

const INSERT_GEONAME_SQL: &str = "\
    INSERT INTO geoname VALUES \
    (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8, ?9, ?10, ?11, ?12, ?13, ?14, ?15, ?16, ?17, ?18, ?19)";

/// One parsed row of the main export, ready for insertion.
#[derive(Debug, Clone, Default)]
pub struct GeonameRow {
    pub geonameid: i64,
    pub name: String,
    pub asciiname: String,
    pub alternatenames: String,
    pub latitude: Option<f64>,
    pub longitude: Option<f64>,
    pub feature_class: String,
    pub feature_code: String,
    pub country_code: String,
    pub cc2: String,
    pub admin1_code: String,
    pub admin2_code: String,
    pub admin3_code: String,
    pub admin4_code: String,
    pub population: i64,
    pub elevation: Option<i64>,
    pub dem: Option<i64>,
    pub timezone: String,
    pub modification_date: String,
}

impl GeonameRow {
    /// Parse one export record. `None` for rows with the wrong column
    /// count or an unusable id; numeric fields left empty by GeoNames
    /// become NULL, except population which the export documents as 0.
    pub fn parse(record: &csv::StringRecord) -> Option<GeonameRow> {
        if record.len() != GEONAME_FIELDS {
            return None;
        }
        let geonameid = record.get(0)?.parse::<i64>().ok()?;
        Some(GeonameRow {
            geonameid,
            name: field(record, 1),
            asciiname: field(record, 2),
            alternatenames: field(record, 3),
            latitude: numeric(record, 4),
            longitude: numeric(record, 5),
            feature_class: field(record, 6),
            feature_code: field(record, 7),
            country_code: field(record, 8),
            cc2: field(record, 9),
            admin1_code: field(record, 10),
            admin2_code: field(record, 11),
            admin3_code: field(record, 12),
            admin4_code: field(record, 13),
            population: numeric(record, 14).unwrap_or(0),
            elevation: numeric(record, 15),
            dem: numeric(record, 16),
            timezone: field(record, 17),
            modification_date: field(record, 18),
        })
    }
}

/// One row of an admin-code sidecar file. Both sidecars share the
/// shape: code, name, asciiname, geonameid.
#[derive(Debug, Clone)]
pub struct AdminCode {
    pub code: String,
    pub name: String,
    pub asciiname: String,
    pub geonameid: i64,
}

impl AdminCode {
    /// Parse one sidecar record; `None` for rows with fewer than four
    /// columns (comment lines included).
    pub fn parse(record: &csv::StringRecord) -> Option<AdminCode> {
        if record.len() < 4 {
            return None;
        }
        Some(AdminCode {
            code: record.get(0)?.to_string(),
            name: record.get(1)?.to_string(),
            asciiname: record.get(2)?.to_string(),
            geonameid: record.get(3)?.trim().parse().ok()?,
        })
    }
}

/// Which auxiliary lookup table an admin sidecar feeds.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AdminTable {
    Admin1,
    Admin2,
}

impl AdminTable {
    pub fn table_name(self) -> &'static str {
        match self {
            AdminTable::Admin1 => "admin1_codes",
            AdminTable::Admin2 => "admin2_codes",
        }
    }
}

/// Create the snapshot tables on a fresh database. Journal mode DELETE
/// keeps the file transportable as a single asset.
pub fn create_schema(conn: &Connection) -> rusqlite::Result<()> {
    conn.pragma_update(None, "journal_mode", "DELETE")?;
    conn.execute_batch(SCHEMA_SQL)
}

/// Create the scan and join indexes. Runs after the bulk load.
pub fn create_indexes(conn: &Connection) -> rusqlite::Result<()> {
    conn.execute_batch(
        "CREATE INDEX idx_geoname_name ON geoname(name);
         CREATE INDEX idx_geoname_admin1 ON geoname(country_code, admin1_code);
         CREATE INDEX idx_geoname_admin2 ON geoname(country_code, admin1_code, admin2_code);",
    )
}

/// Insert a batch of places inside one transaction.
pub fn insert_geonames(conn: &mut Connection, rows: &[GeonameRow]) -> rusqlite::Result<()> {
    let tx = conn.transaction()?;
    {
        let mut stmt = tx.prepare_cached(INSERT_GEONAME_SQL)?;
        for row in rows {
            stmt.execute(params![
                row.geonameid,
                row.name,
                row.asciiname,
                row.alternatenames,
                row.latitude,
                row.longitude,
                row.feature_class,
                row.feature_code,
                row.country_code,
                row.cc2,
                row.admin1_code,
                row.admin2_code,
                row.admin3_code,
                row.admin4_code,
                row.population,
                row.elevation,
                row.dem,
                row.timezone,
                row.modification_date,
            ])?;
        }
    }
    tx.commit()
}

/// Insert admin codes into the given sidecar table, one transaction.
pub fn insert_admin_codes(
    conn: &mut Connection,
    table: AdminTable,
    rows: &[AdminCode],
) -> rusqlite::Result<()> {
    let sql = format!("INSERT INTO {} VALUES (?1, ?2, ?3, ?4)", table.table_name());
    let tx = conn.transaction()?;
    {
        let mut stmt = tx.prepare_cached(&sql)?;
        for row in rows {
            stmt.execute(params![row.code, row.name, row.asciiname, row.geonameid])?;
        }
    }
    tx.commit()
}

fn field(record: &csv::StringRecord, index: usize) -> String {
    record.get(index).unwrap_or("").to_string()
}

fn numeric<T: std::str::FromStr>(record: &csv::StringRecord, index: usize) -> Option<T> {
    record.get(index).and_then(|s| s.trim().parse().ok())
}
