//! Read-only access to the bundled place dataset.

use std::path::{Path, PathBuf};

use rusqlite::{named_params, Connection, OpenFlags};
use tracing::debug;

use crate::error::StoreError;
use crate::models::RawPlace;

const SEARCH_SQL: &str = "\
    SELECT geonameid, name, latitude, longitude, country_code, \
           admin1_code, admin2_code, admin3_code, admin4_code, \
           elevation, timezone \
    FROM geoname \
    WHERE name LIKE :pat OR asciiname LIKE :pat OR alternatenames LIKE :pat \
    LIMIT :limit";

/// Handle on the read-only SQLite snapshot.
///
/// Opened once per [`crate::Gazetteer`] instance and held for its
/// lifetime; the connection closes deterministically on drop, on every
/// exit path. The handle is `Send` but not `Sync`, so sharing a
/// dataset file across threads means one store per thread. Concurrent
/// readers over the same file are safe: nothing here writes.
#[derive(Debug)]
pub struct GazetteerStore {
    conn: Connection,
    path: PathBuf,
}

impl GazetteerStore {
    /// Open the dataset at `path` in read-only mode.
    ///
    /// A missing file and an unopenable database both come back as
    /// [`StoreError::Unavailable`]; no partially opened handle is left
    /// behind.
    pub fn open<P: AsRef<Path>>(path: P) -> Result<GazetteerStore, StoreError> {
        let path = path.as_ref().to_path_buf();
        let conn = Connection::open_with_flags(
            &path,
            OpenFlags::SQLITE_OPEN_READ_ONLY | OpenFlags::SQLITE_OPEN_NO_MUTEX,
        )
        .map_err(|source| StoreError::Unavailable {
            path: path.clone(),
            source,
        })?;
        Ok(GazetteerStore { conn, path })
    }

    /// Path the store was opened from.
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Scan for rows whose `name`, `asciiname` or `alternatenames`
    /// contains `text` as a substring.
    ///
    /// Matching follows SQLite `LIKE` semantics: case-insensitive for
    /// ASCII, case- and accent-sensitive beyond it. `alternatenames`
    /// is a comma-packed blob and is matched as-is, so a pattern can
    /// span a name boundary. `text` is always bound as an opaque
    /// literal, never spliced into the statement.
    ///
    /// Rows come back in scan order: "first N matches found", not
    /// "best N matches". A `limit <= 0` is passed through verbatim;
    /// SQLite reads a negative LIMIT as unbounded and `LIMIT 0` as
    /// empty.
    pub fn search(&self, text: &str, limit: i64) -> Result<Vec<RawPlace>, StoreError> {
        let mut stmt = self.conn.prepare_cached(SEARCH_SQL)?;
        let pattern = format!("%{text}%");
        let rows = stmt
            .query_map(
                named_params! { ":pat": pattern, ":limit": limit },
                row_to_raw,
            )?
            .collect::<Result<Vec<_>, _>>()?;
        debug!(
            "Gazetteer scan for '{}' (limit {}): {} rows from {}",
            text,
            limit,
            rows.len(),
            self.path.display()
        );
        Ok(rows)
    }

    pub(crate) fn connection(&self) -> &Connection {
        &self.conn
    }
}

/// NULL text columns coerce to `""`, NULL numerics to 0.
fn row_to_raw(row: &rusqlite::Row<'_>) -> rusqlite::Result<RawPlace> {
    Ok(RawPlace {
        id: row.get(0)?,
        name: row.get::<_, Option<String>>(1)?.unwrap_or_default(),
        latitude: row.get::<_, Option<f64>>(2)?.unwrap_or(0.0),
        longitude: row.get::<_, Option<f64>>(3)?.unwrap_or(0.0),
        country_code: row.get::<_, Option<String>>(4)?.unwrap_or_default(),
        admin1_code: row.get::<_, Option<String>>(5)?.unwrap_or_default(),
        admin2_code: row.get::<_, Option<String>>(6)?.unwrap_or_default(),
        admin3_code: row.get::<_, Option<String>>(7)?.unwrap_or_default(),
        admin4_code: row.get::<_, Option<String>>(8)?.unwrap_or_default(),
        elevation: row.get::<_, Option<i32>>(9)?.unwrap_or(0),
        timezone: row.get::<_, Option<String>>(10)?.unwrap_or_default(),
    })
}
