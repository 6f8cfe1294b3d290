//! Search orchestration: store scan, admin enrichment, offset snapshot.

use std::path::Path;

use jiff::Timestamp;
use tracing::{error, warn};

use crate::admin::AdminNames;
use crate::models::Place;
use crate::store::GazetteerStore;
use crate::tz;

/// Rows returned when the caller does not pass an explicit limit.
pub const DEFAULT_LIMIT: i64 = 3;

/// The gazetteer lookup engine.
///
/// Owns the dataset handle for its lifetime. Opening never fails: when
/// the dataset is missing or unreadable, the failure is logged once
/// and the engine runs degraded, answering every search with an empty
/// result set. Callers who want the error surfaced instead can open a
/// [`GazetteerStore`] and use [`Gazetteer::with_store`].
pub struct Gazetteer {
    store: Option<GazetteerStore>,
}

impl Gazetteer {
    /// Open the dataset at `path`, degrading on failure.
    pub fn open<P: AsRef<Path>>(path: P) -> Gazetteer {
        match GazetteerStore::open(path) {
            Ok(store) => Gazetteer { store: Some(store) },
            Err(err) => {
                error!("{}; searches will return no results", err);
                Gazetteer { store: None }
            }
        }
    }

    /// Engine over an already opened store.
    pub fn with_store(store: GazetteerStore) -> Gazetteer {
        Gazetteer { store: Some(store) }
    }

    /// Whether the dataset opened successfully.
    pub fn is_available(&self) -> bool {
        self.store.is_some()
    }

    /// Search with the default limit of 3.
    pub fn search(&self, text: &str) -> Vec<Place> {
        self.search_with_limit(text, DEFAULT_LIMIT)
    }

    /// Return up to `limit` places matching `text`, in store scan
    /// order ("first N matches found", not ranked).
    ///
    /// Admin names are resolved best-effort and offsets are
    /// snapshotted at call time; nothing is cached across calls. A
    /// degraded engine and a failed query both produce an empty vec.
    pub fn search_with_limit(&self, text: &str, limit: i64) -> Vec<Place> {
        let Some(store) = &self.store else {
            return Vec::new();
        };
        let rows = match store.search(text, limit) {
            Ok(rows) => rows,
            Err(err) => {
                warn!("Gazetteer search for '{}' failed: {}", text, err);
                return Vec::new();
            }
        };

        let admin = AdminNames::new(store);
        let at = Timestamp::now();
        rows.into_iter()
            .map(|raw| {
                let admin1_name = admin.admin1(&raw.country_code, &raw.admin1_code);
                let admin2_name =
                    admin.admin2(&raw.country_code, &raw.admin1_code, &raw.admin2_code);
                Place::from_raw(raw, admin1_name, admin2_name, at)
            })
            .collect()
    }

    /// Whether `at` falls inside a daylight-saving period of `place`'s
    /// zone. A live rule-set query, independent of the offset snapshot
    /// frozen on the record.
    pub fn is_daylight_saving_time(&self, at: Timestamp, place: &Place) -> bool {
        tz::is_daylight_saving_time_at(&place.timezone, at)
    }
}
