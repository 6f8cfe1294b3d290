//! Resolution of administrative-division codes into display names.

use rusqlite::OptionalExtension;
use tracing::warn;

use crate::store::GazetteerStore;

const ADMIN1_SQL: &str = "SELECT name FROM admin1_codes WHERE code = ?1";
const ADMIN2_SQL: &str = "SELECT name FROM admin2_codes WHERE code = ?1";

/// Looks up human-readable region names in the auxiliary
/// `admin1_codes` / `admin2_codes` tables, keyed `"CC.A1"` and
/// `"CC.A1.A2"`.
///
/// A miss is a normal outcome (many places have no admin2 subdivision)
/// and comes back as `None`, never as an error.
pub struct AdminNames<'s> {
    store: &'s GazetteerStore,
}

impl<'s> AdminNames<'s> {
    pub fn new(store: &'s GazetteerStore) -> AdminNames<'s> {
        AdminNames { store }
    }

    /// Display name for `(country, admin1)`. `None` when the code is
    /// empty or has no entry.
    pub fn admin1(&self, country: &str, admin1: &str) -> Option<String> {
        if admin1.is_empty() {
            return None;
        }
        self.lookup(ADMIN1_SQL, &format!("{country}.{admin1}"))
    }

    /// Display name for `(country, admin1, admin2)`. `None` when the
    /// code is empty or has no entry.
    pub fn admin2(&self, country: &str, admin1: &str, admin2: &str) -> Option<String> {
        if admin2.is_empty() {
            return None;
        }
        self.lookup(ADMIN2_SQL, &format!("{country}.{admin1}.{admin2}"))
    }

    /// Enrichment must not block a lookup, so an unexpected backend
    /// error on this path logs and resolves to `None`.
    fn lookup(&self, sql: &str, code: &str) -> Option<String> {
        let result = self.store.connection().prepare_cached(sql).and_then(|mut stmt| {
            stmt.query_row([code], |row| row.get::<_, Option<String>>(0))
                .optional()
        });
        match result {
            Ok(name) => name.flatten(),
            Err(err) => {
                warn!("Admin name lookup failed for '{}': {}", code, err);
                None
            }
        }
    }
}
