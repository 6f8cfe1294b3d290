//! Meridian - an embedded gazetteer lookup library.
//!
//! Free-text search over a read-only GeoNames SQLite snapshot. Each
//! hit comes back as a [`Place`] enriched with resolved admin-region
//! names and a standard/DST UTC offset snapshot for its IANA timezone.
//! No network, no write path on the lookup side; the `ingest` binary
//! builds the snapshot from GeoNames exports.

pub mod admin;
pub mod dataset;
pub mod error;
pub mod models;
pub mod search;
pub mod store;
pub mod tz;

pub use error::StoreError;
pub use models::{Place, RawPlace};
pub use search::{Gazetteer, DEFAULT_LIMIT};
pub use store::GazetteerStore;

#[cfg(test)]
pub(crate) mod testutil;
