//! Place records returned by gazetteer searches.

use std::hash::{Hash, Hasher};

use jiff::Timestamp;
use serde::{Deserialize, Serialize};

use crate::tz;

/// One row as scanned from the dataset, before enrichment.
///
/// All nullable text columns are coerced to `""` rather than carried as
/// absent; a NULL elevation becomes 0 (the dataset does not distinguish
/// unknown from sea level).
#[derive(Debug, Clone)]
pub struct RawPlace {
    pub id: i64,
    pub name: String,
    pub latitude: f64,
    pub longitude: f64,
    pub country_code: String,
    pub admin1_code: String,
    pub admin2_code: String,
    pub admin3_code: String,
    pub admin4_code: String,
    pub elevation: i32,
    pub timezone: String,
}

/// A gazetteer entry enriched with resolved admin-region names and a
/// timezone-offset snapshot.
///
/// `gmt_offset` and `gmt_dst_offset` are computed once at construction
/// from the reference instant and then frozen: they describe the
/// zone's rules *as observed then*, not an eternal constant. Callers
/// needing current-instant accuracy should use
/// [`crate::Gazetteer::is_daylight_saving_time`], which queries the
/// rule set live.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Place {
    /// GeoNames id; dataset primary key and the equality/hash key.
    pub id: i64,

    /// Display name, may contain non-ASCII.
    pub name: String,

    /// Decimal degrees, signed.
    pub latitude: f64,
    pub longitude: f64,

    /// ISO 3166-1 alpha-2.
    pub country_code: String,

    /// Administrative-division codes, coarsest to finest. Empty string
    /// means "not applicable".
    pub admin1_code: String,
    pub admin2_code: String,
    pub admin3_code: String,
    pub admin4_code: String,

    /// Meters; 0 when the dataset has no elevation for this place.
    pub elevation: i32,

    /// IANA identifier, e.g. "Europe/London".
    pub timezone: String,

    /// Resolved display names for admin1/admin2. `None` when the code
    /// is empty or resolution missed. admin3/admin4 have no resolved
    /// names.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub admin1_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub admin2_name: Option<String>,

    /// Standard-time UTC offset, seconds, signed.
    pub gmt_offset: i64,

    /// Daylight-time UTC offset, seconds, signed. Equal to
    /// `gmt_offset` for zones with no upcoming DST transition.
    pub gmt_dst_offset: i64,
}

impl Place {
    /// Assemble a record from a raw row, freezing the offset snapshot
    /// at `at`.
    pub(crate) fn from_raw(
        raw: RawPlace,
        admin1_name: Option<String>,
        admin2_name: Option<String>,
        at: Timestamp,
    ) -> Place {
        let (gmt_offset, gmt_dst_offset) = tz::offsets_at(&raw.timezone, at);
        Place {
            id: raw.id,
            name: raw.name,
            latitude: raw.latitude,
            longitude: raw.longitude,
            country_code: raw.country_code,
            admin1_code: raw.admin1_code,
            admin2_code: raw.admin2_code,
            admin3_code: raw.admin3_code,
            admin4_code: raw.admin4_code,
            elevation: raw.elevation,
            timezone: raw.timezone,
            admin1_name,
            admin2_name,
            gmt_offset,
            gmt_dst_offset,
        }
    }
}

// The id is the dataset primary key, so it carries equality and
// hashing; the f64 coordinates keep the derives out anyway.
impl PartialEq for Place {
    fn eq(&self, other: &Place) -> bool {
        self.id == other.id
    }
}

impl Eq for Place {}

impl Hash for Place {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.id.hash(state);
    }
}
