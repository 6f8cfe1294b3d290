//! Timezone offset resolution against the host's IANA rule data.
//!
//! Pure functions of (identifier, instant): no retained state, no rule
//! data shipped by this crate. Accuracy tracks whatever tzdb version
//! the host provides.

use jiff::tz::TimeZone;
use jiff::{SignedDuration, Timestamp};

/// Standard and daylight UTC offsets, in seconds, for `tz_id` as
/// observed at `at`.
///
/// An identifier the rule database does not know degrades to `(0, 0)`;
/// an unknown zone must not block an otherwise-successful lookup. For a
/// zone with no transition after `at`, both offsets equal the current
/// one. Otherwise the offset one hour past the next transition is
/// sampled (staying clear of the boundary itself), and the numerically
/// smaller of the two offsets is reported as standard, the larger as
/// daylight.
pub fn offsets_at(tz_id: &str, at: Timestamp) -> (i64, i64) {
    let Ok(tz) = TimeZone::get(tz_id) else {
        return (0, 0);
    };

    let current = i64::from(tz.to_offset(at).seconds());

    let Some(next) = tz.following(at).next() else {
        return (current, current);
    };
    let probe = next
        .timestamp()
        .checked_add(SignedDuration::from_hours(1))
        .unwrap_or_else(|_| next.timestamp());
    let upcoming = i64::from(tz.to_offset(probe).seconds());

    (current.min(upcoming), current.max(upcoming))
}

/// The same snapshot taken at the time of call.
pub fn offsets_now(tz_id: &str) -> (i64, i64) {
    offsets_at(tz_id, Timestamp::now())
}

/// Whether `at` falls inside a daylight-saving period of `tz_id`.
///
/// A live query against the zone's rule set, independent of any frozen
/// offset snapshot. `false` for zones with no DST rule and for unknown
/// identifiers.
pub fn is_daylight_saving_time_at(tz_id: &str, at: Timestamp) -> bool {
    TimeZone::get(tz_id)
        .map(|tz| tz.to_offset_info(at).dst().is_dst())
        .unwrap_or(false)
}

#[cfg(test)]
mod tests {
    use jiff::civil::date;

    use super::*;

    fn instant(tz: &str, year: i16, month: i8, day: i8, hour: i8) -> Timestamp {
        date(year, month, day)
            .at(hour, 0, 0, 0)
            .in_tz(tz)
            .unwrap()
            .timestamp()
    }

    #[test]
    fn london_reports_standard_and_dst_offsets() {
        // Summer reference: current offset is BST, the October
        // transition supplies GMT.
        let summer = instant("Europe/London", 2024, 7, 1, 12);
        assert_eq!(offsets_at("Europe/London", summer), (0, 3600));

        // Winter reference: current offset is GMT, the March
        // transition supplies BST.
        let winter = instant("Europe/London", 2024, 1, 1, 12);
        assert_eq!(offsets_at("Europe/London", winter), (0, 3600));
    }

    #[test]
    fn los_angeles_offsets() {
        let summer = instant("America/Los_Angeles", 2024, 7, 1, 12);
        assert_eq!(offsets_at("America/Los_Angeles", summer), (-28800, -25200));
    }

    #[test]
    fn zone_without_dst_reports_equal_offsets() {
        let at = instant("Asia/Kolkata", 2024, 7, 1, 12);
        assert_eq!(offsets_at("Asia/Kolkata", at), (19800, 19800));
    }

    #[test]
    fn unknown_zone_degrades_to_zero() {
        let at = instant("UTC", 2024, 7, 1, 12);
        assert_eq!(offsets_at("Mars/Olympus_Mons", at), (0, 0));
        assert!(!is_daylight_saving_time_at("Mars/Olympus_Mons", at));
    }

    #[test]
    fn offset_ordering_holds_across_zones() {
        let at = instant("UTC", 2024, 3, 15, 0);
        for id in [
            "Europe/London",
            "Europe/Berlin",
            "America/Los_Angeles",
            "America/New_York",
            "Asia/Kolkata",
            "Asia/Tokyo",
            "Australia/Sydney",
            "Pacific/Auckland",
        ] {
            let (std, dst) = offsets_at(id, at);
            assert!(std <= dst, "{id}: {std} > {dst}");
        }
    }

    #[test]
    fn dst_predicate_london() {
        assert!(is_daylight_saving_time_at(
            "Europe/London",
            instant("Europe/London", 2024, 7, 1, 12)
        ));
        assert!(!is_daylight_saving_time_at(
            "Europe/London",
            instant("Europe/London", 2024, 1, 1, 12)
        ));
    }

    #[test]
    fn dst_predicate_never_fires_without_dst_rule() {
        assert!(!is_daylight_saving_time_at(
            "Asia/Kolkata",
            instant("Asia/Kolkata", 2024, 7, 1, 12)
        ));
        assert!(!is_daylight_saving_time_at(
            "Asia/Kolkata",
            instant("Asia/Kolkata", 2024, 1, 1, 12)
        ));
    }
}
