//! # Date Normalization
//!
//! Converts a free-form last-modified string into a UNIX timestamp, rejecting
//! anything that does not denote an absolute point in time.
//!
//! ## Absolute vs. relative
//!
//! The parser accepts both machine formats (RFC 3339, RFC 2822) and
//! human-style dates ("14 March 2018"). Human-style input can also be a
//! *relative* expression ("+1 week", "next tuesday"), which is meaningless as
//! a last-modified date. Rather than grammar-matching relative syntax, the
//! string is parsed twice against two anchors 365.25 days apart: an absolute
//! date resolves to the same instant from both anchors, a relative expression
//! does not. Disagreement rejects the string.
//!
//! ## Examples
//!
//! ```
//! use fileresource::timestamp::string_to_timestamp;
//!
//! assert_eq!(
//!     string_to_timestamp(Some("2018-03-14T11:51:00Z")),
//!     Some(1521028260)
//! );
//! assert_eq!(string_to_timestamp(Some("+1 week")), None);
//! assert_eq!(string_to_timestamp(None), None);
//! ```

use crate::resource::ResourceDescriptor;
use chrono::{DateTime, Duration, Utc};
use interim::{Dialect, parse_date_string};

/// Separation between the two parse anchors: 365.25 days.
const ANCHOR_SKEW_SECONDS: i64 = 31_557_600;

/// Convert a date string into seconds since the UNIX epoch.
///
/// Returns `None` for absent input, unparseable input, dates in the future,
/// dates before the epoch, and relative expressions.
pub fn string_to_timestamp(date_string: Option<&str>) -> Option<i64> {
    string_to_timestamp_at(date_string?, Utc::now())
}

/// [`string_to_timestamp`] with an explicit "now", so the future cutoff and
/// the anchor comparison are deterministic under test.
pub fn string_to_timestamp_at(date_string: &str, now: DateTime<Utc>) -> Option<i64> {
    let timestamp = parse_anchored(date_string, now)?;
    if timestamp > now.timestamp() || timestamp < 0 {
        return None;
    }
    let then = now - Duration::seconds(ANCHOR_SKEW_SECONDS);
    let reparsed = parse_anchored(date_string, then)?;
    (timestamp == reparsed).then_some(timestamp)
}

/// Parse a date string relative to an anchor instant.
///
/// Machine formats are tried first and never depend on the anchor; the
/// natural-language fallback resolves incomplete or relative input against
/// it.
fn parse_anchored(date_string: &str, anchor: DateTime<Utc>) -> Option<i64> {
    if let Ok(parsed) = DateTime::parse_from_rfc3339(date_string) {
        return Some(parsed.timestamp());
    }
    if let Ok(parsed) = DateTime::parse_from_rfc2822(date_string) {
        return Some(parsed.timestamp());
    }
    parse_date_string(date_string, anchor, Dialect::Uk)
        .ok()
        .map(|parsed| parsed.timestamp())
}

impl ResourceDescriptor {
    /// The `lastmod` field as a UNIX timestamp, or `None` if absent, in the
    /// future, before the epoch, relative, or unparseable.
    pub fn timestamp(&self) -> Option<i64> {
        string_to_timestamp(self.lastmod.as_deref())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn fixed_now() -> DateTime<Utc> {
        // 2020-06-01T00:00:00Z
        Utc.with_ymd_and_hms(2020, 6, 1, 0, 0, 0).unwrap()
    }

    #[test]
    fn rfc3339_fixed_point() {
        assert_eq!(
            string_to_timestamp_at("2018-03-14T11:51:00Z", fixed_now()),
            Some(1521028260)
        );
    }

    #[test]
    fn rfc3339_with_offset() {
        // Same instant expressed in another zone.
        assert_eq!(
            string_to_timestamp_at("2018-03-14T12:51:00+01:00", fixed_now()),
            Some(1521028260)
        );
    }

    #[test]
    fn rfc2822_is_accepted() {
        assert_eq!(
            string_to_timestamp_at("Wed, 14 Mar 2018 11:51:00 GMT", fixed_now()),
            Some(1521028260)
        );
    }

    #[test]
    fn human_style_absolute_date() {
        let timestamp = string_to_timestamp_at("14 March 2018", fixed_now());
        // Midnight UTC on that date.
        assert_eq!(timestamp, Some(1520985600));
    }

    #[test]
    fn relative_expressions_are_rejected() {
        for input in ["+1 week", "1 week ago", "yesterday", "last friday"] {
            assert_eq!(
                string_to_timestamp_at(input, fixed_now()),
                None,
                "{input:?} should be rejected"
            );
        }
    }

    #[test]
    fn future_dates_are_rejected() {
        assert_eq!(
            string_to_timestamp_at("2021-01-01T00:00:00Z", fixed_now()),
            None
        );
    }

    #[test]
    fn pre_epoch_dates_are_rejected() {
        assert_eq!(
            string_to_timestamp_at("1969-12-31T00:00:00Z", fixed_now()),
            None
        );
    }

    #[test]
    fn unparseable_input_is_rejected() {
        for input in ["", "not a date", "??-??-????"] {
            assert_eq!(
                string_to_timestamp_at(input, fixed_now()),
                None,
                "{input:?} should be rejected"
            );
        }
    }

    #[test]
    fn absent_lastmod_is_none() {
        assert_eq!(string_to_timestamp(None), None);
        assert_eq!(ResourceDescriptor::default().timestamp(), None);
    }

    #[test]
    fn descriptor_timestamp_delegates() {
        let descriptor = ResourceDescriptor {
            lastmod: Some("2018-03-14T11:51:00Z".to_string()),
            ..Default::default()
        };
        assert_eq!(descriptor.timestamp(), Some(1521028260));
    }
}
