//! Timestamp normalization for rows read back from PostgreSQL.
//!
//! Timestamps are decoded in the process-local zone, so each value carries
//! whatever offset that zone had at that instant (which differs across DST
//! boundaries). Every emitted timestamp is corrected by subtracting the
//! value's own offset, measured in milliseconds west of UTC, from its epoch
//! milliseconds.
//!
//! On a host running in UTC this is the identity. The correction is kept
//! for compatibility with existing clients; confirm the deployment timezone
//! before reusing it elsewhere.

use chrono::{DateTime, Offset, TimeZone, Utc};

use crate::types::Timestamp;

/// Offset of `value` from UTC in milliseconds, positive west of Greenwich.
fn offset_west_millis<Tz: TimeZone>(value: &DateTime<Tz>) -> i64 {
    -i64::from(value.offset().fix().local_minus_utc()) * 1000
}

/// Normalize a decoded timestamp into the UTC value emitted by the API.
///
/// ```
/// use chrono::{DateTime, Utc};
/// use newsroom_core::timestamp::normalize;
///
/// let stored = DateTime::parse_from_rfc3339("2020-07-09T21:11:00+01:00").unwrap();
/// let expected: DateTime<Utc> = "2020-07-09T21:11:00Z".parse().unwrap();
/// assert_eq!(normalize(&stored), expected);
/// ```
pub fn normalize<Tz: TimeZone>(value: &DateTime<Tz>) -> Timestamp {
    let corrected = value.timestamp_millis() - offset_west_millis(value);
    // Only fails for values at the very edge of chrono's range, where the
    // wall-clock reading is the same thing.
    DateTime::<Utc>::from_timestamp_millis(corrected)
        .unwrap_or_else(|| value.naive_local().and_utc())
}
