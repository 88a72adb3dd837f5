//! Small shared helpers.

use chrono::Utc;

/// Allocates the next record id for a collection.
///
/// Ids are creation-timestamp-derived (milliseconds since epoch) so they sort
/// by insertion time. When the clock collides with an existing id (several
/// inserts within one millisecond) the max existing id is bumped by one
/// instead, keeping ids unique.
pub fn next_record_id<I>(existing: I) -> i64
where
    I: IntoIterator<Item = i64>,
{
    let now = Utc::now().timestamp_millis();
    let max = existing.into_iter().max().unwrap_or(0);
    if now > max {
        now
    } else {
        max + 1
    }
}
