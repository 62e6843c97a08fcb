//! Daily forecast aggregation.
//!
//! The provider returns a flat list of 3-hour samples spanning several days.
//! The dashboard shows one card per calendar day, so the list is collapsed
//! to a single representative per local date — the sample taken closest to
//! noon, when conditions are most characteristic of the day.

use std::collections::BTreeMap;

use skycast_types::ForecastSample;
use time::UtcOffset;

/// Maximum number of day cards the dashboard renders.
pub const MAX_FORECAST_DAYS: usize = 5;

/// Minutes past midnight of the target time-of-day (12:00).
const NOON_MINUTES: i32 = 12 * 60;

/// Collapse a chronological sample sequence into one representative per
/// local calendar day.
///
/// Samples are grouped by the calendar date of their timestamp in `offset`
/// (the searched city's UTC offset, so "noon" means the city's noon — this
/// also keeps grouping stable across daylight-saving transitions, which only
/// shift the absolute times, not the local dates). Within a date the
/// retained sample is the one whose time-of-day is nearest 12:00;
/// replacement happens only when a later sample is strictly closer, so the
/// first of two equidistant samples wins. A date with a single sample keeps
/// it regardless of its distance from noon.
///
/// The representatives are returned sorted ascending by date and truncated
/// to the first `max_days` entries. An empty input yields an empty output;
/// callers render that as "no forecast available" rather than treating it
/// as an error.
#[must_use]
pub fn daily_representatives(
    samples: &[ForecastSample],
    max_days: usize,
    offset: UtcOffset,
) -> Vec<ForecastSample> {
    let mut buckets: BTreeMap<time::Date, (i32, &ForecastSample)> = BTreeMap::new();

    for sample in samples {
        let local = sample.timestamp.to_offset(offset);
        let distance = (i32::from(local.hour()) * 60 + i32::from(local.minute()) - NOON_MINUTES)
            .abs();

        buckets
            .entry(local.date())
            .and_modify(|(best, kept)| {
                if distance < *best {
                    *best = distance;
                    *kept = sample;
                }
            })
            .or_insert((distance, sample));
    }

    buckets
        .into_values()
        .take(max_days)
        .map(|(_, sample)| sample.clone())
        .collect()
}
