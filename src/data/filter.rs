use chrono::NaiveDate;

use super::model::{FilterCriteria, Observation, Timeframe};

// ---------------------------------------------------------------------------
// Range filter: date and value bounds
// ---------------------------------------------------------------------------

/// Keep the observations whose timestamp and value fall inside the given
/// bounds, preserving input order.
///
/// Absent bounds are substituted with extreme sentinels so every observation
/// goes through the same four comparisons. An inverted range (start after
/// end, or min above max) yields an empty result rather than an error.
pub fn filter_observations(
    observations: &[Observation],
    criteria: &FilterCriteria,
) -> Vec<Observation> {
    let start = criteria.start_date.unwrap_or(NaiveDate::MIN);
    let end = criteria.end_date.unwrap_or(NaiveDate::MAX);
    let min = criteria.min_value.unwrap_or(f64::NEG_INFINITY);
    let max = criteria.max_value.unwrap_or(f64::INFINITY);

    observations
        .iter()
        .filter(|obs| {
            obs.timestamp >= start && obs.timestamp <= end && obs.value >= min && obs.value <= max
        })
        .copied()
        .collect()
}

// ---------------------------------------------------------------------------
// Timeframe sampler: positional stride
// ---------------------------------------------------------------------------

/// Thin an already-filtered sequence to the requested granularity by keeping
/// the elements at index `i` where `i % stride == 0`.
///
/// The index is the filtered sequence's own 0-based index, reset after
/// filtering, not the position in the unfiltered dataset. Changing the date
/// or value bounds therefore changes which observations land on a sampling
/// boundary. The first element of a non-empty input is always kept.
pub fn sample_timeframe(filtered: &[Observation], timeframe: Timeframe) -> Vec<Observation> {
    let stride = timeframe.stride();
    filtered
        .iter()
        .enumerate()
        .filter(|(i, _)| i % stride == 0)
        .map(|(_, obs)| *obs)
        .collect()
}
