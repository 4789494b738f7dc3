//! Opaque absolute-time encoding for the `buildDate` binding.
//!
//! The generated file stores the build time as a tick count (100ns intervals
//! since 0001-01-01T00:00:00 UTC) rather than a formatted date, so reading it
//! back never depends on locale or time zone.

use chrono::{DateTime, Datelike, Utc};

use crate::constants::time::{
    EPOCH_OFFSET_SECS, MAX_YEAR, MIN_YEAR, NANOS_PER_TICK, TICKS_PER_SECOND,
};
use crate::error::{AppError, Result};

/// Converts a build time to ticks. Only years `MIN_YEAR..=MAX_YEAR` are
/// representable by the generated `DateTime`.
pub fn to_ticks(date: &DateTime<Utc>) -> Result<i64> {
    let out_of_range = || AppError::InvalidInput {
        message: format!(
            "Build time {} is outside {:04}-01-01..={:04}-12-31",
            date.to_rfc3339(),
            MIN_YEAR,
            MAX_YEAR
        ),
    };

    if !(MIN_YEAR..=MAX_YEAR).contains(&date.year()) {
        return Err(out_of_range());
    }

    let sub_ticks = i64::from(date.timestamp_subsec_nanos()) / NANOS_PER_TICK;
    date.timestamp()
        .checked_add(EPOCH_OFFSET_SECS)
        .and_then(|seconds| seconds.checked_mul(TICKS_PER_SECOND))
        .and_then(|ticks| ticks.checked_add(sub_ticks))
        .ok_or_else(out_of_range)
}
