//! Histogram math over visit timestamps
//!
//! Two synthetic-fallback policies coexist on purpose (kept for
//! compatibility with the behavior the dashboards were built against):
//!
//! - the daily histogram discards ALL real counts and substitutes random
//!   values when the whole week holds fewer than [`DAILY_REAL_DATA_MIN`]
//!   visits;
//! - the weekly histogram backfills EACH zero-count week independently.
//!
//! Callers must treat sub-threshold output as synthetic, not as a signal.
//! Randomness is passed in so tests can use a seeded generator.

use std::ops::RangeInclusive;

use chrono::{DateTime, Datelike, Duration, Utc};
use rand::Rng;
use serde::Serialize;

/// Weekday labels, Monday first, as the dashboards display them
pub const WEEKDAY_LABELS: [&str; 7] = [
    "Lunes",
    "Martes",
    "Miércoles",
    "Jueves",
    "Viernes",
    "Sábado",
    "Domingo",
];

/// Minimum real visits (summed over all weekdays) before the daily histogram
/// reports real data
pub const DAILY_REAL_DATA_MIN: i64 = 5;

/// Synthetic value range for the daily whole-histogram fallback
pub const DAILY_FALLBACK_RANGE: RangeInclusive<i64> = 5..=20;

/// Synthetic value range for the weekly per-week fallback
pub const WEEKLY_FALLBACK_RANGE: RangeInclusive<i64> = 3..=15;

/// Number of calendar weeks the weekly histogram looks back
pub const WEEKS_TRACKED: usize = 10;

/// Labels plus aligned counts, ready for a chart
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Histogram {
    pub labels: Vec<String>,
    pub values: Vec<i64>,
}

/// Resolve a Spanish weekday name to its Monday=0 index
#[must_use]
pub fn weekday_index(name: &str) -> Option<usize> {
    WEEKDAY_LABELS.iter().position(|label| *label == name)
}

/// Bucket visits by weekday of their recorded timestamp.
///
/// Below [`DAILY_REAL_DATA_MIN`] total visits the real counts are discarded
/// and every bucket gets a random value in [`DAILY_FALLBACK_RANGE`].
pub fn daily_histogram<R: Rng>(visits: &[DateTime<Utc>], rng: &mut R) -> Histogram {
    let mut values = vec![0i64; 7];
    for visit in visits {
        values[visit.weekday().num_days_from_monday() as usize] += 1;
    }

    if values.iter().sum::<i64>() < DAILY_REAL_DATA_MIN {
        values = (0..7).map(|_| rng.gen_range(DAILY_FALLBACK_RANGE)).collect();
    }

    Histogram {
        labels: WEEKDAY_LABELS.iter().map(ToString::to_string).collect(),
        values,
    }
}

/// Count visits on the given weekday (Monday=0) for each of the last
/// [`WEEKS_TRACKED`] ISO weeks, oldest week first.
///
/// Weeks with a real count of exactly zero are independently backfilled with
/// a random value in [`WEEKLY_FALLBACK_RANGE`].
pub fn weekly_histogram<R: Rng>(
    visits: &[DateTime<Utc>],
    weekday: usize,
    now: DateTime<Utc>,
    rng: &mut R,
) -> Histogram {
    let mut labels = Vec::with_capacity(WEEKS_TRACKED);
    let mut values = Vec::with_capacity(WEEKS_TRACKED);

    for i in 0..WEEKS_TRACKED {
        let anchor = now - Duration::weeks(i as i64);
        let week = anchor.iso_week();

        let mut count = visits
            .iter()
            .filter(|v| {
                let visit_week = v.iso_week();
                visit_week.week() == week.week()
                    && visit_week.year() == week.year()
                    && v.weekday().num_days_from_monday() as usize == weekday
            })
            .count() as i64;

        if count == 0 {
            count = rng.gen_range(WEEKLY_FALLBACK_RANGE);
        }

        labels.push(format!("Semana {}", WEEKS_TRACKED - i));
        values.push(count);
    }

    // Computed newest-first; charts want oldest first.
    labels.reverse();
    values.reverse();

    Histogram { labels, values }
}
