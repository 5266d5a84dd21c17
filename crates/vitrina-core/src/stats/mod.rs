//! Visit statistics: weekday and week-over-week histograms

mod histogram;

pub use histogram::{
    daily_histogram, weekday_index, weekly_histogram, Histogram, DAILY_FALLBACK_RANGE,
    DAILY_REAL_DATA_MIN, WEEKDAY_LABELS, WEEKLY_FALLBACK_RANGE, WEEKS_TRACKED,
};
