//! streak.rs
//!
//! Consecutive-day contribution streak, counted backwards from the most
//! recent contribution date and broken at the first gap. A gap further back
//! in history never extends the streak; this is the *current* streak, not
//! the longest one ever achieved.

use chrono::{DateTime, Days, NaiveDate, Utc};

/// Current streak over distinct calendar dates sorted newest first.
pub fn current_streak(dates: &[NaiveDate]) -> u32 {
    if dates.is_empty() {
        return 0;
    }

    let mut streak = 1;
    for pair in dates.windows(2) {
        // dates are descending, so the older day plus one must equal the
        // newer day for the streak to continue
        if pair[1].checked_add_days(Days::new(1)) == Some(pair[0]) {
            streak += 1;
        } else {
            break;
        }
    }
    streak
}

/// Collapse commit timestamps to distinct calendar dates, newest first,
/// regardless of how many commits landed on each day.
pub fn distinct_dates_desc(timestamps: &[DateTime<Utc>]) -> Vec<NaiveDate> {
    let mut dates: Vec<NaiveDate> = timestamps.iter().map(|t| t.date_naive()).collect();
    dates.sort_unstable_by(|a, b| b.cmp(a));
    dates.dedup();
    dates
}
