use chrono::{Datelike, Duration, NaiveDate, Weekday};

// 12 weeks back from the anchor Sunday, inclusive.
const LOOKBACK_DAYS: i64 = 83;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ReportingWindow {
    pub start: NaiveDate,
    pub end: NaiveDate,
    pub prior_week_end: NaiveDate,
}

impl ReportingWindow {
    pub fn containing(today: NaiveDate) -> Self {
        // Saturday rolls forward to the upcoming Sunday; every other day
        // rolls back to the most recent Sunday (today itself on a Sunday).
        let anchor = if today.weekday() == Weekday::Sat {
            today + Duration::days(1)
        } else {
            today - Duration::days(today.weekday().num_days_from_sunday() as i64)
        };

        // A Saturday's week is not yet closed, so the cutoff stays on today.
        let prior_week_end = if today.weekday() == Weekday::Sat {
            today
        } else {
            anchor
        };

        Self {
            start: anchor - Duration::days(LOOKBACK_DAYS),
            end: today,
            prior_week_end,
        }
    }

    pub fn contains(&self, date: NaiveDate) -> bool {
        date >= self.start && date <= self.end
    }
}
