use crate::attendance::aggregate::{AttendanceTotals, round2};
use crate::attendance::{EventStore, ReportingWindow};

pub const ATTENDANCE_FLOOR_PCT: f64 = 60.0;

// Converts a percentage-point surplus into days on the 60-day scale.
const DAYS_PER_PERCENTAGE_POINT: f64 = 0.6;

pub fn remote_weeks_available(
    store: &EventStore,
    window: &ReportingWindow,
    totals: &AttendanceTotals,
) -> Option<f64> {
    if store.is_empty() {
        return Some(0.0);
    }

    let percentage = totals.percentage?;

    let excess_days = (percentage - ATTENDANCE_FLOOR_PCT) * DAYS_PER_PERCENTAGE_POINT;
    if excess_days <= 0.0 {
        return Some(0.0);
    }

    // The Nth-oldest event marks roughly where the surplus would be spent.
    let index = excess_days.round().max(0.0) as usize;
    let marker = store.all().into_iter().nth(index)?;

    let weeks = (marker.date - window.start).num_days() as f64 / 7.0;
    Some(round2(weeks))
}
