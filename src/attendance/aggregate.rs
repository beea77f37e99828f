use crate::attendance::{DayStatus, EventStore, ReportingWindow};

// 12 weeks of 5 weekdays each.
pub const POLICY_PERIOD_WORKDAYS: i64 = 60;

#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct AttendanceTotals {
    pub office_days: u32,
    pub leave_days: u32,
    pub remote_days: u32,
    pub percentage: Option<f64>,
}

pub fn aggregate(store: &EventStore, window: &ReportingWindow) -> AttendanceTotals {
    let mut office_days = 0u32;
    let mut leave_days = 0u32;
    let mut remote_days = 0u32;

    for event in store.all() {
        // Days in the current, not-yet-complete week stay out of the counts.
        if event.date >= window.prior_week_end {
            continue;
        }
        match event.status {
            DayStatus::Office => office_days += 1,
            DayStatus::Holiday | DayStatus::OutOfOffice => leave_days += 1,
            DayStatus::RemoteApproved => remote_days += 1,
        }
    }

    // Approved remote days shrink the base the presence is measured against.
    let denominator = POLICY_PERIOD_WORKDAYS - remote_days as i64;
    let percentage = if denominator > 0 {
        Some(round2(
            100.0 * (office_days + leave_days) as f64 / denominator as f64,
        ))
    } else {
        None
    };

    AttendanceTotals {
        office_days,
        leave_days,
        remote_days,
        percentage,
    }
}

pub(crate) fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}
