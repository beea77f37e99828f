pub mod app;
pub mod attendance;
pub mod storage;
pub mod sync;

pub use app::Tracker;
pub use attendance::{AttendanceTotals, DayStatus, Event, EventStore, ReportingWindow};
pub use sync::{AccessToken, SyncManager};
