pub mod aggregate;
pub mod event;
pub mod predict;
pub mod store;
pub mod window;

pub use aggregate::{AttendanceTotals, aggregate};
pub use event::{DayStatus, Event, EventRecord};
pub use predict::remote_weeks_available;
pub use store::EventStore;
pub use window::ReportingWindow;
