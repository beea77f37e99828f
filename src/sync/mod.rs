pub mod remote;
pub mod sync_engine;
pub mod token;
pub mod transfer;

pub use remote::{ApiError, AttendanceRemote, BasketClient};
pub use sync_engine::{SyncError, SyncManager};
pub use token::{AccessToken, TokenError};
pub use transfer::{TransferError, export_events, import_events};
