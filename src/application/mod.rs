pub mod activity_log;
pub mod cancel_flag;
pub mod config_handle;
pub mod ports;
pub mod services;

pub use activity_log::{ActivityEntry, ActivityLog};
pub use cancel_flag::CancelFlag;
pub use config_handle::ConfigHandle;
