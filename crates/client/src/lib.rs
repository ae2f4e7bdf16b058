pub mod codes;
pub mod error;
#[cfg(any(test, feature = "mock"))]
mod mock;
mod records;
mod session;
mod transport;

pub use crate::codes::{Buzzer, LedColor, LedMode, NotifyIcon};
#[cfg(any(test, feature = "mock"))]
pub use crate::mock::MockTransport;
pub use crate::records::{DirectoryRecord, FileRecord, GameRecord};
pub use crate::session::Session;
pub use crate::transport::{HttpTransport, Transport};
