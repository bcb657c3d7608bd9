mod error;
mod traits;

pub use error::{HostError, Result};
pub use traits::{NotificationHost, NotificationKind};
