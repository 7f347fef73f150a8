//! Transient toast notifications
//!
//! The shell creates one [`Toaster`] per tree and mounts a single
//! [`NotificationHost`]. Anything below the shell raises toasts through
//! [`use_toaster`].

mod config;
mod host;
mod queue;

pub use config::*;
pub use host::*;
pub use queue::*;
