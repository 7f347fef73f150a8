//! Session-backed authentication

mod context;
mod server_fns;
mod types;

pub use context::*;
pub use server_fns::*;
pub use types::*;
