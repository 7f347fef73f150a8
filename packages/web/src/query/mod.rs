//! Data-fetching cache shared across the app
//!
//! One [`QueryClient`] is built at startup with the shell's [`QueryOptions`]
//! and exposed through [`QueryClientProvider`]. Components read through
//! [`use_query`], which serves cached data immediately and revalidates it in
//! the background once it goes stale.

mod client;
mod clock;
mod devtools;
mod error;
mod hooks;
mod key;
mod policy;
mod provider;
mod retry;

pub use client::*;
pub use clock::*;
pub use devtools::*;
pub use error::*;
pub use hooks::*;
pub use key::*;
pub use policy::*;
pub use provider::*;
