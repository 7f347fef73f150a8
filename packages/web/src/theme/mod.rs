//! Light/dark theme with system preference support

mod provider;
mod script;
mod selection;
mod state;
mod toggle;

pub use provider::*;
pub use script::{apply_script, init_script, persist_script, read_stored_script};
pub use selection::*;
pub use state::*;
pub use toggle::*;
