//! Routed pages

mod home;
mod not_found;
mod resume_builder;

pub use home::*;
pub use not_found::*;
pub use resume_builder::*;
