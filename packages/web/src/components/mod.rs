//! Reusable UI components

mod footer;
mod head;
mod navigation;
mod page_frame;

pub use footer::*;
pub use head::*;
pub use navigation::*;
pub use page_frame::*;
