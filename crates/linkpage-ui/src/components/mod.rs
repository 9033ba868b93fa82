//! Reusable UI components
//!
//! Class names match the global stylesheet shipped by the desktop shell.

mod button;
mod input;

pub use button::*;
pub use input::*;
