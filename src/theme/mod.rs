//! Visual theme for linkpage.

mod styles;

pub use styles::GLOBAL_STYLES;
