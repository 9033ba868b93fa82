//! linkpage UI Components
//!
//! Presentational widgets for the link-in-bio profile. Nothing in here
//! knows about services or media; the shell passes plain values and
//! callbacks.
//!
//! ## Look
//!
//! Frosted-glass surfaces over a full-window background image:
//! - translucent white fills (`rgba(255, 255, 255, 0.1)`)
//! - thin light borders and `backdrop-filter: blur`
//! - pill-shaped link buttons, round icon buttons

pub mod components;

pub use components::*;
