//! UI Components for linkpage.
//!
//! Shell-level pieces that know about the running `Site`. Plain widgets
//! live in the `linkpage-ui` crate.

mod background;
mod gallery;
pub mod images;
mod markdown;
mod music_toggle;

pub use background::Background;
pub use gallery::EditableGallery;
pub use markdown::MarkdownRenderer;
pub use music_toggle::MusicToggle;
