//! linkpage Core Library
//!
//! View state, uploaded-media handles and background music control for a
//! single-page "link-in-bio" profile.
//!
//! ## Overview
//!
//! The site has two screens: a home view listing links under a profile
//! picture, and a detail view per service showing a gallery and a price
//! tag. Images can be replaced from local files and the price tag can be
//! edited; all of it lives for the running session only.
//!
//! This crate holds everything that is not presentation:
//!
//! - [`SiteConfig`]: the static seed (JSON) the session starts from
//! - [`Site`]: the state orchestrator, one named transition per intent
//! - [`MediaTable`]: session-scoped handles for uploaded images
//! - [`PlaybackController`]: play/pause with serialized async play requests
//!
//! ## Quick Start
//!
//! ```
//! use linkpage_core::{EditOutcome, PlaybackCommand, ServiceId, Site, SiteConfig};
//!
//! let mut site = Site::new(SiteConfig::builtin()?)?;
//!
//! let nails = ServiceId::new("nails");
//! site.navigate_to_service(&nails)?;
//! assert_eq!(site.update_gallery_image(&nails, 0, b"bytes"), EditOutcome::Applied);
//!
//! // Music starts paused; play is only confirmed once the output accepts it
//! assert_eq!(site.toggle_playback(), Some(PlaybackCommand::Play));
//! site.complete_play(Ok(()));
//! assert!(site.playback().is_playing());
//! # Ok::<(), linkpage_core::SiteError>(())
//! ```

pub mod config;
pub mod error;
pub mod media;
pub mod playback;
pub mod site;
pub mod types;

// Re-exports
pub use config::{ImagesConfig, ServiceConfig, SiteConfig};
pub use error::{SiteError, SiteResult};
pub use media::MediaTable;
pub use playback::{
    perform, AudioOutput, PlaybackCommand, PlaybackController, PlaybackError, PlaybackState,
};
pub use site::{EditOutcome, Site};
pub use types::*;
