//! Site context provider for linkpage.
//!
//! Provides the running `Site` to all components via use_context.
//!
//! ## Usage
//!
//! ```ignore
//! // In SiteRoot
//! use_context_provider(|| site);
//!
//! // In child components
//! let mut site = use_site();
//! site.write().navigate_to_home();
//! ```

use dioxus::prelude::*;
use linkpage_core::Site;

use crate::playback::WebviewAudio;

/// Hook to access the Site from context.
///
/// All state lives in this one signal; every mutation goes through a
/// named `Site` transition, and writing re-renders the active view.
pub fn use_site() -> Signal<Site> {
    use_context::<Signal<Site>>()
}

/// Hook to access the shared background-music output.
pub fn use_audio() -> WebviewAudio {
    use_context::<WebviewAudio>()
}
