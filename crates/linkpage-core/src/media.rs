//! Media Table - session-scoped handles for uploaded images
//!
//! Turns the raw bytes of a picked file into an [`ImageRef`] that the
//! views can display. Every resolve allocates a fresh [`MediaHandle`]
//! mapped to a `data:` URL built from the bytes; the entry lives until
//! it is released.
//!
//! # Lifecycle
//!
//! - `resolve()` allocates an entry and returns `ImageRef::Transient`
//! - `release()` frees one entry (the orchestrator calls it when a slot
//!   holding a transient ref is overwritten)
//! - `release_all()` frees everything at session end
//!
//! Nothing here touches the network or the disk.
//!
//! # Example
//!
//! ```
//! use linkpage_core::MediaTable;
//!
//! let mut media = MediaTable::new();
//! let image = media.resolve(b"\x89PNG\r\n\x1a\n....".to_vec());
//! assert!(media.src(&image).unwrap().starts_with("data:image/png;base64,"));
//!
//! assert!(media.release(&image));
//! assert!(media.src(&image).is_none());
//! ```

use std::collections::HashMap;

use base64::Engine;
use tracing::debug;

use crate::types::{ImageRef, MediaHandle};

/// MIME type used when the bytes are not a recognized image format
pub const FALLBACK_MIME: &str = "application/octet-stream";

/// Owned table of transient image resources keyed by handle.
///
/// Each entry is the `data:` URL the handle displays as.
#[derive(Debug, Default)]
pub struct MediaTable {
    entries: HashMap<MediaHandle, String>,
}

impl MediaTable {
    pub fn new() -> Self {
        Self::default()
    }

    /// Allocate a displayable resource for `bytes`.
    ///
    /// No validation is done: unknown formats are stored with
    /// [`FALLBACK_MIME`] and may simply fail to render.
    pub fn resolve(&mut self, bytes: impl AsRef<[u8]>) -> ImageRef {
        let bytes = bytes.as_ref();
        let mime = sniff_mime(bytes);
        let encoded = base64::engine::general_purpose::STANDARD.encode(bytes);
        let handle = MediaHandle::new();

        self.entries
            .insert(handle, format!("data:{};base64,{}", mime, encoded));
        debug!(%handle, mime, size = bytes.len(), live = self.entries.len(), "Resolved media");

        ImageRef::Transient(handle)
    }

    /// Displayable locator for an image.
    ///
    /// Returns `None` for a transient ref whose entry was released.
    pub fn src(&self, image: &ImageRef) -> Option<String> {
        match image {
            ImageRef::Url(url) => Some(url.clone()),
            ImageRef::Transient(handle) => self.entries.get(handle).cloned(),
        }
    }

    /// Free the entry behind a transient ref.
    ///
    /// Permanent refs and already-released handles are ignored.
    /// Returns whether an entry was freed.
    pub fn release(&mut self, image: &ImageRef) -> bool {
        let Some(handle) = image.handle() else {
            return false;
        };

        let freed = self.entries.remove(&handle).is_some();
        if freed {
            debug!(%handle, live = self.entries.len(), "Released media");
        }
        freed
    }

    /// Free every entry. Returns how many were freed.
    pub fn release_all(&mut self) -> usize {
        let count = self.entries.len();
        self.entries.clear();
        if count > 0 {
            debug!(count, "Released all media");
        }
        count
    }

    pub fn contains(&self, handle: &MediaHandle) -> bool {
        self.entries.contains_key(handle)
    }

    /// Number of live entries
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

fn sniff_mime(bytes: &[u8]) -> &'static str {
    image::guess_format(bytes)
        .map(|format| format.to_mime_type())
        .unwrap_or(FALLBACK_MIME)
}
