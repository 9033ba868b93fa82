//! Core types for linkpage

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use ulid::Ulid;

/// Stable identifier for one offered service.
///
/// Service ids are fixed by the configuration seed and never change
/// while the site is running.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ServiceId(String);

impl ServiceId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for ServiceId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for ServiceId {
    fn from(s: &str) -> Self {
        Self::new(s)
    }
}

/// Which screen is currently active.
///
/// A `Detail` always names a service present in the services map;
/// [`crate::Site`] refuses transitions that would break this.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum View {
    #[default]
    Home,
    Detail(ServiceId),
}

impl View {
    pub fn is_home(&self) -> bool {
        matches!(self, View::Home)
    }

    /// The service shown by this view, if any
    pub fn service(&self) -> Option<&ServiceId> {
        match self {
            View::Home => None,
            View::Detail(id) => Some(id),
        }
    }
}

/// Identifier of a session-scoped media entry
///
/// Uses ULID so every resolved upload gets a distinct handle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct MediaHandle(pub Ulid);

impl MediaHandle {
    pub fn new() -> Self {
        Self(Ulid::new())
    }
}

impl Default for MediaHandle {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Display for MediaHandle {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "media_{}", self.0)
    }
}

/// Handle to a displayable image.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ImageRef {
    /// Permanent locator from the configuration seed
    Url(String),

    /// Upload held in the [`crate::MediaTable`] for this session only
    Transient(MediaHandle),
}

impl ImageRef {
    pub fn url(url: impl Into<String>) -> Self {
        ImageRef::Url(url.into())
    }

    pub fn is_transient(&self) -> bool {
        matches!(self, ImageRef::Transient(_))
    }

    pub fn handle(&self) -> Option<MediaHandle> {
        match self {
            ImageRef::Url(_) => None,
            ImageRef::Transient(handle) => Some(*handle),
        }
    }
}

/// One offered service: static copy plus the editable price and gallery.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServiceRecord {
    title: String,
    summary: String,
    description: String,
    price_tag: String,
    gallery: Vec<ImageRef>,
}

impl ServiceRecord {
    pub fn new(
        title: impl Into<String>,
        summary: impl Into<String>,
        description: impl Into<String>,
        price_tag: impl Into<String>,
        gallery: Vec<ImageRef>,
    ) -> Self {
        Self {
            title: title.into(),
            summary: summary.into(),
            description: description.into(),
            price_tag: price_tag.into(),
            gallery,
        }
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn summary(&self) -> &str {
        &self.summary
    }

    /// Markdown body shown on the detail view
    pub fn description(&self) -> &str {
        &self.description
    }

    pub fn price_tag(&self) -> &str {
        &self.price_tag
    }

    pub fn gallery(&self) -> &[ImageRef] {
        &self.gallery
    }

    pub(crate) fn set_price_tag(&mut self, price: String) {
        self.price_tag = price;
    }

    /// Swap one gallery slot, returning the previous ref.
    ///
    /// Returns `None` (and changes nothing) when `index` is past the end,
    /// so the gallery length never changes.
    pub(crate) fn replace_slot(&mut self, index: usize, image: ImageRef) -> Option<ImageRef> {
        self.gallery
            .get_mut(index)
            .map(|slot| std::mem::replace(slot, image))
    }
}

/// All services keyed by id. Keys are fixed at startup.
pub type ServicesMap = BTreeMap<ServiceId, ServiceRecord>;

/// Site-wide images, independent of any service
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GlobalImages {
    pub background: ImageRef,
    pub profile: ImageRef,
}

/// Where a home-view link leads
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LinkTarget {
    /// Opens the detail view of a service
    Service(ServiceId),
    /// Opens an external page
    External(String),
}

/// A single entry of the home link list
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Link {
    pub label: String,
    #[serde(default)]
    pub icon: Option<String>,
    pub target: LinkTarget,
}

/// Name and tagline shown above the link list
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct ProfileInfo {
    pub name: String,
    #[serde(default)]
    pub tagline: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(slots: usize) -> ServiceRecord {
        let gallery = (0..slots)
            .map(|i| ImageRef::url(format!("https://img/{i}.jpg")))
            .collect();
        ServiceRecord::new("Spa", "", "", "$50", gallery)
    }

    #[test]
    fn test_view_default_is_home() {
        assert!(View::default().is_home());
        assert_eq!(View::default().service(), None);
    }

    #[test]
    fn test_view_detail_service() {
        let view = View::Detail(ServiceId::new("spa"));
        assert!(!view.is_home());
        assert_eq!(view.service(), Some(&ServiceId::new("spa")));
    }

    #[test]
    fn test_media_handles_are_unique() {
        assert_ne!(MediaHandle::new(), MediaHandle::new());
    }

    #[test]
    fn test_image_ref_handle() {
        let handle = MediaHandle::new();
        assert_eq!(ImageRef::Transient(handle).handle(), Some(handle));
        assert_eq!(ImageRef::url("https://x").handle(), None);
        assert!(ImageRef::Transient(handle).is_transient());
    }

    #[test]
    fn test_replace_slot_returns_previous() {
        let mut rec = record(2);
        let old = rec.replace_slot(1, ImageRef::url("new"));
        assert_eq!(old, Some(ImageRef::url("https://img/1.jpg")));
        assert_eq!(rec.gallery()[1], ImageRef::url("new"));
        assert_eq!(rec.gallery()[0], ImageRef::url("https://img/0.jpg"));
    }

    #[test]
    fn test_replace_slot_out_of_range_keeps_length() {
        let mut rec = record(2);
        assert_eq!(rec.replace_slot(5, ImageRef::url("new")), None);
        assert_eq!(rec.gallery().len(), 2);
    }

    #[test]
    fn test_link_target_serde() {
        let link: Link =
            serde_json::from_str(r#"{"label":"Spa","target":{"service":"spa"}}"#).unwrap();
        assert_eq!(link.target, LinkTarget::Service(ServiceId::new("spa")));
        assert_eq!(link.icon, None);

        let link: Link = serde_json::from_str(
            r#"{"label":"IG","icon":"◎","target":{"external":"https://instagram.com"}}"#,
        )
        .unwrap();
        assert_eq!(
            link.target,
            LinkTarget::External("https://instagram.com".to_string())
        );
    }
}
