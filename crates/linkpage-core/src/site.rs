//! Site - the state orchestrator
//!
//! Owns every piece of mutable state (current view, services, global
//! images, playback, uploaded media) and exposes one named transition
//! per user intent. Views hold no state of their own; they read from a
//! `Site` and call back into it.
//!
//! Edits that belong to the detail view take the target [`ServiceId`]
//! explicitly. The id is threaded from `View::Detail(id)`, and an edit
//! aimed at any service other than the one on screen is ignored.
//!
//! # Example
//!
//! ```
//! use linkpage_core::{EditOutcome, ServiceId, Site, SiteConfig, View};
//!
//! let mut site = Site::new(SiteConfig::builtin()?)?;
//! let spa = ServiceId::new("spa");
//!
//! site.navigate_to_service(&spa)?;
//! assert_eq!(site.view(), &View::Detail(spa.clone()));
//! assert_eq!(site.update_price_tag(&spa, "$60"), EditOutcome::Applied);
//!
//! site.navigate_to_home();
//! assert_eq!(site.update_price_tag(&spa, "$70"), EditOutcome::Ignored);
//! assert_eq!(site.service(&spa).unwrap().price_tag(), "$60");
//! # Ok::<(), linkpage_core::SiteError>(())
//! ```

use tracing::{debug, warn};

use crate::config::SiteConfig;
use crate::error::{SiteError, SiteResult};
use crate::media::MediaTable;
use crate::playback::{PlaybackCommand, PlaybackController, PlaybackError, PlaybackState};
use crate::types::{
    GlobalImages, ImageRef, Link, ProfileInfo, ServiceId, ServiceRecord, ServicesMap, View,
};

/// Result of a detail-view edit
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EditOutcome {
    /// The edit was stored
    Applied,
    /// The target service is not the one on screen; nothing changed
    Ignored,
    /// Gallery index past the end; nothing changed
    OutOfRange,
}

impl EditOutcome {
    pub fn is_applied(&self) -> bool {
        matches!(self, EditOutcome::Applied)
    }
}

/// All state of a running site.
#[derive(Debug)]
pub struct Site {
    view: View,
    services: ServicesMap,
    images: GlobalImages,
    links: Vec<Link>,
    profile: ProfileInfo,
    music_url: String,
    playback: PlaybackController,
    media: MediaTable,
}

impl Site {
    /// Build the initial state from a seed.
    ///
    /// Starts on the home view with playback paused.
    pub fn new(config: SiteConfig) -> SiteResult<Self> {
        config.validate()?;

        let services = config
            .services
            .into_iter()
            .map(|(id, service)| {
                let gallery = service.gallery.into_iter().map(ImageRef::Url).collect();
                let record = ServiceRecord::new(
                    service.title,
                    service.summary,
                    service.description,
                    service.price_tag,
                    gallery,
                );
                (id, record)
            })
            .collect();

        Ok(Self {
            view: View::Home,
            services,
            images: GlobalImages {
                background: ImageRef::Url(config.images.background),
                profile: ImageRef::Url(config.images.profile),
            },
            links: config.links,
            profile: config.profile,
            music_url: config.music_url,
            playback: PlaybackController::new(),
            media: MediaTable::new(),
        })
    }

    // ------------------------------------------------------------------
    // Navigation
    // ------------------------------------------------------------------

    /// Show the detail view of `id`.
    ///
    /// Unknown ids are refused and the current view is kept.
    pub fn navigate_to_service(&mut self, id: &ServiceId) -> SiteResult<()> {
        if !self.services.contains_key(id) {
            warn!(service = %id, "Refusing navigation to unknown service");
            return Err(SiteError::InvalidViewReference(id.clone()));
        }

        debug!(from = ?self.view, service = %id, "Navigate to service");
        self.view = View::Detail(id.clone());
        Ok(())
    }

    pub fn navigate_to_home(&mut self) {
        debug!(from = ?self.view, "Navigate home");
        self.view = View::Home;
    }

    // ------------------------------------------------------------------
    // Global images
    // ------------------------------------------------------------------

    /// Replace the background with an uploaded file. Always permitted.
    pub fn update_background_image(&mut self, bytes: impl AsRef<[u8]>) -> ImageRef {
        let image = self.media.resolve(bytes);
        let old = std::mem::replace(&mut self.images.background, image.clone());
        self.media.release(&old);
        debug!("Background image updated");
        image
    }

    /// Replace the profile picture with an uploaded file. Always permitted.
    pub fn update_profile_image(&mut self, bytes: impl AsRef<[u8]>) -> ImageRef {
        let image = self.media.resolve(bytes);
        let old = std::mem::replace(&mut self.images.profile, image.clone());
        self.media.release(&old);
        debug!("Profile image updated");
        image
    }

    // ------------------------------------------------------------------
    // Detail-view edits
    // ------------------------------------------------------------------

    /// Replace one gallery slot of the service on screen.
    ///
    /// The upload is only resolved once the edit is known to apply, so
    /// ignored and out-of-range edits allocate nothing.
    pub fn update_gallery_image(
        &mut self,
        service: &ServiceId,
        index: usize,
        bytes: impl AsRef<[u8]>,
    ) -> EditOutcome {
        if self.view.service() != Some(service) {
            debug!(service = %service, view = ?self.view, "Gallery edit ignored");
            return EditOutcome::Ignored;
        }
        let Some(record) = self.services.get_mut(service) else {
            return EditOutcome::Ignored;
        };
        if index >= record.gallery().len() {
            debug!(service = %service, index, len = record.gallery().len(), "Gallery index out of range");
            return EditOutcome::OutOfRange;
        }

        let image = self.media.resolve(bytes);
        if let Some(old) = record.replace_slot(index, image) {
            self.media.release(&old);
        }
        debug!(service = %service, index, "Gallery image updated");
        EditOutcome::Applied
    }

    /// Replace the price tag of the service on screen. No format checks.
    pub fn update_price_tag(&mut self, service: &ServiceId, price: impl Into<String>) -> EditOutcome {
        if self.view.service() != Some(service) {
            debug!(service = %service, view = ?self.view, "Price edit ignored");
            return EditOutcome::Ignored;
        }
        let Some(record) = self.services.get_mut(service) else {
            return EditOutcome::Ignored;
        };

        record.set_price_tag(price.into());
        debug!(service = %service, price = record.price_tag(), "Price tag updated");
        EditOutcome::Applied
    }

    // ------------------------------------------------------------------
    // Playback
    // ------------------------------------------------------------------

    /// User pressed the music button; returns the command to issue, if any.
    pub fn toggle_playback(&mut self) -> Option<PlaybackCommand> {
        self.playback.toggle()
    }

    /// One automatic play attempt at mount
    pub fn autoplay(&mut self) -> Option<PlaybackCommand> {
        self.playback.autoplay()
    }

    /// Feed back the outcome of a play request
    pub fn complete_play(&mut self, result: Result<(), PlaybackError>) -> Option<PlaybackCommand> {
        self.playback.complete_play(result)
    }

    // ------------------------------------------------------------------
    // Session end
    // ------------------------------------------------------------------

    /// Free every uploaded image. Called when the window goes away.
    ///
    /// Slots that held an upload keep their (now dangling) ref and
    /// resolve to no source. Returns how many entries were freed.
    pub fn end_session(&mut self) -> usize {
        let freed = self.media.release_all();
        debug!(freed, "Session ended");
        freed
    }

    // ------------------------------------------------------------------
    // Accessors
    // ------------------------------------------------------------------

    pub fn view(&self) -> &View {
        &self.view
    }

    /// The service on screen and its record, if in a detail view
    pub fn current_service(&self) -> Option<(&ServiceId, &ServiceRecord)> {
        let id = self.view.service()?;
        self.services.get(id).map(|record| (id, record))
    }

    pub fn service(&self, id: &ServiceId) -> Option<&ServiceRecord> {
        self.services.get(id)
    }

    pub fn services(&self) -> &ServicesMap {
        &self.services
    }

    pub fn images(&self) -> &GlobalImages {
        &self.images
    }

    /// Displayable locator for any image ref held by this site
    pub fn image_src(&self, image: &ImageRef) -> Option<String> {
        self.media.src(image)
    }

    pub fn links(&self) -> &[Link] {
        &self.links
    }

    pub fn profile(&self) -> &ProfileInfo {
        &self.profile
    }

    pub fn music_url(&self) -> &str {
        &self.music_url
    }

    pub fn playback(&self) -> PlaybackState {
        self.playback.state()
    }

    pub fn playback_controller(&self) -> &PlaybackController {
        &self.playback
    }

    pub fn media(&self) -> &MediaTable {
        &self.media
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{ImagesConfig, ServiceConfig};
    use std::collections::BTreeMap;

    fn spa() -> ServiceId {
        ServiceId::new("spa")
    }

    fn site() -> Site {
        let mut services = BTreeMap::new();
        services.insert(
            spa(),
            ServiceConfig {
                title: "Spa".to_string(),
                summary: String::new(),
                description: String::new(),
                price_tag: "$50".to_string(),
                gallery: vec!["A".to_string(), "B".to_string()],
            },
        );
        Site::new(SiteConfig {
            profile: ProfileInfo::default(),
            images: ImagesConfig {
                background: "bg".to_string(),
                profile: "me".to_string(),
            },
            music_url: "loop.mp3".to_string(),
            links: Vec::new(),
            services,
        })
        .unwrap()
    }

    #[test]
    fn test_starts_home_paused() {
        let site = site();
        assert_eq!(site.view(), &View::Home);
        assert_eq!(site.playback(), PlaybackState::Paused);
        assert!(site.current_service().is_none());
        assert!(site.media().is_empty());
    }

    #[test]
    fn test_navigate_unknown_keeps_view() {
        let mut site = site();
        let err = site
            .navigate_to_service(&ServiceId::new("nails"))
            .unwrap_err();
        assert!(matches!(err, SiteError::InvalidViewReference(_)));
        assert_eq!(site.view(), &View::Home);
    }

    #[test]
    fn test_current_service() {
        let mut site = site();
        site.navigate_to_service(&spa()).unwrap();
        let (id, record) = site.current_service().unwrap();
        assert_eq!(id, &spa());
        assert_eq!(record.price_tag(), "$50");
    }

    #[test]
    fn test_background_upload_releases_previous() {
        let mut site = site();
        let first = site.update_background_image(b"one");
        assert_eq!(site.media().len(), 1);

        let second = site.update_background_image(b"two");
        assert_eq!(site.media().len(), 1);
        assert!(site.image_src(&first).is_none());
        assert!(site.image_src(&second).is_some());
        assert_eq!(site.images().background, second);
    }

    #[test]
    fn test_profile_upload_from_any_view() {
        let mut site = site();
        site.navigate_to_service(&spa()).unwrap();
        let image = site.update_profile_image(b"me");
        assert_eq!(site.images().profile, image);
        assert_eq!(site.images().background, ImageRef::url("bg"));
    }

    #[test]
    fn test_gallery_edit_ignored_on_home() {
        let mut site = site();
        assert_eq!(
            site.update_gallery_image(&spa(), 0, b"x"),
            EditOutcome::Ignored
        );
        assert!(site.media().is_empty());
    }

    #[test]
    fn test_gallery_edit_out_of_range_allocates_nothing() {
        let mut site = site();
        site.navigate_to_service(&spa()).unwrap();
        assert_eq!(
            site.update_gallery_image(&spa(), 2, b"x"),
            EditOutcome::OutOfRange
        );
        assert!(site.media().is_empty());
    }

    #[test]
    fn test_gallery_slot_replacement_releases_old_upload() {
        let mut site = site();
        site.navigate_to_service(&spa()).unwrap();

        for _ in 0..10 {
            assert!(site.update_gallery_image(&spa(), 1, b"x").is_applied());
        }
        assert_eq!(site.media().len(), 1);
    }

    #[test]
    fn test_end_session_releases_uploads() {
        let mut site = site();
        let background = site.update_background_image(b"bg");
        site.navigate_to_service(&spa()).unwrap();
        site.update_gallery_image(&spa(), 0, b"x");
        site.update_gallery_image(&spa(), 1, b"y");
        assert_eq!(site.media().len(), 3);

        assert_eq!(site.end_session(), 3);
        assert!(site.media().is_empty());
        assert!(site.image_src(&background).is_none());

        // Configured URLs are not media entries
        let record = site.service(&spa()).unwrap();
        assert!(record.gallery().iter().all(|image| image.is_transient()));
        assert_eq!(site.end_session(), 0);
    }

    #[test]
    fn test_service_without_gallery_rejects_every_index() {
        let config = SiteConfig::from_json(
            r#"{
                "profile": { "name": "Ana" },
                "images": { "background": "bg", "profile": "me" },
                "music_url": "loop.mp3",
                "services": { "info": { "title": "Info", "price_tag": "" } }
            }"#,
        )
        .unwrap();
        let mut site = Site::new(config).unwrap();
        let info = ServiceId::new("info");

        site.navigate_to_service(&info).unwrap();
        assert!(site.service(&info).unwrap().gallery().is_empty());
        assert_eq!(
            site.update_gallery_image(&info, 0, b"x"),
            EditOutcome::OutOfRange
        );
        assert!(site.media().is_empty());
    }

    #[test]
    fn test_playback_delegation() {
        let mut site = site();
        assert_eq!(site.toggle_playback(), Some(PlaybackCommand::Play));
        assert_eq!(site.complete_play(Ok(())), None);
        assert_eq!(site.playback(), PlaybackState::Playing);
    }
}
