//! Scenario and boundary condition tests
//!
//! These tests drive a `Site` the way the views do and check that
//! refused or out-of-range intents leave the state untouched.

use linkpage_core::{EditOutcome, ImageRef, ServiceId, Site, SiteConfig, SiteError, View};

const SEED: &str = r#"{
    "profile": { "name": "Ana", "tagline": "bienestar" },
    "images": { "background": "https://img/bg.jpg", "profile": "https://img/me.jpg" },
    "music_url": "https://audio/loop.mp3",
    "links": [
        { "label": "Spa", "target": { "service": "spa" } },
        { "label": "Nails", "target": { "service": "nails" } },
        { "label": "Instagram", "target": { "external": "https://instagram.com" } }
    ],
    "services": {
        "spa": { "title": "Spa", "price_tag": "$50", "gallery": ["A", "B"] },
        "nails": { "title": "Nails", "price_tag": "$25", "gallery": ["N1", "N2", "N3"] }
    }
}"#;

fn site() -> Site {
    Site::new(SiteConfig::from_json(SEED).unwrap()).unwrap()
}

fn spa() -> ServiceId {
    ServiceId::new("spa")
}

fn nails() -> ServiceId {
    ServiceId::new("nails")
}

// ============================================================================
// Scenarios
// ============================================================================

#[test]
fn test_price_edit_scenario() {
    let mut site = site();

    site.navigate_to_service(&spa()).unwrap();
    assert_eq!(site.view(), &View::Detail(spa()));

    assert_eq!(site.update_price_tag(&spa(), "$60"), EditOutcome::Applied);
    let record = site.service(&spa()).unwrap();
    assert_eq!(record.price_tag(), "$60");
    assert_eq!(record.gallery(), &[ImageRef::url("A"), ImageRef::url("B")]);

    site.navigate_to_home();
    assert_eq!(site.view(), &View::Home);

    assert_eq!(site.update_price_tag(&spa(), "$70"), EditOutcome::Ignored);
    assert_eq!(site.service(&spa()).unwrap().price_tag(), "$60");
}

#[test]
fn test_gallery_index_past_end_is_noop() {
    let mut site = site();
    site.navigate_to_service(&spa()).unwrap();
    let before = site.service(&spa()).unwrap().clone();

    assert_eq!(
        site.update_gallery_image(&spa(), 5, b"file"),
        EditOutcome::OutOfRange
    );

    assert_eq!(site.service(&spa()).unwrap(), &before);
    assert!(site.media().is_empty());
}

#[test]
fn test_gallery_edit_isolation() {
    let mut site = site();
    site.navigate_to_service(&nails()).unwrap();
    let spa_before = site.service(&spa()).unwrap().clone();

    assert!(site.update_gallery_image(&nails(), 1, b"file").is_applied());

    let gallery = site.service(&nails()).unwrap().gallery();
    assert_eq!(gallery[0], ImageRef::url("N1"));
    assert!(gallery[1].is_transient());
    assert_eq!(gallery[2], ImageRef::url("N3"));
    assert_eq!(site.service(&spa()).unwrap(), &spa_before);
}

#[test]
fn test_edit_for_other_service_ignored() {
    let mut site = site();
    site.navigate_to_service(&nails()).unwrap();

    assert_eq!(site.update_price_tag(&spa(), "$1"), EditOutcome::Ignored);
    assert_eq!(
        site.update_gallery_image(&spa(), 0, b"file"),
        EditOutcome::Ignored
    );
    assert_eq!(site.service(&spa()).unwrap().price_tag(), "$50");
    assert_eq!(site.service(&spa()).unwrap().gallery()[0], ImageRef::url("A"));
}

#[test]
fn test_detail_to_detail_navigation() {
    let mut site = site();
    site.navigate_to_service(&spa()).unwrap();
    site.navigate_to_service(&nails()).unwrap();
    assert_eq!(site.view(), &View::Detail(nails()));
}

// ============================================================================
// Invalid references
// ============================================================================

#[test]
fn test_unknown_service_from_detail_keeps_detail() {
    let mut site = site();
    site.navigate_to_service(&spa()).unwrap();

    let result = site.navigate_to_service(&ServiceId::new("massage"));
    assert!(matches!(result, Err(SiteError::InvalidViewReference(id)) if id.as_str() == "massage"));
    assert_eq!(site.view(), &View::Detail(spa()));
}

#[test]
fn test_empty_service_id_rejected() {
    let mut site = site();
    assert!(site.navigate_to_service(&ServiceId::new("")).is_err());
    assert_eq!(site.view(), &View::Home);
}

// ============================================================================
// Free-form input
// ============================================================================

#[test]
fn test_price_tag_accepts_anything() {
    let mut site = site();
    site.navigate_to_service(&spa()).unwrap();

    for price in ["", "   ", "gratis", "€ 12,50", "🙂"] {
        assert!(site.update_price_tag(&spa(), price).is_applied());
        assert_eq!(site.service(&spa()).unwrap().price_tag(), price);
    }
}

#[test]
fn test_non_image_upload_is_not_an_error() {
    let mut site = site();
    site.navigate_to_service(&spa()).unwrap();

    assert!(site
        .update_gallery_image(&spa(), 0, b"%PDF-1.7 not an image")
        .is_applied());
    let image = site.service(&spa()).unwrap().gallery()[0].clone();
    let src = site.image_src(&image).unwrap();
    assert!(src.starts_with("data:application/octet-stream;base64,"));
}

// ============================================================================
// Resource release
// ============================================================================

#[test]
fn test_repeated_uploads_do_not_grow_media_table() {
    let mut site = site();
    site.navigate_to_service(&nails()).unwrap();

    for round in 0..50u8 {
        site.update_background_image([round]);
        site.update_profile_image([round]);
        site.update_gallery_image(&nails(), usize::from(round) % 3, [round]);
    }

    // One live upload per replaced slot: background, profile, three gallery slots
    assert_eq!(site.media().len(), 5);
}

#[test]
fn test_replaced_handle_no_longer_resolves() {
    let mut site = site();
    let first = site.update_profile_image(b"first");
    site.update_profile_image(b"second");

    assert!(site.image_src(&first).is_none());
    assert!(!site.media().contains(&first.handle().unwrap()));
}

#[test]
fn test_configured_urls_resolve_to_themselves() {
    let site = site();
    assert_eq!(
        site.image_src(&site.images().background),
        Some("https://img/bg.jpg".to_string())
    );
}
