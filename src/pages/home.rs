//! Home page - profile picture, name and the link list.
//!
//! Service links open the in-app detail view; external links open in the
//! system browser.

use dioxus::prelude::*;
use linkpage_core::{LinkTarget, ServiceId, Site};
use linkpage_ui::{Button, ButtonVariant};

use crate::components::images::ImageUpload;
use crate::context::use_site;

/// Open the detail view behind a service link. Returns whether the view
/// changed; a link to an unknown service is logged and ignored.
fn follow_service_link(site: &mut Site, id: &ServiceId) -> bool {
    match site.navigate_to_service(id) {
        Ok(()) => true,
        Err(e) => {
            tracing::warn!("Navigation refused: {}", e);
            false
        }
    }
}

/// Home page component.
#[component]
pub fn Home() -> Element {
    let mut site = use_site();

    let state = site.read();
    let profile = state.profile().clone();
    let avatar = state.image_src(&state.images().profile);
    let links = state.links().to_vec();
    drop(state);

    let mut open_service = move |id: ServiceId| {
        follow_service_link(&mut site.write(), &id);
    };

    rsx! {
        section { class: "home",
            header { class: "home-header",
                div { class: "avatar",
                    if let Some(src) = avatar {
                        img {
                            class: "avatar__img",
                            src: "{src}",
                            alt: "{profile.name}",
                        }
                    } else {
                        div { class: "avatar__placeholder" }
                    }

                    ImageUpload {
                        icon_only: true,
                        label: "Cambiar foto de perfil".to_string(),
                        class: "avatar__upload".to_string(),
                        on_pick: move |bytes: Vec<u8>| {
                            site.write().update_profile_image(bytes);
                        },
                    }
                }

                h1 { class: "home-title", "{profile.name}" }
                if !profile.tagline.is_empty() {
                    p { class: "home-tagline", "{profile.tagline}" }
                }
            }

            nav { class: "link-list",
                for (position, link) in links.into_iter().enumerate() {
                    {
                        let icon = link.icon.clone().unwrap_or_default();
                        match link.target {
                            LinkTarget::Service(id) => rsx! {
                                Button {
                                    key: "{position}",
                                    variant: ButtonVariant::Link,
                                    onclick: move |_| open_service(id.clone()),
                                    span { class: "link-icon", "{icon}" }
                                    span { class: "link-label", "{link.label}" }
                                    span { class: "link-chevron", "›" }
                                }
                            },
                            LinkTarget::External(url) => rsx! {
                                a {
                                    key: "{position}",
                                    class: "btn-link",
                                    href: "{url}",
                                    target: "_blank",
                                    rel: "noopener noreferrer",
                                    span { class: "link-icon", "{icon}" }
                                    span { class: "link-label", "{link.label}" }
                                    span { class: "link-chevron", "↗" }
                                }
                            },
                        }
                    }
                }
            }

            footer { class: "home-footer",
                ImageUpload {
                    label: "Cambiar fondo".to_string(),
                    class: "btn-ghost".to_string(),
                    on_pick: move |bytes: Vec<u8>| {
                        site.write().update_background_image(bytes);
                    },
                }
            }
        }
    }
}
