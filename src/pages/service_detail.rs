//! Service detail page.
//!
//! Shows one service record: description, an editable gallery and the
//! editable price tag. Every edit names the service it was rendered for.

use dioxus::prelude::*;
use linkpage_core::ServiceId;
use linkpage_ui::{Button, ButtonVariant, Input};

use crate::components::{EditableGallery, MarkdownRenderer};
use crate::context::use_site;

#[component]
pub fn ServiceDetail(service_id: ServiceId) -> Element {
    let mut site = use_site();

    let state = site.read();
    let Some(record) = state.service(&service_id) else {
        tracing::warn!(service = %service_id, "Detail view for unknown service");
        return VNode::empty();
    };
    let title = record.title().to_string();
    let summary = record.summary().to_string();
    let description = record.description().to_string();
    let price_tag = record.price_tag().to_string();
    let gallery: Vec<Option<String>> = record
        .gallery()
        .iter()
        .map(|image| state.image_src(image))
        .collect();
    drop(state);

    let gallery_id = service_id.clone();
    let price_id = service_id.clone();

    rsx! {
        article { class: "service-detail",
            div { class: "service-detail__nav",
                Button {
                    variant: ButtonVariant::Ghost,
                    onclick: move |_| site.write().navigate_to_home(),
                    "‹ Volver"
                }
            }

            header { class: "service-detail__header",
                h2 { class: "service-detail__title", "{title}" }
                if !summary.is_empty() {
                    p { class: "service-detail__summary", "{summary}" }
                }
            }

            EditableGallery {
                images: gallery,
                alt: title.clone(),
                on_replace: move |(index, bytes): (usize, Vec<u8>)| {
                    let outcome = site.write().update_gallery_image(&gallery_id, index, bytes);
                    if !outcome.is_applied() {
                        tracing::debug!(?outcome, index, "Gallery upload not applied");
                    }
                },
            }

            MarkdownRenderer { content: description }

            div { class: "service-detail__price",
                Input {
                    value: price_tag,
                    label: "Precio".to_string(),
                    hint: "editable".to_string(),
                    placeholder: "$0".to_string(),
                    oninput: move |price: String| {
                        site.write().update_price_tag(&price_id, price);
                    },
                }
            }
        }
    }
}
