//! Editable Gallery Component
//!
//! Fixed grid of image slots; each slot carries an upload badge that
//! replaces just that slot.

use dioxus::prelude::*;

use crate::components::images::ImageUpload;

/// Thumbnail grid with per-slot replacement
///
/// `images` holds one displayable source per slot; `None` marks a slot
/// whose upload is no longer available and renders a placeholder.
///
/// # Examples
///
/// ```rust
/// rsx! {
///     EditableGallery {
///         images: srcs,
///         on_replace: move |(index, bytes)| { /* update slot */ },
///     }
/// }
/// ```
#[component]
pub fn EditableGallery(
    /// Displayable source per slot
    images: Vec<Option<String>>,
    /// Alt text prefix for the slots
    #[props(default = "Foto".to_string())]
    alt: String,
    /// Called with the slot index and the picked file's bytes
    on_replace: EventHandler<(usize, Vec<u8>)>,
) -> Element {
    if images.is_empty() {
        return VNode::empty();
    }

    rsx! {
        div { class: "gallery",
            for (index, src) in images.into_iter().enumerate() {
                div {
                    key: "{index}",
                    class: "gallery__item",

                    if let Some(url) = src {
                        img {
                            src: "{url}",
                            alt: format!("{} {}", alt, index + 1),
                            class: "gallery__img",
                        }
                    } else {
                        div { class: "gallery__placeholder", "?" }
                    }

                    ImageUpload {
                        icon_only: true,
                        class: "gallery__upload".to_string(),
                        on_pick: move |bytes| on_replace.call((index, bytes)),
                    }
                }
            }
        }
    }
}
