//! Full-window background layer

use dioxus::prelude::*;

/// Fixed background image with a darkening overlay.
///
/// A `None` source (released upload) falls back to the plain gradient.
#[component]
pub fn Background(src: Option<String>) -> Element {
    let style = match &src {
        Some(src) => format!("background-image: url('{}');", src),
        None => String::new(),
    };

    rsx! {
        div { class: "site-background", style: "{style}",
            div { class: "site-background__overlay" }
        }
    }
}
