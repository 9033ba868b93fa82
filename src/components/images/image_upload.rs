//! Image Upload Component
//!
//! Native file picker that reads the chosen file and passes the raw bytes
//! on. The bytes are not decoded or validated here; the site turns them
//! into a session-scoped image handle.

use std::path::PathBuf;

use dioxus::prelude::*;
use rfd::FileDialog;

/// Extensions offered by the default picker filter
const IMAGE_EXTENSIONS: &[&str] = &["png", "jpg", "jpeg", "webp", "gif", "bmp", "avif"];

/// Open the picker on a blocking thread so the UI stays responsive
async fn pick_image_file() -> Option<PathBuf> {
    let picked = tokio::task::spawn_blocking(|| {
        FileDialog::new()
            .add_filter("images", IMAGE_EXTENSIONS)
            .add_filter("all files", &["*"])
            .set_title("Select Image")
            .pick_file()
    })
    .await;

    match picked {
        Ok(path) => path,
        Err(e) => {
            tracing::error!("File picker error: {:?}", e);
            None
        }
    }
}

/// Image upload button
///
/// # Examples
///
/// ```rust
/// rsx! {
///     ImageUpload {
///         on_pick: move |bytes: Vec<u8>| {
///             site.write().update_profile_image(bytes);
///         },
///         icon_only: true,
///     }
/// }
/// ```
#[component]
pub fn ImageUpload(
    /// Callback with the picked file's bytes
    on_pick: EventHandler<Vec<u8>>,
    /// Optional button label
    #[props(default = "Cambiar imagen".to_string())]
    label: String,
    /// Show only icon (no text label)
    #[props(default = false)]
    icon_only: bool,
    /// Optional additional CSS classes
    #[props(default)]
    class: Option<String>,
) -> Element {
    let mut picking = use_signal(|| false);

    let handle_pick = move |_| {
        if picking() {
            return;
        }
        picking.set(true);

        spawn(async move {
            if let Some(path) = pick_image_file().await {
                match tokio::fs::read(&path).await {
                    Ok(bytes) => {
                        tracing::debug!(?path, size = bytes.len(), "Picked image");
                        on_pick.call(bytes);
                    }
                    Err(e) => {
                        tracing::warn!(?path, "Failed to read picked file: {}", e);
                    }
                }
            }
            picking.set(false);
        });
    };

    let base_class = if icon_only {
        "image-upload-btn--icon"
    } else {
        "image-upload-btn"
    };
    let full_class = match class.as_deref() {
        Some(extra) if !extra.is_empty() => format!("{} {}", base_class, extra),
        _ => base_class.to_string(),
    };

    rsx! {
        button {
            class: "{full_class}",
            r#type: "button",
            onclick: handle_pick,
            disabled: picking(),
            title: "{label}",
            if icon_only {
                if picking() { "⏳" } else { "📷" }
            } else {
                if picking() { "…" } else { "{label}" }
            }
        }
    }
}
