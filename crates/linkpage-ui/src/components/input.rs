//! Input Field Components
//!
//! Single-line text input on a frosted surface. Used for the editable
//! price tag on the service detail view.

use std::sync::atomic::{AtomicU32, Ordering};

use dioxus::prelude::*;

/// Properties for the Input component
#[derive(Clone, PartialEq, Props)]
pub struct InputProps {
    /// Current input value
    pub value: String,
    /// Handler called on every edit
    pub oninput: EventHandler<String>,
    /// Placeholder text
    #[props(default)]
    pub placeholder: Option<String>,
    /// Input label text
    #[props(default)]
    pub label: Option<String>,
    /// Hint text next to the label (e.g., "editable")
    #[props(default)]
    pub hint: Option<String>,
    /// Whether the input is disabled
    #[props(default = false)]
    pub disabled: bool,
    /// Optional ID for label association
    #[props(default)]
    pub id: Option<String>,
    /// Optional additional CSS classes
    #[props(default)]
    pub class: Option<String>,
}

/// Text input field
///
/// # Example
///
/// ```rust,ignore
/// rsx! {
///     Input {
///         value: record.price_tag().to_string(),
///         oninput: move |price| on_price.call(price),
///         label: "precio".to_string(),
///     }
/// }
/// ```
#[component]
pub fn Input(props: InputProps) -> Element {
    // Generated once per mounted field so the label stays attached across edits
    let generated = use_hook(generated_id);
    let id = props.id.clone().unwrap_or(generated);
    let extra_class = props.class.as_deref().unwrap_or("");
    let input_class = if extra_class.is_empty() {
        "input-field".to_string()
    } else {
        format!("input-field {}", extra_class)
    };

    rsx! {
        div { class: "form-field",
            if let Some(label) = &props.label {
                label {
                    class: "input-label",
                    r#for: "{id}",
                    "{label}"
                    if let Some(hint) = &props.hint {
                        span { class: "input-hint", " ({hint})" }
                    }
                }
            }
            input {
                id: "{id}",
                class: "{input_class}",
                r#type: "text",
                value: "{props.value}",
                placeholder: props.placeholder.as_deref().unwrap_or(""),
                disabled: props.disabled,
                oninput: move |e| props.oninput.call(e.value()),
            }
        }
    }
}

/// Fresh element id for a field without an explicit one
fn generated_id() -> String {
    format!("input-{}", next_id())
}

/// Process-unique suffix for generated element ids
fn next_id() -> u32 {
    static NEXT: AtomicU32 = AtomicU32::new(1);
    NEXT.fetch_add(1, Ordering::Relaxed)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn next_id_is_unique() {
        let id1 = next_id();
        let id2 = next_id();
        assert_ne!(id1, id2);
    }

    #[test]
    fn generated_field_ids_differ() {
        let a = generated_id();
        let b = generated_id();
        assert!(a.starts_with("input-"));
        assert_ne!(a, b);
    }
}
