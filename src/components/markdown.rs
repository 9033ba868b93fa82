//! Markdown Renderer
//!
//! Read-only display of a service description.

use dioxus::prelude::*;
use pulldown_cmark::{html, Options, Parser};

/// Convert markdown to an HTML fragment
pub fn markdown_to_html(markdown: &str) -> String {
    let mut options = Options::empty();
    options.insert(Options::ENABLE_STRIKETHROUGH);
    options.insert(Options::ENABLE_TABLES);

    let parser = Parser::new_ext(markdown, options);
    let mut html_output = String::new();
    html::push_html(&mut html_output, parser);
    html_output
}

/// Read-only markdown renderer
///
/// # Examples
///
/// ```rust
/// rsx! {
///     MarkdownRenderer {
///         content: "Limpieza **profunda**".to_string(),
///     }
/// }
/// ```
#[component]
pub fn MarkdownRenderer(
    /// Markdown content to render
    content: ReadOnlySignal<String>,
) -> Element {
    let html_content = use_memo(move || markdown_to_html(&content()));

    if content.read().trim().is_empty() {
        return VNode::empty();
    }

    rsx! {
        div {
            class: "service-markdown",
            dangerous_inner_html: "{html_content()}",
        }
    }
}
