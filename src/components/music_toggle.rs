//! Floating background-music button

use dioxus::prelude::*;
use linkpage_ui::IconButton;

use crate::context::{use_audio, use_site};
use crate::playback::dispatch_playback;

/// Round button pinned to the bottom-right corner.
///
/// Shows a pause glyph while playing and a music glyph while paused.
#[component]
pub fn MusicToggle() -> Element {
    let mut site = use_site();
    let audio = use_audio();

    let state = site.read();
    let playing = state.playback().is_playing();
    let pending = state.playback_controller().is_pending();
    drop(state);

    let label = if playing {
        "Pausar Música"
    } else {
        "Reproducir Música"
    };
    let class = if pending {
        "music-toggle music-toggle--pending"
    } else {
        "music-toggle"
    };

    rsx! {
        IconButton {
            class: class.to_string(),
            aria_label: label.to_string(),
            onclick: move |_| {
                let command = site.write().toggle_playback();
                dispatch_playback(site, audio, command);
            },
            if playing { "❚❚" } else { "♪" }
        }
    }
}
