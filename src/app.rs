use dioxus::prelude::*;
use linkpage_core::{PlaybackCommand, Site, View};

use crate::components::Background;
use crate::components::MusicToggle;
use crate::launch_options;
use crate::pages::{Home, ServiceDetail};
use crate::playback::{dispatch_playback, WebviewAudio, AUDIO_ELEMENT_ID};
use crate::theme::GLOBAL_STYLES;

/// Root application component.
///
/// Builds the `Site` from the launch options and hands it to
/// [`SiteRoot`]; a seed that fails to build shows an error instead.
#[component]
pub fn App() -> Element {
    let site = use_hook(|| {
        let options = launch_options().ok_or_else(|| "Launch options not set".to_string())?;
        let site = Site::new(options.config).map_err(|e| e.to_string())?;
        Ok::<_, String>((Signal::new(site), options.autoplay))
    });

    rsx! {
        style { {GLOBAL_STYLES} }
        match site {
            Ok((site, autoplay)) => rsx! {
                SiteRoot { site, autoplay }
            },
            Err(e) => {
                tracing::error!("Failed to build site: {}", e);
                rsx! {
                    p { class: "startup-error", "{e}" }
                }
            }
        }
    }
}

/// The mount-time play request, unless started with `--muted`
fn autoplay_command(site: &mut Site, enabled: bool) -> Option<PlaybackCommand> {
    if !enabled {
        tracing::debug!("Autoplay disabled");
        return None;
    }
    site.autoplay()
}

/// Holds the running site: provides context, owns the audio element and
/// renders exactly one of the two views.
#[component]
fn SiteRoot(mut site: Signal<Site>, autoplay: bool) -> Element {
    let audio = WebviewAudio::default();

    use_context_provider(|| site);
    use_context_provider(|| audio);

    // One automatic play attempt after the audio element is mounted
    use_effect(move || {
        let command = autoplay_command(&mut site.write(), autoplay);
        dispatch_playback(site, audio, command);
    });

    use_drop(move || {
        site.write().end_session();
    });

    let state = site.read();
    let background = state.image_src(&state.images().background);
    let music_url = state.music_url().to_string();
    let view = state.view().clone();
    drop(state);

    rsx! {
        div { class: "site",
            Background { src: background }

            audio {
                id: AUDIO_ELEMENT_ID,
                src: "{music_url}",
                r#loop: true,
                preload: "auto",
            }

            MusicToggle {}

            main { class: "site-main",
                div { class: "site-column",
                    match view {
                        View::Home => rsx! {
                            Home {}
                        },
                        View::Detail(service_id) => rsx! {
                            ServiceDetail {
                                key: "{service_id}",
                                service_id,
                            }
                        },
                    }
                }
            }
        }
    }
}
