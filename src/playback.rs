//! Background music bridge.
//!
//! The music plays through an `<audio>` element in the webview. Commands
//! reach it through `document::eval`; the promise returned by
//! `HTMLMediaElement.play()` is awaited in JS and reported back as a
//! string so autoplay-policy rejections surface as `PlaybackError`s.

use dioxus::prelude::*;
use linkpage_core::{perform, AudioOutput, PlaybackCommand, PlaybackError, Site};

/// DOM id of the site's single `<audio>` element
pub const AUDIO_ELEMENT_ID: &str = "bg-music";

/// Handle to the webview audio element
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct WebviewAudio {
    element_id: &'static str,
}

impl WebviewAudio {
    pub fn new(element_id: &'static str) -> Self {
        Self { element_id }
    }

    pub fn element_id(&self) -> &'static str {
        self.element_id
    }
}

impl Default for WebviewAudio {
    fn default() -> Self {
        Self::new(AUDIO_ELEMENT_ID)
    }
}

/// Map the string reported by the play script to a result
fn parse_play_reply(reply: &serde_json::Value) -> Result<(), PlaybackError> {
    match reply.as_str() {
        Some("ok") => Ok(()),
        Some("missing") => Err(PlaybackError::Unavailable),
        Some(other) => Err(PlaybackError::Rejected(
            other.trim_start_matches("rejected:").to_string(),
        )),
        None => Err(PlaybackError::Rejected(reply.to_string())),
    }
}

impl AudioOutput for WebviewAudio {
    async fn play(&self) -> Result<(), PlaybackError> {
        let script = format!(
            r#"
            const el = document.getElementById("{}");
            if (!el) {{ return "missing"; }}
            try {{
                await el.play();
                return "ok";
            }} catch (e) {{
                return "rejected:" + (e && e.name ? e.name : String(e));
            }}
            "#,
            self.element_id
        );

        match document::eval(&script).await {
            Ok(reply) => parse_play_reply(&reply),
            Err(e) => Err(PlaybackError::Rejected(e.to_string())),
        }
    }

    fn pause(&self) {
        let script = format!(
            r#"const el = document.getElementById("{}"); if (el) {{ el.pause(); }}"#,
            self.element_id
        );
        let _ = document::eval(&script);
    }
}

/// Issue `command` and feed play outcomes back into the site.
///
/// The signal is only borrowed between awaits, so the UI stays
/// responsive (and can queue a pause) while `play()` is pending.
pub fn dispatch_playback(mut site: Signal<Site>, audio: WebviewAudio, command: Option<PlaybackCommand>) {
    let Some(command) = command else {
        return;
    };

    spawn(async move {
        let mut next = Some(command);
        while let Some(command) = next {
            next = match perform(&audio, command).await {
                Some(result) => site.write().complete_play(result),
                None => None,
            };
        }
    });
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn play_reply_ok() {
        assert_eq!(parse_play_reply(&json!("ok")), Ok(()));
    }

    #[test]
    fn play_reply_missing_element() {
        assert_eq!(
            parse_play_reply(&json!("missing")),
            Err(PlaybackError::Unavailable)
        );
    }

    #[test]
    fn play_reply_rejected() {
        assert_eq!(
            parse_play_reply(&json!("rejected:NotAllowedError")),
            Err(PlaybackError::Rejected("NotAllowedError".to_string()))
        );
    }

    #[test]
    fn play_reply_unexpected_shape() {
        assert!(matches!(
            parse_play_reply(&json!(null)),
            Err(PlaybackError::Rejected(_))
        ));
    }

    #[test]
    fn default_targets_site_audio_element() {
        assert_eq!(WebviewAudio::default().element_id(), AUDIO_ELEMENT_ID);
    }
}
