//! Background music playback control
//!
//! A single shared audio output is driven by two commands, play and
//! pause. Play is asynchronous and may be rejected by the platform
//! (autoplay policy, resource not ready), so the controller only
//! reports `Playing` once a play request has completed successfully.
//!
//! # Command serialization
//!
//! At most one play request is in flight. Toggling while it is pending
//! does not issue a second command; it flips a single queued
//! "pause after play" flag instead. When the request completes the flag
//! is applied (successful play) or dropped (failed play).
//!
//! ```text
//!   Paused ──toggle──▶ Paused+in-flight ──Ok──▶ Playing
//!     ▲                      │ Err                 │
//!     └──────────────────────┘                     │
//!     └──────────────────toggle (Pause)────────────┘
//! ```

use thiserror::Error;
use tracing::{debug, info};

/// Whether the shared background audio is playing
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PlaybackState {
    Playing,
    #[default]
    Paused,
}

impl PlaybackState {
    pub fn is_playing(&self) -> bool {
        matches!(self, PlaybackState::Playing)
    }
}

/// Command to issue to the audio output
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PlaybackCommand {
    Play,
    Pause,
}

/// Playback errors
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum PlaybackError {
    /// The platform refused to start playback
    #[error("Playback rejected: {0}")]
    Rejected(String),

    /// The audio element is missing or not ready
    #[error("Audio output unavailable")]
    Unavailable,
}

/// The one audio resource the site plays through.
///
/// Implemented by the desktop shell on top of the webview's audio
/// element, and by scripted fakes in tests.
#[allow(async_fn_in_trait)]
pub trait AudioOutput {
    /// Request playback; resolves once the platform accepts or rejects it
    async fn play(&self) -> Result<(), PlaybackError>;

    /// Pause playback. Never fails.
    fn pause(&self);
}

/// Execute one command against `audio`.
///
/// Returns the play outcome to feed back into
/// [`PlaybackController::complete_play`], or `None` for a pause.
///
/// The controller is not borrowed here, so a caller can release it while
/// the play is pending and a second toggle can still queue a pause.
pub async fn perform<A: AudioOutput>(
    audio: &A,
    command: PlaybackCommand,
) -> Option<Result<(), PlaybackError>> {
    match command {
        PlaybackCommand::Play => Some(audio.play().await),
        PlaybackCommand::Pause => {
            audio.pause();
            None
        }
    }
}

/// Two-state playback machine with at most one pending play request.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PlaybackController {
    state: PlaybackState,
    play_in_flight: bool,
    pause_queued: bool,
}

impl PlaybackController {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn state(&self) -> PlaybackState {
        self.state
    }

    pub fn is_playing(&self) -> bool {
        self.state.is_playing()
    }

    /// True while a play request awaits completion
    pub fn is_pending(&self) -> bool {
        self.play_in_flight
    }

    /// True when a pause will be issued as soon as the pending play succeeds
    pub fn is_pause_queued(&self) -> bool {
        self.pause_queued
    }

    /// User pressed the music button.
    pub fn toggle(&mut self) -> Option<PlaybackCommand> {
        if self.play_in_flight {
            self.pause_queued = !self.pause_queued;
            debug!(pause_queued = self.pause_queued, "Toggle while play pending");
            return None;
        }

        match self.state {
            PlaybackState::Playing => {
                self.state = PlaybackState::Paused;
                debug!("Pausing playback");
                Some(PlaybackCommand::Pause)
            }
            PlaybackState::Paused => {
                self.play_in_flight = true;
                debug!("Requesting playback");
                Some(PlaybackCommand::Play)
            }
        }
    }

    /// Single automatic attempt made when the site is mounted.
    ///
    /// Does nothing if a request is already pending or audio is playing.
    pub fn autoplay(&mut self) -> Option<PlaybackCommand> {
        if self.play_in_flight || self.state.is_playing() {
            return None;
        }

        self.play_in_flight = true;
        debug!("Attempting autoplay");
        Some(PlaybackCommand::Play)
    }

    /// Record the outcome of the pending play request.
    ///
    /// A failure leaves the state `Paused` and is not retried. Returns a
    /// follow-up command when a pause was queued behind a successful play.
    pub fn complete_play(&mut self, result: Result<(), PlaybackError>) -> Option<PlaybackCommand> {
        if !self.play_in_flight {
            debug!("Ignoring play completion with no request pending");
            return None;
        }

        self.play_in_flight = false;
        let pause_queued = std::mem::take(&mut self.pause_queued);

        match result {
            Ok(()) if pause_queued => {
                debug!("Play succeeded, applying queued pause");
                self.state = PlaybackState::Paused;
                Some(PlaybackCommand::Pause)
            }
            Ok(()) => {
                debug!("Playback started");
                self.state = PlaybackState::Playing;
                None
            }
            Err(e) => {
                info!("Audio play failed: {}", e);
                None
            }
        }
    }
}
