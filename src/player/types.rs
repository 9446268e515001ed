//! Player-facing small types and shared handles.

use std::sync::{Arc, Mutex};
use std::time::Duration;

use crate::track::Track;

/// Volume used before any configuration or command changes it.
pub const DEFAULT_VOLUME: f32 = 0.5;

/// Where the transport currently is in its lifecycle.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Default)]
pub enum TransportState {
    /// No track has ever been bound to the output.
    #[default]
    Idle,
    /// A source was bound and playback requested, but the output has not
    /// started it (or refused to). The transport sits here inert until the
    /// next command.
    Loading,
    Playing,
    Paused,
}

/// Commands accepted by the player thread.
#[derive(Debug)]
pub enum PlayerCmd {
    /// Bind `track` to the output and start playing it.
    Play(Track),
    /// Toggle pause/resume; no-op when nothing is loaded.
    TogglePause,
    /// Advance to a uniformly random track from the playlist.
    Next,
    /// Restart the current track, or advance when still near its start.
    Prev,
    /// Seek to an absolute position in the current track.
    Seek(Duration),
    /// Set the output volume, clamped to `[0, 1]`.
    SetVolume(f32),
    /// Toggle looping of the loaded track.
    ToggleLoop,
    /// Replace the playlist used for queue advance.
    SetPlaylist(Vec<Track>),
    /// Shut the player thread down.
    Quit,
}

/// Runtime transport information shared with the UI.
#[derive(Debug, Clone)]
pub struct TransportInfo {
    pub state: TransportState,
    /// Track bound to the output. May lag the session's current track
    /// while a switch is in flight, and diverges from it after automatic
    /// queue advance.
    pub track: Option<Track>,
    pub elapsed: Duration,
    pub duration: Option<Duration>,
    pub volume: f32,
    pub looping: bool,
}

impl Default for TransportInfo {
    fn default() -> Self {
        Self {
            state: TransportState::Idle,
            track: None,
            elapsed: Duration::ZERO,
            duration: None,
            volume: DEFAULT_VOLUME,
            looping: false,
        }
    }
}

pub type TransportHandle = Arc<Mutex<TransportInfo>>;
