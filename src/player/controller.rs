//! The transport state machine over an [`AudioOutput`].

use std::time::Duration;

use rand::RngExt;

use crate::track::Track;

use super::output::AudioOutput;
use super::types::{DEFAULT_VOLUME, TransportState};

/// Positions past this mark make `prev` restart the current track instead
/// of advancing.
const PREV_RESTART_THRESHOLD: Duration = Duration::from_secs(3);

pub struct PlayerController<O: AudioOutput> {
    output: O,
    state: TransportState,
    track: Option<Track>,
    volume: f32,
    looping: bool,
}

impl<O: AudioOutput> PlayerController<O> {
    pub fn new(output: O) -> Self {
        Self {
            output,
            state: TransportState::Idle,
            track: None,
            volume: DEFAULT_VOLUME,
            looping: false,
        }
    }

    pub fn state(&self) -> TransportState {
        self.state
    }

    /// The track currently bound to the output.
    pub fn track(&self) -> Option<&Track> {
        self.track.as_ref()
    }

    pub fn volume(&self) -> f32 {
        self.volume
    }

    pub fn looping(&self) -> bool {
        self.looping
    }

    pub fn position(&self) -> Duration {
        self.output.position()
    }

    pub fn duration(&self) -> Option<Duration> {
        self.output.duration()
    }

    /// Bind `track` to the output and request playback.
    ///
    /// A track without an audio URL is ignored; the UI keeps those out of
    /// the play path, this is a backstop. A source that cannot be fetched
    /// or refuses to start leaves the transport in `Loading`, inert, with
    /// the failure logged and swallowed.
    pub fn play_track(&mut self, track: Track) {
        let Some(url) = track.audio.clone() else {
            log::debug!("player: ignoring unplayable track {}", track.id);
            return;
        };

        self.state = TransportState::Loading;
        self.track = Some(track);
        self.output.set_loop(self.looping);
        self.output.set_volume(self.volume);

        let started = self.output.load(&url).and_then(|()| self.output.play());
        match started {
            Ok(()) => self.state = TransportState::Playing,
            Err(e) => {
                let id = self.track.as_ref().map(|t| t.id.as_str()).unwrap_or("?");
                log::warn!("player: could not start track {id}: {e}");
            }
        }
    }

    /// Flip play/pause. No-op when no track is loaded.
    pub fn toggle_play(&mut self) {
        if self.track.is_none() {
            return;
        }
        match self.state {
            TransportState::Playing => {
                self.output.pause();
                self.state = TransportState::Paused;
            }
            TransportState::Paused | TransportState::Loading => {
                // Resuming is optimistic: the flag flips even if the output
                // refuses to start, mirroring the toggle contract.
                if let Err(e) = self.output.play() {
                    log::debug!("player: resume failed: {e}");
                }
                self.state = TransportState::Playing;
            }
            TransportState::Idle => {}
        }
    }

    /// Queue advance: a uniformly random pick from `playlist`. Repeats are
    /// possible, including an immediate repeat of the loaded track. No-op
    /// on an empty playlist.
    pub fn next(&mut self, playlist: &[Track]) {
        if playlist.is_empty() {
            return;
        }
        let pick = rand::rng().random_range(0..playlist.len());
        self.play_track(playlist[pick].clone());
    }

    /// Restart the current track when past [`PREV_RESTART_THRESHOLD`];
    /// otherwise advance. There is no previous-track memory.
    pub fn prev(&mut self, playlist: &[Track]) {
        if self.output.position() > PREV_RESTART_THRESHOLD {
            self.output.seek(Duration::ZERO);
        } else {
            self.next(playlist);
        }
    }

    /// Seek to an absolute position, clamped to the known duration.
    pub fn seek(&mut self, pos: Duration) {
        let pos = match self.output.duration() {
            Some(total) => pos.min(total),
            None => pos,
        };
        self.output.seek(pos);
    }

    pub fn set_volume(&mut self, volume: f32) {
        let volume = volume.clamp(0.0, 1.0);
        self.volume = volume;
        self.output.set_volume(volume);
    }

    /// Flip looping; applied to the output immediately and carried over to
    /// every subsequently loaded track.
    pub fn toggle_loop(&mut self) {
        self.looping = !self.looping;
        self.output.set_loop(self.looping);
    }

    /// Periodic check run by the player thread: a natural end of track
    /// advances the queue exactly once. A looping output restarts the
    /// source itself and never reports the end.
    pub fn tick(&mut self, playlist: &[Track]) {
        if self.state == TransportState::Playing && self.output.ended() {
            self.next(playlist);
        }
    }
}
