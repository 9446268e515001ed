use crate::storage::{CURRENT_TRACK_KEY, RECENT_SONGS_KEY, Storage};
use crate::track::Track;

/// Maximum number of entries kept in the recent-plays history.
pub const RECENT_CAP: usize = 10;

/// Durable session state: what is playing now and what played recently.
///
/// Mutated only through [`SessionStore::play_track`]; every mutation is
/// written through to storage before the call returns. Storage failures
/// are logged and swallowed, so callers never see an error.
pub struct SessionStore {
    storage: Storage,
    current_track: Option<Track>,
    recent_songs: Vec<Track>,
}

impl SessionStore {
    /// Restore session state from `storage`. Missing or corrupt entries
    /// fall back to an empty session.
    pub fn load(storage: Storage) -> Self {
        let current_track = storage.read(CURRENT_TRACK_KEY);
        let recent_songs = storage.read(RECENT_SONGS_KEY).unwrap_or_default();
        Self {
            storage,
            current_track,
            recent_songs,
        }
    }

    pub fn current_track(&self) -> Option<&Track> {
        self.current_track.as_ref()
    }

    /// Recent plays, most recent first.
    pub fn recent_songs(&self) -> &[Track] {
        &self.recent_songs
    }

    /// Make `track` current and move it to the front of the history.
    ///
    /// The history is deduplicated by id and truncated to [`RECENT_CAP`]
    /// entries. Malformed tracks are stored as-is; this never fails.
    pub fn play_track(&mut self, track: Track) {
        self.recent_songs.retain(|t| t.id != track.id);
        self.recent_songs.insert(0, track.clone());
        self.recent_songs.truncate(RECENT_CAP);
        self.current_track = Some(track);
        self.persist();
    }

    fn persist(&self) {
        // The current track is only written when set; the history is
        // written even when empty.
        if let Some(track) = &self.current_track {
            if let Err(e) = self.storage.write(CURRENT_TRACK_KEY, track) {
                log::warn!("session: failed to save current track: {e}");
            }
        }
        if let Err(e) = self.storage.write(RECENT_SONGS_KEY, &self.recent_songs) {
            log::warn!("session: failed to save recent songs: {e}");
        }
    }
}
