//! Startup actions resolved from restored state.

use crate::player::PlayerCmd;
use crate::session::SessionStore;

/// Rebind the last session's track at startup: the player bar shows it
/// again and playback resumes. Yields nothing when the session is empty
/// or the restored track has no audio URL.
pub(super) fn resume_command(session: &SessionStore) -> Option<PlayerCmd> {
    let track = session.current_track()?;
    if !track.is_playable() {
        return None;
    }
    Some(PlayerCmd::Play(track.clone()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::storage::Storage;
    use crate::track::Track;
    use tempfile::tempdir;

    fn t(id: &str) -> Track {
        Track {
            id: id.into(),
            image: "/fallback.jpg".into(),
            title: format!("Song {id}"),
            subtitle: "Artist".into(),
            audio: Some(format!("https://cdn.example/{id}.mp3")),
        }
    }

    #[test]
    fn restored_track_is_resumed() {
        let dir = tempdir().unwrap();
        {
            let mut session = SessionStore::load(Storage::open_at(dir.path()));
            session.play_track(t("1"));
        }

        let restored = SessionStore::load(Storage::open_at(dir.path()));
        match resume_command(&restored) {
            Some(PlayerCmd::Play(track)) => assert_eq!(track.id, "1"),
            other => panic!("expected a play command, got {other:?}"),
        }
    }

    #[test]
    fn empty_session_resumes_nothing() {
        let dir = tempdir().unwrap();
        let session = SessionStore::load(Storage::open_at(dir.path()));
        assert!(resume_command(&session).is_none());
    }

    #[test]
    fn unplayable_restored_track_resumes_nothing() {
        let dir = tempdir().unwrap();
        let mut session = SessionStore::load(Storage::open_at(dir.path()));
        let mut track = t("1");
        track.audio = None;
        session.play_track(track);

        assert!(resume_command(&session).is_none());
    }
}
