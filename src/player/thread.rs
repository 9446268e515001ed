use std::sync::mpsc::{Receiver, RecvTimeoutError};
use std::thread;
use std::thread::JoinHandle;
use std::time::Duration;

use crate::config::PlaybackSettings;
use crate::track::Track;

use super::controller::PlayerController;
use super::output::{AudioOutput, StreamOutput};
use super::types::{PlayerCmd, TransportHandle};

pub(super) fn spawn_player_thread(
    rx: Receiver<PlayerCmd>,
    transport: TransportHandle,
    playback: PlaybackSettings,
) -> JoinHandle<()> {
    thread::spawn(move || {
        let output = match StreamOutput::open_default() {
            Ok(output) => output,
            Err(e) => {
                // No audio device: the transport stays Idle forever and
                // commands sent to this thread error out harmlessly.
                log::error!("player: no audio output available: {e}");
                return;
            }
        };

        let mut controller = PlayerController::new(output);
        controller.set_volume(playback.volume);
        if playback.looping {
            controller.toggle_loop();
        }

        let mut playlist: Vec<Track> = Vec::new();
        publish(&transport, &controller);

        loop {
            match rx.recv_timeout(Duration::from_millis(200)) {
                Ok(cmd) => {
                    match cmd {
                        PlayerCmd::Play(track) => controller.play_track(track),
                        PlayerCmd::TogglePause => controller.toggle_play(),
                        PlayerCmd::Next => controller.next(&playlist),
                        PlayerCmd::Prev => controller.prev(&playlist),
                        PlayerCmd::Seek(pos) => controller.seek(pos),
                        PlayerCmd::SetVolume(volume) => controller.set_volume(volume),
                        PlayerCmd::ToggleLoop => controller.toggle_loop(),
                        PlayerCmd::SetPlaylist(tracks) => playlist = tracks,
                        PlayerCmd::Quit => break,
                    }
                    publish(&transport, &controller);
                }
                Err(RecvTimeoutError::Timeout) => {
                    // Periodic auto-advance check and progress refresh.
                    controller.tick(&playlist);
                    publish(&transport, &controller);
                }
                Err(RecvTimeoutError::Disconnected) => break,
            }
        }
    })
}

fn publish<O: AudioOutput>(transport: &TransportHandle, controller: &PlayerController<O>) {
    if let Ok(mut info) = transport.lock() {
        info.state = controller.state();
        info.track = controller.track().cloned();
        info.elapsed = controller.position();
        info.duration = controller.duration();
        info.volume = controller.volume();
        info.looping = controller.looping();
    }
}
