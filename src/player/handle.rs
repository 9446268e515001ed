use std::sync::mpsc::{self, Sender};
use std::sync::{Arc, Mutex};
use std::thread::JoinHandle;

use crate::config::PlaybackSettings;

use super::thread::spawn_player_thread;
use super::types::{PlayerCmd, TransportHandle, TransportInfo};

/// Handle to the player thread: a command channel in, a shared transport
/// snapshot out.
pub struct Player {
    tx: Sender<PlayerCmd>,
    transport: TransportHandle,
    join: Mutex<Option<JoinHandle<()>>>,
}

impl Player {
    pub fn spawn(playback: PlaybackSettings) -> Self {
        let (tx, rx) = mpsc::channel::<PlayerCmd>();
        let transport: TransportHandle = Arc::new(Mutex::new(TransportInfo::default()));

        let join = spawn_player_thread(rx, transport.clone(), playback);

        Self {
            tx,
            transport,
            join: Mutex::new(Some(join)),
        }
    }

    pub fn transport_handle(&self) -> TransportHandle {
        self.transport.clone()
    }

    pub fn send(&self, cmd: PlayerCmd) -> Result<(), mpsc::SendError<PlayerCmd>> {
        self.tx.send(cmd)
    }

    /// Ask the thread to stop and wait for it.
    pub fn quit(&self) {
        let _ = self.send(PlayerCmd::Quit);
        if let Ok(mut join) = self.join.lock() {
            if let Some(handle) = join.take() {
                let _ = handle.join();
            }
        }
    }
}
