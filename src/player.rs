//! Playback subsystem.
//!
//! The transport state machine lives in `controller`, behind the
//! `AudioOutput` capability in `output`, so it can be exercised headless.
//! `thread` runs the real output on a dedicated thread; `handle` is what
//! the rest of the application talks to.

mod controller;
mod handle;
mod output;
mod thread;
mod types;

pub use controller::PlayerController;
pub use handle::Player;
pub use output::{AudioOutput, OutputError, StreamOutput};
pub use types::{DEFAULT_VOLUME, PlayerCmd, TransportHandle, TransportInfo, TransportState};
