//! The audio output capability and its rodio-backed implementation.

use std::io::Cursor;
use std::time::Duration;

use rodio::{Decoder, OutputStream, OutputStreamBuilder, Sink, Source};
use thiserror::Error;

/// Failure to bind or start a source. None of these are fatal: the
/// controller logs them and the transport stays inert.
#[derive(Debug, Error)]
pub enum OutputError {
    #[error("fetching audio stream: {0}")]
    Fetch(#[from] reqwest::Error),
    #[error("decoding audio stream: {0}")]
    Decode(#[from] rodio::decoder::DecoderError),
    #[error("no source loaded")]
    NoSource,
}

/// Capability interface over a single audio output.
///
/// Exactly one owner drives an implementation at a time; the player thread
/// owns the real one and the controller tests own a fake.
pub trait AudioOutput {
    /// Bind a new source URL to the output, replacing any current source.
    /// The new source starts paused. The old source is silenced before the
    /// new one is fetched, even when the bind fails.
    fn load(&mut self, url: &str) -> Result<(), OutputError>;
    /// Request playback of the bound source.
    fn play(&mut self) -> Result<(), OutputError>;
    fn pause(&mut self);
    /// Move the playback position. Outputs that cannot seek the current
    /// source ignore the request.
    fn seek(&mut self, pos: Duration);
    fn set_volume(&mut self, volume: f32);
    fn set_loop(&mut self, looping: bool);
    fn position(&self) -> Duration;
    /// Total length of the bound source, when the codec exposes it.
    fn duration(&self) -> Option<Duration>;
    /// True when the bound source finished on its own. With looping
    /// enabled the source restarts instead and this stays false.
    fn ended(&mut self) -> bool;
}

/// Real output: a rodio sink fed by a blocking HTTP fetch of the stream.
///
/// The fetched bytes are kept so a looping track can restart without
/// another network round trip.
pub struct StreamOutput {
    stream: OutputStream,
    client: reqwest::blocking::Client,
    sink: Option<Sink>,
    bytes: Option<Vec<u8>>,
    duration: Option<Duration>,
    volume: f32,
    looping: bool,
}

impl StreamOutput {
    pub fn open_default() -> anyhow::Result<Self> {
        let mut stream = OutputStreamBuilder::open_default_stream()?;
        // rodio logs to stderr when OutputStream is dropped. That's useful
        // in debugging, but noisy for a TUI app.
        stream.log_on_drop(false);

        Ok(Self {
            stream,
            client: reqwest::blocking::Client::new(),
            sink: None,
            bytes: None,
            duration: None,
            volume: 1.0,
            looping: false,
        })
    }

    fn make_sink(&self, bytes: Vec<u8>) -> Result<(Sink, Option<Duration>), OutputError> {
        let source = Decoder::new(Cursor::new(bytes))?;
        let duration = source.total_duration();
        let sink = Sink::connect_new(self.stream.mixer());
        sink.set_volume(self.volume);
        sink.append(source);
        sink.pause();
        Ok((sink, duration))
    }
}

impl AudioOutput for StreamOutput {
    fn load(&mut self, url: &str) -> Result<(), OutputError> {
        // Silence the old source first; a failed fetch must not leave the
        // previous track audible under a transport bound to the new one.
        if let Some(old) = self.sink.take() {
            old.stop();
        }
        self.bytes = None;
        self.duration = None;

        let bytes = self
            .client
            .get(url)
            .send()?
            .error_for_status()?
            .bytes()?
            .to_vec();

        let (sink, duration) = self.make_sink(bytes.clone())?;
        self.bytes = Some(bytes);
        self.duration = duration;
        self.sink = Some(sink);
        Ok(())
    }

    fn play(&mut self) -> Result<(), OutputError> {
        match &self.sink {
            Some(sink) => {
                sink.play();
                Ok(())
            }
            None => Err(OutputError::NoSource),
        }
    }

    fn pause(&mut self) {
        if let Some(sink) = &self.sink {
            sink.pause();
        }
    }

    fn seek(&mut self, pos: Duration) {
        if let Some(sink) = &self.sink {
            if let Err(e) = sink.try_seek(pos) {
                log::debug!("output: seek to {pos:?} failed: {e}");
            }
        }
    }

    fn set_volume(&mut self, volume: f32) {
        self.volume = volume;
        if let Some(sink) = &self.sink {
            sink.set_volume(volume);
        }
    }

    fn set_loop(&mut self, looping: bool) {
        self.looping = looping;
    }

    fn position(&self) -> Duration {
        self.sink.as_ref().map(Sink::get_pos).unwrap_or_default()
    }

    fn duration(&self) -> Option<Duration> {
        self.duration
    }

    fn ended(&mut self) -> bool {
        let Some(sink) = &self.sink else {
            return false;
        };
        if !sink.empty() {
            return false;
        }

        if self.looping {
            // Restart from the cached bytes instead of reporting the end.
            if let Some(bytes) = self.bytes.clone() {
                match Decoder::new(Cursor::new(bytes)) {
                    Ok(source) => {
                        sink.append(source);
                        return false;
                    }
                    Err(e) => log::debug!("output: loop restart failed: {e}"),
                }
            }
        }

        true
    }
}
