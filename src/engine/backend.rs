use std::fs::File;
use std::io::BufReader;
use std::path::{Path, PathBuf};
use std::time::{Duration, Instant};

use lofty::file::AudioFile;
use rodio::{Decoder, OutputStream, OutputStreamBuilder, Sink, Source};

use super::AudioEngine;
use crate::error::EngineError;

/// Rodio-backed engine: one paused `Sink` per open stream, connected to the
/// default output device.
pub struct RodioEngine {
    stream: OutputStream,
}

/// An open stream and its progress bookkeeping.
///
/// A plain sink has no position query, so elapsed time is the accumulated
/// play time plus the wall clock since the last resume. Seeking rebuilds the
/// decoder at the target offset; `skip_duration` is the seeking primitive.
pub struct RodioStream {
    path: PathBuf,
    sink: Sink,
    length: Duration,
    started_at: Option<Instant>,
    accumulated: Duration,
}

impl RodioEngine {
    /// Open the default output device. Panics when none is available; the
    /// device is acquired once at process start and held for the lifetime
    /// of the engine.
    pub fn new() -> Self {
        let mut stream =
            OutputStreamBuilder::open_default_stream().expect("ERR: No audio output device");
        // rodio logs to stderr when OutputStream is dropped. That's useful in
        // debugging, but noisy for a desktop app.
        stream.log_on_drop(false);
        Self { stream }
    }

    /// Create a paused sink for `path` that starts playback at `start_at`.
    fn open_sink(&self, path: &Path, start_at: Duration) -> Result<Sink, EngineError> {
        let file = File::open(path).map_err(|source| EngineError::Open {
            path: path.to_path_buf(),
            source,
        })?;

        let source = Decoder::new(BufReader::new(file))
            .map_err(|source| EngineError::Decode {
                path: path.to_path_buf(),
                source,
            })?
            // `skip_duration` is our seeking primitive; even Duration::ZERO is fine.
            .skip_duration(start_at);

        let sink = Sink::connect_new(self.stream.mixer());
        sink.append(source);
        sink.pause();
        Ok(sink)
    }
}

impl Default for RodioEngine {
    fn default() -> Self {
        Self::new()
    }
}

impl AudioEngine for RodioEngine {
    type Stream = RodioStream;

    fn open(&mut self, path: &Path) -> Result<RodioStream, EngineError> {
        let sink = self.open_sink(path, Duration::ZERO)?;

        // The decoder does not know the total length up front; the tag
        // properties do.
        let length = lofty::read_from_path(path)
            .map(|tagged| tagged.properties().duration())
            .unwrap_or(Duration::ZERO);

        Ok(RodioStream {
            path: path.to_path_buf(),
            sink,
            length,
            started_at: None,
            accumulated: Duration::ZERO,
        })
    }

    fn close(&mut self, stream: RodioStream) {
        // Sinks detach on drop and keep playing; `Drop` below stops them.
        drop(stream);
    }

    fn play(&mut self, stream: &mut RodioStream) {
        stream.sink.play();
        stream.started_at = Some(Instant::now());
    }

    fn pause(&mut self, stream: &mut RodioStream) {
        if let Some(started) = stream.started_at.take() {
            stream.accumulated += started.elapsed();
        }
        stream.sink.pause();
    }

    fn resume(&mut self, stream: &mut RodioStream) {
        stream.sink.play();
        stream.started_at = Some(Instant::now());
    }

    fn stop(&mut self, stream: &mut RodioStream) {
        stream.sink.stop();
        stream.started_at = None;
        stream.accumulated = Duration::ZERO;

        // A stopped sink has drained its source; rebuild it paused at zero
        // so a later `play` restarts from the beginning.
        match self.open_sink(&stream.path, Duration::ZERO) {
            Ok(sink) => stream.sink = sink,
            Err(err) => log::warn!("could not rewind {:?}: {err}", stream.path),
        }
    }

    fn seek(&mut self, stream: &mut RodioStream, seconds: f32) {
        let length = stream.length.as_secs_f32();
        let target = Duration::from_secs_f32(seconds.clamp(0.0, length.max(0.0)));
        let was_playing = self.is_playing(stream);

        match self.open_sink(&stream.path, target) {
            Ok(sink) => {
                stream.sink.stop();
                stream.sink = sink;
                stream.accumulated = target;
                if was_playing {
                    stream.sink.play();
                    stream.started_at = Some(Instant::now());
                } else {
                    stream.started_at = None;
                }
            }
            Err(err) => log::warn!("seek failed on {:?}: {err}", stream.path),
        }
    }

    fn is_playing(&self, stream: &RodioStream) -> bool {
        !stream.sink.is_paused() && !stream.sink.empty()
    }

    fn is_ready(&self, stream: &RodioStream) -> bool {
        // An open stream stays ready for its whole lifetime; `open` already
        // failed if the file could not be decoded.
        let _ = stream;
        true
    }

    fn time_played(&self, stream: &RodioStream) -> f32 {
        let mut elapsed = stream.accumulated;
        if let Some(started) = stream.started_at {
            elapsed += started.elapsed();
        }

        // The wall clock keeps running after the sink drains; never report
        // past the end of the stream.
        let length = stream.length.as_secs_f32();
        if length > 0.0 {
            elapsed.as_secs_f32().min(length)
        } else {
            elapsed.as_secs_f32()
        }
    }

    fn length_seconds(&self, stream: &RodioStream) -> f32 {
        stream.length.as_secs_f32()
    }

    fn tick_buffering(&mut self, stream: &mut RodioStream) {
        // rodio decodes on its own output thread; nothing to pump here.
        let _ = stream;
    }

    fn set_looping(&mut self, stream: &mut RodioStream, looping: bool) {
        if looping {
            log::warn!(
                "native looping requested for {:?}; repeat is emulated upstream",
                stream.path
            );
        }
    }
}

impl Drop for RodioStream {
    fn drop(&mut self) {
        self.sink.stop();
    }
}
