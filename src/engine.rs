//! The native audio backend contract and its rodio implementation.

mod backend;

pub use backend::{RodioEngine, RodioStream};

use std::path::Path;

use crate::error::EngineError;

/// Thin contract over a native audio backend.
///
/// The playback controller owns at most one open stream at a time and
/// releases it before opening the next. Implementations report playback
/// position and whether the stream is still running; the controller layers
/// the transport state machine, auto-advance and repeat on top.
pub trait AudioEngine {
    type Stream;

    fn open(&mut self, path: &Path) -> Result<Self::Stream, EngineError>;
    fn close(&mut self, stream: Self::Stream);

    fn play(&mut self, stream: &mut Self::Stream);
    fn pause(&mut self, stream: &mut Self::Stream);
    fn resume(&mut self, stream: &mut Self::Stream);
    /// Stop and reset the play position to zero.
    fn stop(&mut self, stream: &mut Self::Stream);
    /// Reposition to `seconds` from the start, keeping the play/pause state.
    fn seek(&mut self, stream: &mut Self::Stream, seconds: f32);

    /// Whether the stream is actively producing audio (not paused, not
    /// drained). Goes false on its own at the natural end of the stream.
    fn is_playing(&self, stream: &Self::Stream) -> bool;
    fn is_ready(&self, stream: &Self::Stream) -> bool;
    /// Elapsed play time in seconds, reset by `stop`.
    fn time_played(&self, stream: &Self::Stream) -> f32;
    fn length_seconds(&self, stream: &Self::Stream) -> f32;

    /// Advance internal buffering, called once per progress tick. Backends
    /// that decode on their own thread treat this as a no-op.
    fn tick_buffering(&mut self, stream: &mut Self::Stream);
    /// Native end-of-stream wrapping. The controller always disables this
    /// and emulates repeat through its own tick.
    fn set_looping(&mut self, stream: &mut Self::Stream, looping: bool);
}
