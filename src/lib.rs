//! Playback and playlist core for a desktop audio player.
//!
//! The crate owns two things: the [`catalog::TrackCatalog`], an ordered list
//! of loaded audio files together with the display-name map derived from it,
//! and the [`playback::Player`], the state machine that drives a native audio
//! backend through transport transitions and publishes the UI-facing
//! progress and status signals.
//!
//! Everything visual stays in the embedding application and reaches the core
//! through traits: the audio backend behind [`engine::AudioEngine`], playlist
//! persistence behind [`playlist::PlaylistStore`] and the file/selection
//! dialogs behind the traits in [`prompt`]. Progress is driven externally:
//! the host schedules [`playback::Player::tick`] and friends on its own
//! timers, which keeps the whole machine deterministic under test.

pub mod catalog;
pub mod config;
pub mod engine;
pub mod error;
pub mod playback;
pub mod playlist;
pub mod prompt;
pub mod timefmt;
