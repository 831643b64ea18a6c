//! Error types shared across the crate.
//!
//! Everything here is recoverable: the core never aborts, failures degrade
//! to a no-op plus a user-visible message in the embedding application.

use std::path::PathBuf;

use thiserror::Error;

/// Which neighbor a skip asked for.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum Direction {
    Previous,
    Next,
}

impl std::fmt::Display for Direction {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Direction::Previous => write!(f, "previous"),
            Direction::Next => write!(f, "next"),
        }
    }
}

/// Failures reported by the playback controller.
#[derive(Debug, Error)]
pub enum PlayerError {
    /// The load target is outside the catalog or its file cannot be opened.
    /// The session stays in its previous state.
    #[error("cannot load track {index}")]
    TrackUnavailable {
        index: usize,
        #[source]
        source: Option<EngineError>,
    },

    /// Next/previous requested at the end/start of the catalog. A warning,
    /// not a failure: playback is already stopped when this is reported.
    #[error("there's no {0} music to play")]
    NoAdjacentTrack(Direction),

    /// A transport action was attempted with no loaded tracks.
    #[error("no song has been loaded")]
    EmptyCatalog,

    /// Playlist save/load/remove failed; the in-memory catalog is untouched.
    #[error("playlist storage failed")]
    Persistence(#[from] StoreError),
}

/// Failure opening or repositioning a native audio stream.
#[derive(Debug, Error)]
pub enum EngineError {
    #[error("failed to open {path:?}")]
    Open {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to decode {path:?}")]
    Decode {
        path: PathBuf,
        #[source]
        source: rodio::decoder::DecoderError,
    },
}

/// Failure in the on-disk playlist store.
#[derive(Debug, Error)]
pub enum StoreError {
    #[error(transparent)]
    Io(#[from] std::io::Error),

    #[error("malformed playlist file: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("could not serialize playlists: {0}")]
    Serialize(#[from] toml::ser::Error),
}
