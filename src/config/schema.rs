use serde::Deserialize;

/// Top-level application settings loaded from `config.toml`.
///
/// File format: TOML
/// Default path (Linux/XDG): `$XDG_CONFIG_HOME/dacapo/config.toml` or
/// `~/.config/dacapo/config.toml`
///
/// Precedence (highest wins):
/// 1) Environment variables (prefix `DACAPO__`, `__` as nested separator)
/// 2) Config file (if present)
/// 3) Struct defaults
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct Settings {
    pub library: LibrarySettings,
    pub playback: PlaybackSettings,
    pub storage: StorageSettings,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct LibrarySettings {
    /// File extensions offered by the open-files dialog and accepted by the
    /// directory scanner (case-insensitive, without dot).
    pub extensions: Vec<String>,

    /// Directory the open-files dialog starts in. `None` lets the shell
    /// fall back to the platform music location.
    pub music_dir: Option<String>,
}

impl Default for LibrarySettings {
    fn default() -> Self {
        Self {
            extensions: vec![
                "mp3".into(),
                "ogg".into(),
                "wav".into(),
                "qoa".into(),
                "flac".into(),
                "xm".into(),
                "mod".into(),
            ],
            music_dir: None,
        }
    }
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct PlaybackSettings {
    /// Whether repeat starts enabled.
    pub repeat: bool,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct StorageSettings {
    /// Where named playlists are persisted. `None` resolves to
    /// `dacapo/playlists.toml` next to the config file.
    pub playlists_path: Option<String>,
}
