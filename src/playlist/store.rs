use std::collections::BTreeMap;
use std::fs;
use std::io;
use std::path::PathBuf;

use super::PlaylistStore;
use crate::error::StoreError;

type Playlists = BTreeMap<String, BTreeMap<String, String>>;

/// TOML-file-backed playlist store.
///
/// The whole file is read and rewritten per operation; playlist files are
/// small and the store is only touched from explicit user actions.
pub struct FilePlaylistStore {
    path: PathBuf,
}

impl FilePlaylistStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    fn read_all(&self) -> Result<Playlists, StoreError> {
        match fs::read_to_string(&self.path) {
            Ok(text) => Ok(toml::from_str(&text)?),
            // No file yet means no playlists yet.
            Err(err) if err.kind() == io::ErrorKind::NotFound => Ok(Playlists::new()),
            Err(err) => Err(err.into()),
        }
    }

    fn write_all(&self, playlists: &Playlists) -> Result<(), StoreError> {
        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent)?;
        }
        fs::write(&self.path, toml::to_string_pretty(playlists)?)?;
        Ok(())
    }
}

impl PlaylistStore for FilePlaylistStore {
    fn list_names(&self) -> Result<Vec<String>, StoreError> {
        Ok(self.read_all()?.into_keys().collect())
    }

    fn load(&self, name: &str) -> Result<BTreeMap<String, String>, StoreError> {
        Ok(self.read_all()?.remove(name).unwrap_or_default())
    }

    fn save(&mut self, name: &str, songs: &BTreeMap<String, String>) -> Result<(), StoreError> {
        let mut playlists = self.read_all()?;
        playlists.insert(name.to_string(), songs.clone());
        self.write_all(&playlists)
    }

    fn remove(&mut self, names: &[String]) -> Result<usize, StoreError> {
        let mut playlists = self.read_all()?;
        let mut removed = 0;
        for name in names {
            if playlists.remove(name).is_some() {
                removed += 1;
            }
        }
        if removed > 0 {
            self.write_all(&playlists)?;
        }
        Ok(removed)
    }
}
