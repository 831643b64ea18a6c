//! Named playlist persistence.
//!
//! A playlist is the catalog's display name to directory mapping saved
//! under a user-chosen name. The on-disk format is one TOML table per
//! playlist, one `"display name" = "directory"` entry per track.

mod store;

pub use store::FilePlaylistStore;


use std::collections::BTreeMap;

use crate::error::StoreError;

/// Contract for the on-disk playlist store.
pub trait PlaylistStore {
    /// Names of all saved playlists, in stable order.
    fn list_names(&self) -> Result<Vec<String>, StoreError>;

    /// The name → directory mapping saved under `name`; empty when unknown.
    fn load(&self, name: &str) -> Result<BTreeMap<String, String>, StoreError>;

    /// Save `songs` under `name`, overwriting any existing playlist.
    fn save(&mut self, name: &str, songs: &BTreeMap<String, String>) -> Result<(), StoreError>;

    /// Remove the named playlists; returns how many actually existed.
    fn remove(&mut self, names: &[String]) -> Result<usize, StoreError>;
}
