use std::collections::BTreeMap;
use std::path::{MAIN_SEPARATOR, Path, PathBuf};

/// One playable item: the file's base name plus the directory holding it.
///
/// The pair reconstructs the absolute path; the name doubles as the catalog
/// key, so it must be unique within one catalog.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Track {
    pub name: String,
    /// Parent directory, without a trailing separator.
    pub directory: String,
}

impl Track {
    pub fn from_path(path: &Path) -> Self {
        let name = path
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_default();
        let directory = path
            .parent()
            .map(|d| d.to_string_lossy().into_owned())
            .unwrap_or_default();
        Self { name, directory }
    }

    pub fn path(&self) -> PathBuf {
        if self.directory.is_empty() {
            PathBuf::from(&self.name)
        } else {
            Path::new(&self.directory).join(&self.name)
        }
    }
}

/// What `remove_by_name` took out, reported so the playback controller can
/// decide the replacement index instead of finding out later.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RemovedTrack {
    pub index: usize,
    pub path: PathBuf,
}

/// The ordered set of loaded files and the name map derived from it.
///
/// `ordered_paths` is fully re-sorted on every `add_files`; `by_name`
/// iterates lexicographically by display name (the order `join` rebuilds
/// the path list in). Neither structure follows the other automatically:
/// callers synchronize through `split`/`join`.
#[derive(Debug, Default, Clone)]
pub struct TrackCatalog {
    ordered_paths: Vec<PathBuf>,
    by_name: BTreeMap<String, String>,
}

impl TrackCatalog {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append `paths`, re-sort the whole list lexicographically by full
    /// path string, and rebuild the name map. Empty input is a no-op.
    pub fn add_files(&mut self, paths: impl IntoIterator<Item = PathBuf>) {
        let mut added = false;
        for path in paths {
            self.ordered_paths.push(path);
            added = true;
        }
        if !added {
            return;
        }

        self.ordered_paths
            .sort_by(|a, b| a.as_os_str().cmp(b.as_os_str()));
        self.split();
    }

    /// Append a free-form typed path literally, without re-sorting, so the
    /// appended position becomes the new active index. Returns that index.
    pub fn add_typed_path(&mut self, raw: &str) -> usize {
        let (name, directory) = match raw.rfind(MAIN_SEPARATOR) {
            Some(pos) => (&raw[pos + 1..], &raw[..pos]),
            None => (raw, ""),
        };

        self.ordered_paths.push(PathBuf::from(raw));
        self.by_name.insert(name.to_string(), directory.to_string());
        self.ordered_paths.len() - 1
    }

    /// Remove the entry called `name` from both structures. `None` when the
    /// name is unknown (a silent no-op for callers that don't care).
    pub fn remove_by_name(&mut self, name: &str) -> Option<RemovedTrack> {
        let directory = self.by_name.remove(name)?;
        let path = Track {
            name: name.to_string(),
            directory,
        }
        .path();

        let index = self.ordered_paths.iter().position(|p| *p == path)?;
        self.ordered_paths.remove(index);
        Some(RemovedTrack { index, path })
    }

    pub fn clear(&mut self) {
        self.ordered_paths.clear();
        self.by_name.clear();
    }

    pub fn len(&self) -> usize {
        self.ordered_paths.len()
    }

    pub fn is_empty(&self) -> bool {
        self.ordered_paths.is_empty()
    }

    /// Display name of the entry at `index` in playback order.
    pub fn name_at(&self, index: usize) -> Option<String> {
        self.ordered_paths
            .get(index)
            .and_then(|p| p.file_name())
            .map(|n| n.to_string_lossy().into_owned())
    }

    pub fn path_at(&self, index: usize) -> Option<&Path> {
        self.ordered_paths.get(index).map(PathBuf::as_path)
    }

    pub fn index_of_path(&self, path: &Path) -> Option<usize> {
        self.ordered_paths.iter().position(|p| p == path)
    }

    /// Display names in map order, as the list widget shows them.
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.by_name.keys().map(String::as_str)
    }

    /// The display name to directory mapping, as persisted in playlists.
    pub fn name_map(&self) -> &BTreeMap<String, String> {
        &self.by_name
    }

    /// Replace the catalog with a persisted name map and derive the path
    /// list from it.
    pub fn load_names(&mut self, names: BTreeMap<String, String>) {
        self.by_name = names;
        self.join();
    }

    /// Derive `by_name` from `ordered_paths`. When two files share a display
    /// name the later path wins, silently.
    pub fn split(&mut self) {
        self.by_name.clear();
        for path in &self.ordered_paths {
            let track = Track::from_path(path);
            self.by_name.insert(track.name, track.directory);
        }
    }

    /// Derive `ordered_paths` from `by_name`, in the map's iteration order
    /// (lexicographic by display name). Downstream display order depends on
    /// which of `split`/`join` ran last.
    pub fn join(&mut self) {
        self.ordered_paths = self
            .by_name
            .iter()
            .map(|(name, directory)| {
                Track {
                    name: name.clone(),
                    directory: directory.clone(),
                }
                .path()
            })
            .collect();
    }
}
