use std::path::{Path, PathBuf};

use crate::catalog::TrackCatalog;
use crate::engine::AudioEngine;
use crate::error::{Direction, PlayerError};
use crate::playlist::PlaylistStore;
use crate::prompt::{FilePrompt, SelectionPrompt};

use super::display::{DisplayState, Severity, StatusLine, TransportButton};

/// Playback phase of the controller.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Default)]
pub enum PlaybackState {
    /// No catalog entries.
    #[default]
    Empty,
    /// Stream opened, not started.
    Loaded,
    Playing,
    Paused,
    /// Stream opened, position reset to zero.
    Stopped,
    /// Elapsed time reached the length boundary while the engine still
    /// reports the stream as playing.
    Finished,
}

/// The playback controller: owns the catalog, the single active stream and
/// the UI-facing display/status signals.
///
/// Catalog edits that can interrupt playback (removal, re-sorting adds,
/// playlist loads) go through the controller so the active index, the open
/// stream and the displayed name stay consistent in one call.
pub struct Player<E: AudioEngine> {
    engine: E,
    catalog: TrackCatalog,
    state: PlaybackState,
    active_index: Option<usize>,
    active_path: Option<PathBuf>,
    stream: Option<E::Stream>,
    total_length: f32,
    looping: bool,
    has_ever_played: bool,
    display: DisplayState,
    status: StatusLine,
}

impl<E: AudioEngine> Player<E> {
    pub fn new(engine: E) -> Self {
        Self {
            engine,
            catalog: TrackCatalog::new(),
            state: PlaybackState::Empty,
            active_index: None,
            active_path: None,
            stream: None,
            total_length: 0.0,
            looping: false,
            has_ever_played: false,
            display: DisplayState::default(),
            status: StatusLine::default(),
        }
    }

    pub fn catalog(&self) -> &TrackCatalog {
        &self.catalog
    }

    pub fn state(&self) -> PlaybackState {
        self.state
    }

    pub fn active_index(&self) -> Option<usize> {
        self.active_index
    }

    pub fn active_path(&self) -> Option<&Path> {
        self.active_path.as_deref()
    }

    pub fn total_length(&self) -> f32 {
        self.total_length
    }

    pub fn is_looping(&self) -> bool {
        self.looping
    }

    pub fn display(&self) -> &DisplayState {
        &self.display
    }

    pub fn status(&self) -> &StatusLine {
        &self.status
    }

    /// Elapsed play time of the active stream, in seconds.
    pub fn time_played(&self) -> f32 {
        self.stream
            .as_ref()
            .map(|s| self.engine.time_played(s))
            .unwrap_or(0.0)
    }

    /// Open the stream at catalog position `index` without starting it.
    ///
    /// Any previously open stream is released first; on failure the state
    /// value is kept and the error reported upward.
    pub fn load_track(&mut self, index: usize) -> Result<(), PlayerError> {
        let Some(path) = self.catalog.path_at(index).map(Path::to_path_buf) else {
            return Err(PlayerError::TrackUnavailable {
                index,
                source: None,
            });
        };

        // One stream at a time: release the old handle before opening.
        self.release_stream();

        let mut stream =
            self.engine
                .open(&path)
                .map_err(|source| PlayerError::TrackUnavailable {
                    index,
                    source: Some(source),
                })?;

        // Repeat is emulated in `tick`; never let the backend wrap on its own.
        self.engine.set_looping(&mut stream, false);
        self.total_length = self.engine.length_seconds(&stream);

        self.stream = Some(stream);
        self.active_index = Some(index);
        self.active_path = Some(path);
        self.display.set_length(self.total_length as u32);
        self.display.set_elapsed(0);
        self.state = PlaybackState::Loaded;
        Ok(())
    }

    /// Start or restart the loaded stream. Idempotent while already playing.
    pub fn play(&mut self) -> Result<(), PlayerError> {
        if self.catalog.is_empty() {
            return Err(PlayerError::EmptyCatalog);
        }
        let Some(stream) = self.stream.as_mut() else {
            return Err(PlayerError::EmptyCatalog);
        };
        if !self.engine.is_ready(stream) {
            return Err(PlayerError::EmptyCatalog);
        }

        match self.state {
            PlaybackState::Playing => return Ok(()),
            PlaybackState::Paused => self.engine.resume(stream),
            _ => self.engine.play(stream),
        }

        self.state = PlaybackState::Playing;
        self.has_ever_played = true;
        self.display.button = TransportButton::Pause;
        Ok(())
    }

    /// The combined play/pause button: first press starts, later presses
    /// toggle between playing and paused.
    pub fn toggle_pause(&mut self) -> Result<(), PlayerError> {
        if !self.has_ever_played {
            return self.play();
        }

        match self.state {
            PlaybackState::Playing => {
                if let Some(stream) = self.stream.as_mut() {
                    self.engine.pause(stream);
                }
                self.state = PlaybackState::Paused;
                self.display.button = TransportButton::Play;
                Ok(())
            }
            PlaybackState::Paused => {
                if let Some(stream) = self.stream.as_mut() {
                    self.engine.resume(stream);
                }
                self.state = PlaybackState::Playing;
                self.display.button = TransportButton::Pause;
                Ok(())
            }
            _ => self.play(),
        }
    }

    /// The stop button: only acts once some time has actually played.
    pub fn stop(&mut self) {
        if self.time_played() > 0.0 {
            self.stop_with(false, false);
        }
    }

    /// Stop the stream and reset the transport controls.
    ///
    /// A paused stream is resumed before stopping: stopping it directly
    /// leaves the backend reporting the last played time instead of zero.
    fn stop_with(&mut self, reset_length: bool, reset_name: bool) {
        if let Some(stream) = self.stream.as_mut() {
            if !self.engine.is_playing(stream) {
                self.engine.resume(stream);
            }
            self.engine.stop(stream);
        }

        self.display.reset(reset_length, reset_name);
        self.has_ever_played = false;
        self.state = PlaybackState::Stopped;
    }

    /// Reposition the active stream, clamped to `[0, total_length]`. Does
    /// not change the playback state.
    pub fn seek(&mut self, seconds: f32) {
        let Some(stream) = self.stream.as_mut() else {
            return;
        };

        let clamped = seconds.clamp(0.0, self.total_length.max(0.0));
        self.engine.seek(stream, clamped);

        let whole = clamped as u32;
        self.display.slider_pos = whole;
        self.display.set_elapsed(whole);
    }

    /// Fine progress tick, scheduled while audio is running.
    ///
    /// Advances engine buffering, publishes the elapsed display and handles
    /// the end-of-stream transitions: repeat, auto-advance to the next
    /// catalog entry, or coming to rest in `Stopped`.
    pub fn tick(&mut self) {
        if !matches!(
            self.state,
            PlaybackState::Playing | PlaybackState::Finished
        ) {
            return;
        }
        let Some(stream) = self.stream.as_mut() else {
            return;
        };

        self.engine.tick_buffering(stream);
        let elapsed = self.engine.time_played(stream) as u32;
        let total = self.total_length as u32;
        let still_playing = self.engine.is_playing(stream);

        self.display.set_elapsed(elapsed);

        if !still_playing {
            self.advance_after_end();
        } else if elapsed == total {
            // End boundary with the engine still draining: relax the
            // controls without tearing the stream down.
            self.display.button = TransportButton::Play;
            self.display.slider_pos = 0;
            self.state = PlaybackState::Finished;
        } else {
            self.display.button = TransportButton::Pause;
        }
    }

    /// Coarse once-a-second tick: the seek slider advances independently of
    /// the fine progress tick and is re-synced on seek.
    pub fn second_tick(&mut self) {
        if self.state == PlaybackState::Playing {
            self.display.slider_pos = self
                .display
                .slider_pos
                .saturating_add(1)
                .min(self.display.slider_max);
        }
    }

    /// Transient tick: expires the status message one period after set.
    pub fn status_tick(&mut self) {
        self.status.expire();
    }

    pub fn next(&mut self) -> Result<(), PlayerError> {
        self.skip(1, Direction::Next)
    }

    pub fn previous(&mut self) -> Result<(), PlayerError> {
        self.skip(-1, Direction::Previous)
    }

    /// Toggle controller-emulated repeat. Rejected while nothing is loaded
    /// so the host can revert its checkbox.
    pub fn set_looping(&mut self, enabled: bool) -> Result<(), PlayerError> {
        if self.catalog.is_empty() && enabled {
            return Err(PlayerError::EmptyCatalog);
        }
        self.looping = enabled;
        Ok(())
    }

    /// Remove a catalog entry by display name, handling the interruption
    /// when it is the active one: stop, clamp the active index, reload the
    /// entry now at that index and restore the displayed name.
    pub fn remove_track(&mut self, name: &str) -> Result<(), PlayerError> {
        let Some(removed) = self.catalog.remove_by_name(name) else {
            return Ok(());
        };

        if self.catalog.is_empty() {
            self.stop_with(true, true);
            self.release_stream();
            self.active_index = None;
            self.active_path = None;
            self.total_length = 0.0;
            self.state = PlaybackState::Empty;
            return Ok(());
        }

        let was_active = self.active_path.as_deref() == Some(removed.path.as_path());
        if was_active {
            self.stop_with(true, true);

            let mut index = self.active_index.unwrap_or(0);
            if index > removed.index {
                index = removed.index;
            }
            index = index.min(self.catalog.len() - 1);

            self.load_track(index)?;
            self.refresh_track_name();
        } else if let Some(path) = self.active_path.clone() {
            // The list shifted under the active entry; chase it by path.
            self.active_index = self.catalog.index_of_path(&path);
        }
        Ok(())
    }

    /// Add files to the catalog. The full re-sort can move the active
    /// track, so its position is re-resolved by path and, when it was
    /// playing, the stream is reloaded, sought back to the captured elapsed
    /// time and resumed.
    pub fn add_files(&mut self, paths: Vec<PathBuf>) -> Result<(), PlayerError> {
        if paths.is_empty() {
            return Ok(());
        }

        self.catalog.add_files(paths);

        if let Some(active) = self.active_path.clone() {
            let elapsed = self.time_played();
            let was_playing = self.state == PlaybackState::Playing;

            self.stop_with(false, false);
            let index = self.catalog.index_of_path(&active).unwrap_or(0);
            self.load_track(index)?;
            self.refresh_track_name();
            self.seek(elapsed);
            if was_playing {
                self.play()?;
            }
        } else {
            self.load_track(0)?;
            self.refresh_track_name();
        }
        Ok(())
    }

    /// Let the host's file dialog pick files, then add them.
    pub fn open_files<F: FilePrompt>(
        &mut self,
        prompt: &mut F,
        start_dir: &Path,
        extensions: &[String],
    ) -> Result<(), PlayerError> {
        let files = prompt.open_files(start_dir, extensions);
        if files.is_empty() {
            return Ok(());
        }
        self.add_files(files)
    }

    /// Append a hand-typed path and make it the active, loaded track.
    pub fn add_typed_path(&mut self, raw: &str) -> Result<(), PlayerError> {
        let index = self.catalog.add_typed_path(raw);
        self.load_track(index)?;
        self.refresh_track_name();
        Ok(())
    }

    /// Stop and forget everything: catalog, session and displays.
    pub fn close_playlist(&mut self) {
        if self.catalog.is_empty() {
            return;
        }

        self.stop_with(true, true);
        self.release_stream();
        self.catalog.clear();
        self.active_index = None;
        self.active_path = None;
        self.total_length = 0.0;
        self.display = DisplayState::default();
        self.state = PlaybackState::Empty;
    }

    /// Let the user pick a saved playlist and replace the catalog with it.
    /// Returns `false` when the prompt was cancelled or the playlist empty.
    pub fn open_playlist<S: PlaylistStore, P: SelectionPrompt>(
        &mut self,
        store: &S,
        prompt: &mut P,
    ) -> Result<bool, PlayerError> {
        let names = store.list_names()?;
        let selection = prompt.select(&names, false);
        let Some(name) = selection.into_iter().next() else {
            return Ok(false);
        };

        let songs = store.load(&name)?;
        if songs.is_empty() {
            return Ok(false);
        }

        self.stop_with(true, true);
        self.catalog.load_names(songs);
        self.load_track(0)?;
        self.refresh_track_name();
        Ok(true)
    }

    /// Persist the current name map under `name`, overwriting.
    pub fn save_playlist<S: PlaylistStore>(
        &mut self,
        store: &mut S,
        name: &str,
    ) -> Result<(), PlayerError> {
        if self.catalog.is_empty() {
            return Err(PlayerError::EmptyCatalog);
        }
        if name.is_empty() {
            self.status.set("Playlist not saved.", Severity::Error);
            return Ok(());
        }

        store.save(name, self.catalog.name_map())?;
        self.status.set("Playlist saved!", Severity::Success);
        Ok(())
    }

    /// Let the user pick saved playlists to delete; reports the count on
    /// the status line.
    pub fn remove_playlists<S: PlaylistStore, P: SelectionPrompt>(
        &mut self,
        store: &mut S,
        prompt: &mut P,
    ) -> Result<usize, PlayerError> {
        let names = store.list_names()?;
        let selection = prompt.select(&names, true);
        if selection.is_empty() {
            return Ok(0);
        }

        let removed = store.remove(&selection)?;
        if removed > 0 {
            let noun = if removed == 1 { "playlist" } else { "playlists" };
            self.status
                .set(format!("{removed} {noun} removed."), Severity::Info);
        }
        Ok(removed)
    }

    fn skip(&mut self, offset: isize, direction: Direction) -> Result<(), PlayerError> {
        if self.catalog.is_empty() {
            return Err(PlayerError::EmptyCatalog);
        }

        self.stop_with(false, false);

        let current = self.active_index.unwrap_or(0) as isize;
        let target = current + offset;
        if target < 0 || target as usize >= self.catalog.len() {
            return Err(PlayerError::NoAdjacentTrack(direction));
        }

        self.load_track(target as usize)?;
        self.refresh_track_name();
        self.play()
    }

    /// End-of-stream: repeat the same entry, advance to the next one, or
    /// come to rest in `Stopped` with the boundary time still on display.
    fn advance_after_end(&mut self) {
        let boundary = self.display.elapsed_label.clone();
        self.stop_with(false, false);

        if self.looping {
            if let Some(index) = self.active_index {
                if self.load_track(index).is_ok() {
                    let _ = self.play();
                }
            }
            return;
        }

        let next = self
            .active_index
            .map(|i| i + 1)
            .filter(|&i| i < self.catalog.len());

        match next {
            Some(index) => {
                log::debug!("playing next track: {:?}", self.catalog.path_at(index));
                if self.load_track(index).is_ok() {
                    self.refresh_track_name();
                    let _ = self.play();
                }
            }
            None => {
                self.display.elapsed_label = boundary;
            }
        }
    }

    fn refresh_track_name(&mut self) {
        if let Some(index) = self.active_index {
            if let Some(name) = self.catalog.name_at(index) {
                self.display.track_name = name;
            }
        }
    }

    fn release_stream(&mut self) {
        if let Some(stream) = self.stream.take() {
            self.engine.close(stream);
        }
    }
}

impl<E: AudioEngine> Drop for Player<E> {
    fn drop(&mut self) {
        self.release_stream();
    }
}
