//! Seams for the modal dialogs the desktop shell provides.
//!
//! Both prompts are synchronous from the caller's point of view: the call
//! does not return until the user picked or cancelled, even when the shell
//! implements it with an asynchronous dialog underneath. Cancellation is an
//! empty result, never an error.

use std::path::{Path, PathBuf};

/// Pick one or several entries out of a list of candidates.
pub trait SelectionPrompt {
    fn select(&mut self, candidates: &[String], multiple: bool) -> Vec<String>;
}

/// Pick audio files to open, starting the dialog in `start_dir` and
/// filtering by extension. Returns absolute paths.
pub trait FilePrompt {
    fn open_files(&mut self, start_dir: &Path, extensions: &[String]) -> Vec<PathBuf>;
}
