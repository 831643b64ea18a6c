use std::path::{Path, PathBuf};

use walkdir::WalkDir;

fn is_audio_file(path: &Path, extensions: &[String]) -> bool {
    let exts: Vec<String> = extensions
        .iter()
        .map(|e| e.trim().trim_start_matches('.').to_ascii_lowercase())
        .filter(|e| !e.is_empty())
        .collect();

    path.extension()
        .and_then(|s| s.to_str())
        .map(|ext| {
            let ext = ext.to_ascii_lowercase();
            exts.iter().any(|e| e == &ext)
        })
        .unwrap_or(false)
}

/// Collect the audio files under `dir`, filtered by extension
/// (case-insensitive, with or without a leading dot), sorted the same way
/// the catalog sorts: lexicographically by full path string.
pub fn scan_dir(dir: &Path, extensions: &[String]) -> Vec<PathBuf> {
    let mut files: Vec<PathBuf> = Vec::new();

    for entry in WalkDir::new(dir)
        .follow_links(true)
        .into_iter()
        .filter_map(Result::ok)
    {
        let path = entry.path();
        if path.is_file() && is_audio_file(path, extensions) {
            files.push(path.to_path_buf());
        }
    }

    files.sort_by(|a, b| a.as_os_str().cmp(b.as_os_str()));
    files
}
