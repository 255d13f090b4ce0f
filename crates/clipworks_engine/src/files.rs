use std::io;
use std::path::{Path, PathBuf};

/// File extensions the panels treat as video input.
pub const VIDEO_EXTS: &[&str] = &[
    "mp4", "mkv", "avi", "mov", "wmv", "webm", "m4v", "flv", "mpg", "mpeg", "ts",
];

/// Enumerates video files directly under `dir`, sorted by path.
/// Non-recursive; non-video entries and subdirectories are skipped.
pub fn list_video_files(dir: &Path) -> io::Result<Vec<PathBuf>> {
    let mut files = Vec::new();
    for entry in std::fs::read_dir(dir)? {
        let path = entry?.path();
        if path.is_file() && has_video_ext(&path) {
            files.push(path);
        }
    }
    files.sort();
    Ok(files)
}

fn has_video_ext(path: &Path) -> bool {
    path.extension()
        .and_then(|ext| ext.to_str())
        .is_some_and(|ext| VIDEO_EXTS.iter().any(|known| known.eq_ignore_ascii_case(ext)))
}

/// Builds a `file://` URI for the preview control.
pub fn file_uri(path: &Path) -> String {
    let mut text = path.to_string_lossy().replace('\\', "/");
    if !text.starts_with('/') {
        // Windows drive paths need the extra slash after the scheme.
        text.insert(0, '/');
    }
    format!("file://{text}")
}
