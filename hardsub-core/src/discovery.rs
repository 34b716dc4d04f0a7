//! Video file discovery.
//!
//! Finds processable video files in the top level of the input directory,
//! matching the recognized container extensions case-insensitively.

use crate::config::RECOGNIZED_EXTENSIONS;
use crate::error::{CoreError, CoreResult};
use std::fs;
use std::path::{Path, PathBuf};

/// Returns true when the path's extension is one of the recognized
/// container extensions (case-insensitive).
pub fn has_recognized_extension(path: &Path) -> bool {
    path.extension().is_some_and(|ext| {
        RECOGNIZED_EXTENSIONS
            .iter()
            .any(|known| ext.eq_ignore_ascii_case(known))
    })
}

/// Finds processable video files in the top level of `input_dir`.
///
/// Only regular files with a recognized container extension are returned,
/// sorted by path for a reproducible batch order (directory listing order
/// is filesystem-dependent).
///
/// # Returns
///
/// * `Ok(Vec<PathBuf>)` - Paths of the files found
/// * `Err(CoreError::NoFilesFound)` - If no processable files are found
pub fn find_processable_files(input_dir: &Path) -> CoreResult<Vec<PathBuf>> {
    let mut files: Vec<PathBuf> = fs::read_dir(input_dir)?
        .filter_map(Result::ok)
        .map(|entry| entry.path())
        .filter(|path| path.is_file() && has_recognized_extension(path))
        .collect();

    if files.is_empty() {
        return Err(CoreError::NoFilesFound);
    }

    files.sort();

    log::info!(
        "Found {} processable video file(s) in {}",
        files.len(),
        input_dir.display()
    );

    Ok(files)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs::File;

    #[test]
    fn test_finds_recognized_extensions_case_insensitive() {
        let dir = tempfile::tempdir().unwrap();
        for name in ["a.mkv", "b.MP4", "c.avi", "notes.txt", "cover.jpg"] {
            File::create(dir.path().join(name)).unwrap();
        }

        let files = find_processable_files(dir.path()).unwrap();

        let names: Vec<_> = files
            .iter()
            .filter_map(|path| path.file_name())
            .collect();
        assert_eq!(names, ["a.mkv", "b.MP4", "c.avi"]);
    }

    #[test]
    fn test_results_are_sorted() {
        let dir = tempfile::tempdir().unwrap();
        for name in ["zeta.mkv", "alpha.mkv", "mid.mkv"] {
            File::create(dir.path().join(name)).unwrap();
        }

        let files = find_processable_files(dir.path()).unwrap();

        let names: Vec<_> = files
            .iter()
            .filter_map(|path| path.file_name())
            .collect();
        assert_eq!(names, ["alpha.mkv", "mid.mkv", "zeta.mkv"]);
    }

    #[test]
    fn test_empty_directory_yields_no_files_found() {
        let dir = tempfile::tempdir().unwrap();

        let result = find_processable_files(dir.path());

        assert!(matches!(result, Err(CoreError::NoFilesFound)));
    }

    #[test]
    fn test_directories_are_ignored() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::create_dir(dir.path().join("season1.mkv")).unwrap();
        File::create(dir.path().join("episode.mkv")).unwrap();

        let files = find_processable_files(dir.path()).unwrap();

        assert_eq!(files.len(), 1);
        assert_eq!(files[0].file_name().unwrap(), "episode.mkv");
    }

    #[test]
    fn test_has_recognized_extension() {
        assert!(has_recognized_extension(Path::new("a.mkv")));
        assert!(has_recognized_extension(Path::new("a.MKV")));
        assert!(has_recognized_extension(Path::new("a.Mp4")));
        assert!(has_recognized_extension(Path::new("a.avi")));
        assert!(!has_recognized_extension(Path::new("a.srt")));
        assert!(!has_recognized_extension(Path::new("a")));
        assert!(!has_recognized_extension(Path::new(".mkv")));
    }
}
