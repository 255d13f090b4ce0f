use std::fs;

use clipworks_engine::list_video_files;
use tempfile::tempdir;

#[test]
fn listing_keeps_only_video_files_sorted() {
    let dir = tempdir().unwrap();
    fs::write(dir.path().join("b.mp4"), b"x").unwrap();
    fs::write(dir.path().join("a.MKV"), b"x").unwrap();
    fs::write(dir.path().join("notes.txt"), b"x").unwrap();
    fs::create_dir(dir.path().join("clips.mp4")).unwrap();

    let files = list_video_files(dir.path()).unwrap();

    let names: Vec<_> = files
        .iter()
        .map(|p| p.file_name().unwrap().to_string_lossy().into_owned())
        .collect();
    assert_eq!(names, vec!["a.MKV", "b.mp4"]);
}

#[test]
fn listing_a_missing_dir_is_an_error() {
    let dir = tempdir().unwrap();
    let gone = dir.path().join("gone");
    assert!(list_video_files(&gone).is_err());
}

#[test]
fn empty_dir_yields_an_empty_list() {
    let dir = tempdir().unwrap();
    assert!(list_video_files(dir.path()).unwrap().is_empty());
}
