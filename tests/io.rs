//! File I/O helper tests (`std` feature).

use std::path::PathBuf;

use zentint::TintError;
use zentint::io::{read_bytes, unique_destination, write_bytes};

fn temp_path(name: &str) -> PathBuf {
    let mut p = std::env::temp_dir();
    p.push(format!("zentint-test-{}-{name}", std::process::id()));
    p
}

#[test]
fn write_then_read_roundtrip() {
    let path = temp_path("roundtrip.bmp");
    let data = vec![1u8, 2, 3, 4, 5];

    write_bytes(&path, &data).unwrap();
    let back = read_bytes(&path).unwrap();
    assert_eq!(back, data);

    std::fs::remove_file(&path).unwrap();
}

#[test]
fn missing_file_maps_to_not_found() {
    let path = temp_path("does-not-exist.bmp");
    let err = read_bytes(&path).unwrap_err();
    assert!(matches!(err, TintError::NotFound(p) if p == path));
}

#[test]
fn unique_destination_skips_existing_names() {
    let path = temp_path("source.bmp");
    write_bytes(&path, b"x").unwrap();

    let first = unique_destination(&path);
    assert_ne!(first, path);
    assert!(first.to_string_lossy().ends_with("source_1.bmp"));

    // Occupy the first candidate; the next call must move on to _2.
    write_bytes(&first, b"x").unwrap();
    let second = unique_destination(&path);
    assert!(second.to_string_lossy().ends_with("source_2.bmp"));

    std::fs::remove_file(&path).unwrap();
    std::fs::remove_file(&first).unwrap();
}
