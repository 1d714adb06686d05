use std::path::{Path, PathBuf};
use std::process::{Command, Output};

use pretty_assertions::assert_eq;
use rion_rst::{compute_hash, RstFile, Version};
use serde_json::{json, Value};
use tempfile::TempDir;

fn rion(args: &[&Path]) -> Output {
    Command::new(env!("CARGO_BIN_EXE_rion"))
        .args(args)
        .env_remove("RION_HASHES")
        .env("RUST_LOG", "info")
        .output()
        .expect("failed to run rion")
}

fn write_json(dir: &TempDir, name: &str, value: &Value) -> PathBuf {
    let path = dir.path().join(name);
    std::fs::write(&path, serde_json::to_vec_pretty(value).unwrap()).unwrap();
    path
}

fn read_rst(path: &Path) -> RstFile {
    RstFile::read(std::io::Cursor::new(std::fs::read(path).unwrap())).unwrap()
}

#[test]
fn json_round_trips_through_rst() {
    let dir = tempfile::tempdir().unwrap();
    let hashes = dir.path().join("RSTHashes.txt");
    std::fs::write(&hashes, "16ffd3ea8b game_title\n").unwrap();

    let input = write_json(
        &dir,
        "main.json",
        &json!({
            "version": "5",
            "entries": {
                "game_title": "League of Legends",
                "{1a2b3c4d}": "Brace wrapped",
                "ff": "Ünïcödé & <tags>"
            }
        }),
    );

    let output = rion(&[&input]);
    assert_eq!(output.status.code(), Some(0));

    let rst_path = dir.path().join("main.stringtable");
    let rst = read_rst(&rst_path);
    assert_eq!(rst.version(), Version::V5);
    assert_eq!(rst.entries()[0].hash, compute_hash("game_title", rst.hash_kind()));
    assert_eq!(rst.entries()[1].hash, 0x1A2B3C4D);

    let decoded = dir.path().join("decoded.json");
    let output = rion(&[
        &rst_path,
        Path::new("-o"),
        &decoded,
        Path::new("--hashes"),
        &hashes,
    ]);
    assert_eq!(output.status.code(), Some(0));

    let value: Value = serde_json::from_slice(&std::fs::read(&decoded).unwrap()).unwrap();
    assert_eq!(
        value,
        json!({
            "RMAG": "RST",
            "version": "5",
            "entries": {
                "game_title": "League of Legends",
                "1a2b3c4d": "Brace wrapped",
                "ff": "Ünïcödé & <tags>"
            }
        })
    );

    let text = std::fs::read_to_string(&decoded).unwrap();
    assert!(text.contains("Ünïcödé & <tags>"));
}

#[test]
fn unknown_file_types_fail() {
    let dir = tempfile::tempdir().unwrap();

    let empty = dir.path().join("empty.bin");
    std::fs::write(&empty, b"").unwrap();
    let output = rion(&[&empty]);
    assert_eq!(output.status.code(), Some(1));
    assert!(String::from_utf8_lossy(&output.stderr).contains("invalid file type"));

    let other = dir.path().join("other.bin");
    std::fs::write(&other, b"xyz").unwrap();
    assert_eq!(rion(&[&other]).status.code(), Some(1));
}

#[test]
fn failed_encode_writes_nothing() {
    let dir = tempfile::tempdir().unwrap();
    let input = write_json(
        &dir,
        "broken.json",
        &json!({"entries": {"ok": "fine", "bad": "nul\u{0}inside"}}),
    );

    let output = rion(&[&input]);
    assert_eq!(output.status.code(), Some(1));
    assert!(!dir.path().join("broken.stringtable").exists());

    let existing = dir.path().join("existing.stringtable");
    std::fs::write(&existing, b"untouched").unwrap();
    let output = rion(&[&input, &existing]);
    assert_eq!(output.status.code(), Some(1));
    assert_eq!(std::fs::read(&existing).unwrap(), b"untouched");
}

#[test]
fn failed_decode_leaves_output_untouched() {
    let dir = tempfile::tempdir().unwrap();
    let input = dir.path().join("bad.stringtable");
    std::fs::write(&input, b"RSX\x05\x00\x00\x00\x00").unwrap();

    let derived = dir.path().join("bad.json");
    std::fs::write(&derived, b"untouched").unwrap();
    let output = rion(&[&input]);
    assert_eq!(output.status.code(), Some(1));
    assert_eq!(std::fs::read(&derived).unwrap(), b"untouched");

    let truncated = dir.path().join("truncated.stringtable");
    std::fs::write(&truncated, b"RST\x05\x02\x00\x00\x00").unwrap();
    let explicit = dir.path().join("explicit.json");
    std::fs::write(&explicit, b"untouched").unwrap();
    let output = rion(&[&truncated, Path::new("-o"), &explicit]);
    assert_eq!(output.status.code(), Some(1));
    assert_eq!(std::fs::read(&explicit).unwrap(), b"untouched");

    assert_eq!(std::fs::read_dir(dir.path()).unwrap().count(), 4);
}

#[test]
fn malformed_json_fails() {
    let dir = tempfile::tempdir().unwrap();
    let input = dir.path().join("malformed.json");
    std::fs::write(&input, b"{\"entries\": {").unwrap();

    let output = rion(&[&input]);
    assert_eq!(output.status.code(), Some(1));
    assert!(!dir.path().join("malformed.stringtable").exists());
}

#[test]
fn batch_stops_at_first_failure() {
    let dir = tempfile::tempdir().unwrap();
    let first = write_json(&dir, "first.json", &json!({"entries": {"a": "1"}}));
    let broken = dir.path().join("broken.json");
    std::fs::write(&broken, b"").unwrap();
    let last = write_json(&dir, "last.json", &json!({"entries": {"b": "2"}}));

    let output = rion(&[&first, &broken, &last]);
    assert_eq!(output.status.code(), Some(1));
    assert!(dir.path().join("first.stringtable").exists());
    assert!(!dir.path().join("last.stringtable").exists());
}

#[test]
fn batch_flag_converts_two_inputs() {
    let dir = tempfile::tempdir().unwrap();
    let first = write_json(&dir, "first.json", &json!({"entries": {"a": "1"}}));
    let second = write_json(&dir, "second.json", &json!({"entries": {"b": "2"}}));

    let output = rion(&[Path::new("--batch"), &first, &second]);
    assert_eq!(output.status.code(), Some(0));
    assert!(dir.path().join("first.stringtable").exists());
    assert!(dir.path().join("second.stringtable").exists());
}

#[test]
fn unsupported_version_falls_back_to_latest() {
    let dir = tempfile::tempdir().unwrap();
    let declared = write_json(
        &dir,
        "declared.json",
        &json!({"version": "250", "entries": {"a": "1"}}),
    );
    let missing = write_json(&dir, "missing.json", &json!({"entries": {"a": "1"}}));

    assert_eq!(rion(&[&declared]).status.code(), Some(0));
    assert_eq!(rion(&[&missing]).status.code(), Some(0));

    assert_eq!(
        std::fs::read(dir.path().join("declared.stringtable")).unwrap(),
        std::fs::read(dir.path().join("missing.stringtable")).unwrap()
    );
    assert_eq!(
        read_rst(&dir.path().join("declared.stringtable")).version(),
        Version::latest()
    );
}

#[test]
fn equals_ignores_entry_order() {
    let dir = tempfile::tempdir().unwrap();

    let mut left = RstFile::new(Version::V4);
    left.add_entry(1, "one");
    left.add_entry(2, "two");
    let mut right = RstFile::new(Version::V4);
    right.add_entry(2, "two");
    right.add_entry(1, "one");
    let mut other = RstFile::new(Version::V4);
    other.add_entry(1, "uno");

    let left_path = dir.path().join("left.stringtable");
    let right_path = dir.path().join("right.stringtable");
    let other_path = dir.path().join("other.stringtable");
    std::fs::write(&left_path, left.to_bytes().unwrap()).unwrap();
    std::fs::write(&right_path, right.to_bytes().unwrap()).unwrap();
    std::fs::write(&other_path, other.to_bytes().unwrap()).unwrap();

    let output = rion(&[Path::new("-e"), &left_path, &left_path]);
    assert_eq!(output.status.code(), Some(0));
    assert!(String::from_utf8_lossy(&output.stdout).contains("Files are the same."));

    let output = rion(&[Path::new("--equals"), &left_path, &right_path]);
    assert!(String::from_utf8_lossy(&output.stdout).contains("Files are the same."));

    let output = rion(&[Path::new("-e"), &left_path, &other_path]);
    assert_eq!(output.status.code(), Some(0));
    assert!(String::from_utf8_lossy(&output.stdout).contains("Files are different."));
}

#[test]
fn usage_errors_exit_with_two() {
    let dir = tempfile::tempdir().unwrap();
    let missing = dir.path().join("missing.json");

    assert_eq!(rion(&[]).status.code(), Some(2));
    assert_eq!(rion(&[&missing]).status.code(), Some(2));
    assert_eq!(rion(&[Path::new("-e"), &missing]).status.code(), Some(2));
}

#[test]
fn equals_with_missing_file_exits_with_one() {
    let dir = tempfile::tempdir().unwrap();
    let missing = dir.path().join("missing.stringtable");

    assert_eq!(
        rion(&[Path::new("-e"), &missing, &missing]).status.code(),
        Some(1)
    );
}

#[test]
fn help_and_version_exit_with_zero() {
    let output = rion(&[Path::new("--help")]);
    assert_eq!(output.status.code(), Some(0));
    assert!(String::from_utf8_lossy(&output.stdout).contains("--equals"));

    let output = rion(&[Path::new("-v")]);
    assert_eq!(output.status.code(), Some(0));
    assert!(String::from_utf8_lossy(&output.stdout).contains(env!("CARGO_PKG_VERSION")));
}
