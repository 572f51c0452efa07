//! Tests for loading settings from disk.

use std::io::Write;
use std::path::Path;
use tictactoe::Settings;

#[test]
fn test_missing_file_uses_defaults() {
    let dir = tempfile::tempdir().unwrap();
    let settings = Settings::load(&dir.path().join("absent.toml")).unwrap();
    assert_eq!(settings, Settings::default());
}

#[test]
fn test_loads_file() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    writeln!(file, "title = \"Noughts and Crosses\"").unwrap();
    writeln!(file, "mouse = false").unwrap();
    writeln!(file, "log_file = \"game.log\"").unwrap();

    let settings = Settings::load(file.path()).unwrap();
    assert_eq!(settings.title(), "Noughts and Crosses");
    assert!(!*settings.mouse());
    assert_eq!(settings.log_file(), Path::new("game.log"));
}

#[test]
fn test_invalid_file_is_an_error() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    writeln!(file, "cell_height = 0").unwrap();

    let err = Settings::load(file.path()).unwrap_err();
    assert!(err.to_string().contains("cell_height"));
}

#[test]
fn test_cli_log_file_override() {
    let settings = Settings::default().with_log_file("other.log".into());
    assert_eq!(settings.log_file(), Path::new("other.log"));
}
