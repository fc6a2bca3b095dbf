use std::fs;
use std::path::PathBuf;
use std::time::Duration;

use tempfile::TempDir;
use todo_tui::config::{Config, ConfigError};

fn write_config(dir: &TempDir, content: &str) -> PathBuf {
    let path = dir.path().join("config.toml");
    fs::write(&path, content).unwrap();
    path
}

#[test]
fn missing_file_gives_defaults() {
    let dir = TempDir::new().unwrap();

    let config = Config::load_from(&dir.path().join("absent.toml")).unwrap();

    assert_eq!(config, Config::default());
    assert_eq!(config.tick_rate(), Duration::from_millis(200));
    assert!(config.print_state_on_exit);
}

#[test]
fn partial_file_keeps_other_defaults() {
    let dir = TempDir::new().unwrap();
    let path = write_config(&dir, "log_file = \"/tmp/todo.log\"\n");

    let config = Config::load_from(&path).unwrap();

    assert_eq!(config.log_file, Some(PathBuf::from("/tmp/todo.log")));
    assert_eq!(config.tick_rate_ms, 200);
}

#[test]
fn full_file_is_read() {
    let dir = TempDir::new().unwrap();
    let path = write_config(&dir, "tick_rate_ms = 50\nprint_state_on_exit = false\n");

    let config = Config::load_from(&path).unwrap();

    assert_eq!(config.tick_rate(), Duration::from_millis(50));
    assert!(!config.print_state_on_exit);
}

#[test]
fn zero_tick_rate_is_rejected() {
    let dir = TempDir::new().unwrap();
    let path = write_config(&dir, "tick_rate_ms = 0\n");

    let err = Config::load_from(&path).unwrap_err();

    assert!(matches!(err, ConfigError::ValidationError { .. }));
}

#[test]
fn malformed_toml_reports_the_path() {
    let dir = TempDir::new().unwrap();
    let path = write_config(&dir, "tick_rate_ms = \"fast\"\n");

    let err = Config::load_from(&path).unwrap_err();

    assert!(matches!(err, ConfigError::ParseError { .. }));
    assert!(err.to_string().contains("config.toml"));
}
