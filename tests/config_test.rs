//! Tests for loading configuration files.

use std::io::Write;
use tictactoe_engine::{EngineConfig, GameMode};

#[test]
fn test_from_file() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    writeln!(file, "[game]\nmode = \"pvp\"\n\n[ai]\nseed = 9").unwrap();

    let config = EngineConfig::from_file(file.path()).unwrap();
    assert_eq!(*config.game().mode(), Some(GameMode::PvP));
    assert_eq!(*config.ai().seed(), Some(9));
    assert_eq!(*config.ai().delay_ms(), 600);
}

#[test]
fn test_missing_file_uses_defaults() {
    let dir = tempfile::tempdir().unwrap();
    let config = EngineConfig::load_or_default(dir.path().join("absent.toml")).unwrap();
    assert_eq!(config, EngineConfig::default());
}

#[test]
fn test_missing_file_is_error_for_from_file() {
    let dir = tempfile::tempdir().unwrap();
    let err = EngineConfig::from_file(dir.path().join("absent.toml")).unwrap_err();
    assert!(err.to_string().contains("Failed to read config file"));
}

#[test]
fn test_malformed_file_is_error() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    writeln!(file, "[ai]\ndelay_ms = \"soon\"").unwrap();
    let err = EngineConfig::load_or_default(file.path()).unwrap_err();
    assert!(err.to_string().contains("Failed to parse config"));
}
