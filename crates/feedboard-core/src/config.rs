use crate::error::BoardError;
use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::env;
use std::path::{Path, PathBuf};

/// Environment variable naming an explicit config file.
pub const CONFIG_ENV: &str = "FEEDBOARD_CONFIG";

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct BoardConfig {
    #[serde(default)]
    pub board: SeedConfig,
    #[serde(default)]
    pub display: DisplayConfig,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SeedConfig {
    /// Start each session with the demo tasks.
    #[serde(default = "default_true")]
    pub seed: bool,
}

impl Default for SeedConfig {
    fn default() -> Self {
        Self {
            seed: default_true(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DisplayConfig {
    #[serde(default = "default_description_preview")]
    pub description_preview: usize,
    /// `pretty`, `text` or `json`; unset falls back to TTY detection.
    #[serde(default)]
    pub output: Option<String>,
}

impl Default for DisplayConfig {
    fn default() -> Self {
        Self {
            description_preview: default_description_preview(),
            output: None,
        }
    }
}

/// Load config from `path`. A missing file yields the defaults.
///
/// # Errors
///
/// Returns an error if the file exists but cannot be read, or wraps
/// [`BoardError::ConfigParse`] if it is not valid TOML for [`BoardConfig`].
pub fn load_config(path: &Path) -> Result<BoardConfig> {
    if !path.exists() {
        return Ok(BoardConfig::default());
    }

    let content = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read {}", path.display()))?;

    toml::from_str::<BoardConfig>(&content).map_err(|err| {
        BoardError::ConfigParse {
            path: path.display().to_string(),
            reason: err.message().to_string(),
        }
        .into()
    })
}

/// Config file location: `FEEDBOARD_CONFIG`, else
/// `<config_dir>/feedboard/config.toml`.
#[must_use]
pub fn config_path() -> Option<PathBuf> {
    resolve_config_path(env::var_os(CONFIG_ENV).map(PathBuf::from), dirs::config_dir())
}

fn resolve_config_path(explicit: Option<PathBuf>, config_dir: Option<PathBuf>) -> Option<PathBuf> {
    explicit
        .filter(|path| !path.as_os_str().is_empty())
        .or_else(|| config_dir.map(|dir| dir.join("feedboard/config.toml")))
}

/// Load from [`config_path`], or defaults when no location resolves.
///
/// # Errors
///
/// Same as [`load_config`].
pub fn resolve_config() -> Result<BoardConfig> {
    match config_path() {
        Some(path) => load_config(&path),
        None => Ok(BoardConfig::default()),
    }
}

const fn default_true() -> bool {
    true
}

const fn default_description_preview() -> usize {
    100
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_config_uses_defaults() {
        let dir = tempfile::tempdir().expect("temp dir");
        let cfg = load_config(&dir.path().join("absent.toml")).expect("load should succeed");
        assert!(cfg.board.seed);
        assert_eq!(cfg.display.description_preview, 100);
        assert!(cfg.display.output.is_none());
    }

    #[test]
    fn partial_config_keeps_other_defaults() {
        let dir = tempfile::tempdir().expect("temp dir");
        let path = dir.path().join("config.toml");
        std::fs::write(&path, "[board]\nseed = false\n").expect("write config");

        let cfg = load_config(&path).expect("load should succeed");
        assert!(!cfg.board.seed);
        assert_eq!(cfg.display.description_preview, 100);
    }

    #[test]
    fn display_section_parses() {
        let dir = tempfile::tempdir().expect("temp dir");
        let path = dir.path().join("config.toml");
        std::fs::write(
            &path,
            "[display]\ndescription_preview = 40\noutput = \"json\"\n",
        )
        .expect("write config");

        let cfg = load_config(&path).expect("load should succeed");
        assert_eq!(cfg.display.description_preview, 40);
        assert_eq!(cfg.display.output.as_deref(), Some("json"));
    }

    #[test]
    fn invalid_toml_reports_config_parse_error() {
        let dir = tempfile::tempdir().expect("temp dir");
        let path = dir.path().join("config.toml");
        std::fs::write(&path, "[board]\nseed = \"sometimes\"\n").expect("write config");

        let err = load_config(&path).unwrap_err();
        let board_err = err.downcast_ref::<BoardError>().expect("typed error");
        assert!(matches!(board_err, BoardError::ConfigParse { .. }));
    }

    #[test]
    fn explicit_path_wins_over_config_dir() {
        let resolved = resolve_config_path(
            Some(PathBuf::from("/tmp/fb.toml")),
            Some(PathBuf::from("/home/u/.config")),
        );
        assert_eq!(resolved, Some(PathBuf::from("/tmp/fb.toml")));

        let resolved = resolve_config_path(
            Some(PathBuf::new()),
            Some(PathBuf::from("/home/u/.config")),
        );
        assert_eq!(
            resolved,
            Some(PathBuf::from("/home/u/.config/feedboard/config.toml"))
        );

        assert_eq!(resolve_config_path(None, None), None);
    }
}
