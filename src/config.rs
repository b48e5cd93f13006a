//! Application configuration
//!
//! Read from an optional TOML file; every field falls back to its default,
//! and command line flags are applied on top by `main`.

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

use crate::game::GameConfig;
use crate::render::StyleKind;

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    pub game: GameConfig,
    pub display: DisplayConfig,
    pub storage: StorageConfig,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DisplayConfig {
    pub style: StyleKind,
    pub show_grid: bool,
}

impl Default for DisplayConfig {
    fn default() -> Self {
        Self {
            style: StyleKind::Accented,
            show_grid: true,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct StorageConfig {
    /// Directory holding the high score file
    pub dir: PathBuf,
}

impl Default for StorageConfig {
    fn default() -> Self {
        Self {
            dir: PathBuf::from(".snake"),
        }
    }
}

impl AppConfig {
    pub fn load(path: &Path) -> Result<Self> {
        let text = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file {:?}", path))?;
        Self::from_toml_str(&text).with_context(|| format!("Invalid config file {:?}", path))
    }

    pub fn from_toml_str(text: &str) -> Result<Self> {
        toml::from_str(text).context("Failed to parse TOML")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game::Cell;
    use tempfile::TempDir;

    #[test]
    fn test_empty_file_gives_defaults() {
        let config = AppConfig::from_toml_str("").unwrap();
        assert_eq!(config, AppConfig::default());
        assert_eq!(config.game.tile_count(), 20);
        assert_eq!(config.storage.dir, PathBuf::from(".snake"));
    }

    #[test]
    fn test_partial_sections() {
        let config = AppConfig::from_toml_str(
            r#"
            [game]
            canvas_size = 600
            cell_size = 30
            tick_interval_ms = 330
            start_cell = { x = 2, y = 3 }

            [display]
            style = "plain"
            "#,
        )
        .unwrap();

        assert_eq!(config.game.tile_count(), 20);
        assert_eq!(config.game.tick_interval_ms, 330);
        assert_eq!(config.game.food_reward, 10);
        assert_eq!(config.game.start(), Cell::new(2, 3));
        assert_eq!(config.display.style, StyleKind::Plain);
        assert!(config.display.show_grid);
    }

    #[test]
    fn test_load_from_file() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("snake.toml");
        std::fs::write(&path, "[storage]\ndir = \"scores\"\n").unwrap();

        let config = AppConfig::load(&path).unwrap();
        assert_eq!(config.storage.dir, PathBuf::from("scores"));
    }

    #[test]
    fn test_bad_toml_is_an_error() {
        assert!(AppConfig::from_toml_str("[game]\ncell_size = \"big\"").is_err());
        assert!(AppConfig::load(Path::new("/nonexistent/snake.toml")).is_err());
    }
}
