use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use log::info;
use serde::{Deserialize, Serialize};

use crate::error::SnakeError;
use crate::geometry::{Layout, CELL_SIZE};

pub const CONFIG_ENV: &str = "SNAKE_CONFIG";
pub const DEFAULT_CONFIG_PATH: &str = "snake.json";

/// Window and loop settings. Every field may be left out of the file.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
#[serde(default)]
pub struct GameConfig {
    pub canvas_width: u32,
    pub canvas_height: u32,
    pub scoreboard_height: u32,
    /// Simulation steps per second.
    pub ticks_per_second: u32,
    pub resource_dir: PathBuf,
    /// Fixed seed for food placement; random when absent.
    pub seed: Option<u64>,
}

impl Default for GameConfig {
    fn default() -> Self {
        GameConfig {
            canvas_width: 400,
            canvas_height: 450,
            scoreboard_height: 50,
            ticks_per_second: 8,
            resource_dir: PathBuf::from("./resources"),
            seed: None,
        }
    }
}

impl GameConfig {
    /// Reads `$SNAKE_CONFIG`, or `snake.json` in the working directory.
    pub fn load() -> Result<Self, SnakeError> {
        let path = std::env::var(CONFIG_ENV).unwrap_or_else(|_| DEFAULT_CONFIG_PATH.to_string());
        Self::load_from(Path::new(&path))
    }

    /// A missing file means defaults; anything else that goes wrong is an error.
    pub fn load_from(path: &Path) -> Result<Self, SnakeError> {
        let config = match fs::read_to_string(path) {
            Ok(contents) => {
                info!("loading config from {}", path.display());
                Self::from_json(&contents, path)?
            }
            Err(e) if e.kind() == ErrorKind::NotFound => {
                info!("no config at {}, using defaults", path.display());
                GameConfig::default()
            }
            Err(source) => {
                return Err(SnakeError::ConfigIo {
                    path: path.display().to_string(),
                    source,
                })
            }
        };
        config.validate()?;
        Ok(config)
    }

    fn from_json(contents: &str, path: &Path) -> Result<Self, SnakeError> {
        serde_json::from_str(contents).map_err(|source| SnakeError::ConfigParse {
            path: path.display().to_string(),
            source,
        })
    }

    pub fn validate(&self) -> Result<(), SnakeError> {
        let cell = CELL_SIZE as u32;
        if self.ticks_per_second == 0 {
            return Err(SnakeError::InvalidConfig("ticks_per_second must be non-zero"));
        }
        if self.scoreboard_height >= self.canvas_height {
            return Err(SnakeError::InvalidConfig(
                "scoreboard_height must leave room for the play area",
            ));
        }
        let play_height = self.canvas_height - self.scoreboard_height;
        if self.canvas_width < cell || play_height < cell {
            return Err(SnakeError::InvalidConfig("play area is smaller than one cell"));
        }
        if self.canvas_width % cell != 0 || play_height % cell != 0 {
            return Err(SnakeError::InvalidConfig(
                "play area dimensions must be multiples of the cell size",
            ));
        }
        if self.canvas_width > i16::MAX as u32 || self.canvas_height > i16::MAX as u32 {
            return Err(SnakeError::InvalidConfig("canvas is too large"));
        }
        Ok(())
    }

    pub fn layout(&self) -> Layout {
        Layout::new(self.canvas_width, self.canvas_height, self.scoreboard_height)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_are_valid() {
        let config = GameConfig::default();
        assert!(config.validate().is_ok());
        let grid = config.layout().grid();
        assert_eq!((grid.width, grid.height), (20, 20));
    }

    #[test]
    fn partial_json_fills_in_defaults() {
        let config =
            GameConfig::from_json(r#"{ "ticks_per_second": 12, "seed": 99 }"#, Path::new("t"))
                .expect("parse");
        assert_eq!(config.ticks_per_second, 12);
        assert_eq!(config.seed, Some(99));
        assert_eq!(config.canvas_width, 400);
        assert_eq!(config.resource_dir, PathBuf::from("./resources"));
    }

    #[test]
    fn garbage_json_is_a_parse_error() {
        let err = GameConfig::from_json("{ nope", Path::new("bad.json")).unwrap_err();
        assert!(matches!(err, SnakeError::ConfigParse { .. }));
        assert!(err.to_string().contains("bad.json"));
    }

    #[test]
    fn rejects_bad_values() {
        let zero_rate = GameConfig {
            ticks_per_second: 0,
            ..GameConfig::default()
        };
        assert!(matches!(zero_rate.validate(), Err(SnakeError::InvalidConfig(_))));

        let ragged = GameConfig {
            canvas_width: 410,
            ..GameConfig::default()
        };
        assert!(matches!(ragged.validate(), Err(SnakeError::InvalidConfig(_))));

        let no_room = GameConfig {
            scoreboard_height: 450,
            ..GameConfig::default()
        };
        assert!(matches!(no_room.validate(), Err(SnakeError::InvalidConfig(_))));
    }

    #[test]
    fn missing_file_means_defaults() {
        let path = std::env::temp_dir().join("snake-config-that-does-not-exist.json");
        let config = GameConfig::load_from(&path).expect("defaults");
        assert_eq!(config, GameConfig::default());
    }

    #[test]
    fn reads_a_file_from_disk() {
        let path = std::env::temp_dir().join(format!("snake-config-{}.json", std::process::id()));
        fs::write(&path, r#"{ "canvas_width": 600, "canvas_height": 650 }"#).expect("write");
        let loaded = GameConfig::load_from(&path);
        let _ = fs::remove_file(&path);

        let config = loaded.expect("load");
        assert_eq!(config.layout().grid().width, 30);
        assert_eq!(config.layout().grid().height, 30);
    }
}
