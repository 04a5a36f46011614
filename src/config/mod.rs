use std::env;
use std::path::{Path, PathBuf};

use serde::Deserialize;

use crate::common::file::read_file;
use crate::queue::QUEUE_CAPACITY;

pub const CONFIG_ENV_VAR: &str = "PIECE_QUEUE_CONFIG";
pub const DEFAULT_CONFIG_PATH: &str = "piece_queue.json";

#[derive(thiserror::Error, Debug, Clone, PartialEq)]
pub enum ConfigError {
    #[error("Cannot read config file {0}: {1}")]
    Read(String, String),
    #[error("Malformed config file {0}: {1}")]
    Parse(String, String),
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Config {
    /// Fixed seed for piece kinds; the clock is used when absent.
    pub seed: Option<u64>,
    /// Pieces enqueued before the first prompt.
    pub initial_pieces: usize,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            seed: None,
            initial_pieces: QUEUE_CAPACITY,
        }
    }
}

impl Config {
    /// Loads the file named by `PIECE_QUEUE_CONFIG`, or `piece_queue.json`.
    pub fn load() -> Result<Config, ConfigError> {
        let path = env::var_os(CONFIG_ENV_VAR)
            .map(PathBuf::from)
            .unwrap_or_else(|| PathBuf::from(DEFAULT_CONFIG_PATH));

        Config::from_path(&path)
    }

    pub fn from_path(path: &Path) -> Result<Config, ConfigError> {
        let display = path.display().to_string();

        match read_file(path).map_err(|err| ConfigError::Read(display.clone(), err.to_string()))? {
            Some(contents) => {
                log::info!("Config loaded from {}", display);
                Config::from_json(&contents)
                    .map_err(|err| ConfigError::Parse(display, err.to_string()))
            }
            None => {
                log::debug!("No config file at {}, using defaults", display);
                Ok(Config::default())
            }
        }
    }

    fn from_json(contents: &str) -> Result<Config, serde_json::Error> {
        let mut config: Config = serde_json::from_str(contents)?;

        if config.initial_pieces > QUEUE_CAPACITY {
            log::warn!(
                "initial_pieces {} exceeds queue capacity, clamping to {}",
                config.initial_pieces,
                QUEUE_CAPACITY
            );
            config.initial_pieces = QUEUE_CAPACITY;
        }

        Ok(config)
    }
}
