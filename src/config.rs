//! Runtime configuration from environment variables.
//!
//! | Variable | Default | Meaning |
//! |----------|---------|---------|
//! | `SNAKE_STEP_MS` | 100 | Minimum time between advances |
//! | `SNAKE_FRAME_MS` | 16 | Frame heartbeat |
//! | `SNAKE_BOARD_WIDTH` | 20 | Board width in cells |
//! | `SNAKE_BOARD_HEIGHT` | 20 | Board height in cells |
//! | `SNAKE_CELL_SIZE` | 20 | Cell size in pixels (10x20 pixels per glyph) |
//! | `SNAKE_SEED` | clock | Seed for the sequence of games |
//! | `SNAKE_LOG_PATH` | unset | Write logs to this file (`RUST_LOG` filters) |
//!
//! Empty values count as unset.

use std::path::PathBuf;

use thiserror::Error;

use crate::types::{GridDims, Millis, FRAME_INTERVAL_MS, STEP_LENGTH_MS};

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("{var}: expected a non-negative integer, got {value:?}")]
    InvalidNumber { var: &'static str, value: String },

    #[error("{var} must be greater than zero")]
    Zero { var: &'static str },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameConfig {
    pub step_length_ms: Millis,
    pub frame_interval_ms: Millis,
    pub dims: GridDims,
    /// `None` picks a seed from the clock at startup.
    pub seed: Option<u32>,
    pub log_path: Option<PathBuf>,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            step_length_ms: STEP_LENGTH_MS,
            frame_interval_ms: FRAME_INTERVAL_MS,
            dims: GridDims::default(),
            seed: None,
            log_path: None,
        }
    }
}

impl GameConfig {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|var| std::env::var(var).ok())
    }

    /// Build a config from an arbitrary variable lookup.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let get = |var: &str| {
            lookup(var)
                .map(|s| s.trim().to_string())
                .filter(|s| !s.is_empty())
        };

        let defaults = Self::default();
        let step_length_ms = parse_positive(&get, "SNAKE_STEP_MS", defaults.step_length_ms)?;
        let frame_interval_ms = parse_positive(&get, "SNAKE_FRAME_MS", defaults.frame_interval_ms)?;
        let width = parse_positive(&get, "SNAKE_BOARD_WIDTH", defaults.dims.width)?;
        let height = parse_positive(&get, "SNAKE_BOARD_HEIGHT", defaults.dims.height)?;
        let cell_size = parse_positive(&get, "SNAKE_CELL_SIZE", defaults.dims.cell_size)?;

        let seed = match get("SNAKE_SEED") {
            Some(v) => Some(v.parse::<u32>().map_err(|_| ConfigError::InvalidNumber {
                var: "SNAKE_SEED",
                value: v,
            })?),
            None => None,
        };

        Ok(Self {
            step_length_ms,
            frame_interval_ms,
            dims: GridDims::new(cell_size, width, height),
            seed,
            log_path: get("SNAKE_LOG_PATH").map(PathBuf::from),
        })
    }
}

fn parse_positive<T>(
    get: &impl Fn(&str) -> Option<String>,
    var: &'static str,
    default: T,
) -> Result<T, ConfigError>
where
    T: std::str::FromStr + Default + PartialEq,
{
    let Some(raw) = get(var) else {
        return Ok(default);
    };
    let value = raw
        .parse::<T>()
        .map_err(|_| ConfigError::InvalidNumber { var, value: raw })?;
    if value == T::default() {
        return Err(ConfigError::Zero { var });
    }
    Ok(value)
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;

    use super::*;

    fn lookup(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |var| map.get(var).cloned()
    }

    #[test]
    fn empty_environment_gives_defaults() {
        let config = GameConfig::from_lookup(lookup(&[])).unwrap();
        assert_eq!(config, GameConfig::default());
        assert_eq!(config.dims, GridDims::new(20, 20, 20));
        assert_eq!(config.step_length_ms, 100);
    }

    #[test]
    fn overrides_are_applied() {
        let config = GameConfig::from_lookup(lookup(&[
            ("SNAKE_STEP_MS", "80"),
            ("SNAKE_FRAME_MS", " 8 "),
            ("SNAKE_BOARD_WIDTH", "30"),
            ("SNAKE_BOARD_HEIGHT", "15"),
            ("SNAKE_CELL_SIZE", "40"),
            ("SNAKE_SEED", "7"),
            ("SNAKE_LOG_PATH", "/tmp/snake.log"),
        ]))
        .unwrap();
        assert_eq!(config.step_length_ms, 80);
        assert_eq!(config.frame_interval_ms, 8);
        assert_eq!(config.dims, GridDims::new(40, 30, 15));
        assert_eq!(config.seed, Some(7));
        assert_eq!(config.log_path, Some(PathBuf::from("/tmp/snake.log")));
    }

    #[test]
    fn blank_values_count_as_unset() {
        let config =
            GameConfig::from_lookup(lookup(&[("SNAKE_SEED", "  "), ("SNAKE_LOG_PATH", "")])).unwrap();
        assert_eq!(config.seed, None);
        assert_eq!(config.log_path, None);
    }

    #[test]
    fn invalid_numbers_are_rejected() {
        let err = GameConfig::from_lookup(lookup(&[("SNAKE_BOARD_WIDTH", "wide")])).unwrap_err();
        assert_eq!(
            err,
            ConfigError::InvalidNumber {
                var: "SNAKE_BOARD_WIDTH",
                value: "wide".to_string()
            }
        );
        assert!(GameConfig::from_lookup(lookup(&[("SNAKE_STEP_MS", "-5")])).is_err());
        assert!(GameConfig::from_lookup(lookup(&[("SNAKE_SEED", "x")])).is_err());
    }

    #[test]
    fn zero_dimensions_are_rejected() {
        let err = GameConfig::from_lookup(lookup(&[("SNAKE_BOARD_HEIGHT", "0")])).unwrap_err();
        assert_eq!(err, ConfigError::Zero { var: "SNAKE_BOARD_HEIGHT" });
        assert_eq!(
            err.to_string(),
            "SNAKE_BOARD_HEIGHT must be greater than zero"
        );
    }
}
