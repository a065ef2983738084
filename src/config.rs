//! Tunable game constants.
//!
//! Defaults are compiled in, a JSON file can override any subset of them and
//! CLI flags override both (see `cli.rs`).

use std::path::Path;
use std::time::Duration;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Upper bound on `initial_lives`; the HUD draws one heart per life.
pub const MAX_LIVES: u32 = 99;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("word catalog is empty")]
    EmptyCatalog,
    #[error("word #{0} in the catalog is blank")]
    BlankWord(usize),
    #[error("initial lives must be at least 1")]
    NoLives,
    #[error("initial lives must be at most {0}")]
    TooManyLives(u32),
    #[error("{0} must be greater than zero")]
    ZeroInterval(&'static str),
    #[error("invalid speed range {min}..={max}")]
    InvalidSpeedRange { min: f32, max: f32 },
    #[error("failed to read {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },
    #[error("failed to parse {path}: {source}")]
    Parse {
        path: String,
        #[source]
        source: serde_json::Error,
    },
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GameConfig {
    /// Lives at the start of every session, including after a reset.
    pub initial_lives: u32,
    pub spawn_interval_ms: u64,
    pub frame_interval_ms: u64,
    /// Fall speed bounds in rows per frame.
    pub speed_min: f32,
    pub speed_max: f32,
    /// Replaces the built-in catalog when present.
    pub words: Option<Vec<String>>,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            initial_lives: 3,
            spawn_interval_ms: 2500,
            frame_interval_ms: 33,
            speed_min: 0.04,
            speed_max: 0.12,
            words: None,
        }
    }
}

impl GameConfig {
    pub fn from_file(path: &Path) -> Result<Self, ConfigError> {
        let display = path.display().to_string();
        let text = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: display.clone(),
            source,
        })?;
        serde_json::from_str(&text).map_err(|source| ConfigError::Parse {
            path: display,
            source,
        })
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.initial_lives == 0 {
            return Err(ConfigError::NoLives);
        }
        if self.initial_lives > MAX_LIVES {
            return Err(ConfigError::TooManyLives(MAX_LIVES));
        }
        if self.spawn_interval_ms == 0 {
            return Err(ConfigError::ZeroInterval("spawn_interval_ms"));
        }
        if self.frame_interval_ms == 0 {
            return Err(ConfigError::ZeroInterval("frame_interval_ms"));
        }
        let (min, max) = (self.speed_min, self.speed_max);
        if !min.is_finite() || !max.is_finite() || min <= 0.0 || min > max {
            return Err(ConfigError::InvalidSpeedRange { min, max });
        }
        Ok(())
    }

    pub fn spawn_interval(&self) -> Duration {
        Duration::from_millis(self.spawn_interval_ms)
    }

    pub fn frame_interval(&self) -> Duration {
        Duration::from_millis(self.frame_interval_ms)
    }
}
