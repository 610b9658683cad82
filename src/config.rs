// Configuration loading and parsing (config/balancer.toml).

use std::path::{Path, PathBuf};

use serde::Deserialize;
use thiserror::Error;

use crate::balance::scoring::NEUTRAL_SCORE;

// ---------------------------------------------------------------------------
// Error types
// ---------------------------------------------------------------------------

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config file {path}: {source}")]
    ReadError {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("failed to parse config file {path}: {source}")]
    ParseError {
        path: PathBuf,
        source: toml::de::Error,
    },

    #[error("validation error for field `{field}`: {message}")]
    ValidationError { field: String, message: String },
}

// ---------------------------------------------------------------------------
// Config structs
// ---------------------------------------------------------------------------

/// Session rules: how many players a roster holds.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct SessionRules {
    pub roster_size: usize,
}

impl Default for SessionRules {
    fn default() -> Self {
        SessionRules { roster_size: 10 }
    }
}

/// The scale voters rate players on, and the score of an unrated player.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct RatingScale {
    pub min: u8,
    pub max: u8,
    pub default_score: f64,
}

impl Default for RatingScale {
    fn default() -> Self {
        RatingScale {
            min: 1,
            max: 10,
            default_score: NEUTRAL_SCORE,
        }
    }
}

/// Assembled configuration for a balancing run.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct Config {
    pub session: SessionRules,
    pub ratings: RatingScale,
}

// ---------------------------------------------------------------------------
// Loading logic
// ---------------------------------------------------------------------------

/// Load configuration from `config/balancer.toml` relative to the current
/// working directory. A missing file is not an error: defaults apply.
pub fn load_config() -> Result<Config, ConfigError> {
    let base_dir = std::env::current_dir().map_err(|e| ConfigError::ReadError {
        path: PathBuf::from("."),
        source: e,
    })?;
    load_config_from(&base_dir)
}

/// Load and validate configuration from `config/balancer.toml` relative to
/// the given `base_dir`, falling back to defaults when the file is absent.
pub(crate) fn load_config_from(base_dir: &Path) -> Result<Config, ConfigError> {
    let path = base_dir.join("config").join("balancer.toml");

    if !path.exists() {
        return Ok(Config::default());
    }

    let text = std::fs::read_to_string(&path).map_err(|e| ConfigError::ReadError {
        path: path.clone(),
        source: e,
    })?;
    let config: Config = toml::from_str(&text).map_err(|e| ConfigError::ParseError {
        path: path.clone(),
        source: e,
    })?;

    validate(&config)?;

    Ok(config)
}

fn validate(config: &Config) -> Result<(), ConfigError> {
    if config.session.roster_size < 2 {
        return Err(ConfigError::ValidationError {
            field: "session.roster_size".into(),
            message: "must be at least 2".into(),
        });
    }
    if config.ratings.min < 1 {
        return Err(ConfigError::ValidationError {
            field: "ratings.min".into(),
            message: "must be at least 1".into(),
        });
    }
    if config.ratings.min >= config.ratings.max {
        return Err(ConfigError::ValidationError {
            field: "ratings.max".into(),
            message: format!("must be greater than ratings.min ({})", config.ratings.min),
        });
    }
    let default_score = config.ratings.default_score;
    if !default_score.is_finite()
        || default_score < f64::from(config.ratings.min)
        || default_score > f64::from(config.ratings.max)
    {
        return Err(ConfigError::ValidationError {
            field: "ratings.default_score".into(),
            message: "must lie within the rating scale".into(),
        });
    }
    Ok(())
}
