//! Game configuration: defaults, JSON loading and validation.

use crate::constants::*;
use crate::sim::obstacles::TrackSettings;
use crate::sim::round::RoundSettings;
use crate::sim::types::{Field, TubeGeometry};
use crate::utils::persistence;
use serde::{Deserialize, Serialize};
use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Everything that can go wrong turning a config file into a `GameConfig`.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("could not read config {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("invalid config JSON: {0}")]
    Parse(#[from] serde_json::Error),
    #[error("field {width}x{height} is too small (minimum 16x16)")]
    FieldTooSmall { width: i32, height: i32 },
    #[error("{name} must be positive, got {value}")]
    NotPositive { name: &'static str, value: f64 },
    #[error("tube_lead_in must not be negative, got {0}")]
    NegativeLeadIn(f64),
    #[error("gap_margin must be at least 2, got {0}")]
    GapMarginTooSmall(i32),
    #[error("gap range {min}..={max} must satisfy 1 <= min <= max <= {limit}")]
    GapRange { min: i32, max: i32, limit: i32 },
    #[error("initial_gap_heights must not be empty")]
    NoGapHeights,
    #[error("initial gap height {0} is outside the allowed range")]
    GapHeightOutOfRange(i32),
    #[error("initial_tube_offsets must contain at least one non-negative offset")]
    BadTubeOffsets,
    #[error("tick_interval_ms must be positive")]
    ZeroTickInterval,
}

/// Tuning for a session. Missing keys in a JSON file fall back to the defaults.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GameConfig {
    pub field_width: i32,
    pub field_height: i32,
    pub tube_width: f64,
    pub tube_speed: f64,
    pub tube_interval: f64,
    pub tube_lead_in: f64,
    pub gap_margin: i32,
    pub min_gap_height: i32,
    /// Derived from the field height and margin when absent.
    pub max_gap_height: Option<i32>,
    pub initial_gap_heights: Vec<i32>,
    pub initial_tube_offsets: Vec<f64>,
    pub start_x: f64,
    pub start_y: f64,
    pub tick_interval_ms: u64,
    /// Seed for the session generator. `None` seeds from the clock.
    pub seed: Option<u64>,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            field_width: FIELD_WIDTH,
            field_height: FIELD_HEIGHT,
            tube_width: TUBE_WIDTH,
            tube_speed: TUBE_SPEED,
            tube_interval: TUBE_INTERVAL,
            tube_lead_in: TUBE_LEAD_IN,
            gap_margin: GAP_MARGIN,
            min_gap_height: MIN_GAP_HEIGHT,
            max_gap_height: None,
            initial_gap_heights: INITIAL_GAP_HEIGHTS.to_vec(),
            initial_tube_offsets: INITIAL_TUBE_OFFSETS.to_vec(),
            start_x: START_X,
            start_y: START_Y,
            tick_interval_ms: TICK_INTERVAL_MS,
            seed: None,
        }
    }
}

impl GameConfig {
    /// Parse and validate a JSON document.
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        let config: GameConfig = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Read and validate a config file.
    pub fn from_file(path: &Path) -> Result<Self, ConfigError> {
        let json = fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_json(&json)
    }

    /// Load from an explicit path, else `~/.tubes/config.json` if it exists, else defaults.
    pub fn load(explicit: Option<&Path>) -> Result<Self, ConfigError> {
        if let Some(path) = explicit {
            log::info!("loading config from {}", path.display());
            return Self::from_file(path);
        }
        match default_config_path() {
            Some(path) if path.exists() => {
                log::info!("loading config from {}", path.display());
                Self::from_file(&path)
            }
            _ => {
                log::info!("no config file, using defaults");
                Ok(Self::default())
            }
        }
    }

    /// Write this config to `~/.tubes/config.json`.
    pub fn save_default_location(&self) -> io::Result<PathBuf> {
        persistence::save_json(CONFIG_FILE_NAME, self)?;
        persistence::save_path(CONFIG_FILE_NAME)
    }

    /// The configured seed, or one taken from the clock.
    pub fn session_seed(&self) -> u64 {
        self.seed.unwrap_or_else(clock_seed)
    }

    /// Largest gap height that still leaves the upper pillar a non-negative height.
    pub fn gap_limit(&self) -> i32 {
        self.field_height - self.gap_margin - 1
    }

    pub fn max_gap_height(&self) -> i32 {
        self.max_gap_height.unwrap_or_else(|| self.gap_limit())
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.field_width < 16 || self.field_height < 16 {
            return Err(ConfigError::FieldTooSmall {
                width: self.field_width,
                height: self.field_height,
            });
        }
        for (name, value) in [
            ("tube_width", self.tube_width),
            ("tube_speed", self.tube_speed),
            ("tube_interval", self.tube_interval),
        ] {
            if value.is_nan() || value <= 0.0 {
                return Err(ConfigError::NotPositive { name, value });
            }
        }
        if self.tube_lead_in.is_nan() || self.tube_lead_in < 0.0 {
            return Err(ConfigError::NegativeLeadIn(self.tube_lead_in));
        }
        if self.gap_margin < 2 {
            return Err(ConfigError::GapMarginTooSmall(self.gap_margin));
        }

        let (min, max, limit) = (self.min_gap_height, self.max_gap_height(), self.gap_limit());
        if min < 1 || min > max || max > limit {
            return Err(ConfigError::GapRange { min, max, limit });
        }
        if self.initial_gap_heights.is_empty() {
            return Err(ConfigError::NoGapHeights);
        }
        if let Some(&bad) = self
            .initial_gap_heights
            .iter()
            .find(|&&h| h < 1 || h > limit)
        {
            return Err(ConfigError::GapHeightOutOfRange(bad));
        }
        if self.initial_tube_offsets.is_empty()
            || self
                .initial_tube_offsets
                .iter()
                .any(|o| o.is_nan() || *o < 0.0)
        {
            return Err(ConfigError::BadTubeOffsets);
        }
        if self.tick_interval_ms == 0 {
            return Err(ConfigError::ZeroTickInterval);
        }
        Ok(())
    }

    pub fn field(&self) -> Field {
        Field::new(self.field_width, self.field_height)
    }

    pub fn geometry(&self) -> TubeGeometry {
        TubeGeometry {
            width: self.tube_width,
            gap_margin: self.gap_margin,
        }
    }

    pub fn track_settings(&self) -> TrackSettings {
        TrackSettings {
            field: self.field(),
            spawn_interval: self.tube_interval,
            lead_in: self.tube_lead_in,
            min_gap: self.min_gap_height,
            max_gap: self.max_gap_height(),
            initial_gap_heights: self.initial_gap_heights.clone(),
            initial_offsets: self.initial_tube_offsets.clone(),
        }
    }

    pub fn round_settings(&self) -> RoundSettings {
        RoundSettings {
            track: self.track_settings(),
            geometry: self.geometry(),
            speed: self.tube_speed,
            start_x: self.start_x,
            start_y: self.start_y,
        }
    }
}

/// Seed derived from the wall clock, for sessions without a fixed seed.
pub fn clock_seed() -> u64 {
    let now = chrono::Utc::now();
    now.timestamp_nanos_opt()
        .map(|nanos| nanos as u64)
        .unwrap_or_else(|| now.timestamp_millis() as u64)
}

/// `~/.tubes/config.json`, or `None` when the home directory is unknown.
pub fn default_config_path() -> Option<PathBuf> {
    persistence::data_dir_path().map(|dir| dir.join(CONFIG_FILE_NAME))
}
