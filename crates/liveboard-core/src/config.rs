//! Configuration loading and typed config structures for the board.
//!
//! The canonical configuration lives in `liveboard-config.yaml` at the
//! project root. This module defines strongly-typed structs that mirror the
//! YAML structure, and provides a loader that reads and validates the file.

use std::path::Path;

use serde::Deserialize;

/// Errors that can occur when loading configuration.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// Failed to read the configuration file from disk.
    #[error("failed to read config file: {source}")]
    Io {
        /// The underlying I/O error.
        #[from]
        source: std::io::Error,
    },

    /// Failed to parse YAML content.
    #[error("failed to parse config YAML: {source}")]
    Yaml {
        /// The underlying YAML parse error.
        source: serde_yml::Error,
    },
}

impl From<serde_yml::Error> for ConfigError {
    fn from(source: serde_yml::Error) -> Self {
        Self::Yaml { source }
    }
}

/// Top-level board configuration.
///
/// Mirrors the structure of `liveboard-config.yaml`. All fields have
/// defaults matching the original board behavior.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct SimulationConfig {
    /// Board-level settings (name, seed, timing, window sizes).
    #[serde(default)]
    pub board: BoardConfig,

    /// The participant roster.
    #[serde(default)]
    pub roster: RosterConfig,

    /// Simulation boundary parameters.
    #[serde(default)]
    pub simulation: SimulationBoundsConfig,

    /// Logging configuration.
    #[serde(default)]
    pub logging: LoggingConfig,
}

impl SimulationConfig {
    /// Load configuration from a YAML file at the given path.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Io`] if the file cannot be read, or
    /// [`ConfigError::Yaml`] if the content is not valid YAML.
    pub fn from_file(path: &Path) -> Result<Self, ConfigError> {
        let contents = std::fs::read_to_string(path)?;
        let config: Self = serde_yml::from_str(&contents)?;
        Ok(config)
    }

    /// Parse configuration from a YAML string.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Yaml`] if the string is not valid YAML.
    pub fn parse(yaml: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_yml::from_str(yaml)?;
        Ok(config)
    }
}

/// Board-level configuration.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct BoardConfig {
    /// Human-readable board name.
    #[serde(default = "default_board_name")]
    pub name: String,

    /// Random seed for reproducible demo runs. `None` seeds from OS entropy.
    #[serde(default)]
    pub seed: Option<u64>,

    /// Real-time milliseconds between ticks.
    #[serde(default = "default_tick_interval_ms")]
    pub tick_interval_ms: u64,

    /// Simulated seconds added to the clock per tick.
    #[serde(default = "default_time_step_seconds")]
    pub time_step_seconds: u64,

    /// Maximum retained snapshots (sliding window).
    #[serde(default = "default_window")]
    pub window: usize,

    /// Number of standings shown on the leaderboard.
    #[serde(default = "default_leaderboard_size")]
    pub leaderboard_size: usize,

    /// Number of standings selected as chart lines.
    #[serde(default = "default_chart_size")]
    pub chart_size: usize,

    /// Display name of the favorite participant, if preselected.
    ///
    /// The favorite can also be set or changed at runtime through the
    /// operator state; this field only provides the initial selection.
    #[serde(default)]
    pub favorite: Option<String>,
}

impl Default for BoardConfig {
    fn default() -> Self {
        Self {
            name: default_board_name(),
            seed: None,
            tick_interval_ms: default_tick_interval_ms(),
            time_step_seconds: default_time_step_seconds(),
            window: default_window(),
            leaderboard_size: default_leaderboard_size(),
            chart_size: default_chart_size(),
            favorite: None,
        }
    }
}

/// The participant roster.
///
/// Names arrive from an external data source; identifiers and colors are
/// assigned at seeding time. An empty roster is valid and produces an
/// empty board with no ticking.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct RosterConfig {
    /// Ordered participant display names. Order matters: it determines
    /// color assignment and tie-breaking in the standings.
    #[serde(default = "default_roster_names")]
    pub names: Vec<String>,
}

impl Default for RosterConfig {
    fn default() -> Self {
        Self {
            names: default_roster_names(),
        }
    }
}

/// Simulation boundary configuration.
///
/// Controls when the run loop ends. A value of 0 for either bound means
/// unlimited.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct SimulationBoundsConfig {
    /// Maximum number of ticks before the run ends (0 = unlimited).
    #[serde(default)]
    pub max_ticks: u64,

    /// Maximum wall-clock seconds before the run ends (0 = unlimited).
    #[serde(default = "default_max_real_time_seconds")]
    pub max_real_time_seconds: u64,
}

impl Default for SimulationBoundsConfig {
    fn default() -> Self {
        Self {
            max_ticks: 0,
            max_real_time_seconds: default_max_real_time_seconds(),
        }
    }
}

/// Logging configuration.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct LoggingConfig {
    /// Log level (trace, debug, info, warn, error).
    #[serde(default = "default_log_level")]
    pub level: String,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
        }
    }
}

// ---------------------------------------------------------------------------
// Default value functions (serde default requires named functions)
// ---------------------------------------------------------------------------

fn default_board_name() -> String {
    "Liveboard".to_owned()
}

const fn default_tick_interval_ms() -> u64 {
    10_000
}

const fn default_time_step_seconds() -> u64 {
    2
}

const fn default_window() -> usize {
    15
}

const fn default_leaderboard_size() -> usize {
    3
}

const fn default_chart_size() -> usize {
    10
}

fn default_roster_names() -> Vec<String> {
    vec![
        "Team Nova".to_owned(),
        "Team Zenith".to_owned(),
        "Team Quasar".to_owned(),
        "Team Borealis".to_owned(),
        "Team Lumen".to_owned(),
        "Team Helix".to_owned(),
    ]
}

const fn default_max_real_time_seconds() -> u64 {
    86_400
}

fn default_log_level() -> String {
    "info".to_owned()
}
