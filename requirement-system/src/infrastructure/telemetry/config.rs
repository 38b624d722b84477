use std::str::FromStr;

use serde::{Deserialize, Serialize};
use tracing::metadata::LevelFilter;
use tracing_appender::rolling::Rotation;

/// `common.telemetry` section.
#[derive(Deserialize, Serialize, Clone, Debug)]
pub struct TelemetryConfig {
    #[serde(default = "enabled")]
    pub enable: bool,
    /// Fallback for targets no directive names: `error`, `warn`, `info`, `debug`, `trace` or
    /// `off`.
    #[serde(default = "default_level")]
    pub level: String,
    /// `EnvFilter` directives, e.g. `sqlx=warn,requirement_audit=info`.
    #[serde(default)]
    pub directives: String,
    /// Environment variable holding more directives.
    #[serde(default)]
    pub directives_env: String,
    #[serde(default)]
    pub console: ConsoleOutput,
    #[serde(default)]
    pub file: FileOutput,
}

impl TelemetryConfig {
    /// Unknown names fall back to `info`.
    pub fn level(&self) -> LevelFilter {
        LevelFilter::from_str(self.level.trim()).unwrap_or(LevelFilter::INFO)
    }
}

impl Default for TelemetryConfig {
    fn default() -> Self {
        Self {
            enable: enabled(),
            level: default_level(),
            directives: Default::default(),
            directives_env: Default::default(),
            console: Default::default(),
            file: Default::default(),
        }
    }
}

#[derive(Deserialize, Serialize, Clone, Debug)]
pub struct ConsoleOutput {
    #[serde(default = "enabled")]
    pub enable: bool,
    /// Source location, thread id and target on every line.
    #[serde(default)]
    pub verbose: bool,
}

impl Default for ConsoleOutput {
    fn default() -> Self {
        Self {
            enable: enabled(),
            verbose: false,
        }
    }
}

/// Plain text log files, off unless enabled.
#[derive(Deserialize, Serialize, Clone, Debug)]
pub struct FileOutput {
    #[serde(default)]
    pub enable: bool,
    #[serde(default)]
    pub verbose: bool,
    #[serde(default = "default_directory")]
    pub directory: String,
    /// Rolled files get a date suffix.
    #[serde(default = "default_file_name")]
    pub file_name: String,
    #[serde(default)]
    pub rotation: FileRotation,
}

impl Default for FileOutput {
    fn default() -> Self {
        Self {
            enable: false,
            verbose: false,
            directory: default_directory(),
            file_name: default_file_name(),
            rotation: Default::default(),
        }
    }
}

#[derive(Default, Deserialize, Serialize, Clone, Copy, Debug, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum FileRotation {
    Minutely,
    Hourly,
    Daily,
    #[default]
    Never,
}

impl From<FileRotation> for Rotation {
    fn from(val: FileRotation) -> Self {
        match val {
            FileRotation::Minutely => Rotation::MINUTELY,
            FileRotation::Hourly => Rotation::HOURLY,
            FileRotation::Daily => Rotation::DAILY,
            FileRotation::Never => Rotation::NEVER,
        }
    }
}

fn enabled() -> bool {
    true
}

fn default_level() -> String {
    "info".to_string()
}

fn default_directory() -> String {
    "./logs".to_string()
}

fn default_file_name() -> String {
    "trackit.log".to_string()
}
