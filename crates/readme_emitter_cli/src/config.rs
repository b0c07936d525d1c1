//! Environment-driven run configuration.
//!
//! # Invariants
//! - Unset variables fall back to the compiled-in defaults.
//! - Set but unparseable variables are errors, never silently ignored.

use readme_emitter_core::{
    default_log_level, normalize_level, normalize_log_dir, EmitOptions, WriteMode,
    DEFAULT_TARGET_PATH,
};
use std::error::Error;
use std::fmt::{Display, Formatter};
use std::path::PathBuf;

pub const ENV_TARGET: &str = "README_EMITTER_TARGET";
pub const ENV_WRITE_MODE: &str = "README_EMITTER_WRITE_MODE";
pub const ENV_CREATE_PARENTS: &str = "README_EMITTER_CREATE_PARENTS";
pub const ENV_LOG_LEVEL: &str = "README_EMITTER_LOG_LEVEL";
pub const ENV_LOG_DIR: &str = "README_EMITTER_LOG_DIR";

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConfigError {
    InvalidValue {
        key: &'static str,
        value: String,
        expected: &'static str,
    },
}

impl Display for ConfigError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::InvalidValue {
                key,
                value,
                expected,
            } => write!(f, "{key}: unsupported value `{value}`; expected {expected}"),
        }
    }
}

impl Error for ConfigError {}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RunConfig {
    /// Raw destination; validated when the emitter is built.
    pub target: PathBuf,
    pub options: EmitOptions,
    pub log_level: &'static str,
    pub log_dir: Option<String>,
}

impl RunConfig {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Builds the config from an arbitrary key lookup.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let target = match non_blank(lookup(ENV_TARGET)) {
            Some(path) => PathBuf::from(path.trim()),
            None => PathBuf::from(DEFAULT_TARGET_PATH),
        };

        let write_mode = match non_blank(lookup(ENV_WRITE_MODE)) {
            Some(value) => value
                .parse::<WriteMode>()
                .map_err(|_| ConfigError::InvalidValue {
                    key: ENV_WRITE_MODE,
                    value,
                    expected: "truncate|atomic",
                })?,
            None => WriteMode::default(),
        };

        let create_parents = match non_blank(lookup(ENV_CREATE_PARENTS)) {
            Some(value) => parse_flag(&value).ok_or(ConfigError::InvalidValue {
                key: ENV_CREATE_PARENTS,
                value,
                expected: "1|true|yes|on|0|false|no|off",
            })?,
            None => false,
        };

        let log_level = match non_blank(lookup(ENV_LOG_LEVEL)) {
            Some(value) => normalize_level(&value).map_err(|_| ConfigError::InvalidValue {
                key: ENV_LOG_LEVEL,
                value,
                expected: "trace|debug|info|warn|error",
            })?,
            None => default_log_level(),
        };

        let log_dir = match non_blank(lookup(ENV_LOG_DIR)) {
            Some(value) => {
                normalize_log_dir(&value).map_err(|_| ConfigError::InvalidValue {
                    key: ENV_LOG_DIR,
                    value: value.clone(),
                    expected: "an absolute directory path",
                })?;
                Some(value.trim().to_string())
            }
            None => None,
        };

        Ok(Self {
            target,
            options: EmitOptions {
                write_mode,
                create_parents,
            },
            log_level,
            log_dir,
        })
    }
}

fn non_blank(value: Option<String>) -> Option<String> {
    value.filter(|value| !value.trim().is_empty())
}

fn parse_flag(value: &str) -> Option<bool> {
    match value.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Some(true),
        "0" | "false" | "no" | "off" => Some(false),
        _ => None,
    }
}
