// Copyright (c)  by Gleb E. Zaslavkiy
//MIT License
//! Run configuration of the demo binary, read from a small TOML file:
//! ```toml
//! log_level = "info"          # error | warn | info | debug | trace | off
//! log_file = "auto"           # a path, "auto" for a timestamped name, or absent
//! output_format = "latex"     # plain | latex
//! examples = ["tschirnhaus_cubic", "radical_elimination"]
//! ```
use crate::Utils::logger::default_log_file_name;
use crate::symbolic::symbolic_traits::OutputFormat;
use log::LevelFilter;
use std::fs;
use std::path::{Path, PathBuf};
use std::str::FromStr;
use thiserror::Error;
use toml::{Table, Value};

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("cannot read {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("malformed configuration: {0}")]
    Parse(#[from] toml::de::Error),
    #[error("invalid value for {key}: {value}")]
    InvalidValue { key: String, value: String },
}

#[derive(Debug, Clone, PartialEq)]
pub struct RunConfig {
    pub log_level: LevelFilter,
    pub log_file: Option<PathBuf>,
    pub output_format: OutputFormat,
    /// demo names; empty runs all of them
    pub examples: Vec<String>,
}

impl Default for RunConfig {
    fn default() -> Self {
        RunConfig {
            log_level: LevelFilter::Info,
            log_file: None,
            output_format: OutputFormat::Plain,
            examples: Vec::new(),
        }
    }
}

impl RunConfig {
    /// Reads `path`; a missing file gives the defaults.
    pub fn load(path: &Path) -> Result<RunConfig, ConfigError> {
        if !path.exists() {
            return Ok(RunConfig::default());
        }
        let text = fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        RunConfig::parse(&text)
    }

    pub fn parse(text: &str) -> Result<RunConfig, ConfigError> {
        let table = text.parse::<Table>()?;
        let mut config = RunConfig::default();
        for (key, value) in &table {
            match key.as_str() {
                "log_level" => {
                    config.log_level = LevelFilter::from_str(string_value(key, value)?)
                        .map_err(|_| invalid(key, value))?;
                }
                "log_file" => {
                    config.log_file = match string_value(key, value)? {
                        "auto" => Some(default_log_file_name()),
                        path => Some(PathBuf::from(path)),
                    };
                }
                "output_format" => {
                    config.output_format = OutputFormat::from_str(string_value(key, value)?)
                        .map_err(|_| invalid(key, value))?;
                }
                "examples" => {
                    let Value::Array(items) = value else {
                        return Err(invalid(key, value));
                    };
                    config.examples = items
                        .iter()
                        .map(|item| string_value(key, item).map(str::to_string))
                        .collect::<Result<_, _>>()?;
                }
                _ => return Err(invalid(key, value)),
            }
        }
        Ok(config)
    }
}

fn invalid(key: &str, value: &Value) -> ConfigError {
    ConfigError::InvalidValue {
        key: key.to_string(),
        value: value.to_string(),
    }
}

fn string_value<'a>(key: &str, value: &'a Value) -> Result<&'a str, ConfigError> {
    value.as_str().ok_or_else(|| invalid(key, value))
}
