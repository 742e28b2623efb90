//! different utility modules used throughout the project
/// logger setup: terminal plus optional file
pub mod logger;
/// run configuration of the demo binary (TOML)
pub mod config;
