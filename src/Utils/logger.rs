// Copyright (c)  by Gleb E. Zaslavkiy
//MIT License
//! Logging setup for the demo binary and for tests: a terminal logger plus an optional
//! log file, both at the same level.
use chrono::Local;
use log::LevelFilter;
use simplelog::{
    ColorChoice, CombinedLogger, Config, SharedLogger, TermLogger, TerminalMode, WriteLogger,
};
use std::fs::File;
use std::path::{Path, PathBuf};

/// `algebra_YYYY-MM-DD_HH-MM-SS.log`
pub fn default_log_file_name() -> PathBuf {
    let date_and_time = Local::now().format("%Y-%m-%d_%H-%M-%S");
    PathBuf::from(format!("algebra_{}.log", date_and_time))
}

/// Installs the global logger. A second call keeps the first logger; a log file that
/// cannot be created is skipped with a warning on the terminal.
pub fn init_logger(level: LevelFilter, log_file: Option<&Path>) {
    let mut loggers: Vec<Box<dyn SharedLogger>> = Vec::new();
    loggers.push(TermLogger::new(
        level,
        Config::default(),
        TerminalMode::Mixed,
        ColorChoice::Auto,
    ));
    let mut failed_file = None;
    if let Some(path) = log_file {
        match File::create(path) {
            Ok(file) => loggers.push(WriteLogger::new(level, Config::default(), file)),
            Err(e) => failed_file = Some((path.to_path_buf(), e)),
        }
    }
    let _ = CombinedLogger::init(loggers);
    if let Some((path, e)) = failed_file {
        log::warn!("cannot create log file {}: {}", path.display(), e);
    }
}
