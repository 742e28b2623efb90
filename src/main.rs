#![allow(non_snake_case)]
use RustedExactAlgebra::Examples::symbolic_examples::{EXAMPLE_NAMES, run_example};
use RustedExactAlgebra::Utils::config::RunConfig;
use RustedExactAlgebra::Utils::logger::init_logger;
use log::{error, info};
use std::path::PathBuf;
use std::process::ExitCode;

fn main() -> ExitCode {
    let path = std::env::args()
        .nth(1)
        .map(PathBuf::from)
        .unwrap_or_else(|| PathBuf::from("algebra_config.toml"));
    let config = match RunConfig::load(&path) {
        Ok(config) => config,
        Err(e) => {
            eprintln!("{}", e);
            return ExitCode::FAILURE;
        }
    };
    init_logger(config.log_level, config.log_file.as_deref());
    info!("configuration {:?}", config);
    let examples: Vec<String> = if config.examples.is_empty() {
        EXAMPLE_NAMES.iter().map(|s| s.to_string()).collect()
    } else {
        config.examples.clone()
    };
    let mut status = ExitCode::SUCCESS;
    for name in &examples {
        if let Err(e) = run_example(name, config.output_format) {
            error!("example {} failed: {}", name, e);
            status = ExitCode::FAILURE;
        }
    }
    status
}
