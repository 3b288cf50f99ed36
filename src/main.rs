mod config;
mod render;

use config::Config;
use std::env;
use std::path::Path;
use std::process::ExitCode;
use tracing::{error, info};
use tracing_subscriber::{EnvFilter, fmt};

const DEFAULT_CONFIG_PATH: &str = "configs/devserver.yaml";

fn parse_config_path() -> String {
    for arg in env::args().skip(1) {
        if let Some(path) = arg.strip_prefix("--config=") {
            return path.to_string();
        }
    }
    DEFAULT_CONFIG_PATH.to_string()
}

fn parse_out_path() -> Option<String> {
    for arg in env::args().skip(1) {
        if let Some(path) = arg.strip_prefix("--out=") {
            return Some(path.to_string());
        }
    }
    None
}

fn init_tracing() {
    let filter =
        EnvFilter::try_from_env("DEVSERVER_LOG").unwrap_or_else(|_| EnvFilter::new("info"));

    // Logs go to stderr; stdout carries the rendered config
    fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();
}

fn main() -> ExitCode {
    init_tracing();

    let config_path = parse_config_path();

    let config = match Config::load(&config_path) {
        Ok(config) => config,
        Err(e) => {
            error!("invalid dev-server configuration: {}", e);
            return ExitCode::FAILURE;
        }
    };

    if env::args().any(|arg| arg == "--check") {
        info!(path = %config_path, "configuration is valid");
        return ExitCode::SUCCESS;
    }

    if let Some(out_path) = parse_out_path() {
        if let Err(e) = render::write_file(&config, Path::new(&out_path)) {
            error!("{}", e);
            return ExitCode::FAILURE;
        }
        info!(path = %out_path, "configuration written");
        return ExitCode::SUCCESS;
    }

    match render::to_json(&config) {
        Ok(json) => {
            print!("{}", json);
            ExitCode::SUCCESS
        }
        Err(e) => {
            error!("{}", e);
            ExitCode::FAILURE
        }
    }
}
