use std::{env, error::Error, path::PathBuf};

use dotenv::dotenv;
use log::debug;

pub const LOG_CONFIG_VAR: &str = "BMI_LOG_CONFIG";
pub const DEFAULT_LOG_CONFIG: &str = "log4rs.yml";

/// Resolves the log4rs config path, honouring `BMI_LOG_CONFIG` from the
/// environment or a `.env` file.
pub fn log_config_path() -> PathBuf {
    dotenv().ok();
    log_config_path_from(env::var(LOG_CONFIG_VAR).ok())
}

fn log_config_path_from(value: Option<String>) -> PathBuf {
    value
        .filter(|path| !path.trim().is_empty())
        .map(PathBuf::from)
        .unwrap_or_else(|| PathBuf::from(DEFAULT_LOG_CONFIG))
}

pub fn init_logging() -> Result<(), Box<dyn Error>> {
    let path = log_config_path();
    log4rs::init_file(&path, Default::default())?;
    debug!("Logging configured from {}", path.display());
    Ok(())
}
