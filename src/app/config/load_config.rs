//! Generator configuration loading.

use std::fs;
use std::path::{Path, PathBuf};

use crate::domain::{AppError, GeneratorConfig};

/// Default configuration file name, looked up in the working directory.
pub const CONFIG_FILE: &str = "wsgen.toml";

/// Environment variable overriding `server.temp_dir`.
pub const TEMP_DIR_ENV: &str = "WSGEN_SERVER_TEMP_DIR";

/// Load configuration for a working directory.
///
/// An explicit path must exist. Without one, `wsgen.toml` under `root` is
/// used when present and defaults apply otherwise.
pub fn load_config(root: &Path, explicit: Option<&Path>) -> Result<GeneratorConfig, AppError> {
    let mut config = match explicit {
        Some(path) => {
            let path = root.join(path);
            if !path.exists() {
                return Err(AppError::config_error(format!(
                    "Config file not found: {}",
                    path.display()
                )));
            }
            parse_config_content(&fs::read_to_string(&path)?)?
        }
        None => {
            let path = root.join(CONFIG_FILE);
            if path.exists() {
                parse_config_content(&fs::read_to_string(&path)?)?
            } else {
                GeneratorConfig::default()
            }
        }
    };

    if let Some(temp_dir) = std::env::var_os(TEMP_DIR_ENV).filter(|value| !value.is_empty()) {
        config.server.temp_dir = PathBuf::from(temp_dir);
    }

    config.validate()?;
    Ok(config)
}

/// Parse configuration from string content.
pub fn parse_config_content(content: &str) -> Result<GeneratorConfig, AppError> {
    let config: GeneratorConfig = toml::from_str(content)?;
    Ok(config)
}
