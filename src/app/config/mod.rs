mod load_config;

pub use load_config::{CONFIG_FILE, TEMP_DIR_ENV, load_config, parse_config_content};
