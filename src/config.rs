//! Configuration loading
//!
//! The config file is optional and lives at `~/.config/hilite/config.toml`.
//! A missing file means defaults; a file that exists but does not parse, or
//! holds invalid values, is an error rather than being silently ignored.

mod types;

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

pub use types::{Config, HighlightConfig, MarkupConfig, OutputConfig};

use crate::error::HiliteError;
use crate::render::ansi::AnsiStyle;

const CONFIG_DIR: &str = "hilite";
const CONFIG_FILE: &str = "config.toml";

pub fn config_path() -> Option<PathBuf> {
    dirs::home_dir().map(|p| p.join(".config").join(CONFIG_DIR).join(CONFIG_FILE))
}

/// Load the config from the default location
pub fn load_config() -> Result<Config, HiliteError> {
    let Some(path) = config_path() else {
        log::debug!("no home directory, using default config");
        return Ok(Config::default());
    };

    load_config_from_path(&path)
}

pub fn load_config_from_path(path: &Path) -> Result<Config, HiliteError> {
    let contents = match fs::read_to_string(path) {
        Ok(contents) => contents,
        Err(e) if e.kind() == io::ErrorKind::NotFound => {
            log::debug!("config file {} not found, using defaults", path.display());
            return Ok(Config::default());
        }
        Err(e) => {
            return Err(HiliteError::Config {
                path: path.to_path_buf(),
                message: e.to_string(),
            });
        }
    };

    let config = parse_config_toml(&contents).map_err(|message| HiliteError::Config {
        path: path.to_path_buf(),
        message,
    })?;
    log::debug!("loaded config from {}", path.display());
    Ok(config)
}

/// Parse and validate config file contents
pub fn parse_config_toml(content: &str) -> Result<Config, String> {
    let config: Config = toml::from_str(content).map_err(|e| e.message().to_string())?;

    // Colors are kept as names; reject unknown ones up front
    AnsiStyle::from_config(&config.output).map_err(|e| e.to_string())?;

    Ok(config)
}

#[cfg(test)]
#[path = "config_tests.rs"]
mod config_tests;
