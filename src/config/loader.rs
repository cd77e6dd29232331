//! Configuration loading from files (std only).

use std::fs;
use std::path::Path;

use crate::error::{ConfigError, Error, Result};

use super::SimulatorConfig;

/// Load configuration from a TOML file.
///
/// # Errors
///
/// Returns an error if the file cannot be read, parsed or validated.
///
/// # Example
///
/// ```rust,ignore
/// use scope_sim::load_config;
///
/// let config = load_config("scope.toml")?;
/// ```
pub fn load_config<P: AsRef<Path>>(path: P) -> Result<SimulatorConfig> {
    let content = fs::read_to_string(path.as_ref()).map_err(|e| {
        let msg = heapless::String::try_from(truncate(&e.to_string())).unwrap_or_default();
        Error::Config(ConfigError::IoError(msg))
    })?;

    parse_config(&content)
}

/// Parse configuration from a TOML string.
///
/// # Errors
///
/// Returns an error if the TOML is invalid or fails validation.
pub fn parse_config(content: &str) -> Result<SimulatorConfig> {
    let config: SimulatorConfig = toml::from_str(content).map_err(|e| {
        let msg = heapless::String::try_from(truncate(e.message())).unwrap_or_default();
        Error::Config(ConfigError::ParseError(msg))
    })?;

    super::validation::validate_config(&config)?;

    Ok(config)
}

// heapless::String<128> rejects anything longer
fn truncate(msg: &str) -> &str {
    let mut end = msg.len().min(128);
    while !msg.is_char_boundary(end) {
        end -= 1;
    }
    &msg[..end]
}
