use crate::utils::errors::{OutlineError, Result};
use std::path::PathBuf;

pub struct OutlineCliPaths;
const PROGRAM_NAME: &str = "outline-rs";

impl OutlineCliPaths {
    /// Get the config directory: ~/.config/outline-rs/
    pub fn config_dir() -> Result<PathBuf> {
        dirs::config_dir()
            .map(|dir| dir.join(PROGRAM_NAME))
            .ok_or_else(|| OutlineError::Config("Cannot determine config directory".to_string()))
    }

    /// Get the config file path: ~/.config/outline-rs/config.yaml
    pub fn config_file() -> Result<PathBuf> {
        Ok(Self::config_dir()?.join("config.yaml"))
    }
}
