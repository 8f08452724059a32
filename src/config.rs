use std::path::{Path, PathBuf};

use config_file::FromConfigFile;
use serde::Deserialize;

use crate::artnet;
use crate::error::{Error, Result};

/// Controller configuration, read from a TOML file.
#[derive(Deserialize)]
pub struct Config {
    /// Art-Net node to send to, host name or IP.
    pub target: String,
    #[serde(default = "default_port")]
    pub port: u16,
    #[serde(default)]
    pub universe: u8,
    #[serde(default)]
    pub physical: u8,
    /// Color presets file (YAML).
    pub presets: PathBuf,
}

fn default_port() -> u16 {
    artnet::PORT
}

impl Config {
    pub fn load(path: &Path) -> Result<Config> {
        Config::from_config_file(path).map_err(|err| Error::Resource {
            path: path.to_path_buf(),
            reason: err.to_string(),
        })
    }
}
