use std::collections::HashMap;
use std::path::Path;

use config_file::FromConfigFile;
use serde::Deserialize;

use crate::error::{Error, Result};

/// One named color preset.
#[derive(Clone, Deserialize)]
pub struct Preset {
    /// Hex color, with or without a leading '#'.
    pub color: String,
    /// Default fade duration in seconds when the preset is applied.
    pub fade: Option<f32>,
}

/// The presets file: a YAML map of preset name to color definition.
#[derive(Deserialize)]
pub struct Presets {
    #[serde(flatten)]
    entries: HashMap<String, Preset>,
}

impl Presets {
    pub fn load(path: &Path) -> Result<Presets> {
        Presets::from_config_file(path).map_err(|err| Error::Resource {
            path: path.to_path_buf(),
            reason: err.to_string(),
        })
    }

    pub fn get(&self, name: &str) -> Result<&Preset> {
        self.entries
            .get(name)
            .ok_or_else(|| Error::UnknownPreset(name.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    fn write_temp(name: &str, content: &str) -> PathBuf {
        let mut path = std::env::temp_dir();
        path.push(format!("funklicht-{}-{}", std::process::id(), name));
        std::fs::write(&path, content).unwrap();
        path
    }

    #[test]
    fn loads_presets_with_and_without_fade() {
        let path = write_temp(
            "presets.yaml",
            "red:\n  color: \"#ff0000\"\nwarmwhite:\n  color: \"#ffb060\"\n  fade: 2.0\n",
        );
        let presets = Presets::load(&path).unwrap();
        std::fs::remove_file(&path).unwrap();

        let red = presets.get("red").unwrap();
        assert_eq!(red.color, "#ff0000");
        assert!(red.fade.is_none());

        let warmwhite = presets.get("warmwhite").unwrap();
        assert_eq!(warmwhite.fade, Some(2.0));
    }

    #[test]
    fn unknown_presets_are_an_error() {
        let path = write_temp("one-preset.yaml", "red:\n  color: \"#ff0000\"\n");
        let presets = Presets::load(&path).unwrap();
        std::fs::remove_file(&path).unwrap();

        assert!(presets.get("chartreuse").is_err());
    }

    #[test]
    fn malformed_presets_are_an_error() {
        let path = write_temp("broken.yaml", "red: [no color here\n");
        let result = Presets::load(&path);
        std::fs::remove_file(&path).unwrap();

        assert!(result.is_err());
    }
}
