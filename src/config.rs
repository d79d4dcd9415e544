use anyhow::{ensure, Context, Result};
use log::info;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

use crate::{common::Color, persist::load_json};

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq)]
#[serde(default)]
pub struct RenderConfig {
    /// Fill color for anything the compositor does not draw.
    pub background: Color,
    pub atlas_blocks_per_row: usize,
    pub label_scale: u32,
}

impl Default for RenderConfig {
    fn default() -> Self {
        RenderConfig {
            background: Color::BLACK,
            atlas_blocks_per_row: 16,
            label_scale: 1,
        }
    }
}

fn get_global_config_path() -> Result<PathBuf> {
    let project_dirs = directories::ProjectDirs::from("", "", "Tile2x2MapPlot")
        .context("Unable to open global config directory.")?;
    let config_dir = project_dirs.config_dir();
    let config_path = config_dir.join("config.json");
    Ok(config_path)
}

impl RenderConfig {
    /// Use `path` if given, else the per-user config file if there is one,
    /// else the defaults.
    pub fn load(path: Option<&Path>) -> Result<Self> {
        Self::load_from(path, get_global_config_path().ok())
    }

    fn load_from(path: Option<&Path>, global: Option<PathBuf>) -> Result<Self> {
        let config: RenderConfig = match (path, global) {
            (Some(p), _) => {
                load_json(p).with_context(|| format!("reading config {}", p.display()))?
            }
            (None, Some(p)) if p.exists() => {
                load_json(&p).with_context(|| format!("reading config {}", p.display()))?
            }
            _ => {
                info!("No config file, using defaults.");
                RenderConfig::default()
            }
        };
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<()> {
        ensure!(
            self.atlas_blocks_per_row > 0,
            "atlas_blocks_per_row must be at least 1"
        );
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    #[test]
    fn test_partial_config_uses_defaults() {
        let dir = std::env::temp_dir().join("tile2x2_map_plot_test_config");
        fs::create_dir_all(&dir).unwrap();
        let path = dir.join("partial.json");
        fs::write(&path, r#"{"background": {"red": 1, "green": 2, "blue": 3}}"#).unwrap();

        let config = RenderConfig::load(Some(&path)).unwrap();
        assert_eq!(config.background, Color::new(1, 2, 3));
        assert_eq!(config.atlas_blocks_per_row, 16);
        assert_eq!(config.label_scale, 1);

        fs::remove_file(&path).unwrap();
    }

    #[test]
    fn test_invalid_config_is_an_error() {
        let dir = std::env::temp_dir().join("tile2x2_map_plot_test_config");
        fs::create_dir_all(&dir).unwrap();

        let zero = dir.join("zero.json");
        fs::write(&zero, r#"{"atlas_blocks_per_row": 0}"#).unwrap();
        assert!(RenderConfig::load(Some(&zero)).is_err());

        let broken = dir.join("broken.json");
        fs::write(&broken, "{ not json").unwrap();
        assert!(RenderConfig::load(Some(&broken)).is_err());

        assert!(RenderConfig::load(Some(&dir.join("missing.json"))).is_err());

        fs::remove_file(&zero).unwrap();
        fs::remove_file(&broken).unwrap();
    }

    #[test]
    fn test_global_config_fallback() {
        let dir = std::env::temp_dir().join("tile2x2_map_plot_test_config");
        fs::create_dir_all(&dir).unwrap();

        let missing = dir.join("no_such_global.json");
        let config = RenderConfig::load_from(None, Some(missing)).unwrap();
        assert_eq!(config, RenderConfig::default());
        assert_eq!(RenderConfig::load_from(None, None).unwrap(), RenderConfig::default());

        let global = dir.join("global.json");
        fs::write(&global, r#"{"label_scale": 3}"#).unwrap();
        let config = RenderConfig::load_from(None, Some(global.clone())).unwrap();
        assert_eq!(config.label_scale, 3);

        // An explicit path wins over the global file.
        let explicit = dir.join("explicit.json");
        fs::write(&explicit, r#"{"label_scale": 4}"#).unwrap();
        let config = RenderConfig::load_from(Some(&explicit), Some(global.clone())).unwrap();
        assert_eq!(config.label_scale, 4);

        fs::remove_file(&global).unwrap();
        fs::remove_file(&explicit).unwrap();
    }
}
