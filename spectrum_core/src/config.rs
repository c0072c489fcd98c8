//! Feature-extraction and sweep configuration via TOML files.
//!
//! Each configuration reads its own section (`[features]`, `[sweep]`) and
//! falls back to defaults for anything missing, so one file can hold both.

use std::fs;
use std::path::{Path, PathBuf};

use serde::Serialize;
use toml::Value;

use crate::sweep::PanelContent;

/// Parameters for [`extract_unique_central_features`](crate::spectral::extract_unique_central_features).
///
/// # Examples
///
/// ```
/// use spectrum_features_core::FeatureConfig;
///
/// let config = FeatureConfig::from_str("[features]\nwindow_size = 7").unwrap();
/// assert_eq!(config.window_size, 7);
/// assert!(config.include_dc);
/// ```
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FeatureConfig {
    /// Side of the square window around DC (odd)
    pub window_size: usize,
    /// Keep the DC coefficient as the first feature
    pub include_dc: bool,
}

impl FeatureConfig {
    pub fn load_from_file<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let contents = fs::read_to_string(&path)?;
        Self::from_str(&contents)
    }

    pub fn from_str(toml_str: &str) -> Result<Self, ConfigError> {
        let table = section(toml_str, "features")?;

        let window_size = match table.get("window_size") {
            Some(value) => {
                let size = value
                    .as_integer()
                    .ok_or_else(|| ConfigError::Parse("features.window_size must be an integer".into()))?;
                if size <= 0 || size % 2 == 0 {
                    return Err(ConfigError::Parse(format!(
                        "features.window_size must be odd and positive, got {}",
                        size
                    )));
                }
                size as usize
            }
            None => 11,
        };

        let include_dc = table
            .get("include_dc")
            .and_then(|v| v.as_bool())
            .unwrap_or(true);

        Ok(Self {
            window_size,
            include_dc,
        })
    }
}

impl Default for FeatureConfig {
    fn default() -> Self {
        Self {
            window_size: 11,
            include_dc: true,
        }
    }
}

/// Parameters for [`create_hpf_sweep_gif`](crate::sweep::create_hpf_sweep_gif).
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SweepConfig {
    /// File name of the animation
    pub gif_filename: String,
    /// Directory the animation is written into (created if missing)
    pub save_path: Option<PathBuf>,
    /// Playback rate
    pub fps: u32,
    /// Number of evenly spaced radii when `radii` is not given
    pub num_frames: usize,
    /// Explicit mask radii, in playback order
    pub radii: Option<Vec<u32>>,
    /// Content of the left half of each frame
    pub left_panel: PanelContent,
    /// Draw the current radius onto each frame
    pub annotate: bool,
}

impl SweepConfig {
    pub fn load_from_file<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let contents = fs::read_to_string(&path)?;
        Self::from_str(&contents)
    }

    pub fn from_str(toml_str: &str) -> Result<Self, ConfigError> {
        let table = section(toml_str, "sweep")?;
        let defaults = Self::default();

        let gif_filename = table
            .get("gif_filename")
            .and_then(|v| v.as_str())
            .map(str::to_string)
            .unwrap_or(defaults.gif_filename);

        let save_path = table
            .get("save_path")
            .and_then(|v| v.as_str())
            .filter(|path| !path.is_empty())
            .map(PathBuf::from);

        let fps = table
            .get("fps")
            .and_then(|v| v.as_integer())
            .map(|v| v.clamp(1, 100) as u32)
            .unwrap_or(defaults.fps);

        let num_frames = table
            .get("num_frames")
            .and_then(|v| v.as_integer())
            .map(|v| v.max(1) as usize)
            .unwrap_or(defaults.num_frames);

        let radii = match table.get("radii").and_then(|v| v.as_array()) {
            Some(items) => {
                let radii = items
                    .iter()
                    .map(|item| {
                        item.as_integer()
                            .filter(|&r| r >= 0 && r <= i64::from(u32::MAX))
                            .map(|r| r as u32)
                            .ok_or_else(|| {
                                ConfigError::Parse(format!(
                                    "sweep.radii entries must be non-negative integers, got {}",
                                    item
                                ))
                            })
                    })
                    .collect::<Result<Vec<_>, _>>()?;
                Some(radii).filter(|radii| !radii.is_empty())
            }
            None => None,
        };

        let left_panel = match table.get("left_panel").and_then(|v| v.as_str()) {
            Some(name) => name.parse::<PanelContent>().unwrap_or_else(|err| {
                tracing::warn!("{}; using '{}'", err, PanelContent::default());
                PanelContent::default()
            }),
            None => defaults.left_panel,
        };

        let annotate = table
            .get("annotate")
            .and_then(|v| v.as_bool())
            .unwrap_or(defaults.annotate);

        Ok(Self {
            gif_filename,
            save_path,
            fps,
            num_frames,
            radii,
            left_panel,
            annotate,
        })
    }

    /// `save_path/gif_filename`, or just `gif_filename` without a save path.
    pub fn output_path(&self) -> PathBuf {
        match &self.save_path {
            Some(dir) => dir.join(&self.gif_filename),
            None => PathBuf::from(&self.gif_filename),
        }
    }
}

impl Default for SweepConfig {
    fn default() -> Self {
        Self {
            gif_filename: "hpf_sweep.gif".to_string(),
            save_path: None,
            fps: 15,
            num_frames: 60,
            radii: None,
            left_panel: PanelContent::Spectrum,
            annotate: true,
        }
    }
}

fn section(toml_str: &str, name: &str) -> Result<toml::Table, ConfigError> {
    let value: Value =
        toml::from_str(toml_str).map_err(|err| ConfigError::Parse(err.to_string()))?;
    Ok(value
        .get(name)
        .and_then(|v| v.as_table())
        .cloned()
        .unwrap_or_default())
}

#[derive(Debug)]
pub enum ConfigError {
    Io(std::io::Error),
    Parse(String),
}

impl std::fmt::Display for ConfigError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ConfigError::Io(err) => write!(f, "IO error: {}", err),
            ConfigError::Parse(err) => write!(f, "Parse error: {}", err),
        }
    }
}

impl std::error::Error for ConfigError {}

impl From<std::io::Error> for ConfigError {
    fn from(value: std::io::Error) -> Self {
        ConfigError::Io(value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn feature_config_defaults_when_section_missing() {
        let config = FeatureConfig::from_str("[sweep]\nfps = 10").unwrap();
        assert_eq!(config, FeatureConfig::default());
    }

    #[test]
    fn feature_config_parses_custom_values() {
        let config = FeatureConfig::from_str("[features]\nwindow_size = 5\ninclude_dc = false").unwrap();
        assert_eq!(config.window_size, 5);
        assert!(!config.include_dc);
    }

    #[test]
    fn feature_config_rejects_even_window() {
        let err = FeatureConfig::from_str("[features]\nwindow_size = 10").unwrap_err();
        assert!(err.to_string().contains("odd"));
    }

    #[test]
    fn sweep_config_defaults_when_section_missing() {
        let config = SweepConfig::from_str("[features]\nwindow_size = 3").unwrap();
        assert_eq!(config, SweepConfig::default());
        assert_eq!(config.output_path(), PathBuf::from("hpf_sweep.gif"));
    }

    #[test]
    fn sweep_config_parses_custom_values() {
        let toml = "[sweep]\ngif_filename = \"mask.gif\"\nsave_path = \"out/gifs\"\nfps = 8\nradii = [0, 4, 16]\nleft_panel = \"mask\"\nannotate = false";
        let config = SweepConfig::from_str(toml).unwrap();
        assert_eq!(config.fps, 8);
        assert_eq!(config.radii, Some(vec![0, 4, 16]));
        assert_eq!(config.left_panel, PanelContent::Mask);
        assert!(!config.annotate);
        assert_eq!(config.output_path(), PathBuf::from("out/gifs").join("mask.gif"));
    }

    #[test]
    fn sweep_config_falls_back_on_unknown_panel() {
        let config = SweepConfig::from_str("[sweep]\nleft_panel = \"histogram\"").unwrap();
        assert_eq!(config.left_panel, PanelContent::Spectrum);
    }

    #[test]
    fn sweep_config_rejects_negative_radius() {
        assert!(SweepConfig::from_str("[sweep]\nradii = [3, -1]").is_err());
    }

    #[test]
    fn malformed_toml_is_a_parse_error() {
        let err = SweepConfig::from_str("[sweep\nfps = ").unwrap_err();
        assert!(matches!(err, ConfigError::Parse(_)));
    }
}
