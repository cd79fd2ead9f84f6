use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

use crate::data::loader::DEFAULT_SUFFIX;

/// Environment variable pointing at a settings file.
pub const CONFIG_ENV: &str = "SPECTRAL_WORKBENCH_CONFIG";

/// Settings file looked up in the working directory when the variable is unset.
pub const CONFIG_FILE: &str = "spectral-workbench.json";

// ---------------------------------------------------------------------------
// Settings
// ---------------------------------------------------------------------------

/// User-tunable settings. Every field is optional in the JSON file.
///
/// ```json
/// { "data_suffix": ".dat", "x_label": "Kinetic Energy (eV)" }
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    /// Only directory entries ending in this are read as spectra.
    pub data_suffix: String,
    /// Initial window size in points.
    pub window_size: [f32; 2],
    pub plot_title: String,
    pub x_label: String,
    pub y_label: String,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            data_suffix: DEFAULT_SUFFIX.to_string(),
            window_size: [1000.0, 720.0],
            plot_title: "Spectrum".to_string(),
            x_label: "Binding Energy (eV)".to_string(),
            y_label: "Intensity (Arbitrary Units)".to_string(),
        }
    }
}

impl Settings {
    /// Read settings from a JSON file.
    pub fn from_file(path: &Path) -> Result<Self> {
        let text = std::fs::read_to_string(path)
            .with_context(|| format!("reading settings file {}", path.display()))?;
        serde_json::from_str(&text)
            .with_context(|| format!("parsing settings file {}", path.display()))
    }

    /// Resolve the settings for this run.
    ///
    /// An explicitly named file (via [`CONFIG_ENV`]) must load; the default
    /// file is optional and falls back to built-in values when absent.
    pub fn load() -> Result<Self> {
        match std::env::var_os(CONFIG_ENV) {
            Some(path) => Self::from_file(&PathBuf::from(path)),
            None => Self::load_or_default(Path::new(CONFIG_FILE)),
        }
    }

    fn load_or_default(path: &Path) -> Result<Self> {
        if path.is_file() {
            log::info!("Using settings from {}", path.display());
            Self::from_file(path)
        } else {
            Ok(Self::default())
        }
    }
}
