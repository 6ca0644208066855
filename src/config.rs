//! Guide configuration loaded from YAML
//!
//! Every field has a default, so an empty file (or no file) is valid:
//!
//! ```yaml
//! output_dir: downloads
//! dummy_dataset:
//!   source: data/dummy dataset.xlsx
//! super_button:
//!   default_sheets: ["Summary Deviation (%)", "Bidder's Rank"]
//! ```

use crate::error::{GuideError, GuideResult};
use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::debug;

pub const DEFAULT_VIDEO_URL: &str = "https://youtu.be/nS3xERgggqA?si=c3XHqEbMoLENDt62";

#[derive(Debug, Clone, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct GuideConfig {
    /// Directory the downloads are written to
    pub output_dir: PathBuf,
    pub dummy_dataset: DummyDatasetConfig,
    pub super_button: SuperButtonConfig,
    /// Directory holding the per-scope visualization images
    pub assets_dir: PathBuf,
    pub video_url: String,
}

impl Default for GuideConfig {
    fn default() -> Self {
        Self {
            output_dir: PathBuf::from("."),
            dummy_dataset: DummyDatasetConfig::default(),
            super_button: SuperButtonConfig::default(),
            assets_dir: PathBuf::from("assets"),
            video_url: DEFAULT_VIDEO_URL.to_string(),
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct DummyDatasetConfig {
    /// Existing workbook to ship verbatim instead of the built-in one
    pub source: Option<PathBuf>,
    pub file_name: String,
}

impl Default for DummyDatasetConfig {
    fn default() -> Self {
        Self {
            source: None,
            file_name: "Dummy Dataset - Standard Deviation.xlsx".to_string(),
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct SuperButtonConfig {
    pub file_name: String,
    /// Sheets exported when none are picked explicitly; empty means all
    pub default_sheets: Vec<String>,
}

impl Default for SuperButtonConfig {
    fn default() -> Self {
        Self {
            file_name: "Super Button - Standard Deviation.xlsx".to_string(),
            default_sheets: Vec::new(),
        }
    }
}

impl GuideConfig {
    /// Parse configuration from a YAML string
    pub fn from_yaml(content: &str) -> GuideResult<Self> {
        if content.trim().is_empty() {
            return Ok(Self::default());
        }
        Ok(serde_yaml::from_str(content)?)
    }

    /// Load configuration from a file
    pub fn load(path: &Path) -> GuideResult<Self> {
        let content = fs::read_to_string(path)?;
        let config = Self::from_yaml(&content)?;
        debug!(path = %path.display(), "loaded guide config");
        Ok(config)
    }

    /// Load from `path` when given, defaults otherwise
    pub fn load_or_default(path: Option<&Path>) -> GuideResult<Self> {
        match path {
            Some(p) => Self::load(p),
            None => Ok(Self::default()),
        }
    }

    /// Resolve the default sheet selection against the available sheets
    pub fn default_sheets(&self, available: &[String]) -> GuideResult<Vec<String>> {
        if self.super_button.default_sheets.is_empty() {
            return Ok(available.to_vec());
        }

        for sheet in &self.super_button.default_sheets {
            if !available.contains(sheet) {
                return Err(GuideError::Config(format!(
                    "default sheet '{}' is not one of: {}",
                    sheet,
                    available.join(", ")
                )));
            }
        }
        Ok(self.super_button.default_sheets.clone())
    }

    pub fn dummy_dataset_path(&self) -> PathBuf {
        self.output_dir.join(&self.dummy_dataset.file_name)
    }

    pub fn super_button_path(&self) -> PathBuf {
        self.output_dir.join(&self.super_button.file_name)
    }
}
