use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

use crate::app::domain::style::{
    ControlState, FamilyChoice, FeatureSet, FeatureTag, Subfamily,
};
use crate::app::infrastructure::error::{AppError, Result};

/// Style the preview starts with. Controls are seeded from this, not from
/// whatever the widgets happen to show.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DefaultStyle {
    #[serde(default)]
    pub family: FamilyChoice,

    #[serde(default)]
    pub subfamily: Subfamily,

    #[serde(default = "default_size_px")]
    pub size_px: u32,

    #[serde(default = "default_ligatures")]
    pub ligatures: bool,

    /// Feature tags enabled at startup. Each must also be declared in
    /// `SpecimenSettings::features`.
    #[serde(default)]
    pub features: Vec<FeatureTag>,
}

impl Default for DefaultStyle {
    fn default() -> Self {
        Self {
            family: FamilyChoice::default(),
            subfamily: Subfamily::default(),
            size_px: default_size_px(),
            ligatures: default_ligatures(),
            features: Vec::new(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SizeRange {
    pub min: u32,
    pub max: u32,
}

impl SizeRange {
    pub fn clamp(&self, px: u32) -> u32 {
        px.clamp(self.min, self.max)
    }
}

impl Default for SizeRange {
    fn default() -> Self {
        Self { min: 8, max: 72 }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SpecimenSettings {
    #[serde(default)]
    pub default_style: DefaultStyle,

    /// Feature toggles in the order they are shown and joined.
    #[serde(default = "default_features")]
    pub features: Vec<FeatureTag>,

    #[serde(default)]
    pub size_range: SizeRange,

    /// Directory holding the face files. Falls back to the config directory.
    #[serde(default)]
    pub font_dir: Option<PathBuf>,

    #[serde(default = "default_sample_text")]
    pub sample_text: String,

    #[serde(default = "default_loading_text")]
    pub loading_text: String,
}

fn default_size_px() -> u32 {
    16
}

fn default_ligatures() -> bool {
    true
}

fn default_features() -> Vec<FeatureTag> {
    ["cv33", "ss11"]
        .iter()
        .filter_map(|tag| FeatureTag::new(tag).ok())
        .collect()
}

fn default_sample_text() -> String {
    "彼らの機器や装置はすべて生命体だ。\nAlmost before we knew it, we had left the ground.\n\n!=->>++:=".to_string()
}

fn default_loading_text() -> String {
    "読み込み中...".to_string()
}

impl Default for SpecimenSettings {
    fn default() -> Self {
        Self {
            default_style: DefaultStyle::default(),
            features: default_features(),
            size_range: SizeRange::default(),
            font_dir: None,
            sample_text: default_sample_text(),
            loading_text: default_loading_text(),
        }
    }
}

impl SpecimenSettings {
    /// Load settings from disk, or create default if not exists
    pub fn load() -> Self {
        Self::load_from(&Self::get_config_path())
    }

    pub fn load_from(path: &Path) -> Self {
        match fs::read_to_string(path) {
            Ok(contents) => match serde_json::from_str(&contents) {
                Ok(settings) => settings,
                Err(e) => {
                    log::warn!("Failed to parse settings: {}. Using defaults.", e);
                    Self::default()
                }
            },
            Err(_) => {
                // File doesn't exist, use defaults
                let default = Self::default();
                if let Err(e) = default.save_to(path) {
                    log::warn!("Could not write default settings to {}: {}", path.display(), e);
                }
                default
            }
        }
    }

    /// Save settings to disk
    pub fn save(&self) -> Result<()> {
        self.save_to(&Self::get_config_path())
    }

    pub fn save_to(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }

        let json = serde_json::to_string_pretty(self)?;
        fs::write(path, json)?;

        Ok(())
    }

    /// Get config file path (cross-platform)
    pub fn get_config_path() -> PathBuf {
        let mut path = config_root();
        path.push("settings.json");
        path
    }

    pub fn font_dir(&self) -> PathBuf {
        match self.font_dir {
            Some(ref dir) => dir.clone(),
            None => {
                let mut path = config_root();
                path.push("fonts");
                path
            }
        }
    }

    pub fn validate(&self) -> Result<()> {
        let range = self.size_range;
        if range.min == 0 || range.min > range.max {
            return Err(AppError::Config(format!(
                "invalid size range {}..={}",
                range.min, range.max
            )));
        }
        for tag in &self.default_style.features {
            if !self.features.contains(tag) {
                return Err(AppError::Config(format!(
                    "default feature '{}' is not declared",
                    tag
                )));
            }
        }
        Ok(())
    }

    /// Control state the preview starts from.
    pub fn initial_control_state(&self) -> Result<ControlState> {
        self.validate()?;

        let mut features = FeatureSet::new(&self.features)?;
        for tag in &self.default_style.features {
            features.set(tag.as_str(), true)?;
        }

        Ok(ControlState {
            axes: self.default_style.subfamily.axes(),
            family: self.default_style.family,
            size_px: self.size_range.clamp(self.default_style.size_px),
            ligatures: self.default_style.ligatures,
            features,
        })
    }
}

fn config_root() -> PathBuf {
    let mut path = dirs::config_dir().unwrap_or_else(|| PathBuf::from("."));
    path.push("firple-specimen");
    path
}
