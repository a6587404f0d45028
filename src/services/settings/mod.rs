use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{anyhow, Context, Result};
use directories::ProjectDirs;

use crate::models::settings::PreviewSettings;

const SETTINGS_FILE_NAME: &str = "preview.toml";

/// Loads and stores [`PreviewSettings`] as a TOML file.
pub struct SettingsService {
    path: PathBuf,
}

impl SettingsService {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// `<config dir>/preview.toml`, or `None` when no home directory is known.
    pub fn default_path() -> Option<PathBuf> {
        ProjectDirs::from("com", "Cathrin", "CalendarPreview")
            .map(|dirs| dirs.config_dir().join(SETTINGS_FILE_NAME))
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Read settings. A missing file yields the defaults.
    pub fn get(&self) -> Result<PreviewSettings> {
        if !self.path.exists() {
            log::info!(
                "No settings file at {}, using defaults",
                self.path.display()
            );
            return Ok(PreviewSettings::default());
        }

        let raw = fs::read_to_string(&self.path)
            .with_context(|| format!("Failed to read settings from {}", self.path.display()))?;
        let settings: PreviewSettings = toml::from_str(&raw)
            .with_context(|| format!("Failed to parse settings in {}", self.path.display()))?;
        settings
            .validate()
            .map_err(|e| anyhow!("Invalid settings: {}", e))?;

        log::info!("Loaded settings from {}", self.path.display());
        Ok(settings)
    }

    /// Write settings, creating the parent directory if needed.
    pub fn update(&self, settings: &PreviewSettings) -> Result<()> {
        settings
            .validate()
            .map_err(|e| anyhow!("Invalid settings: {}", e))?;

        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent).with_context(|| {
                format!("Failed to create settings directory {}", parent.display())
            })?;
        }

        let raw = toml::to_string_pretty(settings).context("Failed to serialize settings")?;
        fs::write(&self.path, raw)
            .with_context(|| format!("Failed to write settings to {}", self.path.display()))?;
        Ok(())
    }
}

/// Settings from the default location, falling back to defaults on any error.
pub fn load_settings_or_default() -> PreviewSettings {
    let Some(path) = SettingsService::default_path() else {
        log::warn!("Unable to resolve config directory; using default settings");
        return PreviewSettings::default();
    };

    match SettingsService::new(path).get() {
        Ok(settings) => settings,
        Err(err) => {
            log::warn!("{:#}; using default settings", err);
            PreviewSettings::default()
        }
    }
}
