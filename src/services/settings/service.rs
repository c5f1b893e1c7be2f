use crate::models::settings::Settings;
use anyhow::{anyhow, Context, Result};
use directories::ProjectDirs;
use std::fs;
use std::path::{Path, PathBuf};

const SETTINGS_FILE: &str = "settings.toml";

/// Loads and saves [`Settings`] as TOML
pub struct SettingsService {
    path: PathBuf,
}

impl SettingsService {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Service backed by `settings.toml` in the platform config directory
    pub fn from_project_dirs() -> Self {
        let dirs = ProjectDirs::from("com", "ResourceScheduler", "ResourceScheduler");
        let path = if let Some(dirs) = dirs {
            dirs.config_dir().join(SETTINGS_FILE)
        } else {
            log::warn!("Unable to resolve project directory; using current dir for settings");
            PathBuf::from(SETTINGS_FILE)
        };
        Self::new(path)
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Get the current settings, falling back to defaults when no file exists
    pub fn get(&self) -> Result<Settings> {
        if !self.path.exists() {
            return Ok(Settings::default());
        }

        let data = fs::read_to_string(&self.path)
            .with_context(|| format!("failed to read settings from {}", self.path.display()))?;
        let settings: Settings = toml::from_str(&data)
            .with_context(|| format!("failed to parse settings from {}", self.path.display()))?;
        settings
            .validate()
            .map_err(|e| anyhow!("Invalid settings in {}: {}", self.path.display(), e))?;

        Ok(settings)
    }

    /// Update settings
    pub fn update(&self, settings: &Settings) -> Result<()> {
        settings
            .validate()
            .map_err(|e| anyhow!("Invalid settings: {}", e))?;

        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent)
                .with_context(|| format!("failed to create dir {}", parent.display()))?;
        }

        let data = toml::to_string_pretty(settings).context("Failed to serialize settings")?;
        fs::write(&self.path, data)
            .with_context(|| format!("failed to write settings to {}", self.path.display()))?;

        Ok(())
    }
}

/// Load settings, logging and falling back to defaults on any error
pub fn load_settings_or_default(service: &SettingsService) -> Settings {
    match service.get() {
        Ok(settings) => settings,
        Err(err) => {
            log::warn!("Using default settings: {:#}", err);
            Settings::default()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::settings::ColorMode;
    use pretty_assertions::assert_eq;
    use tempfile::TempDir;

    fn service_in(dir: &TempDir) -> SettingsService {
        SettingsService::new(dir.path().join("nested").join(SETTINGS_FILE))
    }

    #[test]
    fn test_missing_file_yields_defaults() {
        let dir = TempDir::new().unwrap();
        let service = service_in(&dir);
        assert_eq!(service.get().unwrap(), Settings::default());
    }

    #[test]
    fn test_update_then_get() {
        let dir = TempDir::new().unwrap();
        let service = service_in(&dir);

        let settings = Settings {
            cell_width: 64.0,
            initial_resources: 4,
            color_mode: ColorMode::Palette,
            ..Settings::default()
        };
        service.update(&settings).unwrap();

        assert_eq!(service.get().unwrap(), settings);
    }

    #[test]
    fn test_partial_file_fills_defaults() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join(SETTINGS_FILE);
        fs::write(&path, "cell_width = 80.0\ncolor_mode = \"palette\"\n").unwrap();

        let settings = SettingsService::new(&path).get().unwrap();
        assert_eq!(settings.cell_width, 80.0);
        assert_eq!(settings.color_mode, ColorMode::Palette);
        assert_eq!(settings.row_height, Settings::default().row_height);
    }

    #[test]
    fn test_invalid_file_is_an_error() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join(SETTINGS_FILE);
        fs::write(&path, "cell_width = -3.0\n").unwrap();

        let service = SettingsService::new(&path);
        assert!(service.get().is_err());
        assert_eq!(load_settings_or_default(&service), Settings::default());
    }

    #[test]
    fn test_update_rejects_invalid_settings() {
        let dir = TempDir::new().unwrap();
        let service = service_in(&dir);
        let settings = Settings {
            initial_resources: 0,
            ..Settings::default()
        };
        assert!(service.update(&settings).is_err());
        assert!(!service.path().exists());
    }
}
