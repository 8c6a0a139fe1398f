use crate::error::Result;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Published copy of the Apple Podcasts dataset.
pub const DEFAULT_SOURCE: &str =
    "https://raw.githubusercontent.com/TatKhachatryan/Apple-Podcasts-Dashboard/main/applepodcasts.csv";

/// Environment variable overriding the dataset location.
pub const SOURCE_ENV_VAR: &str = "PODCAST_DASHBOARD_SOURCE";

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
#[serde(default)]
pub struct DashboardSettings {
    /// URL or path of the dataset CSV
    pub source: String,
    /// Category selected when the dashboard opens
    pub default_category: String,
    /// Rows in the ranked view
    pub top_k: usize,
    pub top_page_size: usize,
    pub directory_page_size: usize,
}

impl Default for DashboardSettings {
    fn default() -> Self {
        Self {
            source: DEFAULT_SOURCE.to_owned(),
            default_category: "Sports".to_owned(),
            top_k: crate::podcasts::DEFAULT_TOP_K,
            top_page_size: 10,
            directory_page_size: 15,
        }
    }
}

impl DashboardSettings {
    /// Picks the dataset location: explicit flag, then environment, then file.
    pub fn resolve_source(&self, flag: Option<&str>) -> String {
        if let Some(source) = flag.filter(|s| !s.trim().is_empty()) {
            return source.to_owned();
        }
        if let Ok(source) = std::env::var(SOURCE_ENV_VAR)
            && !source.trim().is_empty()
        {
            return source;
        }
        self.source.clone()
    }
}

pub fn get_config_path() -> PathBuf {
    crate::utils::app_dir(dirs::config_dir()).join("config.json")
}

pub fn load_settings() -> DashboardSettings {
    load_settings_from(&get_config_path())
}

/// Reads settings, falling back to defaults when the file is missing or invalid.
pub fn load_settings_from(path: &Path) -> DashboardSettings {
    if path.exists()
        && let Ok(content) = std::fs::read_to_string(path)
    {
        match serde_json::from_str::<DashboardSettings>(&content) {
            Ok(settings) => return settings,
            Err(e) => tracing::warn!("Ignoring invalid config {}: {e}", path.display()),
        }
    }
    DashboardSettings::default()
}

pub fn save_settings(settings: &DashboardSettings) -> Result<()> {
    save_settings_to(settings, &get_config_path())
}

pub fn save_settings_to(settings: &DashboardSettings, path: &Path) -> Result<()> {
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)?;
    }
    let content = serde_json::to_string_pretty(settings)?;
    std::fs::write(path, content)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use anyhow::Result;

    #[test]
    fn test_defaults_match_dashboard_layout() {
        let settings = DashboardSettings::default();
        assert_eq!(settings.default_category, "Sports");
        assert_eq!(settings.top_k, 10);
        assert_eq!(settings.top_page_size, 10);
        assert_eq!(settings.directory_page_size, 15);
        assert!(settings.source.ends_with("applepodcasts.csv"));
    }

    #[test]
    fn test_save_then_load() -> Result<()> {
        let dir = tempfile::tempdir()?;
        let path = dir.path().join("nested").join("config.json");
        let settings = DashboardSettings {
            source: "testdata/podcasts.csv".to_owned(),
            default_category: "Comedy".to_owned(),
            ..Default::default()
        };
        save_settings_to(&settings, &path)?;
        assert_eq!(load_settings_from(&path), settings);
        Ok(())
    }

    #[test]
    fn test_partial_file_fills_defaults() -> Result<()> {
        let dir = tempfile::tempdir()?;
        let path = dir.path().join("config.json");
        std::fs::write(&path, r#"{ "top_k": 5 }"#)?;
        let settings = load_settings_from(&path);
        assert_eq!(settings.top_k, 5);
        assert_eq!(settings.default_category, "Sports");
        Ok(())
    }

    #[test]
    fn test_invalid_file_falls_back_to_defaults() -> Result<()> {
        let dir = tempfile::tempdir()?;
        let path = dir.path().join("config.json");
        std::fs::write(&path, "not json")?;
        assert_eq!(load_settings_from(&path), DashboardSettings::default());
        Ok(())
    }

    #[test]
    fn test_flag_overrides_source() {
        let settings = DashboardSettings::default();
        assert_eq!(settings.resolve_source(Some("local.csv")), "local.csv");
    }
}
