//! Configuration management for join-push-rs.
//!
//! Loads config from YAML files in standard locations, with `main` and
//! `android notifications` sections and fallback defaults for every
//! field.

use std::collections::HashSet;
use std::path::{Path, PathBuf};

use serde::Deserialize;
use tracing::info;

/// Appearance fields for the notification action. All are passed to the
/// API as-is (already URL-safe values, or empty to use device defaults).
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct NotificationConfig {
    pub title: String,
    pub icon: String,
    pub smallicon: String,
    pub priority: String,
    pub sound: String,
}

/// On-disk schema. Comma-separated list fields are split into
/// collections when converted into [`Config`].
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
struct MainSection {
    api_key: String,
    tts_language: String,
    device_groups: String,
    disabled_actions: String,
}

impl Default for MainSection {
    fn default() -> Self {
        Self {
            api_key: String::new(),
            tts_language: "EN".into(),
            device_groups: String::new(),
            disabled_actions: String::new(),
        }
    }
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
struct ConfigFile {
    main: MainSection,
    #[serde(rename = "android notifications")]
    notifications: NotificationConfig,
}

/// Loaded configuration, immutable between reloads.
///
/// No validation is applied to the API key or any URL-like field;
/// bad values surface when the remote call fails.
#[derive(Debug, Clone)]
pub struct Config {
    pub api_key: String,
    pub tts_language: String,
    pub device_groups: Vec<String>,
    pub disabled_actions: HashSet<String>,
    pub notifications: NotificationConfig,
}

impl Default for Config {
    fn default() -> Self {
        ConfigFile::default().into()
    }
}

impl From<ConfigFile> for Config {
    fn from(file: ConfigFile) -> Self {
        Self {
            api_key: file.main.api_key,
            tts_language: file.main.tts_language,
            device_groups: split_list(&file.main.device_groups),
            disabled_actions: split_list(&file.main.disabled_actions).into_iter().collect(),
            notifications: file.notifications,
        }
    }
}

/// Split a comma-separated settings value into trimmed, non-empty entries.
fn split_list(raw: &str) -> Vec<String> {
    raw.split(',')
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(String::from)
        .collect()
}

impl Config {
    /// Load configuration from YAML file.
    ///
    /// Searches standard locations if no path is provided:
    /// 1. ./join-push.yaml
    /// 2. ~/.config/join-push/join-push.yaml
    /// 3. /etc/join-push/join-push.yaml
    pub fn load(path: Option<&Path>) -> Self {
        let resolved = path.map(PathBuf::from).or_else(|| {
            let candidates = [
                std::env::current_dir().ok().map(|d| d.join("join-push.yaml")),
                dirs::home_dir().map(|h| h.join(".config/join-push/join-push.yaml")),
                Some(PathBuf::from("/etc/join-push/join-push.yaml")),
            ];
            candidates.into_iter().flatten().find(|p| p.exists())
        });

        let Some(config_path) = resolved else {
            info!("No config file found, using defaults");
            return Self::default();
        };

        match std::fs::read_to_string(&config_path) {
            Ok(contents) => match Self::parse(&contents) {
                Ok(config) => {
                    info!("Loaded config from {}", config_path.display());
                    config
                }
                Err(e) => {
                    tracing::warn!("Failed to parse {}: {e}, using defaults", config_path.display());
                    Self::default()
                }
            },
            Err(e) => {
                tracing::warn!("Failed to read {}: {e}, using defaults", config_path.display());
                Self::default()
            }
        }
    }

    fn parse(contents: &str) -> Result<Self, serde_yml::Error> {
        serde_yml::from_str::<ConfigFile>(contents).map(Config::from)
    }

    /// Whether an action tag was disabled in the configuration.
    pub fn is_disabled(&self, tag: &str) -> bool {
        self.disabled_actions.contains(tag)
    }
}
