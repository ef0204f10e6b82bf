//! Catalog and suggestion items offered to the host launcher.
//!
//! The catalog is one entry per known device (or a single guidance
//! entry when there are none); selecting a device yields the fixed,
//! ordered list of enabled actions.

use crate::config::Config;
use crate::registry::Device;

/// The seven remote actions, in suggestion-ranking order. The order is
/// part of the contract with the host UI.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ActionKind {
    Clipboard,
    Notification,
    Download,
    Website,
    Find,
    Speak,
    App,
}

impl ActionKind {
    pub const ALL: [ActionKind; 7] = [
        ActionKind::Clipboard,
        ActionKind::Notification,
        ActionKind::Download,
        ActionKind::Website,
        ActionKind::Find,
        ActionKind::Speak,
        ActionKind::App,
    ];

    /// Stable tag, matched against the configured disabled-actions set.
    pub fn tag(self) -> &'static str {
        match self {
            Self::Clipboard => "clipboard",
            Self::Notification => "notification",
            Self::Download => "download",
            Self::Website => "website",
            Self::Find => "find",
            Self::Speak => "speak",
            Self::App => "app",
        }
    }

    pub fn from_tag(tag: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|kind| kind.tag() == tag)
    }
}

/// What selecting an item means to the dispatcher.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Target {
    /// User-facing guidance; not selectable, nothing to execute.
    Guidance,
    /// A device entry carrying the device id to select.
    Device(String),
    /// An executable action against the selected device.
    Action(ActionKind),
}

/// One entry handed to the host launcher.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Item {
    pub label: String,
    pub description: String,
    pub target: Target,
}

/// Build the device catalog.
///
/// With no devices at all this produces exactly one guidance entry,
/// worded for the likely cause: a missing API key, or a key that
/// returned no registrations.
pub fn build_catalog(devices: &[Device], config: &Config) -> Vec<Item> {
    if devices.is_empty() {
        let (label, description) = if config.api_key.is_empty() {
            (
                "Join: API key missing",
                "Please configure the plugin with your personal API key",
            )
        } else {
            (
                "Join: No registered devices",
                "No registered devices found. Can also be due to invalid API key in configuration file",
            )
        };
        return vec![Item {
            label: label.into(),
            description: description.into(),
            target: Target::Guidance,
        }];
    }

    devices
        .iter()
        .map(|device| Item {
            label: format!("Join: {}", device.name),
            description: format!("Select action for {}", device.name),
            target: Target::Device(device.id.clone()),
        })
        .collect()
}

/// Build the action suggestions for the selected device, excluding any
/// actions disabled in the configuration. Labels embed the current
/// free-text input where it will be sent along.
pub fn build_actions(config: &Config, device_id: &str, input: &str) -> Vec<Item> {
    ActionKind::ALL
        .into_iter()
        .filter(|kind| !config.is_disabled(kind.tag()))
        .map(|kind| {
            let (label, description) = match kind {
                ActionKind::Clipboard => (
                    "Sync computer clipboard to device".to_string(),
                    format!("Syncs clipboard contents [text] to your device [android] {device_id}"),
                ),
                ActionKind::Notification => (
                    format!("Send notification: {input}"),
                    "Send text as notification to your device".to_string(),
                ),
                ActionKind::Download => (
                    format!("Download: {input}"),
                    "Enter URL of file to download it directly to your device".to_string(),
                ),
                ActionKind::Website => (
                    format!("Open URL: {input}"),
                    "Enter URL of website you want to launch on your device".to_string(),
                ),
                ActionKind::Find => (
                    "Find device".to_string(),
                    "Will make your device ring loudly [Android]".to_string(),
                ),
                ActionKind::Speak => (
                    format!("Speak: {input}"),
                    "Speak sentence on device [Android]".to_string(),
                ),
                ActionKind::App => (
                    format!("Open App: {input}"),
                    "Launch an app remotely on your device [Android]".to_string(),
                ),
            };
            Item {
                label,
                description,
                target: Target::Action(kind),
            }
        })
        .collect()
}
