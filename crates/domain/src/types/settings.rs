//! User settings types
//!
//! Preferences persisted by the store. The raw shape keeps
//! `executable_paths` as the store-serialized `;`-joined string; only
//! the form-ready shape splits it.

use serde::{Deserialize, Serialize};

/// Process-monitoring preferences.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProcessMonitoringSettings {
    pub enabled: bool,
    pub directory_depth: u32,
}

/// User settings as persisted by the store.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserSettings {
    pub username: String,

    /// `;`-joined executable path list, serialized by the store.
    pub executable_paths: String,

    pub process_monitoring: ProcessMonitoringSettings,

    pub autostart: bool,

    /// Set until the onboarding flow completes.
    pub is_first_run: bool,

    /// Catalog provider credentials. Absent until the user configures
    /// them in settings.
    pub twitch_client_id: Option<String>,
    pub twitch_client_secret: Option<String>,
}

/// Form-ready settings shape for the settings screen.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SettingsForm {
    pub username: String,
    pub executable_paths: Vec<String>,
    pub process_monitoring_enabled: bool,
    pub process_monitoring_directory_depth: u32,
    pub autostart: bool,
}

impl SettingsForm {
    /// The documented zero-valued form, returned without any backend
    /// call when the host is not attached. Directory depth keeps the
    /// form contract's default.
    pub fn empty() -> Self {
        Self {
            username: String::new(),
            executable_paths: Vec::new(),
            process_monitoring_enabled: false,
            process_monitoring_directory_depth: 3,
            autostart: false,
        }
    }
}

impl From<&UserSettings> for SettingsForm {
    fn from(settings: &UserSettings) -> Self {
        let executable_paths = if settings.executable_paths.is_empty() {
            Vec::new()
        } else {
            settings.executable_paths.split(';').map(str::to_string).collect()
        };

        Self {
            username: settings.username.clone(),
            executable_paths,
            process_monitoring_enabled: settings.process_monitoring.enabled,
            process_monitoring_directory_depth: settings.process_monitoring.directory_depth,
            autostart: settings.autostart,
        }
    }
}
