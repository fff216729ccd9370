//! Settings service - form-ready settings shape

use std::sync::Arc;

use gamelog_domain::{Result, SettingsForm, UserSettings};

use crate::dashboard::ports::LogStore;

/// Composes the settings screen.
pub struct SettingsService {
    store: Arc<dyn LogStore>,
}

impl SettingsService {
    /// Create a new settings service.
    pub fn new(store: Arc<dyn LogStore>) -> Self {
        Self { store }
    }

    /// The raw settings as the store persists them.
    pub async fn settings(&self) -> Result<UserSettings> {
        self.store.user_settings().await
    }

    /// Form-ready settings for the settings screen. This is the only
    /// place the `;`-joined executable path list is split.
    pub async fn settings_form(&self) -> Result<SettingsForm> {
        let settings = self.store.user_settings().await?;
        Ok(SettingsForm::from(&settings))
    }
}
