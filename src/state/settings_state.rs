//! Settings State
//!
//! Persisted catalog preferences: startup page and sidebar collapse.

use gpui::Context;
use serde::{Deserialize, Serialize};
use tracing::{error, info};

use crate::app::navigation::ActivePage;
use crate::constants::SETTINGS_FILE;
use crate::error::Result;
use crate::utils::config_store::{load_config, save_config};

/// Persisted catalog settings
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CatalogSettings {
    /// Page shown when the app starts
    pub startup_page: ActivePage,
    /// Whether the sidebar starts collapsed
    pub sidebar_collapsed: bool,
}

impl CatalogSettings {
    /// Load settings from the config file, falling back to defaults
    pub fn try_load() -> Result<Self> {
        load_config(SETTINGS_FILE)
    }
}

/// Entity state wrapping the persisted settings
#[derive(Debug)]
pub struct SettingsState {
    settings: CatalogSettings,
}

impl SettingsState {
    pub fn new(settings: CatalogSettings) -> Self {
        Self { settings }
    }

    pub fn settings(&self) -> &CatalogSettings {
        &self.settings
    }

    pub fn sidebar_collapsed(&self) -> bool {
        self.settings.sidebar_collapsed
    }

    pub fn startup_page(&self) -> ActivePage {
        self.settings.startup_page
    }

    /// Toggle sidebar collapse (from header click) and persist
    pub fn toggle_sidebar(&mut self, cx: &mut Context<Self>) {
        self.settings.sidebar_collapsed = !self.settings.sidebar_collapsed;
        cx.notify();
        Self::persist(self.settings.clone(), cx);
    }

    /// Remember which page to open on the next launch
    pub fn set_startup_page(&mut self, page: ActivePage, cx: &mut Context<Self>) {
        if self.settings.startup_page != page {
            self.settings.startup_page = page;
            cx.notify();
            Self::persist(self.settings.clone(), cx);
        }
    }

    /// Save settings to disk in the background
    fn persist(settings: CatalogSettings, cx: &mut Context<Self>) {
        cx.background_executor()
            .spawn(async move {
                if let Err(e) = save_config(SETTINGS_FILE, &settings) {
                    error!(error = %e, "Failed to save settings");
                } else {
                    info!("Settings saved");
                }
            })
            .detach();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn settings_round_trip_through_toml() {
        let settings = CatalogSettings {
            startup_page: ActivePage::Tables,
            sidebar_collapsed: true,
        };
        let text = toml::to_string(&settings).unwrap();
        let parsed: CatalogSettings = toml::from_str(&text).unwrap();
        assert_eq!(parsed, settings);
    }

    #[test]
    fn settings_parse_from_plain_toml() {
        let parsed: CatalogSettings =
            toml::from_str("startup_page = \"Inputs\"\nsidebar_collapsed = false\n").unwrap();
        assert_eq!(parsed.startup_page, ActivePage::Inputs);
        assert!(!parsed.sidebar_collapsed);
    }

    #[test]
    fn default_settings_start_on_overview() {
        let settings = CatalogSettings::default();
        assert_eq!(settings.startup_page, ActivePage::Overview);
        assert!(!settings.sidebar_collapsed);
    }
}
