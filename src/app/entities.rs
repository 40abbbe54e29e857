//! AppEntities - Shared Entity Handles
//!
//! The handles every view needs, registered as a GPUI global at startup
//! so click handlers can reach them without threading references.

use gpui::{App, AppContext, Entity, Global};
use tracing::warn;

use crate::state::{CatalogSettings, NavState, SettingsState};

/// Handles to the catalog's long-lived state entities
#[derive(Clone)]
pub struct AppEntities {
    /// Which page the sidebar points at
    pub nav: Entity<NavState>,
    /// Settings persisted between runs
    pub settings: Entity<SettingsState>,
}

impl Global for AppEntities {}

impl AppEntities {
    /// Create the state entities, restoring persisted settings first
    pub fn init(cx: &mut App) -> Self {
        let settings = CatalogSettings::try_load().unwrap_or_else(|e| {
            warn!(error = %e, "Failed to load settings, using defaults");
            CatalogSettings::default()
        });

        Self {
            nav: cx.new(|_| NavState::new(settings.startup_page)),
            settings: cx.new(|_| SettingsState::new(settings)),
        }
    }
}
