//! Application State Modules

pub mod nav_state;
pub mod settings_state;

pub use nav_state::NavState;
pub use settings_state::{CatalogSettings, SettingsState};
