//! UI Constants
//!
//! Centralized UI constants for consistent layout across the catalog.

/// Application header height
pub const HEADER_HEIGHT: f32 = 48.0;

/// Sidebar navigation width in pixels
pub const SIDEBAR_WIDTH: f32 = 200.0;
pub const SIDEBAR_COLLAPSED_WIDTH: f32 = 48.0;

/// Default window dimensions
pub const DEFAULT_WINDOW_WIDTH: f32 = 1280.0;
pub const DEFAULT_WINDOW_HEIGHT: f32 = 860.0;

/// DataTable layout defaults
pub const TABLE_ROW_HEIGHT: f32 = 36.0;
pub const TABLE_HEADER_HEIGHT: f32 = 40.0;

/// Settings file name inside the platform config directory
pub const SETTINGS_FILE: &str = "beacon-ui.toml";
