//! Colors - Beacon Palette
//!
//! A zinc neutral ramp with an indigo accent. Components never hold raw
//! hex values except for hover shades derived from these.

use gpui::{Rgba, rgb};

/// Palette accessors for the catalog theme
pub struct BeaconColors;

impl BeaconColors {
    // Surfaces
    /// Window background, zinc 50
    pub fn background() -> Rgba { rgb(0xfafafa) }
    /// Content area behind the pages
    pub fn content_bg() -> Rgba { rgb(0xffffff) }
    /// Sidebar surface, zinc 50
    pub fn sidebar_bg() -> Rgba { rgb(0xfafafa) }
    /// Cards and sections
    pub fn card_bg() -> Rgba { rgb(0xffffff) }
    /// Window header, indigo 900
    pub fn header_bg() -> Rgba { rgb(0x312e81) }

    // Text
    /// Body text, zinc 900
    pub fn text_primary() -> Rgba { rgb(0x18181b) }
    /// Supporting text, zinc 600
    pub fn text_secondary() -> Rgba { rgb(0x52525b) }
    /// De-emphasized text, zinc 400
    pub fn text_muted() -> Rgba { rgb(0xa1a1aa) }
    /// Text on dark or colored surfaces
    pub fn text_light() -> Rgba { rgb(0xfafafa) }
    /// Text on the header bar, indigo 100
    pub fn text_header() -> Rgba { rgb(0xe0e7ff) }

    // Accent and status
    /// Brand accent, indigo 600
    pub fn accent() -> Rgba { rgb(0x4f46e5) }
    /// Positive state, green 600
    pub fn success() -> Rgba { rgb(0x16a34a) }
    /// Caution state, amber 600
    pub fn warning() -> Rgba { rgb(0xd97706) }
    /// Failure state, red 600
    pub fn danger() -> Rgba { rgb(0xdc2626) }
    /// Neutral notice, sky 600
    pub fn info() -> Rgba { rgb(0x0284c7) }

    // Edges
    /// Hairline borders, zinc 200
    pub fn border() -> Rgba { rgb(0xe4e4e7) }
    /// Border of the focused control
    pub fn border_focus() -> Rgba { rgb(0x4f46e5) }

    // Buttons
    pub fn button_primary_bg() -> Rgba { rgb(0x4f46e5) }
    pub fn button_primary_text() -> Rgba { rgb(0xffffff) }
    pub fn button_danger_bg() -> Rgba { rgb(0xdc2626) }
    pub fn button_danger_text() -> Rgba { rgb(0xfef2f2) }
    pub fn button_ghost_text() -> Rgba { rgb(0x52525b) }

    // Tables
    /// Column header strip, zinc 100
    pub fn table_header_bg() -> Rgba { rgb(0xf4f4f5) }
    /// Hovered row tint
    pub fn table_row_hover() -> Rgba { rgb(0xf4f4f5) }
    /// Zebra stripe for even rows
    pub fn table_row_alt() -> Rgba { rgb(0xfafafa) }
    /// Selected row tint, indigo 100
    pub fn table_row_selected() -> Rgba { rgb(0xe0e7ff) }

    // Inputs
    pub fn input_bg() -> Rgba { rgb(0xffffff) }
    /// Background of the filled variant, zinc 100
    pub fn input_filled_bg() -> Rgba { rgb(0xf4f4f5) }
    /// Resting border, zinc 300
    pub fn input_border() -> Rgba { rgb(0xd4d4d8) }
    /// Border while the value fails validation
    pub fn input_border_invalid() -> Rgba { rgb(0xdc2626) }
    /// Placeholder text, zinc 400
    pub fn input_placeholder() -> Rgba { rgb(0xa1a1aa) }
}
