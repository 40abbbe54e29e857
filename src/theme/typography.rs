//! Type Scale - Shared Font Sizes
//!
//! Pixel sizes used across the catalog. Components resolve their text size
//! from these constants so pages and controls stay visually consistent.

/// Named font sizes in logical pixels
pub struct Typography;

impl Typography {
    /// Feature page headings
    pub const PAGE_TITLE: f32 = 24.0;
    /// Card titles and the window brand text
    pub const SECTION_TITLE: f32 = 18.0;
    /// Text inside large controls
    pub const BODY_LG: f32 = 16.0;
    /// Default text for controls and table cells
    pub const BODY: f32 = 14.0;
    /// Labels, helper lines and small controls
    pub const CAPTION: f32 = 12.0;
}
