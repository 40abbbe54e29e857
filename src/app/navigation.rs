//! Navigation - Catalog Pages
//!
//! Defines the pages available in the component catalog.

use serde::{Deserialize, Serialize};

/// Available pages in the catalog
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum ActivePage {
    /// Overview page with component summaries
    #[default]
    Overview,
    /// Input field showcase
    Inputs,
    /// Data table showcase
    Tables,
}

impl ActivePage {
    /// Sidebar and header title for the page
    pub fn title(&self) -> &'static str {
        match self {
            ActivePage::Overview => "Overview",
            ActivePage::Inputs => "Input Fields",
            ActivePage::Tables => "Data Tables",
        }
    }

    /// Single-character label shown when the sidebar is collapsed
    pub fn short_label(&self) -> &'static str {
        match self {
            ActivePage::Overview => "O",
            ActivePage::Inputs => "I",
            ActivePage::Tables => "T",
        }
    }

    /// One-line description used on the overview page
    pub fn summary(&self) -> &'static str {
        match self {
            ActivePage::Overview => "Component catalog for the Beacon design system",
            ActivePage::Inputs => "Labeled text and password fields with validation states",
            ActivePage::Tables => "Sortable, selectable tables over typed row data",
        }
    }

    /// All pages in sidebar order
    pub fn all() -> &'static [ActivePage] {
        &[ActivePage::Overview, ActivePage::Inputs, ActivePage::Tables]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn all_pages_have_distinct_titles() {
        let mut titles: Vec<&str> = ActivePage::all().iter().map(|p| p.title()).collect();
        titles.sort();
        titles.dedup();
        assert_eq!(titles.len(), ActivePage::all().len());
    }

    #[test]
    fn default_page_is_overview() {
        assert_eq!(ActivePage::default(), ActivePage::Overview);
    }
}
