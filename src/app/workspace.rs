//! Workspace - Main Shell Layout
//!
//! Header across the top, sidebar on the left, and the active catalog
//! page filling the rest.

use gpui::{
    div, prelude::*, Context, Entity, IntoElement, ParentElement, Render, Styled, Window,
};

use crate::app::entities::AppEntities;
use crate::app::navigation::ActivePage;
use crate::components::layout::header::Header;
use crate::components::layout::sidebar::Sidebar;
use crate::features::home::page::HomePage;
use crate::features::inputs::page::InputsPage;
use crate::features::tables::page::TablesPage;
use crate::theme::colors::BeaconColors;

/// Root view that arranges the shell around the active page
pub struct Workspace {
    entities: AppEntities,
    header: Entity<Header>,
    sidebar: Entity<Sidebar>,
    // Page views, created lazily and kept so their state survives
    // navigation
    home_page: Option<Entity<HomePage>>,
    inputs_page: Option<Entity<InputsPage>>,
    tables_page: Option<Entity<TablesPage>>,
}

impl Workspace {
    pub fn new(entities: AppEntities, cx: &mut Context<Self>) -> Self {
        let header = cx.new(|cx| Header::new(entities.clone(), cx));
        let sidebar = cx.new(|cx| Sidebar::new(entities.clone(), cx));

        cx.observe(&entities.nav, |_this, _, cx| cx.notify()).detach();

        Self {
            entities,
            header,
            sidebar,
            home_page: None,
            inputs_page: None,
            tables_page: None,
        }
    }

    /// Get or create the view for the given page
    fn get_or_create_page(
        &mut self,
        page: ActivePage,
        cx: &mut Context<Self>,
    ) -> impl IntoElement + use<> {
        match page {
            ActivePage::Overview => self
                .home_page
                .get_or_insert_with(|| cx.new(HomePage::new))
                .clone()
                .into_any_element(),
            ActivePage::Inputs => self
                .inputs_page
                .get_or_insert_with(|| cx.new(InputsPage::new))
                .clone()
                .into_any_element(),
            ActivePage::Tables => self
                .tables_page
                .get_or_insert_with(|| cx.new(TablesPage::new))
                .clone()
                .into_any_element(),
        }
    }
}

impl Render for Workspace {
    fn render(&mut self, _window: &mut Window, cx: &mut Context<Self>) -> impl IntoElement {
        let active_page = self.entities.nav.read(cx).active();
        let content = self.get_or_create_page(active_page, cx);

        let body = div()
            .flex_1()
            .flex()
            .overflow_hidden()
            .child(self.sidebar.clone())
            .child(
                div()
                    .flex_1()
                    .flex()
                    .flex_col()
                    .overflow_hidden()
                    .bg(BeaconColors::content_bg())
                    .child(content),
            );

        div()
            .size_full()
            .flex()
            .flex_col()
            .bg(BeaconColors::background())
            .child(self.header.clone())
            .child(body)
    }
}
