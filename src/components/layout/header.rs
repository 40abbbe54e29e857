//! Header Component
//!
//! Window-wide bar with the sidebar toggle, brand mark, and a readout of
//! the active page.

use gpui::{
    div, px, ClickEvent, Context, InteractiveElement, IntoElement, ParentElement, Render,
    StatefulInteractiveElement, Styled, Window,
};

use crate::app::entities::AppEntities;
use crate::constants::HEADER_HEIGHT;
use crate::theme::colors::BeaconColors;
use crate::theme::typography::Typography;

/// Header component
pub struct Header {
    entities: AppEntities,
}

impl Header {
    pub fn new(entities: AppEntities, cx: &mut Context<Self>) -> Self {
        cx.observe(&entities.nav, |_this, _, cx| cx.notify()).detach();
        cx.observe(&entities.settings, |_this, _, cx| cx.notify())
            .detach();

        Self { entities }
    }

    /// Hamburger control that collapses or expands the sidebar
    fn render_toggle(&self) -> impl IntoElement {
        let entities = self.entities.clone();

        div()
            .id("sidebar-toggle")
            .px_2()
            .py_1()
            .rounded_md()
            .text_size(px(Typography::BODY_LG))
            .text_color(BeaconColors::text_header())
            .cursor_pointer()
            .hover(|s| s.bg(gpui::rgba(0xffffff1a)))
            .on_click(move |_event: &ClickEvent, _window, cx| {
                entities.settings.update(cx, |settings, cx| {
                    settings.toggle_sidebar(cx);
                });
            })
            .child("\u{2630}")
    }

    /// Brand mark, product name, and crate version
    fn render_brand(&self) -> impl IntoElement {
        div()
            .flex()
            .items_center()
            .gap_2()
            .child(
                div()
                    .size(px(28.0))
                    .rounded_md()
                    .bg(BeaconColors::accent())
                    .flex()
                    .items_center()
                    .justify_center()
                    .text_size(px(Typography::BODY))
                    .text_color(BeaconColors::text_light())
                    .font_weight(gpui::FontWeight::BOLD)
                    .child("B"),
            )
            .child(
                div()
                    .text_size(px(Typography::SECTION_TITLE))
                    .text_color(BeaconColors::text_header())
                    .font_weight(gpui::FontWeight::SEMIBOLD)
                    .child("Beacon UI"),
            )
            .child(
                div()
                    .text_size(px(11.0))
                    .text_color(gpui::rgba(0xc7d2fe99))
                    .child(concat!("v", env!("CARGO_PKG_VERSION"))),
            )
    }
}

impl Render for Header {
    fn render(&mut self, _window: &mut Window, cx: &mut Context<Self>) -> impl IntoElement {
        let page_title = self.entities.nav.read(cx).active().title();

        div()
            .h(px(HEADER_HEIGHT))
            .w_full()
            .px_4()
            .flex()
            .items_center()
            .justify_between()
            .bg(BeaconColors::header_bg())
            .child(
                div()
                    .flex()
                    .items_center()
                    .gap_3()
                    .child(self.render_toggle())
                    .child(self.render_brand()),
            )
            .child(
                div()
                    .text_size(px(13.0))
                    .text_color(gpui::rgba(0xe0e7ffcc))
                    .child(page_title),
            )
    }
}
