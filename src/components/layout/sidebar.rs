//! Sidebar Component
//!
//! Navigation rail with one pill per catalog page. Collapses to short
//! labels when toggled from the header.

use gpui::{
    div, prelude::*, px, ClickEvent, Context, InteractiveElement, IntoElement, ParentElement,
    Render, SharedString, StatefulInteractiveElement, Styled, Window,
};

use crate::app::entities::AppEntities;
use crate::app::navigation::ActivePage;
use crate::constants::{SIDEBAR_COLLAPSED_WIDTH, SIDEBAR_WIDTH};
use crate::theme::colors::BeaconColors;
use crate::theme::typography::Typography;

/// Sidebar component
pub struct Sidebar {
    entities: AppEntities,
}

impl Sidebar {
    pub fn new(entities: AppEntities, cx: &mut Context<Self>) -> Self {
        cx.observe(&entities.nav, |_this, _, cx| cx.notify()).detach();
        cx.observe(&entities.settings, |_this, _, cx| cx.notify())
            .detach();

        Self { entities }
    }

    fn render_nav_item(
        &self,
        page: ActivePage,
        active_page: ActivePage,
        collapsed: bool,
    ) -> impl IntoElement {
        let is_active = page == active_page;
        let entities = self.entities.clone();

        let (bg, text, weight) = if is_active {
            (
                gpui::rgba(0x4f46e514),
                BeaconColors::accent(),
                gpui::FontWeight::MEDIUM,
            )
        } else {
            (
                gpui::rgba(0x00000000),
                BeaconColors::text_secondary(),
                gpui::FontWeight::NORMAL,
            )
        };

        let mut item = div()
            .id(SharedString::from(format!("nav-{:?}", page)))
            .mx_2()
            .py_2()
            .rounded_md()
            .bg(bg)
            .text_color(text)
            .text_size(px(Typography::BODY))
            .font_weight(weight)
            .cursor_pointer()
            .hover(|s| s.bg(gpui::rgba(0x4f46e50c)))
            .on_click(move |_event: &ClickEvent, _window, cx| {
                entities.nav.update(cx, |nav, cx| {
                    nav.go_to(page, cx);
                });
                entities.settings.update(cx, |settings, cx| {
                    settings.set_startup_page(page, cx);
                });
            });

        if collapsed {
            item = item.flex().justify_center().child(page.short_label());
        } else {
            item = item.px_3().child(page.title());
        }

        item
    }
}

impl Render for Sidebar {
    fn render(&mut self, _window: &mut Window, cx: &mut Context<Self>) -> impl IntoElement {
        let active_page = self.entities.nav.read(cx).active();
        let collapsed = self.entities.settings.read(cx).sidebar_collapsed();

        let width = if collapsed {
            px(SIDEBAR_COLLAPSED_WIDTH)
        } else {
            px(SIDEBAR_WIDTH)
        };

        let caption = (!collapsed).then(|| {
            div()
                .px_4()
                .pb_2()
                .text_size(px(11.0))
                .text_color(BeaconColors::text_muted())
                .child("CATALOG")
        });

        div()
            .w(width)
            .h_full()
            .pt_3()
            .flex()
            .flex_col()
            .gap_1()
            .bg(BeaconColors::sidebar_bg())
            .border_r_1()
            .border_color(BeaconColors::border())
            .children(caption)
            .children(
                ActivePage::all()
                    .iter()
                    .map(|page| self.render_nav_item(*page, active_page, collapsed)),
            )
    }
}
