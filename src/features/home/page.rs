//! Overview Page
//!
//! Landing page with component summaries and the theme palette.

use gpui::{
    div, prelude::*, px, ClickEvent, Context, InteractiveElement, IntoElement, ParentElement,
    Render, SharedString, StatefulInteractiveElement, Styled, Window,
};

use crate::app::entities::AppEntities;
use crate::app::navigation::ActivePage;
use crate::theme::colors::BeaconColors;
use crate::theme::typography::Typography;

/// Overview page component
pub struct HomePage;

impl HomePage {
    pub fn new(_cx: &mut Context<Self>) -> Self {
        Self
    }

    fn render_page_card(&self, page: ActivePage) -> impl IntoElement {
        div()
            .id(SharedString::from(format!("card-{:?}", page)))
            .flex_1()
            .p_4()
            .bg(BeaconColors::card_bg())
            .border_1()
            .border_color(BeaconColors::border())
            .rounded_md()
            .cursor_pointer()
            .hover(|s| s.border_color(BeaconColors::accent()))
            .on_click(move |_event: &ClickEvent, _window, cx| {
                let entities = cx.global::<AppEntities>().clone();
                entities.nav.update(cx, |nav, cx| {
                    nav.go_to(page, cx);
                });
                entities.settings.update(cx, |settings, cx| {
                    settings.set_startup_page(page, cx);
                });
            })
            .child(
                div()
                    .text_size(px(Typography::SECTION_TITLE))
                    .font_weight(gpui::FontWeight::SEMIBOLD)
                    .text_color(BeaconColors::text_primary())
                    .child(page.title()),
            )
            .child(
                div()
                    .mt_2()
                    .text_sm()
                    .text_color(BeaconColors::text_secondary())
                    .child(page.summary()),
            )
    }

    fn render_swatch(&self, name: &'static str, color: gpui::Rgba) -> impl IntoElement {
        div()
            .flex()
            .flex_col()
            .items_center()
            .gap_1()
            .child(
                div()
                    .size(px(40.0))
                    .rounded_md()
                    .border_1()
                    .border_color(BeaconColors::border())
                    .bg(color),
            )
            .child(
                div()
                    .text_xs()
                    .text_color(BeaconColors::text_secondary())
                    .child(name),
            )
    }
}

impl Render for HomePage {
    fn render(&mut self, _window: &mut Window, _cx: &mut Context<Self>) -> impl IntoElement {
        div()
            .id("home-page")
            .size_full()
            .flex()
            .flex_col()
            .overflow_y_scroll()
            .p_4()
            .gap_4()
            // Intro
            .child(
                div()
                    .w_full()
                    .p_4()
                    .bg(BeaconColors::card_bg())
                    .border_1()
                    .border_color(BeaconColors::border())
                    .rounded_md()
                    .child(
                        div()
                            .text_size(px(Typography::PAGE_TITLE))
                            .font_weight(gpui::FontWeight::BOLD)
                            .text_color(BeaconColors::text_primary())
                            .child("Beacon UI"),
                    )
                    .child(
                        div()
                            .mt_2()
                            .text_sm()
                            .text_color(BeaconColors::text_secondary())
                            .child(ActivePage::Overview.summary()),
                    ),
            )
            // Component cards
            .child(
                div()
                    .w_full()
                    .flex()
                    .gap_4()
                    .child(self.render_page_card(ActivePage::Inputs))
                    .child(self.render_page_card(ActivePage::Tables)),
            )
            // Palette
            .child(
                div()
                    .w_full()
                    .p_4()
                    .bg(BeaconColors::card_bg())
                    .border_1()
                    .border_color(BeaconColors::border())
                    .rounded_md()
                    .child(
                        div()
                            .text_sm()
                            .font_weight(gpui::FontWeight::MEDIUM)
                            .text_color(BeaconColors::text_primary())
                            .child("Palette"),
                    )
                    .child(
                        div()
                            .mt_3()
                            .flex()
                            .gap_4()
                            .child(self.render_swatch("Accent", BeaconColors::accent()))
                            .child(self.render_swatch("Success", BeaconColors::success()))
                            .child(self.render_swatch("Warning", BeaconColors::warning()))
                            .child(self.render_swatch("Danger", BeaconColors::danger()))
                            .child(self.render_swatch("Info", BeaconColors::info()))
                            .child(self.render_swatch("Border", BeaconColors::border())),
                    ),
            )
    }
}
