//! Button Component

use gpui::{
    div, prelude::*, px, App, ClickEvent, ElementId, InteractiveElement, IntoElement,
    ParentElement, Pixels, RenderOnce, Rgba, SharedString, StatefulInteractiveElement, Styled,
    Window,
};

use crate::theme::colors::BeaconColors;
use crate::theme::typography::Typography;

/// Visual treatment of a button
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum ButtonVariant {
    /// Solid indigo, the main action in a view
    #[default]
    Primary,
    /// Bordered neutral, supporting actions
    Secondary,
    /// Solid red, destructive actions
    Danger,
    /// Text only until hovered
    Ghost,
}

/// Control height tier, shared with the input field scale
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum ButtonSize {
    Small,
    #[default]
    Medium,
    Large,
}

/// Resolved visual properties for a button
#[derive(Debug, Clone, Copy)]
pub struct ButtonStyle {
    pub bg: Rgba,
    pub text: Rgba,
    pub hover_bg: Rgba,
    pub border: Option<Rgba>,
    pub padding_x: Pixels,
    pub padding_y: Pixels,
    pub font_size: Pixels,
}

/// Pure lookup from variant and size to visual properties
pub fn resolve_style(variant: ButtonVariant, size: ButtonSize) -> ButtonStyle {
    let (bg, text, hover_bg, border) = match variant {
        ButtonVariant::Primary => (
            BeaconColors::button_primary_bg(),
            BeaconColors::button_primary_text(),
            gpui::rgba(0x4338caff),
            None,
        ),
        ButtonVariant::Secondary => (
            BeaconColors::content_bg(),
            BeaconColors::text_primary(),
            gpui::rgba(0xf4f4f5ff),
            Some(BeaconColors::input_border()),
        ),
        ButtonVariant::Danger => (
            BeaconColors::button_danger_bg(),
            BeaconColors::button_danger_text(),
            gpui::rgba(0xb91c1cff),
            None,
        ),
        ButtonVariant::Ghost => (
            gpui::rgba(0x00000000),
            BeaconColors::button_ghost_text(),
            gpui::rgba(0xf4f4f5ff),
            None,
        ),
    };

    let (padding_x, padding_y, font_size) = match size {
        ButtonSize::Small => (px(10.0), px(4.0), px(Typography::CAPTION)),
        ButtonSize::Medium => (px(14.0), px(6.0), px(Typography::BODY)),
        ButtonSize::Large => (px(20.0), px(10.0), px(Typography::BODY_LG)),
    };

    ButtonStyle {
        bg,
        text,
        hover_bg,
        border,
        padding_x,
        padding_y,
        font_size,
    }
}

/// A clickable catalog button
#[derive(IntoElement)]
pub struct Button {
    id: ElementId,
    label: SharedString,
    variant: ButtonVariant,
    size: ButtonSize,
    disabled: bool,
    on_click: Option<Box<dyn Fn(&ClickEvent, &mut Window, &mut App) + 'static>>,
}

impl Button {
    /// Primary button with the given element id and label
    pub fn new(id: impl Into<ElementId>, label: impl Into<SharedString>) -> Self {
        Self {
            id: id.into(),
            label: label.into(),
            variant: ButtonVariant::default(),
            size: ButtonSize::default(),
            disabled: false,
            on_click: None,
        }
    }

    /// Shorthand for a secondary button
    pub fn secondary(id: impl Into<ElementId>, label: impl Into<SharedString>) -> Self {
        Self::new(id, label).variant(ButtonVariant::Secondary)
    }

    /// Shorthand for a ghost button
    pub fn ghost(id: impl Into<ElementId>, label: impl Into<SharedString>) -> Self {
        Self::new(id, label).variant(ButtonVariant::Ghost)
    }

    pub fn variant(mut self, variant: ButtonVariant) -> Self {
        self.variant = variant;
        self
    }

    pub fn size(mut self, size: ButtonSize) -> Self {
        self.size = size;
        self
    }

    /// Disabled buttons dim and ignore clicks
    pub fn disabled(mut self, disabled: bool) -> Self {
        self.disabled = disabled;
        self
    }

    pub fn on_click(
        mut self,
        handler: impl Fn(&ClickEvent, &mut Window, &mut App) + 'static,
    ) -> Self {
        self.on_click = Some(Box::new(handler));
        self
    }
}

impl RenderOnce for Button {
    fn render(self, _window: &mut Window, _cx: &mut App) -> impl IntoElement {
        let style = resolve_style(self.variant, self.size);

        let mut element = div()
            .id(self.id)
            .px(style.padding_x)
            .py(style.padding_y)
            .bg(style.bg)
            .text_color(style.text)
            .text_size(style.font_size)
            .rounded_md()
            .child(self.label);

        if let Some(border) = style.border {
            element = element.border_1().border_color(border);
        }

        if self.disabled {
            element = element.opacity(0.5);
        } else {
            element = element
                .cursor_pointer()
                .hover(move |s| s.bg(style.hover_bg));

            if let Some(handler) = self.on_click {
                element = element.on_click(handler);
            }
        }

        element
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ghost_buttons_are_transparent_until_hovered() {
        let style = resolve_style(ButtonVariant::Ghost, ButtonSize::Medium);
        assert_eq!(style.bg.a, 0.0);
        assert!(style.hover_bg.a > 0.0);
    }

    #[test]
    fn only_secondary_buttons_carry_a_border() {
        assert!(resolve_style(ButtonVariant::Secondary, ButtonSize::Medium)
            .border
            .is_some());
        assert!(resolve_style(ButtonVariant::Primary, ButtonSize::Medium)
            .border
            .is_none());
        assert!(resolve_style(ButtonVariant::Ghost, ButtonSize::Small)
            .border
            .is_none());
    }

    #[test]
    fn sizes_scale_padding_and_font() {
        let small = resolve_style(ButtonVariant::Primary, ButtonSize::Small);
        let large = resolve_style(ButtonVariant::Primary, ButtonSize::Large);
        assert!(small.padding_x < large.padding_x);
        assert!(small.font_size < large.font_size);
    }
}
