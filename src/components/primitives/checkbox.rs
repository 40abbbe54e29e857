//! Checkbox Component

use gpui::{
    div, px, App, ElementId, InteractiveElement, IntoElement, ParentElement, RenderOnce, Rgba,
    SharedString, StatefulInteractiveElement, Styled, Window,
};

use crate::theme::colors::BeaconColors;

/// Resolved visual properties for the check square
#[derive(Debug, Clone, Copy)]
pub struct CheckboxStyle {
    pub box_bg: Rgba,
    pub box_border: Rgba,
}

/// Pure lookup from checked state to visual properties
pub fn resolve_style(checked: bool) -> CheckboxStyle {
    if checked {
        CheckboxStyle {
            box_bg: BeaconColors::accent(),
            box_border: BeaconColors::accent(),
        }
    } else {
        CheckboxStyle {
            box_bg: BeaconColors::input_bg(),
            box_border: BeaconColors::input_border(),
        }
    }
}

/// A labeled checkbox
#[derive(IntoElement)]
pub struct Checkbox {
    id: ElementId,
    checked: bool,
    label: Option<SharedString>,
    disabled: bool,
    on_change: Option<Box<dyn Fn(bool, &mut Window, &mut App) + 'static>>,
}

impl Checkbox {
    pub fn new(id: impl Into<ElementId>) -> Self {
        Self {
            id: id.into(),
            checked: false,
            label: None,
            disabled: false,
            on_change: None,
        }
    }

    /// Current checked state, owned by the caller
    pub fn checked(mut self, checked: bool) -> Self {
        self.checked = checked;
        self
    }

    /// Text shown to the right of the square
    pub fn label(mut self, label: impl Into<SharedString>) -> Self {
        self.label = Some(label.into());
        self
    }

    /// Disabled checkboxes dim and ignore clicks
    pub fn disabled(mut self, disabled: bool) -> Self {
        self.disabled = disabled;
        self
    }

    /// Handler invoked with the state the checkbox should move to
    pub fn on_change(mut self, handler: impl Fn(bool, &mut Window, &mut App) + 'static) -> Self {
        self.on_change = Some(Box::new(handler));
        self
    }
}

impl RenderOnce for Checkbox {
    fn render(self, _window: &mut Window, _cx: &mut App) -> impl IntoElement {
        let style = resolve_style(self.checked);
        let next = !self.checked;
        let mark = if self.checked { "\u{2713}" } else { "" };

        // Same 16px square the table selection cells use
        let glyph = div()
            .size(px(16.0))
            .rounded_sm()
            .border_1()
            .border_color(style.box_border)
            .bg(style.box_bg)
            .flex()
            .items_center()
            .justify_center()
            .text_color(BeaconColors::text_light())
            .text_size(px(11.0))
            .child(mark);

        let label = self.label.map(|label| {
            div()
                .text_sm()
                .text_color(BeaconColors::text_primary())
                .child(label)
        });

        let mut element = div()
            .id(self.id)
            .flex()
            .items_center()
            .gap_2()
            .child(glyph)
            .children(label);

        if self.disabled {
            element = element.opacity(0.5);
        } else {
            element = element.cursor_pointer();
            if let Some(handler) = self.on_change {
                element = element.on_click(move |_event, window, cx| {
                    handler(next, window, cx);
                });
            }
        }

        element
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn checked_squares_fill_with_the_accent() {
        let on = resolve_style(true);
        assert_eq!(on.box_bg.r, BeaconColors::accent().r);
        assert_eq!(on.box_border.g, BeaconColors::accent().g);
    }

    #[test]
    fn unchecked_squares_stay_on_the_input_chrome() {
        let off = resolve_style(false);
        assert_eq!(off.box_bg.r, BeaconColors::input_bg().r);
        assert_eq!(off.box_border.b, BeaconColors::input_border().b);
    }
}
