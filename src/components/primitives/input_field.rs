//! InputField Component
//!
//! A labeled text or password input with helper/error text, variants,
//! sizes, and disabled/invalid/loading states.

use gpui::{
    div, prelude::*, px, ClickEvent, Context, ElementId, EventEmitter, FocusHandle, Focusable,
    InteractiveElement, IntoElement, KeyDownEvent, ParentElement, Pixels, Render, Rgba,
    SharedString, StatefulInteractiveElement, Styled, Window,
};

use crate::theme::colors::BeaconColors;
use crate::theme::typography::Typography;

/// Visual variant of the input shell
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum InputVariant {
    /// Gray fill that clears when focused
    Filled,
    /// Bordered box (default)
    #[default]
    Outlined,
    /// No box until the field is focused
    Ghost,
}

/// Input size
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum InputSize {
    Small,
    #[default]
    Medium,
    Large,
}

/// What the field accepts and how it echoes it
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum InputKind {
    #[default]
    Text,
    /// Masked echo with a show/hide control
    Password,
}

/// Events emitted by an InputField
pub enum InputFieldEvent {
    /// The user edited the value; carries the new value
    Changed(SharedString),
}

/// Interaction state of an input field.
///
/// The flags are independent of each other; `loading` additionally
/// forces the field into a disabled interaction state. All mutation
/// goes through the transition methods, which report whether anything
/// changed so callers know when to notify.
#[derive(Debug, Clone, Default)]
pub struct InputState {
    pub kind: InputKind,
    pub value: String,
    pub disabled: bool,
    pub invalid: bool,
    pub loading: bool,
    pub revealed: bool,
}

impl InputState {
    /// Whether the field rejects interaction, from either flag
    pub fn effective_disabled(&self) -> bool {
        self.disabled || self.loading
    }

    /// Append typed text. Returns true when the value changed.
    pub fn apply_input(&mut self, text: &str) -> bool {
        if self.effective_disabled() || text.is_empty() {
            return false;
        }
        self.value.push_str(text);
        true
    }

    /// Delete the last character. Returns true when the value changed.
    pub fn apply_backspace(&mut self) -> bool {
        !self.effective_disabled() && self.value.pop().is_some()
    }

    /// Flip password visibility. Ignored for text fields and while
    /// loading, when the control is not shown at all.
    pub fn toggle_reveal(&mut self) -> bool {
        if self.kind != InputKind::Password || self.loading {
            return false;
        }
        self.revealed = !self.revealed;
        true
    }

    /// Whether the show/hide control is rendered
    pub fn shows_reveal_control(&self) -> bool {
        self.kind == InputKind::Password && !self.loading
    }

    /// The text echoed in the field, or None when the placeholder
    /// should show. Passwords echo one bullet per character unless
    /// revealed.
    pub fn display_text(&self) -> Option<SharedString> {
        if self.value.is_empty() {
            return None;
        }
        if self.kind == InputKind::Password && !self.revealed {
            return Some("\u{2022}".repeat(self.value.chars().count()).into());
        }
        Some(self.value.clone().into())
    }
}

/// Resolved visual properties for the input shell
#[derive(Debug, Clone, Copy)]
pub struct InputFieldStyle {
    pub bg: Rgba,
    pub border: Rgba,
    pub text_size: Pixels,
    pub padding_x: Pixels,
    pub padding_y: Pixels,
}

/// Pure lookup from variant, size, and render state to visual
/// properties. An invalid field keeps its red border even while
/// focused.
pub fn resolve_style(
    variant: InputVariant,
    size: InputSize,
    focused: bool,
    invalid: bool,
) -> InputFieldStyle {
    let transparent = gpui::rgba(0x00000000);

    let border = if invalid {
        BeaconColors::input_border_invalid()
    } else if focused {
        BeaconColors::border_focus()
    } else {
        match variant {
            InputVariant::Outlined => BeaconColors::input_border(),
            InputVariant::Filled | InputVariant::Ghost => transparent,
        }
    };

    let bg = match variant {
        InputVariant::Filled => {
            if focused {
                BeaconColors::input_bg()
            } else {
                BeaconColors::input_filled_bg()
            }
        }
        InputVariant::Outlined => BeaconColors::input_bg(),
        InputVariant::Ghost => transparent,
    };

    let (padding_x, padding_y, text_size) = match size {
        InputSize::Small => (px(8.0), px(4.0), px(Typography::CAPTION)),
        InputSize::Medium => (px(12.0), px(8.0), px(Typography::BODY)),
        InputSize::Large => (px(16.0), px(10.0), px(Typography::BODY_LG)),
    };

    InputFieldStyle {
        bg,
        border,
        text_size,
        padding_x,
        padding_y,
    }
}

/// The line under the field: the error message when the field is
/// invalid and one is present, the helper text otherwise. The bool
/// marks the error case for coloring.
fn status_line(
    invalid: bool,
    error_message: Option<&SharedString>,
    helper_text: Option<&SharedString>,
) -> Option<(SharedString, bool)> {
    if invalid {
        if let Some(message) = error_message {
            return Some((message.clone(), true));
        }
    }
    helper_text.map(|text| (text.clone(), false))
}

/// A labeled input field component
pub struct InputField {
    id: ElementId,
    state: InputState,
    label: Option<SharedString>,
    placeholder: SharedString,
    helper_text: Option<SharedString>,
    error_message: Option<SharedString>,
    variant: InputVariant,
    size: InputSize,
    focus_handle: FocusHandle,
}

impl InputField {
    /// Create a new input field
    pub fn new(id: impl Into<ElementId>, cx: &mut Context<Self>) -> Self {
        Self {
            id: id.into(),
            state: InputState::default(),
            label: None,
            placeholder: SharedString::default(),
            helper_text: None,
            error_message: None,
            variant: InputVariant::default(),
            size: InputSize::default(),
            focus_handle: cx.focus_handle(),
        }
    }

    pub fn state(&self) -> &InputState {
        &self.state
    }

    pub fn value(&self) -> &str {
        &self.state.value
    }

    /// Set the value
    pub fn set_value(&mut self, value: impl Into<String>) {
        self.state.value = value.into();
    }

    /// Set the label shown above the field
    pub fn set_label(&mut self, label: impl Into<SharedString>) {
        self.label = Some(label.into());
    }

    /// Set the placeholder
    pub fn set_placeholder(&mut self, placeholder: impl Into<SharedString>) {
        self.placeholder = placeholder.into();
    }

    /// Set the helper text shown under the field
    pub fn set_helper_text(&mut self, text: impl Into<SharedString>) {
        self.helper_text = Some(text.into());
    }

    pub fn set_kind(&mut self, kind: InputKind) {
        self.state.kind = kind;
    }

    pub fn set_variant(&mut self, variant: InputVariant) {
        self.variant = variant;
    }

    pub fn set_size(&mut self, size: InputSize) {
        self.size = size;
    }

    /// Set or clear the error message. The message only shows while
    /// the field is marked invalid.
    pub fn set_error_message(&mut self, message: Option<SharedString>, cx: &mut Context<Self>) {
        self.error_message = message;
        cx.notify();
    }

    pub fn set_invalid(&mut self, invalid: bool, cx: &mut Context<Self>) {
        if self.state.invalid != invalid {
            self.state.invalid = invalid;
            cx.notify();
        }
    }

    pub fn set_disabled(&mut self, disabled: bool, cx: &mut Context<Self>) {
        if self.state.disabled != disabled {
            self.state.disabled = disabled;
            cx.notify();
        }
    }

    pub fn set_loading(&mut self, loading: bool, cx: &mut Context<Self>) {
        if self.state.loading != loading {
            self.state.loading = loading;
            cx.notify();
        }
    }

    /// Handle typed text from a key event
    pub fn handle_input(&mut self, text: &str, cx: &mut Context<Self>) {
        if self.state.apply_input(text) {
            cx.emit(InputFieldEvent::Changed(self.state.value.clone().into()));
            cx.notify();
        }
    }

    /// Handle a backspace key
    pub fn handle_backspace(&mut self, cx: &mut Context<Self>) {
        if self.state.apply_backspace() {
            cx.emit(InputFieldEvent::Changed(self.state.value.clone().into()));
            cx.notify();
        }
    }

    /// Handle a click on the show/hide control
    pub fn toggle_reveal(&mut self, cx: &mut Context<Self>) {
        if self.state.toggle_reveal() {
            cx.notify();
        }
    }

    fn on_key_down(&mut self, event: &KeyDownEvent, cx: &mut Context<Self>) {
        if event.keystroke.key == "backspace" {
            self.handle_backspace(cx);
        } else if let Some(key_char) = event.keystroke.key_char.clone() {
            self.handle_input(&key_char, cx);
        }
    }
}

impl EventEmitter<InputFieldEvent> for InputField {}

impl Focusable for InputField {
    fn focus_handle(&self, _cx: &gpui::App) -> FocusHandle {
        self.focus_handle.clone()
    }
}

impl Render for InputField {
    fn render(&mut self, window: &mut Window, cx: &mut Context<Self>) -> impl IntoElement {
        let focused = self.focus_handle.is_focused(window);
        let effective_disabled = self.state.effective_disabled();
        let style = resolve_style(self.variant, self.size, focused, self.state.invalid);

        let (echo, is_placeholder) = match self.state.display_text() {
            Some(text) => (text, false),
            None => (self.placeholder.clone(), true),
        };
        let echo_color = if is_placeholder {
            BeaconColors::input_placeholder()
        } else {
            BeaconColors::text_primary()
        };

        let mut field = div()
            .id(self.id.clone())
            .track_focus(&self.focus_handle)
            .flex()
            .items_center()
            .gap_2()
            .min_w(px(240.0))
            .px(style.padding_x)
            .py(style.padding_y)
            .bg(style.bg)
            .border_1()
            .border_color(style.border)
            .rounded_md()
            .child(
                div()
                    .flex_1()
                    .text_size(style.text_size)
                    .text_color(echo_color)
                    .overflow_hidden()
                    .child(echo),
            );

        if !effective_disabled {
            field = field
                .cursor_text()
                .on_click(cx.listener(|this, _: &ClickEvent, window, cx| {
                    window.focus(&this.focus_handle);
                    cx.notify();
                }))
                .on_key_down(cx.listener(|this, event: &KeyDownEvent, _window, cx| {
                    this.on_key_down(event, cx);
                }));
        }

        if self.state.loading {
            field = field.child(
                div()
                    .text_size(px(Typography::CAPTION))
                    .text_color(BeaconColors::text_muted())
                    .child("\u{27F3}"),
            );
        }

        if self.state.shows_reveal_control() {
            let toggle_label = if self.state.revealed { "Hide" } else { "Show" };
            field = field.child(
                div()
                    .id("reveal")
                    .text_size(px(Typography::CAPTION))
                    .text_color(BeaconColors::accent())
                    .cursor_pointer()
                    .on_click(cx.listener(|this, _: &ClickEvent, _window, cx| {
                        this.toggle_reveal(cx);
                    }))
                    .child(toggle_label),
            );
        }

        let mut root = div().flex().flex_col().gap_1();
        if effective_disabled {
            root = root.opacity(0.6);
        }

        if let Some(label) = &self.label {
            root = root.child(
                div()
                    .text_sm()
                    .text_color(BeaconColors::text_secondary())
                    .child(label.clone()),
            );
        }

        root = root.child(field);

        if let Some((text, is_error)) = status_line(
            self.state.invalid,
            self.error_message.as_ref(),
            self.helper_text.as_ref(),
        ) {
            root = root.child(
                div()
                    .text_xs()
                    .text_color(if is_error {
                        BeaconColors::danger()
                    } else {
                        BeaconColors::text_secondary()
                    })
                    .child(text),
            );
        }

        root
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn password_state(value: &str) -> InputState {
        InputState {
            kind: InputKind::Password,
            value: value.to_string(),
            ..InputState::default()
        }
    }

    #[test]
    fn loading_forces_effective_disablement() {
        let state = InputState {
            loading: true,
            ..InputState::default()
        };
        assert!(!state.disabled);
        assert!(state.effective_disabled());
    }

    #[test]
    fn input_is_rejected_while_disabled_or_loading() {
        let mut state = InputState {
            disabled: true,
            ..InputState::default()
        };
        assert!(!state.apply_input("a"));
        assert_eq!(state.value, "");

        state.disabled = false;
        state.loading = true;
        assert!(!state.apply_input("a"));
        assert!(!state.apply_backspace());
    }

    #[test]
    fn typing_and_backspace_edit_the_value() {
        let mut state = InputState::default();
        assert!(state.apply_input("hi"));
        assert!(state.apply_input("!"));
        assert_eq!(state.value, "hi!");

        assert!(state.apply_backspace());
        assert_eq!(state.value, "hi");
    }

    #[test]
    fn backspace_on_empty_value_reports_no_change() {
        let mut state = InputState::default();
        assert!(!state.apply_backspace());
    }

    #[test]
    fn password_echo_masks_by_character_count() {
        let state = password_state("s\u{00E9}cret");
        assert_eq!(state.display_text().unwrap().as_ref(), "\u{2022}".repeat(6));
    }

    #[test]
    fn revealed_password_echoes_plain_text() {
        let mut state = password_state("secret");
        assert!(state.toggle_reveal());
        assert_eq!(state.display_text().unwrap().as_ref(), "secret");
    }

    #[test]
    fn empty_value_defers_to_placeholder() {
        let state = InputState::default();
        assert_eq!(state.display_text(), None);
    }

    #[test]
    fn reveal_is_ignored_while_loading_and_for_text_fields() {
        let mut state = password_state("secret");
        state.loading = true;
        assert!(!state.toggle_reveal());
        assert!(!state.revealed);
        assert!(!state.shows_reveal_control());

        let mut text = InputState::default();
        assert!(!text.toggle_reveal());
    }

    #[test]
    fn reveal_works_while_disabled() {
        let mut state = password_state("secret");
        state.disabled = true;
        assert!(state.toggle_reveal());
        assert!(state.revealed);
    }

    #[test]
    fn error_message_shows_only_while_invalid() {
        let error = SharedString::from("Required");
        let helper = SharedString::from("We never share this");

        let line = status_line(true, Some(&error), Some(&helper));
        assert_eq!(line, Some(("Required".into(), true)));

        let line = status_line(false, Some(&error), Some(&helper));
        assert_eq!(line, Some(("We never share this".into(), false)));

        assert_eq!(status_line(false, None, None), None);
    }

    #[test]
    fn invalid_border_wins_over_focus() {
        let style = resolve_style(InputVariant::Outlined, InputSize::Medium, true, true);
        assert_eq!(style.border, BeaconColors::input_border_invalid());
    }

    #[test]
    fn filled_variant_clears_on_focus() {
        let blurred = resolve_style(InputVariant::Filled, InputSize::Medium, false, false);
        let focused = resolve_style(InputVariant::Filled, InputSize::Medium, true, false);
        assert_eq!(blurred.bg, BeaconColors::input_filled_bg());
        assert_eq!(focused.bg, BeaconColors::input_bg());
        assert_eq!(focused.border, BeaconColors::border_focus());
    }

    #[test]
    fn ghost_variant_has_no_box_at_rest() {
        let style = resolve_style(InputVariant::Ghost, InputSize::Medium, false, false);
        assert_eq!(style.bg.a, 0.0);
        assert_eq!(style.border.a, 0.0);
    }

    #[test]
    fn sizes_scale_the_text() {
        let small = resolve_style(InputVariant::Outlined, InputSize::Small, false, false);
        let large = resolve_style(InputVariant::Outlined, InputSize::Large, false, false);
        assert!(small.text_size < large.text_size);
    }
}
