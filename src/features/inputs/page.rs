//! Input Field Showcase Page
//!
//! Demonstrates labels, helper and error text, password reveal,
//! disabled and loading states, and the variant and size scales.

use gpui::{
    div, prelude::*, ClickEvent, Context, Entity, IntoElement, ParentElement, Render,
    SharedString, Styled, Window,
};
use tracing::info;

use crate::components::primitives::button::Button;
use crate::components::primitives::input_field::{
    InputField, InputFieldEvent, InputKind, InputSize, InputVariant,
};
use crate::theme::colors::BeaconColors;

/// Loose shape check for the live validation demo
fn looks_like_email(value: &str) -> bool {
    let Some((local, domain)) = value.split_once('@') else {
        return false;
    };
    !local.is_empty() && domain.contains('.') && !domain.starts_with('.') && !domain.ends_with('.')
}

/// Input showcase page component
pub struct InputsPage {
    name: Entity<InputField>,
    email: Entity<InputField>,
    password: Entity<InputField>,
    disabled_field: Entity<InputField>,
    loading_field: Entity<InputField>,
    // Caption and field pairs for the variant and size grids
    variants: Vec<(SharedString, Entity<InputField>)>,
    sizes: Vec<(SharedString, Entity<InputField>)>,
}

impl InputsPage {
    pub fn new(cx: &mut Context<Self>) -> Self {
        let name = cx.new(|cx| {
            let mut field = InputField::new("name-input", cx);
            field.set_label("Full name");
            field.set_placeholder("Jane Doe");
            field.set_helper_text("Shown on your profile");
            field
        });

        let email = cx.new(|cx| {
            let mut field = InputField::new("email-input", cx);
            field.set_label("Email");
            field.set_placeholder("you@example.com");
            field.set_helper_text("We never share your email");
            field
        });

        let password = cx.new(|cx| {
            let mut field = InputField::new("password-input", cx);
            field.set_label("Password");
            field.set_kind(InputKind::Password);
            field.set_placeholder("At least 8 characters");
            field
        });

        let disabled_field = cx.new(|cx| {
            let mut field = InputField::new("disabled-input", cx);
            field.set_label("Account ID");
            field.set_value("ACC-2208");
            field.set_helper_text("Assigned by your administrator");
            field.set_disabled(true, cx);
            field
        });

        let loading_field = cx.new(|cx| {
            let mut field = InputField::new("loading-input", cx);
            field.set_label("Invite code");
            field.set_value("BEACON-42");
            field.set_helper_text("Checked against the invite list");
            field.set_loading(true, cx);
            field
        });

        // Live validation: flag the email as invalid while it does not
        // look like an address
        cx.subscribe(&email, |_this, field, event: &InputFieldEvent, cx| {
            let InputFieldEvent::Changed(value) = event;
            let valid = value.is_empty() || looks_like_email(value);
            field.update(cx, |field, cx| {
                if valid {
                    field.set_invalid(false, cx);
                    field.set_error_message(None, cx);
                } else {
                    field.set_invalid(true, cx);
                    field.set_error_message(Some("Enter a valid email address".into()), cx);
                }
            });
            // The submit button below re-reads validity
            cx.notify();
        })
        .detach();

        // Short passwords are flagged while typing
        cx.subscribe(&password, |_this, field, event: &InputFieldEvent, cx| {
            let InputFieldEvent::Changed(value) = event;
            let too_short = !value.is_empty() && value.chars().count() < 8;
            field.update(cx, |field, cx| {
                field.set_invalid(too_short, cx);
                let message = too_short.then(|| "Password must be at least 8 characters".into());
                field.set_error_message(message, cx);
            });
            cx.notify();
        })
        .detach();

        let variants = [
            ("Filled", InputVariant::Filled),
            ("Outlined", InputVariant::Outlined),
            ("Ghost", InputVariant::Ghost),
        ]
        .map(|(caption, variant)| {
            let field = cx.new(|cx| {
                let mut field = InputField::new(
                    SharedString::from(format!("variant-{}", caption.to_lowercase())),
                    cx,
                );
                field.set_variant(variant);
                field.set_placeholder(caption);
                field
            });
            (SharedString::from(caption), field)
        })
        .into_iter()
        .collect();

        let sizes = [
            ("Small", InputSize::Small),
            ("Medium", InputSize::Medium),
            ("Large", InputSize::Large),
        ]
        .map(|(caption, size)| {
            let field = cx.new(|cx| {
                let mut field = InputField::new(
                    SharedString::from(format!("size-{}", caption.to_lowercase())),
                    cx,
                );
                field.set_size(size);
                field.set_placeholder(caption);
                field
            });
            (SharedString::from(caption), field)
        })
        .into_iter()
        .collect();

        Self {
            name,
            email,
            password,
            disabled_field,
            loading_field,
            variants,
            sizes,
        }
    }

    fn render_section(
        &self,
        title: &'static str,
        content: impl IntoElement,
    ) -> impl IntoElement {
        div()
            .w_full()
            .bg(BeaconColors::card_bg())
            .border_1()
            .border_color(BeaconColors::border())
            .rounded_md()
            .overflow_hidden()
            .child(
                div()
                    .w_full()
                    .px_4()
                    .py_2()
                    .bg(BeaconColors::table_header_bg())
                    .border_b_1()
                    .border_color(BeaconColors::border())
                    .text_sm()
                    .font_weight(gpui::FontWeight::MEDIUM)
                    .text_color(BeaconColors::text_primary())
                    .child(title),
            )
            .child(div().p_4().child(content))
    }

    fn render_captioned_grid(
        &self,
        fields: &[(SharedString, Entity<InputField>)],
    ) -> impl IntoElement {
        div().flex().gap_4().items_end().children(fields.iter().map(
            |(caption, field)| {
                div()
                    .flex_1()
                    .flex()
                    .flex_col()
                    .gap_1()
                    .child(
                        div()
                            .text_xs()
                            .text_color(BeaconColors::text_muted())
                            .child(caption.clone()),
                    )
                    .child(field.clone())
            },
        ))
    }
}

impl Render for InputsPage {
    fn render(&mut self, _window: &mut Window, cx: &mut Context<Self>) -> impl IntoElement {
        let loading_now = self.loading_field.read(cx).state().loading;
        let toggle_label = if loading_now {
            "Finish check"
        } else {
            "Simulate check"
        };
        let form_blocked =
            self.email.read(cx).state().invalid || self.password.read(cx).state().invalid;

        div()
            .id("inputs-page")
            .size_full()
            .flex()
            .flex_col()
            .overflow_y_scroll()
            .p_4()
            .gap_4()
            .child(
                self.render_section(
                    "Basics",
                    div()
                        .flex()
                        .flex_col()
                        .gap_4()
                        .child(self.name.clone())
                        .child(self.email.clone())
                        .child(self.password.clone())
                        .child(
                            div().flex().justify_end().child(
                                Button::new("save-profile", "Save profile")
                                    .disabled(form_blocked)
                                    .on_click(cx.listener(
                                        |this, _event: &ClickEvent, _window, cx| {
                                            let name = this.name.read(cx).state().value.clone();
                                            info!("Profile saved: {name}");
                                        },
                                    )),
                            ),
                        ),
                ),
            )
            .child(
                self.render_section(
                    "States",
                    div()
                        .flex()
                        .flex_col()
                        .gap_4()
                        .child(self.disabled_field.clone())
                        .child(self.loading_field.clone())
                        .child(
                            div().child(
                                Button::secondary("toggle-loading", toggle_label).on_click(
                                    cx.listener(
                                        move |this, _event: &ClickEvent, _window, cx| {
                                            this.loading_field.update(cx, |field, cx| {
                                                let loading = field.state().loading;
                                                field.set_loading(!loading, cx);
                                            });
                                            cx.notify();
                                        },
                                    ),
                                ),
                            ),
                        ),
                ),
            )
            .child(self.render_section("Variants", self.render_captioned_grid(&self.variants)))
            .child(self.render_section("Sizes", self.render_captioned_grid(&self.sizes)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn plausible_addresses_pass() {
        assert!(looks_like_email("jane@example.com"));
        assert!(looks_like_email("a.b@mail.co"));
    }

    #[test]
    fn malformed_addresses_fail() {
        assert!(!looks_like_email("janeexample.com"));
        assert!(!looks_like_email("@example.com"));
        assert!(!looks_like_email("jane@nodot"));
        assert!(!looks_like_email("jane@.com"));
    }
}
