//! Data Table Showcase Page
//!
//! Demonstrates sortable columns, single and multiple selection,
//! custom cell renderers, and the loading and empty states.

use gpui::{
    div, prelude::*, px, AnyElement, ClickEvent, Context, Entity, IntoElement, ParentElement,
    Render, SharedString, Styled, WeakEntity, Window,
};
use tracing::error;

use crate::components::composite::data_table::{
    CellValue, Column, DataTable, DataTableEvent, SelectionMode,
};
use crate::components::primitives::button::{Button, ButtonSize, ButtonVariant};
use crate::components::primitives::checkbox::Checkbox;
use crate::domain::member::{load_sample_members, Member};
use crate::theme::colors::BeaconColors;
use crate::utils::format::truncate;

/// One line describing the current selection
fn summarize_selection(rows: &[Member]) -> SharedString {
    match rows {
        [] => "No members selected".into(),
        [one] => format!("Selected: {}", one.name).into(),
        many => {
            let names: Vec<&str> = many.iter().map(|m| m.name.as_str()).collect();
            format!("Selected {} members: {}", many.len(), names.join(", ")).into()
        }
    }
}

fn render_status_cell(member: &Member) -> AnyElement {
    let (color, label) = if member.is_active() {
        (BeaconColors::success(), "Active")
    } else {
        (BeaconColors::text_muted(), "Inactive")
    };

    div()
        .flex()
        .items_center()
        .gap_1()
        .child(div().text_size(px(10.0)).text_color(color).child("\u{25CF}"))
        .child(div().text_sm().text_color(BeaconColors::text_primary()).child(label))
        .into_any_element()
}

/// Columns for the full member directory, including the actions column
fn member_columns(page: WeakEntity<TablesPage>) -> Vec<Column<Member>> {
    vec![
        Column::new("name", "Name", |m: &Member| CellValue::text(m.name.clone()))
            .flex_width(Some(140.0), None)
            .sortable(),
        Column::new("email", "Email", |m: &Member| {
            CellValue::text(m.email.clone())
        })
        .flex_width(Some(180.0), None)
        .render_with(|m: &Member| {
            div()
                .text_sm()
                .text_color(BeaconColors::text_secondary())
                .child(truncate(&m.email, 28))
                .into_any_element()
        }),
        Column::new("role", "Role", |m: &Member| CellValue::text(m.role.clone()))
            .fixed_width(110.0)
            .sortable(),
        Column::new("status", "Status", |m: &Member| {
            CellValue::text(m.status.clone())
        })
        .fixed_width(100.0)
        .render_with(render_status_cell),
        Column::new("last_active", "Last active", |m: &Member| {
            CellValue::DateTime(m.last_active)
        })
        .fixed_width(160.0)
        .sortable(),
        Column::new("actions", "Actions", |_: &Member| CellValue::Empty)
            .fixed_width(150.0)
            .render_with(move |m: &Member| {
                let edit_page = page.clone();
                let remove_page = page.clone();
                let name = m.name.clone();
                let id = m.id.clone();
                div()
                    .flex()
                    .gap_1()
                    .child(
                        Button::ghost(SharedString::from(format!("edit-{}", m.id)), "Edit")
                            .size(ButtonSize::Small)
                            .on_click(move |_event, _window, cx| {
                                let name = name.clone();
                                edit_page
                                    .update(cx, |this, cx| {
                                        this.last_action =
                                            format!("Edit requested for {}", name).into();
                                        cx.notify();
                                    })
                                    .ok();
                            }),
                    )
                    .child(
                        Button::new(SharedString::from(format!("remove-{}", m.id)), "Remove")
                            .variant(ButtonVariant::Danger)
                            .size(ButtonSize::Small)
                            .on_click(move |_event, _window, cx| {
                                let id = id.clone();
                                remove_page
                                    .update(cx, |this, cx| {
                                        this.remove_member(&id, cx);
                                    })
                                    .ok();
                            }),
                    )
                    .into_any_element()
            }),
    ]
}

/// Columns for the compact reviewer roster
fn roster_columns() -> Vec<Column<Member>> {
    vec![
        Column::new("name", "Name", |m: &Member| CellValue::text(m.name.clone()))
            .flex_width(Some(140.0), None)
            .sortable(),
        Column::new("role", "Role", |m: &Member| CellValue::text(m.role.clone()))
            .fixed_width(110.0)
            .sortable(),
        Column::new("status", "Status", |m: &Member| {
            CellValue::text(m.status.clone())
        })
        .fixed_width(100.0)
        .render_with(render_status_cell),
    ]
}

/// Table showcase page component
pub struct TablesPage {
    members: Vec<Member>,
    directory: Entity<DataTable<Member>>,
    roster: Entity<DataTable<Member>>,
    selection_summary: SharedString,
    reviewer_summary: SharedString,
    last_action: SharedString,
    show_inactive: bool,
    simulate_loading: bool,
}

impl TablesPage {
    pub fn new(cx: &mut Context<Self>) -> Self {
        let members = load_sample_members().unwrap_or_else(|e| {
            error!(error = %e, "Failed to load sample members");
            Vec::new()
        });

        let page = cx.weak_entity();
        let directory_rows = members.clone();
        let directory = cx.new(|cx| {
            let mut table = DataTable::new(cx);
            table.set_columns(member_columns(page));
            table.set_rows(directory_rows);
            table.set_selectable(Some(SelectionMode::Multiple));
            table.set_empty_message("No members match the filter");
            table
        });

        let roster_rows: Vec<Member> = members.iter().take(3).cloned().collect();
        let roster = cx.new(|cx| {
            let mut table = DataTable::new(cx);
            table.set_columns(roster_columns());
            table.set_rows(roster_rows);
            table.set_selectable(Some(SelectionMode::Single));
            table
        });

        cx.subscribe(
            &directory,
            |this, _table, event: &DataTableEvent<Member>, cx| {
                let DataTableEvent::SelectionChanged(rows) = event;
                this.selection_summary = summarize_selection(rows);
                cx.notify();
            },
        )
        .detach();

        cx.subscribe(&roster, |this, _table, event: &DataTableEvent<Member>, cx| {
            let DataTableEvent::SelectionChanged(rows) = event;
            this.reviewer_summary = match rows.first() {
                Some(member) => format!("Reviewer: {}", member.name).into(),
                None => "No reviewer chosen".into(),
            };
            cx.notify();
        })
        .detach();

        Self {
            members,
            directory,
            roster,
            selection_summary: summarize_selection(&[]),
            reviewer_summary: "No reviewer chosen".into(),
            last_action: SharedString::default(),
            show_inactive: true,
            simulate_loading: false,
        }
    }

    /// Rows for the directory under the current status filter
    fn filtered_members(&self) -> Vec<Member> {
        self.members
            .iter()
            .filter(|m| self.show_inactive || m.is_active())
            .cloned()
            .collect()
    }

    /// Drop a member from the dataset and refresh the directory rows
    fn remove_member(&mut self, id: &str, cx: &mut Context<Self>) {
        let Some(pos) = self.members.iter().position(|m| m.id == id) else {
            return;
        };
        let removed = self.members.remove(pos);
        let rows = self.filtered_members();
        self.directory.update(cx, |table, cx| {
            table.set_rows(rows);
            cx.notify();
        });
        self.last_action = format!("Removed {}", removed.name).into();
        cx.notify();
    }

    fn set_show_inactive(&mut self, show: bool, cx: &mut Context<Self>) {
        self.show_inactive = show;
        let rows = self.filtered_members();
        self.directory.update(cx, |table, cx| {
            table.set_rows(rows);
            cx.notify();
        });
        cx.notify();
    }

    fn toggle_loading(&mut self, cx: &mut Context<Self>) {
        self.simulate_loading = !self.simulate_loading;
        let loading = self.simulate_loading;
        self.directory.update(cx, |table, cx| {
            table.set_loading(loading);
            cx.notify();
        });
        cx.notify();
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
}

impl Render for TablesPage {
    fn render(&mut self, _window: &mut Window, cx: &mut Context<Self>) -> impl IntoElement {
        let page = cx.weak_entity();
        let show_inactive = self.show_inactive;
        let loading_label = if self.simulate_loading {
            "Finish loading"
        } else {
            "Simulate loading"
        };

        let directory_section = div()
            .flex()
            .flex_col()
            .gap_3()
            // Toolbar
            .child(
                div()
                    .flex()
                    .items_center()
                    .justify_between()
                    .child(
                        Checkbox::new("show-inactive")
                            .checked(show_inactive)
                            .label("Show inactive members")
                            .on_change(move |checked, _window, cx| {
                                page.update(cx, |this, cx| {
                                    this.set_show_inactive(checked, cx);
                                })
                                .ok();
                            }),
                    )
                    .child(
                        Button::secondary("toggle-table-loading", loading_label).on_click(
                            cx.listener(move |this, _event: &ClickEvent, _window, cx| {
                                this.toggle_loading(cx);
                            }),
                        ),
                    ),
            )
            .child(div().h(px(280.0)).child(self.directory.clone()))
            .child(
                div()
                    .text_sm()
                    .text_color(BeaconColors::text_secondary())
                    .child(self.selection_summary.clone()),
            )
            .child(
                div()
                    .text_xs()
                    .text_color(BeaconColors::text_muted())
                    .child(self.last_action.clone()),
            );

        let roster_section = div()
            .flex()
            .flex_col()
            .gap_3()
            .child(div().h(px(180.0)).child(self.roster.clone()))
            .child(
                div()
                    .text_sm()
                    .text_color(BeaconColors::text_secondary())
                    .child(self.reviewer_summary.clone()),
            );

        div()
            .id("tables-page")
            .size_full()
            .flex()
            .flex_col()
            .overflow_y_scroll()
            .p_4()
            .gap_4()
            .child(self.render_section("Member directory", directory_section))
            .child(self.render_section("Choose a reviewer", roster_section))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;

    fn make_member(id: &str, name: &str, status: &str) -> Member {
        Member {
            id: id.to_string(),
            name: name.to_string(),
            email: format!("{}@example.com", id),
            role: "User".to_string(),
            status: status.to_string(),
            last_active: Utc::now(),
        }
    }

    #[test]
    fn summary_for_no_selection() {
        assert_eq!(summarize_selection(&[]).as_ref(), "No members selected");
    }

    #[test]
    fn summary_names_a_single_member() {
        let rows = vec![make_member("1", "Alice Johnson", "Active")];
        assert_eq!(
            summarize_selection(&rows).as_ref(),
            "Selected: Alice Johnson"
        );
    }

    #[test]
    fn summary_counts_and_lists_many_members() {
        let rows = vec![
            make_member("1", "Alice Johnson", "Active"),
            make_member("2", "Bob Smith", "Inactive"),
        ];
        assert_eq!(
            summarize_selection(&rows).as_ref(),
            "Selected 2 members: Alice Johnson, Bob Smith"
        );
    }
}
