//! DataTable Component
//!
//! A data table with column sorting, row selection, and loading/empty states.

use gpui::{
    div, prelude::*, px, relative, ClickEvent, Context, Div, EventEmitter, IntoElement,
    ParentElement, Render, SharedString, Styled, Window,
};

use super::column::{Column, ColumnWidth};
use super::selection::{SelectionMode, SelectionState};
use super::sort::{self, SortState};
use crate::constants::{TABLE_HEADER_HEIGHT, TABLE_ROW_HEIGHT};
use crate::theme::colors::BeaconColors;

/// Row data for a DataTable.
///
/// The id must be stable for the lifetime of the row; selection is
/// keyed by it and survives reloads of the row list.
pub trait TableRow: Clone + Send + Sync + 'static {
    fn row_id(&self) -> &str;
}

/// Events emitted by a DataTable
pub enum DataTableEvent<R: TableRow> {
    /// The set of selected rows changed; carries the selected rows in
    /// dataset order
    SelectionChanged(Vec<R>),
}

/// DataTable component
pub struct DataTable<R: TableRow> {
    columns: Vec<Column<R>>,
    rows: Vec<R>,
    row_height: f32,
    header_height: f32,
    loading: bool,
    empty_message: SharedString,
    selectable: Option<SelectionMode>,
    sort: SortState,
    selection: SelectionState,
}

impl<R: TableRow> Default for DataTable<R> {
    fn default() -> Self {
        Self {
            columns: Vec::new(),
            rows: Vec::new(),
            row_height: TABLE_ROW_HEIGHT,
            header_height: TABLE_HEADER_HEIGHT,
            loading: false,
            empty_message: "No data".into(),
            selectable: None,
            sort: SortState::default(),
            selection: SelectionState::default(),
        }
    }
}

impl<R: TableRow> DataTable<R> {
    /// Create a new data table
    pub fn new(_cx: &mut Context<Self>) -> Self {
        Self::default()
    }

    /// Set the columns
    pub fn set_columns(&mut self, columns: Vec<Column<R>>) {
        self.columns = columns;
    }

    /// Replace the rows. Sort and selection state are kept; selected
    /// ids without a matching row simply stop appearing in snapshots.
    pub fn set_rows(&mut self, rows: Vec<R>) {
        self.rows = rows;
    }

    /// Set loading state
    pub fn set_loading(&mut self, loading: bool) {
        self.loading = loading;
    }

    /// Set the empty message
    pub fn set_empty_message(&mut self, message: impl Into<SharedString>) {
        self.empty_message = message.into();
    }

    /// Enable row selection in the given mode
    pub fn set_selectable(&mut self, mode: Option<SelectionMode>) {
        self.selectable = mode;
    }

    pub fn selection(&self) -> &SelectionState {
        &self.selection
    }

    /// Handle a header click on a column
    pub fn request_sort(&mut self, key: &str, cx: &mut Context<Self>) {
        if self.try_request_sort(key) {
            cx.notify();
        }
    }

    /// Returns true when the sort state changed. Requests for unknown
    /// or non-sortable columns are ignored.
    fn try_request_sort(&mut self, key: &str) -> bool {
        let Some(column) = self.columns.iter().find(|c| c.id.as_ref() == key) else {
            return false;
        };
        if !column.sortable {
            return false;
        }
        self.sort.request(column.id.clone());
        true
    }

    /// Handle a click on a row's selection control
    pub fn toggle_row(&mut self, id: &str, cx: &mut Context<Self>) {
        if self.toggle_row_inner(id) {
            cx.emit(DataTableEvent::SelectionChanged(self.selected_rows()));
            cx.notify();
        }
    }

    fn toggle_row_inner(&mut self, id: &str) -> bool {
        let Some(mode) = self.selectable else {
            return false;
        };
        self.selection.toggle(id, mode);
        true
    }

    /// Selected rows in dataset order, regardless of the sort order
    /// shown on screen
    pub fn selected_rows(&self) -> Vec<R> {
        self.selection
            .snapshot(&self.rows, |row| row.row_id())
            .into_iter()
            .cloned()
            .collect()
    }

    /// Row indices in display order: the sorted order when a sort is
    /// active, the dataset order otherwise
    pub fn display_order(&self) -> Vec<usize> {
        let Some(key) = self.sort.key() else {
            return (0..self.rows.len()).collect();
        };
        let Some(column) = self.columns.iter().find(|c| &c.id == key) else {
            return (0..self.rows.len()).collect();
        };
        sort::sorted_indices(&self.rows, |row| column.value(row), self.sort.direction())
    }

    /// Base cell container sized per the column width
    fn column_cell(&self, width: &ColumnWidth) -> Div {
        match width {
            ColumnWidth::Fixed(w) => div().w(px(*w)),
            ColumnWidth::Flex { min, max } => {
                let mut cell = div().flex_1();
                if let Some(min) = *min {
                    cell = cell.min_w(px(min));
                }
                if let Some(max) = *max {
                    cell = cell.max_w(px(max));
                }
                cell
            }
            ColumnWidth::Percent(p) => div().w(relative(p / 100.0)),
        }
    }

    /// Render the header row
    fn render_header(&self, cx: &mut Context<Self>) -> impl IntoElement {
        let mut header = div()
            .h(px(self.header_height))
            .w_full()
            .flex()
            .items_center()
            .bg(BeaconColors::table_header_bg())
            .border_b_1()
            .border_color(BeaconColors::border());

        if self.selectable.is_some() {
            header = header.child(div().w(px(40.0)));
        }

        header.children(self.columns.iter().map(|col| {
            let mut label_row = div()
                .flex()
                .items_center()
                .gap_1()
                .child(col.label.clone());
            if let Some(direction) = self.sort.direction_for(col.id.as_ref()) {
                label_row = label_row.child(
                    div()
                        .text_color(BeaconColors::accent())
                        .child(direction.indicator()),
                );
            }

            let cell = self
                .column_cell(&col.width)
                .px_3()
                .h_full()
                .flex()
                .items_center()
                .text_sm()
                .font_weight(gpui::FontWeight::MEDIUM)
                .text_color(BeaconColors::text_primary());

            if col.sortable {
                let key = col.id.clone();
                cell.id(SharedString::from(format!("sort-{}", col.id)))
                    .cursor_pointer()
                    .hover(|s| s.text_color(BeaconColors::accent()))
                    .on_click(cx.listener(move |this, _: &ClickEvent, _window, cx| {
                        this.request_sort(key.as_ref(), cx);
                    }))
                    .child(label_row)
                    .into_any_element()
            } else {
                cell.child(label_row).into_any_element()
            }
        }))
    }

    /// Render the selection control cell for a row
    fn render_selection_cell(
        &self,
        row: &R,
        mode: SelectionMode,
        cx: &mut Context<Self>,
    ) -> impl IntoElement {
        let id = row.row_id().to_string();
        let selected = self.selection.is_selected(&id);
        let element_id = SharedString::from(format!("select-{id}"));

        let control = match mode {
            SelectionMode::Single => {
                let mut radio = div()
                    .size(px(16.0))
                    .rounded_full()
                    .border_1()
                    .border_color(if selected {
                        BeaconColors::accent()
                    } else {
                        BeaconColors::input_border()
                    })
                    .flex()
                    .items_center()
                    .justify_center();
                if selected {
                    radio = radio.child(div().size(px(8.0)).rounded_full().bg(BeaconColors::accent()));
                }
                radio
            }
            SelectionMode::Multiple => {
                let mut check = div()
                    .size(px(16.0))
                    .rounded_sm()
                    .border_1()
                    .border_color(if selected {
                        BeaconColors::accent()
                    } else {
                        BeaconColors::input_border()
                    })
                    .flex()
                    .items_center()
                    .justify_center();
                if selected {
                    check = check
                        .bg(BeaconColors::accent())
                        .text_color(BeaconColors::text_light())
                        .text_size(px(11.0))
                        .child("\u{2713}");
                }
                check
            }
        };

        div()
            .id(element_id)
            .w(px(40.0))
            .h_full()
            .flex()
            .items_center()
            .justify_center()
            .cursor_pointer()
            .on_click(cx.listener(move |this, _: &ClickEvent, _window, cx| {
                this.toggle_row(&id, cx);
            }))
            .child(control)
    }

    /// Render a data row
    fn render_row(
        &self,
        display_index: usize,
        row: &R,
        cx: &mut Context<Self>,
    ) -> impl IntoElement + use<R> {
        let selected = self.selection.is_selected(row.row_id());
        let bg = if selected {
            BeaconColors::table_row_selected()
        } else if display_index % 2 == 0 {
            BeaconColors::content_bg()
        } else {
            BeaconColors::table_row_alt()
        };

        let mut element = div()
            .h(px(self.row_height))
            .w_full()
            .flex()
            .items_center()
            .bg(bg)
            .hover(|s| s.bg(BeaconColors::table_row_hover()))
            .border_b_1()
            .border_color(BeaconColors::border());

        if let Some(mode) = self.selectable {
            element = element.child(self.render_selection_cell(row, mode, cx));
        }

        element.children(self.columns.iter().map(|col| {
            let cell_content = col.render_cell(row);
            self.column_cell(&col.width)
                .px_3()
                .text_sm()
                .text_color(BeaconColors::text_primary())
                .overflow_hidden()
                .child(cell_content)
        }))
    }

    /// Render empty state
    fn render_empty(&self) -> impl IntoElement {
        div()
            .flex_1()
            .flex()
            .items_center()
            .justify_center()
            .text_color(BeaconColors::text_muted())
            .child(self.empty_message.clone())
    }

    /// Render loading state
    fn render_loading(&self) -> impl IntoElement {
        div()
            .flex_1()
            .flex()
            .items_center()
            .justify_center()
            .text_color(BeaconColors::text_muted())
            .child("Loading...")
    }
}

impl<R: TableRow> EventEmitter<DataTableEvent<R>> for DataTable<R> {}

impl<R: TableRow> Render for DataTable<R> {
    fn render(&mut self, _window: &mut Window, cx: &mut Context<Self>) -> impl IntoElement {
        let mut table = div()
            .size_full()
            .flex()
            .flex_col()
            .bg(BeaconColors::content_bg())
            .border_1()
            .border_color(BeaconColors::border())
            .rounded_md()
            .overflow_hidden();

        table = table.child(self.render_header(cx));

        if self.loading {
            table = table.child(self.render_loading());
        } else if self.rows.is_empty() {
            table = table.child(self.render_empty());
        } else {
            let order = self.display_order();
            let rows: Vec<_> = order
                .iter()
                .enumerate()
                .map(|(display_index, &row_index)| {
                    self.render_row(display_index, &self.rows[row_index], cx)
                })
                .collect();
            table = table.child(
                div()
                    .id("data-table-rows")
                    .flex_1()
                    .overflow_y_scroll()
                    .children(rows),
            );
        }

        table
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::components::composite::data_table::column::CellValue;
    use crate::components::composite::data_table::sort::SortDirection;

    #[derive(Clone)]
    struct TestRow {
        id: &'static str,
        name: &'static str,
        role: &'static str,
    }

    impl TableRow for TestRow {
        fn row_id(&self) -> &str {
            self.id
        }
    }

    fn make_rows() -> Vec<TestRow> {
        vec![
            TestRow {
                id: "1",
                name: "Carol",
                role: "User",
            },
            TestRow {
                id: "2",
                name: "Alice",
                role: "Admin",
            },
            TestRow {
                id: "3",
                name: "Bob",
                role: "User",
            },
        ]
    }

    fn make_table() -> DataTable<TestRow> {
        let mut table = DataTable::default();
        table.set_columns(vec![
            Column::new("name", "Name", |r: &TestRow| CellValue::text(r.name)).sortable(),
            Column::new("role", "Role", |r: &TestRow| CellValue::text(r.role)).sortable(),
            Column::new("actions", "Actions", |_: &TestRow| CellValue::Empty),
        ]);
        table.set_rows(make_rows());
        table
    }

    #[test]
    fn display_order_is_dataset_order_before_any_sort() {
        let table = make_table();
        assert_eq!(table.display_order(), vec![0, 1, 2]);
    }

    #[test]
    fn sort_request_on_non_sortable_column_is_ignored() {
        let mut table = make_table();
        assert!(!table.try_request_sort("actions"));
        assert_eq!(table.sort.key(), None);
        assert_eq!(table.display_order(), vec![0, 1, 2]);
    }

    #[test]
    fn sort_request_on_unknown_column_is_ignored() {
        let mut table = make_table();
        assert!(!table.try_request_sort("missing"));
        assert_eq!(table.sort.key(), None);
    }

    #[test]
    fn sorting_by_name_orders_rows() {
        let mut table = make_table();
        assert!(table.try_request_sort("name"));
        assert_eq!(table.display_order(), vec![1, 2, 0]);

        table.try_request_sort("name");
        assert_eq!(table.sort.direction(), SortDirection::Descending);
        assert_eq!(table.display_order(), vec![0, 2, 1]);
    }

    #[test]
    fn descending_keeps_input_order_for_equal_roles() {
        let mut table = make_table();
        table.try_request_sort("role");
        table.try_request_sort("role");
        // Carol and Bob share the "User" role and stay in dataset order
        assert_eq!(table.display_order(), vec![0, 2, 1]);
    }

    #[test]
    fn toggle_without_selection_mode_is_ignored() {
        let mut table = make_table();
        assert!(!table.toggle_row_inner("1"));
        assert!(table.selection().is_empty());
    }

    #[test]
    fn selected_rows_come_back_in_dataset_order() {
        let mut table = make_table();
        table.set_selectable(Some(SelectionMode::Multiple));
        table.toggle_row_inner("3");
        table.toggle_row_inner("1");

        let ids: Vec<&str> = table.selected_rows().iter().map(|r| r.id).collect();
        assert_eq!(ids, vec!["1", "3"]);
    }

    #[test]
    fn selection_survives_row_reload() {
        let mut table = make_table();
        table.set_selectable(Some(SelectionMode::Multiple));
        table.toggle_row_inner("2");

        let mut rows = make_rows();
        rows.reverse();
        table.set_rows(rows);

        let selected = table.selected_rows();
        assert_eq!(selected.len(), 1);
        assert_eq!(selected[0].name, "Alice");
    }

    #[test]
    fn single_mode_keeps_at_most_one_row() {
        let mut table = make_table();
        table.set_selectable(Some(SelectionMode::Single));
        table.toggle_row_inner("1");
        table.toggle_row_inner("2");
        assert_eq!(table.selected_rows().len(), 1);
        assert_eq!(table.selected_rows()[0].id, "2");
    }

    #[test]
    fn selection_is_not_affected_by_sort_order() {
        let mut table = make_table();
        table.set_selectable(Some(SelectionMode::Multiple));
        table.toggle_row_inner("1");
        table.toggle_row_inner("2");

        table.try_request_sort("name");
        let ids: Vec<&str> = table.selected_rows().iter().map(|r| r.id).collect();
        assert_eq!(ids, vec!["1", "2"]);
    }
}
