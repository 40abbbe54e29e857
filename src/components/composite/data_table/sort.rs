//! Column Sorting
//!
//! Sort direction toggling and stable row ordering.

use gpui::SharedString;

use super::column::CellValue;

/// Sort direction for a column
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum SortDirection {
    #[default]
    Ascending,
    Descending,
}

impl SortDirection {
    pub fn toggled(self) -> Self {
        match self {
            SortDirection::Ascending => SortDirection::Descending,
            SortDirection::Descending => SortDirection::Ascending,
        }
    }

    /// Header glyph for the active sort column
    pub fn indicator(self) -> &'static str {
        match self {
            SortDirection::Ascending => "\u{2191}",
            SortDirection::Descending => "\u{2193}",
        }
    }
}

/// The active sort column and direction for a table.
///
/// No column is sorted until the first request; sorting then stays on
/// some column, there is no way back to the unsorted state.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SortState {
    key: Option<SharedString>,
    direction: SortDirection,
}

impl SortState {
    pub fn key(&self) -> Option<&SharedString> {
        self.key.as_ref()
    }

    pub fn direction(&self) -> SortDirection {
        self.direction
    }

    /// Handle a header click: toggle direction on the active column,
    /// or switch to a new column ascending.
    pub fn request(&mut self, key: impl Into<SharedString>) {
        let key = key.into();
        if self.key.as_ref() == Some(&key) {
            self.direction = self.direction.toggled();
        } else {
            self.key = Some(key);
            self.direction = SortDirection::Ascending;
        }
    }

    /// Direction for a column, or None when the column is not the active one
    pub fn direction_for(&self, key: &str) -> Option<SortDirection> {
        (self.key.as_ref().map(SharedString::as_str) == Some(key)).then_some(self.direction)
    }
}

/// Stable ordering of row indices by a column accessor.
///
/// Rows whose keys compare equal keep their input order, in both
/// directions. The source rows are not moved.
pub fn sorted_indices<R>(
    rows: &[R],
    accessor: impl Fn(&R) -> CellValue,
    direction: SortDirection,
) -> Vec<usize> {
    let keys: Vec<CellValue> = rows.iter().map(accessor).collect();
    let mut indices: Vec<usize> = (0..rows.len()).collect();
    indices.sort_by(|&a, &b| {
        let ord = keys[a].compare(&keys[b]);
        match direction {
            SortDirection::Ascending => ord,
            SortDirection::Descending => ord.reverse(),
        }
    });
    indices
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn first_request_sorts_ascending() {
        let mut sort = SortState::default();
        sort.request("name");
        assert_eq!(sort.key().map(|k| k.as_ref()), Some("name"));
        assert_eq!(sort.direction(), SortDirection::Ascending);
    }

    #[test]
    fn same_key_toggles_direction() {
        let mut sort = SortState::default();
        sort.request("name");
        sort.request("name");
        assert_eq!(sort.direction(), SortDirection::Descending);
        sort.request("name");
        assert_eq!(sort.direction(), SortDirection::Ascending);
    }

    #[test]
    fn new_key_resets_to_ascending() {
        let mut sort = SortState::default();
        sort.request("name");
        sort.request("name");
        assert_eq!(sort.direction(), SortDirection::Descending);

        sort.request("role");
        assert_eq!(sort.key().map(|k| k.as_ref()), Some("role"));
        assert_eq!(sort.direction(), SortDirection::Ascending);
    }

    #[test]
    fn direction_for_reports_only_the_active_column() {
        let mut sort = SortState::default();
        assert_eq!(sort.direction_for("name"), None);

        sort.request("name");
        assert_eq!(sort.direction_for("name"), Some(SortDirection::Ascending));
        assert_eq!(sort.direction_for("role"), None);
    }

    #[test]
    fn ascending_orders_by_key() {
        let rows = vec!["banana", "apple", "cherry"];
        let order = sorted_indices(&rows, |r| CellValue::text(*r), SortDirection::Ascending);
        assert_eq!(order, vec![1, 0, 2]);
    }

    #[test]
    fn descending_reverses_comparisons_not_ties() {
        // Two rows share the key "Bob"; descending must keep them in
        // input order rather than reversing the ascending result.
        let rows = vec!["Bob", "Ann", "Bob"];
        let order = sorted_indices(&rows, |r| CellValue::text(*r), SortDirection::Descending);
        assert_eq!(order, vec![0, 2, 1]);
    }

    #[test]
    fn equal_keys_preserve_input_order() {
        let rows = vec!["same", "same", "same", "same"];
        let order = sorted_indices(&rows, |r| CellValue::text(*r), SortDirection::Ascending);
        assert_eq!(order, vec![0, 1, 2, 3]);
    }

    #[test]
    fn incomparable_keys_keep_input_order() {
        let rows = vec![
            CellValue::Float(f64::NAN),
            CellValue::text("b"),
            CellValue::Integer(1),
        ];
        let order = sorted_indices(&rows, |r| r.clone(), SortDirection::Ascending);
        assert_eq!(order, vec![0, 1, 2]);
    }

    #[test]
    fn empty_rows_produce_empty_order() {
        let rows: Vec<&str> = Vec::new();
        let order = sorted_indices(&rows, |r| CellValue::text(*r), SortDirection::Ascending);
        assert!(order.is_empty());
    }
}
