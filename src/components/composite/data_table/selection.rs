//! Row Selection
//!
//! Tracks selected rows by id, independent of row order or presence.

use ahash::AHashSet;

/// Selection mode for a table
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SelectionMode {
    /// At most one row selected; clicking it again deselects
    Single,
    /// Any number of rows selected
    Multiple,
}

/// Selected row ids.
///
/// Ids are kept even when their row leaves the dataset, so a row that
/// comes back is still selected. Snapshots only ever contain ids that
/// are present in the rows they are taken over.
#[derive(Debug, Clone, Default)]
pub struct SelectionState {
    ids: AHashSet<String>,
}

impl SelectionState {
    /// Toggle a row id under the given mode
    pub fn toggle(&mut self, id: &str, mode: SelectionMode) {
        match mode {
            SelectionMode::Single => {
                let was_selected = self.ids.contains(id);
                self.ids.clear();
                if !was_selected {
                    self.ids.insert(id.to_string());
                }
            }
            SelectionMode::Multiple => {
                if !self.ids.remove(id) {
                    self.ids.insert(id.to_string());
                }
            }
        }
    }

    pub fn is_selected(&self, id: &str) -> bool {
        self.ids.contains(id)
    }

    pub fn len(&self) -> usize {
        self.ids.len()
    }

    pub fn is_empty(&self) -> bool {
        self.ids.is_empty()
    }

    pub fn clear(&mut self) {
        self.ids.clear();
    }

    /// Selected rows in dataset order, skipping ids with no matching row
    pub fn snapshot<'a, R>(&self, rows: &'a [R], id_of: impl Fn(&R) -> &str) -> Vec<&'a R> {
        rows.iter().filter(|row| self.ids.contains(id_of(row))).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn rows() -> Vec<(&'static str, &'static str)> {
        vec![("1", "Alice"), ("2", "Bob"), ("3", "Carol")]
    }

    #[test]
    fn multiple_toggle_adds_and_removes() {
        let mut selection = SelectionState::default();
        selection.toggle("1", SelectionMode::Multiple);
        selection.toggle("2", SelectionMode::Multiple);
        assert_eq!(selection.len(), 2);

        selection.toggle("1", SelectionMode::Multiple);
        assert!(!selection.is_selected("1"));
        assert!(selection.is_selected("2"));
    }

    #[test]
    fn single_replaces_previous_selection() {
        let mut selection = SelectionState::default();
        selection.toggle("1", SelectionMode::Single);
        selection.toggle("2", SelectionMode::Single);
        assert!(!selection.is_selected("1"));
        assert!(selection.is_selected("2"));
        assert_eq!(selection.len(), 1);
    }

    #[test]
    fn single_toggle_on_selected_row_clears() {
        let mut selection = SelectionState::default();
        selection.toggle("1", SelectionMode::Single);
        selection.toggle("1", SelectionMode::Single);
        assert!(selection.is_empty());
    }

    #[test]
    fn snapshot_follows_dataset_order() {
        let mut selection = SelectionState::default();
        selection.toggle("3", SelectionMode::Multiple);
        selection.toggle("1", SelectionMode::Multiple);

        let rows = rows();
        let snapshot = selection.snapshot(&rows, |r| r.0);
        let ids: Vec<&str> = snapshot.iter().map(|r| r.0).collect();
        assert_eq!(ids, vec!["1", "3"]);
    }

    #[test]
    fn stale_ids_are_kept_but_not_snapshotted() {
        let mut selection = SelectionState::default();
        selection.toggle("9", SelectionMode::Multiple);
        selection.toggle("2", SelectionMode::Multiple);

        let rows = rows();
        let snapshot = selection.snapshot(&rows, |r| r.0);
        assert_eq!(snapshot.len(), 1);
        assert_eq!(snapshot[0].1, "Bob");
        // The missing id stays tracked for when its row returns
        assert_eq!(selection.len(), 2);
        assert!(selection.is_selected("9"));
    }

    #[test]
    fn clear_removes_everything() {
        let mut selection = SelectionState::default();
        selection.toggle("1", SelectionMode::Multiple);
        selection.toggle("2", SelectionMode::Multiple);
        selection.clear();
        assert!(selection.is_empty());
        assert!(selection.snapshot(&rows(), |r| r.0).is_empty());
    }
}
