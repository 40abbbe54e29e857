//! Column Definition
//!
//! Defines table columns with their properties, cell values, and renderers.

use std::cmp::Ordering;

use chrono::{DateTime, Utc};
use gpui::{AnyElement, IntoElement, SharedString};

use crate::utils::format::format_datetime;

/// A typed cell value produced by a column accessor.
///
/// The value drives both the default cell text and column sorting.
#[derive(Debug, Clone, PartialEq)]
pub enum CellValue {
    Text(SharedString),
    Integer(i64),
    Float(f64),
    Bool(bool),
    DateTime(DateTime<Utc>),
    Empty,
}

impl CellValue {
    /// Create a text value
    pub fn text(value: impl Into<SharedString>) -> Self {
        CellValue::Text(value.into())
    }

    /// Display text for the default cell renderer
    pub fn to_display(&self) -> SharedString {
        match self {
            CellValue::Text(s) => s.clone(),
            CellValue::Integer(n) => n.to_string().into(),
            CellValue::Float(f) => format!("{f}").into(),
            CellValue::Bool(true) => "Yes".into(),
            CellValue::Bool(false) => "No".into(),
            CellValue::DateTime(dt) => format_datetime(dt).into(),
            CellValue::Empty => "-".into(),
        }
    }

    /// Ordering between two cell values.
    ///
    /// Values without a meaningful order (mixed types, NaN, empty cells)
    /// compare as equal, so a stable sort keeps their input order.
    pub fn compare(&self, other: &Self) -> Ordering {
        match (self, other) {
            (CellValue::Text(a), CellValue::Text(b)) => a.cmp(b),
            (CellValue::Integer(a), CellValue::Integer(b)) => a.cmp(b),
            (CellValue::Float(a), CellValue::Float(b)) => {
                a.partial_cmp(b).unwrap_or(Ordering::Equal)
            }
            (CellValue::Integer(a), CellValue::Float(b)) => {
                (*a as f64).partial_cmp(b).unwrap_or(Ordering::Equal)
            }
            (CellValue::Float(a), CellValue::Integer(b)) => {
                a.partial_cmp(&(*b as f64)).unwrap_or(Ordering::Equal)
            }
            (CellValue::Bool(a), CellValue::Bool(b)) => a.cmp(b),
            (CellValue::DateTime(a), CellValue::DateTime(b)) => a.cmp(b),
            _ => Ordering::Equal,
        }
    }
}

/// Column definition for the DataTable
pub struct Column<R> {
    /// Column identifier
    pub id: SharedString,
    /// Column header label
    pub label: SharedString,
    /// Column width (in pixels, or flexible)
    pub width: ColumnWidth,
    /// Whether clicking the header sorts by this column
    pub sortable: bool,
    /// Extracts the cell value used for display and sorting
    accessor: Box<dyn Fn(&R) -> CellValue + Send + Sync>,
    /// Optional custom cell renderer, replacing the default value text
    render: Option<Box<dyn Fn(&R) -> AnyElement + Send + Sync>>,
}

/// How a column claims horizontal space
#[derive(Debug, Clone, Copy)]
pub enum ColumnWidth {
    /// Fixed width in pixels
    Fixed(f32),
    /// Flexible width with optional min/max
    Flex { min: Option<f32>, max: Option<f32> },
    /// Percentage of available space
    Percent(f32),
}

impl Default for ColumnWidth {
    fn default() -> Self {
        ColumnWidth::Flex { min: None, max: None }
    }
}

impl<R: 'static> Column<R> {
    /// Create a new column
    pub fn new(
        id: impl Into<SharedString>,
        label: impl Into<SharedString>,
        accessor: impl Fn(&R) -> CellValue + Send + Sync + 'static,
    ) -> Self {
        Self {
            id: id.into(),
            label: label.into(),
            width: ColumnWidth::default(),
            sortable: false,
            accessor: Box::new(accessor),
            render: None,
        }
    }

    /// Set fixed width
    pub fn fixed_width(mut self, width: f32) -> Self {
        self.width = ColumnWidth::Fixed(width);
        self
    }

    /// Set flexible width with optional constraints
    pub fn flex_width(mut self, min: Option<f32>, max: Option<f32>) -> Self {
        self.width = ColumnWidth::Flex { min, max };
        self
    }

    /// Set percentage width
    pub fn percent_width(mut self, percent: f32) -> Self {
        self.width = ColumnWidth::Percent(percent);
        self
    }

    /// Make the column sortable
    pub fn sortable(mut self) -> Self {
        self.sortable = true;
        self
    }

    /// Replace the default value text with a custom cell renderer
    pub fn render_with(mut self, render: impl Fn(&R) -> AnyElement + Send + Sync + 'static) -> Self {
        self.render = Some(Box::new(render));
        self
    }

    /// The cell value for a row
    pub fn value(&self, row: &R) -> CellValue {
        (self.accessor)(row)
    }

    /// Render a cell
    pub fn render_cell(&self, row: &R) -> AnyElement {
        match &self.render {
            Some(render) => render(row),
            None => self.value(row).to_display().into_any_element(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct Item {
        name: &'static str,
    }

    fn name_column() -> Column<Item> {
        Column::new("name", "Name", |item: &Item| CellValue::text(item.name))
    }

    #[test]
    fn accessor_produces_cell_value() {
        let col = name_column();
        let item = Item { name: "alpha" };
        assert_eq!(col.value(&item), CellValue::text("alpha"));
    }

    #[test]
    fn columns_are_not_sortable_by_default() {
        let col = name_column();
        assert!(!col.sortable);
        assert!(name_column().sortable().sortable);
    }

    #[test]
    fn display_text_per_value_kind() {
        assert_eq!(CellValue::Integer(42).to_display().as_ref(), "42");
        assert_eq!(CellValue::Bool(true).to_display().as_ref(), "Yes");
        assert_eq!(CellValue::Empty.to_display().as_ref(), "-");
    }

    #[test]
    fn text_values_order_lexicographically() {
        let a = CellValue::text("apple");
        let b = CellValue::text("banana");
        assert_eq!(a.compare(&b), Ordering::Less);
        assert_eq!(b.compare(&a), Ordering::Greater);
        assert_eq!(a.compare(&a.clone()), Ordering::Equal);
    }

    #[test]
    fn mixed_numeric_values_compare_as_numbers() {
        assert_eq!(
            CellValue::Integer(2).compare(&CellValue::Float(2.5)),
            Ordering::Less
        );
        assert_eq!(
            CellValue::Float(3.0).compare(&CellValue::Integer(2)),
            Ordering::Greater
        );
    }

    #[test]
    fn incomparable_values_are_equal() {
        assert_eq!(
            CellValue::text("a").compare(&CellValue::Integer(1)),
            Ordering::Equal
        );
        assert_eq!(
            CellValue::Empty.compare(&CellValue::Bool(true)),
            Ordering::Equal
        );
        assert_eq!(
            CellValue::Float(f64::NAN).compare(&CellValue::Float(1.0)),
            Ordering::Equal
        );
    }
}
