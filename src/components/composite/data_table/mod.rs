//! DataTable Component
//!
//! A reusable data table with column sorting and row selection.

pub mod column;
pub mod data_table;
pub mod selection;
pub mod sort;

pub use column::{CellValue, Column, ColumnWidth};
pub use data_table::{DataTable, DataTableEvent, TableRow};
pub use selection::{SelectionMode, SelectionState};
pub use sort::{SortDirection, SortState};
