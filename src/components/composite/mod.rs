//! Composite Components
//!
//! Components built from primitives and state.

pub mod data_table;
