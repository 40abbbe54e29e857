//! Data Table Showcase

pub mod page;
