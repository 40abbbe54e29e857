//! Input Field Showcase

pub mod page;
