//! Overview Feature

pub mod page;
