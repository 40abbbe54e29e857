//! Domain - Pure Data Structures
//!
//! These types don't depend on GPUI and represent the catalog's sample data.

pub mod member;
