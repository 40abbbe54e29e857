//! Features - Vertical Feature Slices
//!
//! Each feature contains the page for one catalog section.

pub mod home;
pub mod inputs;
pub mod tables;
