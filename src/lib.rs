//! Beacon UI Component Catalog
//!
//! This crate provides a desktop catalog of the Beacon design system
//! components, with interactive pages for input fields and data tables.

pub mod app;
pub mod assets;
pub mod components;
pub mod constants;
pub mod domain;
pub mod error;
pub mod features;
pub mod state;
pub mod theme;
pub mod utils;
