//! Components - Reusable UI Components
//!
//! Pure UI components that don't depend on state entities or do I/O.

pub mod composite;
pub mod layout;
pub mod primitives;
