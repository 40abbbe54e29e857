//! Layout Components
//!
//! Header and sidebar for the catalog shell.

pub mod header;
pub mod sidebar;
