//! Theme - Colors and Typography
//!
//! The Beacon palette and type scale shared by every component.

pub mod colors;
pub mod typography;
