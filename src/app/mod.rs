//! Application Shell

pub mod application;
pub mod entities;
pub mod navigation;
pub mod workspace;
