//! Embedded Assets
//!
//! The sample dataset ships inside the binary via rust-embed, so the
//! catalog runs without any files on disk.

use gpui::{AssetSource, Result, SharedString};
use rust_embed::RustEmbed;
use std::borrow::Cow;

/// Compile-time bundle of everything under `assets/data/`
#[derive(RustEmbed)]
#[folder = "assets"]
#[include = "data/**/*.json"]
pub struct Assets;

impl AssetSource for Assets {
    fn load(&self, path: &str) -> Result<Option<Cow<'static, [u8]>>> {
        if path.is_empty() {
            return Ok(None);
        }
        Ok(Self::get(path).map(|f| f.data))
    }

    fn list(&self, path: &str) -> Result<Vec<SharedString>> {
        let files: Vec<SharedString> = Self::iter()
            .filter(|p| p.starts_with(path))
            .map(|p| p.into())
            .collect();
        Ok(files)
    }
}
