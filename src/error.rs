//! Failure Surface for the Catalog
//!
//! One enum covers the two fallible areas: decoding the embedded sample
//! dataset and reading or writing the settings file. Variants wrapping a
//! source error derive `From` so callers can use `?` directly.

use snafu::Snafu;

/// Application error type
#[derive(Debug, Snafu)]
pub enum Error {
    /// The embedded bundle is missing a file we expect to ship
    #[snafu(display("Missing embedded asset: {path}"))]
    MissingAsset { path: String },

    /// The embedded sample dataset failed to decode
    #[snafu(context(false))]
    #[snafu(display("Sample data decode error: {source}"))]
    SampleData { source: serde_json::Error },

    /// The settings file could not be read or written
    #[snafu(context(false))]
    #[snafu(display("Settings file error: {source}"))]
    SettingsIo { source: std::io::Error },

    /// The settings file contents are not valid TOML
    #[snafu(context(false))]
    #[snafu(display("Settings parse error: {source}"))]
    SettingsParse { source: toml::de::Error },

    /// The settings could not be encoded as TOML
    #[snafu(context(false))]
    #[snafu(display("Settings encode error: {source}"))]
    SettingsEncode { source: toml::ser::Error },

    /// No platform configuration directory could be resolved
    #[snafu(display("No configuration directory available on this platform"))]
    NoConfigDir,
}

/// Alias used by the crate's fallible paths
pub type Result<T, E = Error> = std::result::Result<T, E>;
