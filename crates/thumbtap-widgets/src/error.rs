//! Error types for thumbtap-widgets.

use thiserror::Error;

/// Errors raised by the thumbnail widget and its configuration.
#[derive(Debug, Error)]
pub enum ThumbnailError {
    /// Content marked empty still carries a static image.
    #[error("inconsistent content: empty content must not carry a static image")]
    InconsistentContent,

    /// Configuration text is not valid TOML for [`crate::ThumbnailConfig`].
    #[error("config parse error: {0}")]
    Config(#[from] toml::de::Error),

    /// Configuration could not be read from disk.
    #[error("config IO error: {0}")]
    Io(#[from] std::io::Error),

    /// A configuration value is out of range.
    #[error("invalid config value: {0}")]
    InvalidValue(String),
}
