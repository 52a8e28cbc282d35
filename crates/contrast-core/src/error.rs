// ABOUTME: Error types for color parsing and palette loading using thiserror.
// ABOUTME: The contrast math itself is infallible; only input boundaries return these.

use std::path::PathBuf;
use thiserror::Error;

/// Errors raised while turning external input into colors, tiers and palettes.
#[derive(Error, Debug)]
pub enum ContrastError {
    /// A channel intensity was non-finite or outside [0, 1].
    #[error("channel {channel} out of range: {value} (expected 0.0..=1.0)")]
    ChannelOutOfRange { channel: char, value: f64 },

    /// A hex color string could not be parsed.
    #[error("invalid hex color: {0:?}")]
    InvalidHex(String),

    /// A tier identifier did not match any known tier.
    #[error("unknown tier: {0:?} (expected aaa, aa, aa-large or fail)")]
    UnknownTier(String),

    /// A palette entry was structurally valid but semantically wrong.
    #[error("invalid palette entry {name:?}: {reason}")]
    InvalidPaletteEntry { name: String, reason: String },

    /// Failed to read a palette file from disk.
    #[error("failed to read palette from {path}: {source}")]
    ReadPalette {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Failed to parse a palette file.
    #[error("failed to parse palette from {path}: {reason}")]
    ParsePalette { path: PathBuf, reason: String },
}

/// Result type alias using ContrastError.
pub type Result<T> = std::result::Result<T, ContrastError>;
