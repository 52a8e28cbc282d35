// ABOUTME: Immutable RGB color with channels in [0, 1].
// ABOUTME: Validated construction, 8-bit and hex conversions, serde as "#rrggbb".

use crate::error::{ContrastError, Result};
use serde::{Deserialize, Serialize};
use std::fmt;

/// An sRGB color with each channel in [0, 1].
///
/// Fields are private so every `Color` in circulation has been validated.
/// Use [`Color::new`] for unit channels, [`Color::from_rgb8`] for bytes and
/// [`Color::from_hex`] for `#rrggbb` strings.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Color {
    r: f64,
    g: f64,
    b: f64,
}

impl Color {
    pub const WHITE: Color = Color {
        r: 1.0,
        g: 1.0,
        b: 1.0,
    };

    pub const BLACK: Color = Color {
        r: 0.0,
        g: 0.0,
        b: 0.0,
    };

    /// Build a color from unit channels.
    ///
    /// # Errors
    /// Returns `ContrastError::ChannelOutOfRange` for any channel that is
    /// NaN, infinite, or outside [0, 1]. Values are never clamped.
    pub fn new(r: f64, g: f64, b: f64) -> Result<Self> {
        for (channel, value) in [('r', r), ('g', g), ('b', b)] {
            if !value.is_finite() || !(0.0..=1.0).contains(&value) {
                return Err(ContrastError::ChannelOutOfRange { channel, value });
            }
        }
        Ok(Self { r, g, b })
    }

    /// Build a color from 8-bit channels.
    pub fn from_rgb8(r: u8, g: u8, b: u8) -> Self {
        Self {
            r: f64::from(r) / 255.0,
            g: f64::from(g) / 255.0,
            b: f64::from(b) / 255.0,
        }
    }

    /// Parse `#rrggbb`, `rrggbb`, `#rgb` or `rgb` (case-insensitive).
    pub fn from_hex(input: &str) -> Result<Self> {
        let trimmed = input.trim();
        let digits = trimmed.strip_prefix('#').unwrap_or(trimmed);
        if !digits.chars().all(|c| c.is_ascii_hexdigit()) {
            return Err(ContrastError::InvalidHex(input.to_string()));
        }

        let expanded: String = match digits.len() {
            6 => digits.to_string(),
            3 => digits.chars().flat_map(|c| [c, c]).collect(),
            _ => return Err(ContrastError::InvalidHex(input.to_string())),
        };

        let byte = |i: usize| {
            u8::from_str_radix(&expanded[i..i + 2], 16)
                .map_err(|_| ContrastError::InvalidHex(input.to_string()))
        };
        Ok(Self::from_rgb8(byte(0)?, byte(2)?, byte(4)?))
    }

    pub fn r(&self) -> f64 {
        self.r
    }

    pub fn g(&self) -> f64 {
        self.g
    }

    pub fn b(&self) -> f64 {
        self.b
    }

    /// Channels as 8-bit values, rounding half up.
    pub fn to_rgb8(&self) -> (u8, u8, u8) {
        (
            channel_to_byte(self.r),
            channel_to_byte(self.g),
            channel_to_byte(self.b),
        )
    }

    /// Six lowercase hex digits without a leading `#`.
    pub fn to_hex(&self) -> String {
        let (r, g, b) = self.to_rgb8();
        format!("{r:02x}{g:02x}{b:02x}")
    }
}

// Channels are validated to [0, 1], so the product always fits in a byte.
fn channel_to_byte(channel: f64) -> u8 {
    (channel * 255.0).round() as u8
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.to_hex())
    }
}

impl From<Color> for String {
    fn from(color: Color) -> Self {
        color.to_string()
    }
}

impl TryFrom<String> for Color {
    type Error = ContrastError;

    fn try_from(value: String) -> Result<Self> {
        Color::from_hex(&value)
    }
}

impl std::str::FromStr for Color {
    type Err = ContrastError;

    fn from_str(s: &str) -> Result<Self> {
        Color::from_hex(s)
    }
}
