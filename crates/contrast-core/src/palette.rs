// ABOUTME: Ordered palette of named colors and its TOML/JSON file format.
// ABOUTME: Insertion order fixes the row and column order of the contrast matrix.

use crate::color::Color;
use crate::error::{ContrastError, Result};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use tracing::{debug, info};

/// One palette entry. Names are for display only and need not be unique.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct NamedColor {
    pub name: String,
    #[serde(rename = "hex")]
    pub color: Color,
}

impl NamedColor {
    pub fn new(name: impl Into<String>, color: Color) -> Self {
        Self {
            name: name.into(),
            color,
        }
    }
}

/// Ordered sequence of named colors.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct Palette {
    colors: Vec<NamedColor>,
}

/// On-disk encoding of a palette file.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PaletteFormat {
    Toml,
    Json,
}

impl PaletteFormat {
    /// Pick the format from the file extension. Anything but `.json` is TOML.
    pub fn from_path(path: &Path) -> Self {
        match path.extension().and_then(|ext| ext.to_str()) {
            Some(ext) if ext.eq_ignore_ascii_case("json") => PaletteFormat::Json,
            _ => PaletteFormat::Toml,
        }
    }
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
struct PaletteDocument {
    #[serde(default)]
    colors: Vec<EntryDocument>,
}

/// Exactly one of `hex`, `rgb` or `unit` must be present.
#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
struct EntryDocument {
    name: String,
    #[serde(default)]
    hex: Option<String>,
    #[serde(default)]
    rgb: Option<[u8; 3]>,
    #[serde(default)]
    unit: Option<[f64; 3]>,
}

impl EntryDocument {
    fn into_named_color(self) -> Result<NamedColor> {
        let invalid = |reason: String| ContrastError::InvalidPaletteEntry {
            name: self.name.clone(),
            reason,
        };

        let color = match (&self.hex, self.rgb, self.unit) {
            (Some(hex), None, None) => Color::from_hex(hex).map_err(|e| invalid(e.to_string()))?,
            (None, Some([r, g, b]), None) => Color::from_rgb8(r, g, b),
            (None, None, Some([r, g, b])) => {
                Color::new(r, g, b).map_err(|e| invalid(e.to_string()))?
            }
            (None, None, None) => {
                return Err(invalid("one of hex, rgb or unit is required".to_string()))
            }
            _ => {
                return Err(invalid(
                    "only one of hex, rgb or unit may be given".to_string(),
                ))
            }
        };

        Ok(NamedColor::new(self.name, color))
    }
}

impl Palette {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, name: impl Into<String>, color: Color) {
        self.colors.push(NamedColor::new(name, color));
    }

    pub fn len(&self) -> usize {
        self.colors.len()
    }

    pub fn is_empty(&self) -> bool {
        self.colors.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<&NamedColor> {
        self.colors.get(index)
    }

    pub fn iter(&self) -> std::slice::Iter<'_, NamedColor> {
        self.colors.iter()
    }

    pub fn colors(&self) -> &[NamedColor] {
        &self.colors
    }

    /// Load a palette file, choosing TOML or JSON by extension.
    pub fn load(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path).map_err(|source| {
            ContrastError::ReadPalette {
                path: path.to_path_buf(),
                source,
            }
        })?;
        let format = PaletteFormat::from_path(path);
        debug!(path = %path.display(), ?format, "parsing palette");

        let palette = Self::parse_with_origin(&content, format, path)?;
        info!(path = %path.display(), colors = palette.len(), "loaded palette");
        Ok(palette)
    }

    /// Parse palette text in the given format.
    pub fn parse(content: &str, format: PaletteFormat) -> Result<Self> {
        Self::parse_with_origin(content, format, Path::new("<inline>"))
    }

    fn parse_with_origin(content: &str, format: PaletteFormat, origin: &Path) -> Result<Self> {
        let parse_error = |reason: String| ContrastError::ParsePalette {
            path: PathBuf::from(origin),
            reason,
        };

        let document: PaletteDocument = match format {
            PaletteFormat::Toml => toml::from_str(content).map_err(|e| parse_error(e.to_string()))?,
            PaletteFormat::Json => {
                serde_json::from_str(content).map_err(|e| parse_error(e.to_string()))?
            }
        };

        document
            .colors
            .into_iter()
            .map(EntryDocument::into_named_color)
            .collect()
    }
}

impl FromIterator<NamedColor> for Palette {
    fn from_iter<I: IntoIterator<Item = NamedColor>>(iter: I) -> Self {
        Self {
            colors: iter.into_iter().collect(),
        }
    }
}

impl<'a> IntoIterator for &'a Palette {
    type Item = &'a NamedColor;
    type IntoIter = std::slice::Iter<'a, NamedColor>;

    fn into_iter(self) -> Self::IntoIter {
        self.colors.iter()
    }
}
