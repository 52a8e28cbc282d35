// ABOUTME: Contrast engine for named color palettes.
// ABOUTME: Computes WCAG contrast ratios for every palette pair and classifies them into tiers.

//! # contrast-core
//!
//! Given an ordered palette of named colors, compute the pairwise WCAG
//! contrast matrix and classify each pair as AAA, AA, large-text only or
//! failing.
//!
//! ```
//! use contrast_core::{build_matrix, Color, Palette, Tier, TierSet};
//!
//! let mut palette = Palette::new();
//! palette.push("White", Color::WHITE);
//! palette.push("Black", Color::BLACK);
//!
//! let matrix = build_matrix(&palette, &TierSet::all());
//! let cell = matrix.cell(0, 1).unwrap();
//! assert_eq!(cell.ratio(), 21.0);
//! assert_eq!(cell.tier(), Tier::Aaa);
//! ```

pub mod color;
pub mod engine;
pub mod error;
pub mod layout;
pub mod matrix;
pub mod palette;
pub mod tier;

pub use color::Color;
pub use engine::{channel_luminance, contrast_ratio, relative_luminance, ContrastResult};
pub use error::{ContrastError, Result};
pub use layout::{GridColumn, GridLayout, GridTile, HeaderTile, LegendEntry, SwatchTile, TileStyle};
pub use matrix::{build_matrix, ContrastCell, ContrastMatrix, TierCounts};
pub use palette::{NamedColor, Palette, PaletteFormat};
pub use tier::{classify, Tier, TierSet};
