// ABOUTME: Renderer-neutral description of the contrast grid.
// ABOUTME: Legend, header swatches and one column of tiles per foreground color.

use crate::color::Color;
use crate::matrix::ContrastMatrix;
use crate::palette::Palette;
use crate::tier::Tier;
use serde::Serialize;

/// Text drawn on every tile unless the caller overrides it.
pub const DEFAULT_SAMPLE_TEXT: &str = "Text";

/// Geometry for one kind of grid element, in canvas units.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct TileStyle {
    pub width: f64,
    pub height: f64,
    pub padding: f64,
    pub item_spacing: f64,
    pub corner_radius: f64,
}

impl TileStyle {
    /// Hex swatch at the top of each column.
    pub const SWATCH: TileStyle = TileStyle {
        width: 80.0,
        height: 80.0,
        padding: 8.0,
        item_spacing: 8.0,
        corner_radius: 0.0,
    };

    /// Name and hex tile in the header column.
    pub const HEADER: TileStyle = TileStyle {
        width: 200.0,
        height: 80.0,
        padding: 8.0,
        item_spacing: 8.0,
        corner_radius: 0.0,
    };

    /// Sample text, badge and ratio for one pair.
    pub const TILE: TileStyle = TileStyle {
        width: 80.0,
        height: 80.0,
        padding: 8.0,
        item_spacing: 8.0,
        corner_radius: 0.0,
    };

    pub const BADGE: TileStyle = TileStyle {
        width: 30.0,
        height: 20.0,
        padding: 2.0,
        item_spacing: 0.0,
        corner_radius: 8.0,
    };

    /// Gap between columns and between tiles within a column.
    pub const GAP: f64 = 5.0;
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct LegendEntry {
    pub tier: Tier,
    pub label: &'static str,
    pub description: &'static str,
    pub color: Color,
}

/// Badge legend for every tier, in ladder order.
pub fn legend() -> Vec<LegendEntry> {
    Tier::ALL
        .into_iter()
        .map(|tier| LegendEntry {
            tier,
            label: tier.badge_label(),
            description: tier.description(),
            color: tier.badge_color(),
        })
        .collect()
}

/// Row header: the background color's name and hex drawn on itself.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct HeaderTile {
    pub name: String,
    pub hex: String,
    pub fill: Color,
}

/// Column header: the foreground color's hex drawn on itself.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SwatchTile {
    pub hex: String,
    pub fill: Color,
}

/// One pair in the grid. `badge` and `ratio_label` are `None` when the
/// matrix cell is suppressed, and the tile is then drawn blank.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct GridTile {
    pub background: Color,
    pub text_color: Color,
    pub sample_text: Option<String>,
    pub badge: Option<Tier>,
    pub ratio_label: Option<String>,
}

impl GridTile {
    pub fn is_blank(&self) -> bool {
        self.badge.is_none()
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct GridColumn {
    pub swatch: SwatchTile,
    pub tiles: Vec<GridTile>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct GridLayout {
    pub legend: Vec<LegendEntry>,
    pub header: Vec<HeaderTile>,
    pub columns: Vec<GridColumn>,
}

impl GridLayout {
    /// Lay out `matrix`, which must have been built from `palette`.
    pub fn build(palette: &Palette, matrix: &ContrastMatrix) -> Self {
        Self::build_with_text(palette, matrix, DEFAULT_SAMPLE_TEXT)
    }

    pub fn build_with_text(palette: &Palette, matrix: &ContrastMatrix, sample_text: &str) -> Self {
        Self {
            legend: legend(),
            header: header_tiles(palette),
            columns: columns(palette, matrix, sample_text),
        }
    }
}

fn header_tiles(palette: &Palette) -> Vec<HeaderTile> {
    palette
        .iter()
        .map(|entry| HeaderTile {
            name: entry.name.clone(),
            hex: entry.color.to_string(),
            fill: entry.color,
        })
        .collect()
}

// The matrix is stored row-major by background; the grid is drawn one
// foreground column at a time.
fn columns(palette: &Palette, matrix: &ContrastMatrix, sample_text: &str) -> Vec<GridColumn> {
    palette
        .iter()
        .enumerate()
        .map(|(col, foreground)| {
            let tiles = (0..palette.len())
                .filter_map(|row| matrix.cell(row, col))
                .map(|cell| GridTile {
                    background: cell.result.background,
                    text_color: cell.result.foreground,
                    sample_text: cell.is_visible().then(|| sample_text.to_string()),
                    badge: cell.is_visible().then_some(cell.tier()),
                    ratio_label: cell.label(),
                })
                .collect();

            GridColumn {
                swatch: SwatchTile {
                    hex: foreground.color.to_string(),
                    fill: foreground.color,
                },
                tiles,
            }
        })
        .collect()
}
