// ABOUTME: Output sinks for a computed contrast grid.
// ABOUTME: Dispatches to text, markdown, JSON or SVG renderers.

mod markdown;
mod svg;
mod text;

use crate::config::OutputFormat;
use anyhow::{Context, Result};
use contrast_core::{ContrastMatrix, GridLayout, Palette, TierCounts, TierSet};
use serde::Serialize;

/// Everything a renderer needs, computed once per `generate`.
pub struct Grid<'a> {
    pub palette: &'a Palette,
    pub visible_tiers: TierSet,
    pub matrix: &'a ContrastMatrix,
    pub layout: &'a GridLayout,
}

#[derive(Debug, Clone, Copy, Default)]
pub struct RenderOptions {
    /// Emit ANSI truecolor escapes in text output
    pub color: bool,
}

#[derive(Serialize)]
struct JsonReport<'a> {
    palette: &'a Palette,
    visible_tiers: TierSet,
    tier_counts: TierCounts,
    matrix: &'a ContrastMatrix,
    layout: &'a GridLayout,
}

pub fn render(grid: &Grid<'_>, format: OutputFormat, options: RenderOptions) -> Result<String> {
    match format {
        OutputFormat::Text => Ok(text::render(grid, options)),
        OutputFormat::Markdown => Ok(markdown::render(grid)),
        OutputFormat::Svg => Ok(svg::render(grid.layout)),
        OutputFormat::Json => {
            let report = JsonReport {
                palette: grid.palette,
                visible_tiers: grid.visible_tiers,
                tier_counts: grid.matrix.tier_counts(),
                matrix: grid.matrix,
                layout: grid.layout,
            };
            serde_json::to_string_pretty(&report).context("Failed to serialize contrast grid")
        }
    }
}
