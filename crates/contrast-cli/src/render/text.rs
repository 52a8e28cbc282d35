// ABOUTME: Plain-text table renderer with optional ANSI truecolor swatches.
// ABOUTME: Rows are backgrounds, columns are text colors, followed by the legend.

use super::{Grid, RenderOptions};
use contrast_core::{Color, GridTile};
use crossterm::style::{Color as TermColor, Stylize};
use std::fmt::Write;

const CELL_WIDTH: usize = 16;
const CORNER_LABEL: &str = "background \\ text";

fn term_color(color: Color) -> TermColor {
    let (r, g, b) = color.to_rgb8();
    TermColor::Rgb { r, g, b }
}

fn tile_text(tile: &GridTile) -> String {
    match (&tile.ratio_label, tile.badge) {
        (Some(ratio), Some(tier)) => format!("{ratio} {}", tier.badge_label()),
        _ => String::new(),
    }
}

fn paint(text: &str, foreground: Color, background: Color, options: RenderOptions) -> String {
    let padded = format!(" {text:<width$}", width = CELL_WIDTH - 1);
    if options.color {
        padded
            .with(term_color(foreground))
            .on(term_color(background))
            .to_string()
    } else {
        padded
    }
}

pub(super) fn render(grid: &Grid<'_>, options: RenderOptions) -> String {
    let layout = grid.layout;
    let mut out = String::new();

    let name_width = layout
        .header
        .iter()
        .map(|h| h.name.chars().count() + h.hex.len() + 1)
        .max()
        .unwrap_or(0)
        .max(CORNER_LABEL.len());

    let _ = write!(out, "{CORNER_LABEL:<name_width$}");
    for header in &layout.header {
        let _ = write!(out, " {:<width$}", header.name, width = CELL_WIDTH - 1);
    }
    out.push('\n');

    for (row, header) in layout.header.iter().enumerate() {
        let label = format!("{} {}", header.name, header.hex);
        let _ = write!(out, "{label:<name_width$}");
        for column in &layout.columns {
            if let Some(tile) = column.tiles.get(row) {
                out.push_str(&paint(
                    &tile_text(tile),
                    tile.text_color,
                    tile.background,
                    options,
                ));
            }
        }
        out.push('\n');
    }

    out.push('\n');
    for entry in &layout.legend {
        let badge = format!(" {} ", entry.label);
        let badge = if options.color {
            badge.with(TermColor::White).on(term_color(entry.color)).to_string()
        } else {
            badge
        };
        let _ = writeln!(out, "{badge} {}", entry.description);
    }

    let counts = grid.matrix.tier_counts();
    let _ = writeln!(
        out,
        "\n{} pairs: {} AAA, {} AA, {} large text only, {} failing (showing {})",
        counts.total(),
        counts.aaa,
        counts.aa,
        counts.aa_large,
        counts.fail,
        grid.visible_tiers,
    );

    out
}
