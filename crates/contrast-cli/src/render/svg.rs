// ABOUTME: SVG renderer that draws the contrast grid as a canvas of tiles.
// ABOUTME: Geometry comes from TileStyle: legend on top, header column, then one column per text color.

use contrast_core::{contrast_ratio, Color, GridLayout, GridTile, LegendEntry, TileStyle};
use std::fmt::Write;

const FONT: &str = "Roboto, Helvetica, Arial, sans-serif";
const FONT_SIZE: f64 = 12.0;
const BADGE_FONT_SIZE: f64 = 10.0;
const LEGEND_ROW: f64 = 32.0;
const MARGIN: f64 = 10.0;

fn escape_xml(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&apos;"),
            _ => escaped.push(c),
        }
    }
    escaped
}

/// Badge width grows with the label; the style width is the minimum.
fn badge_width(label: &str) -> f64 {
    let style = TileStyle::BADGE;
    let text_width = label.chars().count() as f64 * BADGE_FONT_SIZE * 0.62;
    (text_width + style.padding * 2.0).max(style.width)
}

fn rect(out: &mut String, x: f64, y: f64, w: f64, h: f64, fill: Color, radius: f64) {
    let _ = writeln!(
        out,
        r#"  <rect x="{x}" y="{y}" width="{w}" height="{h}" rx="{radius}" fill="{fill}"/>"#
    );
}

fn text(out: &mut String, x: f64, y: f64, size: f64, fill: Color, anchor: &str, body: &str) {
    let _ = writeln!(
        out,
        r#"  <text x="{x}" y="{y}" font-size="{size}" fill="{fill}" text-anchor="{anchor}">{}</text>"#,
        escape_xml(body)
    );
}

fn badge(out: &mut String, x: f64, y: f64, entry_label: &str, fill: Color) -> f64 {
    let style = TileStyle::BADGE;
    let width = badge_width(entry_label);
    rect(out, x, y, width, style.height, fill, style.corner_radius);
    text(
        out,
        x + width / 2.0,
        y + style.height / 2.0 + BADGE_FONT_SIZE / 2.0 - 1.0,
        BADGE_FONT_SIZE,
        Color::WHITE,
        "middle",
        entry_label,
    );
    width
}

fn legend(out: &mut String, entries: &[LegendEntry]) {
    for (i, entry) in entries.iter().enumerate() {
        let y = MARGIN + i as f64 * LEGEND_ROW;
        let width = badge(out, MARGIN, y, entry.label, entry.color);
        text(
            out,
            MARGIN + width + MARGIN,
            y + TileStyle::BADGE.height - 5.0,
            FONT_SIZE,
            Color::BLACK,
            "start",
            entry.description,
        );
    }
}

fn tile(out: &mut String, x: f64, y: f64, grid_tile: &GridTile) {
    let style = TileStyle::TILE;
    rect(out, x, y, style.width, style.height, grid_tile.background, 0.0);

    if let Some(sample) = &grid_tile.sample_text {
        text(
            out,
            x + style.padding,
            y + style.padding + FONT_SIZE,
            FONT_SIZE,
            grid_tile.text_color,
            "start",
            sample,
        );
    }

    if let (Some(tier), Some(ratio)) = (grid_tile.badge, &grid_tile.ratio_label) {
        let footer_y = y + style.height - style.padding - TileStyle::BADGE.height;
        badge(out, x + style.padding, footer_y, tier.badge_label(), tier.badge_color());
        text(
            out,
            x + style.width - style.padding,
            footer_y + TileStyle::BADGE.height - 5.0,
            BADGE_FONT_SIZE,
            grid_tile.text_color,
            "end",
            ratio,
        );
    }
}

pub(super) fn render(layout: &GridLayout) -> String {
    let header = TileStyle::HEADER;
    let cell = TileStyle::TILE;
    let gap = TileStyle::GAP;

    let legend_height = MARGIN * 2.0 + layout.legend.len() as f64 * LEGEND_ROW;
    let rows = layout.header.len() as f64;
    let grid_height = TileStyle::SWATCH.height + rows * (cell.height + gap);
    let grid_width = header.width + layout.columns.len() as f64 * (cell.width + gap);
    let width = (grid_width + MARGIN * 2.0).max(header.width * 2.0);
    let height = legend_height + grid_height + MARGIN;

    let mut out = String::new();
    let _ = writeln!(
        out,
        r#"<svg xmlns="http://www.w3.org/2000/svg" width="{width}" height="{height}" viewBox="0 0 {width} {height}" font-family="{FONT}">"#
    );
    rect(&mut out, 0.0, 0.0, width, height, Color::WHITE, 0.0);

    legend(&mut out, &layout.legend);

    let top = legend_height;
    let swatch_height = TileStyle::SWATCH.height;

    for (row, header_tile) in layout.header.iter().enumerate() {
        let y = top + swatch_height + gap + row as f64 * (cell.height + gap);
        rect(&mut out, MARGIN, y, header.width, header.height, header_tile.fill, 0.0);
        let ink = readable_ink(header_tile.fill);
        text(
            &mut out,
            MARGIN + header.padding,
            y + header.padding + FONT_SIZE,
            FONT_SIZE,
            ink,
            "start",
            &header_tile.name,
        );
        text(
            &mut out,
            MARGIN + header.padding,
            y + header.padding * 2.0 + FONT_SIZE * 2.0,
            FONT_SIZE,
            ink,
            "start",
            &header_tile.hex,
        );
    }

    for (col, column) in layout.columns.iter().enumerate() {
        let x = MARGIN + header.width + gap + col as f64 * (cell.width + gap);
        let swatch = TileStyle::SWATCH;
        rect(&mut out, x, top, swatch.width, swatch.height, column.swatch.fill, 0.0);
        text(
            &mut out,
            x + swatch.padding,
            top + swatch.padding + FONT_SIZE,
            FONT_SIZE,
            readable_ink(column.swatch.fill),
            "start",
            &column.swatch.hex,
        );

        for (row, grid_tile) in column.tiles.iter().enumerate() {
            let y = top + swatch_height + gap + row as f64 * (cell.height + gap);
            tile(&mut out, x, y, grid_tile);
        }
    }

    out.push_str("</svg>\n");
    out
}

/// Black or white, whichever contrasts more with `fill`.
fn readable_ink(fill: Color) -> Color {
    if contrast_ratio(fill, Color::BLACK) >= contrast_ratio(fill, Color::WHITE) {
        Color::BLACK
    } else {
        Color::WHITE
    }
}
