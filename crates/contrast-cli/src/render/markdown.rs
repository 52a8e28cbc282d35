// ABOUTME: Markdown table renderer for contrast grids.
// ABOUTME: One row per background, one column per text color, legend as a bullet list.

use super::Grid;
use std::fmt::Write;

fn escape_cell(text: &str) -> String {
    text.replace('|', "\\|")
}

pub(super) fn render(grid: &Grid<'_>) -> String {
    let layout = grid.layout;
    let mut out = String::new();

    out.push_str("| Background \\ Text |");
    for header in &layout.header {
        let _ = write!(out, " {} `{}` |", escape_cell(&header.name), header.hex);
    }
    out.push('\n');

    out.push_str("|---|");
    for _ in &layout.header {
        out.push_str("---|");
    }
    out.push('\n');

    for (row, header) in layout.header.iter().enumerate() {
        let _ = write!(out, "| {} `{}` |", escape_cell(&header.name), header.hex);
        for column in &layout.columns {
            let text = column
                .tiles
                .get(row)
                .and_then(|tile| {
                    let ratio = tile.ratio_label.as_ref()?;
                    Some(format!("{ratio} {}", tile.badge?.badge_label()))
                })
                .unwrap_or_default();
            let _ = write!(out, " {text} |");
        }
        out.push('\n');
    }

    out.push('\n');
    for entry in &layout.legend {
        let _ = writeln!(out, "- **{}**: {}", entry.label, entry.description);
    }

    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::render::tests::sample_palette;
    use contrast_core::{build_matrix, Color, GridLayout, Palette, TierSet};

    fn render_palette(palette: &Palette) -> String {
        let visible = TierSet::all();
        let matrix = build_matrix(palette, &visible);
        let layout = GridLayout::build(palette, &matrix);
        render(&Grid {
            palette,
            visible_tiers: visible,
            matrix: &matrix,
            layout: &layout,
        })
    }

    #[test]
    fn test_markdown_table() {
        let output = render_palette(&sample_palette());
        let lines: Vec<&str> = output.lines().collect();

        assert_eq!(
            lines[0],
            "| Background \\ Text | White `#ffffff` | Black `#000000` | Blue `#3f62df` |"
        );
        assert_eq!(lines[1], "|---|---|---|---|");
        assert_eq!(
            lines[2],
            "| White `#ffffff` |  | 21.0 AAA | 5.2 AA |"
        );
        assert!(output.contains("- **FAIL**: Does Not Pass"));
    }

    #[test]
    fn test_pipes_in_names_are_escaped() {
        let mut palette = Palette::new();
        palette.push("Ink|Dark", Color::BLACK);
        let output = render_palette(&palette);
        assert!(output.contains("Ink\\|Dark"));
    }
}
