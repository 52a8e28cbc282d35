// ABOUTME: Pairwise contrast matrix over a palette.
// ABOUTME: Rows are backgrounds, columns are foregrounds; cells carry a suppression flag.

use crate::engine::ContrastResult;
use crate::palette::Palette;
use crate::tier::{Tier, TierSet};
use serde::Serialize;
use tracing::debug;

/// One matrix cell.
///
/// A suppressed cell is still fully computed; it is just not meant to be
/// displayed.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct ContrastCell {
    #[serde(flatten)]
    pub result: ContrastResult,
    pub suppressed: bool,
}

impl ContrastCell {
    pub fn is_visible(&self) -> bool {
        !self.suppressed
    }

    pub fn ratio(&self) -> f64 {
        self.result.ratio
    }

    pub fn tier(&self) -> Tier {
        self.result.tier
    }

    /// Ratio text to show, or `None` when the cell is suppressed.
    pub fn label(&self) -> Option<String> {
        self.is_visible().then(|| self.result.ratio_label())
    }
}

/// Square matrix of contrast cells, `palette.len()` on each side.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct ContrastMatrix {
    rows: Vec<Vec<ContrastCell>>,
}

/// Per-tier cell counts over the off-diagonal cells of a matrix.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct TierCounts {
    pub aaa: usize,
    pub aa: usize,
    pub aa_large: usize,
    pub fail: usize,
}

impl TierCounts {
    pub fn get(&self, tier: Tier) -> usize {
        match tier {
            Tier::Aaa => self.aaa,
            Tier::Aa => self.aa,
            Tier::AaLarge => self.aa_large,
            Tier::Fail => self.fail,
        }
    }

    fn bump(&mut self, tier: Tier) {
        match tier {
            Tier::Aaa => self.aaa += 1,
            Tier::Aa => self.aa += 1,
            Tier::AaLarge => self.aa_large += 1,
            Tier::Fail => self.fail += 1,
        }
    }

    pub fn total(&self) -> usize {
        self.aaa + self.aa + self.aa_large + self.fail
    }
}

/// Compute every (background, foreground) pair of `palette`.
///
/// Backgrounds drive the outer loop and foregrounds the inner one. A cell is
/// suppressed when it pairs a palette entry with itself (same index) or when
/// its tier is not in `visible_tiers`.
pub fn build_matrix(palette: &Palette, visible_tiers: &TierSet) -> ContrastMatrix {
    let rows: Vec<Vec<ContrastCell>> = palette
        .iter()
        .enumerate()
        .map(|(row, background)| {
            palette
                .iter()
                .enumerate()
                .map(|(col, foreground)| {
                    let result = ContrastResult::compute(background.color, foreground.color);
                    ContrastCell {
                        result,
                        suppressed: row == col || !visible_tiers.contains(result.tier),
                    }
                })
                .collect()
        })
        .collect();

    let matrix = ContrastMatrix { rows };
    debug!(
        colors = palette.len(),
        visible_tiers = %visible_tiers,
        visible_cells = matrix.visible_cells(),
        "built contrast matrix"
    );
    matrix
}

impl ContrastMatrix {
    /// Number of rows, which equals the palette length.
    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    pub fn rows(&self) -> &[Vec<ContrastCell>] {
        &self.rows
    }

    pub fn cell(&self, row: usize, col: usize) -> Option<&ContrastCell> {
        self.rows.get(row).and_then(|cells| cells.get(col))
    }

    pub fn visible_cells(&self) -> usize {
        self.rows
            .iter()
            .flatten()
            .filter(|cell| cell.is_visible())
            .count()
    }

    /// Tier histogram over every pair of distinct palette entries, whether
    /// or not the tier filter hid them.
    pub fn tier_counts(&self) -> TierCounts {
        let mut counts = TierCounts::default();
        for (row, cells) in self.rows.iter().enumerate() {
            for (col, cell) in cells.iter().enumerate() {
                if row != col {
                    counts.bump(cell.tier());
                }
            }
        }
        counts
    }
}
