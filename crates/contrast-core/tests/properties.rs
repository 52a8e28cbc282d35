// ABOUTME: Property tests for the contrast engine using proptest.
// ABOUTME: Symmetry, bounds, self-pairs, classify monotonicity and matrix shape.

use contrast_core::{build_matrix, classify, contrast_ratio, Color, Palette, Tier, TierSet};
use proptest::prelude::*;

fn unit() -> impl Strategy<Value = f64> {
    0.0f64..=1.0
}

fn color() -> impl Strategy<Value = Color> {
    (unit(), unit(), unit()).prop_map(|(r, g, b)| Color::new(r, g, b).unwrap())
}

fn tier() -> impl Strategy<Value = Tier> {
    prop_oneof![
        Just(Tier::Aaa),
        Just(Tier::Aa),
        Just(Tier::AaLarge),
        Just(Tier::Fail),
    ]
}

proptest! {
    #[test]
    fn contrast_is_symmetric(a in color(), b in color()) {
        prop_assert_eq!(contrast_ratio(a, b), contrast_ratio(b, a));
    }

    #[test]
    fn contrast_is_bounded(a in color(), b in color()) {
        let ratio = contrast_ratio(a, b);
        prop_assert!((1.0..=21.0).contains(&ratio), "ratio {} out of bounds", ratio);
    }

    #[test]
    fn self_contrast_fails(a in color()) {
        let ratio = contrast_ratio(a, a);
        prop_assert_eq!(ratio, 1.0);
        prop_assert_eq!(classify(ratio), Tier::Fail);
    }

    #[test]
    fn contrast_has_one_decimal(a in color(), b in color()) {
        let tenths = contrast_ratio(a, b) * 10.0;
        prop_assert!((tenths - tenths.round()).abs() < 1e-9);
    }

    #[test]
    fn classify_is_monotonic(x in 0.0f64..=25.0, y in 0.0f64..=25.0) {
        let (low, high) = if x <= y { (x, y) } else { (y, x) };
        // Tiers are ordered strictest first, so a higher ratio never sorts later
        prop_assert!(classify(high) <= classify(low));
    }

    #[test]
    fn matrix_is_square_with_suppressed_diagonal(
        colors in prop::collection::vec(color(), 0..8),
        visible in prop::collection::vec(tier(), 0..4),
    ) {
        let palette: Palette = colors
            .iter()
            .enumerate()
            .map(|(i, c)| contrast_core::NamedColor::new(format!("c{i}"), *c))
            .collect();
        let visible: TierSet = visible.into_iter().collect();
        let matrix = build_matrix(&palette, &visible);

        prop_assert_eq!(matrix.len(), colors.len());
        for (row, cells) in matrix.rows().iter().enumerate() {
            prop_assert_eq!(cells.len(), colors.len());
            prop_assert!(cells[row].suppressed);
            for cell in cells {
                if !visible.contains(cell.tier()) {
                    prop_assert!(cell.suppressed);
                }
            }
        }
    }
}
