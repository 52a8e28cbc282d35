// ABOUTME: WCAG 2.x relative luminance and contrast ratio math.
// ABOUTME: Pure, infallible functions plus the ContrastResult they produce.

use crate::color::Color;
use crate::tier::{classify, Tier};
use serde::Serialize;

/// Channel values at or below this are on the linear segment of the sRGB curve.
const LINEAR_THRESHOLD: f64 = 0.03928;

const RED_WEIGHT: f64 = 0.2126;
const GREEN_WEIGHT: f64 = 0.7152;
const BLUE_WEIGHT: f64 = 0.0722;

/// Gamma-linearize one sRGB channel in [0, 1].
pub fn channel_luminance(channel: f64) -> f64 {
    if channel <= LINEAR_THRESHOLD {
        channel / 12.92
    } else {
        ((channel + 0.055) / 1.055).powf(2.4)
    }
}

/// Relative luminance of a color, in [0, 1].
///
/// `L = 0.2126 * R + 0.7152 * G + 0.0722 * B` over linearized channels.
pub fn relative_luminance(color: Color) -> f64 {
    RED_WEIGHT * channel_luminance(color.r())
        + GREEN_WEIGHT * channel_luminance(color.g())
        + BLUE_WEIGHT * channel_luminance(color.b())
}

/// Contrast ratio between two colors, truncated to one decimal place.
///
/// Symmetric in its arguments and always within [1.0, 21.0]. The ratio is
/// floored to tenths, never rounded up.
pub fn contrast_ratio(a: Color, b: Color) -> f64 {
    let la = relative_luminance(a);
    let lb = relative_luminance(b);
    let (bright, dark) = if la >= lb { (la, lb) } else { (lb, la) };
    let ratio = (bright + 0.05) / (dark + 0.05);
    (ratio * 10.0).floor() / 10.0
}

/// Ratio and tier for one background/foreground pair.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct ContrastResult {
    pub background: Color,
    pub foreground: Color,
    pub ratio: f64,
    pub tier: Tier,
}

impl ContrastResult {
    pub fn compute(background: Color, foreground: Color) -> Self {
        let ratio = contrast_ratio(background, foreground);
        Self {
            background,
            foreground,
            ratio,
            tier: classify(ratio),
        }
    }

    /// Ratio formatted with its single decimal, e.g. `"4.5"`.
    pub fn ratio_label(&self) -> String {
        format!("{:.1}", self.ratio)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn blue() -> Color {
        Color::new(0.247, 0.384, 0.875).unwrap()
    }

    #[test]
    fn test_channel_luminance_segments() {
        assert_eq!(channel_luminance(0.0), 0.0);
        assert_eq!(channel_luminance(1.0), 1.0);
        // Linear segment includes the threshold itself
        assert!((channel_luminance(0.03928) - 0.03928 / 12.92).abs() < 1e-15);
        let above = channel_luminance(0.5);
        assert!((above - ((0.5f64 + 0.055) / 1.055).powf(2.4)).abs() < 1e-15);
    }

    #[test]
    fn test_relative_luminance_extremes() {
        assert_eq!(relative_luminance(Color::BLACK), 0.0);
        assert!((relative_luminance(Color::WHITE) - 1.0).abs() < 1e-12);
    }

    #[test]
    fn test_relative_luminance_weights() {
        let red = Color::from_rgb8(255, 0, 0);
        let green = Color::from_rgb8(0, 255, 0);
        let blue = Color::from_rgb8(0, 0, 255);
        assert!((relative_luminance(red) - 0.2126).abs() < 1e-12);
        assert!((relative_luminance(green) - 0.7152).abs() < 1e-12);
        assert!((relative_luminance(blue) - 0.0722).abs() < 1e-12);
    }

    #[test]
    fn test_black_on_white_is_21() {
        assert_eq!(contrast_ratio(Color::BLACK, Color::WHITE), 21.0);
        assert_eq!(contrast_ratio(Color::WHITE, Color::BLACK), 21.0);
    }

    #[test]
    fn test_self_contrast_is_1() {
        assert_eq!(contrast_ratio(blue(), blue()), 1.0);
        assert_eq!(contrast_ratio(Color::WHITE, Color::WHITE), 1.0);
    }

    #[test]
    fn test_ratio_truncates_not_rounds() {
        // #767676 on white is 4.54..., #777777 is 4.47...
        let gray = Color::from_rgb8(0x76, 0x76, 0x76);
        assert_eq!(contrast_ratio(Color::WHITE, gray), 4.5);
        let lighter = Color::from_rgb8(0x77, 0x77, 0x77);
        assert_eq!(contrast_ratio(Color::WHITE, lighter), 4.4);
        // 50% gray is 3.97..., which rounding would report as 4.0
        let mid = Color::new(0.5, 0.5, 0.5).unwrap();
        assert_eq!(contrast_ratio(Color::WHITE, mid), 3.9);
    }

    #[test]
    fn test_blue_against_white_and_black() {
        assert_eq!(contrast_ratio(Color::WHITE, blue()), 5.2);
        assert_eq!(contrast_ratio(Color::BLACK, blue()), 4.0);
    }

    #[test]
    fn test_contrast_result_compute() {
        let result = ContrastResult::compute(Color::WHITE, Color::BLACK);
        assert_eq!(result.ratio, 21.0);
        assert_eq!(result.tier, Tier::Aaa);
        assert_eq!(result.ratio_label(), "21.0");

        let result = ContrastResult::compute(Color::BLACK, blue());
        assert_eq!(result.tier, Tier::AaLarge);
        assert_eq!(result.ratio_label(), "4.0");
    }

    #[test]
    fn test_contrast_result_is_idempotent() {
        let first = ContrastResult::compute(blue(), Color::WHITE);
        let second = ContrastResult::compute(blue(), Color::WHITE);
        assert_eq!(first, second);
    }
}
