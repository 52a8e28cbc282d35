// ABOUTME: WCAG pass/fail tiers and the threshold ladder that assigns them.
// ABOUTME: Also holds TierSet, the caller-supplied filter of tiers to display.

use crate::color::Color;
use crate::error::{ContrastError, Result};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Classification bucket for a contrast ratio.
///
/// Variants are ordered from the strictest pass to fail, so `Tier::Aaa <
/// Tier::Fail` and a higher ratio never yields a greater tier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Tier {
    Aaa,
    Aa,
    AaLarge,
    Fail,
}

impl Tier {
    /// Every tier in ladder order.
    pub const ALL: [Tier; 4] = [Tier::Aaa, Tier::Aa, Tier::AaLarge, Tier::Fail];

    pub fn id(&self) -> &'static str {
        match self {
            Tier::Aaa => "aaa",
            Tier::Aa => "aa",
            Tier::AaLarge => "aa-large",
            Tier::Fail => "fail",
        }
    }

    pub fn description(&self) -> &'static str {
        match self {
            Tier::Aaa => "pass, AAA (7+)",
            Tier::Aa => "pass, AA (4.5+)",
            Tier::AaLarge => "pass, Large Text Only (3+)",
            Tier::Fail => "Does Not Pass",
        }
    }

    /// Short text printed on the badge.
    pub fn badge_label(&self) -> &'static str {
        match self {
            Tier::Aaa => "AAA",
            Tier::Aa => "AA",
            Tier::AaLarge => "AA-LARGE",
            Tier::Fail => "FAIL",
        }
    }

    /// Fill color of the badge.
    pub fn badge_color(&self) -> Color {
        match self {
            Tier::Aaa => Color::from_rgb8(0x03, 0x89, 0x29),
            Tier::Aa => Color::from_rgb8(0x3f, 0x62, 0xdf),
            Tier::AaLarge => Color::from_rgb8(0xe2, 0x91, 0x17),
            Tier::Fail => Color::from_rgb8(0xd2, 0x3e, 0x3e),
        }
    }

    /// Lowest ratio that lands in this tier.
    pub fn minimum_ratio(&self) -> f64 {
        match self {
            Tier::Aaa => 7.0,
            Tier::Aa => 4.5,
            Tier::AaLarge => 3.0,
            Tier::Fail => 0.0,
        }
    }

    fn bit(self) -> u8 {
        1 << (self as u8)
    }
}

/// Map a contrast ratio onto the tier ladder. First match wins, lower
/// bounds are inclusive.
pub fn classify(ratio: f64) -> Tier {
    if ratio >= 7.0 {
        Tier::Aaa
    } else if ratio >= 4.5 {
        Tier::Aa
    } else if ratio >= 3.0 {
        Tier::AaLarge
    } else {
        Tier::Fail
    }
}

impl fmt::Display for Tier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.id())
    }
}

impl FromStr for Tier {
    type Err = ContrastError;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "aaa" => Ok(Tier::Aaa),
            "aa" => Ok(Tier::Aa),
            "aa-large" | "aa18" => Ok(Tier::AaLarge),
            "fail" | "dnp" => Ok(Tier::Fail),
            _ => Err(ContrastError::UnknownTier(s.to_string())),
        }
    }
}

/// A set of tiers the consumer wants displayed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "Vec<Tier>", into = "Vec<Tier>")]
pub struct TierSet {
    bits: u8,
}

impl TierSet {
    pub fn all() -> Self {
        Tier::ALL.into_iter().collect()
    }

    pub fn empty() -> Self {
        Self { bits: 0 }
    }

    pub fn insert(&mut self, tier: Tier) {
        self.bits |= tier.bit();
    }

    pub fn contains(&self, tier: Tier) -> bool {
        self.bits & tier.bit() != 0
    }

    pub fn is_empty(&self) -> bool {
        self.bits == 0
    }

    /// Members in ladder order.
    pub fn iter(&self) -> impl Iterator<Item = Tier> + '_ {
        Tier::ALL.into_iter().filter(|tier| self.contains(*tier))
    }

    /// Parse a comma-separated list such as `aaa,aa`.
    pub fn parse_list(input: &str) -> Result<Self> {
        input
            .split(',')
            .map(str::trim)
            .filter(|part| !part.is_empty())
            .map(Tier::from_str)
            .collect()
    }
}

impl Default for TierSet {
    fn default() -> Self {
        Self::all()
    }
}

impl FromIterator<Tier> for TierSet {
    fn from_iter<I: IntoIterator<Item = Tier>>(iter: I) -> Self {
        let mut set = TierSet::empty();
        for tier in iter {
            set.insert(tier);
        }
        set
    }
}

impl From<Vec<Tier>> for TierSet {
    fn from(tiers: Vec<Tier>) -> Self {
        tiers.into_iter().collect()
    }
}

impl From<TierSet> for Vec<Tier> {
    fn from(set: TierSet) -> Self {
        set.iter().collect()
    }
}

impl fmt::Display for TierSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let ids: Vec<&str> = self.iter().map(|tier| tier.id()).collect();
        f.write_str(&ids.join(","))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_classify_boundaries() {
        assert_eq!(classify(21.0), Tier::Aaa);
        assert_eq!(classify(7.0), Tier::Aaa);
        assert_eq!(classify(6.99), Tier::Aa);
        assert_eq!(classify(4.5), Tier::Aa);
        assert_eq!(classify(4.49), Tier::AaLarge);
        assert_eq!(classify(3.0), Tier::AaLarge);
        assert_eq!(classify(2.99), Tier::Fail);
        assert_eq!(classify(1.0), Tier::Fail);
    }

    #[test]
    fn test_classify_is_total() {
        assert_eq!(classify(-5.0), Tier::Fail);
        assert_eq!(classify(f64::NAN), Tier::Fail);
        assert_eq!(classify(f64::INFINITY), Tier::Aaa);
    }

    #[test]
    fn test_minimum_ratio_classifies_into_own_tier() {
        for tier in Tier::ALL {
            assert_eq!(classify(tier.minimum_ratio()), tier);
        }
    }

    #[test]
    fn test_tier_parse_ids_and_aliases() {
        assert_eq!("aaa".parse::<Tier>().unwrap(), Tier::Aaa);
        assert_eq!("AA".parse::<Tier>().unwrap(), Tier::Aa);
        assert_eq!("aa-large".parse::<Tier>().unwrap(), Tier::AaLarge);
        assert_eq!("aa18".parse::<Tier>().unwrap(), Tier::AaLarge);
        assert_eq!("fail".parse::<Tier>().unwrap(), Tier::Fail);
        assert_eq!("dnp".parse::<Tier>().unwrap(), Tier::Fail);
        assert!(matches!(
            "gold".parse::<Tier>(),
            Err(ContrastError::UnknownTier(_))
        ));
    }

    #[test]
    fn test_tier_display_round_trips() {
        for tier in Tier::ALL {
            assert_eq!(tier.to_string().parse::<Tier>().unwrap(), tier);
        }
    }

    #[test]
    fn test_tier_serde_ids() {
        assert_eq!(serde_json::to_string(&Tier::AaLarge).unwrap(), "\"aa-large\"");
        let tier: Tier = serde_json::from_str("\"fail\"").unwrap();
        assert_eq!(tier, Tier::Fail);
    }

    #[test]
    fn test_badge_colors_match_legend() {
        assert_eq!(Tier::Aaa.badge_color().to_hex(), "038929");
        assert_eq!(Tier::Aa.badge_color().to_hex(), "3f62df");
        assert_eq!(Tier::AaLarge.badge_color().to_hex(), "e29117");
        assert_eq!(Tier::Fail.badge_color().to_hex(), "d23e3e");
    }

    #[test]
    fn test_tier_set_membership() {
        let mut set = TierSet::empty();
        assert!(set.is_empty());
        set.insert(Tier::Aaa);
        assert!(set.contains(Tier::Aaa));
        assert!(!set.contains(Tier::Aa));

        let all = TierSet::all();
        assert!(Tier::ALL.iter().all(|tier| all.contains(*tier)));
        assert_eq!(TierSet::default(), all);
    }

    #[test]
    fn test_tier_set_parse_list() {
        let set = TierSet::parse_list("aaa, aa18").unwrap();
        assert_eq!(set.iter().collect::<Vec<_>>(), vec![Tier::Aaa, Tier::AaLarge]);
        assert_eq!(set.to_string(), "aaa,aa-large");

        assert!(TierSet::parse_list("").unwrap().is_empty());
        assert!(TierSet::parse_list("aaa,bogus").is_err());
    }

    #[test]
    fn test_tier_set_serde_as_list() {
        let set: TierSet = serde_json::from_str(r#"["fail", "aaa"]"#).unwrap();
        assert_eq!(serde_json::to_string(&set).unwrap(), r#"["aaa","fail"]"#);
    }
}
