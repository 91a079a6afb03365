//! Five card hand classification.
//!
//! Every ruleset has its own closed category enum and its own evaluator.
//! The evaluators are pure: same cards in, same category out, no matter
//! the order of the cards.
//!
//! # Examples
//!
//! ```
//! use rs_video_poker::core::Hand;
//! use rs_video_poker::eval::{
//!     DeucesBonusCategory, DeucesBonusEvaluator, Evaluator, StandardCategory, StandardEvaluator,
//! };
//!
//! let hand: Hand = "AS AD AC AH 3C".parse().unwrap();
//! assert_eq!(
//!     StandardCategory::FourAces234,
//!     StandardEvaluator.evaluate(hand.cards()).unwrap()
//! );
//!
//! let hand: Hand = "2C 2D 2H 2S AD".parse().unwrap();
//! assert_eq!(
//!     DeucesBonusCategory::FourDeucesWithAce,
//!     DeucesBonusEvaluator.evaluate(hand.cards()).unwrap()
//! );
//! ```
use std::fmt::{Debug, Display};
use std::hash::Hash;
use std::str::FromStr;

use crate::core::{Card, Hand, Value, VideoPokerError};

mod deuces;
mod deuces_bonus;
mod standard;
#[cfg(test)]
mod test_util;
mod wild;

pub use self::deuces::{DeucesCategory, DeucesEvaluator};
pub use self::deuces_bonus::{DeucesBonusCategory, DeucesBonusEvaluator};
pub use self::standard::{StandardCategory, StandardEvaluator};

/// A payout category of one ruleset.
///
/// Categories are declared strongest first, so the derived `Ord` follows
/// precedence with the best hand being the smallest.
pub trait Category:
    Copy + Eq + Ord + Hash + Debug + Display + serde::Serialize + Send + Sync + 'static
{
    /// Every category, in precedence order.
    fn all() -> &'static [Self];

    /// Dense index into `all()`.
    fn index(self) -> usize;

    /// Stable snake_case name used for paytable keys and reports.
    fn name(self) -> &'static str;

    /// Inverse of `name`.
    fn from_name(name: &str) -> Option<Self> {
        Self::all().iter().copied().find(|c| c.name() == name)
    }
}

/// Something that can classify a five card hand.
pub trait Evaluator {
    type Category: Category;

    /// Classify five cards. This is the hot path used by the search.
    fn classify(&self, cards: &[Card; 5]) -> Self::Category;

    /// Classify exactly five cards. Any other count fails with
    /// `InvalidHandSize`.
    fn evaluate(&self, cards: &[Card]) -> Result<Self::Category, VideoPokerError> {
        let cards: &[Card; 5] = cards
            .try_into()
            .map_err(|_| VideoPokerError::InvalidHandSize(cards.len()))?;
        Ok(self.classify(cards))
    }

    /// Classify a dealt hand.
    fn evaluate_hand(&self, hand: &Hand) -> Self::Category {
        self.classify(hand.as_array())
    }
}

/// Which game is being played. Callers pick the matching evaluator.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
#[cfg_attr(feature = "cli", derive(clap::ValueEnum))]
#[serde(rename_all = "snake_case")]
pub enum Ruleset {
    /// Jacks or better, no wild cards.
    Standard,
    /// Deuces wild.
    Deuces,
    /// Deuces wild bonus, with the split four deuce and five of a kind
    /// payouts.
    DeucesBonus,
}

impl Ruleset {
    pub fn name(self) -> &'static str {
        match self {
            Ruleset::Standard => "standard",
            Ruleset::Deuces => "deuces",
            Ruleset::DeucesBonus => "deuces_bonus",
        }
    }

    /// The category names a paytable for this ruleset can use.
    pub fn category_names(self) -> Vec<&'static str> {
        fn names<C: Category>() -> Vec<&'static str> {
            C::all().iter().map(|c| c.name()).collect()
        }
        match self {
            Ruleset::Standard => names::<StandardCategory>(),
            Ruleset::Deuces => names::<DeucesCategory>(),
            Ruleset::DeucesBonus => names::<DeucesBonusCategory>(),
        }
    }
}

impl Display for Ruleset {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Ruleset {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().replace('-', "_").as_str() {
            "standard" | "jacks_or_better" | "job" => Ok(Ruleset::Standard),
            "deuces" | "deuces_wild" => Ok(Ruleset::Deuces),
            "deuces_bonus" | "deuces_wild_bonus" => Ok(Ruleset::DeucesBonus),
            other => Err(format!("unknown ruleset {other:?}")),
        }
    }
}

/// Bit mask with one bit set per value.
const fn value_mask(values: [Value; 5]) -> u16 {
    let mut mask = 0;
    let mut i = 0;
    while i < values.len() {
        mask |= 1 << values[i] as u16;
        i += 1;
    }
    mask
}

/// Big ugly constant for all the straights. The wheel is first and the
/// royal (ten to ace) is last.
pub const STRAIGHTS: [u16; 10] = [
    // Wheel.
    value_mask([Value::Ace, Value::Two, Value::Three, Value::Four, Value::Five]),
    // "Normal" straights starting at two to six.
    value_mask([Value::Two, Value::Three, Value::Four, Value::Five, Value::Six]),
    // Three to Seven
    value_mask([Value::Three, Value::Four, Value::Five, Value::Six, Value::Seven]),
    // Four to Eight
    value_mask([Value::Four, Value::Five, Value::Six, Value::Seven, Value::Eight]),
    // Five to Nine
    value_mask([Value::Five, Value::Six, Value::Seven, Value::Eight, Value::Nine]),
    // Six to Ten
    value_mask([Value::Six, Value::Seven, Value::Eight, Value::Nine, Value::Ten]),
    // Seven to Jack.
    value_mask([Value::Seven, Value::Eight, Value::Nine, Value::Ten, Value::Jack]),
    // Eight to Queen
    value_mask([Value::Eight, Value::Nine, Value::Ten, Value::Jack, Value::Queen]),
    // Nine to king
    value_mask([Value::Nine, Value::Ten, Value::Jack, Value::Queen, Value::King]),
    // Royal straight
    ROYAL,
];

/// Ten through ace.
pub const ROYAL: u16 = value_mask([
    Value::Ten,
    Value::Jack,
    Value::Queen,
    Value::King,
    Value::Ace,
]);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_straights_have_five_values() {
        for s in STRAIGHTS {
            assert_eq!(5, s.count_ones());
        }
        assert_eq!(ROYAL, STRAIGHTS[9]);
    }

    #[test]
    fn test_ruleset_parse() {
        assert_eq!(Ok(Ruleset::Standard), "jacks-or-better".parse());
        assert_eq!(Ok(Ruleset::Deuces), "deuces".parse());
        assert_eq!(Ok(Ruleset::DeucesBonus), "Deuces_Wild_Bonus".parse());
        assert!("joker".parse::<Ruleset>().is_err());
    }

    #[test]
    fn test_category_names() {
        assert_eq!(14, Ruleset::Standard.category_names().len());
        assert_eq!(11, Ruleset::Deuces.category_names().len());
        assert_eq!(14, Ruleset::DeucesBonus.category_names().len());
        assert!(
            Ruleset::DeucesBonus
                .category_names()
                .contains(&"four_deuces_with_ace")
        );
    }

    fn check_names<C: Category>() {
        for (i, c) in C::all().iter().enumerate() {
            assert_eq!(i, c.index());
            assert_eq!(Some(*c), C::from_name(c.name()));
            assert_eq!(c.name(), c.to_string());
            // Serde uses the same names.
            assert_eq!(
                format!("\"{}\"", c.name()),
                serde_json::to_string(c).unwrap()
            );
        }
        // Precedence order.
        assert!(C::all().windows(2).all(|w| w[0] < w[1]));
        assert_eq!(None, C::from_name("not_a_category"));
    }

    #[test]
    fn test_category_names_round_trip() {
        check_names::<StandardCategory>();
        check_names::<DeucesCategory>();
        check_names::<DeucesBonusCategory>();
    }

    #[test]
    fn test_wrong_size() {
        let hand: Hand = "AS KS QS JS TS".parse().unwrap();
        assert!(matches!(
            StandardEvaluator.evaluate(&hand.cards()[..4]),
            Err(VideoPokerError::InvalidHandSize(4))
        ));
        assert!(matches!(
            DeucesEvaluator.evaluate(&[]),
            Err(VideoPokerError::InvalidHandSize(0))
        ));
        let six = [hand.cards(), &hand.cards()[..1]].concat();
        assert!(matches!(
            DeucesBonusEvaluator.evaluate(&six),
            Err(VideoPokerError::InvalidHandSize(6))
        ));
    }
}
