use std::fmt;

use super::wild::WildHand;
use super::{Category, Evaluator};
use crate::core::{Card, Value};

/// Deuces wild bonus categories, strongest first.
///
/// Four deuces pay more with an ace kicker and five of a kind is split in
/// three tiers by value.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, serde::Serialize, serde::Deserialize,
)]
#[serde(rename_all = "snake_case")]
pub enum DeucesBonusCategory {
    NaturalRoyalFlush,
    FourDeucesWithAce,
    FourDeuces,
    WildRoyalFlush,
    FiveAces,
    /// Five threes, fours or fives.
    #[serde(rename = "five_345")]
    Five345,
    /// Five sixes through kings.
    #[serde(rename = "five_6_to_k")]
    Five6ToK,
    StraightFlush,
    FourOfAKind,
    FullHouse,
    Flush,
    Straight,
    ThreeOfAKind,
    Nothing,
}

const DEUCES_BONUS_CATEGORIES: [DeucesBonusCategory; 14] = [
    DeucesBonusCategory::NaturalRoyalFlush,
    DeucesBonusCategory::FourDeucesWithAce,
    DeucesBonusCategory::FourDeuces,
    DeucesBonusCategory::WildRoyalFlush,
    DeucesBonusCategory::FiveAces,
    DeucesBonusCategory::Five345,
    DeucesBonusCategory::Five6ToK,
    DeucesBonusCategory::StraightFlush,
    DeucesBonusCategory::FourOfAKind,
    DeucesBonusCategory::FullHouse,
    DeucesBonusCategory::Flush,
    DeucesBonusCategory::Straight,
    DeucesBonusCategory::ThreeOfAKind,
    DeucesBonusCategory::Nothing,
];

impl Category for DeucesBonusCategory {
    fn all() -> &'static [Self] {
        &DEUCES_BONUS_CATEGORIES
    }

    fn index(self) -> usize {
        self as usize
    }

    fn name(self) -> &'static str {
        match self {
            DeucesBonusCategory::NaturalRoyalFlush => "natural_royal_flush",
            DeucesBonusCategory::FourDeucesWithAce => "four_deuces_with_ace",
            DeucesBonusCategory::FourDeuces => "four_deuces",
            DeucesBonusCategory::WildRoyalFlush => "wild_royal_flush",
            DeucesBonusCategory::FiveAces => "five_aces",
            DeucesBonusCategory::Five345 => "five_345",
            DeucesBonusCategory::Five6ToK => "five_6_to_k",
            DeucesBonusCategory::StraightFlush => "straight_flush",
            DeucesBonusCategory::FourOfAKind => "four_of_a_kind",
            DeucesBonusCategory::FullHouse => "full_house",
            DeucesBonusCategory::Flush => "flush",
            DeucesBonusCategory::Straight => "straight",
            DeucesBonusCategory::ThreeOfAKind => "three_of_a_kind",
            DeucesBonusCategory::Nothing => "nothing",
        }
    }
}

impl DeucesBonusCategory {
    /// A hand that needs no draw to keep its tier. Anything better than
    /// three of a kind.
    pub fn is_made(self) -> bool {
        self < DeucesBonusCategory::ThreeOfAKind
    }
}

impl fmt::Display for DeucesBonusCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Deuces wild bonus evaluator.
#[derive(Debug, Clone, Copy, Default)]
pub struct DeucesBonusEvaluator;

const FIVE_345: [Value; 3] = [Value::Three, Value::Four, Value::Five];
const FIVE_6_TO_K: [Value; 8] = [
    Value::Six,
    Value::Seven,
    Value::Eight,
    Value::Nine,
    Value::Ten,
    Value::Jack,
    Value::Queen,
    Value::King,
];

/// The best five of a kind tier. Tiers are checked in payout order, aces
/// then 3-5 then 6-K.
fn five_of_a_kind(hand: &WildHand) -> Option<DeucesBonusCategory> {
    if hand.wilds == 0 {
        return None;
    }
    if hand.can_make_five(Value::Ace) {
        Some(DeucesBonusCategory::FiveAces)
    } else if FIVE_345.iter().any(|v| hand.can_make_five(*v)) {
        Some(DeucesBonusCategory::Five345)
    } else if FIVE_6_TO_K.iter().any(|v| hand.can_make_five(*v)) {
        Some(DeucesBonusCategory::Five6ToK)
    } else {
        None
    }
}

impl Evaluator for DeucesBonusEvaluator {
    type Category = DeucesBonusCategory;

    fn classify(&self, cards: &[Card; 5]) -> DeucesBonusCategory {
        let hand = WildHand::new(cards);

        if hand.is_natural_royal() {
            return DeucesBonusCategory::NaturalRoyalFlush;
        }
        if hand.wilds == 4 {
            return match hand.four_deuce_kicker() {
                Some(Value::Ace) => DeucesBonusCategory::FourDeucesWithAce,
                _ => DeucesBonusCategory::FourDeuces,
            };
        }
        if hand.wilds > 0 && hand.is_suited() && hand.can_make_royal() {
            return DeucesBonusCategory::WildRoyalFlush;
        }
        // `can_make_five(Ace)` covers five wilds with no naturals at all.
        if let Some(five) = five_of_a_kind(&hand) {
            return five;
        }

        if hand.is_suited() && hand.can_make_any_straight() {
            DeucesBonusCategory::StraightFlush
        } else if hand.can_make_of_a_kind(4) {
            DeucesBonusCategory::FourOfAKind
        } else if hand.can_make_full_house() {
            DeucesBonusCategory::FullHouse
        } else if hand.is_suited() {
            DeucesBonusCategory::Flush
        } else if hand.can_make_any_straight() {
            DeucesBonusCategory::Straight
        } else if hand.can_make_of_a_kind(3) {
            DeucesBonusCategory::ThreeOfAKind
        } else {
            DeucesBonusCategory::Nothing
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{Hand, Suit};
    use crate::eval::{DeucesCategory, DeucesEvaluator};
    use crate::eval::test_util::assert_order_free;

    fn eval(s: &str) -> DeucesBonusCategory {
        let hand: Hand = s.parse().unwrap();
        DeucesBonusEvaluator.evaluate(hand.cards()).unwrap()
    }

    #[test]
    fn test_four_deuces_kicker() {
        assert_eq!(DeucesBonusCategory::FourDeucesWithAce, eval("2C 2D 2H 2S AD"));
        assert_eq!(DeucesBonusCategory::FourDeucesWithAce, eval("AD 2C 2D 2H 2S"));
        assert_eq!(DeucesBonusCategory::FourDeuces, eval("2C 2D 2H 2S KD"));
    }

    #[test]
    fn test_royals() {
        assert_eq!(DeucesBonusCategory::NaturalRoyalFlush, eval("TS JS QS KS AS"));
        assert_eq!(DeucesBonusCategory::WildRoyalFlush, eval("2H JS QS KS AS"));
    }

    #[test]
    fn test_five_tiers() {
        assert_eq!(DeucesBonusCategory::FiveAces, eval("2C AD AH AS AC"));
        assert_eq!(DeucesBonusCategory::FiveAces, eval("2C 2D 2H AS AC"));
        assert_eq!(DeucesBonusCategory::Five345, eval("2C 3D 3H 3S 3C"));
        assert_eq!(DeucesBonusCategory::Five345, eval("2C 2D 2H 5S 5C"));
        assert_eq!(DeucesBonusCategory::Five6ToK, eval("2C 2D KH KS KC"));
        assert_eq!(DeucesBonusCategory::Five6ToK, eval("2C 2D 2H 6S 6C"));
    }

    #[test]
    fn test_five_wilds_are_aces() {
        let cards = [Card::new(Value::Two, Suit::Club); 5];
        // Suited with no naturals so the royal wins first.
        assert_eq!(
            DeucesBonusCategory::WildRoyalFlush,
            DeucesBonusEvaluator.classify(&cards)
        );
        let w = WildHand::new(&cards);
        assert_eq!(Some(DeucesBonusCategory::FiveAces), five_of_a_kind(&w));
    }

    #[test]
    fn test_lower_hands() {
        assert_eq!(DeucesBonusCategory::StraightFlush, eval("2C 5H 6H 7H 8H"));
        assert_eq!(DeucesBonusCategory::FourOfAKind, eval("2C 9D 9H 9S KC"));
        assert_eq!(DeucesBonusCategory::FullHouse, eval("2C 9D 9H KS KC"));
        assert_eq!(DeucesBonusCategory::Flush, eval("2C 4H 9H JH KH"));
        assert_eq!(DeucesBonusCategory::Straight, eval("2C 4H 5D 6H 7S"));
        assert_eq!(DeucesBonusCategory::ThreeOfAKind, eval("TD TC TH 7C QC"));
        assert_eq!(DeucesBonusCategory::Nothing, eval("AD 3H 8S QC 7C"));
    }

    #[test]
    fn test_paired_natural_is_no_straight() {
        assert_eq!(DeucesBonusCategory::ThreeOfAKind, eval("2C 5D 5H 6S 7C"));
        assert_eq!(DeucesBonusCategory::Straight, eval("2C 5D 8H 6S 7C"));
    }

    #[test]
    fn test_permutation_invariant() {
        assert_order_free(
            &DeucesBonusEvaluator,
            &[
                "TS JS QS KS AS",
                "AD 2C 2D 2H 2S",
                "2C 2D 2H 2S KD",
                "2H JS QS KS AS",
                "2C AD AH AS AC",
                "2C 2D 2H 5S 5C",
                "2C 2D KH KS KC",
                "2C 9D 9H KS KC",
                "2C 5D 5H 6S 7C",
                "TD TC TH 7C QC",
            ],
        );
    }

    #[test]
    fn test_made() {
        assert!(DeucesBonusCategory::Straight.is_made());
        assert!(DeucesBonusCategory::FourDeuces.is_made());
        assert!(!DeucesBonusCategory::ThreeOfAKind.is_made());
        assert!(!DeucesBonusCategory::Nothing.is_made());
    }

    #[test]
    fn test_agrees_with_deuces_below_five_of_a_kind() {
        // Apart from the split tiers the two wild rulesets classify the
        // same way.
        let hands = [
            "2C 5H 6H 7H 8H",
            "2C 9D 9H 9S KC",
            "2C 9D 9H KS KC",
            "2C 4H 9H JH KH",
            "2C 4H 5D 6H 7S",
            "2C 2D 4H KS 9C",
            "AD 3H 8S QC 7C",
        ];
        for h in hands {
            let hand: Hand = h.parse().unwrap();
            let bonus = DeucesBonusEvaluator.evaluate_hand(&hand);
            let plain = DeucesEvaluator.evaluate_hand(&hand);
            assert_eq!(bonus.name(), plain.name());
        }
        assert_eq!(
            DeucesCategory::FiveOfAKind,
            DeucesEvaluator.evaluate_hand(&"2C 2D 2H 6S 6C".parse().unwrap())
        );
    }
}
