use std::fmt;

use super::{Category, Evaluator, ROYAL, STRAIGHTS};
use crate::core::{Card, Value};

/// Jacks or better categories, strongest first.
///
/// The four of a kind tiers are split the way bonus poker paytables
/// split them: quad aces and quad 2s-4s pay extra, more again with a low
/// kicker.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, serde::Serialize, serde::Deserialize,
)]
#[serde(rename_all = "snake_case")]
pub enum StandardCategory {
    RoyalFlush,
    StraightFlush,
    /// Four aces with a 2, 3 or 4 kicker.
    #[serde(rename = "four_aces_234")]
    FourAces234,
    /// Four 2s, 3s or 4s with an A, 2, 3 or 4 kicker.
    FourLowAce,
    FourAces,
    /// Four 2s, 3s or 4s.
    #[serde(rename = "four_234")]
    Four234,
    /// Four fives through kings.
    FourOfAKind,
    FullHouse,
    Flush,
    Straight,
    ThreeOfAKind,
    TwoPair,
    /// A pair of jacks, queens, kings or aces.
    JacksOrBetter,
    Nothing,
}

const STANDARD_CATEGORIES: [StandardCategory; 14] = [
    StandardCategory::RoyalFlush,
    StandardCategory::StraightFlush,
    StandardCategory::FourAces234,
    StandardCategory::FourLowAce,
    StandardCategory::FourAces,
    StandardCategory::Four234,
    StandardCategory::FourOfAKind,
    StandardCategory::FullHouse,
    StandardCategory::Flush,
    StandardCategory::Straight,
    StandardCategory::ThreeOfAKind,
    StandardCategory::TwoPair,
    StandardCategory::JacksOrBetter,
    StandardCategory::Nothing,
];

impl Category for StandardCategory {
    fn all() -> &'static [Self] {
        &STANDARD_CATEGORIES
    }

    fn index(self) -> usize {
        self as usize
    }

    fn name(self) -> &'static str {
        match self {
            StandardCategory::RoyalFlush => "royal_flush",
            StandardCategory::StraightFlush => "straight_flush",
            StandardCategory::FourAces234 => "four_aces_234",
            StandardCategory::FourLowAce => "four_low_ace",
            StandardCategory::FourAces => "four_aces",
            StandardCategory::Four234 => "four_234",
            StandardCategory::FourOfAKind => "four_of_a_kind",
            StandardCategory::FullHouse => "full_house",
            StandardCategory::Flush => "flush",
            StandardCategory::Straight => "straight",
            StandardCategory::ThreeOfAKind => "three_of_a_kind",
            StandardCategory::TwoPair => "two_pair",
            StandardCategory::JacksOrBetter => "jacks_or_better",
            StandardCategory::Nothing => "nothing",
        }
    }
}

impl StandardCategory {
    /// Any of the four of a kind tiers.
    pub fn is_quads(self) -> bool {
        matches!(
            self,
            StandardCategory::FourAces234
                | StandardCategory::FourLowAce
                | StandardCategory::FourAces
                | StandardCategory::Four234
                | StandardCategory::FourOfAKind
        )
    }
}

impl fmt::Display for StandardCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Jacks or better evaluator. No wild cards.
#[derive(Debug, Clone, Copy, Default)]
pub struct StandardEvaluator;

fn is_low(v: Value) -> bool {
    matches!(v, Value::Two | Value::Three | Value::Four)
}

impl Evaluator for StandardEvaluator {
    type Category = StandardCategory;

    fn classify(&self, cards: &[Card; 5]) -> StandardCategory {
        // use for bitset
        let mut suit_set: u8 = 0;
        // Use for bitset
        let mut value_set: u16 = 0;
        let mut counts = [0u8; 13];
        for c in cards {
            suit_set |= 1 << c.suit as u8;
            value_set |= 1 << c.value as u16;
            counts[c.value as usize] += 1;
        }

        let is_flush = suit_set.count_ones() == 1;
        // Every straight mask has five bits so equality also means five
        // distinct values.
        let is_straight = STRAIGHTS.contains(&value_set);

        if is_flush && is_straight {
            if value_set == ROYAL {
                return StandardCategory::RoyalFlush;
            }
            return StandardCategory::StraightFlush;
        }

        // Find the value that has `n` copies, highest value first.
        let value_with = |n: u8| {
            (0..13u8)
                .rev()
                .find(|v| counts[usize::from(*v)] == n)
                .map(Value::from_u8)
        };

        // Multiplicities, largest first. Five cards fill at most five slots.
        let mut shape = [0u8; 5];
        let mut distinct = 0;
        for count in counts.into_iter().filter(|c| *c > 0) {
            shape[distinct] = count;
            distinct += 1;
        }
        let shape = &mut shape[..distinct];
        shape.sort_unstable_by(|a, b| b.cmp(a));

        match &*shape {
            [4, 1] => {
                let (Some(quad), Some(kicker)) = (value_with(4), value_with(1)) else {
                    return StandardCategory::Nothing;
                };
                if quad == Value::Ace {
                    if is_low(kicker) {
                        StandardCategory::FourAces234
                    } else {
                        StandardCategory::FourAces
                    }
                } else if is_low(quad) {
                    if is_low(kicker) || kicker == Value::Ace {
                        StandardCategory::FourLowAce
                    } else {
                        StandardCategory::Four234
                    }
                } else {
                    StandardCategory::FourOfAKind
                }
            }
            [3, 2] => StandardCategory::FullHouse,
            _ if is_flush => StandardCategory::Flush,
            _ if is_straight => StandardCategory::Straight,
            [3, 1, 1] => StandardCategory::ThreeOfAKind,
            [2, 2, 1] => StandardCategory::TwoPair,
            [2, 1, 1, 1] => match value_with(2) {
                Some(pair) if pair >= Value::Jack => StandardCategory::JacksOrBetter,
                _ => StandardCategory::Nothing,
            },
            _ => StandardCategory::Nothing,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{CardIter, Deck, Hand};
    use crate::eval::test_util::assert_order_free;

    fn eval(s: &str) -> StandardCategory {
        let hand: Hand = s.parse().unwrap();
        StandardEvaluator.evaluate(hand.cards()).unwrap()
    }

    #[test]
    fn test_royal_and_straight_flush() {
        assert_eq!(StandardCategory::RoyalFlush, eval("AS KS QS JS TS"));
        assert_eq!(StandardCategory::RoyalFlush, eval("TH AH JH KH QH"));
        assert_eq!(StandardCategory::StraightFlush, eval("9S KS QS JS TS"));
        assert_eq!(StandardCategory::StraightFlush, eval("AD 2D 3D 4D 5D"));
    }

    #[test]
    fn test_quad_tiers() {
        assert_eq!(StandardCategory::FourAces234, eval("AS AD AC AH 4C"));
        assert_eq!(StandardCategory::FourAces, eval("AS AD AC AH 5C"));
        assert_eq!(StandardCategory::FourAces, eval("AS AD AC AH KC"));
        assert_eq!(StandardCategory::FourLowAce, eval("3S 3D 3C 3H AC"));
        assert_eq!(StandardCategory::FourLowAce, eval("2S 2D 2C 2H 4C"));
        assert_eq!(StandardCategory::Four234, eval("4S 4D 4C 4H 9C"));
        assert_eq!(StandardCategory::FourOfAKind, eval("5S 5D 5C 5H 2C"));
        assert_eq!(StandardCategory::FourOfAKind, eval("KS KD KC KH AC"));
    }

    #[test]
    fn test_middle_hands() {
        assert_eq!(StandardCategory::FullHouse, eval("KS KD KC 2H 2C"));
        assert_eq!(StandardCategory::Flush, eval("2S 7S 9S JS KS"));
        assert_eq!(StandardCategory::Straight, eval("9S TD JC QH KC"));
        assert_eq!(StandardCategory::Straight, eval("AS 2D 3C 4H 5C"));
        assert_eq!(StandardCategory::ThreeOfAKind, eval("7S 7D 7C 2H 9C"));
        assert_eq!(StandardCategory::TwoPair, eval("7S 7D 9C 9H AC"));
    }

    #[test]
    fn test_pairs() {
        assert_eq!(StandardCategory::JacksOrBetter, eval("JS JD 2C 5H 9C"));
        assert_eq!(StandardCategory::JacksOrBetter, eval("AS AD 2C 5H 9C"));
        assert_eq!(StandardCategory::Nothing, eval("TS TD 2C 5H 9C"));
        assert_eq!(StandardCategory::Nothing, eval("2S 4D 7C 9H JC"));
    }

    #[test]
    fn test_not_a_straight() {
        // Wrap around isn't a straight.
        assert_eq!(StandardCategory::Nothing, eval("QS KD AC 2H 3C"));
    }

    #[test]
    fn test_permutation_invariant() {
        assert_order_free(
            &StandardEvaluator,
            &[
                "AS KS QS JS TS",
                "AS AD AC AH 3C",
                "3S 3D 3C 3H AC",
                "KS KD KC 2H 2C",
                "AS 2D 3C 4H 5C",
                "JS JD 2C 5H 9C",
                "7S 7D 9C 9H AC",
            ],
        );
    }

    /// Every five card hand lands in exactly one category, with the well
    /// known counts for the categories that don't depend on kicker splits.
    #[test]
    fn test_all_hands_distribution() {
        let deck = Deck::new();
        let mut counts = [0u64; 14];
        for cards in CardIter::new(deck.remaining(), 5) {
            let c = StandardEvaluator.evaluate(&cards).unwrap();
            counts[c.index()] += 1;
        }
        assert_eq!(2_598_960, counts.iter().sum::<u64>());
        assert_eq!(4, counts[StandardCategory::RoyalFlush.index()]);
        assert_eq!(36, counts[StandardCategory::StraightFlush.index()]);
        let quads: u64 = StandardCategory::all()
            .iter()
            .filter(|c| c.is_quads())
            .map(|c| counts[c.index()])
            .sum();
        assert_eq!(624, quads);
        assert_eq!(3_744, counts[StandardCategory::FullHouse.index()]);
        assert_eq!(5_108, counts[StandardCategory::Flush.index()]);
        assert_eq!(10_200, counts[StandardCategory::Straight.index()]);
        assert_eq!(54_912, counts[StandardCategory::ThreeOfAKind.index()]);
        assert_eq!(123_552, counts[StandardCategory::TwoPair.index()]);
        // Four high pairs out of thirteen.
        assert_eq!(4 * 84_480, counts[StandardCategory::JacksOrBetter.index()]);
    }
}
