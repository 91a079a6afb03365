use std::fmt;

use super::wild::WildHand;
use super::{Category, Evaluator};
use crate::core::Card;

/// Deuces wild categories, strongest first.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, serde::Serialize, serde::Deserialize,
)]
#[serde(rename_all = "snake_case")]
pub enum DeucesCategory {
    NaturalRoyalFlush,
    FourDeuces,
    WildRoyalFlush,
    FiveOfAKind,
    StraightFlush,
    FourOfAKind,
    FullHouse,
    Flush,
    Straight,
    ThreeOfAKind,
    Nothing,
}

const DEUCES_CATEGORIES: [DeucesCategory; 11] = [
    DeucesCategory::NaturalRoyalFlush,
    DeucesCategory::FourDeuces,
    DeucesCategory::WildRoyalFlush,
    DeucesCategory::FiveOfAKind,
    DeucesCategory::StraightFlush,
    DeucesCategory::FourOfAKind,
    DeucesCategory::FullHouse,
    DeucesCategory::Flush,
    DeucesCategory::Straight,
    DeucesCategory::ThreeOfAKind,
    DeucesCategory::Nothing,
];

impl Category for DeucesCategory {
    fn all() -> &'static [Self] {
        &DEUCES_CATEGORIES
    }

    fn index(self) -> usize {
        self as usize
    }

    fn name(self) -> &'static str {
        match self {
            DeucesCategory::NaturalRoyalFlush => "natural_royal_flush",
            DeucesCategory::FourDeuces => "four_deuces",
            DeucesCategory::WildRoyalFlush => "wild_royal_flush",
            DeucesCategory::FiveOfAKind => "five_of_a_kind",
            DeucesCategory::StraightFlush => "straight_flush",
            DeucesCategory::FourOfAKind => "four_of_a_kind",
            DeucesCategory::FullHouse => "full_house",
            DeucesCategory::Flush => "flush",
            DeucesCategory::Straight => "straight",
            DeucesCategory::ThreeOfAKind => "three_of_a_kind",
            DeucesCategory::Nothing => "nothing",
        }
    }
}

impl fmt::Display for DeucesCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Deuces wild evaluator. All four deuces are wild.
#[derive(Debug, Clone, Copy, Default)]
pub struct DeucesEvaluator;

impl Evaluator for DeucesEvaluator {
    type Category = DeucesCategory;

    fn classify(&self, cards: &[Card; 5]) -> DeucesCategory {
        let hand = WildHand::new(cards);

        if hand.is_natural_royal() {
            DeucesCategory::NaturalRoyalFlush
        } else if hand.wilds == 4 {
            DeucesCategory::FourDeuces
        } else if hand.wilds > 0 && hand.is_suited() && hand.can_make_royal() {
            DeucesCategory::WildRoyalFlush
        } else if hand.wilds > 0 && hand.can_make_of_a_kind(5) {
            DeucesCategory::FiveOfAKind
        } else if hand.is_suited() && hand.can_make_any_straight() {
            DeucesCategory::StraightFlush
        } else if hand.can_make_of_a_kind(4) {
            DeucesCategory::FourOfAKind
        } else if hand.can_make_full_house() {
            DeucesCategory::FullHouse
        } else if hand.is_suited() {
            DeucesCategory::Flush
        } else if hand.can_make_any_straight() {
            DeucesCategory::Straight
        } else if hand.can_make_of_a_kind(3) {
            DeucesCategory::ThreeOfAKind
        } else {
            DeucesCategory::Nothing
        }
    }
}
