use std::fmt;
use std::ops::Not;

use serde::ser::SerializeSeq;

use super::Card;

/// A set of cards packed into the low 52 bits of a `u64`, one bit per
/// `u8::from(card)` index.
///
/// Iteration yields cards in index order, spades first and deuce to ace
/// inside every suit. Two groups holding the same cards compare equal and
/// hash the same whatever order they were added in, so a set is the order
/// free identity of a dealt hand. The hold search cache keys on it.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct CardBitSet {
    cards: u64,
}

const DECK_BITS: u64 = (1 << 52) - 1;

impl CardBitSet {
    /// No cards.
    ///
    /// ```
    /// use rs_video_poker::core::CardBitSet;
    ///
    /// assert!(CardBitSet::new().is_empty());
    /// ```
    pub fn new() -> Self {
        Self { cards: 0 }
    }

    /// Every card of the 52 card deck.
    ///
    /// ```
    /// use rs_video_poker::core::CardBitSet;
    ///
    /// assert_eq!(52, CardBitSet::full().count());
    /// ```
    pub fn full() -> Self {
        Self { cards: DECK_BITS }
    }

    /// ```
    /// use rs_video_poker::core::{Card, CardBitSet, Suit, Value};
    ///
    /// let mut held = CardBitSet::new();
    /// held.insert(Card::new(Value::Two, Suit::Club));
    /// held.insert(Card::new(Value::Two, Suit::Club));
    /// assert_eq!(1, held.count());
    /// ```
    pub fn insert(&mut self, card: Card) {
        self.cards |= bit(card);
    }

    pub fn remove(&mut self, card: Card) {
        self.cards &= !bit(card);
    }

    pub fn contains(&self, card: Card) -> bool {
        self.cards & bit(card) != 0
    }

    pub fn is_empty(&self) -> bool {
        self.cards == 0
    }

    pub fn count(&self) -> usize {
        self.cards.count_ones() as usize
    }

    /// The packed bits. Used to derive per hand seeds.
    pub fn bits(&self) -> u64 {
        self.cards
    }
}

fn bit(card: Card) -> u64 {
    1 << u8::from(card)
}

impl FromIterator<Card> for CardBitSet {
    fn from_iter<T: IntoIterator<Item = Card>>(iter: T) -> Self {
        let mut set = CardBitSet::new();
        for card in iter {
            set.insert(card);
        }
        set
    }
}

impl From<&[Card]> for CardBitSet {
    fn from(cards: &[Card]) -> Self {
        cards.iter().copied().collect()
    }
}

/// The cards of the deck that aren't in the set.
impl Not for CardBitSet {
    type Output = Self;

    fn not(self) -> Self::Output {
        Self {
            cards: !self.cards & DECK_BITS,
        }
    }
}

impl fmt::Debug for CardBitSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_set().entries(*self).finish()
    }
}

/// Cards of a `CardBitSet`, lowest index first.
pub struct CardBitSetIter(u64);

impl IntoIterator for CardBitSet {
    type Item = Card;
    type IntoIter = CardBitSetIter;

    fn into_iter(self) -> Self::IntoIter {
        CardBitSetIter(self.cards)
    }
}

impl Iterator for CardBitSetIter {
    type Item = Card;

    fn next(&mut self) -> Option<Card> {
        if self.0 == 0 {
            return None;
        }
        let idx = self.0.trailing_zeros() as u8;
        // Clear the lowest set bit.
        self.0 &= self.0 - 1;
        Some(Card::from(idx))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let n = self.0.count_ones() as usize;
        (n, Some(n))
    }
}

impl ExactSizeIterator for CardBitSetIter {}

/// Serialized as the list of cards, lowest index first.
impl serde::Serialize for CardBitSet {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut seq = serializer.serialize_seq(Some(self.count()))?;
        for card in *self {
            seq.serialize_element(&card)?;
        }
        seq.end()
    }
}
