use std::fmt;
use std::ops::Index;
use std::str::FromStr;

use super::{Card, CardBitSet, VideoPokerError};

/// A dealt five card video poker hand.
///
/// Unlike a holdem hand the order matters here: hold mask bit `i` refers
/// to position `i`, and replacement cards are dealt into the discarded
/// positions in order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, serde::Serialize)]
#[serde(transparent)]
pub struct Hand([Card; 5]);

impl Hand {
    /// The number of cards in every video poker hand.
    pub const SIZE: usize = 5;

    /// Create a hand, checking that no card is repeated.
    ///
    /// # Examples
    ///
    /// ```
    /// use rs_video_poker::core::{Card, Hand, Suit, Value};
    ///
    /// let ace = Card::new(Value::Ace, Suit::Spade);
    /// let king = Card::new(Value::King, Suit::Spade);
    /// assert!(Hand::new([ace, king, ace, king, ace]).is_err());
    /// ```
    pub fn new(cards: [Card; 5]) -> Result<Self, VideoPokerError> {
        let set = CardBitSet::from(&cards[..]);
        if set.count() != Self::SIZE {
            return Err(VideoPokerError::MalformedHand(format!(
                "duplicate card in {}",
                Hand(cards)
            )));
        }
        Ok(Self(cards))
    }

    /// Create a hand from cards that are already known to be distinct, for
    /// example cards just dealt from a `Deck`.
    pub(crate) fn from_dealt(cards: [Card; 5]) -> Self {
        Self(cards)
    }

    /// The cards in position order.
    pub fn cards(&self) -> &[Card] {
        &self.0
    }

    pub fn as_array(&self) -> &[Card; 5] {
        &self.0
    }

    /// The cards as an order free set.
    pub fn card_set(&self) -> CardBitSet {
        CardBitSet::from(&self.0[..])
    }

    /// The same cards in their canonical (bitset index) order. Two
    /// permutations of a hand always have the same sorted hand.
    pub fn sorted(&self) -> Hand {
        let mut cards = self.0;
        for (slot, card) in cards.iter_mut().zip(self.card_set()) {
            *slot = card;
        }
        Hand(cards)
    }

    /// Position of a card in this hand, if it's here.
    pub fn position(&self, card: Card) -> Option<usize> {
        self.0.iter().position(|c| *c == card)
    }
}

impl Index<usize> for Hand {
    type Output = Card;
    fn index(&self, index: usize) -> &Card {
        &self.0[index]
    }
}

impl TryFrom<&[Card]> for Hand {
    type Error = VideoPokerError;

    fn try_from(cards: &[Card]) -> Result<Self, Self::Error> {
        let arr: [Card; 5] = cards.try_into().map_err(|_| {
            VideoPokerError::MalformedHand(format!("expected 5 cards, got {}", cards.len()))
        })?;
        Hand::new(arr)
    }
}

impl fmt::Display for Hand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, card) in self.0.iter().enumerate() {
            if i > 0 {
                write!(f, " ")?;
            }
            write!(f, "{card}")?;
        }
        Ok(())
    }
}

/// Parse hands like `"AS KS QS JS TS"` or `"2c,2d,2h,2s,ad"`. Tokens are
/// separated by whitespace and/or commas.
impl FromStr for Hand {
    type Err = VideoPokerError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let cards = s
            .split(|c: char| c == ',' || c.is_whitespace())
            .filter(|t| !t.is_empty())
            .map(Card::from_str)
            .collect::<Result<Vec<Card>, _>>()?;

        if cards.len() != Self::SIZE {
            return Err(VideoPokerError::MalformedHand(format!(
                "expected 5 cards, got {} in {s:?}",
                cards.len()
            )));
        }
        Hand::try_from(&cards[..])
    }
}
