use std::ops::Index;

use rand::Rng;
use rand::seq::SliceRandom;

use super::{Card, CardBitSet, Suit, Value, VideoPokerError};

/// `Deck` is an ordered pile of undrawn cards that allows easy
/// indexing into the cards.
///
/// Draws come off the front. Drawing never moves cards around, it just
/// advances an offset, so `reset` can put every card back without
/// reallocating. Shuffling always starts from the initial composition.
#[derive(Debug, Clone, PartialEq)]
pub struct Deck {
    /// Card storage. Every card the deck was created with.
    cards: Vec<Card>,
    /// Index of the next undrawn card.
    next: usize,
}

impl Deck {
    /// The number of cards in a full deck.
    pub const SIZE: usize = 52;

    /// Create the standard 52 card deck, spades first, deuce to ace in
    /// every suit.
    ///
    /// ```
    /// use rs_video_poker::core::Deck;
    ///
    /// assert_eq!(52, Deck::new().len());
    /// ```
    pub fn new() -> Self {
        let cards = Suit::suits()
            .into_iter()
            .flat_map(|s| Value::values().into_iter().map(move |v| Card::new(v, s)))
            .collect();
        Self { cards, next: 0 }
    }

    /// A deck of every card not in `dealt`. This is the "52 minus dealt"
    /// pool that replacement cards are drawn from.
    ///
    /// ```
    /// use rs_video_poker::core::{Deck, Hand};
    ///
    /// let hand: Hand = "AS KS QS JS TS".parse().unwrap();
    /// assert_eq!(47, Deck::excluding(hand.cards()).len());
    /// ```
    pub fn excluding(dealt: &[Card]) -> Self {
        let remaining = !CardBitSet::from(dealt);
        Self {
            cards: remaining.into_iter().collect(),
            next: 0,
        }
    }

    /// How many undrawn cards are there in the deck ?
    pub fn len(&self) -> usize {
        self.cards.len() - self.next
    }

    /// Have all cards been drawn ?
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// The undrawn cards in draw order.
    pub fn remaining(&self) -> &[Card] {
        &self.cards[self.next..]
    }

    /// Put every drawn card back, restoring the initial composition.
    /// The order is whatever the last shuffle left.
    pub fn reset(&mut self) {
        self.next = 0;
    }

    /// Reset and randomly shuffle the deck.
    pub fn shuffle<R: Rng>(&mut self, rng: &mut R) {
        self.reset();
        self.cards.shuffle(rng);
    }

    /// Remove and return the first `n` undrawn cards.
    ///
    /// ```
    /// use rs_video_poker::core::{Deck, VideoPokerError};
    ///
    /// let mut deck = Deck::new();
    /// assert_eq!(5, deck.draw(5).unwrap().len());
    /// assert_eq!(47, deck.len());
    /// assert!(matches!(
    ///     deck.draw(48),
    ///     Err(VideoPokerError::InsufficientDeck { requested: 48, remaining: 47 })
    /// ));
    /// ```
    pub fn draw(&mut self, n: usize) -> Result<&[Card], VideoPokerError> {
        if n > self.len() {
            return Err(VideoPokerError::InsufficientDeck {
                requested: n,
                remaining: self.len(),
            });
        }
        let start = self.next;
        self.next += n;
        Ok(&self.cards[start..self.next])
    }

    /// Draw a single card.
    pub fn deal(&mut self) -> Result<Card, VideoPokerError> {
        self.draw(1).map(|cards| cards[0])
    }
}

impl Default for Deck {
    fn default() -> Self {
        Self::new()
    }
}

impl Index<usize> for Deck {
    type Output = Card;
    fn index(&self, index: usize) -> &Card {
        &self.remaining()[index]
    }
}

/// A deck of exactly these cards, in this order. Every card may appear
/// only once.
impl TryFrom<Vec<Card>> for Deck {
    type Error = VideoPokerError;

    fn try_from(cards: Vec<Card>) -> Result<Self, Self::Error> {
        let mut seen = CardBitSet::new();
        for &card in &cards {
            if seen.contains(card) {
                return Err(VideoPokerError::DuplicateCard(card));
            }
            seen.insert(card);
        }
        Ok(Self { cards, next: 0 })
    }
}
