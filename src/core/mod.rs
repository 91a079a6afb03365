//! This is the core module. It exports the ruleset agnostic building
//! blocks: cards, decks, hands, hold masks and the error type.

/// card.rs has value and suit.
mod card;
/// Re-export Card, Value, and Suit
pub use self::card::{Card, Suit, Value};

/// Bitset of cards, the order free identity of a group of cards.
mod card_bit_set;
pub use self::card_bit_set::{CardBitSet, CardBitSetIter};

/// Code related to dealt five card hands.
mod hand;
pub use self::hand::Hand;

/// Hold / discard decisions.
mod hold;
pub use self::hold::HoldMask;

/// We want to be able to iterate over every possible draw.
mod card_iter;
/// Make that functionality public.
pub use self::card_iter::*;

/// Deck is the normal 52 card deck.
mod deck;
/// Export `Deck`
pub use self::deck::Deck;

/// Error type for everything in the crate.
mod error;
pub use self::error::VideoPokerError;
