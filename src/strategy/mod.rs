//! Hold strategies decide which of the five dealt cards to keep.
//!
//! Some simple strategies are provided as baselines. The rule based ones
//! (`RiffStrategy` for jacks or better, `JRiffStrategy` for deuces wild
//! bonus) follow a written playing guide, and `search::SearchStrategy`
//! picks the hold with the best expected value.
mod j_riff;
mod riff;
mod simple;

use std::collections::BTreeMap;

use crate::core::{Hand, HoldMask, Suit, Value, VideoPokerError};

/// This is the trait that you need to implement in order to play a hand.
/// It's up to you to implement the logic and keep any state.
///
/// Strategies take `&mut self` so that they can cache work between
/// hands. The simulator and the cli only ever see a `HoldStrategy`, so any
/// implementation can be swapped in.
pub trait HoldStrategy {
    /// Pick the cards to keep from a freshly dealt hand.
    fn choose_hold(&mut self, hand: &Hand) -> Result<HoldMask, VideoPokerError>;
}

impl<S: HoldStrategy + ?Sized> HoldStrategy for Box<S> {
    fn choose_hold(&mut self, hand: &Hand) -> Result<HoldMask, VideoPokerError> {
        (**self).choose_hold(hand)
    }
}

pub use j_riff::JRiffStrategy;
pub use riff::RiffStrategy;
pub use simple::{AnyPair, HoldAll, HoldNothing, JacksOrBetterPair};

/// Suits in letter order. Rule based strategies break ties between suits
/// by scanning in this order.
const SUIT_SCAN: [Suit; 4] = [Suit::Club, Suit::Diamond, Suit::Heart, Suit::Spade];

/// Positions of every value in the hand, lowest value first.
pub(crate) fn positions_by_value(hand: &Hand) -> BTreeMap<Value, Vec<usize>> {
    let mut groups: BTreeMap<Value, Vec<usize>> = BTreeMap::new();
    for (i, card) in hand.cards().iter().enumerate() {
        groups.entry(card.value).or_default().push(i);
    }
    groups
}

/// Values that show up exactly `n` times, lowest first.
pub(crate) fn values_with_count(groups: &BTreeMap<Value, Vec<usize>>, n: usize) -> Vec<Value> {
    groups
        .iter()
        .filter(|(_, idx)| idx.len() == n)
        .map(|(v, _)| *v)
        .collect()
}

/// Positions of royal valued (ten to ace) cards in the suit holding the
/// most of them, if that suit has at least `n`.
///
/// Ties between suits go to the first suit in C, D, H, S order.
pub fn n_to_royal(hand: &Hand, n: usize) -> Option<Vec<usize>> {
    best_suit(hand, |v| v.is_royal(), n)
}

/// Positions of the cards in the most common suit, if there are at least
/// `n` of them.
///
/// Ties between suits go to the first suit in C, D, H, S order.
pub fn n_to_flush(hand: &Hand, n: usize) -> Option<Vec<usize>> {
    best_suit(hand, |_| true, n)
}

fn best_suit(hand: &Hand, keep: impl Fn(Value) -> bool, n: usize) -> Option<Vec<usize>> {
    let mut best: Vec<usize> = Vec::new();
    for suit in SUIT_SCAN {
        let idx: Vec<usize> = hand
            .cards()
            .iter()
            .enumerate()
            .filter(|(_, c)| c.suit == suit && keep(c.value))
            .map(|(i, _)| i)
            .collect();
        if idx.len() > best.len() {
            best = idx;
        }
    }
    (!best.is_empty() && best.len() >= n).then_some(best)
}
