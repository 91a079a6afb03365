use super::{ROYAL, STRAIGHTS};
use crate::core::{Card, Value};

/// Summary of a five card hand where deuces are wild.
///
/// Wild cards take whatever value and suit is best, so instead of
/// looking at the hand directly every question is asked as "can the wilds
/// complete this?".
#[derive(Debug, Clone, Copy)]
pub(super) struct WildHand {
    /// Number of deuces.
    pub wilds: usize,
    /// Count of every natural value. The deuce slot is always zero.
    counts: [u8; 13],
    /// One bit per natural value present.
    natural_set: u16,
    /// Do all naturals share a suit ? True when there are no naturals.
    suited: bool,
    /// The lone natural when there is exactly one.
    single_natural: Option<Value>,
}

impl WildHand {
    pub fn new(cards: &[Card; 5]) -> Self {
        let mut counts = [0u8; 13];
        let mut natural_set = 0u16;
        let mut suit_set = 0u8;
        let mut wilds = 0;
        let mut last_natural = None;
        for c in cards {
            if c.is_deuce() {
                wilds += 1;
            } else {
                counts[c.value as usize] += 1;
                natural_set |= 1 << c.value as u16;
                suit_set |= 1 << c.suit as u8;
                last_natural = Some(c.value);
            }
        }

        Self {
            wilds,
            counts,
            natural_set,
            suited: suit_set.count_ones() <= 1,
            single_natural: if wilds == 4 { last_natural } else { None },
        }
    }

    pub fn is_suited(&self) -> bool {
        self.suited
    }

    /// The natural card left over when there are exactly four deuces.
    pub fn four_deuce_kicker(&self) -> Option<Value> {
        self.single_natural
    }

    /// A royal flush with no wild cards at all.
    pub fn is_natural_royal(&self) -> bool {
        self.wilds == 0 && self.suited && self.natural_set == ROYAL
    }

    /// Can the wilds fill in every value of `seq` that the naturals are
    /// missing ?
    ///
    /// There are only five cards so if enough of the sequence is present
    /// every natural must be distinct and inside it.
    pub fn can_make_sequence(&self, seq: u16) -> bool {
        let present = (seq & self.natural_set).count_ones() as usize;
        5 - present <= self.wilds
    }

    pub fn can_make_royal(&self) -> bool {
        self.can_make_sequence(ROYAL)
    }

    pub fn can_make_any_straight(&self) -> bool {
        STRAIGHTS.iter().any(|s| self.can_make_sequence(*s))
    }

    /// How many natural `value`s there are.
    pub fn count(&self, value: Value) -> usize {
        usize::from(self.counts[value as usize])
    }

    /// Can some value be boosted to `n` of a kind ? With enough wilds
    /// the wilds alone make it.
    pub fn can_make_of_a_kind(&self, n: usize) -> bool {
        self.counts
            .iter()
            .any(|c| *c > 0 && usize::from(*c) + self.wilds >= n)
            || self.wilds >= n
    }

    /// Can `value` be boosted to five of a kind ?
    pub fn can_make_five(&self, value: Value) -> bool {
        self.count(value) + self.wilds >= 5
    }

    /// Try every (triple, pair) value combination. Wilds go to the triple
    /// first and whatever is left to the pair. The deuce is never a target,
    /// naturals are never deuces so the candidates are just three to ace.
    pub fn can_make_full_house(&self) -> bool {
        let candidates = &Value::values()[1..];
        candidates.iter().any(|r3| {
            let need3 = 3usize.saturating_sub(self.count(*r3));
            if need3 > self.wilds {
                return false;
            }
            let left = self.wilds - need3;
            candidates
                .iter()
                .filter(|r2| *r2 != r3)
                .any(|r2| 2usize.saturating_sub(self.count(*r2)) <= left)
        })
    }
}
