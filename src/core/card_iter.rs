use super::Card;

/// Iterate every `num_cards` sized combination of a pool of cards, in
/// lexicographic index order.
///
/// This is what exact hold analysis uses to walk every possible draw from
/// the remaining deck.
///
/// ```
/// use rs_video_poker::core::{CardIter, Deck};
///
/// let deck = Deck::new();
/// assert_eq!(1_326, CardIter::new(deck.remaining(), 2).count());
/// ```
#[derive(Debug)]
pub struct CardIter<'a> {
    // All the possible cards that can be dealt
    possible_cards: &'a [Card],

    // Set of current offsets being used to create card sets.
    idx: Vec<usize>,

    // size of card sets requested.
    num_cards: usize,

    // Set once the last combination has been handed out.
    done: bool,
}

impl<'a> CardIter<'a> {
    pub fn new(possible_cards: &'a [Card], num_cards: usize) -> CardIter<'a> {
        CardIter {
            possible_cards,
            idx: (0..num_cards).collect(),
            num_cards,
            done: num_cards > possible_cards.len(),
        }
    }
}

impl Iterator for CardIter<'_> {
    type Item = Vec<Card>;

    fn next(&mut self) -> Option<Vec<Card>> {
        if self.done {
            return None;
        }

        let result: Vec<Card> = self.idx.iter().map(|i| self.possible_cards[*i]).collect();

        // Advance. Find the right most offset that can still move forward
        // leaving room for the offsets after it.
        let n = self.possible_cards.len();
        let k = self.num_cards;
        match (0..k).rev().find(|&level| self.idx[level] < n - k + level) {
            Some(level) => {
                self.idx[level] += 1;
                for after in level + 1..k {
                    self.idx[after] = self.idx[after - 1] + 1;
                }
            }
            None => self.done = true,
        }

        Some(result)
    }
}

/// Number of `k` sized combinations of `n` things.
pub fn combinations(n: usize, k: usize) -> u64 {
    if k > n {
        return 0;
    }
    let k = k.min(n - k);
    (0..k).fold(1u64, |acc, i| acc * (n - i) as u64 / (i + 1) as u64)
}
