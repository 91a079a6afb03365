use std::fmt;

use super::{Card, Hand, VideoPokerError};

/// Which of the five dealt cards are kept. Bit `i` set means position
/// `i` is held, the rest are replaced on the draw.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default, serde::Serialize)]
#[serde(transparent)]
pub struct HoldMask(u8);

impl HoldMask {
    /// Discard everything.
    pub const NONE: HoldMask = HoldMask(0);
    /// Keep everything.
    pub const ALL: HoldMask = HoldMask(0b1_1111);

    /// Create a mask, rejecting anything with bits past position 4.
    ///
    /// ```
    /// use rs_video_poker::core::HoldMask;
    ///
    /// assert_eq!(3, HoldMask::new(0b10101).unwrap().held_count());
    /// assert!(HoldMask::new(32).is_err());
    /// ```
    pub fn new(bits: u8) -> Result<Self, VideoPokerError> {
        if bits > Self::ALL.0 {
            return Err(VideoPokerError::InvalidHoldMask(bits));
        }
        Ok(Self(bits))
    }

    /// All 32 masks in ascending order, `NONE` first and `ALL` last.
    pub fn all_masks() -> impl Iterator<Item = HoldMask> {
        (0..=Self::ALL.0).map(HoldMask)
    }

    /// Build a mask from held positions.
    ///
    /// ```
    /// use rs_video_poker::core::HoldMask;
    ///
    /// let mask = HoldMask::from_indices(&[0, 1, 2]).unwrap();
    /// assert_eq!(0b00111, mask.bits());
    /// ```
    pub fn from_indices(indices: &[usize]) -> Result<Self, VideoPokerError> {
        let mut bits = 0u8;
        for &i in indices {
            if i >= Hand::SIZE {
                return Err(VideoPokerError::InvalidHoldMask(
                    u8::try_from(i).unwrap_or(u8::MAX),
                ));
            }
            bits |= 1 << i;
        }
        Ok(Self(bits))
    }

    /// Hold exactly the positions of `hand` whose card is in `cards`.
    pub fn from_cards(hand: &Hand, cards: impl IntoIterator<Item = Card>) -> Self {
        let mut bits = 0u8;
        for card in cards {
            if let Some(pos) = hand.position(card) {
                bits |= 1 << pos;
            }
        }
        Self(bits)
    }

    pub fn bits(&self) -> u8 {
        self.0
    }

    pub fn is_held(&self, position: usize) -> bool {
        position < Hand::SIZE && self.0 & (1 << position) != 0
    }

    /// Held positions, ascending.
    pub fn indices(&self) -> Vec<usize> {
        (0..Hand::SIZE).filter(|i| self.is_held(*i)).collect()
    }

    /// Positions that get replacement cards, ascending.
    pub fn draw_positions(&self) -> Vec<usize> {
        (0..Hand::SIZE).filter(|i| !self.is_held(*i)).collect()
    }

    pub fn held_count(&self) -> usize {
        self.0.count_ones() as usize
    }

    /// How many cards are drawn, `5 - held_count`.
    pub fn draw_count(&self) -> usize {
        Hand::SIZE - self.held_count()
    }

    /// The held cards of `hand`, in position order.
    pub fn held_cards(&self, hand: &Hand) -> Vec<Card> {
        self.indices().into_iter().map(|i| hand[i]).collect()
    }
}

impl TryFrom<u8> for HoldMask {
    type Error = VideoPokerError;
    fn try_from(bits: u8) -> Result<Self, Self::Error> {
        HoldMask::new(bits)
    }
}

/// `H` for held and `-` for drawn, position 0 first.
impl fmt::Display for HoldMask {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for i in 0..Hand::SIZE {
            write!(f, "{}", if self.is_held(i) { 'H' } else { '-' })?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_range() {
        assert!(HoldMask::new(31).is_ok());
        assert!(matches!(
            HoldMask::new(32),
            Err(VideoPokerError::InvalidHoldMask(32))
        ));
        assert_eq!(32, HoldMask::all_masks().count());
        assert_eq!(Some(HoldMask::NONE), HoldMask::all_masks().next());
        assert_eq!(Some(HoldMask::ALL), HoldMask::all_masks().last());
    }

    #[test]
    fn test_positions() {
        let mask = HoldMask::new(0b01001).unwrap();
        assert_eq!(vec![0, 3], mask.indices());
        assert_eq!(vec![1, 2, 4], mask.draw_positions());
        assert_eq!(2, mask.held_count());
        assert_eq!(3, mask.draw_count());
        assert_eq!("H--H-", mask.to_string());
    }

    #[test]
    fn test_from_indices() {
        assert_eq!(
            HoldMask::ALL,
            HoldMask::from_indices(&[0, 1, 2, 3, 4]).unwrap()
        );
        assert_eq!(HoldMask::NONE, HoldMask::from_indices(&[]).unwrap());
        assert!(HoldMask::from_indices(&[5]).is_err());
    }

    #[test]
    fn test_from_cards() {
        let hand: Hand = "2D 2S JD QH 8S".parse().unwrap();
        let deuces: Vec<Card> = hand.cards().iter().copied().filter(|c| c.is_deuce()).collect();
        let mask = HoldMask::from_cards(&hand, deuces.clone());
        assert_eq!(vec![0, 1], mask.indices());
        assert_eq!(deuces, mask.held_cards(&hand));
    }
}
