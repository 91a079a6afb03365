use super::{HoldStrategy, n_to_flush, n_to_royal, positions_by_value, values_with_count};
use crate::core::{Hand, HoldMask, Value, VideoPokerError};
use crate::eval::{Evaluator, StandardCategory, StandardEvaluator};

/// Rule based play for jacks or better.
///
/// In order, the first rule that matches decides:
///
/// 1. Made hands (trips or better) keep all five.
/// 2. Four to a royal, then three to a royal.
/// 3. Four to a flush.
/// 4. A pair of aces.
/// 5. The lowest pair of 2s, 3s or 4s.
/// 6. The highest jacks or better pair.
/// 7. Two pair keeps both pairs.
/// 8. The highest pair.
/// 9. Every ten through ace.
/// 10. Nothing.
#[derive(Debug, Clone, Copy, Default)]
pub struct RiffStrategy {
    evaluator: StandardEvaluator,
}

impl RiffStrategy {
    pub fn new() -> Self {
        Self::default()
    }
}

fn is_made(category: StandardCategory) -> bool {
    category.is_quads()
        || matches!(
            category,
            StandardCategory::RoyalFlush
                | StandardCategory::StraightFlush
                | StandardCategory::FullHouse
                | StandardCategory::Flush
                | StandardCategory::Straight
                | StandardCategory::ThreeOfAKind
        )
}

impl HoldStrategy for RiffStrategy {
    fn choose_hold(&mut self, hand: &Hand) -> Result<HoldMask, VideoPokerError> {
        let category = self.evaluator.evaluate_hand(hand);
        if is_made(category) {
            return Ok(HoldMask::ALL);
        }

        // Draws
        if let Some(idx) = n_to_royal(hand, 4)
            .or_else(|| n_to_royal(hand, 3))
            .or_else(|| n_to_flush(hand, 4))
        {
            return HoldMask::from_indices(&idx);
        }

        let groups = positions_by_value(hand);
        let pairs = values_with_count(&groups, 2);
        let hold_value = |v: &Value| HoldMask::from_indices(&groups[v]);

        if let Some(aces) = pairs.iter().find(|v| **v == Value::Ace) {
            return hold_value(aces);
        }
        if let Some(low) = pairs.iter().find(|v| **v <= Value::Four) {
            return hold_value(low);
        }
        if let Some(high) = pairs.iter().rev().find(|v| **v >= Value::Jack) {
            return hold_value(high);
        }
        if category == StandardCategory::TwoPair {
            let held: Vec<usize> = pairs.iter().flat_map(|v| groups[v].iter().copied()).collect();
            return HoldMask::from_indices(&held);
        }
        if let Some(best) = pairs.last() {
            return hold_value(best);
        }

        let royals: Vec<usize> = hand
            .cards()
            .iter()
            .enumerate()
            .filter(|(_, c)| c.value.is_royal())
            .map(|(i, _)| i)
            .collect();
        HoldMask::from_indices(&royals)
    }
}
