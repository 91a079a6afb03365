use super::{HoldStrategy, positions_by_value};
use crate::core::{Hand, HoldMask, Value, VideoPokerError};

/// Throw everything away every time.
#[derive(Debug, Clone, Copy, Default)]
pub struct HoldNothing;

impl HoldStrategy for HoldNothing {
    fn choose_hold(&mut self, _hand: &Hand) -> Result<HoldMask, VideoPokerError> {
        Ok(HoldMask::NONE)
    }
}

/// Keep whatever was dealt.
#[derive(Debug, Clone, Copy, Default)]
pub struct HoldAll;

impl HoldStrategy for HoldAll {
    fn choose_hold(&mut self, _hand: &Hand) -> Result<HoldMask, VideoPokerError> {
        Ok(HoldMask::ALL)
    }
}

/// Keep every card whose value shows up at least twice, otherwise
/// nothing. Two pair keeps both pairs.
#[derive(Debug, Clone, Copy, Default)]
pub struct AnyPair;

impl HoldStrategy for AnyPair {
    fn choose_hold(&mut self, hand: &Hand) -> Result<HoldMask, VideoPokerError> {
        Ok(hold_paired(hand, Value::Two))
    }
}

/// Like `AnyPair` but only for jacks or better.
#[derive(Debug, Clone, Copy, Default)]
pub struct JacksOrBetterPair;

impl HoldStrategy for JacksOrBetterPair {
    fn choose_hold(&mut self, hand: &Hand) -> Result<HoldMask, VideoPokerError> {
        Ok(hold_paired(hand, Value::Jack))
    }
}

fn hold_paired(hand: &Hand, min_value: Value) -> HoldMask {
    let held: Vec<usize> = positions_by_value(hand)
        .into_iter()
        .filter(|(v, idx)| idx.len() >= 2 && *v >= min_value)
        .flat_map(|(_, idx)| idx)
        .collect();
    HoldMask::from_indices(&held).unwrap_or_default()
}
