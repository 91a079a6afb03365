//! Hot Roll is a bonus round. On some hands two dice are rolled, either
//! on the deal or on the draw, and the hand's payout is multiplied by
//! their sum.
use rand::Rng;
use serde::{Deserialize, Serialize};

/// How often Hot Roll happens.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct HotRollConfig {
    /// Chance that a hand gets a roll at all.
    pub p_per_hand: f64,
    /// Given a roll, the chance it happens on the deal rather than the
    /// draw.
    pub p_deal_given_roll: f64,
}

impl Default for HotRollConfig {
    fn default() -> Self {
        Self {
            p_per_hand: 1.0 / 6.0,
            p_deal_given_roll: 0.5,
        }
    }
}

impl HotRollConfig {
    /// Expected payout multiplier of one hand with this config.
    pub fn expected_multiplier(&self) -> f64 {
        expected_multiplier(self.p_per_hand)
    }
}

/// The two points of a hand where the dice can come out.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Phase {
    Deal,
    Draw,
}

/// Hot Roll state for a single hand.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct HotRollState {
    /// When the dice will be rolled, if at all.
    pub scheduled_phase: Option<Phase>,
    /// Sum of the dice once rolled.
    pub multiplier: Option<u8>,
}

impl HotRollState {
    /// The payout multiplier for the hand. 1 if the dice never rolled.
    pub fn payout_multiplier(&self) -> u8 {
        self.multiplier.unwrap_or(1)
    }
}

/// Decide at the start of a hand whether it will get a roll and on which
/// phase.
pub fn schedule<R: Rng + ?Sized>(rng: &mut R, config: &HotRollConfig) -> HotRollState {
    let mut state = HotRollState::default();
    if rng.random::<f64>() >= config.p_per_hand {
        return state;
    }

    state.scheduled_phase = if rng.random::<f64>() < config.p_deal_given_roll {
        Some(Phase::Deal)
    } else {
        Some(Phase::Draw)
    };
    state
}

/// Roll 2d6 if the roll is scheduled for `phase` and hasn't happened yet.
///
/// Returns the multiplier, 2 to 12, when the dice were rolled. The rng
/// is only touched when they are.
pub fn maybe_trigger<R: Rng + ?Sized>(
    rng: &mut R,
    state: &mut HotRollState,
    phase: Phase,
) -> Option<u8> {
    if state.multiplier.is_some() || state.scheduled_phase != Some(phase) {
        return None;
    }

    let roll = rng.random_range(1..=6u8) + rng.random_range(1..=6u8);
    state.multiplier = Some(roll);
    Some(roll)
}

/// With chance `p_roll` the payout is multiplied by 2d6, otherwise by one.
/// 2d6 averages seven, so the expectation is `1 + 6 * p_roll`.
///
/// ```
/// use rs_video_poker::hot_roll::expected_multiplier;
///
/// assert_eq!(1.0, expected_multiplier(0.0));
/// assert_eq!(7.0, expected_multiplier(1.0));
/// ```
pub fn expected_multiplier(p_roll: f64) -> f64 {
    1.0 + 6.0 * p_roll
}

#[cfg(test)]
mod tests {
    use approx::assert_relative_eq;
    use rand::{SeedableRng, rngs::StdRng};

    use super::*;

    #[test]
    fn test_default_expected_multiplier() {
        assert_relative_eq!(2.0, HotRollConfig::default().expected_multiplier());
    }

    #[test]
    fn test_never_and_always() {
        let mut rng = StdRng::seed_from_u64(42);
        let never = HotRollConfig {
            p_per_hand: 0.0,
            ..HotRollConfig::default()
        };
        let always_deal = HotRollConfig {
            p_per_hand: 1.0,
            p_deal_given_roll: 1.0,
        };
        for _ in 0..100 {
            assert_eq!(None, schedule(&mut rng, &never).scheduled_phase);
            assert_eq!(
                Some(Phase::Deal),
                schedule(&mut rng, &always_deal).scheduled_phase
            );
        }
    }

    #[test]
    fn test_triggers_once_in_scheduled_phase() {
        let mut rng = StdRng::seed_from_u64(1);
        let mut state = HotRollState {
            scheduled_phase: Some(Phase::Draw),
            multiplier: None,
        };
        assert_eq!(None, maybe_trigger(&mut rng, &mut state, Phase::Deal));
        let roll = maybe_trigger(&mut rng, &mut state, Phase::Draw).unwrap();
        assert!((2..=12).contains(&roll));
        assert_eq!(Some(roll), state.multiplier);
        assert_eq!(roll, state.payout_multiplier());
        assert_eq!(None, maybe_trigger(&mut rng, &mut state, Phase::Draw));
    }

    #[test]
    fn test_unscheduled_never_triggers() {
        let mut rng = StdRng::seed_from_u64(1);
        let mut state = HotRollState::default();
        assert_eq!(None, maybe_trigger(&mut rng, &mut state, Phase::Deal));
        assert_eq!(None, maybe_trigger(&mut rng, &mut state, Phase::Draw));
        assert_eq!(1, state.payout_multiplier());
    }

    #[test]
    fn test_long_run_average() {
        let mut rng = StdRng::seed_from_u64(7);
        let config = HotRollConfig::default();
        let hands = 200_000;
        let mut total: u64 = 0;
        for _ in 0..hands {
            let mut state = schedule(&mut rng, &config);
            maybe_trigger(&mut rng, &mut state, Phase::Deal);
            maybe_trigger(&mut rng, &mut state, Phase::Draw);
            total += u64::from(state.payout_multiplier());
        }
        let average = total as f64 / f64::from(hands);
        assert_relative_eq!(config.expected_multiplier(), average, epsilon = 0.03);
    }
}
