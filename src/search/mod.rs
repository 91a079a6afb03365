//! Hold decision search.
//!
//! Given a dealt hand every one of the 32 hold masks is scored by the
//! expected payout of the final hand, either exactly by walking every
//! possible draw or approximately by sampling a fixed number of draws per
//! mask. The best mask is the one with the strictly greatest EV, ties go
//! to the lowest mask.
//!
//! # Examples
//!
//! ```
//! use rs_video_poker::core::{Hand, HoldMask};
//! use rs_video_poker::eval::{Ruleset, StandardCategory, StandardEvaluator};
//! use rs_video_poker::paytable::PayTable;
//! use rs_video_poker::search::{SearchConfig, best_hold};
//!
//! let schedule = PayTable::builtin(Ruleset::Standard)
//!     .unwrap()
//!     .schedule::<StandardCategory>();
//! let hand: Hand = "AS KS QS JS TS".parse().unwrap();
//!
//! let best = best_hold(&hand, &schedule, &StandardEvaluator, &SearchConfig::default()).unwrap();
//! assert_eq!(HoldMask::ALL, best.mask);
//! assert_eq!(800.0, best.ev);
//! ```
mod cached;
mod exhaustive;
mod frozen;
mod monte_carlo;
mod sampler;

pub use self::cached::{SearchMethod, SearchStrategy};
pub use self::exhaustive::{exact_best_hold, exact_mask_evs};
pub use self::frozen::{FrozenReport, frozen_ev};
pub use self::monte_carlo::{best_hold, mask_evs};
pub use self::sampler::draw_k;

use crate::core::HoldMask;
use crate::hot_roll::HotRollConfig;

/// Knobs for the hold search.
#[derive(Debug, Clone, PartialEq, serde::Serialize)]
pub struct SearchConfig {
    /// Sampled draws per mask. Exact search ignores this.
    pub trials_per_mask: usize,
    /// Seed for the one RNG stream shared by all 32 masks. Exact search
    /// ignores this.
    pub seed: u64,
    /// Every payout is scaled by this. `1 + 6p` when Hot Roll is on.
    pub expected_multiplier: f64,
    /// Coins the paytable is applied to.
    pub paytable_bet: u32,
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            trials_per_mask: 200,
            seed: 42,
            expected_multiplier: 1.0,
            paytable_bet: 1,
        }
    }
}

impl SearchConfig {
    /// Weight payouts for a game with Hot Roll, the way the simulator
    /// settles them.
    ///
    /// ```
    /// use rs_video_poker::hot_roll::HotRollConfig;
    /// use rs_video_poker::search::SearchConfig;
    ///
    /// let config = SearchConfig::default().with_hot_roll(&HotRollConfig::default(), 5);
    /// assert_eq!(2.0, config.expected_multiplier);
    /// assert_eq!(5, config.paytable_bet);
    /// ```
    pub fn with_hot_roll(mut self, hot_roll: &HotRollConfig, paytable_bet: u32) -> Self {
        self.expected_multiplier = hot_roll.expected_multiplier();
        self.paytable_bet = paytable_bet;
        self
    }

    /// What one paytable unit is worth.
    pub(crate) fn unit_value(&self) -> f64 {
        f64::from(self.paytable_bet) * self.expected_multiplier
    }
}

/// The EV of holding `mask`.
#[derive(Debug, Clone, Copy, PartialEq, serde::Serialize)]
pub struct HoldEstimate {
    pub mask: HoldMask,
    pub ev: f64,
}

/// First mask with the strictly greatest EV.
pub(crate) fn pick_best(estimates: &[HoldEstimate]) -> HoldEstimate {
    estimates.iter().copied().fold(
        HoldEstimate {
            mask: HoldMask::NONE,
            ev: f64::NEG_INFINITY,
        },
        |best, e| if e.ev > best.ev { e } else { best },
    )
}
