//! rs_video_poker is a library for video poker research.
//!
//! It classifies five card hands under jacks or better, deuces wild and
//! deuces wild bonus rules, finds the hold with the best expected value
//! by exact enumeration or by Monte Carlo sampling, and simulates long
//! runs of play with any hold strategy.
//!
//! ```
//! use rs_video_poker::core::{Hand, HoldMask};
//! use rs_video_poker::eval::{Evaluator, Ruleset, StandardCategory, StandardEvaluator};
//! use rs_video_poker::paytable::PayTable;
//! use rs_video_poker::strategy::{HoldStrategy, RiffStrategy};
//!
//! let hand: Hand = "KH KD 7C 3S 9H".parse().unwrap();
//! assert_eq!(
//!     StandardCategory::JacksOrBetter,
//!     StandardEvaluator.evaluate_hand(&hand)
//! );
//!
//! let table = PayTable::builtin(Ruleset::Standard).unwrap();
//! assert_eq!(9, table.payout_for("full_house"));
//!
//! let mask = RiffStrategy::new().choose_hold(&hand).unwrap();
//! assert_eq!(HoldMask::from_indices(&[0, 1]).unwrap(), mask);
//! ```

/// Allow all the core card functionality to be used
/// externally. Everything in core is agnostic to the ruleset.
pub mod core;
/// Hand classification for every supported ruleset.
pub mod eval;
/// The Hot Roll dice bonus.
pub mod hot_roll;
/// Paytables map categories to payouts.
pub mod paytable;
/// Best hold search.
pub mod search;
/// Simulate long runs of play.
pub mod sim;
/// Ways to decide what to hold.
pub mod strategy;
