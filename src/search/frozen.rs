use std::collections::BTreeMap;

use rand::{SeedableRng, rngs::StdRng};
use serde::Serialize;

use super::sampler::draw_k;
use crate::core::{Deck, Hand, HoldMask, VideoPokerError};
use crate::eval::Evaluator;
use crate::paytable::PayoutSchedule;

/// What happened when one hand was played out with one fixed hold many
/// times over.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FrozenReport<C: Ord> {
    pub hand: Hand,
    pub trials: u64,
    pub hold_mask: HoldMask,
    pub held_indices: Vec<usize>,
    pub avg_payout: f64,
    /// `avg_payout - bet_per_hand`
    pub avg_net: f64,
    /// How often each final category came up.
    pub category_counts: BTreeMap<C, u64>,
}

/// Play `initial` with `hold_mask` `trials` times, drawing the discarded
/// positions from the 47 unseen cards.
///
/// Each trial pays `units * bet_per_hand`. With zero trials the averages
/// are zero and `avg_net` is `-bet_per_hand`.
///
/// ```
/// use rs_video_poker::core::{Hand, HoldMask};
/// use rs_video_poker::eval::{Ruleset, StandardCategory, StandardEvaluator};
/// use rs_video_poker::paytable::PayTable;
/// use rs_video_poker::search::frozen_ev;
///
/// let schedule = PayTable::builtin(Ruleset::Standard)
///     .unwrap()
///     .schedule::<StandardCategory>();
/// let hand: Hand = "AS KS QS JS TS".parse().unwrap();
/// let report = frozen_ev(&schedule, &StandardEvaluator, &hand, HoldMask::ALL, 10, 1, 1).unwrap();
/// assert_eq!(800.0, report.avg_payout);
/// assert_eq!(799.0, report.avg_net);
/// assert_eq!(Some(&10), report.category_counts.get(&StandardCategory::RoyalFlush));
/// ```
pub fn frozen_ev<E: Evaluator>(
    schedule: &PayoutSchedule<E::Category>,
    evaluator: &E,
    initial: &Hand,
    hold_mask: HoldMask,
    trials: u64,
    bet_per_hand: u32,
    seed: u64,
) -> Result<FrozenReport<E::Category>, VideoPokerError> {
    let mut rng = StdRng::seed_from_u64(seed);
    let deck = Deck::excluding(initial.cards());
    let draw_positions = hold_mask.draw_positions();
    let k = draw_positions.len();

    let mut fin = *initial.as_array();
    let mut drawn = [fin[0]; 5];
    let mut total_payout: u64 = 0;
    let mut category_counts = BTreeMap::new();
    for _ in 0..trials {
        draw_k(&mut rng, deck.remaining(), &mut drawn[..k])?;
        for (pos, card) in draw_positions.iter().zip(drawn.iter()) {
            fin[*pos] = *card;
        }

        let category = evaluator.classify(&fin);
        *category_counts.entry(category).or_insert(0) += 1;
        total_payout += u64::from(schedule.units(category)) * u64::from(bet_per_hand);
    }

    let avg_payout = if trials == 0 {
        0.0
    } else {
        total_payout as f64 / trials as f64
    };

    Ok(FrozenReport {
        hand: *initial,
        trials,
        hold_mask,
        held_indices: hold_mask.indices(),
        avg_payout,
        avg_net: avg_payout - f64::from(bet_per_hand),
        category_counts,
    })
}
