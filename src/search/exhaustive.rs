use tracing::{event, trace_span};

use super::{HoldEstimate, SearchConfig, pick_best};
use crate::core::{CardIter, Deck, Hand, HoldMask, VideoPokerError, combinations};
use crate::eval::Evaluator;
use crate::paytable::PayoutSchedule;

/// Exact EV of every hold mask, `NONE` first.
///
/// Every combination of replacement cards from the 47 unseen cards is
/// evaluated, about 2.6 million hands in total, so this is much slower
/// than sampling. `trials_per_mask` and `seed` are ignored, the payout
/// weighting is not.
pub fn exact_mask_evs<E: Evaluator>(
    initial: &Hand,
    schedule: &PayoutSchedule<E::Category>,
    evaluator: &E,
    config: &SearchConfig,
) -> Result<Vec<HoldEstimate>, VideoPokerError> {
    let deck = Deck::excluding(initial.cards());
    let unit_value = config.unit_value();

    let mut estimates = Vec::with_capacity(32);
    for mask in HoldMask::all_masks() {
        let draw_positions = mask.draw_positions();
        let k = draw_positions.len();
        if k > deck.len() {
            return Err(VideoPokerError::InsufficientDeck {
                requested: k,
                remaining: deck.len(),
            });
        }

        let mut fin = *initial.as_array();
        let mut total_units: u64 = 0;
        for drawn in CardIter::new(deck.remaining(), k) {
            for (pos, card) in draw_positions.iter().zip(drawn.iter()) {
                fin[*pos] = *card;
            }
            total_units += u64::from(schedule.units(evaluator.classify(&fin)));
        }
        let outcomes = combinations(deck.len(), k);

        let ev = if outcomes == 0 {
            0.0
        } else {
            total_units as f64 * unit_value / outcomes as f64
        };
        estimates.push(HoldEstimate { mask, ev });
    }
    Ok(estimates)
}

/// The hold mask with the best exact EV. Same tie break as `best_hold`.
pub fn exact_best_hold<E: Evaluator>(
    initial: &Hand,
    schedule: &PayoutSchedule<E::Category>,
    evaluator: &E,
    config: &SearchConfig,
) -> Result<HoldEstimate, VideoPokerError> {
    let span = trace_span!("exact_best_hold");
    let _enter = span.enter();

    let estimates = exact_mask_evs(initial, schedule, evaluator, config)?;
    let best = pick_best(&estimates);
    event!(
        tracing::Level::DEBUG,
        hand = %initial,
        mask = %best.mask,
        ev = best.ev,
        "exact best hold"
    );
    Ok(best)
}

#[cfg(test)]
mod tests {
    use approx::assert_relative_eq;

    use super::*;
    use crate::eval::{Ruleset, StandardCategory, StandardEvaluator};
    use crate::paytable::PayTable;
    use crate::search::mask_evs;

    fn job() -> PayoutSchedule<StandardCategory> {
        PayTable::builtin(Ruleset::Standard)
            .unwrap()
            .schedule::<StandardCategory>()
    }

    #[test]
    fn test_four_to_a_flush() {
        // Hold four hearts, draw one. 9 of the 47 cards make the flush
        // and nothing else pays.
        let hand: Hand = "2H 5H 8H JH 4C".parse().unwrap();
        let evs = exact_mask_evs(&hand, &job(), &StandardEvaluator, &SearchConfig::default())
            .unwrap();
        let four_hearts = HoldMask::from_indices(&[0, 1, 2, 3]).unwrap();
        let ev = evs[usize::from(four_hearts.bits())].ev;
        // Plus three jacks that pair the held jack.
        assert_relative_eq!((9.0 * 6.0 + 3.0 * 1.0) / 47.0, ev);
    }

    #[test]
    fn test_pat_royal() {
        let hand: Hand = "AS KS QS JS TS".parse().unwrap();
        let best =
            exact_best_hold(&hand, &job(), &StandardEvaluator, &SearchConfig::default()).unwrap();
        assert_eq!(HoldMask::ALL, best.mask);
        assert_relative_eq!(800.0, best.ev);
    }

    #[test]
    fn test_high_pair_held() {
        let hand: Hand = "JS JD 3C 7H 9S".parse().unwrap();
        let best =
            exact_best_hold(&hand, &job(), &StandardEvaluator, &SearchConfig::default()).unwrap();
        assert_eq!(vec![0, 1], best.mask.indices());
    }

    #[test]
    fn test_monte_carlo_close_to_exact() {
        let hand: Hand = "JS JD 3C 7H 9S".parse().unwrap();
        let config = SearchConfig {
            trials_per_mask: 20_000,
            ..SearchConfig::default()
        };
        let pair = HoldMask::from_indices(&[0, 1]).unwrap();
        let idx = usize::from(pair.bits());

        let exact = exact_mask_evs(&hand, &job(), &StandardEvaluator, &config).unwrap();
        let sampled = mask_evs(&hand, &job(), &StandardEvaluator, &config).unwrap();
        assert_relative_eq!(exact[idx].ev, sampled[idx].ev, epsilon = 0.05);
    }
}
