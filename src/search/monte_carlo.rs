use rand::{Rng, SeedableRng, rngs::StdRng};
use tracing::{event, trace_span};

use super::sampler::draw_k;
use super::{HoldEstimate, SearchConfig, pick_best};
use crate::core::{Card, Deck, Hand, HoldMask, VideoPokerError};
use crate::eval::Evaluator;
use crate::paytable::PayoutSchedule;

/// Sampled EV of one mask. `rng` is advanced by every draw.
///
/// Holding all five is the exact payout of the hand and draws nothing.
pub(crate) fn sample_mask_ev<E: Evaluator, R: Rng + ?Sized>(
    initial: &Hand,
    mask: HoldMask,
    remaining: &[Card],
    schedule: &PayoutSchedule<E::Category>,
    evaluator: &E,
    config: &SearchConfig,
    rng: &mut R,
) -> Result<f64, VideoPokerError> {
    let trials = config.trials_per_mask;
    if trials == 0 {
        return Ok(0.0);
    }
    let unit_value = config.unit_value();

    let draw_positions = mask.draw_positions();
    let k = draw_positions.len();
    if k == 0 {
        let units = schedule.units(evaluator.evaluate_hand(initial));
        return Ok(f64::from(units) * unit_value);
    }

    // Held positions never change so only the drawn slots get rewritten.
    let mut fin = *initial.as_array();
    let mut drawn = [fin[0]; 5];
    let mut total_units: u64 = 0;
    for _ in 0..trials {
        draw_k(rng, remaining, &mut drawn[..k])?;
        for (pos, card) in draw_positions.iter().zip(drawn.iter()) {
            fin[*pos] = *card;
        }
        total_units += u64::from(schedule.units(evaluator.classify(&fin)));
    }

    Ok(total_units as f64 * unit_value / trials as f64)
}

/// Sampled EV of all 32 masks in ascending order, consuming `rng` in mask
/// order.
pub(crate) fn sample_mask_evs<E: Evaluator, R: Rng + ?Sized>(
    initial: &Hand,
    schedule: &PayoutSchedule<E::Category>,
    evaluator: &E,
    config: &SearchConfig,
    rng: &mut R,
) -> Result<Vec<HoldEstimate>, VideoPokerError> {
    let deck = Deck::excluding(initial.cards());
    HoldMask::all_masks()
        .map(|mask| {
            sample_mask_ev(
                initial,
                mask,
                deck.remaining(),
                schedule,
                evaluator,
                config,
                rng,
            )
            .map(|ev| HoldEstimate { mask, ev })
        })
        .collect()
}

/// Monte Carlo EV of every hold mask, `NONE` first.
///
/// All masks share one `StdRng` seeded with `config.seed`, so the same
/// hand and config always give the same numbers.
pub fn mask_evs<E: Evaluator>(
    initial: &Hand,
    schedule: &PayoutSchedule<E::Category>,
    evaluator: &E,
    config: &SearchConfig,
) -> Result<Vec<HoldEstimate>, VideoPokerError> {
    let mut rng = StdRng::seed_from_u64(config.seed);
    sample_mask_evs(initial, schedule, evaluator, config, &mut rng)
}

/// Find the hold mask with the best sampled EV.
///
/// The first mask with the strictly greatest EV wins, so if nothing
/// beats discarding everything the answer is `HoldMask::NONE`.
pub fn best_hold<E: Evaluator>(
    initial: &Hand,
    schedule: &PayoutSchedule<E::Category>,
    evaluator: &E,
    config: &SearchConfig,
) -> Result<HoldEstimate, VideoPokerError> {
    let mut rng = StdRng::seed_from_u64(config.seed);
    best_hold_with_rng(initial, schedule, evaluator, config, &mut rng)
}

pub(crate) fn best_hold_with_rng<E: Evaluator, R: Rng + ?Sized>(
    initial: &Hand,
    schedule: &PayoutSchedule<E::Category>,
    evaluator: &E,
    config: &SearchConfig,
    rng: &mut R,
) -> Result<HoldEstimate, VideoPokerError> {
    let span = trace_span!("best_hold");
    let _enter = span.enter();

    let estimates = sample_mask_evs(initial, schedule, evaluator, config, rng)?;
    let best = pick_best(&estimates);
    event!(
        tracing::Level::DEBUG,
        hand = %initial,
        mask = %best.mask,
        ev = best.ev,
        trials = config.trials_per_mask,
        "best hold"
    );
    Ok(best)
}
