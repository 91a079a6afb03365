//! Play a lot of hands with one strategy and add up what it wins.
//!
//! Every hand shuffles a fresh deck, deals five cards, asks the strategy
//! what to hold, replaces the rest in position order off the same deck,
//! and settles the final hand against the paytable. All randomness comes
//! from one `StdRng` seeded from the config, so a run is reproducible.
use std::collections::BTreeMap;

use rand::{SeedableRng, rngs::StdRng};
use serde::Serialize;
use tracing::{event, trace_span};

use crate::core::{Card, Deck, Hand, VideoPokerError};
use crate::eval::Evaluator;
use crate::hot_roll::{self, HotRollConfig, Phase};
use crate::paytable::PayoutSchedule;
use crate::strategy::HoldStrategy;

/// Knobs for a simulation run.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SimConfig {
    pub hands: u64,
    /// Coins bet on every hand, and the multiple paytable units are paid
    /// at. Ignored with Hot Roll.
    pub bet_per_hand: u32,
    pub seed: u64,
    /// Log the first this many hands at INFO.
    pub trace_hands: u64,
    /// Play with the Hot Roll bonus.
    pub hot_roll: Option<HotRollConfig>,
    /// What a Hot Roll hand costs.
    pub hot_roll_bet_cost: u32,
    /// Coins the paytable is applied to on a Hot Roll hand.
    pub hot_roll_paytable_bet: u32,
}

impl Default for SimConfig {
    fn default() -> Self {
        Self {
            hands: 100_000,
            bet_per_hand: 1,
            seed: 42,
            trace_hands: 0,
            hot_roll: None,
            hot_roll_bet_cost: 10,
            hot_roll_paytable_bet: 5,
        }
    }
}

/// The totals of a simulation run.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SimReport<C: Ord> {
    pub hands: u64,
    pub total_bet: u64,
    pub total_payout: u64,
    pub total_net: i64,
    /// `total_net / hands`
    pub ev_per_hand: f64,
    /// `total_payout / total_bet`, as a fraction.
    pub return_pct: f64,
    /// Hands where the Hot Roll dice came out.
    pub hot_rolls: u64,
    /// How often each final category came up.
    pub category_counts: BTreeMap<C, u64>,
}

/// Simulate `config.hands` hands played by `strategy`.
///
/// ```
/// use rs_video_poker::eval::{Ruleset, StandardCategory, StandardEvaluator};
/// use rs_video_poker::paytable::PayTable;
/// use rs_video_poker::sim::{SimConfig, simulate};
/// use rs_video_poker::strategy::HoldAll;
///
/// let schedule = PayTable::builtin(Ruleset::Standard)
///     .unwrap()
///     .schedule::<StandardCategory>();
/// let config = SimConfig {
///     hands: 1_000,
///     ..SimConfig::default()
/// };
/// let report = simulate(&schedule, &StandardEvaluator, &mut HoldAll, &config).unwrap();
/// assert_eq!(1_000, report.hands);
/// assert_eq!(1_000, report.category_counts.values().sum::<u64>());
/// ```
pub fn simulate<E: Evaluator, S: HoldStrategy + ?Sized>(
    schedule: &PayoutSchedule<E::Category>,
    evaluator: &E,
    strategy: &mut S,
    config: &SimConfig,
) -> Result<SimReport<E::Category>, VideoPokerError> {
    let span = trace_span!("simulate");
    let _enter = span.enter();

    let mut rng = StdRng::seed_from_u64(config.seed);
    let mut deck = Deck::new();

    let mut total_bet: u64 = 0;
    let mut total_payout: u64 = 0;
    let mut hot_rolls: u64 = 0;
    let mut category_counts = BTreeMap::new();

    for hand_number in 0..config.hands {
        let mut roll = config
            .hot_roll
            .as_ref()
            .map(|cfg| hot_roll::schedule(&mut rng, cfg));

        deck.shuffle(&mut rng);
        let mut dealt = [Card::from(0); 5];
        for slot in dealt.iter_mut() {
            *slot = deck.deal()?;
        }
        let hand = Hand::from_dealt(dealt);
        if let Some(state) = roll.as_mut() {
            hot_roll::maybe_trigger(&mut rng, state, Phase::Deal);
        }

        let mask = strategy.choose_hold(&hand)?;
        let mut fin = dealt;
        for pos in mask.draw_positions() {
            fin[pos] = deck.deal()?;
        }
        if let Some(state) = roll.as_mut() {
            hot_roll::maybe_trigger(&mut rng, state, Phase::Draw);
        }

        let category = evaluator.classify(&fin);
        let units = u64::from(schedule.units(category));
        let (bet, payout) = match roll {
            Some(state) => {
                if state.multiplier.is_some() {
                    hot_rolls += 1;
                }
                (
                    u64::from(config.hot_roll_bet_cost),
                    units
                        * u64::from(config.hot_roll_paytable_bet)
                        * u64::from(state.payout_multiplier()),
                )
            }
            None => (
                u64::from(config.bet_per_hand),
                units * u64::from(config.bet_per_hand),
            ),
        };
        total_bet += bet;
        total_payout += payout;
        *category_counts.entry(category).or_insert(0) += 1;

        if hand_number < config.trace_hands {
            event!(
                tracing::Level::INFO,
                hand_number,
                dealt = %hand,
                hold = %mask,
                result = %Hand::from_dealt(fin),
                category = %category,
                payout,
                "hand"
            );
        }
    }

    let total_net = total_payout as i64 - total_bet as i64;
    let ev_per_hand = if config.hands == 0 {
        0.0
    } else {
        total_net as f64 / config.hands as f64
    };
    let return_pct = if total_bet == 0 {
        0.0
    } else {
        total_payout as f64 / total_bet as f64
    };

    event!(
        tracing::Level::INFO,
        hands = config.hands,
        total_bet,
        total_payout,
        total_net,
        ev_per_hand,
        return_pct,
        hot_rolls,
        "simulation finished"
    );

    Ok(SimReport {
        hands: config.hands,
        total_bet,
        total_payout,
        total_net,
        ev_per_hand,
        return_pct,
        hot_rolls,
        category_counts,
    })
}
