use std::collections::HashMap;

use rand::{SeedableRng, rngs::StdRng};
use tracing::event;

use super::monte_carlo::best_hold_with_rng;
use super::{SearchConfig, exact_best_hold};
use crate::core::{CardBitSet, Hand, HoldMask, VideoPokerError};
use crate::eval::Evaluator;
use crate::paytable::PayoutSchedule;
use crate::strategy::HoldStrategy;

/// How `SearchStrategy` scores the hold masks.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SearchMethod {
    /// `trials_per_mask` sampled draws for every mask.
    #[default]
    MonteCarlo,
    /// Every possible draw.
    Exhaustive,
}

/// Play the hold with the best expected value.
///
/// Answers are cached by the set of dealt cards, so the same five cards
/// in any order are only searched once. What is cached is the set of
/// cards to hold, which is mapped back to positions for every hand.
///
/// Sampling for a hand is seeded from `config.seed` and the hand's cards,
/// and the search always sees the cards in canonical order. The hold for a
/// given set of cards doesn't depend on their order or on which hands were
/// played before it.
#[derive(Debug)]
pub struct SearchStrategy<E: Evaluator> {
    evaluator: E,
    schedule: PayoutSchedule<E::Category>,
    config: SearchConfig,
    method: SearchMethod,
    cache: HashMap<CardBitSet, CardBitSet>,
    hits: u64,
    misses: u64,
}

impl<E: Evaluator> SearchStrategy<E> {
    pub fn new(
        evaluator: E,
        schedule: PayoutSchedule<E::Category>,
        config: SearchConfig,
        method: SearchMethod,
    ) -> Self {
        Self {
            evaluator,
            schedule,
            config,
            method,
            cache: HashMap::new(),
            hits: 0,
            misses: 0,
        }
    }

    pub fn config(&self) -> &SearchConfig {
        &self.config
    }

    pub fn method(&self) -> SearchMethod {
        self.method
    }

    /// Number of distinct hands searched so far.
    pub fn cache_len(&self) -> usize {
        self.cache.len()
    }

    /// Cache hits and misses so far.
    pub fn cache_stats(&self) -> (u64, u64) {
        (self.hits, self.misses)
    }

    fn search(&self, key: CardBitSet, hand: &Hand) -> Result<CardBitSet, VideoPokerError> {
        let sorted = hand.sorted();
        let best = match self.method {
            SearchMethod::MonteCarlo => {
                let mut rng = StdRng::seed_from_u64(self.config.seed ^ key.bits());
                best_hold_with_rng(
                    &sorted,
                    &self.schedule,
                    &self.evaluator,
                    &self.config,
                    &mut rng,
                )?
            }
            SearchMethod::Exhaustive => {
                exact_best_hold(&sorted, &self.schedule, &self.evaluator, &self.config)?
            }
        };
        Ok(best.mask.held_cards(&sorted).into_iter().collect())
    }
}

impl<E: Evaluator> HoldStrategy for SearchStrategy<E> {
    fn choose_hold(&mut self, hand: &Hand) -> Result<HoldMask, VideoPokerError> {
        let key = hand.card_set();
        if let Some(held) = self.cache.get(&key) {
            self.hits += 1;
            event!(tracing::Level::TRACE, hand = %hand, "hold cache hit");
            return Ok(HoldMask::from_cards(hand, *held));
        }

        self.misses += 1;
        let held = self.search(key, hand)?;
        self.cache.insert(key, held);
        let mask = HoldMask::from_cards(hand, held);
        event!(
            tracing::Level::DEBUG,
            hand = %hand,
            hold = %mask,
            cached = self.cache.len(),
            "searched hold"
        );
        Ok(mask)
    }
}
