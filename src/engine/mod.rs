pub mod arrangement;
pub mod combinatorics;
pub mod dominance;
pub mod outcome;

pub use self::arrangement::{hand_key, legal_arrangements, Arrangement, HandKey, HAND_SIZE};
pub use self::dominance::filter_dominated;
pub use self::outcome::{arrangement_outcome, OutcomeRates, WeightedArrangement};

use self::combinatorics::k_subsets_iter;
use crate::config::AnalysisConfig;
use crate::error::{TgResult, TienGowError};
use crate::scoring::{Pair, PairNames, ScoreTable};
use crate::tiles::{format_tiles, Deck, Tile};
use fnv::FnvHashMap;
use rayon::prelude::*;
use serde::Serialize;
use std::sync::{PoisonError, RwLock};
use tracing::{debug, info, warn};

/// One legal arrangement of the analysed hand with its statistics against
/// the full opponent field.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ArrangementStats {
    pub front: Pair,
    pub back: Pair,
    pub front_score: u32,
    pub back_score: u32,
    pub front_win_rate: f64,
    pub back_win_rate: f64,
    pub win_prob: f64,
    pub tie_prob: f64,
    pub lose_prob: f64,
    pub expected_value: f64,
}

impl ArrangementStats {
    pub fn new(arrangement: &Arrangement, rates: OutcomeRates) -> Self {
        Self {
            front: arrangement.front,
            back: arrangement.back,
            front_score: arrangement.front_score,
            back_score: arrangement.back_score,
            front_win_rate: rates.front_win_rate,
            back_win_rate: rates.back_win_rate,
            win_prob: rates.win,
            tie_prob: rates.tie,
            lose_prob: rates.lose,
            expected_value: rates.expected_value,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AnalysisReport {
    pub best: ArrangementStats,
    /// Ranked by expected value, dominated arrangements removed.
    pub all: Vec<ArrangementStats>,
    /// Legal arrangements evaluated before dominance filtering.
    pub evaluated: usize,
    pub pool_size: usize,
    pub opponent_hands: usize,
    pub opponent_arrangements: usize,
}

/// Every possible opponent hand from a pool, flattened into weighted
/// arrangements. Each hand contributes a total weight of 1.
#[derive(Debug, Clone, Default)]
pub struct OpponentField {
    pub arrangements: Vec<WeightedArrangement>,
    pub hand_count: usize,
}

impl OpponentField {
    pub fn total_weight(&self) -> f64 {
        self.arrangements.iter().map(|w| w.weight).sum()
    }
}

/// The analysis engine. Owns the score table (immutable) and the per-hand
/// arrangement cache (filled on miss, never invalidated), so one instance can
/// be shared across threads and calls.
pub struct Analyzer {
    table: ScoreTable,
    names: PairNames,
    deck: Deck,
    config: AnalysisConfig,
    arrangement_cache: RwLock<FnvHashMap<HandKey, Vec<Arrangement>>>,
}

impl Analyzer {
    pub fn new(table: ScoreTable) -> Self {
        info!(
            "Analyzer ready: {} scored pairs cached",
            table.scored_pair_count()
        );
        Self {
            table,
            names: PairNames::default(),
            deck: Deck::standard(),
            config: AnalysisConfig::default(),
            arrangement_cache: RwLock::new(FnvHashMap::default()),
        }
    }

    pub fn with_pair_names(mut self, names: PairNames) -> Self {
        self.names = names;
        self
    }

    /// Replaces the deck. Cached arrangements stay valid: they depend only on
    /// the score table.
    pub fn with_deck(mut self, deck: Deck) -> Self {
        self.deck = deck;
        self
    }

    pub fn with_config(mut self, config: AnalysisConfig) -> Self {
        self.config = config;
        self
    }

    pub fn table(&self) -> &ScoreTable {
        &self.table
    }

    pub fn pair_names(&self) -> &PairNames {
        &self.names
    }

    pub fn deck(&self) -> &Deck {
        &self.deck
    }

    /// Memoised [`legal_arrangements`], keyed by the sorted hand.
    pub fn legal_arrangements(&self, tiles: &[Tile; HAND_SIZE]) -> Vec<Arrangement> {
        let key = hand_key(tiles);

        if let Some(hit) = self
            .arrangement_cache
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .get(&key)
        {
            return hit.clone();
        }

        let computed = legal_arrangements(&self.table, &key);
        self.arrangement_cache
            .write()
            .unwrap_or_else(PoisonError::into_inner)
            .entry(key)
            .or_insert_with(|| computed.clone());
        computed
    }

    pub fn cached_hand_shapes(&self) -> usize {
        self.arrangement_cache
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .len()
    }

    pub fn remaining_pool(&self, hand: &[Tile], known: &[Tile]) -> TgResult<Vec<Tile>> {
        self.deck.remaining(hand, known, self.config.pool_policy)
    }

    /// Enumerates every 4-tile hand of `pool` (by position) and weights each
    /// legal arrangement by 1 / (that hand's legal arrangement count).
    pub fn opponent_field(&self, pool: &[Tile]) -> OpponentField {
        let mut field = OpponentField::default();

        for combo in k_subsets_iter(pool, HAND_SIZE) {
            let Ok(four) = <[Tile; HAND_SIZE]>::try_from(combo.as_slice()) else {
                continue;
            };
            let legal = self.legal_arrangements(&four);
            if legal.is_empty() {
                warn!("Opponent hand {} has no legal split", format_tiles(&four));
                continue;
            }

            let weight = 1.0 / legal.len() as f64;
            field.hand_count += 1;
            field
                .arrangements
                .extend(legal.into_iter().map(|arrangement| WeightedArrangement {
                    arrangement,
                    weight,
                }));
        }

        field
    }

    /// Exhaustive analysis of `hand` given the tiles in `known`.
    pub fn analyze(&self, hand: &[Tile], known: &[Tile]) -> TgResult<AnalysisReport> {
        let hand4 = <[Tile; HAND_SIZE]>::try_from(hand).map_err(|_| {
            TienGowError::InvalidHandSize {
                expected: HAND_SIZE,
                actual: hand.len(),
            }
        })?;

        info!("Analyzing hand: {}", format_tiles(hand));

        let mine = self.legal_arrangements(&hand4);
        if mine.is_empty() {
            return Err(TienGowError::AnalysisUnavailable(format!(
                "no legal split for {}",
                format_tiles(hand)
            )));
        }

        let pool = self.remaining_pool(hand, known)?;
        if known.is_empty() {
            info!("First half: {} unseen tiles", pool.len());
        } else {
            info!(
                "Second half: {} tiles known, {} unseen",
                hand.len() + known.len(),
                pool.len()
            );
        }

        let field = self.opponent_field(&pool);
        if field.hand_count == 0 {
            warn!("Pool of {} tiles admits no opponent hand", pool.len());
        }
        info!(
            "Opponent field: {} hands, {} weighted arrangements",
            field.hand_count,
            field.arrangements.len()
        );

        let evaluate = |a: &Arrangement| {
            ArrangementStats::new(a, arrangement_outcome(a, &field.arrangements))
        };
        let mut results: Vec<ArrangementStats> = if self.config.parallel {
            mine.par_iter().map(evaluate).collect()
        } else {
            mine.iter().map(evaluate).collect()
        };

        results.sort_by(|a, b| b.expected_value.total_cmp(&a.expected_value));

        let filtered = filter_dominated(&results);
        let best = filtered.first().cloned().ok_or_else(|| {
            TienGowError::Internal("dominance filter removed every arrangement".to_string())
        })?;

        info!(
            "Analysis complete. Best EV: {:.3} ({} kept of {})",
            best.expected_value,
            filtered.len(),
            results.len()
        );
        debug!("Arrangement cache holds {} hand shapes", self.cached_hand_shapes());

        Ok(AnalysisReport {
            best,
            all: filtered,
            evaluated: results.len(),
            pool_size: pool.len(),
            opponent_hands: field.hand_count,
            opponent_arrangements: field.arrangements.len(),
        })
    }
}
