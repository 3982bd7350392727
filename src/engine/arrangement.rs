use super::combinatorics::k_subsets;
use crate::scoring::{Pair, ScoreTable};
use crate::tiles::Tile;
use serde::Serialize;

pub const HAND_SIZE: usize = 4;

/// Sorted tile identities of a hand; equal for any ordering of the same
/// multiset.
pub type HandKey = [Tile; HAND_SIZE];

pub fn hand_key(tiles: &[Tile; HAND_SIZE]) -> HandKey {
    let mut key = *tiles;
    key.sort_unstable();
    key
}

/// A split of four tiles into a front pair and a back pair, with both pair
/// scores resolved.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Arrangement {
    pub front: Pair,
    pub back: Pair,
    pub front_score: u32,
    pub back_score: u32,
}

impl Arrangement {
    pub fn new(table: &ScoreTable, front: Pair, back: Pair) -> Self {
        Self {
            front,
            back,
            front_score: table.pair_score(front),
            back_score: table.pair_score(back),
        }
    }

    /// Back pair must score at least as much as the front pair.
    pub fn is_legal(&self) -> bool {
        self.back_score >= self.front_score
    }
}

/// Every legal front/back split of `tiles`, duplicates collapsed.
///
/// Tiles are canonicalised first so the result depends only on the multiset.
/// The count is between 1 and 6: each of the three pairings is legal in at
/// least one orientation, and in both when the pair scores tie.
pub fn legal_arrangements(table: &ScoreTable, tiles: &[Tile; HAND_SIZE]) -> Vec<Arrangement> {
    let key = hand_key(tiles);
    let indices: [usize; HAND_SIZE] = [0, 1, 2, 3];
    let mut legal: Vec<Arrangement> = Vec::with_capacity(6);

    for front_idx in k_subsets(&indices, 2) {
        let mut back_idx = indices.iter().filter(|i| !front_idx.contains(*i));
        let (Some(&b0), Some(&b1)) = (back_idx.next(), back_idx.next()) else {
            continue;
        };

        let front = Pair::new(key[front_idx[0]], key[front_idx[1]]);
        let back = Pair::new(key[b0], key[b1]);
        let candidate = Arrangement::new(table, front, back);

        if candidate.is_legal() && !legal.contains(&candidate) {
            legal.push(candidate);
        }
    }

    legal
}
