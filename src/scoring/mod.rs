pub mod loader;

use crate::tiles::Tile;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;
use strum::{EnumCount, IntoEnumIterator};

/// Sparse two-level rankings as supplied by the data files:
/// `rankings[a][b]` is the score of the pair {a, b}. Either half may carry
/// the entry.
pub type Rankings = BTreeMap<Tile, BTreeMap<Tile, u32>>;

/// Two tiles as an unordered unit, stored in canonical (sorted) order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[serde(into = "[Tile; 2]")]
pub struct Pair {
    low: Tile,
    high: Tile,
}

impl Pair {
    pub fn new(a: Tile, b: Tile) -> Self {
        if a <= b {
            Self { low: a, high: b }
        } else {
            Self { low: b, high: a }
        }
    }

    pub fn tiles(&self) -> [Tile; 2] {
        [self.low, self.high]
    }
}

impl From<Pair> for [Tile; 2] {
    fn from(p: Pair) -> Self {
        p.tiles()
    }
}

impl fmt::Display for Pair {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}+{}", self.low, self.high)
    }
}

/// Display names keyed by pair score. Purely cosmetic.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PairNames(BTreeMap<u32, String>);

impl PairNames {
    pub fn new(names: BTreeMap<u32, String>) -> Self {
        Self(names)
    }

    /// Empty string when no name is registered for `score`.
    pub fn name_for(&self, score: u32) -> &str {
        self.0.get(&score).map(String::as_str).unwrap_or("")
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

/// Symmetric pair-score lookup. Every ordered combination of the 16 tiles is
/// resolved once at construction; queries are a single indexed read.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScoreTable {
    // FLATTENED (size = Tile::COUNT * Tile::COUNT), symmetric
    scores: Vec<u32>,
}

impl Default for ScoreTable {
    fn default() -> Self {
        Self::from_rankings(&Rankings::new())
    }
}

impl ScoreTable {
    /// When both `rankings[a][b]` and `rankings[b][a]` exist, the entry under
    /// the canonically lower tile wins.
    pub fn from_rankings(rankings: &Rankings) -> Self {
        let mut scores = vec![0u32; Tile::COUNT * Tile::COUNT];
        let mut resolved = vec![false; Tile::COUNT * Tile::COUNT];

        for a in Tile::iter() {
            for b in Tile::iter() {
                let idx = Self::idx(a, b);
                if resolved[idx] {
                    continue;
                }

                let score = lookup(rankings, a, b)
                    .or_else(|| lookup(rankings, b, a))
                    .unwrap_or(0);

                scores[idx] = score;
                scores[Self::idx(b, a)] = score;
                resolved[idx] = true;
                resolved[Self::idx(b, a)] = true;
            }
        }

        Self { scores }
    }

    /// Builds from `(a, b, score)` triples. Later duplicates of the same
    /// ordered cell overwrite earlier ones.
    pub fn from_entries<I>(entries: I) -> Self
    where
        I: IntoIterator<Item = (Tile, Tile, u32)>,
    {
        let mut rankings = Rankings::new();
        for (a, b, score) in entries {
            rankings.entry(a).or_default().insert(b, score);
        }
        Self::from_rankings(&rankings)
    }

    #[inline(always)]
    fn idx(a: Tile, b: Tile) -> usize {
        a.index() * Tile::COUNT + b.index()
    }

    /// Score of the unordered pair {a, b}; 0 when the tables carry no entry.
    #[inline(always)]
    pub fn score(&self, a: Tile, b: Tile) -> u32 {
        self.scores[Self::idx(a, b)]
    }

    #[inline(always)]
    pub fn pair_score(&self, pair: Pair) -> u32 {
        self.score(pair.low, pair.high)
    }

    /// Number of distinct unordered pairs with a non-zero score.
    pub fn scored_pair_count(&self) -> usize {
        Tile::iter()
            .flat_map(|a| Tile::iter().filter(move |&b| a <= b).map(move |b| (a, b)))
            .filter(|&(a, b)| self.score(a, b) > 0)
            .count()
    }

    pub fn pair_name<'a>(&self, names: &'a PairNames, pair: Pair) -> &'a str {
        names.name_for(self.pair_score(pair))
    }

    /// `"name(a+b)"` when the score has a registered name, else `"a+b"`.
    pub fn format_pair(&self, names: &PairNames, pair: Pair) -> String {
        match self.pair_name(names, pair) {
            "" => pair.to_string(),
            name => format!("{}({})", name, pair),
        }
    }
}

fn lookup(rankings: &Rankings, a: Tile, b: Tile) -> Option<u32> {
    rankings.get(&a).and_then(|row| row.get(&b)).copied()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pair_is_canonical() {
        assert_eq!(Pair::new(Tile::Hou, Tile::Tian), Pair::new(Tile::Tian, Tile::Hou));
        assert_eq!(Pair::new(Tile::Hou, Tile::Tian).tiles(), [Tile::Tian, Tile::Hou]);
    }

    #[test]
    fn test_reverse_half_is_found() {
        let table = ScoreTable::from_entries([(Tile::Za5, Tile::Di, 12)]);
        assert_eq!(table.score(Tile::Di, Tile::Za5), 12);
        assert_eq!(table.score(Tile::Za5, Tile::Di), 12);
        assert_eq!(table.score(Tile::Di, Tile::Di), 0);
    }

    #[test]
    fn test_lower_tile_entry_wins_on_conflict() {
        let table = ScoreTable::from_entries([(Tile::Di, Tile::Tian, 5), (Tile::Tian, Tile::Di, 9)]);
        assert_eq!(table.score(Tile::Di, Tile::Tian), 9);
    }

    #[test]
    fn test_format_pair() {
        let table = ScoreTable::from_entries([(Tile::Tian, Tile::Tian, 68)]);
        let names = PairNames::new(BTreeMap::from([(68, "天對".to_string())]));
        assert_eq!(
            table.format_pair(&names, Pair::new(Tile::Tian, Tile::Tian)),
            "天對(天+天)"
        );
        assert_eq!(table.format_pair(&names, Pair::new(Tile::Tian, Tile::Di)), "天+地");
    }
}
