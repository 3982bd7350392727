use crate::config::PoolPolicy;
use crate::error::{TgResult, TienGowError};
use serde::de::{self, Deserializer};
use serde::{Deserialize, Serialize, Serializer};
use strum::IntoEnumIterator;
use strum_macros::{Display, EnumCount, EnumIter, EnumString};
use tracing::warn;

/// The 16 tile identities. Declaration order is the canonical sort order used
/// for pair keys and hand keys.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    PartialOrd,
    Ord,
    Hash,
    EnumIter,
    EnumString,
    EnumCount,
    Display,
)]
#[strum(ascii_case_insensitive)]
pub enum Tile {
    #[strum(to_string = "天", serialize = "tian")]
    Tian,
    #[strum(to_string = "地", serialize = "di")]
    Di,
    #[strum(to_string = "人", serialize = "ren")]
    Ren,
    #[strum(to_string = "和", serialize = "he")]
    He,
    #[strum(to_string = "長10", serialize = "chang10")]
    Chang10,
    #[strum(to_string = "長6", serialize = "chang6")]
    Chang6,
    #[strum(to_string = "長4", serialize = "chang4")]
    Chang4,
    #[strum(to_string = "短11", serialize = "duan11")]
    Duan11,
    #[strum(to_string = "短10", serialize = "duan10")]
    Duan10,
    #[strum(to_string = "短7", serialize = "duan7")]
    Duan7,
    #[strum(to_string = "短6", serialize = "duan6")]
    Duan6,
    #[strum(to_string = "雜9", serialize = "za9")]
    Za9,
    #[strum(to_string = "雜8", serialize = "za8")]
    Za8,
    #[strum(to_string = "雜7", serialize = "za7")]
    Za7,
    #[strum(to_string = "猴", serialize = "hou")]
    Hou,
    #[strum(to_string = "雜5", serialize = "za5")]
    Za5,
}

impl Tile {
    #[inline(always)]
    pub fn index(self) -> usize {
        self as usize
    }
}

impl Serialize for Tile {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for Tile {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = String::deserialize(deserializer)?;
        raw.parse()
            .map_err(|_| de::Error::custom(format!("unknown tile '{}'", raw)))
    }
}

/// Parses a tile list such as `"天,天,地,人"` or `"tian tian di ren"`.
pub fn parse_tiles(input: &str) -> TgResult<Vec<Tile>> {
    input
        .split(|c: char| c == ',' || c.is_whitespace())
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(|s| {
            s.parse::<Tile>()
                .map_err(|_| TienGowError::UnknownTile(s.to_string()))
        })
        .collect()
}

pub fn format_tiles(tiles: &[Tile]) -> String {
    tiles
        .iter()
        .map(|t| t.to_string())
        .collect::<Vec<_>>()
        .join(", ")
}

/// The physical deck. Never mutated once built; pools are derived copies.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Deck {
    tiles: Vec<Tile>,
}

impl Default for Deck {
    fn default() -> Self {
        Self::standard()
    }
}

impl Deck {
    pub const COPIES_PER_TILE: usize = 2;

    /// 32 tiles: every identity once, then every identity again.
    pub fn standard() -> Self {
        let tiles = (0..Self::COPIES_PER_TILE)
            .flat_map(|_| Tile::iter())
            .collect();
        Self { tiles }
    }

    /// Arbitrary deck composition, mostly for reduced test decks.
    pub fn from_tiles(tiles: Vec<Tile>) -> Self {
        Self { tiles }
    }

    pub fn tiles(&self) -> &[Tile] {
        &self.tiles
    }

    pub fn len(&self) -> usize {
        self.tiles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tiles.is_empty()
    }

    /// Removes one physical instance per listed tile, hand first, then known
    /// cards. Under `PoolPolicy::Lenient` a missing tile is skipped.
    pub fn remaining(
        &self,
        hand: &[Tile],
        known: &[Tile],
        policy: PoolPolicy,
    ) -> TgResult<Vec<Tile>> {
        let mut pool = self.tiles.clone();

        for &tile in hand.iter().chain(known.iter()) {
            match pool.iter().position(|&t| t == tile) {
                Some(idx) => {
                    pool.remove(idx);
                }
                None => match policy {
                    PoolPolicy::Lenient => {
                        warn!("Tile '{}' already exhausted in pool; ignoring", tile);
                    }
                    PoolPolicy::Strict => return Err(TienGowError::PoolUnderflow(tile)),
                },
            }
        }

        Ok(pool)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use strum::EnumCount;

    #[test]
    fn test_standard_deck_has_two_of_each() {
        let deck = Deck::standard();
        assert_eq!(deck.len(), Tile::COUNT * Deck::COPIES_PER_TILE);
        for tile in Tile::iter() {
            let n = deck.tiles().iter().filter(|&&t| t == tile).count();
            assert_eq!(n, 2, "{} should appear twice", tile);
        }
    }

    #[test]
    fn test_parse_glyphs_and_aliases() {
        let tiles = parse_tiles("天, di REN\t長10,za5").unwrap();
        assert_eq!(
            tiles,
            vec![Tile::Tian, Tile::Di, Tile::Ren, Tile::Chang10, Tile::Za5]
        );
        assert!(matches!(
            parse_tiles("天,bogus"),
            Err(TienGowError::UnknownTile(s)) if s == "bogus"
        ));
    }

    #[test]
    fn test_remaining_removes_first_instance_only() {
        let deck = Deck::standard();
        let pool = deck
            .remaining(&[Tile::Tian], &[], PoolPolicy::Lenient)
            .unwrap();
        assert_eq!(pool.len(), 31);
        assert_eq!(pool.iter().filter(|&&t| t == Tile::Tian).count(), 1);
    }

    #[test]
    fn test_remaining_over_removal() {
        let deck = Deck::standard();
        let hand = [Tile::Tian, Tile::Tian, Tile::Di, Tile::Di];
        let known = [Tile::Tian];

        let pool = deck.remaining(&hand, &known, PoolPolicy::Lenient).unwrap();
        assert_eq!(pool.len(), 28);

        let strict = deck.remaining(&hand, &known, PoolPolicy::Strict);
        assert!(matches!(strict, Err(TienGowError::PoolUnderflow(Tile::Tian))));
    }

    #[test]
    fn test_serde_uses_glyph_names() {
        let json = serde_json::to_string(&vec![Tile::He, Tile::Hou]).unwrap();
        assert_eq!(json, r#"["和","猴"]"#);
        let back: Vec<Tile> = serde_json::from_str(r#"["和","hou"]"#).unwrap();
        assert_eq!(back, vec![Tile::He, Tile::Hou]);
    }
}
