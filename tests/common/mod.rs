#![allow(dead_code)]

use strum::IntoEnumIterator;
use tiengow::scoring::ScoreTable;
use tiengow::tiles::Tile;

/// Doubles rank highest (天天 68 down to 雜5雜5 53); mixed pairs get a
/// deterministic symmetric filler below every double.
pub fn sample_entries() -> Vec<(Tile, Tile, u32)> {
    let mut entries = Vec::new();
    for a in Tile::iter() {
        for b in Tile::iter() {
            if a > b {
                continue;
            }
            let score = if a == b {
                68 - a.index() as u32
            } else {
                let (i, j) = (a.index() as u32 + 1, b.index() as u32 + 1);
                (i * j + i + j) % 41 + 5
            };
            entries.push((a, b, score));
        }
    }
    entries
}

pub fn sample_table() -> ScoreTable {
    ScoreTable::from_entries(sample_entries())
}

/// Same table as nested JSON, with every score stored under the lower tile.
pub fn sample_rankings_json() -> String {
    let mut rows: Vec<String> = Vec::new();
    for a in Tile::iter() {
        let cells: Vec<String> = sample_entries()
            .into_iter()
            .filter(|(x, _, _)| *x == a)
            .map(|(_, b, s)| format!("\"{}\": {}", b, s))
            .collect();
        if !cells.is_empty() {
            rows.push(format!("\"{}\": {{{}}}", a, cells.join(", ")));
        }
    }
    format!("{{{}}}", rows.join(", "))
}

/// The deck minus `keep`: feeding this as known cards leaves exactly `keep`
/// (plus whatever the hand did not consume) in the pool.
pub fn all_but(hand: &[Tile], keep: &[Tile]) -> Vec<Tile> {
    let mut rest: Vec<Tile> = tiengow::tiles::Deck::standard().tiles().to_vec();
    for t in hand.iter().chain(keep.iter()) {
        if let Some(idx) = rest.iter().position(|x| x == t) {
            rest.remove(idx);
        }
    }
    rest
}

pub fn approx_eq(a: f64, b: f64) -> bool {
    (a - b).abs() < 1e-9
}
