use proptest::prelude::*;
use std::collections::BTreeSet;
use strum::IntoEnumIterator;
use tiengow::engine::dominance::dominates;
use tiengow::engine::{filter_dominated, legal_arrangements, Analyzer};
use tiengow::scoring::{Pair, ScoreTable};
use tiengow::tiles::{Deck, Tile};

// --- STRATEGIES ---

fn arb_tile() -> impl Strategy<Value = Tile> {
    prop::sample::select(Tile::iter().collect::<Vec<_>>())
}

prop_compose! {
    fn arb_hand()(tiles in prop::array::uniform4(arb_tile())) -> [Tile; 4] {
        tiles
    }
}

// Scores in a narrow band so ties and both-orders-legal splits show up often.
prop_compose! {
    fn arb_table()(scores in prop::collection::vec(0u32..12, 256)) -> ScoreTable {
        let tiles: Vec<Tile> = Tile::iter().collect();
        let mut entries = Vec::new();
        for (i, &a) in tiles.iter().enumerate() {
            for (j, &b) in tiles.iter().enumerate().skip(i) {
                entries.push((a, b, scores[i * 16 + j]));
            }
        }
        ScoreTable::from_entries(entries)
    }
}

// A small deck: a handful of distinct identities, two copies each.
prop_compose! {
    fn arb_deck()(picks in prop::sample::subsequence(Tile::iter().collect::<Vec<_>>(), 4..7))
        -> Deck {
        let mut tiles = picks.clone();
        tiles.extend(picks);
        Deck::from_tiles(tiles)
    }
}

/// Every (front, back) split of a 4-tile hand by brute force over orderings.
fn brute_force_splits(table: &ScoreTable, hand: &[Tile; 4]) -> BTreeSet<(Pair, Pair)> {
    let mut out = BTreeSet::new();
    for a in 0..4 {
        for b in 0..4 {
            if a == b {
                continue;
            }
            let rest: Vec<usize> = (0..4).filter(|&i| i != a && i != b).collect();
            let front = Pair::new(hand[a], hand[b]);
            let back = Pair::new(hand[rest[0]], hand[rest[1]]);
            if table.pair_score(back) >= table.pair_score(front) {
                out.insert((front, back));
            }
        }
    }
    out
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(200))]

    #[test]
    fn test_scores_are_symmetric(table in arb_table(), a in arb_tile(), b in arb_tile()) {
        prop_assert_eq!(table.score(a, b), table.score(b, a));
        prop_assert_eq!(table.pair_score(Pair::new(a, b)), table.score(a, b));
    }

    #[test]
    fn test_legal_arrangements_are_complete(table in arb_table(), hand in arb_hand()) {
        let legal = legal_arrangements(&table, &hand);
        let expected = brute_force_splits(&table, &hand);

        prop_assert!(!legal.is_empty() && legal.len() <= 6);

        let got: BTreeSet<(Pair, Pair)> = legal.iter().map(|a| (a.front, a.back)).collect();
        prop_assert_eq!(got.len(), legal.len(), "duplicate arrangement in {:?}", legal);
        prop_assert_eq!(got, expected);

        for a in &legal {
            prop_assert!(a.is_legal());
            prop_assert_eq!(a.front_score, table.pair_score(a.front));
        }
    }

    #[test]
    fn test_filter_keeps_only_undominated(table in arb_table(), hand in arb_hand()) {
        let legal = legal_arrangements(&table, &hand);
        let kept = filter_dominated(&legal);

        prop_assert!(!kept.is_empty());
        for a in &kept {
            prop_assert!(!legal.iter().any(|b| dominates(b, a)));
        }
        for a in legal.iter().filter(|a| !kept.contains(*a)) {
            prop_assert!(legal.iter().any(|b| dominates(b, a)));
        }
    }
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(40))]

    #[test]
    fn test_field_weights_and_rates_normalise(
        table in arb_table(),
        deck in arb_deck(),
        seed in 0usize..1000
    ) {
        let tiles = deck.tiles().to_vec();
        let hand = [
            tiles[seed % tiles.len()],
            tiles[(seed + 1) % tiles.len()],
            tiles[(seed + 2) % tiles.len()],
            tiles[(seed + 3) % tiles.len()],
        ];
        let analyzer = Analyzer::new(table).with_deck(deck);

        let pool = analyzer.remaining_pool(&hand, &[]).unwrap();
        let field = analyzer.opponent_field(&pool);
        prop_assert!((field.total_weight() - field.hand_count as f64).abs() < 1e-9);

        let report = analyzer.analyze(&hand, &[]).unwrap();
        prop_assert!(report.all.contains(&report.best));
        for r in &report.all {
            let sum = r.win_prob + r.tie_prob + r.lose_prob;
            if report.opponent_hands == 0 {
                prop_assert_eq!(sum, 0.0);
            } else {
                prop_assert!((sum - 1.0).abs() < 1e-9, "rates sum to {}", sum);
            }
            prop_assert!((r.expected_value - (r.win_prob - r.lose_prob)).abs() < 1e-9);
        }
    }
}
