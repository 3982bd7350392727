use comfy_table::presets::ASCII_FULL;
use comfy_table::{Attribute, Cell, CellAlignment, Color, ContentArrangement, Table};
use tiengow::engine::{Analyzer, Arrangement, ArrangementStats};

fn pct(v: f64) -> String {
    format!("{:.1}%", v * 100.0)
}

fn ev_color(ev: f64) -> Color {
    if ev > 0.0 {
        Color::Green
    } else if ev < 0.0 {
        Color::Red
    } else {
        Color::Reset
    }
}

pub fn print_best(analyzer: &Analyzer, best: &ArrangementStats) {
    let table = analyzer.table();
    let names = analyzer.pair_names();
    println!(
        "\n⭐ Best: front {} / back {}  EV {:.3}",
        table.format_pair(names, best.front),
        table.format_pair(names, best.back),
        best.expected_value
    );
}

pub fn print_arrangements(analyzer: &Analyzer, results: &[ArrangementStats]) {
    let scores = analyzer.table();
    let names = analyzer.pair_names();

    let mut table = Table::new();
    table
        .load_preset(ASCII_FULL)
        .set_content_arrangement(ContentArrangement::Dynamic);

    table.set_header(vec![
        Cell::new("#").add_attribute(Attribute::Bold),
        Cell::new("Front"),
        Cell::new("Pts"),
        Cell::new("Front Win"),
        Cell::new("Back"),
        Cell::new("Pts"),
        Cell::new("Back Win"),
        Cell::new("Win").fg(Color::Green),
        Cell::new("Tie"),
        Cell::new("Lose").fg(Color::Red),
        Cell::new("EV").fg(Color::Cyan),
    ]);

    for i in [2, 3, 5, 6, 7, 8, 9, 10] {
        if let Some(col) = table.column_mut(i) {
            col.set_cell_alignment(CellAlignment::Right);
        }
    }

    for (rank, r) in results.iter().enumerate() {
        table.add_row(vec![
            Cell::new(rank + 1).add_attribute(Attribute::Bold),
            Cell::new(scores.format_pair(names, r.front)),
            Cell::new(r.front_score),
            Cell::new(pct(r.front_win_rate)),
            Cell::new(scores.format_pair(names, r.back)),
            Cell::new(r.back_score),
            Cell::new(pct(r.back_win_rate)),
            Cell::new(pct(r.win_prob)).fg(Color::Green),
            Cell::new(pct(r.tie_prob)),
            Cell::new(pct(r.lose_prob)).fg(Color::Red),
            Cell::new(format!("{:.3}", r.expected_value)).fg(ev_color(r.expected_value)),
        ]);
    }

    println!("{}", table);
}

pub fn print_splits(analyzer: &Analyzer, splits: &[Arrangement]) {
    let scores = analyzer.table();
    let names = analyzer.pair_names();

    let mut table = Table::new();
    table.load_preset(ASCII_FULL);
    table.set_header(vec!["#", "Front", "Pts", "Back", "Pts"]);

    for (i, a) in splits.iter().enumerate() {
        table.add_row(vec![
            Cell::new(i + 1),
            Cell::new(scores.format_pair(names, a.front)),
            Cell::new(a.front_score).set_alignment(CellAlignment::Right),
            Cell::new(scores.format_pair(names, a.back)),
            Cell::new(a.back_score).set_alignment(CellAlignment::Right),
        ]);
    }

    println!("{}", table);
}
