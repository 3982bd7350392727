use crate::config::AnalysisConfig;
use crate::engine::{AnalysisReport, Analyzer};
use crate::error::TgResult;
use crate::scoring::loader::{load_pair_names, load_rankings};
use crate::scoring::{PairNames, ScoreTable};
use crate::tiles::parse_tiles;
use std::path::Path;
use tracing::{info, warn};

/// Service: build an analyzer from data files on disk.
///
/// A missing pair-name file is not an error; names are display-only.
pub fn load_analyzer<P: AsRef<Path>>(
    rankings_path: P,
    pair_names_path: Option<&Path>,
    config: AnalysisConfig,
) -> TgResult<Analyzer> {
    let rankings = load_rankings(rankings_path)?;
    let table = ScoreTable::from_rankings(&rankings);

    let names = match pair_names_path {
        Some(path) if path.exists() => load_pair_names(path)?,
        Some(path) => {
            warn!(
                "⚠️  Pair names '{}' not found. Showing raw pairs.",
                path.display()
            );
            PairNames::default()
        }
        None => PairNames::default(),
    };
    if !names.is_empty() {
        info!("Loaded {} pair names", names.len());
    }

    Ok(Analyzer::new(table)
        .with_pair_names(names)
        .with_config(config))
}

/// Service: analyze a hand given as text, e.g. `"天,天,地,地"`.
pub fn analyze_str(analyzer: &Analyzer, hand: &str, known: &str) -> TgResult<AnalysisReport> {
    let hand = parse_tiles(hand)?;
    let known = parse_tiles(known)?;
    analyzer.analyze(&hand, &known)
}
