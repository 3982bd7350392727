use crate::reports;
use clap::Args;
use tiengow::config::AnalysisConfig;
use tiengow::engine::Analyzer;
use tiengow::error::TgResult;
use tiengow::tiles::{format_tiles, parse_tiles};

#[derive(Args, Debug, Clone)]
pub struct AnalyzeArgs {
    #[command(flatten)]
    pub config: AnalysisConfig,

    /// Four tiles, e.g. "天,天,地,地" or "tian,tian,di,di".
    #[arg(short = 'H', long)]
    pub hand: String,

    /// Tiles already seen elsewhere, one entry per physical tile.
    #[arg(short = 'k', long, default_value = "")]
    pub known: String,

    /// Emit the raw report as JSON instead of a table.
    #[arg(long, default_value_t = false)]
    pub json: bool,
}

pub fn run(args: AnalyzeArgs, analyzer: &Analyzer) -> TgResult<()> {
    let hand = parse_tiles(&args.hand)?;
    let known = parse_tiles(&args.known)?;

    let report = analyzer.analyze(&hand, &known)?;

    if args.json {
        println!("{}", serde_json::to_string_pretty(&report)?);
        return Ok(());
    }

    println!("\n🀄 === HAND ANALYSIS: {} === 🀄", format_tiles(&hand));
    if !known.is_empty() {
        println!("Known tiles: {}", format_tiles(&known));
    }
    println!(
        "Unseen pool: {} tiles | Opponent hands: {} | Weighted splits: {}",
        report.pool_size, report.opponent_hands, report.opponent_arrangements
    );

    reports::print_best(analyzer, &report.best);
    reports::print_arrangements(analyzer, &report.all);

    if report.evaluated > report.all.len() {
        println!(
            "({} dominated split(s) hidden)",
            report.evaluated - report.all.len()
        );
    }

    Ok(())
}
