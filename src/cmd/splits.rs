use crate::reports;
use clap::Args;
use tiengow::engine::{Analyzer, HAND_SIZE};
use tiengow::error::{TgResult, TienGowError};
use tiengow::tiles::{format_tiles, parse_tiles, Tile};

#[derive(Args, Debug, Clone)]
pub struct SplitsArgs {
    #[arg(short = 'H', long)]
    pub hand: String,
}

pub fn run(args: SplitsArgs, analyzer: &Analyzer) -> TgResult<()> {
    let hand = parse_tiles(&args.hand)?;
    let four = <[Tile; HAND_SIZE]>::try_from(hand.as_slice()).map_err(|_| {
        TienGowError::InvalidHandSize {
            expected: HAND_SIZE,
            actual: hand.len(),
        }
    })?;

    let legal = analyzer.legal_arrangements(&four);
    println!("\nLegal splits of {}: {}", format_tiles(&hand), legal.len());
    reports::print_splits(analyzer, &legal);
    Ok(())
}
