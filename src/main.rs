use clap::{CommandFactory, FromArgMatches, Parser, Subcommand};
use std::path::PathBuf;
use std::process;
use tiengow::api;
use tiengow::config::AnalysisConfig;
use tracing::{error, info, Level};

mod cmd;
mod reports;

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    #[arg(global = true, short, long, default_value = "data/rankings.json")]
    rankings: PathBuf,

    #[arg(global = true, short = 'n', long, default_value = "data/pair_names.json")]
    pair_names: PathBuf,

    /// JSON analysis profile; explicit CLI flags still win.
    #[arg(global = true, long)]
    config: Option<PathBuf>,

    #[arg(global = true, long, default_value_t = false)]
    debug: bool,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Rank every legal split of a hand against all opponent hands.
    Analyze(cmd::analyze::AnalyzeArgs),
    /// List the legal splits of a hand and their pair scores.
    Splits(cmd::splits::SplitsArgs),
}

fn main() {
    let matches = Cli::command().get_matches();
    let cli = Cli::from_arg_matches(&matches).unwrap_or_else(|e| e.exit());

    let level = if cli.debug { Level::DEBUG } else { Level::INFO };
    tracing_subscriber::fmt()
        .with_max_level(level)
        .with_writer(std::io::stderr)
        .init();

    info!("🀄 Initializing Tien Gow analyzer...");

    let mut config = match &cli.config {
        Some(path) => {
            info!("⚙️  Loading analysis profile: {}", path.display());
            AnalysisConfig::load_from_file(path).unwrap_or_else(|e| {
                error!("{}", e);
                process::exit(1);
            })
        }
        None => AnalysisConfig::default(),
    };

    if let (Commands::Analyze(args), Some(sub_matches)) =
        (&cli.command, matches.subcommand_matches("analyze"))
    {
        config.merge_from_cli(&args.config, sub_matches);
    }

    let analyzer = match api::load_analyzer(&cli.rankings, Some(cli.pair_names.as_path()), config)
    {
        Ok(a) => a,
        Err(e) => {
            error!("❌ FATAL ERROR LOADING SCORE DATA:");
            error!("   {}", e);
            process::exit(1);
        }
    };

    let outcome = match cli.command {
        Commands::Analyze(args) => cmd::analyze::run(args, &analyzer),
        Commands::Splits(args) => cmd::splits::run(args, &analyzer),
    };

    if let Err(e) = outcome {
        error!("❌ {}", e);
        process::exit(1);
    }
}
