//! CLI frontend for the Rove text-adventure engine.

mod render;
mod repl;

use std::io::{self, IsTerminal};
use std::path::PathBuf;
use std::process;

use clap::Parser;
use colored::Colorize;
use log::LevelFilter;
use rove_engine::{EngineConfig, Session};

#[derive(Parser)]
#[command(
    name = "rove",
    about = "Rove — explore a text adventure from a JSON map",
    version
)]
struct Cli {
    /// Path to the JSON map file
    map: PathBuf,

    /// Score the player starts with
    #[arg(long, default_value = "1")]
    initial_score: u32,

    /// Points earned for each room entered on score-gated maps
    #[arg(long, default_value = "1")]
    score_per_entry: u32,

    /// Disable colored output
    #[arg(long)]
    no_color: bool,

    /// Log more to stderr (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

fn main() {
    let cli = Cli::parse();
    init_logging(cli.verbose);
    if cli.no_color {
        colored::control::set_override(false);
    }

    if let Err(e) = run(&cli) {
        eprintln!("{} {e}", "error:".red().bold());
        process::exit(1);
    }
}

fn run(cli: &Cli) -> Result<(), String> {
    let world = rove_core::load_map(&cli.map).map_err(|e| e.to_string())?;
    let config = EngineConfig::default()
        .with_initial_score(cli.initial_score)
        .with_score_per_entry(cli.score_per_entry);
    let mut session = Session::with_config(world, config);

    let stdin = io::stdin();
    let interactive = stdin.is_terminal();
    repl::run(&mut session, stdin.lock(), &mut io::stdout().lock(), interactive)
}

/// Route `log` output to stderr. `RUST_LOG` overrides the `-v` level.
fn init_logging(verbosity: u8) {
    let level = match verbosity {
        0 => LevelFilter::Warn,
        1 => LevelFilter::Info,
        2 => LevelFilter::Debug,
        _ => LevelFilter::Trace,
    };
    env_logger::Builder::new()
        .filter_level(level)
        .parse_default_env()
        .format_timestamp(None)
        .init();
}
