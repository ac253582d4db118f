//! Letter Slots - CLI
//!
//! Word-finding puzzle with TUI and plain text modes.

use anyhow::{Result, bail};
use clap::{Parser, Subcommand};
use letter_slots::{
    commands::{run_levels, run_simple},
    config::GameConfig,
    interactive::{App, run_tui},
};
use std::io;
use std::path::PathBuf;

#[derive(Parser)]
#[command(
    name = "letter_slots",
    about = "Spell words from seven shuffled tiles to fill the board",
    version,
    author
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Catalog file to load instead of the built-in levels
    #[arg(short, long, global = true)]
    catalog: Option<PathBuf>,

    /// Seed the tile shuffle for a reproducible game
    #[arg(short, long, global = true)]
    seed: Option<u64>,

    /// Level to start at (1-based)
    #[arg(short, long, global = true, default_value = "1")]
    level: usize,
}

#[derive(Subcommand)]
enum Commands {
    /// Interactive TUI mode (default)
    Play,

    /// Simple text mode (line-based, no TUI)
    Simple,

    /// List and validate the level catalog
    Levels,
}

impl Cli {
    fn config(&self) -> Result<GameConfig> {
        if self.level == 0 {
            bail!("levels are numbered from 1");
        }
        Ok(GameConfig {
            catalog_path: self.catalog.clone(),
            seed: self.seed,
            start_level: self.level - 1,
        })
    }
}

fn main() -> Result<()> {
    env_logger::try_init().unwrap_or(());

    let cli = Cli::parse();
    let config = cli.config()?;

    // Default to Play mode if no command given
    match cli.command.unwrap_or(Commands::Play) {
        Commands::Play => run_play_command(config),
        Commands::Simple => run_simple_command(&config),
        Commands::Levels => run_levels_command(&config),
    }
}

fn run_play_command(config: GameConfig) -> Result<()> {
    let state = config.new_session()?;
    run_tui(App::new(state, config))
}

fn run_simple_command(config: &GameConfig) -> Result<()> {
    let mut state = config.new_session()?;
    let stdin = io::stdin();
    let mut stdout = io::stdout();
    run_simple(&mut state, stdin.lock(), &mut stdout)?;
    Ok(())
}

fn run_levels_command(config: &GameConfig) -> Result<()> {
    let catalog = config.load_catalog()?;
    run_levels(&catalog, &mut io::stdout())?;
    Ok(())
}
