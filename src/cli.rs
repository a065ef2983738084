use std::fs::File;
use std::path::{Path, PathBuf};
use std::sync::Mutex;

use anyhow::{Context, Result};
use clap::{Args, Parser, Subcommand};
use crossterm::event::EventStream;
use tracing::info;
use tracing_subscriber::EnvFilter;

use crate::config::GameConfig;
use crate::core::engine::Engine;
use crate::wordfall::{WordCatalog, WordfallGame};

#[derive(Parser)]
#[command(name = "wordfall")]
#[command(about = "⌨️  Type the falling words before they hit the floor")]
#[command(version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,

    #[command(flatten)]
    pub game: GameArgs,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Play a game (the default)
    Play,
    /// Print the word catalog in use and exit
    Words,
}

#[derive(Args, Debug, Default)]
pub struct GameArgs {
    /// JSON file with game settings
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    /// Plain-text word list, one word per line
    #[arg(short, long, global = true)]
    pub words: Option<PathBuf>,

    /// Lives at the start of each session
    #[arg(long, global = true)]
    pub lives: Option<u32>,

    /// Milliseconds between spawned words
    #[arg(long, global = true)]
    pub spawn_interval_ms: Option<u64>,

    /// Milliseconds between animation frames
    #[arg(long, global = true)]
    pub frame_interval_ms: Option<u64>,

    /// Slowest fall speed, rows per frame
    #[arg(long, global = true)]
    pub speed_min: Option<f32>,

    /// Fastest fall speed, rows per frame
    #[arg(long, global = true)]
    pub speed_max: Option<f32>,

    /// Seed for reproducible spawns
    #[arg(long, global = true)]
    pub seed: Option<u64>,

    /// Write logs here (the terminal belongs to the game)
    #[arg(long, global = true)]
    pub log_file: Option<PathBuf>,
}

impl GameArgs {
    /// Defaults, then the config file, then flags.
    pub fn resolve_config(&self) -> Result<GameConfig> {
        let mut config = match &self.config {
            Some(path) => GameConfig::from_file(path)?,
            None => GameConfig::default(),
        };

        if let Some(lives) = self.lives {
            config.initial_lives = lives;
        }
        if let Some(ms) = self.spawn_interval_ms {
            config.spawn_interval_ms = ms;
        }
        if let Some(ms) = self.frame_interval_ms {
            config.frame_interval_ms = ms;
        }
        if let Some(speed) = self.speed_min {
            config.speed_min = speed;
        }
        if let Some(speed) = self.speed_max {
            config.speed_max = speed;
        }

        config.validate()?;
        Ok(config)
    }

    /// `--words` wins over the config file's list, which wins over the
    /// built-in catalog.
    pub fn resolve_catalog(&self, config: &GameConfig) -> Result<WordCatalog> {
        if let Some(path) = &self.words {
            let text = std::fs::read_to_string(path)
                .with_context(|| format!("failed to read word list {}", path.display()))?;
            return Ok(WordCatalog::from_lines(&text)?);
        }
        match &config.words {
            Some(words) => Ok(WordCatalog::new(words)?),
            None => Ok(WordCatalog::default()),
        }
    }
}

pub async fn run_cli() -> Result<()> {
    let cli = Cli::parse();

    if let Some(path) = &cli.game.log_file {
        init_tracing(path)?;
    }

    let config = cli.game.resolve_config()?;
    let catalog = cli.game.resolve_catalog(&config)?;

    match cli.command.unwrap_or(Commands::Play) {
        Commands::Words => {
            println!("📦 {} words:", catalog.len());
            for word in catalog.words() {
                println!("   {}", word);
            }
            Ok(())
        }
        Commands::Play => {
            info!(?config, words = catalog.len(), "starting wordfall");
            let game = WordfallGame::new(&config, catalog, cli.game.seed);

            let mut terminal = ratatui::init();
            let result = Engine::new(game)
                .run(&mut terminal, EventStream::new())
                .await;
            ratatui::restore();

            let game = result?;
            println!("👋 Thanks for playing! Last score: {}", game.session().score());
            Ok(())
        }
    }
}

fn init_tracing(path: &Path) -> Result<()> {
    let file = File::create(path)
        .with_context(|| format!("failed to create log file {}", path.display()))?;
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(Mutex::new(file))
        .with_ansi(false)
        .init();
    Ok(())
}
