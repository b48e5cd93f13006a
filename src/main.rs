use anyhow::{Context, Result};
use arcade_snake::config::AppConfig;
use arcade_snake::modes::PlayMode;
use arcade_snake::render::StyleKind;
use clap::Parser;
use std::fs::File;
use std::path::{Path, PathBuf};

#[derive(Parser)]
#[command(name = "arcade_snake")]
#[command(version, about = "Wrap-around Snake with a persisted high score")]
struct Cli {
    /// TOML configuration file
    #[arg(long)]
    config: Option<PathBuf>,

    /// Side of the board in pixels
    #[arg(long)]
    canvas_size: Option<u32>,

    /// Side of one cell in pixels
    #[arg(long)]
    cell_size: Option<u32>,

    /// Milliseconds between two moves
    #[arg(long)]
    tick_ms: Option<u64>,

    /// How snake segments are painted
    #[arg(long, value_enum)]
    style: Option<StyleKind>,

    /// Hide the background grid
    #[arg(long)]
    no_grid: bool,

    /// Directory holding the high score
    #[arg(long)]
    data_dir: Option<PathBuf>,

    /// Seed for food placement
    #[arg(long)]
    seed: Option<u64>,

    /// Write logs to this file (filtered by RUST_LOG, default info)
    #[arg(long)]
    log_file: Option<PathBuf>,
}

impl Cli {
    fn into_config(self) -> Result<AppConfig> {
        let mut config = match &self.config {
            Some(path) => AppConfig::load(path)?,
            None => AppConfig::default(),
        };

        if let Some(canvas_size) = self.canvas_size {
            config.game.canvas_size = canvas_size;
        }
        if let Some(cell_size) = self.cell_size {
            config.game.cell_size = cell_size;
        }
        if let Some(tick_ms) = self.tick_ms {
            config.game.tick_interval_ms = tick_ms;
        }
        if self.seed.is_some() {
            config.game.seed = self.seed;
        }
        if let Some(style) = self.style {
            config.display.style = style;
        }
        if self.no_grid {
            config.display.show_grid = false;
        }
        if let Some(dir) = self.data_dir {
            config.storage.dir = dir;
        }

        Ok(config)
    }
}

/// The terminal belongs to the game, so logs only go to a file
fn init_logging(path: Option<&Path>) -> Result<()> {
    let Some(path) = path else {
        return Ok(());
    };

    let file =
        File::create(path).with_context(|| format!("Failed to create log file {:?}", path))?;
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info"))
        .target(env_logger::Target::Pipe(Box::new(file)))
        .init();

    Ok(())
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.log_file.as_deref())?;

    let config = cli.into_config()?;
    config.game.validate().context("Invalid game configuration")?;
    log::info!("Starting with {:?}", config);

    let mut play_mode = PlayMode::new(config);
    play_mode.run().await?;

    Ok(())
}
