//! Run the engine without a window and print the resulting board.

use std::io;
use std::time::Instant;

use anyhow::{Context, Result};
use clap::Parser;
use tracing::info;

use life_undo::{
    LifeEngine, Presenter,
    application::TraceObserver,
    cli::{self, ConfigArgs},
    rendering::TextSurface,
};

#[derive(Parser, Debug)]
#[command(name = "life-headless", version, about = "Step a Game of Life board in the terminal")]
struct Cli {
    #[command(flatten)]
    settings: ConfigArgs,

    /// Generations to compute.
    #[arg(long, default_value_t = 10)]
    generations: u32,

    /// Undo operations applied after stepping.
    #[arg(long, default_value_t = 0)]
    undo: u32,

    /// Print the board after every generation, not just the last one.
    #[arg(long)]
    every: bool,
}

fn main() -> Result<()> {
    cli::init_tracing();
    let args = Cli::parse();
    let config = args.settings.resolve()?;

    let mut engine = LifeEngine::from_config(&config).context("building engine")?;
    engine.subscribe(TraceObserver);
    let mut presenter = Presenter::new(TextSurface::new(io::stdout()));

    if args.every {
        presenter.present(engine.grid(), &engine.status());
    }

    let start = Instant::now();
    for _ in 0..args.generations {
        engine.step();
        if args.every {
            presenter.present(engine.grid(), &engine.status());
        }
    }
    let elapsed_ms = start.elapsed().as_secs_f64() * 1000.0;

    let undone = (0..args.undo).take_while(|_| engine.undo()).count();

    if !args.every || undone > 0 {
        presenter.present(engine.grid(), &engine.status());
    }

    info!(
        size = config.grid_size,
        generations = args.generations,
        undone,
        history = engine.history().len(),
        elapsed_ms,
        "headless run complete"
    );
    Ok(())
}
