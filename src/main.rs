use std::rc::Rc;

use anyhow::{Context, Result};
use clap::Parser;
use macroquad::prelude::*;
use tracing::{error, info};

use life_undo::{
    LifeEngine, Presenter, Ticker,
    application::TraceObserver,
    audio::StartCue,
    cli::{self, ConfigArgs},
    input,
    rendering::WindowSurface,
    ui::{self, Button, Layout},
};

#[derive(Parser, Debug)]
#[command(name = "life_undo", version, about = "Conway's Game of Life with step and undo")]
struct Cli {
    #[command(flatten)]
    settings: ConfigArgs,
}

fn window_conf() -> Conf {
    Conf {
        window_title: "Conway's Game of Life".to_owned(),
        window_width: 640,
        window_height: 460,
        window_resizable: false,
        ..Default::default()
    }
}

#[macroquad::main(window_conf)]
async fn main() {
    cli::init_tracing();
    if let Err(err) = run().await {
        error!(error = ?err, "life_undo exited with an error");
        std::process::exit(1);
    }
}

async fn run() -> Result<()> {
    let args = Cli::parse();
    let config = args.settings.resolve()?;
    let layout = Layout::from_config(&config);
    let (width, height) = layout.window_size();
    request_new_screen_size(width, height);

    let mut engine = LifeEngine::from_config(&config).context("building engine")?;
    engine.subscribe(TraceObserver);
    let cue = StartCue::load(config.start_sound.as_deref()).await;
    let start_sound = !cue.is_silent();
    engine.subscribe(cue);

    let mut ticker = Ticker::new(config.interval());
    let buttons: Rc<[Button]> = ui::create_buttons(&layout).into();
    let mut presenter = Presenter::new(WindowSurface::new(layout, Rc::clone(&buttons)));

    info!(
        size = config.grid_size,
        interval_ms = config.interval_ms,
        history_limit = ?config.history_limit,
        start_sound,
        "starting Game of Life"
    );

    loop {
        let mouse_pos = mouse_position();

        let mut commands = input::process_button_clicks(&buttons, mouse_pos);
        commands.extend(input::process_keyboard_input(engine.is_running()));
        for command in commands {
            engine.apply(command);
        }

        ticker.advance(&mut engine, get_frame_time());

        presenter.present(engine.grid(), &engine.status());

        if is_key_pressed(KeyCode::Escape) {
            info!(generation = engine.generation(), "window closed");
            return Ok(());
        }

        next_frame().await;
    }
}
