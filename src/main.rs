use std::fs::{self, File};
use std::path::PathBuf;
use std::process::ExitCode;
use std::thread;
use std::time::{Duration, Instant};

use clap::Parser;
use level_snake::audio::{AudioSink, Mute, TerminalBell};
use level_snake::clock::MonotonicClock;
use level_snake::config::GameConfig;
use level_snake::error::Error;
use level_snake::game::Game;
use level_snake::input::{GameInput, InputHandler, InputSource};
use level_snake::renderer;
use level_snake::session::GameSession;
use level_snake::terminal_runtime::{TerminalSession, install_panic_hook};
use log::{LevelFilter, error, info};
use simplelog::{Config, WriteLogger};

const APP_DIR_NAME: &str = "level-snake";
const LOG_FILE_NAME: &str = "level-snake.log";
const FRAME_INTERVAL: Duration = Duration::from_millis(16);

#[derive(Debug, Parser)]
#[command(version, about)]
struct Cli {
    /// JSON config file. Defaults to the platform config directory.
    #[arg(long)]
    config: Option<PathBuf>,

    /// Seed for fruit and obstacle placement.
    #[arg(long)]
    seed: Option<u64>,

    /// Silence the terminal bell.
    #[arg(long)]
    mute: bool,

    /// Log file. Defaults to the platform data directory.
    #[arg(long = "log-file")]
    log_file: Option<PathBuf>,

    /// Log level: off, error, warn, info, debug or trace.
    #[arg(long = "log-level", default_value = "info")]
    log_level: LevelFilter,
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_logging(&cli);

    match run(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(error) => {
            error!("{error}");
            eprintln!("level-snake: {error}");
            ExitCode::FAILURE
        }
    }
}

fn run(cli: Cli) -> Result<(), Error> {
    let config = GameConfig::load(cli.config.as_deref())?;
    let seed = cli.seed.unwrap_or_else(rand::random);
    info!("starting: {config:?}, seed {seed}");

    let session = GameSession::new_with_seed(config, seed)?;
    let audio: Box<dyn AudioSink> = if cli.mute {
        Box::new(Mute)
    } else {
        Box::new(TerminalBell)
    };
    let mut game = Game::new(session, audio, MonotonicClock::new());

    install_panic_hook();
    let mut terminal = TerminalSession::enter()?;
    let mut input = InputHandler::new();
    let mut last_tick = Instant::now();

    'frames: loop {
        terminal
            .terminal_mut()
            .draw(|frame| renderer::render(frame, &game))?;

        for event in input.poll()? {
            if event == GameInput::Quit {
                break 'frames;
            }
            game.handle_input(event)?;
        }

        let state_before = game.state();
        game.advance_timers()?;
        if game.state() != state_before {
            last_tick = Instant::now();
        }

        if last_tick.elapsed() >= game.tick_interval() {
            game.tick()?;
            last_tick = Instant::now();
        }

        thread::sleep(FRAME_INTERVAL);
    }

    info!(
        "quit on level {} with score {}",
        game.session().level(),
        game.session().score
    );
    Ok(())
}

fn init_logging(cli: &Cli) {
    let path = cli.log_file.clone().unwrap_or_else(default_log_path);
    if let Some(parent) = path.parent() {
        let _ = fs::create_dir_all(parent);
    }

    let result = File::create(&path)
        .map_err(|error| error.to_string())
        .and_then(|file| {
            WriteLogger::init(cli.log_level, Config::default(), file)
                .map_err(|error| error.to_string())
        });

    if let Err(error) = result {
        eprintln!(
            "level-snake: logging disabled ({}): {error}",
            path.display()
        );
    }
}

fn default_log_path() -> PathBuf {
    let mut base = dirs::data_local_dir().unwrap_or_else(|| PathBuf::from("."));
    base.push(APP_DIR_NAME);
    base.push(LOG_FILE_NAME);
    base
}
