use std::io;
use std::panic;
use std::time::{Duration, Instant};

use clap::Parser;
use crossterm::cursor::Show;
use crossterm::execute;
use crossterm::terminal::{disable_raw_mode, LeaveAlternateScreen};
use grid_snake::config::{
    GridSize, Theme, DEFAULT_GRID_HEIGHT, DEFAULT_GRID_WIDTH, DEFAULT_TICK_INTERVAL_MS,
    MIN_TICK_INTERVAL_MS,
};
use grid_snake::game::GameState;
use grid_snake::input::{self, GameInput};
use grid_snake::renderer;
use grid_snake::terminal_runtime::TerminalSession;
use grid_snake::theme::ThemeCatalog;

/// How long each loop iteration waits for input; also paces redraws.
const INPUT_POLL_INTERVAL: Duration = Duration::from_millis(10);

/// Classic grid Snake in the terminal.
#[derive(Debug, Parser)]
#[command(version, about)]
struct Cli {
    /// Seed for food placement; entropy-seeded when omitted.
    #[arg(long)]
    seed: Option<u64>,

    /// Theme id: a builtin (classic, ocean, neon) or a user theme file stem.
    #[arg(long)]
    theme: Option<String>,

    /// Tick interval override in milliseconds.
    #[arg(long = "tick-ms")]
    tick_ms: Option<u64>,
}

fn main() -> io::Result<()> {
    let cli = Cli::parse();

    let catalog = ThemeCatalog::load();
    let theme = resolve_theme(&catalog, cli.theme.as_deref());

    let bounds = GridSize {
        width: DEFAULT_GRID_WIDTH,
        height: DEFAULT_GRID_HEIGHT,
    };
    let mut state = match cli.seed {
        Some(seed) => GameState::new_with_seed(bounds, seed),
        None => GameState::new(bounds),
    };

    let tick_interval = Duration::from_millis(
        cli.tick_ms
            .unwrap_or(DEFAULT_TICK_INTERVAL_MS)
            .max(MIN_TICK_INTERVAL_MS),
    );

    install_panic_hook();

    let mut session = TerminalSession::enter()?;
    run(&mut session, &mut state, &theme, tick_interval)
}

fn run(
    session: &mut TerminalSession,
    state: &mut GameState,
    theme: &Theme,
    tick_interval: Duration,
) -> io::Result<()> {
    let mut last_tick = Instant::now();

    loop {
        session
            .terminal_mut()
            .draw(|frame| renderer::render(frame, state, theme))?;

        if let Some(game_input) = input::poll_input(INPUT_POLL_INTERVAL)? {
            if game_input == GameInput::Quit {
                return Ok(());
            }

            state.apply_input(game_input);
        }

        if last_tick.elapsed() >= tick_interval {
            state.tick();
            last_tick = Instant::now();
        }
    }
}

fn resolve_theme(catalog: &ThemeCatalog, requested: Option<&str>) -> Theme {
    let Some(id) = requested else {
        return catalog.default_theme();
    };

    catalog.select(id).unwrap_or_else(|| {
        let available: Vec<&str> = catalog.ids().collect();
        eprintln!("Unknown theme {id:?}; available: {}", available.join(", "));
        catalog.default_theme()
    })
}

fn install_panic_hook() {
    let default_hook = panic::take_hook();

    panic::set_hook(Box::new(move |panic_info| {
        restore_terminal_after_panic();
        default_hook(panic_info);
    }));
}

fn restore_terminal_after_panic() {
    let _ = disable_raw_mode();

    let mut stdout = io::stdout();
    let _ = execute!(stdout, Show, LeaveAlternateScreen);
}
