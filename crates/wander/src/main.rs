//! World of Wander
//!
//! Main entry point for the game.

use std::fs::File;
use std::io::{self, BufRead, Write};
use std::path::PathBuf;
use std::sync::Mutex;
use std::time::Duration;

use clap::Parser;
use crossterm::{
    cursor, event, execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::Terminal;
use ratatui::backend::CrosstermBackend;
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

use wander_core::dungeon::campus::build_campus;
use wander_core::world::GameOptions;
use wander_core::{GameLoop, GameRng, GameState};
use wander_ui::App;

/// Environment variable holding the log filter
const LOG_ENV_VAR: &str = "WANDER_LOG";

/// World of Wander - a text adventure on campus
#[derive(Parser, Debug)]
#[command(name = "wander")]
#[command(author, version, about = "World of Wander - explore the university!", long_about = None)]
struct Args {
    /// Player name
    #[arg(short = 'u', long = "name")]
    name: Option<String>,

    /// Seed for the transporter room
    #[arg(short = 's', long = "seed")]
    seed: Option<u64>,

    /// Options file (defaults to $WANDERRC, then the user config dir)
    #[arg(short = 'c', long = "config")]
    config: Option<PathBuf>,

    /// Refuse to pick something up while your hands are full
    #[arg(long = "strict-take")]
    strict_take: bool,

    /// Line-by-line play on stdin/stdout instead of the full-screen UI
    #[arg(short = 'p', long = "plain")]
    plain: bool,

    /// Disable colors
    #[arg(long = "no-color")]
    no_color: bool,

    /// Write logs to this file
    #[arg(long = "log-file")]
    log_file: Option<PathBuf>,

    /// Print the effective options in rc file form and exit
    #[arg(long = "show-options")]
    show_options: bool,
}

fn main() -> io::Result<()> {
    // Parse command-line arguments before terminal setup
    let args = Args::parse();

    init_logging(&args)?;

    let options = match load_options(&args) {
        Ok(options) => options,
        Err(e) => {
            eprintln!("wander: {e}");
            std::process::exit(2);
        }
    };

    if args.show_options {
        print!("{}", options.to_config_string());
        return Ok(());
    }

    let state = create_new_game(options);
    tracing::info!(seed = state.rng.seed(), plain = args.plain, "starting World of Wander");

    if args.plain {
        run_plain(GameLoop::new(state))
    } else {
        run_tui(App::new(state))
    }
}

/// Install the tracing subscriber. Logs go to `--log-file` when given;
/// otherwise plain mode logs to stderr and the full-screen UI stays silent.
fn init_logging(args: &Args) -> io::Result<()> {
    let filter = EnvFilter::try_from_env(LOG_ENV_VAR).unwrap_or_else(|_| EnvFilter::new("warn"));

    match &args.log_file {
        Some(path) => {
            let file = File::create(path)?;
            tracing_subscriber::registry()
                .with(filter)
                .with(
                    tracing_subscriber::fmt::layer()
                        .with_ansi(false)
                        .with_writer(Mutex::new(file)),
                )
                .init();
        }
        None if args.plain => {
            tracing_subscriber::registry()
                .with(filter)
                .with(tracing_subscriber::fmt::layer().with_writer(io::stderr))
                .init();
        }
        // stderr would scribble over the alternate screen
        None => {}
    }
    Ok(())
}

/// Options from the rc file, overridden by command-line flags
fn load_options(args: &Args) -> Result<GameOptions, wander_core::world::OptionsError> {
    let mut options = GameOptions::discover(args.config.as_deref())?;

    if let Some(name) = &args.name {
        options.name = name.clone();
    }
    if args.seed.is_some() {
        options.seed = args.seed;
    }
    if args.strict_take {
        options.strict_take = true;
    }
    if args.no_color {
        options.color = false;
    }
    Ok(options)
}

/// Create a new game with initial state
fn create_new_game(options: GameOptions) -> GameState {
    let rng = match options.seed {
        Some(seed) => GameRng::new(seed),
        None => GameRng::from_entropy(),
    };
    GameState::with_options(build_campus(), rng, options)
}

/// Read commands from stdin until `quit` or end of input
fn run_plain(mut game: GameLoop) -> io::Result<()> {
    let stdin = io::stdin();
    let mut stdout = io::stdout();

    writeln!(stdout, "{}", game.welcome())?;

    let mut lines = stdin.lock().lines();
    loop {
        write!(stdout, "\n> ")?;
        stdout.flush()?;

        let Some(line) = lines.next().transpose()? else {
            break;
        };

        let outcome = game.execute_line(&line);
        writeln!(stdout, "{}", outcome.message)?;

        if outcome.quit {
            break;
        }
    }

    Ok(())
}

/// Run the full-screen UI
fn run_tui(mut app: App) -> io::Result<()> {
    enable_raw_mode()?;
    let result = run_in_terminal(&mut app);

    // Restore terminal, whether or not setup succeeded
    let restored = restore_terminal();
    result.and(restored)
}

/// Enter the alternate screen and drive the UI until the player quits
fn run_in_terminal(app: &mut App) -> io::Result<()> {
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;
    tui_loop(&mut terminal, app)
}

fn restore_terminal() -> io::Result<()> {
    disable_raw_mode()?;
    execute!(io::stdout(), LeaveAlternateScreen, cursor::Show)
}

fn tui_loop(
    terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    app: &mut App,
) -> io::Result<()> {
    loop {
        // Draw
        terminal.draw(|frame| app.render(frame))?;

        // Handle input
        if event::poll(Duration::from_millis(100))? {
            let event = event::read()?;

            if let Some(line) = app.handle_event(event) {
                app.execute(&line);
            }

            if app.should_quit() {
                // show the farewell before leaving
                terminal.draw(|frame| app.render(frame))?;
                std::thread::sleep(Duration::from_millis(600));
                break;
            }
        }
    }

    Ok(())
}
