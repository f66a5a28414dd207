mod app;
mod clock;
mod domain;
mod error;
mod input;
mod logging;
mod notifications;
mod persistence;
mod task_store;
mod ticker;
mod timer;
mod ui;

use anyhow::Result;
use app::AppState;
use clap::{Parser, Subcommand};
use clock::SystemClock;
use domain::TimerMode;
use crossterm::{
    event::{self, Event, KeyEventKind},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use notifications::DesktopNotifier;
use persistence::{
    ensure_data_dir, init_local_data_dir, load_settings, log_file, resolve_data_dir,
    settings_file, JsonFileStorage,
};
use ratatui::{backend::CrosstermBackend, Terminal};
use std::io;
use std::path::PathBuf;
use std::rc::Rc;
use std::time::Instant;
use tracing::{error, info};

#[derive(Parser)]
#[command(name = "taskmaster")]
#[command(about = "A terminal clock, pomodoro timer and subject-tagged task list", long_about = None)]
struct Cli {
    /// Data directory. Defaults to the nearest .taskmaster directory, then ~/.taskmaster
    #[arg(long, global = true)]
    data_dir: Option<PathBuf>,

    /// Log level used when RUST_LOG is not set
    #[arg(long, global = true, default_value = "info")]
    log_level: String,

    /// Mode to open in (clock, focus, short_break, long_break)
    #[arg(long, value_parser = parse_mode)]
    mode: Option<TimerMode>,

    #[command(subcommand)]
    command: Option<Commands>,
}

fn parse_mode(value: &str) -> Result<TimerMode, String> {
    TimerMode::from_label(value).ok_or_else(|| format!("unknown mode: {}", value))
}

#[derive(Subcommand)]
enum Commands {
    /// Initialize a local .taskmaster directory in the current directory
    Init,
    /// Print the files taskmaster reads and writes
    Paths,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Some(Commands::Init) => {
            let current_dir = std::env::current_dir()?;
            let data_dir = init_local_data_dir(&current_dir)?;
            println!("Initialized taskmaster directory: {}", data_dir.display());
            println!();
            println!("Taskmaster will now use this local directory for task storage.");
            Ok(())
        }
        Some(Commands::Paths) => {
            let data_dir = resolve_data_dir(cli.data_dir)?;
            println!("data:     {}", data_dir.display());
            println!("tasks:    {}", JsonFileStorage::new(&data_dir).path().display());
            println!("settings: {}", settings_file(&data_dir).display());
            println!("log:      {}", log_file(&data_dir).display());
            Ok(())
        }
        None => run_tui(cli.data_dir, &cli.log_level, cli.mode),
    }
}

fn run_tui(data_dir: Option<PathBuf>, log_level: &str, mode: Option<TimerMode>) -> Result<()> {
    let data_dir = ensure_data_dir(&resolve_data_dir(data_dir)?)?;

    if let Err(e) = logging::init_logging(&log_file(&data_dir), log_level) {
        eprintln!("Warning: logging disabled: {:#}", e);
    }
    info!(data_dir = %data_dir.display(), "starting taskmaster");

    let settings = load_settings(settings_file(&data_dir));
    let storage = JsonFileStorage::new(&data_dir);

    let mut app = AppState::new(
        Box::new(storage),
        Box::new(DesktopNotifier),
        Rc::new(SystemClock),
        settings,
        Instant::now(),
    )
    .with_settings_path(settings_file(&data_dir));

    if let Some(mode) = mode {
        app.set_mode(mode);
    }

    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let result = run_app(&mut terminal, &mut app);

    // Restore terminal
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    // Save on exit
    if let Err(e) = app.save() {
        error!(error = %e, "final save failed");
        eprintln!("Error saving tasks: {}", e);
    }

    if let Err(err) = result {
        error!(error = %err, "event loop failed");
        eprintln!("Error: {}", err);
    }

    info!("taskmaster stopped");
    Ok(())
}

fn run_app(terminal: &mut Terminal<CrosstermBackend<io::Stdout>>, app: &mut AppState) -> Result<()> {
    let poll_rate = ticker::tick_duration();

    loop {
        terminal.draw(|f| ui::render(f, app))?;

        // Handle events with timeout for ticking
        if event::poll(poll_rate)? {
            if let Event::Key(key) = event::read()? {
                // Only process key press events (ignore key release)
                if key.kind == KeyEventKind::Press && input::handle_key(app, key)? {
                    return Ok(());
                }
            }
        }

        // Fire due countdown / clock schedules
        app.on_tick(Instant::now());
    }
}
