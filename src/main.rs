mod app;
mod config;
mod drama;
mod input;
mod ui;

use anyhow::{Context, Result};
use clap::Parser;
use crossterm::{
    cursor::Show,
    event::{self, DisableMouseCapture, EnableMouseCapture},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::CrosstermBackend, Terminal};
use std::fs::{self, File};
use std::io;
use std::path::{Path, PathBuf};
use std::sync::Arc;
use std::time::Duration;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use app::App;
use config::Config;
use ui::theme::ColorMode;

#[derive(Parser, Debug)]
#[command(name = "drakor")]
#[command(about = "Browse and favorite Korean dramas in the terminal")]
#[command(version)]
struct Cli {
    /// Config file path [default: <config dir>/drakor/config.toml]
    #[arg(long)]
    config: Option<String>,

    /// Log file path [default: <cache dir>/drakor/drakor.log]
    #[arg(long)]
    log_file: Option<String>,

    /// Start in light mode regardless of config
    #[arg(long)]
    light: bool,

    /// Disable mouse capture
    #[arg(long)]
    no_mouse: bool,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let log_path: PathBuf = match &cli.log_file {
        Some(path) => shellexpand::tilde(path).into_owned().into(),
        None => Config::default_log_path(),
    };
    init_logging(&log_path);

    // Load config
    let config_path = cli
        .config
        .unwrap_or_else(|| Config::default_path().to_string_lossy().into_owned());
    let config = Config::load(&config_path)?;
    let mouse = config.behavior.mouse && !cli.no_mouse;
    let tick_rate = Duration::from_millis(config.behavior.tick_rate_ms.max(10));
    let mode_override = cli.light.then_some(ColorMode::Light);

    let mut app = App::new(drama::builtin_catalog(), config, mode_override);

    let original_hook = std::panic::take_hook();
    std::panic::set_hook(Box::new(move |panic| {
        restore_terminal(mouse);
        original_hook(panic);
    }));

    // Setup terminal; the guard restores it on every exit path from here on
    enable_raw_mode().context("Failed to enable raw mode")?;
    let _guard = TerminalGuard::new(move || restore_terminal(mouse));

    let mut stdout = io::stdout();
    if mouse {
        execute!(stdout, EnterAlternateScreen, EnableMouseCapture)
            .context("Failed to enter alternate screen")?;
    } else {
        execute!(stdout, EnterAlternateScreen).context("Failed to enter alternate screen")?;
    }
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend).context("Failed to create terminal")?;

    run_app(&mut terminal, &mut app, tick_rate)
}

/// Log to a file; the TUI owns stdout and stderr would draw over it.
/// Logging is disabled if the file cannot be created.
fn init_logging(path: &Path) {
    let fmt_layer = open_log_file(path).map(|file| {
        tracing_subscriber::fmt::layer()
            .with_writer(Arc::new(file))
            .with_ansi(false)
    });

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "drakor=warn".into()),
        )
        .with(fmt_layer)
        .init();
}

/// Create the log file and any missing parent directories
fn open_log_file(path: &Path) -> Option<File> {
    path.parent()
        .map_or(Ok(()), fs::create_dir_all)
        .and_then(|_| File::create(path))
        .ok()
}

/// Undo raw mode, the alternate screen and mouse capture.
/// Each step runs even if an earlier one fails.
fn restore_terminal(mouse: bool) {
    if let Err(e) = disable_raw_mode() {
        tracing::warn!("Failed to disable raw mode: {}", e);
    }
    let mut stdout = io::stdout();
    if mouse {
        if let Err(e) = execute!(stdout, DisableMouseCapture) {
            tracing::warn!("Failed to disable mouse capture: {}", e);
        }
    }
    if let Err(e) = execute!(stdout, LeaveAlternateScreen, Show) {
        tracing::warn!("Failed to leave alternate screen: {}", e);
    }
}

/// Runs its restore action when dropped: on return, on `?` and while unwinding
struct TerminalGuard<F: FnMut()> {
    restore: F,
}

impl<F: FnMut()> TerminalGuard<F> {
    fn new(restore: F) -> Self {
        Self { restore }
    }
}

impl<F: FnMut()> Drop for TerminalGuard<F> {
    fn drop(&mut self) {
        (self.restore)();
    }
}

fn run_app<B: ratatui::backend::Backend>(
    terminal: &mut Terminal<B>,
    app: &mut App,
    tick_rate: Duration,
) -> Result<()> {
    loop {
        terminal.draw(|f| ui::draw(f, app))?;

        if event::poll(tick_rate)? {
            let event = event::read()?;
            if let Some(command) = input::command_for_event(&event) {
                tracing::debug!("Command: {:?}", command);
                app.apply(command);
            }
        }

        if app.should_quit() {
            tracing::info!("Exiting");
            return Ok(());
        }
    }
}
