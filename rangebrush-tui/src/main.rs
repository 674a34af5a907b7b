//! Rangebrush TUI: brushable histogram over a set of values.
//!
//! Drag on the histogram to brush a range, or type exact bounds into the
//! Min / Max inputs. Every committed range lands in the history panel.
//! Set `RANGEBRUSH_LOG=<file>` to write a trace log while the UI runs.

use std::fs::File;
use std::io::{self, stdout};
use std::path::{Path, PathBuf};
use std::sync::Mutex;
use std::time::{Duration, Instant};

use anyhow::{Context, Result};
use clap::Parser;
use crossterm::event::{self, DisableMouseCapture, EnableMouseCapture, Event};
use crossterm::execute;
use crossterm::terminal::{
    disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen,
};
use ratatui::backend::CrosstermBackend;
use ratatui::Terminal;
use tracing_subscriber::EnvFilter;

use rangebrush_core::SelectorConfig;
use rangebrush_tui::{app::AppState, data_loader, input, persistence, sample_data, ui};

#[derive(Parser)]
#[command(name = "rangebrush", about = "Rangebrush: brushable histogram range selector")]
struct Cli {
    /// Values to histogram: a JSON array or whitespace/comma separated numbers.
    /// Defaults to a built-in sample.
    #[arg(long)]
    values: Option<PathBuf>,

    /// Selector config (TOML): track geometry and settle delay.
    #[arg(long)]
    config: Option<PathBuf>,

    /// Ignore and overwrite the saved session.
    #[arg(long, default_value_t = false)]
    fresh: bool,
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging()?;

    // Install a panic hook that restores the terminal before printing the panic.
    let default_hook = std::panic::take_hook();
    std::panic::set_hook(Box::new(move |info| {
        let _ = disable_raw_mode();
        let _ = execute!(io::stderr(), DisableMouseCapture, LeaveAlternateScreen);
        default_hook(info);
    }));

    let config = match &cli.config {
        Some(path) => SelectorConfig::load(path)
            .with_context(|| format!("Failed to load config: {}", path.display()))?,
        None => SelectorConfig::default(),
    };
    let values = match &cli.values {
        Some(path) => data_loader::load_values(path)?,
        None => sample_data::sample_values(),
    };

    let state_path = dirs::config_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join("rangebrush")
        .join("state.json");
    let persisted = if cli.fresh {
        persistence::PersistedState::default()
    } else {
        persistence::load(&state_path)
    };

    let mut app = AppState::new(values, &config, persisted.selection)?;
    persistence::apply(&mut app, &persisted);
    tracing::info!(
        values = app.values.len(),
        min = app.full_domain.min(),
        max = app.full_domain.max(),
        "session started"
    );

    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;
    terminal.clear()?;

    let result = run_app(&mut terminal, &mut app);

    // Save state before exit
    save_state(&state_path, &app);

    // Restore terminal
    disable_raw_mode()?;
    execute!(
        terminal.backend_mut(),
        DisableMouseCapture,
        LeaveAlternateScreen
    )?;
    terminal.show_cursor()?;

    result
}

fn run_app(terminal: &mut Terminal<CrosstermBackend<io::Stdout>>, app: &mut AppState) -> Result<()> {
    loop {
        // 1. Render
        terminal.draw(|f| ui::draw(f, app))?;

        // 2. Poll for input events (50ms timeout for ~20 FPS tick)
        if event::poll(Duration::from_millis(50))? {
            match event::read()? {
                Event::Key(key) => input::handle_key(app, key),
                Event::Mouse(mouse) => input::handle_mouse(app, mouse),
                _ => {}
            }
        }

        // 3. Commits raised by this turn's input, then the settle clock
        app.drain_commits();
        app.tick(Instant::now());

        // 4. Check quit
        if !app.running {
            break;
        }
    }
    Ok(())
}

fn save_state(path: &Path, app: &AppState) {
    let persisted = persistence::extract(app);
    if let Err(err) = persistence::save(path, &persisted) {
        tracing::warn!(path = %path.display(), error = %err, "failed to save session");
    }
}

/// File logging, only when `RANGEBRUSH_LOG` names a file; the terminal belongs to the UI.
fn init_logging() -> Result<()> {
    let Some(path) = std::env::var_os("RANGEBRUSH_LOG") else {
        return Ok(());
    };
    let file = File::create(&path)
        .with_context(|| format!("Failed to create log file: {}", Path::new(&path).display()))?;
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "rangebrush_core=debug,rangebrush_tui=debug".into()),
        )
        .with_ansi(false)
        .with_writer(Mutex::new(file))
        .init();
    Ok(())
}
