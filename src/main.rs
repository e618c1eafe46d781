use anyhow::{Context, Result};
use clap::Parser;
use crossterm::{
    event::{self, Event, KeyEventKind},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::CrosstermBackend, Terminal};
use std::{fs::OpenOptions, io, path::PathBuf, sync::Mutex, time::Duration};
use tracing_subscriber::EnvFilter;

/// File manager table view
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Enable debug logging to <tmp>/filedeck-debug.log
    #[arg(short, long)]
    debug: bool,

    /// Enable vim keybindings (j/k, g/G)
    #[arg(long)]
    vim: bool,

    /// Path to config file (default: <config dir>/filedeck/config.yaml)
    #[arg(short, long)]
    config: Option<String>,

    /// JSON seed file replacing the built-in file list
    #[arg(short, long)]
    seed: Option<PathBuf>,
}

mod app;
mod config;
mod handlers;
mod ui;
mod utils;

use config::Config;
use filedeck::data::{self, FileListing, StaticListing};
use filedeck::model::Model;
use filedeck::ops::{FileOperations, UnwiredOperations};
use ui::icons::{IconMode, IconRenderer, IconTheme};

/// How long to wait for input before redrawing
const EVENT_POLL_MS: u64 = 100;

pub struct App {
    pub model: Model,

    operations: Box<dyn FileOperations>,
    icon_renderer: IconRenderer,

    /// Body rows that fit in the table area (updated every frame)
    page_size: usize,

    /// Track if last key was 'g' (for vim 'gg' command)
    last_key_was_g: bool,
}

impl App {
    fn new(config: &Config) -> Result<Self> {
        let listing = match &config.seed_file {
            Some(path) => StaticListing::new(data::load_seed_file(path)?),
            None => StaticListing::builtin()?,
        };
        let rows = listing.list(&config.folder_path)?;
        tracing::info!("Mounted table with {} rows", rows.len());

        let icon_mode = match config.icon_mode.as_str() {
            "nerdfont" => IconMode::NerdFont,
            _ => IconMode::Emoji,
        };

        Ok(Self {
            model: Model::new(
                rows,
                &config.folder_path,
                config.vim_mode,
                config.timestamp_mode(),
            ),
            operations: Box::new(UnwiredOperations),
            icon_renderer: IconRenderer::new(icon_mode, IconTheme::default()),
            page_size: 1,
            last_key_was_g: false,
        })
    }
}

fn init_logging(debug: bool) -> Result<()> {
    if !debug {
        return Ok(());
    }

    let log_path = utils::get_debug_log_path();
    let file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(&log_path)
        .with_context(|| format!("Failed to open debug log {}", log_path.display()))?;

    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("filedeck=debug"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(Mutex::new(file))
        .with_ansi(false)
        .init();

    tracing::debug!("Debug mode enabled");
    Ok(())
}

fn main() -> Result<()> {
    // Parse command-line arguments
    let args = Args::parse();

    init_logging(args.debug)?;

    // Load configuration
    let mut config = config::load_config(args.config)?;

    // Override config with CLI flags
    if args.vim {
        config.vim_mode = true;
    }
    if let Some(seed) = args.seed {
        config.seed_file = Some(seed);
    }

    // Initialize app
    let mut app = App::new(&config)?;

    // Setup terminal
    let mut terminal = setup_terminal()?;
    install_panic_hook();

    // Run app with error handler
    let result = run_app(&mut terminal, &mut app);

    // Cleanup terminal
    restore_terminal()?;
    terminal.show_cursor()?;

    // Return result after cleanup
    result
}

type Tui = Terminal<CrosstermBackend<io::Stdout>>;

/// Enter raw mode and the alternate screen, undoing both if any step fails
fn setup_terminal() -> Result<Tui> {
    enable_raw_mode().context("Failed to enable raw mode")?;
    let enter = || -> Result<Tui> {
        let mut stdout = io::stdout();
        execute!(stdout, EnterAlternateScreen)?;
        Ok(Terminal::new(CrosstermBackend::new(stdout))?)
    };
    enter().inspect_err(|_| {
        let _ = restore_terminal();
    })
}

fn restore_terminal() -> Result<()> {
    disable_raw_mode()?;
    execute!(io::stdout(), LeaveAlternateScreen)?;
    Ok(())
}

/// Put the terminal back before the default hook prints the panic
fn install_panic_hook() {
    let default_hook = std::panic::take_hook();
    std::panic::set_hook(Box::new(move |info| {
        let _ = restore_terminal();
        default_hook(info);
    }));
}

fn run_app<B: ratatui::backend::Backend>(terminal: &mut Terminal<B>, app: &mut App) -> Result<()> {
    loop {
        terminal.draw(|f| {
            ui::render(f, app);
        })?;

        if app.model.should_dismiss_toast() {
            app.model.dismiss_toast();
        }

        if app.model.ui.should_quit {
            tracing::info!("Quitting");
            break;
        }

        if event::poll(Duration::from_millis(EVENT_POLL_MS))? {
            // crossterm also emits release/repeat events on some platforms
            if let Event::Key(key) = event::read()? {
                if key.kind == KeyEventKind::Press {
                    handlers::handle_key(app, key)?;
                }
            }
        }
    }

    Ok(())
}
