//! Widget Board - terminal dashboard of draggable, resizable widgets
//!
//! Charts, KPI tiles and progress trackers laid out on a pixel canvas and
//! drawn with ratatui. State is persisted after every change.

mod config;
mod core;
mod data;
mod frontend;
mod theme;
mod widgets;

use crate::core::storage::{FileStorage, MemoryStorage, StateStorage};
use crate::core::transfer::FsConfigFiles;
use crate::core::{document, samples, AppCore, DashboardStore, InputResult};
use crate::data::InputMode;
use anyhow::{Context, Result};
use clap::{Parser as ClapParser, Subcommand};
use frontend::{Frontend, FrontendEvent, TuiFrontend};
use std::path::PathBuf;

#[derive(ClapParser)]
#[command(name = "widget-board")]
#[command(about = "Terminal dashboard of draggable chart, KPI and progress widgets", long_about = None)]
struct Cli {
    /// Configuration file path
    #[arg(short, long, value_name = "FILE")]
    config: Option<PathBuf>,

    /// Custom data directory (default: ~/.widget-board)
    /// Can also be set via WIDGET_BOARD_DIR environment variable
    #[arg(long, value_name = "DIR")]
    data_dir: Option<PathBuf>,

    /// Keep the dashboard in memory only; nothing is read from or written to disk
    #[arg(long)]
    ephemeral: bool,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Write the stored dashboard as pretty-printed JSON
    Export {
        /// Output file (default: dashboard-config.json in the export directory)
        #[arg(short, long, value_name = "FILE")]
        out: Option<PathBuf>,
    },
    /// Replace the stored dashboard with a JSON document
    Import {
        #[arg(value_name = "FILE")]
        file: PathBuf,
    },
    /// Check that a JSON document would import cleanly
    Validate {
        #[arg(value_name = "FILE")]
        file: PathBuf,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Set custom data directory before anything resolves paths from it
    if let Some(data_dir) = &cli.data_dir {
        std::env::set_var(config::DATA_DIR_ENV, data_dir);
    }

    init_logging()?;
    if let Some(data_dir) = &cli.data_dir {
        tracing::info!("Using custom data directory: {:?}", data_dir);
    }

    let config = match &cli.config {
        Some(path) => config::Config::load_from_path(path, &config::Config::base_dir()?)?,
        None => config::Config::load()?,
    };

    if let Some(command) = cli.command {
        return run_command(command, &config, cli.ephemeral);
    }

    run_tui(config, cli.ephemeral)
}

/// TUI apps can't log to stdout, so we write to a file in the data directory.
/// Use the RUST_LOG env var to control the level, e.g. RUST_LOG=debug
fn init_logging() -> Result<()> {
    let log_path = config::Config::log_path()?;
    if let Some(parent) = log_path.parent() {
        std::fs::create_dir_all(parent)
            .with_context(|| format!("Failed to create {}", parent.display()))?;
    }
    let log_file = std::fs::OpenOptions::new()
        .create(true)
        .append(true)
        .open(&log_path)
        .with_context(|| format!("Failed to open log file {}", log_path.display()))?;

    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .with_writer(std::sync::Mutex::new(log_file))
        .with_ansi(false) // No color codes in log file
        .init();
    Ok(())
}

fn open_store(config: &config::Config, ephemeral: bool) -> DashboardStore {
    let storage: Box<dyn StateStorage> = if ephemeral {
        Box::new(MemoryStorage::new())
    } else {
        Box::new(FileStorage::new(config.state_dir()))
    };
    DashboardStore::open(storage, samples::default_state(config.canvas_size()))
}

fn run_command(command: Commands, config: &config::Config, ephemeral: bool) -> Result<()> {
    match command {
        Commands::Export { out } => {
            let store = open_store(config, ephemeral);
            let path = match out {
                Some(path) => {
                    std::fs::write(&path, store.export_json()?)
                        .with_context(|| format!("Failed to write {}", path.display()))?;
                    path
                }
                None => store.export_config(&mut FsConfigFiles::new(config.export_dir()))?,
            };
            println!("✓ Exported {} widgets to {}", store.widgets().len(), path.display());
        }
        Commands::Import { file } => {
            let text = std::fs::read_to_string(&file)
                .with_context(|| format!("Failed to read {}", file.display()))?;
            let mut store = open_store(config, ephemeral);
            match store.import_config(&text) {
                Ok(count) => println!("✓ Imported {} widgets from {}", count, file.display()),
                Err(e) => {
                    eprintln!("✗ Import failed: {}", e);
                    std::process::exit(1);
                }
            }
        }
        Commands::Validate { file } => {
            println!("Validating dashboard file: {:?}", file);
            let text = std::fs::read_to_string(&file)
                .with_context(|| format!("Failed to read {}", file.display()))?;
            match document::parse(&text) {
                Ok(state) => {
                    println!("✓ Dashboard is valid");
                    println!("  {} widgets, canvas {}x{}", state.widgets.len(), state.canvas_size.width, state.canvas_size.height);
                }
                Err(e) => {
                    eprintln!("✗ Invalid dashboard: {}", e);
                    std::process::exit(1);
                }
            }
        }
    }
    Ok(())
}

/// Run TUI frontend
fn run_tui(config: config::Config, ephemeral: bool) -> Result<()> {
    let store = open_store(&config, ephemeral);
    let files = Box::new(FsConfigFiles::new(config.export_dir()));
    let mut frontend = TuiFrontend::new(&config)?;
    let mut app_core = AppCore::new(config, store, files);

    tracing::info!("Widget Board started");

    while app_core.running {
        for event in frontend.poll_events()? {
            handle_frontend_event(event, &mut app_core, &mut frontend);
            if !app_core.running {
                break;
            }
        }

        if app_core.needs_render {
            frontend.render(&app_core)?;
            app_core.needs_render = false;
        }
    }

    frontend.cleanup()?;
    tracing::info!("Widget Board stopped");
    Ok(())
}

fn handle_frontend_event(event: FrontendEvent, app_core: &mut AppCore, frontend: &mut TuiFrontend) {
    let in_modal = app_core.ui_state.input_mode == InputMode::AddWidget;
    match event {
        FrontendEvent::Key(key) => {
            let ctrl_c = key.code == crossterm::event::KeyCode::Char('c')
                && key.modifiers.contains(crossterm::event::KeyModifiers::CONTROL);
            if in_modal && !ctrl_c {
                frontend.modal_key(key, app_core);
            } else if app_core.handle_key(key.code, key.modifiers) == InputResult::OpenAddWidget {
                frontend.open_modal();
            }
        }
        FrontendEvent::Pointer { kind, column, row } => {
            let pointer = frontend.pointer_event(kind, column, row, app_core);
            if app_core.handle_pointer(pointer) == InputResult::OpenAddWidget {
                frontend.open_modal();
            }
        }
        FrontendEvent::Paste { text } => {
            if in_modal {
                frontend.modal_paste(&text, app_core);
            } else {
                app_core.paste(&text);
            }
        }
        FrontendEvent::Resize { width, height } => {
            frontend.resize(width, height);
            app_core.needs_render = true;
        }
    }
}
