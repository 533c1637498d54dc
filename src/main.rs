// Hookbox - interactive widget playground for the terminal
//
// A single-screen TUI that wires a handful of classic UI interactions to
// keyboard actions: a disclosure panel, clipboard copy/paste, light/dark
// color modes, and width-aware layout.
//
// Architecture:
// - TUI (ratatui): renders the screen and owns all UI state
// - Event loop (tokio): multiplexes keyboard input, redraw ticks, and
//   completions of background clipboard reads
// - Logging: captured into an in-memory buffer so tracing output never
//   breaks through the alternate screen

mod cli;
mod clipboard;
mod config;
mod logging;
mod tui;

use anyhow::Result;
use clap::Parser;
use config::{Config, LogRotation};
use logging::{LogBuffer, TuiLogLayer};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

#[tokio::main]
async fn main() -> Result<()> {
    // Handle CLI subcommands first (config --show, --path, --reset)
    // If a command was handled, exit early
    let args = cli::Cli::parse();
    if cli::handle_command(&args) {
        return Ok(());
    }

    // Ensure config template exists (helps users discover options)
    Config::ensure_config_exists();

    let mut config = Config::from_env();
    if let Some(mode) = &args.mode {
        config.color_mode = mode.clone();
    }

    // Log buffer shared between the tracing layer and the TUI
    let log_buffer = LogBuffer::new();

    // Initialize tracing. Logs go to the in-memory buffer (shown in the
    // status bar); optionally also to rotating files.
    //
    // Precedence: RUST_LOG env var > config file > default "info"
    let default_filter = format!("hookbox={}", config.logging.level);
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| default_filter.into());

    // The guard must be kept alive for the duration of the program to ensure logs flush
    let _file_guard: Option<tracing_appender::non_blocking::WorkerGuard> =
        if config.logging.file_enabled {
            if let Err(e) = std::fs::create_dir_all(&config.logging.file_dir) {
                eprintln!(
                    "Warning: Could not create log directory {:?}: {}",
                    config.logging.file_dir, e
                );
                tracing_subscriber::registry()
                    .with(filter)
                    .with(TuiLogLayer::new(log_buffer.clone()))
                    .init();
                None
            } else {
                let file_appender = match config.logging.file_rotation {
                    LogRotation::Hourly => tracing_appender::rolling::hourly(
                        &config.logging.file_dir,
                        &config.logging.file_prefix,
                    ),
                    LogRotation::Daily => tracing_appender::rolling::daily(
                        &config.logging.file_dir,
                        &config.logging.file_prefix,
                    ),
                    LogRotation::Never => tracing_appender::rolling::never(
                        &config.logging.file_dir,
                        &config.logging.file_prefix,
                    ),
                };

                // Writes happen in a background thread; file layer uses JSON
                // for structured parsing
                let (non_blocking, guard) = tracing_appender::non_blocking(file_appender);
                tracing_subscriber::registry()
                    .with(filter)
                    .with(TuiLogLayer::new(log_buffer.clone()))
                    .with(
                        tracing_subscriber::fmt::layer()
                            .json()
                            .with_writer(non_blocking)
                            .with_ansi(false),
                    )
                    .init();
                Some(guard)
            }
        } else {
            tracing_subscriber::registry()
                .with(filter)
                .with(TuiLogLayer::new(log_buffer.clone()))
                .init();
            None
        };

    tracing::debug!("Starting with color mode {:?}", config.color_mode);

    tui::run(log_buffer, config).await
}
