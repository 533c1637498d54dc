// TUI module - Terminal User Interface
//
// This module manages the terminal UI using ratatui. It handles:
// - Terminal initialization and cleanup
// - Event loop (keyboard input, timer ticks, finished clipboard reads)
// - Rendering the UI

pub mod app;
pub mod components;
pub mod input;
pub mod layout;
pub mod theme;
pub mod ui;

use crate::clipboard::{ClipboardAccess, SystemClipboard};
use crate::config::Config;
use crate::logging::LogBuffer;
use anyhow::{Context, Result};
use app::App;
use crossterm::{
    event::{self, Event, KeyCode, KeyEvent, KeyEventKind},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::CrosstermBackend, Terminal};
use std::io;
use std::time::Duration;
use tokio::sync::mpsc;

/// Events delivered to the UI loop from background work
pub enum AppEvent {
    /// A clipboard read finished: the text on success, a reason on failure
    PasteFinished(Result<String, String>),
}

/// Run the TUI
///
/// Sets up the terminal, runs the event loop, and restores the terminal
/// when done - including when the loop returns an error.
pub async fn run(log_buffer: LogBuffer, config: Config) -> Result<()> {
    enable_raw_mode().context("Failed to enable raw mode")?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen).context("Failed to setup terminal")?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend).context("Failed to create terminal")?;

    let mut app = App::with_config(log_buffer, &config);
    let result = run_event_loop(&mut terminal, &mut app, &config).await;

    disable_raw_mode().context("Failed to disable raw mode")?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen).context("Failed to restore terminal")?;
    terminal.show_cursor().context("Failed to show cursor")?;

    result
}

/// Main event loop
///
/// tokio::select! multiplexes three sources:
/// 1. Keyboard input (polled so the loop never blocks on the terminal)
/// 2. Timer ticks (periodic redraws - toast expiry, terminal resize)
/// 3. Completions of background clipboard reads
async fn run_event_loop(
    terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    app: &mut App,
    config: &Config,
) -> Result<()> {
    let (event_tx, mut event_rx) = mpsc::channel::<AppEvent>(16);
    let mut tick_interval = tokio::time::interval(Duration::from_millis(config.tick_rate_ms));

    loop {
        terminal
            .draw(|f| ui::draw(f, app))
            .context("Failed to draw terminal")?;

        tokio::select! {
            // Keyboard input
            _ = async {
                if event::poll(Duration::from_millis(10)).unwrap_or(false) {
                    if let Ok(Event::Key(key_event)) = event::read() {
                        handle_key_event(app, key_event, &event_tx);
                    }
                }
            } => {}

            // Periodic tick for redrawing
            _ = tick_interval.tick() => {}

            // Finished clipboard reads
            Some(app_event) = event_rx.recv() => {
                match app_event {
                    AppEvent::PasteFinished(outcome) => app.apply_paste_outcome(outcome),
                }
            }
        }

        if app.should_quit {
            break;
        }
    }

    Ok(())
}

/// Handle keyboard input
fn handle_key_event(app: &mut App, key_event: KeyEvent, event_tx: &mpsc::Sender<AppEvent>) {
    match key_event.kind {
        KeyEventKind::Press => {
            let key = key_event.code;
            // Once per press (debounced for terminals without release events)
            if !app.handle_key_press(key) {
                return;
            }
            match key {
                KeyCode::Char('q') | KeyCode::Char('Q') => app.should_quit = true,
                KeyCode::Char('o') | KeyCode::Enter => app.toggle_panel(),
                KeyCode::Esc => {
                    // Toast first, then the panel
                    if !app.dismiss_toast() {
                        app.close_panel();
                    }
                }
                KeyCode::Char('c') => {
                    let mut clipboard = SystemClipboard;
                    app.copy_fixed_text(&mut clipboard);
                }
                KeyCode::Char('p') => {
                    tracing::debug!("Clipboard read requested");
                    spawn_paste(event_tx.clone());
                }
                KeyCode::Char('m') => app.toggle_color_mode(),
                _ => {}
            }
        }
        KeyEventKind::Release => app.handle_key_release(key_event.code),
        _ => {}
    }
}

/// Start a background clipboard read and report the outcome to the loop
///
/// The read runs on the blocking pool so a slow clipboard provider never
/// stalls rendering. Nothing cancels an in-flight read; overlapping
/// requests race and the last outcome to arrive wins.
fn spawn_paste(event_tx: mpsc::Sender<AppEvent>) {
    tokio::spawn(async move {
        let outcome = tokio::task::spawn_blocking(|| {
            SystemClipboard.read_text().map_err(|e| format!("{:#}", e))
        })
        .await
        .unwrap_or_else(|e| Err(e.to_string()));
        let _ = event_tx.send(AppEvent::PasteFinished(outcome)).await;
    });
}
