// TUI application state
//
// All UI state for the single interactive screen: the disclosure panel's
// open flag, the one-shot copy flag, the paste buffer, and the active
// color mode. Actions mutate this state directly; each completed action
// surfaces a toast.

use super::components::toast::Toast;
use super::input::InputHandler;
use super::theme::{ColorMode, Theme};
use crate::clipboard::ClipboardAccess;
use crate::config::Config;
use crate::logging::LogBuffer;
use crossterm::event::KeyCode;
use std::time::Duration;

/// The fixed payload written by the copy action
pub const COPY_PAYLOAD: &str = "HOLI";

/// Main application state for the TUI
pub struct App {
    /// Whether the disclosure panel is open
    pub panel_open: bool,

    /// Set after the first successful copy; never reset while running
    pub has_copied: bool,

    /// Last successfully pasted clipboard text
    pub pasted_text: String,

    /// Current color mode (light/dark)
    pub color_mode: ColorMode,

    /// Theme resolved from the current color mode
    pub theme: Theme,

    /// Whether the app should quit
    pub should_quit: bool,

    /// Active toast notification, if any
    pub toast: Option<Toast>,

    /// Paint the theme background over the whole frame
    pub use_theme_background: bool,

    /// Log buffer for the status bar's log tail
    pub log_buffer: LogBuffer,

    /// Configured toast display duration
    toast_duration: Duration,

    /// Input handler for once-per-press key behavior
    input_handler: InputHandler,
}

impl App {
    pub fn with_config(log_buffer: LogBuffer, config: &Config) -> Self {
        let color_mode = ColorMode::from_name(&config.color_mode);
        Self {
            panel_open: false,
            has_copied: false,
            pasted_text: String::new(),
            color_mode,
            theme: color_mode.theme(),
            should_quit: false,
            toast: None,
            use_theme_background: config.use_theme_background,
            log_buffer,
            toast_duration: Duration::from_millis(config.toast_duration_ms),
            input_handler: InputHandler::new(),
        }
    }

    /// Flip the disclosure panel between open and closed
    pub fn toggle_panel(&mut self) {
        self.panel_open = !self.panel_open;
    }

    /// Close the disclosure panel. Returns true if it was open.
    pub fn close_panel(&mut self) -> bool {
        let was_open = self.panel_open;
        self.panel_open = false;
        was_open
    }

    /// Flip between light and dark; derived colors re-resolve next frame
    pub fn toggle_color_mode(&mut self) {
        self.color_mode = self.color_mode.toggle();
        self.theme = self.color_mode.theme();
        tracing::info!("Color mode switched to {}", self.color_mode.name());
    }

    /// Write the fixed payload to the clipboard (at most once per run)
    ///
    /// Once `has_copied` is set the trigger is ignored, so repeated presses
    /// cannot re-fire the action or clear the flag. A failed write leaves
    /// the flag unset and surfaces an error toast.
    pub fn copy_fixed_text(&mut self, clipboard: &mut dyn ClipboardAccess) {
        if self.has_copied {
            return;
        }
        match clipboard.write_text(COPY_PAYLOAD) {
            Ok(()) => {
                self.has_copied = true;
                tracing::info!("Copied \"{}\" to clipboard", COPY_PAYLOAD);
                self.show_toast(Toast::success(
                    COPY_PAYLOAD,
                    "Text copied to the clipboard",
                ));
            }
            Err(e) => {
                tracing::warn!("Clipboard write failed: {:#}", e);
                self.show_toast(Toast::error("Copy failed", "Could not write the clipboard"));
            }
        }
    }

    /// Apply the outcome of a finished clipboard read
    ///
    /// Success replaces the paste buffer wholesale; failure leaves it
    /// untouched. With overlapping reads the last outcome to arrive wins.
    pub fn apply_paste_outcome(&mut self, outcome: Result<String, String>) {
        match outcome {
            Ok(text) => {
                self.pasted_text = text;
                tracing::info!("Pasted {} chars from clipboard", self.pasted_text.len());
                self.show_toast(Toast::success(
                    "Text pasted",
                    "Text pasted from the clipboard",
                ));
            }
            Err(reason) => {
                tracing::warn!("Clipboard read failed: {}", reason);
                self.show_toast(Toast::error("Error", "Could not read the clipboard"));
            }
        }
    }

    /// Show a toast, replacing any current one, with the configured duration
    pub fn show_toast(&mut self, toast: Toast) {
        self.toast = Some(toast.with_duration(self.toast_duration));
    }

    /// Dismiss the current toast early. Returns true if one was dismissed.
    pub fn dismiss_toast(&mut self) -> bool {
        match &self.toast {
            Some(toast) if toast.dismissible => {
                self.toast = None;
                true
            }
            _ => false,
        }
    }

    /// Drop the toast once its display duration has elapsed
    pub fn clear_expired_toast(&mut self) {
        if self.toast.as_ref().is_some_and(|t| t.is_expired()) {
            self.toast = None;
        }
    }

    /// Handle a key press - returns true if the action should be triggered
    pub fn handle_key_press(&mut self, key: KeyCode) -> bool {
        self.input_handler.handle_key_press(key)
    }

    /// Handle a key release
    pub fn handle_key_release(&mut self, key: KeyCode) {
        self.input_handler.handle_key_release(key);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tui::components::toast::Severity;
    use anyhow::{anyhow, Result};

    /// Stub clipboard: configurable contents, optional write failure
    struct StubClipboard {
        text: Option<String>,
        fail_writes: bool,
    }

    impl StubClipboard {
        fn with_text(text: &str) -> Self {
            Self {
                text: Some(text.to_string()),
                fail_writes: false,
            }
        }

        fn failing() -> Self {
            Self {
                text: None,
                fail_writes: true,
            }
        }
    }

    impl ClipboardAccess for StubClipboard {
        fn write_text(&mut self, text: &str) -> Result<()> {
            if self.fail_writes {
                return Err(anyhow!("no display server"));
            }
            self.text = Some(text.to_string());
            Ok(())
        }

        fn read_text(&mut self) -> Result<String> {
            self.text.clone().ok_or_else(|| anyhow!("clipboard empty"))
        }
    }

    fn test_app() -> App {
        App::with_config(LogBuffer::new(), &Config::default())
    }

    #[test]
    fn double_toggle_matches_single_toggle() {
        let mut single = test_app();
        single.toggle_panel();

        let mut triple = test_app();
        triple.toggle_panel();
        triple.toggle_panel();
        triple.toggle_panel();

        assert!(single.panel_open);
        assert_eq!(single.panel_open, triple.panel_open);
    }

    #[test]
    fn close_panel_reports_prior_state() {
        let mut app = test_app();
        assert!(!app.close_panel());
        app.toggle_panel();
        assert!(app.close_panel());
        assert!(!app.panel_open);
    }

    #[test]
    fn copy_sets_flag_and_emits_success_toast() {
        let mut app = test_app();
        let mut clipboard = StubClipboard::with_text("");

        app.copy_fixed_text(&mut clipboard);

        assert!(app.has_copied);
        assert_eq!(clipboard.text.as_deref(), Some(COPY_PAYLOAD));
        let toast = app.toast.expect("expected a toast");
        assert_eq!(toast.severity, Severity::Success);
    }

    #[test]
    fn copy_flag_is_monotonic() {
        let mut app = test_app();
        let mut clipboard = StubClipboard::with_text("");

        app.copy_fixed_text(&mut clipboard);
        assert!(app.has_copied);

        // Further triggers are ignored: no new toast, flag stays set
        app.toast = None;
        app.copy_fixed_text(&mut clipboard);
        app.copy_fixed_text(&mut clipboard);
        assert!(app.has_copied);
        assert!(app.toast.is_none());
    }

    #[test]
    fn failed_copy_leaves_flag_unset() {
        let mut app = test_app();
        let mut clipboard = StubClipboard::failing();

        app.copy_fixed_text(&mut clipboard);

        assert!(!app.has_copied);
        let toast = app.toast.expect("expected a toast");
        assert_eq!(toast.severity, Severity::Error);
    }

    #[test]
    fn paste_success_replaces_buffer() {
        let mut app = test_app();
        let mut clipboard = StubClipboard::with_text("abc");

        let outcome = clipboard.read_text().map_err(|e| e.to_string());
        app.apply_paste_outcome(outcome);

        assert_eq!(app.pasted_text, "abc");
        let toast = app.toast.expect("expected a toast");
        assert_eq!(toast.severity, Severity::Success);
    }

    #[test]
    fn paste_failure_leaves_buffer_unchanged() {
        let mut app = test_app();
        let mut clipboard = StubClipboard::failing();

        let outcome = clipboard.read_text().map_err(|e| e.to_string());
        app.apply_paste_outcome(outcome);

        assert_eq!(app.pasted_text, "");
        let toast = app.toast.expect("expected a toast");
        assert_eq!(toast.severity, Severity::Error);
    }

    #[test]
    fn overlapping_pastes_last_resolved_wins() {
        let mut app = test_app();
        app.apply_paste_outcome(Ok("first".to_string()));
        app.apply_paste_outcome(Ok("second".to_string()));
        assert_eq!(app.pasted_text, "second");
    }

    #[test]
    fn color_mode_round_trips_and_recolors() {
        let mut app = test_app();
        app.color_mode = ColorMode::Light;
        app.theme = app.color_mode.theme();
        let light_fg = app.theme.fg;
        let light_bg = app.theme.bg;

        app.toggle_color_mode();
        assert_eq!(app.color_mode, ColorMode::Dark);
        assert_ne!(app.theme.fg, light_fg);
        assert_ne!(app.theme.bg, light_bg);

        app.toggle_color_mode();
        assert_eq!(app.color_mode, ColorMode::Light);
        assert_eq!(app.theme.fg, light_fg);
    }

    #[test]
    fn dismiss_only_affects_dismissible_toasts() {
        let mut app = test_app();
        assert!(!app.dismiss_toast());

        app.show_toast(Toast::success("Copied", "done"));
        assert!(app.dismiss_toast());
        assert!(app.toast.is_none());
    }

    #[test]
    fn expired_toast_is_cleared() {
        let mut app = test_app();
        app.toast = Some(Toast::success("Copied", "done").with_duration(Duration::ZERO));
        app.clear_expired_toast();
        assert!(app.toast.is_none());
    }
}
