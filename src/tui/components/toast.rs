// Toast notification component
//
// A non-blocking overlay that auto-dismisses after a configurable duration.
// Renders in the bottom-right corner on top of all other content.

use crate::tui::theme::Theme;
use ratatui::{
    layout::{Alignment, Rect},
    style::{Modifier, Style},
    text::{Line, Text},
    widgets::{Block, Borders, Clear, Paragraph},
    Frame,
};
use std::time::{Duration, Instant};
use unicode_width::UnicodeWidthStr;

/// Toast severity - selects the border/title color
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Severity {
    Success,
    Error,
}

/// A toast notification that auto-dismisses
#[derive(Debug, Clone)]
pub struct Toast {
    /// Short headline
    pub title: String,
    /// Longer description below the title
    pub message: String,
    pub severity: Severity,
    /// Whether Esc may dismiss the toast before it expires
    pub dismissible: bool,
    /// When the toast was created
    created_at: Instant,
    /// How long to show the toast
    duration: Duration,
}

impl Toast {
    /// Create a new toast with default 2-second duration
    pub fn new(severity: Severity, title: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            message: message.into(),
            severity,
            dismissible: true,
            created_at: Instant::now(),
            duration: Duration::from_secs(2),
        }
    }

    /// Success toast
    pub fn success(title: impl Into<String>, message: impl Into<String>) -> Self {
        Self::new(Severity::Success, title, message)
    }

    /// Error toast
    pub fn error(title: impl Into<String>, message: impl Into<String>) -> Self {
        Self::new(Severity::Error, title, message)
    }

    /// Override the display duration
    pub fn with_duration(mut self, duration: Duration) -> Self {
        self.duration = duration;
        self
    }

    /// Check if the toast has expired and should be removed
    pub fn is_expired(&self) -> bool {
        self.created_at.elapsed() >= self.duration
    }

    /// Render the toast in the bottom-right corner
    ///
    /// Uses `Clear` widget to ensure toast is visible on top of other content.
    pub fn render(&self, f: &mut Frame, area: Rect, theme: &Theme) {
        let accent = match self.severity {
            Severity::Success => theme.success,
            Severity::Error => theme.error,
        };

        // Width fits the longer of title/message plus borders and padding;
        // unicode-width keeps emoji and CJK from overflowing the box
        let content = self.title.width().max(self.message.width()) as u16;
        let width = (content + 4).min(area.width.saturating_sub(4));
        let height = 4; // title + message + borders

        // Position: bottom-right corner, offset by 2 cells from edge
        let x = area.right().saturating_sub(width + 2);
        let y = area.bottom().saturating_sub(height + 2);
        let toast_area = Rect::new(x, y, width, height);

        let block = Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(accent))
            .style(Style::default().bg(theme.bg));

        let text = Text::from(vec![
            Line::styled(
                self.title.clone(),
                Style::default().fg(accent).add_modifier(Modifier::BOLD),
            ),
            Line::styled(self.message.clone(), Style::default().fg(theme.fg)),
        ]);

        let paragraph = Paragraph::new(text).alignment(Alignment::Center).block(block);

        // Clear the area first so toast appears on top
        f.render_widget(Clear, toast_area);
        f.render_widget(paragraph, toast_area);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fresh_toast_is_not_expired() {
        let toast = Toast::success("Copied", "Text copied to clipboard");
        assert!(!toast.is_expired());
        assert_eq!(toast.severity, Severity::Success);
        assert!(toast.dismissible);
    }

    #[test]
    fn zero_duration_expires_immediately() {
        let toast = Toast::error("Error", "oops").with_duration(Duration::ZERO);
        assert!(toast.is_expired());
    }
}
