// Status bar component
//
// Renders key hints at the bottom plus current mode, breakpoint, and the
// most recent captured log line.
//
// Adapts to terminal width:
// - Wide: full hints with the latest log entry
// - Narrow: compact hint string only

use crate::tui::app::App;
use crate::tui::layout::Breakpoint;
use ratatui::{
    layout::Rect,
    widgets::{Block, Borders, Paragraph},
    Frame,
};

/// Render the status bar with key hints and state
pub fn render(f: &mut Frame, area: Rect, app: &App) {
    let bp = Breakpoint::from_width(area.width);

    let copy_hint = if app.has_copied {
        "✓ copied".to_string()
    } else {
        "c copy".to_string()
    };

    let status_text = if !bp.at_least(Breakpoint::Md) {
        // Compact format for narrow terminals
        format!(" o panel │ {} │ p paste │ m mode │ q quit", copy_hint)
    } else {
        // Full format with breakpoint and latest log line
        let log_tail = match app.log_buffer.latest() {
            Some(entry) => format!(
                " │ {} {} {}",
                entry.timestamp.format("%H:%M:%S"),
                entry.level.as_str(),
                entry.message
            ),
            None => String::new(),
        };
        format!(
            " o panel │ {} │ p paste │ m mode │ q quit │ {}:{}{}",
            copy_hint,
            bp.name(),
            area.width,
            log_tail,
        )
    };

    let status = Paragraph::new(status_text)
        .style(app.theme.status_style())
        .block(Block::default().borders(Borders::TOP));

    f.render_widget(status, area);
}
