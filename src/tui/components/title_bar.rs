// Title bar component
//
// Renders the app title plus a screen-size label that resolves through
// the breakpoint system, so resizing the terminal flips the label.

use crate::tui::app::App;
use crate::tui::layout::Responsive;
use ratatui::{
    layout::Rect,
    widgets::{Block, Borders, Paragraph},
    Frame,
};

/// Render the title bar at the top of the screen
pub fn render(f: &mut Frame, area: Rect, app: &App) {
    let screen_label = Responsive::base("small screen")
        .md("large screen")
        .resolve(area.width);

    let title_text = format!(
        " 🧩 Hookbox ── {} ── {} mode",
        screen_label,
        app.color_mode.name()
    );

    let title = Paragraph::new(title_text)
        .style(app.theme.title_style())
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(app.theme.border_style()),
        );

    f.render_widget(title, area);
}
