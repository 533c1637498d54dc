// Disclosure panel component
//
// The openable/closable box driven by the toggle-panel action. Rendered
// as a centered overlay when the open flag is set.

use crate::tui::layout::Responsive;
use crate::tui::theme::Theme;
use ratatui::{
    layout::{Alignment, Rect},
    style::Style,
    text::Line,
    widgets::{Block, Borders, Clear, Paragraph},
    Frame,
};

/// Render the open disclosure panel centered in `area`
pub fn render(f: &mut Frame, area: Rect, theme: &Theme) {
    // Panel grows with the terminal, like a size-responsive modal
    let width = Responsive::base(34u16)
        .md(48)
        .lg(60)
        .resolve(area.width)
        .min(area.width.saturating_sub(2));
    let height = 5u16.min(area.height.saturating_sub(2));

    let x = area.x + (area.width.saturating_sub(width)) / 2;
    let y = area.y + (area.height.saturating_sub(height)) / 2;
    let panel_area = Rect::new(x, y, width, height);

    let block = Block::default()
        .borders(Borders::ALL)
        .title(" Panel ")
        .style(Style::default().bg(theme.panel_bg).fg(theme.panel_fg));

    let text = vec![
        Line::from("This is a panel you can open and close."),
        Line::from(""),
        Line::from("Press Esc to close"),
    ];

    let paragraph = Paragraph::new(text)
        .alignment(Alignment::Center)
        .block(block);

    f.render_widget(Clear, panel_area);
    f.render_widget(paragraph, panel_area);
}
