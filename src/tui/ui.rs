// Screen composition - called on every frame
//
// Vertical shell: title bar / content / status bar. The content area
// holds the action list and the paste buffer; the disclosure panel and
// toast render last so they overlay everything else.

use super::app::{App, COPY_PAYLOAD};
use super::components;
use super::theme::color_hex;
use ratatui::layout::{Constraint, Direction, Layout, Rect};
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph};
use ratatui::Frame;

pub fn draw(f: &mut Frame, app: &mut App) {
    render_frame(f, app);
    // Expired toasts drop after the frame so they show through their
    // final tick
    app.clear_expired_toast();
}

fn render_frame(f: &mut Frame, app: &App) {
    // Theme background over the whole frame (respects the config toggle)
    if app.use_theme_background {
        let bg = Block::default().style(Style::default().bg(app.theme.bg));
        f.render_widget(bg, f.area());
    }

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // title bar
            Constraint::Min(6),    // content
            Constraint::Length(2), // status bar
        ])
        .split(f.area());

    components::title_bar::render(f, chunks[0], app);

    let content = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Min(4), Constraint::Length(3)])
        .split(chunks[1]);

    render_actions(f, content[0], app);
    render_paste_buffer(f, content[1], app);

    components::status_bar::render(f, chunks[2], app);

    // Overlays on top of the content
    if app.panel_open {
        components::disclosure::render(f, f.area(), &app.theme);
    }
    if let Some(ref toast) = app.toast {
        toast.render(f, f.area(), &app.theme);
    }
}

/// The action list: one line per interaction, restyled by current state
fn render_actions(f: &mut Frame, area: Rect, app: &App) {
    let theme = &app.theme;
    let key_style = theme.accent_style();
    let base = theme.base_style();
    // Resolved through the named-token lookup, like a component library's
    // token hook
    let accent = theme.token("accent").unwrap_or(theme.accent);

    let copy_line = if app.has_copied {
        Line::from(vec![
            Span::styled("✓  ", Style::default().fg(theme.success)),
            Span::styled(
                "Text copied!",
                Style::default().fg(theme.success).add_modifier(Modifier::BOLD),
            ),
            Span::styled("  (one-shot)", theme.muted_style()),
        ])
    } else {
        Line::from(vec![
            Span::styled("c", key_style),
            Span::styled(
                format!("  Copy \"{}\" to the clipboard", COPY_PAYLOAD),
                base,
            ),
        ])
    };

    let lines = vec![
        Line::from(vec![
            Span::styled("o", key_style),
            Span::styled("  Open/close the panel", base),
        ]),
        copy_line,
        Line::from(vec![
            Span::styled("p", key_style),
            Span::styled("  Paste text from the clipboard", base),
        ]),
        Line::from(vec![
            Span::styled("m", key_style),
            Span::styled(
                format!("  Switch to {} mode", app.color_mode.toggle().name()),
                base,
            ),
        ]),
        Line::from(""),
        Line::from(vec![
            Span::styled("Accent token resolves to ", theme.muted_style()),
            Span::styled(color_hex(accent), theme.accent_style()),
            Span::styled(" in this mode", theme.muted_style()),
        ]),
    ];

    let actions = Paragraph::new(lines).block(
        Block::default()
            .borders(Borders::ALL)
            .title(" Actions ")
            .border_style(theme.border_style()),
    );

    f.render_widget(actions, area);
}

/// The paste buffer: read-only box holding the last pasted text
fn render_paste_buffer(f: &mut Frame, area: Rect, app: &App) {
    let theme = &app.theme;

    let contents = if app.pasted_text.is_empty() {
        Line::styled(
            "press p to paste from the clipboard",
            theme.muted_style().add_modifier(Modifier::ITALIC),
        )
    } else {
        Line::styled(app.pasted_text.clone(), theme.base_style())
    };

    let buffer = Paragraph::new(contents).block(
        Block::default()
            .borders(Borders::ALL)
            .title(" Pasted text ")
            .border_style(theme.border_style()),
    );

    f.render_widget(buffer, area);
}
