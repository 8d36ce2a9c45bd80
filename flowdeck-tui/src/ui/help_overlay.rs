//! Help overlay — keybindings.

use ratatui::layout::Rect;
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Clear, Paragraph};
use ratatui::Frame;

use crate::theme;
use crate::ui::centered_rect;

pub fn render(f: &mut Frame, area: Rect) {
    let popup = centered_rect(50, 60, area);
    f.render_widget(Clear, popup);

    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(theme::accent())
        .title(" Help ")
        .title_style(theme::accent_bold());

    let mut lines: Vec<Line> = Vec::new();
    section(&mut lines, "Navigation");
    key(&mut lines, "j / k, ↓ / ↑", "Move cursor down / up");
    key(&mut lines, "g / G", "Jump to first / last row");
    lines.push(Line::from(""));

    section(&mut lines, "Disclosure");
    key(&mut lines, "Enter / Space", "Expand or collapse the header under the cursor");
    key(&mut lines, "l / →", "Expand (no-op if already expanded)");
    key(&mut lines, "h / ←", "Collapse, or jump to the parent role");
    lines.push(Line::from(""));

    section(&mut lines, "General");
    key(&mut lines, "?", "Toggle this help");
    key(&mut lines, "q / Ctrl+C", "Quit");
    lines.push(Line::from(""));
    lines.push(Line::from(Span::styled(
        "  Press Esc to close...",
        theme::neutral(),
    )));

    let para = Paragraph::new(lines).block(block);
    f.render_widget(para, popup);
}

fn section(lines: &mut Vec<Line>, title: &'static str) {
    lines.push(Line::from(Span::styled(
        format!(" {title}"),
        theme::accent_bold(),
    )));
}

fn key(lines: &mut Vec<Line>, binding: &'static str, what: &'static str) {
    lines.push(Line::from(vec![
        Span::styled(format!("  {binding:<16}"), theme::warning()),
        Span::styled(what, theme::muted()),
    ]));
}
