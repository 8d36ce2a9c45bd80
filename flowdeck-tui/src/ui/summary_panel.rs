//! Fixed summary panel — role/flow/step totals, recomputed every frame.

use ratatui::layout::{Constraint, Direction, Layout, Rect};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph};
use ratatui::Frame;

use flowdeck_core::Summary;

use crate::app::AppState;
use crate::theme;

pub fn render(f: &mut Frame, area: Rect, app: &AppState) {
    let summary = Summary::of(&app.catalog);

    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(theme::panel_border(false))
        .title(" Documentation Summary ")
        .title_style(theme::panel_title(false));
    let inner = block.inner(area);
    f.render_widget(block, area);

    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Ratio(1, 3),
            Constraint::Ratio(1, 3),
            Constraint::Ratio(1, 3),
        ])
        .split(inner);

    count_cell(f, chunks[0], summary.roles, "User Roles");
    count_cell(f, chunks[1], summary.flows, "User Flows");
    count_cell(f, chunks[2], summary.steps, "Total Steps Mapped");
}

fn count_cell(f: &mut Frame, area: Rect, count: usize, label: &str) {
    let line = Line::from(vec![
        Span::styled(format!("{count} "), theme::positive().add_modifier(ratatui::style::Modifier::BOLD)),
        Span::styled(label, theme::muted()),
    ]);
    f.render_widget(Paragraph::new(line).centered(), area);
}
