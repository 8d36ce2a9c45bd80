//! Bottom status bar — key hints and the header under the cursor.

use ratatui::layout::Rect;
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;
use ratatui::Frame;

use crate::app::{AppState, TreeRow};
use crate::theme;

pub fn render(f: &mut Frame, area: Rect, app: &AppState) {
    let mut spans: Vec<Span> = vec![Span::styled(
        " j/k:move  Enter:toggle  h/l:collapse/expand  g/G:top/bottom  ?:help  q:quit",
        theme::muted(),
    )];

    let context = match app.cursor_item() {
        Some(TreeRow::Role(id)) => app.catalog.role(&id).map(|r| r.name.clone()),
        Some(TreeRow::Flow(id)) => app.catalog.flow(&id).map(|f| f.title.clone()),
        None => None,
    };
    if let Some(name) = context {
        spans.push(Span::raw(" | "));
        spans.push(Span::styled(name, theme::accent()));
    }

    f.render_widget(Paragraph::new(Line::from(spans)), area);
}
