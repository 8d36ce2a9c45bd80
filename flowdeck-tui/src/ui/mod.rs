//! Top-level UI layout — flow tree, summary panel, status bar.

pub mod flow_tree;
pub mod help_overlay;
pub mod status_bar;
pub mod summary_panel;

use ratatui::layout::{Constraint, Direction, Layout, Rect};
use ratatui::widgets::{Block, Borders};
use ratatui::Frame;

use crate::app::{AppState, Overlay};
use crate::theme;

/// Draw the entire UI.
pub fn draw(f: &mut Frame, app: &AppState) {
    // Split: tree area + summary panel + 1-line status bar.
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Min(3),
            Constraint::Length(4),
            Constraint::Length(1),
        ])
        .split(f.area());

    let tree_area = chunks[0];
    let summary_area = chunks[1];
    let status_area = chunks[2];

    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(theme::panel_border(true))
        .title(" User Flows & Stories ")
        .title_style(theme::panel_title(true));
    let inner = block.inner(tree_area);
    f.render_widget(block, tree_area);
    flow_tree::render(f, inner, app);

    summary_panel::render(f, summary_area, app);
    status_bar::render(f, status_area, app);

    // Overlays on top.
    if app.overlay == Overlay::Help {
        help_overlay::render(f, tree_area);
    }
}

/// Compute a centered rect for overlays.
pub fn centered_rect(percent_x: u16, percent_y: u16, area: Rect) -> Rect {
    let popup_layout = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Percentage((100 - percent_y) / 2),
            Constraint::Percentage(percent_y),
            Constraint::Percentage((100 - percent_y) / 2),
        ])
        .split(area);

    Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage((100 - percent_x) / 2),
            Constraint::Percentage(percent_x),
            Constraint::Percentage((100 - percent_x) / 2),
        ])
        .split(popup_layout[1])[1]
}
