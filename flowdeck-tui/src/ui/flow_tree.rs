//! The disclosure tree — role headers, flow headers, expanded flow detail.
//!
//! Rendering is a pure function of the catalog and disclosure state. Every
//! role is always listed; the expanded role lists its flows; the expanded
//! flow shows its touchpoints and numbered steps. A stale expanded-flow id
//! that matches nothing under the expanded role renders no detail panel.

use ratatui::layout::Rect;
use ratatui::style::Modifier;
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;
use ratatui::Frame;

use flowdeck_core::Flow;

use crate::app::AppState;
use crate::theme;

pub fn render(f: &mut Frame, area: Rect, app: &AppState) {
    let mut lines: Vec<Line> = Vec::new();
    let mut cursor_line = 0usize;
    let mut row = 0usize;

    for role in &app.catalog.roles {
        let is_expanded = app.disclosure.is_role_expanded(&role.id);
        let is_cursor = row == app.cursor.row;
        if is_cursor {
            cursor_line = lines.len();
        }

        let arrow = if is_expanded { "▾" } else { "▸" };
        let role_style = if is_cursor {
            theme::accent().add_modifier(Modifier::REVERSED)
        } else {
            theme::role_accent(&role.accent).add_modifier(Modifier::BOLD)
        };
        lines.push(Line::from(vec![
            Span::styled(format!("{arrow} "), theme::muted()),
            Span::styled(format!("{} {}", role.icon, role.name), role_style),
            Span::styled(format!("  ({} user flows)", role.flows.len()), theme::muted()),
        ]));
        row += 1;

        if is_expanded {
            for flow in &role.flows {
                let is_cursor = row == app.cursor.row;
                if is_cursor {
                    cursor_line = lines.len();
                }
                let flow_expanded = app.disclosure.is_flow_expanded(&flow.id);

                let arrow = if flow_expanded { "▾" } else { "▸" };
                let title_style = if is_cursor {
                    theme::accent().add_modifier(Modifier::REVERSED)
                } else if flow_expanded {
                    theme::accent()
                } else {
                    theme::text()
                };
                lines.push(Line::from(vec![
                    Span::raw("  "),
                    Span::styled(format!("{arrow} "), theme::muted()),
                    Span::styled(flow.title.as_str(), title_style),
                ]));
                lines.push(Line::from(vec![
                    Span::raw("     "),
                    Span::styled(
                        flow.story.as_str(),
                        theme::text_secondary().add_modifier(Modifier::ITALIC),
                    ),
                ]));
                row += 1;

                if flow_expanded {
                    push_flow_detail(&mut lines, flow);
                }
            }
        }
    }

    // Derive the scroll offset from the cursor position so the cursor row
    // stays visible without any mutable render state.
    let height = area.height as usize;
    let max_scroll = lines.len().saturating_sub(height);
    let scroll = cursor_line
        .saturating_sub(height / 2)
        .min(max_scroll);

    let para = Paragraph::new(lines).scroll((scroll as u16, 0));
    f.render_widget(para, area);
}

/// Touchpoint badges and numbered steps for the expanded flow.
fn push_flow_detail<'a>(lines: &mut Vec<Line<'a>>, flow: &'a Flow) {
    lines.push(Line::from(""));
    let mut badge_spans: Vec<Span> = vec![
        Span::raw("     "),
        Span::styled("Touchpoints: ", theme::muted().add_modifier(Modifier::BOLD)),
    ];
    for touchpoint in &flow.touchpoints {
        badge_spans.push(Span::styled(format!("[{touchpoint}]"), theme::neutral()));
        badge_spans.push(Span::raw(" "));
    }
    lines.push(Line::from(badge_spans));
    lines.push(Line::from(""));

    for (i, step) in flow.steps.iter().enumerate() {
        lines.push(Line::from(vec![
            Span::raw("     "),
            Span::styled(format!("{:>2}. ", i + 1), theme::accent_bold()),
            Span::styled(format!("[{}] ", step.stage.to_uppercase()), theme::warning()),
            Span::styled(step.action.as_str(), theme::text()),
        ]));
        lines.push(Line::from(vec![
            Span::raw("         ↳ "),
            Span::styled(step.response.as_str(), theme::text_secondary()),
        ]));
    }
    lines.push(Line::from(""));
}
