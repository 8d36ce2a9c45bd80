//! Keyboard input dispatch — overlay first, then global, then tree keys.

use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

use crate::app::{AppState, Overlay};

/// Handle a key event.
pub fn handle_key(app: &mut AppState, key: KeyEvent) {
    // Only handle key press events (Windows sends both Press and Release).
    if key.kind != KeyEventKind::Press {
        return;
    }

    // 1. The help overlay consumes input first.
    if app.overlay == Overlay::Help {
        match key.code {
            KeyCode::Esc | KeyCode::Char('q') | KeyCode::Char('?') => {
                app.overlay = Overlay::None;
            }
            _ => {}
        }
        return;
    }

    // 2. Global keys.
    match key.code {
        KeyCode::Char('q') => {
            app.running = false;
            return;
        }
        KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => {
            app.running = false;
            return;
        }
        KeyCode::Char('?') => {
            app.overlay = Overlay::Help;
            return;
        }
        _ => {}
    }

    // 3. Tree keys.
    let row_count = app.visible_row_count();
    match key.code {
        KeyCode::Char('j') | KeyCode::Down => {
            if row_count > 0 && app.cursor.row + 1 < row_count {
                app.cursor.row += 1;
            }
        }
        KeyCode::Char('k') | KeyCode::Up => {
            app.cursor.row = app.cursor.row.saturating_sub(1);
        }
        KeyCode::Char('g') | KeyCode::Home => {
            app.cursor.row = 0;
        }
        KeyCode::Char('G') | KeyCode::End => {
            app.cursor.row = row_count.saturating_sub(1);
        }
        KeyCode::Enter | KeyCode::Char(' ') => {
            app.activate_cursor();
        }
        KeyCode::Char('l') | KeyCode::Right => {
            app.expand_cursor();
        }
        KeyCode::Char('h') | KeyCode::Left => {
            app.collapse_cursor();
        }
        _ => {}
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use flowdeck_core::catalog;

    fn press(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    fn app() -> AppState {
        AppState::new(catalog::builtin())
    }

    #[test]
    fn q_quits() {
        let mut app = app();
        handle_key(&mut app, press(KeyCode::Char('q')));
        assert!(!app.running);
    }

    #[test]
    fn cursor_stays_in_bounds() {
        let mut app = app();
        for _ in 0..20 {
            handle_key(&mut app, press(KeyCode::Char('j')));
        }
        assert_eq!(app.cursor.row, app.visible_row_count() - 1);
        for _ in 0..20 {
            handle_key(&mut app, press(KeyCode::Char('k')));
        }
        assert_eq!(app.cursor.row, 0);
    }

    #[test]
    fn enter_toggles_the_role_under_the_cursor() {
        let mut app = app();
        handle_key(&mut app, press(KeyCode::Enter));
        assert_eq!(app.disclosure.expanded_role(), Some("administrator"));
        handle_key(&mut app, press(KeyCode::Enter));
        assert_eq!(app.disclosure.expanded_role(), None);
        assert_eq!(app.disclosure.expanded_flow(), None);
    }

    #[test]
    fn help_overlay_swallows_tree_keys() {
        let mut app = app();
        handle_key(&mut app, press(KeyCode::Char('?')));
        assert_eq!(app.overlay, Overlay::Help);
        handle_key(&mut app, press(KeyCode::Char('j')));
        assert_eq!(app.cursor.row, 0);
        handle_key(&mut app, press(KeyCode::Esc));
        assert_eq!(app.overlay, Overlay::None);
    }

    #[test]
    fn g_and_shift_g_jump_to_ends() {
        let mut app = app();
        handle_key(&mut app, press(KeyCode::Char('G')));
        assert_eq!(app.cursor.row, 4);
        handle_key(&mut app, press(KeyCode::Char('g')));
        assert_eq!(app.cursor.row, 0);
    }
}
