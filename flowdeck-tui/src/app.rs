//! Application state — single-owner, main-thread only.
//!
//! The catalog is fixed for the lifetime of the process; the only mutable
//! state is the disclosure pair, the tree cursor, and which overlay (if
//! any) is on top.

use flowdeck_core::{Catalog, Disclosure};

/// Which overlay (if any) is shown on top.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Overlay {
    None,
    Help,
}

/// Cursor position in the role/flow tree.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TreeCursor {
    /// Flat index into the visible tree rows.
    pub row: usize,
}

/// A cursor-addressable row in the tree. Step and touchpoint lines are
/// content, not rows — the only activatable headers are roles and flows.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TreeRow {
    Role(String),
    Flow(String),
}

/// Top-level application state.
pub struct AppState {
    pub catalog: Catalog,
    pub disclosure: Disclosure,
    pub cursor: TreeCursor,
    pub overlay: Overlay,
    pub running: bool,
}

impl AppState {
    pub fn new(catalog: Catalog) -> Self {
        Self {
            catalog,
            disclosure: Disclosure::new(),
            cursor: TreeCursor::default(),
            overlay: Overlay::None,
            running: true,
        }
    }

    /// Count visible rows: every role header, plus the flow headers of the
    /// expanded role. A collapsed role renders no flow toggles.
    pub fn visible_row_count(&self) -> usize {
        let mut count = 0;
        for role in &self.catalog.roles {
            count += 1;
            if self.disclosure.is_role_expanded(&role.id) {
                count += role.flows.len();
            }
        }
        count
    }

    /// Resolve the cursor row to the role or flow header it sits on.
    pub fn cursor_item(&self) -> Option<TreeRow> {
        let mut row = 0;
        for role in &self.catalog.roles {
            if row == self.cursor.row {
                return Some(TreeRow::Role(role.id.clone()));
            }
            row += 1;
            if self.disclosure.is_role_expanded(&role.id) {
                for flow in &role.flows {
                    if row == self.cursor.row {
                        return Some(TreeRow::Flow(flow.id.clone()));
                    }
                    row += 1;
                }
            }
        }
        None
    }

    /// Row index of a role's header, given the current disclosure state.
    pub fn row_of_role(&self, id: &str) -> Option<usize> {
        let mut row = 0;
        for role in &self.catalog.roles {
            if role.id == id {
                return Some(row);
            }
            row += 1;
            if self.disclosure.is_role_expanded(&role.id) {
                row += role.flows.len();
            }
        }
        None
    }

    /// Activate the header under the cursor — the only two events the core
    /// logic accepts.
    pub fn activate_cursor(&mut self) {
        match self.cursor_item() {
            Some(TreeRow::Role(id)) => self.disclosure.toggle_role(&id),
            Some(TreeRow::Flow(id)) => self.disclosure.toggle_flow(&id),
            None => {}
        }
        self.clamp_cursor();
    }

    /// Expand the header under the cursor if it is collapsed.
    pub fn expand_cursor(&mut self) {
        match self.cursor_item() {
            Some(TreeRow::Role(id)) if !self.disclosure.is_role_expanded(&id) => {
                self.disclosure.toggle_role(&id);
            }
            Some(TreeRow::Flow(id)) if !self.disclosure.is_flow_expanded(&id) => {
                self.disclosure.toggle_flow(&id);
            }
            _ => {}
        }
        self.clamp_cursor();
    }

    /// Collapse at the cursor. On an unexpanded flow row, jump the cursor
    /// to its role header instead (the expanded role, by construction).
    pub fn collapse_cursor(&mut self) {
        match self.cursor_item() {
            Some(TreeRow::Role(id)) if self.disclosure.is_role_expanded(&id) => {
                self.disclosure.toggle_role(&id);
            }
            Some(TreeRow::Flow(id)) => {
                if self.disclosure.is_flow_expanded(&id) {
                    self.disclosure.toggle_flow(&id);
                } else if let Some(role_id) = self.disclosure.expanded_role().map(String::from) {
                    if let Some(row) = self.row_of_role(&role_id) {
                        self.cursor.row = row;
                    }
                }
            }
            _ => {}
        }
        self.clamp_cursor();
    }

    /// Keep the cursor inside the visible rows after a collapse shrinks
    /// the tree.
    pub fn clamp_cursor(&mut self) {
        let count = self.visible_row_count();
        if count == 0 {
            self.cursor.row = 0;
        } else if self.cursor.row >= count {
            self.cursor.row = count - 1;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use flowdeck_core::catalog;

    fn app() -> AppState {
        AppState::new(catalog::builtin())
    }

    #[test]
    fn collapsed_tree_shows_only_role_headers() {
        let app = app();
        assert_eq!(app.visible_row_count(), 5);
        assert_eq!(
            app.cursor_item(),
            Some(TreeRow::Role("administrator".into()))
        );
    }

    #[test]
    fn expanding_a_role_reveals_its_flow_rows() {
        let mut app = app();
        app.activate_cursor(); // expand administrator (4 flows)
        assert_eq!(app.visible_row_count(), 9);
        app.cursor.row = 1;
        assert_eq!(
            app.cursor_item(),
            Some(TreeRow::Flow("enrollment_setup".into()))
        );
        // Row after the last admin flow is the next role header.
        app.cursor.row = 5;
        assert_eq!(app.cursor_item(), Some(TreeRow::Role("teacher".into())));
    }

    #[test]
    fn activating_a_flow_row_toggles_only_the_flow() {
        let mut app = app();
        app.activate_cursor();
        app.cursor.row = 1;
        app.activate_cursor();
        assert_eq!(app.disclosure.expanded_role(), Some("administrator"));
        assert_eq!(app.disclosure.expanded_flow(), Some("enrollment_setup"));
    }

    #[test]
    fn collapsing_clamps_the_cursor_back_into_range() {
        let mut app = app();
        app.activate_cursor(); // expand administrator
        app.cursor.row = 4; // last admin flow row
        app.cursor.row = 0;
        app.activate_cursor(); // collapse administrator
        app.cursor.row = 8; // stale index from the expanded tree
        app.clamp_cursor();
        assert_eq!(app.cursor.row, 4);
    }

    #[test]
    fn switching_roles_via_activation_collapses_the_old_flow() {
        let mut app = app();
        app.activate_cursor(); // expand administrator
        app.cursor.row = 1;
        app.activate_cursor(); // expand enrollment_setup
        app.cursor.row = 5; // teacher header
        app.activate_cursor(); // switch expanded role
        assert_eq!(app.disclosure.expanded_role(), Some("teacher"));
        assert_eq!(app.disclosure.expanded_flow(), None);
        assert_eq!(app.visible_row_count(), 10); // 5 roles + 5 teacher flows
    }

    #[test]
    fn collapse_on_a_flow_row_jumps_to_the_role_header() {
        let mut app = app();
        app.activate_cursor(); // expand administrator
        app.cursor.row = 3;
        app.collapse_cursor(); // flow not expanded: jump to parent
        assert_eq!(app.cursor.row, 0);
        assert_eq!(app.disclosure.expanded_role(), Some("administrator"));
    }

    #[test]
    fn expand_cursor_is_idempotent() {
        let mut app = app();
        app.expand_cursor();
        app.expand_cursor(); // already expanded: must not collapse
        assert_eq!(app.disclosure.expanded_role(), Some("administrator"));
    }

    #[test]
    fn row_of_role_accounts_for_the_expanded_role() {
        let mut app = app();
        assert_eq!(app.row_of_role("teacher"), Some(1));
        app.activate_cursor(); // expand administrator (4 flows)
        assert_eq!(app.row_of_role("teacher"), Some(5));
        assert_eq!(app.row_of_role("no_such_role"), None);
    }
}
