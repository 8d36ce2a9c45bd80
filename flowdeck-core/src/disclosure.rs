//! Disclosure state machine — which role and which flow are expanded.
//!
//! Two single-slot optional ids. At most one role and at most one flow are
//! expanded at any time. Toggling a role always clears the expanded flow,
//! even when re-collapsing the same role: flow state is scoped to whichever
//! role is currently open. Both transitions are total; unknown ids are
//! accepted and simply match nothing at render time.

/// Transient expand/collapse state. Created empty at startup, discarded at
/// exit, never persisted.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Disclosure {
    expanded_role: Option<String>,
    expanded_flow: Option<String>,
}

impl Disclosure {
    /// Nothing expanded.
    pub fn new() -> Self {
        Self::default()
    }

    /// Expand the role, or collapse it if it is already the expanded one.
    ///
    /// Unconditionally clears the expanded flow in every case — expand,
    /// replace, and re-collapse alike.
    pub fn toggle_role(&mut self, id: &str) {
        if self.expanded_role.as_deref() == Some(id) {
            self.expanded_role = None;
        } else {
            self.expanded_role = Some(id.to_string());
        }
        self.expanded_flow = None;
    }

    /// Expand the flow, or collapse it if it is already the expanded one.
    /// The expanded role is untouched.
    pub fn toggle_flow(&mut self, id: &str) {
        if self.expanded_flow.as_deref() == Some(id) {
            self.expanded_flow = None;
        } else {
            self.expanded_flow = Some(id.to_string());
        }
    }

    pub fn expanded_role(&self) -> Option<&str> {
        self.expanded_role.as_deref()
    }

    pub fn expanded_flow(&self) -> Option<&str> {
        self.expanded_flow.as_deref()
    }

    pub fn is_role_expanded(&self, id: &str) -> bool {
        self.expanded_role.as_deref() == Some(id)
    }

    pub fn is_flow_expanded(&self, id: &str) -> bool {
        self.expanded_flow.as_deref() == Some(id)
    }
}
