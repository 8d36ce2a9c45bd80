//! Property tests for the disclosure state machine.
//!
//! Uses proptest to verify:
//! 1. Single-slot invariant — at most one role and one flow expanded
//! 2. Role→flow coupling — toggling a role always clears the flow slot
//! 3. Involution — toggling the same id twice is a no-op on that slot
//! 4. Scoping — the flow slot only ever holds the last flow toggled since
//!    the last role toggle

use proptest::prelude::*;
use flowdeck_core::Disclosure;

#[derive(Debug, Clone)]
enum Op {
    Role(String),
    Flow(String),
}

fn arb_id() -> impl Strategy<Value = String> {
    // Small id space so collisions (re-toggles) actually happen.
    prop::sample::select(vec![
        "administrator".to_string(),
        "teacher".to_string(),
        "backoffice".to_string(),
        "daily_attendance".to_string(),
        "invoice_creation".to_string(),
        "ghost_id".to_string(),
    ])
}

fn arb_op() -> impl Strategy<Value = Op> {
    prop_oneof![arb_id().prop_map(Op::Role), arb_id().prop_map(Op::Flow)]
}

fn apply(ops: &[Op]) -> Disclosure {
    let mut d = Disclosure::new();
    for op in ops {
        match op {
            Op::Role(id) => d.toggle_role(id),
            Op::Flow(id) => d.toggle_flow(id),
        }
    }
    d
}

proptest! {
    /// After any sequence of toggles, the flow slot holds the last flow
    /// toggled an odd number of times since the most recent role toggle,
    /// or nothing.
    #[test]
    fn flow_slot_is_scoped_to_the_last_role_toggle(ops in prop::collection::vec(arb_op(), 0..40)) {
        let d = apply(&ops);

        // Model the expected flow slot directly.
        let mut expected_flow: Option<&str> = None;
        for op in &ops {
            match op {
                Op::Role(_) => expected_flow = None,
                Op::Flow(id) => {
                    expected_flow = if expected_flow == Some(id.as_str()) {
                        None
                    } else {
                        Some(id.as_str())
                    };
                }
            }
        }
        prop_assert_eq!(d.expanded_flow(), expected_flow);
    }

    /// The role slot ignores flow toggles entirely.
    #[test]
    fn role_slot_ignores_flow_toggles(ops in prop::collection::vec(arb_op(), 0..40)) {
        let d = apply(&ops);

        let mut expected_role: Option<&str> = None;
        for op in &ops {
            if let Op::Role(id) = op {
                expected_role = if expected_role == Some(id.as_str()) {
                    None
                } else {
                    Some(id.as_str())
                };
            }
        }
        prop_assert_eq!(d.expanded_role(), expected_role);
    }

    /// Toggling any role twice in a row leaves both slots exactly as a
    /// single role toggle would leave the flow slot: empty.
    #[test]
    fn double_role_toggle_collapses_everything(prefix in prop::collection::vec(arb_op(), 0..20), id in arb_id()) {
        let mut d = apply(&prefix);
        d.toggle_role(&id);
        d.toggle_role(&id);
        // Role slot returns to whatever the prefix left only if that was
        // not `id`; either way the flow slot must be empty.
        prop_assert_eq!(d.expanded_flow(), None);
    }

    /// A pair of toggles on the same flow id never leaves that flow
    /// expanded, and never moves the role slot. (From empty or from that
    /// same flow the pair is an exact identity; from a different flow the
    /// pair collapses the slot.)
    #[test]
    fn double_flow_toggle_never_leaves_that_flow_open(prefix in prop::collection::vec(arb_op(), 0..20), id in arb_id()) {
        let before = apply(&prefix);
        let mut after = before.clone();
        after.toggle_flow(&id);
        after.toggle_flow(&id);
        prop_assert_eq!(after.expanded_role(), before.expanded_role());
        if before.expanded_flow() == Some(id.as_str()) || before.expanded_flow().is_none() {
            prop_assert_eq!(after, before);
        } else {
            prop_assert_eq!(after.expanded_flow(), None);
        }
    }
}
