//! Aggregate counts for the summary panel.

use crate::model::Catalog;

/// Role/flow/step totals. Cheap enough to recompute on every frame; the
/// catalog never changes, so no caching is needed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Summary {
    pub roles: usize,
    pub flows: usize,
    pub steps: usize,
}

impl Summary {
    pub fn of(catalog: &Catalog) -> Self {
        Self {
            roles: catalog.role_count(),
            flows: catalog.flow_count(),
            steps: catalog.step_count(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{Flow, Role, Step};

    fn flow(id: &str, steps: usize) -> Flow {
        Flow {
            id: id.into(),
            title: String::new(),
            story: String::new(),
            steps: (0..steps)
                .map(|_| Step {
                    stage: String::new(),
                    action: String::new(),
                    response: String::new(),
                })
                .collect(),
            touchpoints: Vec::new(),
        }
    }

    #[test]
    fn sums_over_nested_fixture() {
        // 3 roles with 2/0/3 flows and 4+1 / 0 / 2+2+5 steps.
        let catalog = Catalog {
            roles: vec![
                Role {
                    id: "a".into(),
                    name: String::new(),
                    icon: String::new(),
                    accent: String::new(),
                    flows: vec![flow("a1", 4), flow("a2", 1)],
                },
                Role {
                    id: "b".into(),
                    name: String::new(),
                    icon: String::new(),
                    accent: String::new(),
                    flows: vec![],
                },
                Role {
                    id: "c".into(),
                    name: String::new(),
                    icon: String::new(),
                    accent: String::new(),
                    flows: vec![flow("c1", 2), flow("c2", 2), flow("c3", 5)],
                },
            ],
        };
        let summary = Summary::of(&catalog);
        assert_eq!(summary.roles, 3);
        assert_eq!(summary.flows, 5);
        assert_eq!(summary.steps, 14);
    }

    #[test]
    fn empty_catalog_is_all_zeros() {
        let summary = Summary::of(&Catalog { roles: vec![] });
        assert_eq!(summary.roles, 0);
        assert_eq!(summary.flows, 0);
        assert_eq!(summary.steps, 0);
    }
}
