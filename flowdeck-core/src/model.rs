//! Catalog records — roles, flows, steps.
//!
//! All sequences are `Vec`-backed so display order is explicit in the data,
//! never an artifact of map iteration. A catalog is built once (either the
//! built-in one or from a TOML file) and is never mutated afterwards.

use serde::{Deserialize, Serialize};
use std::path::Path;
use thiserror::Error;

/// One ordered unit of a flow: what the user does and how the system answers.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Step {
    /// Stage label (e.g. "Entry", "Review", "Exit").
    pub stage: String,
    /// What the user does.
    pub action: String,
    /// How the system responds.
    pub response: String,
}

/// A titled, ordered procedure a role walks through.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Flow {
    /// Unique across the entire catalog, not just within its role.
    pub id: String,
    pub title: String,
    /// Narrative user story ("As a ..., I want ... so that ...").
    pub story: String,
    pub steps: Vec<Step>,
    /// Systems/modules this flow touches. Informational only, may repeat
    /// across flows.
    #[serde(default)]
    pub touchpoints: Vec<String>,
}

/// A named category of system user grouping related flows.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Role {
    /// Unique within the catalog.
    pub id: String,
    pub name: String,
    /// Display glyph shown next to the role name. Opaque to logic.
    #[serde(default)]
    pub icon: String,
    /// Accent color token (e.g. "purple", "blue"). Opaque to logic; the
    /// renderer maps it to a terminal color.
    #[serde(default)]
    pub accent: String,
    pub flows: Vec<Flow>,
}

/// Errors from loading an external catalog.
///
/// The built-in catalog is valid by construction; only the TOML path can
/// fail.
#[derive(Debug, Error)]
pub enum CatalogError {
    #[error("read catalog file: {0}")]
    Io(#[from] std::io::Error),
    #[error("parse catalog TOML: {0}")]
    Parse(#[from] toml::de::Error),
    #[error("duplicate role id: {0}")]
    DuplicateRole(String),
    #[error("duplicate flow id: {0}")]
    DuplicateFlow(String),
}

/// The complete, immutable catalog.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Catalog {
    pub roles: Vec<Role>,
}

impl Catalog {
    /// Load a catalog from a TOML file, validating id uniqueness.
    pub fn from_file(path: &Path) -> Result<Self, CatalogError> {
        let content = std::fs::read_to_string(path)?;
        Self::from_toml(&content)
    }

    /// Parse a catalog from a TOML string, validating id uniqueness.
    pub fn from_toml(content: &str) -> Result<Self, CatalogError> {
        let catalog: Catalog = toml::from_str(content)?;
        catalog.validate()?;
        Ok(catalog)
    }

    /// Check the id-uniqueness invariants.
    ///
    /// Flow ids must be unique across the whole catalog: the disclosure
    /// state tracks a bare flow id, so a cross-role collision would expand
    /// two flows at once.
    pub fn validate(&self) -> Result<(), CatalogError> {
        let mut role_ids = std::collections::HashSet::new();
        let mut flow_ids = std::collections::HashSet::new();
        for role in &self.roles {
            if !role_ids.insert(role.id.as_str()) {
                return Err(CatalogError::DuplicateRole(role.id.clone()));
            }
            for flow in &role.flows {
                if !flow_ids.insert(flow.id.as_str()) {
                    return Err(CatalogError::DuplicateFlow(flow.id.clone()));
                }
            }
        }
        Ok(())
    }

    /// Look up a role by id. Unknown ids return `None`, never panic.
    pub fn role(&self, id: &str) -> Option<&Role> {
        self.roles.iter().find(|r| r.id == id)
    }

    /// Look up a flow by id anywhere in the catalog.
    pub fn flow(&self, id: &str) -> Option<&Flow> {
        self.roles.iter().flat_map(|r| &r.flows).find(|f| f.id == id)
    }

    /// Look up a flow by id within a single role.
    pub fn flow_in_role(&self, role_id: &str, flow_id: &str) -> Option<&Flow> {
        self.role(role_id)?.flows.iter().find(|f| f.id == flow_id)
    }

    pub fn role_count(&self) -> usize {
        self.roles.len()
    }

    pub fn flow_count(&self) -> usize {
        self.roles.iter().map(|r| r.flows.len()).sum()
    }

    pub fn step_count(&self) -> usize {
        self.roles
            .iter()
            .flat_map(|r| &r.flows)
            .map(|f| f.steps.len())
            .sum()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn step(stage: &str) -> Step {
        Step {
            stage: stage.into(),
            action: "do".into(),
            response: "done".into(),
        }
    }

    fn flow(id: &str, steps: usize) -> Flow {
        Flow {
            id: id.into(),
            title: format!("Flow {id}"),
            story: "As a tester, I want a fixture.".into(),
            steps: (0..steps).map(|i| step(&format!("S{i}"))).collect(),
            touchpoints: vec!["Fixture Module".into()],
        }
    }

    fn role(id: &str, flows: Vec<Flow>) -> Role {
        Role {
            id: id.into(),
            name: format!("Role {id}"),
            icon: "*".into(),
            accent: "blue".into(),
            flows,
        }
    }

    #[test]
    fn lookups_by_id() {
        let catalog = Catalog {
            roles: vec![
                role("a", vec![flow("a1", 2), flow("a2", 3)]),
                role("b", vec![flow("b1", 1)]),
            ],
        };
        assert_eq!(catalog.role("b").unwrap().name, "Role b");
        assert_eq!(catalog.flow("a2").unwrap().steps.len(), 3);
        assert!(catalog.flow_in_role("a", "a1").is_some());
        // Flow exists, but not under that role.
        assert!(catalog.flow_in_role("b", "a1").is_none());
    }

    #[test]
    fn unknown_ids_return_none() {
        let catalog = Catalog {
            roles: vec![role("a", vec![flow("a1", 1)])],
        };
        assert!(catalog.role("nope").is_none());
        assert!(catalog.flow("nope").is_none());
        assert!(catalog.flow_in_role("nope", "a1").is_none());
    }

    #[test]
    fn validate_rejects_duplicate_role_ids() {
        let catalog = Catalog {
            roles: vec![role("a", vec![]), role("a", vec![])],
        };
        assert!(matches!(
            catalog.validate(),
            Err(CatalogError::DuplicateRole(id)) if id == "a"
        ));
    }

    #[test]
    fn validate_rejects_cross_role_flow_collisions() {
        let catalog = Catalog {
            roles: vec![role("a", vec![flow("x", 1)]), role("b", vec![flow("x", 1)])],
        };
        assert!(matches!(
            catalog.validate(),
            Err(CatalogError::DuplicateFlow(id)) if id == "x"
        ));
    }

    #[test]
    fn from_toml_round_trip() {
        let toml_src = r#"
            [[roles]]
            id = "admin"
            name = "Administrator"
            icon = "@"
            accent = "purple"

            [[roles.flows]]
            id = "setup"
            title = "Initial Setup"
            story = "As an admin, I want to set things up."
            touchpoints = ["Dashboard"]

            [[roles.flows.steps]]
            stage = "Entry"
            action = "Log in"
            response = "Show dashboard"
        "#;
        let catalog = Catalog::from_toml(toml_src).unwrap();
        assert_eq!(catalog.role_count(), 1);
        assert_eq!(catalog.flow_count(), 1);
        assert_eq!(catalog.step_count(), 1);
        assert_eq!(catalog.flow("setup").unwrap().touchpoints, vec!["Dashboard"]);
    }

    #[test]
    fn from_toml_rejects_duplicates() {
        let toml_src = r#"
            [[roles]]
            id = "a"
            name = "A"
            flows = []

            [[roles]]
            id = "a"
            name = "A again"
            flows = []
        "#;
        assert!(Catalog::from_toml(toml_src).is_err());
    }

    #[test]
    fn json_export_is_stable() {
        let catalog = Catalog {
            roles: vec![role("a", vec![flow("a1", 1)])],
        };
        let json = serde_json::to_string(&catalog).unwrap();
        assert!(json.contains("\"id\":\"a1\""));
        assert!(json.contains("\"touchpoints\""));
    }
}
