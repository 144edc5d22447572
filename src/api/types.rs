//! Wire types shared with the forge

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use crate::form::{DeployTarget, ProjectType, TechStack};

/// An organizational container a project is created under
///
/// Immutable once fetched; identity is `id`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Group {
    pub id: u64,
    pub name: String,
    pub path: String,
}

impl Group {
    pub fn new(id: u64, name: impl Into<String>, path: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
            path: path.into(),
        }
    }
}

/// Validated project configuration ready for submission
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProjectSpec {
    pub name: String,
    pub group_id: u64,
    pub project_type: ProjectType,

    /// Omitted for project types that carry no technology stack
    #[serde(skip_serializing_if = "Option::is_none")]
    pub stack: Option<TechStack>,

    /// Namespace per enabled deployment target; entries with blank
    /// namespaces never reach the wire
    #[serde(skip_serializing_if = "BTreeMap::is_empty", default)]
    pub deployments: BTreeMap<DeployTarget, DeploymentSpec>,
}

/// Namespace assignment for one deployment target
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DeploymentSpec {
    pub namespace: String,
}

/// Opaque success payload returned by `/create-project`
#[derive(Debug, Clone, Deserialize)]
#[serde(transparent)]
pub struct CreateProjectReceipt(pub serde_json::Value);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn group_roundtrip() {
        let group = Group::new(4, "platform-team", "company/platform-team");
        let json = serde_json::to_string(&group).unwrap();
        let parsed: Group = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, group);
    }

    #[test]
    fn project_spec_omits_empty_sections() {
        let spec = ProjectSpec {
            name: "billing".into(),
            group_id: 7,
            project_type: ProjectType::Service,
            stack: Some(TechStack::Rust),
            deployments: BTreeMap::new(),
        };
        let json = serde_json::to_value(&spec).unwrap();
        assert_eq!(json["project_type"], "service");
        assert_eq!(json["stack"], "rust");
        assert!(json.get("deployments").is_none());
    }

    #[test]
    fn project_spec_serializes_keyed_deployments() {
        let mut deployments = BTreeMap::new();
        deployments.insert(
            DeployTarget::Staging,
            DeploymentSpec {
                namespace: "apps-staging".into(),
            },
        );
        let spec = ProjectSpec {
            name: "portal".into(),
            group_id: 7,
            project_type: ProjectType::Delivery,
            stack: None,
            deployments,
        };
        let json = serde_json::to_value(&spec).unwrap();
        assert!(json.get("stack").is_none());
        assert_eq!(json["deployments"]["staging"]["namespace"], "apps-staging");
    }
}
