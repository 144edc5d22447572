//! Form field state, visibility rules, and submission packaging

use std::collections::BTreeMap;

use crate::api::{DeploymentSpec, Group, ProjectSpec};
use crate::error::{AnvilError, AnvilResult};

use super::model::{DeployTarget, ProjectType, TechStack};

/// One local validation failure, reported per field
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldIssue {
    pub field: &'static str,
    pub reason: String,
}

impl FieldIssue {
    fn new(field: &'static str, reason: impl Into<String>) -> Self {
        Self {
            field,
            reason: reason.into(),
        }
    }
}

/// Project creation form
///
/// Owns field state and the cross-field visibility rules. Validation is
/// purely local; nothing reaches the forge until `build_spec` succeeds.
#[derive(Debug, Clone, Default)]
pub struct ProjectForm {
    name: String,
    group: Option<Group>,
    project_type: Option<ProjectType>,
    stack: Option<TechStack>,
    deployments: BTreeMap<DeployTarget, String>,
}

impl ProjectForm {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set_name(&mut self, name: impl Into<String>) {
        self.name = name.into();
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn set_group(&mut self, group: Group) {
        self.group = Some(group);
    }

    pub fn group(&self) -> Option<&Group> {
        self.group.as_ref()
    }

    /// Select the project type; types without a deployment section drop
    /// any previously toggled targets
    pub fn set_project_type(&mut self, project_type: ProjectType) {
        self.project_type = Some(project_type);
        if !project_type.has_deployments() {
            self.deployments.clear();
        }
    }

    pub fn project_type(&self) -> Option<ProjectType> {
        self.project_type
    }

    pub fn set_stack(&mut self, stack: TechStack) {
        self.stack = Some(stack);
    }

    pub fn stack(&self) -> Option<TechStack> {
        self.stack
    }

    /// The stack field is required/shown unless the type is delivery.
    /// With no type selected yet, the field is shown.
    pub fn stack_required(&self) -> bool {
        self.project_type.map_or(true, |t| t.requires_stack())
    }

    /// The deployment section is shown only for delivery and monorepo
    pub fn deployments_visible(&self) -> bool {
        self.project_type.map_or(false, |t| t.has_deployments())
    }

    /// Toggle a deployment target; on inserts an entry with an empty
    /// namespace, off removes the entry entirely
    pub fn toggle_deployment(&mut self, target: DeployTarget, enabled: bool) {
        if enabled {
            self.deployments.entry(target).or_default();
        } else {
            self.deployments.remove(&target);
        }
    }

    /// Assign a namespace, enabling the target if needed
    pub fn set_namespace(&mut self, target: DeployTarget, namespace: impl Into<String>) {
        self.deployments.insert(target, namespace.into());
    }

    pub fn namespace(&self, target: DeployTarget) -> Option<&str> {
        self.deployments.get(&target).map(String::as_str)
    }

    pub fn deployments(&self) -> &BTreeMap<DeployTarget, String> {
        &self.deployments
    }

    /// Check required fields; an empty result means the form can submit
    pub fn validate(&self) -> Vec<FieldIssue> {
        let mut issues = Vec::new();
        if self.name.trim().is_empty() {
            issues.push(FieldIssue::new("name", "project name is required"));
        }
        if self.group.is_none() {
            issues.push(FieldIssue::new("group", "select a group"));
        }
        if self.project_type.is_none() {
            issues.push(FieldIssue::new("project_type", "select a project type"));
        }
        if self.stack_required() && self.stack.is_none() {
            issues.push(FieldIssue::new(
                "stack",
                "a technology stack is required for this project type",
            ));
        }
        issues
    }

    /// Package the form into a submission payload
    ///
    /// Namespaces are trimmed and blank deployment entries dropped; the
    /// stack is included only when the selected type carries one.
    pub fn build_spec(&self) -> AnvilResult<ProjectSpec> {
        if let Some(issue) = self.validate().into_iter().next() {
            return Err(AnvilError::field(issue.field, issue.reason));
        }

        let group = self
            .group
            .as_ref()
            .ok_or_else(|| AnvilError::Internal("group missing after validation".into()))?;
        let project_type = self
            .project_type
            .ok_or_else(|| AnvilError::Internal("project type missing after validation".into()))?;

        // The deployment section only exists for types that show it;
        // entries toggled under another type never reach the wire.
        let deployments = if project_type.has_deployments() {
            self.deployments
                .iter()
                .filter_map(|(target, namespace)| {
                    let namespace = namespace.trim();
                    (!namespace.is_empty()).then(|| {
                        (
                            *target,
                            DeploymentSpec {
                                namespace: namespace.to_string(),
                            },
                        )
                    })
                })
                .collect()
        } else {
            BTreeMap::new()
        };

        Ok(ProjectSpec {
            name: self.name.trim().to_string(),
            group_id: group.id,
            project_type,
            stack: if project_type.requires_stack() {
                self.stack
            } else {
                None
            },
            deployments,
        })
    }

    /// Return every field to its default
    pub fn reset(&mut self) {
        *self = Self::default();
    }
}
