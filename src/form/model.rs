//! Static form schema: project types, stacks, deployment targets

use clap::ValueEnum;
use serde::{Deserialize, Serialize};
use std::fmt;

/// What kind of project is being created
///
/// The selected type drives which other fields are shown and required.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum ProjectType {
    Service,
    Library,
    Delivery,
    Monorepo,
}

impl ProjectType {
    pub const ALL: [ProjectType; 4] = [
        ProjectType::Service,
        ProjectType::Library,
        ProjectType::Delivery,
        ProjectType::Monorepo,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            ProjectType::Service => "service",
            ProjectType::Library => "library",
            ProjectType::Delivery => "delivery",
            ProjectType::Monorepo => "monorepo",
        }
    }

    /// Short description shown next to the option in prompts
    pub fn hint(&self) -> &'static str {
        match self {
            ProjectType::Service => "Deployable application or API",
            ProjectType::Library => "Shared code consumed by other projects",
            ProjectType::Delivery => "Configuration-only delivery pipeline",
            ProjectType::Monorepo => "Multiple components in one repository",
        }
    }

    /// Delivery projects carry no technology stack
    pub fn requires_stack(&self) -> bool {
        !matches!(self, ProjectType::Delivery)
    }

    /// Only delivery and monorepo projects get a deployment section
    pub fn has_deployments(&self) -> bool {
        matches!(self, ProjectType::Delivery | ProjectType::Monorepo)
    }
}

impl fmt::Display for ProjectType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Technology stack of the project
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum TechStack {
    Rust,
    Go,
    Typescript,
    Python,
    Jvm,
}

impl TechStack {
    pub const ALL: [TechStack; 5] = [
        TechStack::Rust,
        TechStack::Go,
        TechStack::Typescript,
        TechStack::Python,
        TechStack::Jvm,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            TechStack::Rust => "rust",
            TechStack::Go => "go",
            TechStack::Typescript => "typescript",
            TechStack::Python => "python",
            TechStack::Jvm => "jvm",
        }
    }
}

impl fmt::Display for TechStack {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Named external environment a namespace may be assigned to
///
/// Fixed set; each target is independently toggleable in the form.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize, ValueEnum,
)]
#[serde(rename_all = "lowercase")]
pub enum DeployTarget {
    Dev,
    Staging,
    Production,
}

impl DeployTarget {
    pub const ALL: [DeployTarget; 3] = [
        DeployTarget::Dev,
        DeployTarget::Staging,
        DeployTarget::Production,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            DeployTarget::Dev => "dev",
            DeployTarget::Staging => "staging",
            DeployTarget::Production => "production",
        }
    }
}

impl fmt::Display for DeployTarget {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
