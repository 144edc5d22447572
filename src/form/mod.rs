//! Project form state and submission packaging

pub mod controller;
pub mod model;

pub use controller::{FieldIssue, ProjectForm};
pub use model::{DeployTarget, ProjectType, TechStack};
