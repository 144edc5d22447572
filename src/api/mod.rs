//! Remote directory client for the forge
//!
//! Every operation is a single JSON request/response with no retry; any
//! non-2xx status is treated uniformly as failure.

pub mod client;
pub mod types;

pub use client::ForgeClient;
pub use types::{CreateProjectReceipt, DeploymentSpec, Group, ProjectSpec};

use async_trait::async_trait;

use crate::error::AnvilResult;
use crate::session::Credential;

/// Directory operations exposed by the forge
///
/// A trait so the autocomplete engine and form flow can run against an
/// in-memory double in tests.
#[async_trait]
pub trait DirectoryApi: Send + Sync {
    /// Check whether a credential pair is accepted
    async fn validate(&self, credential: &Credential) -> AnvilResult<bool>;

    /// Fetch the full group list
    async fn groups(&self, credential: &Credential) -> AnvilResult<Vec<Group>>;

    /// Fetch up to `limit` server-curated common groups
    async fn common_groups(&self, credential: &Credential, limit: usize)
        -> AnvilResult<Vec<Group>>;

    /// Fetch up to `limit` groups matching `term` (server-defined matching)
    async fn search_groups(
        &self,
        credential: &Credential,
        term: &str,
        limit: usize,
    ) -> AnvilResult<Vec<Group>>;

    /// Submit a project-creation request
    async fn create_project(
        &self,
        credential: &Credential,
        project: &ProjectSpec,
    ) -> AnvilResult<CreateProjectReceipt>;
}
