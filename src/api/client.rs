//! HTTP implementation of the directory client

use async_trait::async_trait;
use serde::de::DeserializeOwned;
use serde::Serialize;
use tracing::debug;

use crate::error::{AnvilError, AnvilResult};
use crate::session::Credential;

use super::types::{CreateProjectReceipt, Group, ProjectSpec};
use super::DirectoryApi;

/// Forge client backed by `reqwest`
///
/// One request per operation. No retries; the caller decides what a
/// failure means for the user.
#[derive(Debug, Clone)]
pub struct ForgeClient {
    base_url: String,
    http: reqwest::Client,
}

#[derive(Serialize)]
struct AuthBody<'a> {
    identity: &'a str,
    secret: &'a str,
}

#[derive(Serialize)]
struct CreateProjectBody<'a> {
    identity: &'a str,
    secret: &'a str,
    project: &'a ProjectSpec,
}

impl ForgeClient {
    /// Create a client for the given base URL
    pub fn new(base_url: impl Into<String>) -> Self {
        let base_url = base_url.into().trim_end_matches('/').to_string();
        Self {
            base_url,
            http: reqwest::Client::new(),
        }
    }

    /// The configured base URL
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn endpoint(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    async fn post_json<T: DeserializeOwned>(
        &self,
        path: &str,
        query: &[(&str, String)],
        body: &impl Serialize,
    ) -> AnvilResult<T> {
        let url = self.endpoint(path);
        debug!(%url, "forge request");

        let response = self
            .http
            .post(&url)
            .query(query)
            .json(body)
            .send()
            .await
            .map_err(|e| AnvilError::transport(path, e))?;

        let status = response.status();
        if !status.is_success() {
            return Err(AnvilError::api(path, status.as_u16()));
        }

        response
            .json::<T>()
            .await
            .map_err(|e| AnvilError::transport(path, e))
    }
}

#[async_trait]
impl DirectoryApi for ForgeClient {
    async fn validate(&self, credential: &Credential) -> AnvilResult<bool> {
        let body = AuthBody {
            identity: credential.identity(),
            secret: credential.secret(),
        };
        self.post_json("/validate", &[], &body).await
    }

    async fn groups(&self, credential: &Credential) -> AnvilResult<Vec<Group>> {
        let body = AuthBody {
            identity: credential.identity(),
            secret: credential.secret(),
        };
        self.post_json("/groups", &[], &body).await
    }

    async fn common_groups(
        &self,
        credential: &Credential,
        limit: usize,
    ) -> AnvilResult<Vec<Group>> {
        let body = AuthBody {
            identity: credential.identity(),
            secret: credential.secret(),
        };
        self.post_json("/groups/common", &[("limit", limit.to_string())], &body)
            .await
    }

    async fn search_groups(
        &self,
        credential: &Credential,
        term: &str,
        limit: usize,
    ) -> AnvilResult<Vec<Group>> {
        let body = AuthBody {
            identity: credential.identity(),
            secret: credential.secret(),
        };
        self.post_json(
            "/groups/search",
            &[("q", term.to_string()), ("limit", limit.to_string())],
            &body,
        )
        .await
    }

    async fn create_project(
        &self,
        credential: &Credential,
        project: &ProjectSpec,
    ) -> AnvilResult<CreateProjectReceipt> {
        let body = CreateProjectBody {
            identity: credential.identity(),
            secret: credential.secret(),
            project,
        };
        self.post_json("/create-project", &[], &body).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::form::ProjectType;
    use wiremock::matchers::{body_partial_json, method, path, query_param};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    fn credential() -> Credential {
        Credential::new("robot", "s3cret")
    }

    #[test]
    fn trailing_slash_trimmed() {
        let client = ForgeClient::new("https://forge.example.com/");
        assert_eq!(client.base_url(), "https://forge.example.com");
        assert_eq!(client.endpoint("/groups"), "https://forge.example.com/groups");
    }

    #[tokio::test]
    async fn validate_posts_credential_pair() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/validate"))
            .and(body_partial_json(serde_json::json!({
                "identity": "robot",
                "secret": "s3cret",
            })))
            .respond_with(ResponseTemplate::new(200).set_body_json(true))
            .expect(1)
            .mount(&server)
            .await;

        let client = ForgeClient::new(server.uri());
        let accepted = client.validate(&credential()).await.unwrap();
        assert!(accepted);
    }

    #[tokio::test]
    async fn search_sends_term_and_limit() {
        let server = MockServer::start().await;
        let groups = vec![Group::new(4, "platform-team", "company/platform-team")];
        Mock::given(method("POST"))
            .and(path("/groups/search"))
            .and(query_param("q", "platform"))
            .and(query_param("limit", "20"))
            .respond_with(ResponseTemplate::new(200).set_body_json(&groups))
            .expect(1)
            .mount(&server)
            .await;

        let client = ForgeClient::new(server.uri());
        let found = client
            .search_groups(&credential(), "platform", 20)
            .await
            .unwrap();
        assert_eq!(found, groups);
    }

    #[tokio::test]
    async fn non_2xx_is_uniform_failure() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/groups/common"))
            .respond_with(ResponseTemplate::new(503))
            .mount(&server)
            .await;

        let client = ForgeClient::new(server.uri());
        let err = client
            .common_groups(&credential(), 200)
            .await
            .unwrap_err();
        match err {
            AnvilError::Api { endpoint, status } => {
                assert_eq!(endpoint, "/groups/common");
                assert_eq!(status, 503);
            }
            other => panic!("expected Api error, got {other:?}"),
        }
    }

    #[tokio::test]
    async fn create_project_wraps_spec_with_credential() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/create-project"))
            .and(body_partial_json(serde_json::json!({
                "identity": "robot",
                "project": { "name": "billing", "group_id": 7 },
            })))
            .respond_with(
                ResponseTemplate::new(201).set_body_json(serde_json::json!({ "id": 99 })),
            )
            .expect(1)
            .mount(&server)
            .await;

        let spec = ProjectSpec {
            name: "billing".into(),
            group_id: 7,
            project_type: ProjectType::Service,
            stack: Some(crate::form::TechStack::Rust),
            deployments: Default::default(),
        };

        let client = ForgeClient::new(server.uri());
        let receipt = client.create_project(&credential(), &spec).await.unwrap();
        assert_eq!(receipt.0["id"], 99);
    }
}
