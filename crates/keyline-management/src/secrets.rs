//! Environment secret resources
//!
//! Secrets are the per-environment API credentials managed by the platform.
//! The full secret value is returned exactly once, in the create response;
//! every later read is masked to the last four characters.

use std::sync::Arc;

use reqwest::Method;
use serde::Deserialize;

use crate::error::{Error, Result};
use crate::transport::Transport;

/// A freshly created secret. The only place the full value appears.
#[derive(Debug, Clone, Deserialize)]
pub struct CreatedSecret {
    pub secret_id: String,
    /// Full secret value; not retrievable again.
    pub secret: String,
    pub last4: String,
    #[serde(default)]
    pub created_at: Option<String>,
}

/// A secret as returned by get/list: masked.
#[derive(Debug, Clone, Deserialize)]
pub struct SecretInfo {
    pub secret_id: String,
    pub last4: String,
    #[serde(default)]
    pub created_at: Option<String>,
}

#[derive(Debug, Clone)]
pub struct CreateSecretRequest {
    pub project_slug: String,
    pub environment_slug: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct CreateSecretResponse {
    #[serde(default)]
    pub status_code: u16,
    #[serde(default)]
    pub request_id: String,
    pub created_secret: CreatedSecret,
}

#[derive(Debug, Clone)]
pub struct GetSecretRequest {
    pub project_slug: String,
    pub environment_slug: String,
    pub secret_id: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct GetSecretResponse {
    #[serde(default)]
    pub status_code: u16,
    #[serde(default)]
    pub request_id: String,
    pub secret: SecretInfo,
}

#[derive(Debug, Clone)]
pub struct ListSecretsRequest {
    pub project_slug: String,
    pub environment_slug: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ListSecretsResponse {
    #[serde(default)]
    pub status_code: u16,
    #[serde(default)]
    pub request_id: String,
    pub secrets: Vec<SecretInfo>,
}

#[derive(Debug, Clone)]
pub struct DeleteSecretRequest {
    pub project_slug: String,
    pub environment_slug: String,
    pub secret_id: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct DeleteSecretResponse {
    #[serde(default)]
    pub status_code: u16,
    #[serde(default)]
    pub request_id: String,
}

/// Client for environment secret resources.
#[derive(Clone)]
pub struct Secrets {
    transport: Arc<Transport>,
}

impl Secrets {
    pub(crate) fn new(transport: Arc<Transport>) -> Self {
        Self { transport }
    }

    /// Provision a new secret. The response is the only time the full value
    /// is available; callers are expected to store it immediately.
    pub async fn create(&self, request: &CreateSecretRequest) -> Result<CreateSecretResponse> {
        if request.project_slug.is_empty() {
            return Err(Error::missing("project_slug"));
        }
        if request.environment_slug.is_empty() {
            return Err(Error::missing("environment_slug"));
        }
        let path = format!(
            "/pwa/v3/projects/{}/environments/{}/secrets",
            request.project_slug, request.environment_slug
        );
        self.transport
            .execute_json(Method::POST, &path, &[], None)
            .await
    }

    pub async fn get(&self, request: &GetSecretRequest) -> Result<GetSecretResponse> {
        if request.project_slug.is_empty() {
            return Err(Error::missing("project_slug"));
        }
        if request.environment_slug.is_empty() {
            return Err(Error::missing("environment_slug"));
        }
        if request.secret_id.is_empty() {
            return Err(Error::missing("secret_id"));
        }
        let path = format!(
            "/pwa/v3/projects/{}/environments/{}/secrets/{}",
            request.project_slug, request.environment_slug, request.secret_id
        );
        self.transport
            .execute_json(Method::GET, &path, &[], None)
            .await
    }

    pub async fn list(&self, request: &ListSecretsRequest) -> Result<ListSecretsResponse> {
        if request.project_slug.is_empty() {
            return Err(Error::missing("project_slug"));
        }
        if request.environment_slug.is_empty() {
            return Err(Error::missing("environment_slug"));
        }
        let path = format!(
            "/pwa/v3/projects/{}/environments/{}/secrets",
            request.project_slug, request.environment_slug
        );
        self.transport
            .execute_json(Method::GET, &path, &[], None)
            .await
    }

    pub async fn delete(&self, request: &DeleteSecretRequest) -> Result<DeleteSecretResponse> {
        if request.project_slug.is_empty() {
            return Err(Error::missing("project_slug"));
        }
        if request.environment_slug.is_empty() {
            return Err(Error::missing("environment_slug"));
        }
        if request.secret_id.is_empty() {
            return Err(Error::missing("secret_id"));
        }
        let path = format!(
            "/pwa/v3/projects/{}/environments/{}/secrets/{}",
            request.project_slug, request.environment_slug, request.secret_id
        );
        self.transport
            .execute_json(Method::DELETE, &path, &[], None)
            .await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn create_response_carries_full_secret_once() {
        let body = r#"{
            "status_code": 201,
            "request_id": "request-id-1",
            "created_secret": {
                "secret_id": "secret-3f01",
                "secret": "keyline_secret_LIVEVALUE1234",
                "last4": "1234",
                "created_at": "2026-03-01T09:00:00Z"
            }
        }"#;
        let response: CreateSecretResponse = serde_json::from_str(body).unwrap();
        assert_eq!(response.created_secret.secret, "keyline_secret_LIVEVALUE1234");
        assert_eq!(response.created_secret.last4, "1234");
    }

    #[test]
    fn get_response_is_masked() {
        let body = r#"{
            "secret": {"secret_id": "secret-3f01", "last4": "1234"}
        }"#;
        let response: GetSecretResponse = serde_json::from_str(body).unwrap();
        assert_eq!(response.secret.last4, "1234");
    }
}
