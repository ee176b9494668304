//! Public token resources
//!
//! Public tokens identify an environment to frontend SDKs. They carry no
//! secret material, so list returns them in full and there is no masked
//! form.

use std::sync::Arc;

use reqwest::Method;
use serde::Deserialize;

use crate::error::{Error, Result};
use crate::transport::Transport;

#[derive(Debug, Clone, Deserialize)]
pub struct PublicToken {
    pub public_token: String,
    #[serde(default)]
    pub created_at: Option<String>,
}

#[derive(Debug, Clone)]
pub struct CreatePublicTokenRequest {
    pub project_slug: String,
    pub environment_slug: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct CreatePublicTokenResponse {
    #[serde(default)]
    pub status_code: u16,
    #[serde(default)]
    pub request_id: String,
    pub public_token: PublicToken,
}

#[derive(Debug, Clone)]
pub struct ListPublicTokensRequest {
    pub project_slug: String,
    pub environment_slug: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ListPublicTokensResponse {
    #[serde(default)]
    pub status_code: u16,
    #[serde(default)]
    pub request_id: String,
    pub public_tokens: Vec<PublicToken>,
}

#[derive(Debug, Clone)]
pub struct DeletePublicTokenRequest {
    pub project_slug: String,
    pub environment_slug: String,
    pub public_token: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct DeletePublicTokenResponse {
    #[serde(default)]
    pub status_code: u16,
    #[serde(default)]
    pub request_id: String,
}

/// Client for public token resources.
#[derive(Clone)]
pub struct PublicTokens {
    transport: Arc<Transport>,
}

impl PublicTokens {
    pub(crate) fn new(transport: Arc<Transport>) -> Self {
        Self { transport }
    }

    pub async fn create(
        &self,
        request: &CreatePublicTokenRequest,
    ) -> Result<CreatePublicTokenResponse> {
        if request.project_slug.is_empty() {
            return Err(Error::missing("project_slug"));
        }
        if request.environment_slug.is_empty() {
            return Err(Error::missing("environment_slug"));
        }
        let path = format!(
            "/pwa/v3/projects/{}/environments/{}/public_tokens",
            request.project_slug, request.environment_slug
        );
        self.transport
            .execute_json(Method::POST, &path, &[], None)
            .await
    }

    pub async fn list(
        &self,
        request: &ListPublicTokensRequest,
    ) -> Result<ListPublicTokensResponse> {
        if request.project_slug.is_empty() {
            return Err(Error::missing("project_slug"));
        }
        if request.environment_slug.is_empty() {
            return Err(Error::missing("environment_slug"));
        }
        let path = format!(
            "/pwa/v3/projects/{}/environments/{}/public_tokens",
            request.project_slug, request.environment_slug
        );
        self.transport
            .execute_json(Method::GET, &path, &[], None)
            .await
    }

    pub async fn delete(
        &self,
        request: &DeletePublicTokenRequest,
    ) -> Result<DeletePublicTokenResponse> {
        if request.project_slug.is_empty() {
            return Err(Error::missing("project_slug"));
        }
        if request.environment_slug.is_empty() {
            return Err(Error::missing("environment_slug"));
        }
        if request.public_token.is_empty() {
            return Err(Error::missing("public_token"));
        }
        let path = format!(
            "/pwa/v3/projects/{}/environments/{}/public_tokens/{}",
            request.project_slug, request.environment_slug, request.public_token
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
    fn list_response_deserializes() {
        let body = r#"{
            "status_code": 200,
            "request_id": "request-id-9",
            "public_tokens": [
                {"public_token": "public-token-test-11aa", "created_at": "2026-01-15T00:00:00Z"},
                {"public_token": "public-token-test-22bb"}
            ]
        }"#;
        let response: ListPublicTokensResponse = serde_json::from_str(body).unwrap();
        assert_eq!(response.public_tokens.len(), 2);
        assert_eq!(response.public_tokens[1].public_token, "public-token-test-22bb");
        assert!(response.public_tokens[1].created_at.is_none());
    }
}
