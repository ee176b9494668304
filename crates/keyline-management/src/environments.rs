//! Environment resources
//!
//! Environments live under a project and are addressed by slug:
//! `/pwa/v3/projects/{project}/environments/{environment}`. Every project
//! gets a live and a test environment at creation; additional test
//! environments can be created and removed freely.

use std::sync::Arc;

use reqwest::Method;
use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};
use crate::transport::Transport;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum EnvironmentType {
    #[serde(rename = "LIVE")]
    Live,
    #[serde(rename = "TEST")]
    Test,
}

impl EnvironmentType {
    /// Wire name, also used for query-parameter filtering.
    pub fn as_str(&self) -> &'static str {
        match self {
            EnvironmentType::Live => "LIVE",
            EnvironmentType::Test => "TEST",
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct Environment {
    /// Opaque environment identifier, usable with the legacy `/v1` endpoints.
    pub environment_id: String,
    /// Slug used in `/pwa/v3` path construction.
    pub environment_slug: String,
    pub name: String,
    pub environment_type: EnvironmentType,
    #[serde(default)]
    pub created_at: Option<String>,
}

#[derive(Debug, Clone, Serialize)]
pub struct CreateEnvironmentRequest {
    /// Path-only; never serialized into the body.
    #[serde(skip)]
    pub project_slug: String,
    /// Desired slug; the remote derives one from the name when omitted.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub environment_slug: Option<String>,
    pub name: String,
    pub environment_type: EnvironmentType,
}

#[derive(Debug, Clone, Deserialize)]
pub struct CreateEnvironmentResponse {
    #[serde(default)]
    pub status_code: u16,
    #[serde(default)]
    pub request_id: String,
    pub environment: Environment,
}

#[derive(Debug, Clone)]
pub struct GetEnvironmentRequest {
    pub project_slug: String,
    pub environment_slug: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct GetEnvironmentResponse {
    #[serde(default)]
    pub status_code: u16,
    #[serde(default)]
    pub request_id: String,
    pub environment: Environment,
}

#[derive(Debug, Clone, Default)]
pub struct ListEnvironmentsRequest {
    pub project_slug: String,
    /// Optional filter; when unset, no query parameter is sent.
    pub environment_type: Option<EnvironmentType>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ListEnvironmentsResponse {
    #[serde(default)]
    pub status_code: u16,
    #[serde(default)]
    pub request_id: String,
    pub environments: Vec<Environment>,
}

#[derive(Debug, Clone, Serialize)]
pub struct UpdateEnvironmentRequest {
    #[serde(skip)]
    pub project_slug: String,
    #[serde(skip)]
    pub environment_slug: String,
    pub name: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct UpdateEnvironmentResponse {
    #[serde(default)]
    pub status_code: u16,
    #[serde(default)]
    pub request_id: String,
    pub environment: Environment,
}

#[derive(Debug, Clone)]
pub struct DeleteEnvironmentRequest {
    pub project_slug: String,
    pub environment_slug: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct DeleteEnvironmentResponse {
    #[serde(default)]
    pub status_code: u16,
    #[serde(default)]
    pub request_id: String,
}

/// Client for environment resources.
#[derive(Clone)]
pub struct Environments {
    transport: Arc<Transport>,
}

impl Environments {
    pub(crate) fn new(transport: Arc<Transport>) -> Self {
        Self { transport }
    }

    pub async fn create(
        &self,
        request: &CreateEnvironmentRequest,
    ) -> Result<CreateEnvironmentResponse> {
        if request.project_slug.is_empty() {
            return Err(Error::missing("project_slug"));
        }
        let body = serde_json::to_vec(request).map_err(Error::Serialize)?;
        let path = format!("/pwa/v3/projects/{}/environments", request.project_slug);
        self.transport
            .execute_json(Method::POST, &path, &[], Some(body))
            .await
    }

    pub async fn get(&self, request: &GetEnvironmentRequest) -> Result<GetEnvironmentResponse> {
        if request.project_slug.is_empty() {
            return Err(Error::missing("project_slug"));
        }
        if request.environment_slug.is_empty() {
            return Err(Error::missing("environment_slug"));
        }
        let path = format!(
            "/pwa/v3/projects/{}/environments/{}",
            request.project_slug, request.environment_slug
        );
        self.transport
            .execute_json(Method::GET, &path, &[], None)
            .await
    }

    pub async fn list(
        &self,
        request: &ListEnvironmentsRequest,
    ) -> Result<ListEnvironmentsResponse> {
        if request.project_slug.is_empty() {
            return Err(Error::missing("project_slug"));
        }
        let filter = request
            .environment_type
            .map(|t| t.as_str())
            .unwrap_or_default();
        let path = format!("/pwa/v3/projects/{}/environments", request.project_slug);
        self.transport
            .execute_json(Method::GET, &path, &[("environment_type", filter)], None)
            .await
    }

    pub async fn update(
        &self,
        request: &UpdateEnvironmentRequest,
    ) -> Result<UpdateEnvironmentResponse> {
        if request.project_slug.is_empty() {
            return Err(Error::missing("project_slug"));
        }
        if request.environment_slug.is_empty() {
            return Err(Error::missing("environment_slug"));
        }
        let body = serde_json::to_vec(request).map_err(Error::Serialize)?;
        let path = format!(
            "/pwa/v3/projects/{}/environments/{}",
            request.project_slug, request.environment_slug
        );
        self.transport
            .execute_json(Method::PATCH, &path, &[], Some(body))
            .await
    }

    pub async fn delete(
        &self,
        request: &DeleteEnvironmentRequest,
    ) -> Result<DeleteEnvironmentResponse> {
        if request.project_slug.is_empty() {
            return Err(Error::missing("project_slug"));
        }
        if request.environment_slug.is_empty() {
            return Err(Error::missing("environment_slug"));
        }
        let path = format!(
            "/pwa/v3/projects/{}/environments/{}",
            request.project_slug, request.environment_slug
        );
        self.transport
            .execute_json(Method::DELETE, &path, &[], None)
            .await
    }
}
