//! JWT template resources
//!
//! One template per token kind (session or M2M) per environment. `content`
//! is the claims template as a JSON string; the remote substitutes
//! placeholders at token issuance.

use std::sync::Arc;

use reqwest::Method;
use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};
use crate::transport::Transport;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum JwtTemplateType {
    #[serde(rename = "SESSION")]
    Session,
    #[serde(rename = "M2M")]
    M2m,
}

impl JwtTemplateType {
    /// Lowercase path segment for the single-item endpoints.
    pub fn as_path_segment(&self) -> &'static str {
        match self {
            JwtTemplateType::Session => "session",
            JwtTemplateType::M2m => "m2m",
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct JwtTemplate {
    pub template_type: JwtTemplateType,
    /// Claims template, serialized JSON.
    pub content: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub custom_audience: Option<String>,
}

#[derive(Debug, Clone)]
pub struct GetJwtTemplateRequest {
    pub project_slug: String,
    pub environment_slug: String,
    pub template_type: JwtTemplateType,
}

#[derive(Debug, Clone, Deserialize)]
pub struct GetJwtTemplateResponse {
    #[serde(default)]
    pub status_code: u16,
    #[serde(default)]
    pub request_id: String,
    pub jwt_template: JwtTemplate,
}

#[derive(Debug, Clone, Serialize)]
pub struct SetJwtTemplateRequest {
    #[serde(skip)]
    pub project_slug: String,
    #[serde(skip)]
    pub environment_slug: String,
    pub jwt_template: JwtTemplate,
}

#[derive(Debug, Clone, Deserialize)]
pub struct SetJwtTemplateResponse {
    #[serde(default)]
    pub status_code: u16,
    #[serde(default)]
    pub request_id: String,
    pub jwt_template: JwtTemplate,
}

/// Client for JWT template resources.
#[derive(Clone)]
pub struct JwtTemplates {
    transport: Arc<Transport>,
}

impl JwtTemplates {
    pub(crate) fn new(transport: Arc<Transport>) -> Self {
        Self { transport }
    }

    pub async fn get(&self, request: &GetJwtTemplateRequest) -> Result<GetJwtTemplateResponse> {
        if request.project_slug.is_empty() {
            return Err(Error::missing("project_slug"));
        }
        if request.environment_slug.is_empty() {
            return Err(Error::missing("environment_slug"));
        }
        let path = format!(
            "/pwa/v3/projects/{}/environments/{}/jwt_templates/{}",
            request.project_slug,
            request.environment_slug,
            request.template_type.as_path_segment()
        );
        self.transport
            .execute_json(Method::GET, &path, &[], None)
            .await
    }

    pub async fn set(&self, request: &SetJwtTemplateRequest) -> Result<SetJwtTemplateResponse> {
        if request.project_slug.is_empty() {
            return Err(Error::missing("project_slug"));
        }
        if request.environment_slug.is_empty() {
            return Err(Error::missing("environment_slug"));
        }
        let body = serde_json::to_vec(request).map_err(Error::Serialize)?;
        let path = format!(
            "/pwa/v3/projects/{}/environments/{}/jwt_templates",
            request.project_slug, request.environment_slug
        );
        self.transport
            .execute_json(Method::PUT, &path, &[], Some(body))
            .await
    }
}
