//! Redirect URL resources
//!
//! Allowed redirect destinations for hosted auth flows. The URL itself is
//! the resource key; since URLs cannot be path segments, the single-item
//! operations address `.../redirect_urls/redirect_url` and pass the key as
//! a `url` query parameter (get/delete) or in the body (update).

use std::sync::Arc;

use reqwest::Method;
use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};
use crate::transport::Transport;

/// Flow a redirect URL is valid for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum RedirectUrlType {
    #[serde(rename = "LOGIN")]
    Login,
    #[serde(rename = "SIGNUP")]
    Signup,
    #[serde(rename = "INVITE")]
    Invite,
    #[serde(rename = "RESET_PASSWORD")]
    ResetPassword,
}

/// One flow this URL participates in, and whether it is that flow's default.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct RedirectType {
    #[serde(rename = "type")]
    pub redirect_type: RedirectUrlType,
    pub is_default: bool,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RedirectUrl {
    pub url: String,
    pub valid_types: Vec<RedirectType>,
}

#[derive(Debug, Clone, Serialize)]
pub struct CreateRedirectUrlRequest {
    #[serde(skip)]
    pub project_slug: String,
    #[serde(skip)]
    pub environment_slug: String,
    pub url: String,
    pub valid_types: Vec<RedirectType>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct CreateRedirectUrlResponse {
    #[serde(default)]
    pub status_code: u16,
    #[serde(default)]
    pub request_id: String,
    pub redirect_url: RedirectUrl,
}

#[derive(Debug, Clone)]
pub struct GetRedirectUrlRequest {
    pub project_slug: String,
    pub environment_slug: String,
    pub url: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct GetRedirectUrlResponse {
    #[serde(default)]
    pub status_code: u16,
    #[serde(default)]
    pub request_id: String,
    pub redirect_url: RedirectUrl,
}

#[derive(Debug, Clone)]
pub struct ListRedirectUrlsRequest {
    pub project_slug: String,
    pub environment_slug: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ListRedirectUrlsResponse {
    #[serde(default)]
    pub status_code: u16,
    #[serde(default)]
    pub request_id: String,
    pub redirect_urls: Vec<RedirectUrl>,
}

#[derive(Debug, Clone, Serialize)]
pub struct UpdateRedirectUrlRequest {
    #[serde(skip)]
    pub project_slug: String,
    #[serde(skip)]
    pub environment_slug: String,
    pub url: String,
    pub valid_types: Vec<RedirectType>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct UpdateRedirectUrlResponse {
    #[serde(default)]
    pub status_code: u16,
    #[serde(default)]
    pub request_id: String,
    pub redirect_url: RedirectUrl,
}

#[derive(Debug, Clone)]
pub struct DeleteRedirectUrlRequest {
    pub project_slug: String,
    pub environment_slug: String,
    pub url: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct DeleteRedirectUrlResponse {
    #[serde(default)]
    pub status_code: u16,
    #[serde(default)]
    pub request_id: String,
}

/// Client for redirect URL resources.
#[derive(Clone)]
pub struct RedirectUrls {
    transport: Arc<Transport>,
}

impl RedirectUrls {
    pub(crate) fn new(transport: Arc<Transport>) -> Self {
        Self { transport }
    }

    fn base_path(project_slug: &str, environment_slug: &str) -> String {
        format!("/pwa/v3/projects/{project_slug}/environments/{environment_slug}/redirect_urls")
    }

    pub async fn create(
        &self,
        request: &CreateRedirectUrlRequest,
    ) -> Result<CreateRedirectUrlResponse> {
        if request.project_slug.is_empty() {
            return Err(Error::missing("project_slug"));
        }
        if request.environment_slug.is_empty() {
            return Err(Error::missing("environment_slug"));
        }
        let body = serde_json::to_vec(request).map_err(Error::Serialize)?;
        let path = Self::base_path(&request.project_slug, &request.environment_slug);
        self.transport
            .execute_json(Method::POST, &path, &[], Some(body))
            .await
    }

    pub async fn get(&self, request: &GetRedirectUrlRequest) -> Result<GetRedirectUrlResponse> {
        if request.project_slug.is_empty() {
            return Err(Error::missing("project_slug"));
        }
        if request.environment_slug.is_empty() {
            return Err(Error::missing("environment_slug"));
        }
        if request.url.is_empty() {
            return Err(Error::missing("url"));
        }
        let path = format!(
            "{}/redirect_url",
            Self::base_path(&request.project_slug, &request.environment_slug)
        );
        self.transport
            .execute_json(Method::GET, &path, &[("url", request.url.as_str())], None)
            .await
    }

    pub async fn list(
        &self,
        request: &ListRedirectUrlsRequest,
    ) -> Result<ListRedirectUrlsResponse> {
        if request.project_slug.is_empty() {
            return Err(Error::missing("project_slug"));
        }
        if request.environment_slug.is_empty() {
            return Err(Error::missing("environment_slug"));
        }
        let path = Self::base_path(&request.project_slug, &request.environment_slug);
        self.transport
            .execute_json(Method::GET, &path, &[], None)
            .await
    }

    pub async fn update(
        &self,
        request: &UpdateRedirectUrlRequest,
    ) -> Result<UpdateRedirectUrlResponse> {
        if request.project_slug.is_empty() {
            return Err(Error::missing("project_slug"));
        }
        if request.environment_slug.is_empty() {
            return Err(Error::missing("environment_slug"));
        }
        if request.url.is_empty() {
            return Err(Error::missing("url"));
        }
        let body = serde_json::to_vec(request).map_err(Error::Serialize)?;
        let path = format!(
            "{}/redirect_url",
            Self::base_path(&request.project_slug, &request.environment_slug)
        );
        self.transport
            .execute_json(Method::PUT, &path, &[], Some(body))
            .await
    }

    pub async fn delete(
        &self,
        request: &DeleteRedirectUrlRequest,
    ) -> Result<DeleteRedirectUrlResponse> {
        if request.project_slug.is_empty() {
            return Err(Error::missing("project_slug"));
        }
        if request.environment_slug.is_empty() {
            return Err(Error::missing("environment_slug"));
        }
        if request.url.is_empty() {
            return Err(Error::missing("url"));
        }
        let path = format!(
            "{}/redirect_url",
            Self::base_path(&request.project_slug, &request.environment_slug)
        );
        self.transport
            .execute_json(Method::DELETE, &path, &[("url", request.url.as_str())], None)
            .await
    }
}
