//! Legacy `/v1` endpoints and the workspace migration shim
//!
//! Older resources are addressed by opaque project IDs
//! (`project-(live|test)-…`) rather than slugs. These endpoints remain for
//! projects created before slugs existed; `migrate_project` promotes such a
//! project into the slug-addressed model via the `/web/v1` shim.

use std::sync::Arc;

use reqwest::Method;
use serde::Deserialize;

use crate::error::{Error, Result};
use crate::projects::{Project, Vertical};
use crate::transport::Transport;

/// A project in the pre-slug shape.
#[derive(Debug, Clone, Deserialize)]
pub struct LegacyProject {
    pub project_id: String,
    pub name: String,
    pub vertical: Vertical,
    #[serde(default)]
    pub created_at: Option<String>,
}

#[derive(Debug, Clone)]
pub struct GetLegacyProjectRequest {
    pub project_id: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct GetLegacyProjectResponse {
    #[serde(default)]
    pub status_code: u16,
    #[serde(default)]
    pub request_id: String,
    pub project: LegacyProject,
}

#[derive(Debug, Clone)]
pub struct GetProjectMetricsRequest {
    pub project_id: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct GetProjectMetricsResponse {
    #[serde(default)]
    pub status_code: u16,
    #[serde(default)]
    pub request_id: String,
    pub user_count: u64,
    /// Only populated for B2B projects.
    #[serde(default)]
    pub organization_count: Option<u64>,
}

#[derive(Debug, Clone)]
pub struct MigrateProjectRequest {
    pub project_id: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct MigrateProjectResponse {
    #[serde(default)]
    pub status_code: u16,
    #[serde(default)]
    pub request_id: String,
    /// The project in the slug-addressed shape after promotion.
    pub project: Project,
}

/// Client for legacy endpoints.
#[derive(Clone)]
pub struct Legacy {
    transport: Arc<Transport>,
}

impl Legacy {
    pub(crate) fn new(transport: Arc<Transport>) -> Self {
        Self { transport }
    }

    pub async fn get_project(
        &self,
        request: &GetLegacyProjectRequest,
    ) -> Result<GetLegacyProjectResponse> {
        if request.project_id.is_empty() {
            return Err(Error::missing("project_id"));
        }
        let path = format!("/v1/projects/{}", request.project_id);
        self.transport
            .execute_json(Method::GET, &path, &[], None)
            .await
    }

    pub async fn get_project_metrics(
        &self,
        request: &GetProjectMetricsRequest,
    ) -> Result<GetProjectMetricsResponse> {
        if request.project_id.is_empty() {
            return Err(Error::missing("project_id"));
        }
        let path = format!("/v1/projects/{}/metrics", request.project_id);
        self.transport
            .execute_json(Method::GET, &path, &[], None)
            .await
    }

    /// Promote a legacy project into the slug-addressed model. Idempotent on
    /// the remote side: re-migrating an already-migrated project returns the
    /// existing slugs.
    pub async fn migrate_project(
        &self,
        request: &MigrateProjectRequest,
    ) -> Result<MigrateProjectResponse> {
        if request.project_id.is_empty() {
            return Err(Error::missing("project_id"));
        }
        let path = format!("/web/v1/projects/{}/migrate", request.project_id);
        self.transport
            .execute_json(Method::POST, &path, &[], None)
            .await
    }
}
