//! Workspace resources
//!
//! The workspace is the root object the credential pair belongs to; there
//! is exactly one per client, so these endpoints take no identifiers.

use std::sync::Arc;

use reqwest::Method;
use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};
use crate::transport::Transport;

#[derive(Debug, Clone, Deserialize)]
pub struct WorkspaceInfo {
    pub workspace_id: String,
    pub name: String,
    #[serde(default)]
    pub created_at: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct GetWorkspaceResponse {
    #[serde(default)]
    pub status_code: u16,
    #[serde(default)]
    pub request_id: String,
    pub workspace: WorkspaceInfo,
}

#[derive(Debug, Clone, Serialize)]
pub struct UpdateWorkspaceRequest {
    pub name: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct UpdateWorkspaceResponse {
    #[serde(default)]
    pub status_code: u16,
    #[serde(default)]
    pub request_id: String,
    pub workspace: WorkspaceInfo,
}

/// Client for the workspace itself.
#[derive(Clone)]
pub struct Workspace {
    transport: Arc<Transport>,
}

impl Workspace {
    pub(crate) fn new(transport: Arc<Transport>) -> Self {
        Self { transport }
    }

    pub async fn get(&self) -> Result<GetWorkspaceResponse> {
        self.transport
            .execute_json(Method::GET, "/pwa/v3/workspace", &[], None)
            .await
    }

    pub async fn update(&self, request: &UpdateWorkspaceRequest) -> Result<UpdateWorkspaceResponse> {
        if request.name.is_empty() {
            return Err(Error::missing("name"));
        }
        let body = serde_json::to_vec(request).map_err(Error::Serialize)?;
        self.transport
            .execute_json(Method::PATCH, "/pwa/v3/workspace", &[], Some(body))
            .await
    }
}
