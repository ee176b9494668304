//! Project resources
//!
//! Projects are the top-level unit of configuration: each one carries a
//! human-meaningful slug used in modern `/pwa/v3` paths and a pair of
//! opaque live/test project IDs usable with the legacy `/v1` endpoints.
//! Creating a project auto-provisions its live and test environments.

use std::sync::Arc;

use reqwest::Method;
use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};
use crate::transport::Transport;

/// Product vertical a project serves. Fixed at creation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Vertical {
    #[serde(rename = "CONSUMER")]
    Consumer,
    #[serde(rename = "B2B")]
    B2b,
}

/// A project as returned by the management API.
#[derive(Debug, Clone, Deserialize)]
pub struct Project {
    /// Opaque project identifier.
    pub project_id: String,
    /// Slug used in `/pwa/v3` path construction.
    pub project_slug: String,
    pub name: String,
    pub vertical: Vertical,
    /// Opaque identifier of the auto-created live environment, usable with
    /// the legacy `/v1` endpoints.
    pub live_project_id: String,
    /// Opaque identifier of the auto-created test environment.
    pub test_project_id: String,
    #[serde(default)]
    pub created_at: Option<String>,
    #[serde(default)]
    pub last_updated_at: Option<String>,
}

#[derive(Debug, Clone, Serialize)]
pub struct CreateProjectRequest {
    pub name: String,
    pub vertical: Vertical,
}

#[derive(Debug, Clone, Deserialize)]
pub struct CreateProjectResponse {
    #[serde(default)]
    pub status_code: u16,
    #[serde(default)]
    pub request_id: String,
    pub project: Project,
}

#[derive(Debug, Clone)]
pub struct GetProjectRequest {
    pub project_slug: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct GetProjectResponse {
    #[serde(default)]
    pub status_code: u16,
    #[serde(default)]
    pub request_id: String,
    pub project: Project,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ListProjectsResponse {
    #[serde(default)]
    pub status_code: u16,
    #[serde(default)]
    pub request_id: String,
    pub projects: Vec<Project>,
}

#[derive(Debug, Clone, Serialize)]
pub struct UpdateProjectRequest {
    /// Path-only; never serialized into the body.
    #[serde(skip)]
    pub project_slug: String,
    pub name: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct UpdateProjectResponse {
    #[serde(default)]
    pub status_code: u16,
    #[serde(default)]
    pub request_id: String,
    pub project: Project,
}

#[derive(Debug, Clone)]
pub struct DeleteProjectRequest {
    pub project_slug: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct DeleteProjectResponse {
    #[serde(default)]
    pub status_code: u16,
    #[serde(default)]
    pub request_id: String,
}

/// Client for project resources.
#[derive(Clone)]
pub struct Projects {
    transport: Arc<Transport>,
}

impl Projects {
    pub(crate) fn new(transport: Arc<Transport>) -> Self {
        Self { transport }
    }

    pub async fn create(&self, request: &CreateProjectRequest) -> Result<CreateProjectResponse> {
        let body = serde_json::to_vec(request).map_err(Error::Serialize)?;
        self.transport
            .execute_json(Method::POST, "/pwa/v3/projects", &[], Some(body))
            .await
    }

    pub async fn get(&self, request: &GetProjectRequest) -> Result<GetProjectResponse> {
        if request.project_slug.is_empty() {
            return Err(Error::missing("project_slug"));
        }
        let path = format!("/pwa/v3/projects/{}", request.project_slug);
        self.transport
            .execute_json(Method::GET, &path, &[], None)
            .await
    }

    pub async fn list(&self) -> Result<ListProjectsResponse> {
        self.transport
            .execute_json(Method::GET, "/pwa/v3/projects", &[], None)
            .await
    }

    pub async fn update(&self, request: &UpdateProjectRequest) -> Result<UpdateProjectResponse> {
        if request.project_slug.is_empty() {
            return Err(Error::missing("project_slug"));
        }
        let body = serde_json::to_vec(request).map_err(Error::Serialize)?;
        let path = format!("/pwa/v3/projects/{}", request.project_slug);
        self.transport
            .execute_json(Method::PATCH, &path, &[], Some(body))
            .await
    }

    pub async fn delete(&self, request: &DeleteProjectRequest) -> Result<DeleteProjectResponse> {
        if request.project_slug.is_empty() {
            return Err(Error::missing("project_slug"));
        }
        let path = format!("/pwa/v3/projects/{}", request.project_slug);
        self.transport
            .execute_json(Method::DELETE, &path, &[], None)
            .await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn create_request_serializes_vertical_as_wire_name() {
        let request = CreateProjectRequest {
            name: "Test Project".into(),
            vertical: Vertical::B2b,
        };
        let json = serde_json::to_string(&request).unwrap();
        assert_eq!(json, r#"{"name":"Test Project","vertical":"B2B"}"#);
    }

    #[test]
    fn update_request_excludes_path_fields_from_body() {
        let request = UpdateProjectRequest {
            project_slug: "acme-prod".into(),
            name: "Renamed".into(),
        };
        let json = serde_json::to_string(&request).unwrap();
        assert!(!json.contains("project_slug"), "got: {json}");
        assert_eq!(json, r#"{"name":"Renamed"}"#);
    }

    #[test]
    fn project_deserializes_from_envelope_payload() {
        let body = r#"{
            "status_code": 200,
            "request_id": "request-id-abc",
            "project": {
                "project_id": "project-5f2c",
                "project_slug": "acme",
                "name": "Acme",
                "vertical": "CONSUMER",
                "live_project_id": "project-live-9911",
                "test_project_id": "project-test-9912",
                "created_at": "2026-03-01T09:00:00Z"
            }
        }"#;
        let response: GetProjectResponse = serde_json::from_str(body).unwrap();
        assert_eq!(response.request_id, "request-id-abc");
        assert_eq!(response.project.vertical, Vertical::Consumer);
        assert_eq!(response.project.live_project_id, "project-live-9911");
        assert!(response.project.last_updated_at.is_none());
    }
}
