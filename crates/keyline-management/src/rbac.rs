//! RBAC policy resources
//!
//! The policy is a single document per environment: the set of declared
//! resources (with their available actions) and the roles granting actions
//! over them. Get/set replace the whole document; there is no per-role
//! endpoint.

use std::sync::Arc;

use reqwest::Method;
use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};
use crate::transport::Transport;

/// Actions a role may take on one resource. `actions` may contain the
/// wildcard `"*"`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Permission {
    pub resource_id: String,
    pub actions: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PolicyRole {
    pub role_id: String,
    #[serde(default)]
    pub description: String,
    pub permissions: Vec<Permission>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PolicyResource {
    pub resource_id: String,
    #[serde(default)]
    pub description: String,
    pub available_actions: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Policy {
    pub roles: Vec<PolicyRole>,
    pub resources: Vec<PolicyResource>,
}

#[derive(Debug, Clone)]
pub struct GetRbacPolicyRequest {
    pub project_slug: String,
    pub environment_slug: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct GetRbacPolicyResponse {
    #[serde(default)]
    pub status_code: u16,
    #[serde(default)]
    pub request_id: String,
    pub policy: Policy,
}

#[derive(Debug, Clone, Serialize)]
pub struct SetRbacPolicyRequest {
    #[serde(skip)]
    pub project_slug: String,
    #[serde(skip)]
    pub environment_slug: String,
    pub policy: Policy,
}

#[derive(Debug, Clone, Deserialize)]
pub struct SetRbacPolicyResponse {
    #[serde(default)]
    pub status_code: u16,
    #[serde(default)]
    pub request_id: String,
    pub policy: Policy,
}

/// Client for RBAC policy resources.
#[derive(Clone)]
pub struct Rbac {
    transport: Arc<Transport>,
}

impl Rbac {
    pub(crate) fn new(transport: Arc<Transport>) -> Self {
        Self { transport }
    }

    fn path(project_slug: &str, environment_slug: &str) -> String {
        format!("/pwa/v3/projects/{project_slug}/environments/{environment_slug}/rbac_policy")
    }

    pub async fn get_policy(
        &self,
        request: &GetRbacPolicyRequest,
    ) -> Result<GetRbacPolicyResponse> {
        if request.project_slug.is_empty() {
            return Err(Error::missing("project_slug"));
        }
        if request.environment_slug.is_empty() {
            return Err(Error::missing("environment_slug"));
        }
        let path = Self::path(&request.project_slug, &request.environment_slug);
        self.transport
            .execute_json(Method::GET, &path, &[], None)
            .await
    }

    pub async fn set_policy(
        &self,
        request: &SetRbacPolicyRequest,
    ) -> Result<SetRbacPolicyResponse> {
        if request.project_slug.is_empty() {
            return Err(Error::missing("project_slug"));
        }
        if request.environment_slug.is_empty() {
            return Err(Error::missing("environment_slug"));
        }
        let body = serde_json::to_vec(request).map_err(Error::Serialize)?;
        let path = Self::path(&request.project_slug, &request.environment_slug);
        self.transport
            .execute_json(Method::PUT, &path, &[], Some(body))
            .await
    }
}
