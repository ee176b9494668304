//! SDK configuration resources
//!
//! Controls what the frontend SDKs may do against an environment. The
//! configuration is a tagged union discriminated by `vertical`: a consumer
//! project carries consumer sections, a B2B project carries B2B sections,
//! and exactly one of the two exists per environment by construction.

use std::sync::Arc;

use reqwest::Method;
use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};
use crate::transport::Transport;

/// Domains/apps allowed to call the SDK endpoints, and the master switch.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct BasicSettings {
    pub enabled: bool,
    /// Origins allowed for browser SDKs.
    #[serde(default)]
    pub domains: Vec<String>,
    /// App identifiers allowed for mobile SDKs.
    #[serde(default)]
    pub bundle_ids: Vec<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SessionSettings {
    pub max_session_duration_minutes: u32,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct MagicLinksSettings {
    pub login_enabled: bool,
    pub signup_enabled: bool,
    pub pkce_required: bool,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct OtpSettings {
    pub sms_enabled: bool,
    pub email_enabled: bool,
    pub whatsapp_enabled: bool,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct OauthSettings {
    pub enabled: bool,
    pub pkce_required: bool,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PasswordsSettings {
    pub enabled: bool,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SsoSettings {
    pub enabled: bool,
    pub pkce_required: bool,
}

/// Sections available to consumer-vertical environments.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ConsumerSdkConfig {
    pub basic: BasicSettings,
    pub sessions: SessionSettings,
    pub magic_links: MagicLinksSettings,
    pub otps: OtpSettings,
    pub oauth: OauthSettings,
    pub passwords: PasswordsSettings,
}

/// Sections available to B2B-vertical environments.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct B2bSdkConfig {
    pub basic: BasicSettings,
    /// Allow unknown organizations to self-provision through the SDK.
    pub allow_self_onboarding: bool,
    pub sessions: SessionSettings,
    pub magic_links: MagicLinksSettings,
    pub oauth: OauthSettings,
    pub sso: SsoSettings,
}

/// SDK configuration, discriminated by `vertical`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "vertical")]
pub enum SdkConfig {
    #[serde(rename = "CONSUMER")]
    Consumer(ConsumerSdkConfig),
    #[serde(rename = "B2B")]
    B2b(B2bSdkConfig),
}

#[derive(Debug, Clone)]
pub struct GetSdkConfigRequest {
    pub project_slug: String,
    pub environment_slug: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct GetSdkConfigResponse {
    #[serde(default)]
    pub status_code: u16,
    #[serde(default)]
    pub request_id: String,
    pub config: SdkConfig,
}

#[derive(Debug, Clone, Serialize)]
pub struct SetSdkConfigRequest {
    #[serde(skip)]
    pub project_slug: String,
    #[serde(skip)]
    pub environment_slug: String,
    pub config: SdkConfig,
}

#[derive(Debug, Clone, Deserialize)]
pub struct SetSdkConfigResponse {
    #[serde(default)]
    pub status_code: u16,
    #[serde(default)]
    pub request_id: String,
    pub config: SdkConfig,
}

/// Client for SDK configuration resources.
#[derive(Clone)]
pub struct Sdk {
    transport: Arc<Transport>,
}

impl Sdk {
    pub(crate) fn new(transport: Arc<Transport>) -> Self {
        Self { transport }
    }

    fn path(project_slug: &str, environment_slug: &str) -> String {
        format!(
            "/pwa/v3/projects/{project_slug}/environments/{environment_slug}/sdk_configuration"
        )
    }

    pub async fn get_config(
        &self,
        request: &GetSdkConfigRequest,
    ) -> Result<GetSdkConfigResponse> {
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

    pub async fn set_config(
        &self,
        request: &SetSdkConfigRequest,
    ) -> Result<SetSdkConfigResponse> {
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

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn consumer_config_tags_vertical() {
        let config = SdkConfig::Consumer(ConsumerSdkConfig {
            basic: BasicSettings {
                enabled: true,
                domains: vec!["https://app.example.com".into()],
                bundle_ids: vec![],
            },
            sessions: SessionSettings {
                max_session_duration_minutes: 60,
            },
            ..Default::default()
        });
        let json = serde_json::to_string(&config).unwrap();
        assert!(json.contains(r#""vertical":"CONSUMER""#), "got: {json}");
        assert!(json.contains(r#""otps""#), "got: {json}");
        assert!(!json.contains("sso"), "got: {json}");
    }

    #[test]
    fn b2b_config_roundtrips() {
        let config = SdkConfig::B2b(B2bSdkConfig {
            basic: BasicSettings {
                enabled: true,
                domains: vec![],
                bundle_ids: vec!["com.example.app".into()],
            },
            allow_self_onboarding: true,
            sso: SsoSettings {
                enabled: true,
                pkce_required: true,
            },
            ..Default::default()
        });
        let json = serde_json::to_string(&config).unwrap();
        let decoded: SdkConfig = serde_json::from_str(&json).unwrap();
        assert_eq!(decoded, config);
    }

    #[test]
    fn vertical_tag_selects_section_set() {
        let body = r#"{
            "vertical": "B2B",
            "basic": {"enabled": false},
            "allow_self_onboarding": false,
            "sessions": {"max_session_duration_minutes": 0},
            "magic_links": {"login_enabled": false, "signup_enabled": false, "pkce_required": false},
            "oauth": {"enabled": false, "pkce_required": false},
            "sso": {"enabled": false, "pkce_required": false}
        }"#;
        let config: SdkConfig = serde_json::from_str(body).unwrap();
        assert!(matches!(config, SdkConfig::B2b(_)));
    }
}
