//! Event log streaming resources
//!
//! Streams environment event logs to an external sink. The destination
//! config is a tagged union discriminated by `destination_type`; one stream
//! may exist per destination type per environment, addressed by a lowercase
//! path segment (`.../event_streams/datadog`).

use std::sync::Arc;

use reqwest::Method;
use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};
use crate::transport::Transport;

/// Supported destination kinds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum DestinationType {
    #[serde(rename = "DATADOG")]
    Datadog,
    #[serde(rename = "GRAFANA_LOKI")]
    GrafanaLoki,
}

impl DestinationType {
    /// Lowercase path segment for the single-stream endpoints.
    pub fn as_path_segment(&self) -> &'static str {
        match self {
            DestinationType::Datadog => "datadog",
            DestinationType::GrafanaLoki => "grafana_loki",
        }
    }
}

/// Destination credentials, discriminated by `destination_type`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "destination_type")]
pub enum DestinationConfig {
    #[serde(rename = "DATADOG")]
    Datadog { site: String, api_key: String },
    #[serde(rename = "GRAFANA_LOKI")]
    GrafanaLoki {
        hostname: String,
        username: String,
        password: String,
    },
}

impl DestinationConfig {
    pub fn destination_type(&self) -> DestinationType {
        match self {
            DestinationConfig::Datadog { .. } => DestinationType::Datadog,
            DestinationConfig::GrafanaLoki { .. } => DestinationType::GrafanaLoki,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum StreamingStatus {
    #[serde(rename = "ACTIVE")]
    Active,
    #[serde(rename = "DISABLED")]
    Disabled,
}

#[derive(Debug, Clone, Deserialize)]
pub struct EventStream {
    pub streaming_status: StreamingStatus,
    #[serde(flatten)]
    pub destination: DestinationConfig,
}

#[derive(Debug, Clone, Serialize)]
pub struct SetEventStreamRequest {
    #[serde(skip)]
    pub project_slug: String,
    #[serde(skip)]
    pub environment_slug: String,
    /// Upserts the stream for this config's destination type.
    #[serde(flatten)]
    pub destination: DestinationConfig,
}

#[derive(Debug, Clone, Deserialize)]
pub struct SetEventStreamResponse {
    #[serde(default)]
    pub status_code: u16,
    #[serde(default)]
    pub request_id: String,
    pub event_stream: EventStream,
}

#[derive(Debug, Clone)]
pub struct GetEventStreamRequest {
    pub project_slug: String,
    pub environment_slug: String,
    pub destination_type: DestinationType,
}

#[derive(Debug, Clone, Deserialize)]
pub struct GetEventStreamResponse {
    #[serde(default)]
    pub status_code: u16,
    #[serde(default)]
    pub request_id: String,
    pub event_stream: EventStream,
}

#[derive(Debug, Clone)]
pub struct DeleteEventStreamRequest {
    pub project_slug: String,
    pub environment_slug: String,
    pub destination_type: DestinationType,
}

#[derive(Debug, Clone, Deserialize)]
pub struct DeleteEventStreamResponse {
    #[serde(default)]
    pub status_code: u16,
    #[serde(default)]
    pub request_id: String,
}

#[derive(Debug, Clone)]
pub struct EnableEventStreamRequest {
    pub project_slug: String,
    pub environment_slug: String,
    pub destination_type: DestinationType,
}

#[derive(Debug, Clone, Deserialize)]
pub struct EnableEventStreamResponse {
    #[serde(default)]
    pub status_code: u16,
    #[serde(default)]
    pub request_id: String,
    pub streaming_status: StreamingStatus,
}

#[derive(Debug, Clone)]
pub struct DisableEventStreamRequest {
    pub project_slug: String,
    pub environment_slug: String,
    pub destination_type: DestinationType,
}

#[derive(Debug, Clone, Deserialize)]
pub struct DisableEventStreamResponse {
    #[serde(default)]
    pub status_code: u16,
    #[serde(default)]
    pub request_id: String,
    pub streaming_status: StreamingStatus,
}

/// Client for event log streaming resources.
#[derive(Clone)]
pub struct EventStreaming {
    transport: Arc<Transport>,
}

impl EventStreaming {
    pub(crate) fn new(transport: Arc<Transport>) -> Self {
        Self { transport }
    }

    fn stream_path(
        project_slug: &str,
        environment_slug: &str,
        destination_type: DestinationType,
    ) -> String {
        format!(
            "/pwa/v3/projects/{project_slug}/environments/{environment_slug}/event_streams/{}",
            destination_type.as_path_segment()
        )
    }

    fn validate_scope(project_slug: &str, environment_slug: &str) -> Result<()> {
        if project_slug.is_empty() {
            return Err(Error::missing("project_slug"));
        }
        if environment_slug.is_empty() {
            return Err(Error::missing("environment_slug"));
        }
        Ok(())
    }

    /// Create or replace the stream for the config's destination type.
    pub async fn set(&self, request: &SetEventStreamRequest) -> Result<SetEventStreamResponse> {
        Self::validate_scope(&request.project_slug, &request.environment_slug)?;
        let body = serde_json::to_vec(request).map_err(Error::Serialize)?;
        let path = Self::stream_path(
            &request.project_slug,
            &request.environment_slug,
            request.destination.destination_type(),
        );
        self.transport
            .execute_json(Method::PUT, &path, &[], Some(body))
            .await
    }

    pub async fn get(&self, request: &GetEventStreamRequest) -> Result<GetEventStreamResponse> {
        Self::validate_scope(&request.project_slug, &request.environment_slug)?;
        let path = Self::stream_path(
            &request.project_slug,
            &request.environment_slug,
            request.destination_type,
        );
        self.transport
            .execute_json(Method::GET, &path, &[], None)
            .await
    }

    pub async fn delete(
        &self,
        request: &DeleteEventStreamRequest,
    ) -> Result<DeleteEventStreamResponse> {
        Self::validate_scope(&request.project_slug, &request.environment_slug)?;
        let path = Self::stream_path(
            &request.project_slug,
            &request.environment_slug,
            request.destination_type,
        );
        self.transport
            .execute_json(Method::DELETE, &path, &[], None)
            .await
    }

    pub async fn enable(
        &self,
        request: &EnableEventStreamRequest,
    ) -> Result<EnableEventStreamResponse> {
        Self::validate_scope(&request.project_slug, &request.environment_slug)?;
        let path = format!(
            "{}/enable",
            Self::stream_path(
                &request.project_slug,
                &request.environment_slug,
                request.destination_type,
            )
        );
        self.transport
            .execute_json(Method::POST, &path, &[], None)
            .await
    }

    pub async fn disable(
        &self,
        request: &DisableEventStreamRequest,
    ) -> Result<DisableEventStreamResponse> {
        Self::validate_scope(&request.project_slug, &request.environment_slug)?;
        let path = format!(
            "{}/disable",
            Self::stream_path(
                &request.project_slug,
                &request.environment_slug,
                request.destination_type,
            )
        );
        self.transport
            .execute_json(Method::POST, &path, &[], None)
            .await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn set_request_flattens_destination_with_tag() {
        let request = SetEventStreamRequest {
            project_slug: "acme".into(),
            environment_slug: "production".into(),
            destination: DestinationConfig::Datadog {
                site: "datadoghq.com".into(),
                api_key: "dd-key".into(),
            },
        };
        let json = serde_json::to_string(&request).unwrap();
        assert_eq!(
            json,
            r#"{"destination_type":"DATADOG","site":"datadoghq.com","api_key":"dd-key"}"#
        );
    }

    #[test]
    fn destination_type_follows_variant() {
        let loki = DestinationConfig::GrafanaLoki {
            hostname: "logs.example.com".into(),
            username: "writer".into(),
            password: "pw".into(),
        };
        assert_eq!(loki.destination_type(), DestinationType::GrafanaLoki);
        assert_eq!(loki.destination_type().as_path_segment(), "grafana_loki");
    }

    #[test]
    fn event_stream_decodes_flattened_destination() {
        let body = r#"{
            "streaming_status": "ACTIVE",
            "destination_type": "GRAFANA_LOKI",
            "hostname": "logs.example.com",
            "username": "writer",
            "password": "pw"
        }"#;
        let stream: EventStream = serde_json::from_str(body).unwrap();
        assert_eq!(stream.streaming_status, StreamingStatus::Active);
        assert!(matches!(
            stream.destination,
            DestinationConfig::GrafanaLoki { .. }
        ));
    }

    #[test]
    fn unknown_destination_type_is_a_decode_error() {
        let body = r#"{
            "streaming_status": "ACTIVE",
            "destination_type": "SPLUNK",
            "hostname": "x"
        }"#;
        assert!(serde_json::from_str::<EventStream>(body).is_err());
    }
}
