//! Shared HTTP transport for all resource clients
//!
//! Owns the single round trip against the management API: URL construction,
//! auth/identification headers, and response classification. Resource
//! clients call [`Transport::execute_json`] with a method, a path template
//! already filled in, optional query parameters, and an optional
//! pre-serialized body; everything conditional lives here.
//!
//! Classification:
//! - 200/201 → success, raw body bytes
//! - 404 → synthesized not-found error with a fixed message
//! - anything else → decode the `{status_code, error_message}` envelope and
//!   report the actual HTTP status; a body that does not decode as the
//!   envelope is surfaced as a decode error, never ignored

use reqwest::Method;
use reqwest::Url;
use reqwest::header::{AUTHORIZATION, CONTENT_TYPE, HeaderValue, USER_AGENT};
use serde::Deserialize;
use serde::de::DeserializeOwned;
use tracing::debug;

use crate::error::{Error, NOT_FOUND_MESSAGE, Result};

/// Error envelope returned by the management API for non-success statuses.
#[derive(Debug, Deserialize)]
struct ErrorEnvelope {
    /// Echoed by the remote but ignored here: the status reported to
    /// callers comes from the HTTP response line, not the body.
    #[serde(default)]
    #[allow(dead_code)]
    status_code: u16,
    error_message: String,
}

/// Shared request executor. One instance backs every resource client of a
/// [`ManagementClient`](crate::ManagementClient); it holds no mutable state
/// after construction.
pub(crate) struct Transport {
    http: reqwest::Client,
    /// Base URL with any trailing `/` removed, validated at build time.
    base_url: String,
    /// Precomputed `Authorization` value (Basic or Bearer), marked sensitive.
    authorization: HeaderValue,
    user_agent: String,
}

impl Transport {
    pub(crate) fn new(
        http: reqwest::Client,
        base_url: String,
        authorization: HeaderValue,
        user_agent: String,
    ) -> Self {
        Self {
            http,
            base_url,
            authorization,
            user_agent,
        }
    }

    /// Execute one request and classify the response.
    ///
    /// `path` may be absolute (leading `/`) or relative; relative paths get
    /// a `/` prefix. Query parameters with empty values are dropped;
    /// non-empty values are URL-encoded. The response body is fully read on
    /// every path, success and failure alike, so the connection is always
    /// released back to the pool.
    pub(crate) async fn execute(
        &self,
        method: Method,
        path: &str,
        query: &[(&str, &str)],
        body: Option<Vec<u8>>,
    ) -> Result<Vec<u8>> {
        let url = self.request_url(path, query)?;

        let mut request = self
            .http
            .request(method.clone(), url)
            .header(CONTENT_TYPE, "application/json")
            .header(USER_AGENT, &self.user_agent)
            .header(AUTHORIZATION, self.authorization.clone());
        if let Some(body) = body {
            request = request.body(body);
        }

        let response = request.send().await?;
        let status = response.status();
        let bytes = response.bytes().await?;
        debug!(method = %method, path, status = status.as_u16(), "management api response");

        match status.as_u16() {
            200 | 201 => Ok(bytes.to_vec()),
            404 => Err(Error::Remote {
                status: 404,
                message: NOT_FOUND_MESSAGE.into(),
            }),
            code => {
                let envelope: ErrorEnvelope =
                    serde_json::from_slice(&bytes).map_err(|e| Error::Decode {
                        context: "error envelope",
                        source: e,
                    })?;
                Err(Error::Remote {
                    status: code,
                    message: envelope.error_message,
                })
            }
        }
    }

    /// Execute one request and decode the success body into `T`.
    ///
    /// Decode failures on the success path are reported distinctly from
    /// transport and remote failures.
    pub(crate) async fn execute_json<T: DeserializeOwned>(
        &self,
        method: Method,
        path: &str,
        query: &[(&str, &str)],
        body: Option<Vec<u8>>,
    ) -> Result<T> {
        let bytes = self.execute(method, path, query, body).await?;
        serde_json::from_slice(&bytes).map_err(|e| Error::Decode {
            context: "response body",
            source: e,
        })
    }

    fn request_url(&self, path: &str, query: &[(&str, &str)]) -> Result<Url> {
        let joined = if path.starts_with('/') {
            format!("{}{}", self.base_url, path)
        } else {
            format!("{}/{}", self.base_url, path)
        };
        let mut url = Url::parse(&joined)
            .map_err(|e| Error::InvalidRequest(format!("invalid request path {path}: {e}")))?;
        append_query(&mut url, query);
        Ok(url)
    }
}

/// Append query parameters, dropping pairs with empty values.
fn append_query(url: &mut Url, query: &[(&str, &str)]) {
    let pairs: Vec<_> = query.iter().filter(|(_, value)| !value.is_empty()).collect();
    if pairs.is_empty() {
        return;
    }
    let mut serializer = url.query_pairs_mut();
    for (key, value) in pairs {
        serializer.append_pair(key, value);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn transport(base: &str) -> Transport {
        Transport::new(
            reqwest::Client::new(),
            base.trim_end_matches('/').to_owned(),
            HeaderValue::from_static("Bearer test"),
            "keyline-management-rust/test".into(),
        )
    }

    #[test]
    fn relative_paths_get_leading_slash() {
        let t = transport("https://manage.keyline.dev");
        let url = t.request_url("pwa/v3/projects", &[]).unwrap();
        assert_eq!(url.as_str(), "https://manage.keyline.dev/pwa/v3/projects");
    }

    #[test]
    fn absolute_paths_are_used_verbatim() {
        let t = transport("https://manage.keyline.dev");
        let url = t.request_url("/v1/projects/project-test-123", &[]).unwrap();
        assert_eq!(
            url.as_str(),
            "https://manage.keyline.dev/v1/projects/project-test-123"
        );
    }

    #[test]
    fn empty_query_values_are_omitted() {
        let t = transport("https://manage.keyline.dev");
        let url = t
            .request_url(
                "/pwa/v3/projects/p1/environments",
                &[("environment_type", ""), ("limit", "10")],
            )
            .unwrap();
        assert_eq!(url.query(), Some("limit=10"));
    }

    #[test]
    fn all_empty_query_values_leave_url_bare() {
        let t = transport("https://manage.keyline.dev");
        let url = t
            .request_url("/pwa/v3/projects", &[("environment_type", "")])
            .unwrap();
        assert_eq!(url.query(), None);
        assert_eq!(url.as_str(), "https://manage.keyline.dev/pwa/v3/projects");
    }

    #[test]
    fn query_values_are_url_encoded() {
        let t = transport("https://manage.keyline.dev");
        let url = t
            .request_url(
                "/pwa/v3/projects/p1/environments/test/redirect_urls/redirect_url",
                &[("url", "https://example.com/callback?next=/home")],
            )
            .unwrap();
        assert_eq!(
            url.query(),
            Some("url=https%3A%2F%2Fexample.com%2Fcallback%3Fnext%3D%2Fhome")
        );
    }

    #[test]
    fn error_envelope_decodes_message() {
        let body = br#"{"status_code": 409, "error_message": "slug already taken"}"#;
        let envelope: ErrorEnvelope = serde_json::from_slice(body).unwrap();
        assert_eq!(envelope.error_message, "slug already taken");
    }

    #[test]
    fn error_envelope_rejects_unexpected_shape() {
        let body = br#"{"error": {"code": "conflict"}}"#;
        assert!(serde_json::from_slice::<ErrorEnvelope>(body).is_err());
    }
}
