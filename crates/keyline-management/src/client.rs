//! Client construction and resource client wiring
//!
//! One immutable configuration backs every resource client: credential
//! material, base URL, HTTP handle, and user-agent identification are fixed
//! at build time and shared behind an `Arc`. Construction is the only place
//! configuration can fail; a built client can always send authenticated
//! requests.

use std::sync::Arc;
use std::time::Duration;

use base64::Engine;
use base64::engine::general_purpose::STANDARD;
use common::SecretString;
use reqwest::Url;
use reqwest::header::HeaderValue;

use crate::environments::Environments;
use crate::email_templates::EmailTemplates;
use crate::error::{Error, Result};
use crate::event_streaming::EventStreaming;
use crate::jwt_templates::JwtTemplates;
use crate::legacy::Legacy;
use crate::password_strength::PasswordStrength;
use crate::projects::Projects;
use crate::public_tokens::PublicTokens;
use crate::rbac::Rbac;
use crate::redirect_urls::RedirectUrls;
use crate::sdk::Sdk;
use crate::secrets::Secrets;
use crate::transport::Transport;
use crate::workspace::Workspace;

/// Default management API endpoint.
pub const DEFAULT_BASE_URL: &str = "https://manage.keyline.dev";

const CLIENT_NAME: &str = "keyline-management-rust";
const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Resolved credential material.
///
/// Selection is deterministic: a workspace key pair wins whenever both
/// halves are non-empty, a bearer token is used when only it is present,
/// and a builder with neither refuses to construct a client. An
/// unauthenticated request is unrepresentable.
#[derive(Debug)]
enum Credentials {
    WorkspaceKey {
        key_id: String,
        secret: SecretString,
    },
    AccessToken(SecretString),
}

impl Credentials {
    fn header_value(&self) -> Result<HeaderValue> {
        let raw = match self {
            Credentials::WorkspaceKey { key_id, secret } => format!(
                "Basic {}",
                STANDARD.encode(format!("{key_id}:{}", secret.expose()))
            ),
            Credentials::AccessToken(token) => format!("Bearer {}", token.expose()),
        };
        let mut value = HeaderValue::from_str(&raw)
            .map_err(|e| Error::Config(format!("credential material is not header-safe: {e}")))?;
        value.set_sensitive(true);
        Ok(value)
    }
}

/// Builder for [`ManagementClient`].
///
/// ```no_run
/// # fn main() -> keyline_management::Result<()> {
/// let client = keyline_management::ManagementClient::builder()
///     .workspace_key("workspace-key-id", "workspace-key-secret")
///     .user_agent_suffix("my-deploy-tool/2.1")
///     .build()?;
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Default)]
pub struct ClientBuilder {
    key_id: Option<String>,
    key_secret: Option<SecretString>,
    access_token: Option<SecretString>,
    base_url: Option<String>,
    user_agent_suffix: Option<String>,
    http: Option<reqwest::Client>,
    timeout: Option<Duration>,
}

impl ClientBuilder {
    /// Authenticate with a workspace key pair (HTTP Basic).
    pub fn workspace_key(
        mut self,
        key_id: impl Into<String>,
        secret: impl Into<SecretString>,
    ) -> Self {
        self.key_id = Some(key_id.into());
        self.key_secret = Some(secret.into());
        self
    }

    /// Authenticate with a bearer access token.
    pub fn access_token(mut self, token: impl Into<SecretString>) -> Self {
        self.access_token = Some(token.into());
        self
    }

    /// Override the management API base URL (e.g. for a regional endpoint
    /// or a test double). Defaults to [`DEFAULT_BASE_URL`].
    pub fn base_url(mut self, url: impl Into<String>) -> Self {
        self.base_url = Some(url.into());
        self
    }

    /// Append an identifying suffix to the `User-Agent` header.
    pub fn user_agent_suffix(mut self, suffix: impl Into<String>) -> Self {
        self.user_agent_suffix = Some(suffix.into());
        self
    }

    /// Inject a pre-configured HTTP client. Timeouts, proxies, and pool
    /// limits configured on it are used as-is; [`ClientBuilder::timeout`]
    /// is ignored when a client is injected.
    pub fn http_client(mut self, client: reqwest::Client) -> Self {
        self.http = Some(client);
        self
    }

    /// Request timeout applied when the builder constructs its own HTTP
    /// client. The library has no retry or timeout policy of its own beyond
    /// this pass-through.
    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    /// Validate the configuration and construct the client.
    pub fn build(self) -> Result<ManagementClient> {
        let credentials = select_credentials(self.key_id, self.key_secret, self.access_token)?;
        let authorization = credentials.header_value()?;

        let base_url = self
            .base_url
            .unwrap_or_else(|| DEFAULT_BASE_URL.to_owned())
            .trim_end_matches('/')
            .to_owned();
        if !base_url.starts_with("http://") && !base_url.starts_with("https://") {
            return Err(Error::Config(format!(
                "base URL must start with http:// or https://, got: {base_url}"
            )));
        }
        Url::parse(&base_url).map_err(|e| Error::Config(format!("invalid base URL: {e}")))?;

        let user_agent = match self.user_agent_suffix {
            Some(suffix) => format!("{CLIENT_NAME}/{VERSION} {suffix}"),
            None => format!("{CLIENT_NAME}/{VERSION}"),
        };

        let http = match self.http {
            Some(client) => client,
            None => {
                let mut builder = reqwest::Client::builder();
                if let Some(timeout) = self.timeout {
                    builder = builder.timeout(timeout);
                }
                builder
                    .build()
                    .map_err(|e| Error::Config(format!("building HTTP client: {e}")))?
            }
        };

        let transport = Arc::new(Transport::new(http, base_url, authorization, user_agent));
        Ok(ManagementClient::from_transport(transport))
    }
}

/// Deterministic credential selection; empty strings count as unset.
fn select_credentials(
    key_id: Option<String>,
    key_secret: Option<SecretString>,
    access_token: Option<SecretString>,
) -> Result<Credentials> {
    if let (Some(key_id), Some(secret)) = (&key_id, &key_secret) {
        if !key_id.is_empty() && !secret.is_empty() {
            return Ok(Credentials::WorkspaceKey {
                key_id: key_id.clone(),
                secret: secret.clone(),
            });
        }
    }
    match access_token {
        Some(token) if !token.is_empty() => Ok(Credentials::AccessToken(token)),
        _ => Err(Error::Config(
            "no credential material configured; supply a workspace key pair or an access token"
                .into(),
        )),
    }
}

/// Root client for the Keyline management API.
///
/// Each public field is the client for one resource family; all of them
/// share one transport (auth, base URL, HTTP pool). The client is cheap to
/// clone and safe to share across tasks.
#[derive(Clone)]
pub struct ManagementClient {
    pub workspace: Workspace,
    pub projects: Projects,
    pub environments: Environments,
    pub secrets: Secrets,
    pub public_tokens: PublicTokens,
    pub redirect_urls: RedirectUrls,
    pub email_templates: EmailTemplates,
    pub password_strength: PasswordStrength,
    pub jwt_templates: JwtTemplates,
    pub rbac: Rbac,
    pub sdk: Sdk,
    pub event_streaming: EventStreaming,
    pub legacy: Legacy,
}

impl ManagementClient {
    /// Start building a client.
    pub fn builder() -> ClientBuilder {
        ClientBuilder::default()
    }

    /// Construct a client from environment variables.
    ///
    /// Reads `KEYLINE_MANAGEMENT_KEY_ID` / `KEYLINE_MANAGEMENT_KEY_SECRET`
    /// for Basic auth and `KEYLINE_ACCESS_TOKEN` for Bearer auth; when both
    /// are set the key pair wins, matching builder selection. An optional
    /// `KEYLINE_BASE_URL` overrides the endpoint.
    pub fn from_env() -> Result<Self> {
        let mut builder = Self::builder();
        if let Ok(url) = std::env::var("KEYLINE_BASE_URL") {
            builder = builder.base_url(url);
        }
        if let (Ok(key_id), Ok(secret)) = (
            std::env::var("KEYLINE_MANAGEMENT_KEY_ID"),
            std::env::var("KEYLINE_MANAGEMENT_KEY_SECRET"),
        ) {
            builder = builder.workspace_key(key_id, secret);
        }
        if let Ok(token) = std::env::var("KEYLINE_ACCESS_TOKEN") {
            builder = builder.access_token(token);
        }
        builder.build()
    }

    fn from_transport(transport: Arc<Transport>) -> Self {
        Self {
            workspace: Workspace::new(transport.clone()),
            projects: Projects::new(transport.clone()),
            environments: Environments::new(transport.clone()),
            secrets: Secrets::new(transport.clone()),
            public_tokens: PublicTokens::new(transport.clone()),
            redirect_urls: RedirectUrls::new(transport.clone()),
            email_templates: EmailTemplates::new(transport.clone()),
            password_strength: PasswordStrength::new(transport.clone()),
            jwt_templates: JwtTemplates::new(transport.clone()),
            rbac: Rbac::new(transport.clone()),
            sdk: Sdk::new(transport.clone()),
            event_streaming: EventStreaming::new(transport.clone()),
            legacy: Legacy::new(transport),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Mutex;

    /// Mutex to serialize tests that mutate environment variables, preventing
    /// data races when tests run in parallel.
    static ENV_MUTEX: Mutex<()> = Mutex::new(());

    /// SAFETY: Callers must hold ENV_MUTEX to prevent concurrent env mutation.
    unsafe fn set_env(key: &str, val: &str) {
        unsafe { std::env::set_var(key, val) };
    }

    unsafe fn remove_env(key: &str) {
        unsafe { std::env::remove_var(key) };
    }

    fn decode_basic(value: &HeaderValue) -> String {
        let raw = value.to_str().unwrap();
        let encoded = raw.strip_prefix("Basic ").expect("Basic prefix");
        String::from_utf8(STANDARD.decode(encoded).unwrap()).unwrap()
    }

    #[test]
    fn key_pair_selects_basic_auth() {
        let credentials = select_credentials(
            Some("key-id-1".into()),
            Some("key-secret-1".into()),
            None,
        )
        .unwrap();
        let header = credentials.header_value().unwrap();
        assert_eq!(decode_basic(&header), "key-id-1:key-secret-1");
        assert!(header.is_sensitive());
    }

    #[test]
    fn key_pair_wins_over_token_when_both_present() {
        let credentials = select_credentials(
            Some("key-id-1".into()),
            Some("key-secret-1".into()),
            Some("access-token-1".into()),
        )
        .unwrap();
        assert!(matches!(credentials, Credentials::WorkspaceKey { .. }));
    }

    #[test]
    fn token_selected_when_key_pair_incomplete() {
        let credentials =
            select_credentials(Some("key-id-1".into()), Some("".into()), Some("tok".into()))
                .unwrap();
        let header = credentials.header_value().unwrap();
        assert_eq!(header.to_str().unwrap(), "Bearer tok");
    }

    #[test]
    fn no_credentials_is_a_config_error() {
        let err = select_credentials(None, None, None).unwrap_err();
        assert!(matches!(err, Error::Config(_)));

        let err = select_credentials(Some("".into()), Some("".into()), Some("".into())).unwrap_err();
        assert!(matches!(err, Error::Config(_)));
    }

    #[test]
    fn build_without_credentials_fails() {
        let result = ManagementClient::builder().build();
        assert!(matches!(result, Err(Error::Config(_))));
    }

    #[test]
    fn build_rejects_non_http_base_url() {
        let result = ManagementClient::builder()
            .access_token("tok")
            .base_url("ftp://manage.keyline.dev")
            .build();
        assert!(matches!(result, Err(Error::Config(_))));
    }

    #[test]
    fn build_accepts_custom_http_client_and_timeout() {
        let client = ManagementClient::builder()
            .workspace_key("key-id", "key-secret")
            .http_client(reqwest::Client::new())
            .timeout(Duration::from_secs(5))
            .build();
        assert!(client.is_ok());
    }

    #[test]
    fn from_env_prefers_key_pair() {
        let _guard = ENV_MUTEX.lock().unwrap();
        unsafe {
            set_env("KEYLINE_MANAGEMENT_KEY_ID", "env-key-id");
            set_env("KEYLINE_MANAGEMENT_KEY_SECRET", "env-key-secret");
            set_env("KEYLINE_ACCESS_TOKEN", "env-token");
            remove_env("KEYLINE_BASE_URL");
        }

        let client = ManagementClient::from_env();
        assert!(client.is_ok());

        unsafe {
            remove_env("KEYLINE_MANAGEMENT_KEY_ID");
            remove_env("KEYLINE_MANAGEMENT_KEY_SECRET");
            remove_env("KEYLINE_ACCESS_TOKEN");
        }
    }

    #[test]
    fn from_env_without_credentials_fails() {
        let _guard = ENV_MUTEX.lock().unwrap();
        unsafe {
            remove_env("KEYLINE_MANAGEMENT_KEY_ID");
            remove_env("KEYLINE_MANAGEMENT_KEY_SECRET");
            remove_env("KEYLINE_ACCESS_TOKEN");
        }

        let result = ManagementClient::from_env();
        assert!(matches!(result, Err(Error::Config(_))));
    }
}
