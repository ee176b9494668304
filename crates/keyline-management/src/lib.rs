//! Keyline management API client
//!
//! Client library for the Keyline authentication platform's management API:
//! workspace, project, environment, and security configuration. Each
//! resource family gets a thin client (HTTP verb + path + typed payloads)
//! over one shared transport that owns auth, URL construction, and response
//! classification.
//!
//! Calls are single round trips: no retries, no pagination traversal, no
//! caching. Errors propagate unchanged; branch on them structurally via
//! [`Error::status`] / [`Error::is_not_found`].
//!
//! ```no_run
//! use keyline_management::ManagementClient;
//! use keyline_management::projects::{CreateProjectRequest, Vertical};
//!
//! #[tokio::main]
//! async fn main() -> keyline_management::Result<()> {
//!     let client = ManagementClient::builder()
//!         .workspace_key("workspace-key-id", "workspace-key-secret")
//!         .build()?;
//!
//!     let created = client
//!         .projects
//!         .create(&CreateProjectRequest {
//!             name: "Test Project".into(),
//!             vertical: Vertical::B2b,
//!         })
//!         .await?;
//!     println!("created project {}", created.project.project_slug);
//!     Ok(())
//! }
//! ```

pub mod client;
pub mod email_templates;
pub mod environments;
pub mod error;
pub mod event_streaming;
pub mod jwt_templates;
pub mod legacy;
pub mod password_strength;
pub mod projects;
pub mod public_tokens;
pub mod rbac;
pub mod redirect_urls;
pub mod sdk;
pub mod secrets;
mod transport;
pub mod workspace;

pub use client::{ClientBuilder, DEFAULT_BASE_URL, ManagementClient};
pub use error::{Error, Result};
