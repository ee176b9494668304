//! Test support: in-process mock of the management API
//!
//! Each test builds an axum router standing in for the remote API, serves
//! it on an ephemeral port, and points a real client at it. Not every test
//! binary uses every helper.
#![allow(dead_code)]

use axum::Router;
use keyline_management::ManagementClient;

/// Serve `app` on an ephemeral port and return its base URL.
pub async fn spawn(app: Router) -> String {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });
    format!("http://{addr}")
}

/// Client authenticated with a workspace key pair (Basic).
pub fn client_with_key(base_url: &str) -> ManagementClient {
    ManagementClient::builder()
        .workspace_key("test-key-id", "test-key-secret")
        .base_url(base_url)
        .build()
        .unwrap()
}

/// Client authenticated with a bearer access token.
pub fn client_with_token(base_url: &str) -> ManagementClient {
    ManagementClient::builder()
        .access_token("test-access-token")
        .base_url(base_url)
        .build()
        .unwrap()
}
