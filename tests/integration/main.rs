//! End-to-end tests against a real listening server.
//!
//! Each test starts its own server on an ephemeral port with freshly seeded
//! stores, drives it over HTTP, and shuts it down.

mod blog_posts;
mod recipes;
mod shopping_list;

use resource_api::api::AppState;
use resource_api::server::{run_server, RunningServer};

/// Start a server with sample records on a free local port.
pub async fn start() -> RunningServer {
    run_server(([127, 0, 0, 1], 0).into(), AppState::seeded())
        .await
        .expect("server should start")
}

/// Shared HTTP client.
pub fn client() -> reqwest::Client {
    reqwest::Client::new()
}
