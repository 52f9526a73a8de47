//! Server start/stop lifecycle.

use std::io;
use std::net::SocketAddr;

use tokio::net::TcpListener;
use tokio::sync::oneshot;
use tokio::task::JoinHandle;
use tracing::{info, warn};

use crate::api::{create_router, AppState};
use crate::error::{Error, Result};

/// A server accepting connections in a background task.
#[derive(Debug)]
pub struct RunningServer {
    addr: SocketAddr,
    shutdown: oneshot::Sender<()>,
    handle: JoinHandle<io::Result<()>>,
}

/// Bind `addr` and start serving `state` in the background.
///
/// Port 0 picks a free port; [`RunningServer::addr`] reports the real one.
pub async fn run_server(addr: SocketAddr, state: AppState) -> Result<RunningServer> {
    let listener = TcpListener::bind(addr).await?;
    let addr = listener.local_addr()?;
    let router = create_router(state);
    let (shutdown, signal) = oneshot::channel::<()>();

    let handle = tokio::spawn(async move {
        axum::serve(listener, router)
            .with_graceful_shutdown(async {
                signal.await.ok();
            })
            .await
    });

    info!("HTTP server listening on {}", addr);
    Ok(RunningServer {
        addr,
        shutdown,
        handle,
    })
}

impl RunningServer {
    /// Address the listener is bound to.
    pub fn addr(&self) -> SocketAddr {
        self.addr
    }

    /// Absolute URL for `path` on this server.
    pub fn url(&self, path: &str) -> String {
        format!("http://{}{}", self.addr, path)
    }

    /// Stop accepting connections and wait for in-flight requests to finish.
    pub async fn close(self) -> Result<()> {
        if self.shutdown.send(()).is_err() {
            warn!("server task already exited");
        }

        let outcome = self
            .handle
            .await
            .map_err(|e| Error::Io(io::Error::other(e)))?;
        info!("HTTP server on {} stopped", self.addr);
        outcome.map_err(Error::from)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn binds_ephemeral_port_and_closes() {
        let server = run_server(([127, 0, 0, 1], 0).into(), AppState::new())
            .await
            .unwrap();

        assert_ne!(server.addr().port(), 0);
        assert!(server.url("/recipes").ends_with("/recipes"));

        server.close().await.unwrap();
    }
}
