use std::net::SocketAddr;
use std::sync::atomic::{AtomicBool, Ordering};
use std::time::Duration;

use dojo_config::ServerConfig;

use crate::error::ServeError;
use crate::handler::respond;

/// How long one `recv_timeout` waits before the shutdown flag is re-checked.
const POLL_INTERVAL: Duration = Duration::from_millis(200);

/// Blocking fixture server.
///
/// Requests are handled one at a time on the thread that calls
/// [`FixtureServer::serve_until`].
pub struct FixtureServer {
    server: tiny_http::Server,
    config: ServerConfig,
}

impl FixtureServer {
    /// Bind the listener on `config.host:config.port`.
    ///
    /// # Errors
    ///
    /// Returns `ServeError::Bind` if the address is in use or invalid.
    pub fn bind(config: &ServerConfig) -> Result<Self, ServeError> {
        let addr = config.bind_addr();
        let server = tiny_http::Server::http(&addr).map_err(|e| ServeError::Bind {
            addr: addr.clone(),
            reason: e.to_string(),
        })?;
        tracing::info!(%addr, "fixture server listening");
        Ok(Self {
            server,
            config: config.clone(),
        })
    }

    /// Address actually bound. Differs from the config when port 0 was requested.
    #[must_use]
    pub fn local_addr(&self) -> Option<SocketAddr> {
        self.server.server_addr().to_ip()
    }

    /// Handle requests until `shutdown` is set.
    ///
    /// The flag is checked between requests and at least every
    /// `POLL_INTERVAL` while idle.
    ///
    /// # Errors
    ///
    /// Returns `ServeError::Recv` if the listener fails.
    pub fn serve_until(&self, shutdown: &AtomicBool) -> Result<(), ServeError> {
        while !shutdown.load(Ordering::SeqCst) {
            let request = match self.server.recv_timeout(POLL_INTERVAL) {
                Ok(Some(request)) => request,
                Ok(None) => continue,
                Err(error) => return Err(ServeError::Recv(error)),
            };
            self.handle(request);
        }
        Ok(())
    }

    fn handle(&self, request: tiny_http::Request) {
        let method = request.method().clone();
        let url = request.url().to_string();

        let reply = respond(&method, &url, &self.config);
        let status = reply.status;
        tracing::info!(%method, %url, status, "request");
        if status >= 400 {
            tracing::debug!(%url, body = %reply.body_text(), "error reply");
        }

        let response = match reply.into_response() {
            Ok(response) => response,
            Err(error) => {
                tracing::error!(%error, %url, "failed to build response");
                return;
            }
        };
        if let Err(error) = request.respond(response) {
            tracing::warn!(%error, %url, "failed to write response");
        }
    }

    /// Close the listening socket.
    pub fn shutdown(self) {
        let addr = self.local_addr();
        drop(self.server);
        tracing::info!(?addr, "fixture server stopped");
    }
}
