use thiserror::Error;

#[derive(Debug, Error)]
pub enum ServeError {
    #[error("failed to bind {addr}: {reason}")]
    Bind { addr: String, reason: String },
    #[error("listener receive failed: {0}")]
    Recv(#[source] std::io::Error),
    #[error("invalid response header '{0}'")]
    Header(String),
    #[error("json encode error: {0}")]
    Json(#[from] serde_json::Error),
}
