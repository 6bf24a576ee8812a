//! Response values independent of the socket, so handlers can be tested
//! without binding a port.

use std::io::Cursor;

use serde::Serialize;
use tiny_http::{Header, Response};

use crate::error::ServeError;
use crate::static_files::HTML;

pub const JSON: &str = "application/json";
pub const TEXT: &str = "text/plain; charset=utf-8";

/// Header added to every response so the dashboard can be opened from any origin.
pub const ALLOW_ORIGIN: (&str, &str) = ("Access-Control-Allow-Origin", "*");

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Reply {
    pub status: u16,
    pub content_type: &'static str,
    pub body: Vec<u8>,
}

impl Reply {
    #[must_use]
    pub fn html(body: Vec<u8>) -> Self {
        Self {
            status: 200,
            content_type: HTML,
            body,
        }
    }

    /// Serialize `value` as a `200` JSON reply.
    ///
    /// # Errors
    ///
    /// Returns `ServeError::Json` if serialization fails.
    pub fn json<T: Serialize>(value: &T) -> Result<Self, ServeError> {
        Ok(Self {
            status: 200,
            content_type: JSON,
            body: serde_json::to_vec(value)?,
        })
    }

    #[must_use]
    pub fn text(status: u16, message: impl Into<String>) -> Self {
        Self {
            status,
            content_type: TEXT,
            body: message.into().into_bytes(),
        }
    }

    #[must_use]
    pub fn not_found(message: impl Into<String>) -> Self {
        Self::text(404, message)
    }

    /// Body as UTF-8 text, lossily. Logged for error replies.
    #[must_use]
    pub fn body_text(&self) -> String {
        String::from_utf8_lossy(&self.body).into_owned()
    }

    /// Build the `tiny_http` response, adding the content type and CORS headers.
    ///
    /// # Errors
    ///
    /// Returns `ServeError::Header` if a header cannot be encoded.
    pub fn into_response(self) -> Result<Response<Cursor<Vec<u8>>>, ServeError> {
        let content_type = header("Content-Type", self.content_type)?;
        let allow_origin = header(ALLOW_ORIGIN.0, ALLOW_ORIGIN.1)?;
        Ok(Response::from_data(self.body)
            .with_status_code(self.status)
            .with_header(content_type)
            .with_header(allow_origin))
    }
}

fn header(name: &str, value: &str) -> Result<Header, ServeError> {
    Header::from_bytes(name, value).map_err(|()| ServeError::Header(format!("{name}: {value}")))
}
