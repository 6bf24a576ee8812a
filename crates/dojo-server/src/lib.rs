//! # dojo-server
//!
//! Local HTTP server for manually testing the dashboard UI without a backend.
//!
//! Fixed routes serve HTML pages from disk or hardcoded JSON fixtures from
//! `dojo-core`; anything else falls back to static files under the configured
//! root. Every response carries `Access-Control-Allow-Origin: *`.
//!
//! | Path | Response |
//! |---|---|
//! | `/`, `/ultimate` | `server.index_html` |
//! | `/dashboard` | `server.dashboard_html` |
//! | `/test` | `server.test_html` |
//! | `/health` | health status JSON |
//! | `/api/students`, `/api/organizations`, `/api/techniques` | fixture JSON |
//! | `/api/classes`, `/api/billing-plans` | fixture JSON |
//! | anything else | static file or 404 |
//!
//! Requests are handled sequentially on one thread (`tiny_http::Server::recv_timeout`
//! in a loop); the caller stops the loop through an `AtomicBool`.

mod error;
mod handler;
mod reply;
mod routes;
mod server;
mod static_files;

pub use error::ServeError;
pub use handler::respond;
pub use reply::{ALLOW_ORIGIN, Reply};
pub use routes::{Fixture, Page, Route, route};
pub use server::FixtureServer;
pub use static_files::content_type_for;

/// Routes advertised in the startup banner, as `(path, description)`.
pub const ROUTES: &[(&str, &str)] = &[
    ("/", "Main dashboard"),
    ("/ultimate", "Ultimate dashboard"),
    ("/dashboard", "Basic dashboard"),
    ("/test", "Test dashboard"),
    ("/health", "Health check"),
    ("/api/students", "Student fixtures"),
    ("/api/organizations", "Organization fixtures"),
    ("/api/techniques", "Technique fixtures"),
    ("/api/classes", "Class fixtures"),
    ("/api/billing-plans", "Billing plan fixtures"),
];
