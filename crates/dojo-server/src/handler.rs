//! Request dispatch: method + URL in, [`Reply`] out.

use std::io::ErrorKind;
use std::path::Path;

use dojo_config::ServerConfig;
use dojo_core::fixtures;
use tiny_http::Method;

use crate::reply::Reply;
use crate::routes::{Fixture, Page, Route, route};
use crate::static_files;

/// Build the reply for one request. Never touches the socket.
#[must_use]
pub fn respond(method: &Method, url: &str, config: &ServerConfig) -> Reply {
    if !matches!(method, Method::Get | Method::Head) {
        return Reply::text(501, format!("Unsupported method ('{method}')"));
    }

    let root = Path::new(&config.static_root);
    match route(url) {
        Route::Page(page) => serve_page(root, page_file(page, config)),
        Route::Fixture(fixture) => serve_fixture(fixture),
        Route::Static(path) => serve_static(root, &path),
    }
}

fn page_file(page: Page, config: &ServerConfig) -> &str {
    match page {
        Page::Index => &config.index_html,
        Page::Dashboard => &config.dashboard_html,
        Page::Test => &config.test_html,
    }
}

fn serve_page(root: &Path, file: &str) -> Reply {
    match std::fs::read(root.join(file)) {
        Ok(body) => Reply::html(body),
        Err(error) if error.kind() == ErrorKind::NotFound => {
            Reply::not_found(format!("File not found: {file}"))
        }
        Err(error) => read_failed(&error),
    }
}

fn serve_fixture(fixture: Fixture) -> Reply {
    let encoded = match fixture {
        Fixture::Health => Reply::json(&fixtures::health()),
        Fixture::Students => Reply::json(&fixtures::students()),
        Fixture::Organizations => Reply::json(&fixtures::organizations()),
        Fixture::Techniques => Reply::json(&fixtures::techniques()),
        Fixture::Classes => Reply::json(&fixtures::classes()),
        Fixture::BillingPlans => Reply::json(&fixtures::billing_plans()),
    };
    encoded.unwrap_or_else(|error| {
        tracing::error!(%error, ?fixture, "failed to encode fixture");
        Reply::text(500, error.to_string())
    })
}

fn serve_static(root: &Path, url_path: &str) -> Reply {
    let not_found = || Reply::not_found(format!("Not found: {url_path}"));

    let Some(file) = static_files::resolve(root, url_path) else {
        return not_found();
    };
    if !file.is_file() {
        return not_found();
    }

    match std::fs::read(&file) {
        Ok(body) => Reply {
            status: 200,
            content_type: static_files::content_type_for(&file),
            body,
        },
        Err(error) if error.kind() == ErrorKind::NotFound => not_found(),
        Err(error) => read_failed(&error),
    }
}

fn read_failed(error: &std::io::Error) -> Reply {
    Reply::text(500, format!("Error reading file: {error}"))
}
