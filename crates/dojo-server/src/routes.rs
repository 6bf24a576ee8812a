//! Exact-match path routing.

/// HTML pages with a fixed route.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Page {
    Index,
    Dashboard,
    Test,
}

/// JSON fixtures with a fixed route.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Fixture {
    Health,
    Students,
    Organizations,
    Techniques,
    Classes,
    BillingPlans,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Route {
    Page(Page),
    Fixture(Fixture),
    /// Anything else, resolved under the static root.
    Static(String),
}

/// Path component of a request target.
///
/// Drops the query string and fragment, and the `scheme://authority` prefix of
/// an absolute-form target (`http://localhost/health` -> `/health`).
#[must_use]
pub fn path_of(url: &str) -> &str {
    let target = url.split(['?', '#']).next().unwrap_or_default();
    match target.split_once("://") {
        Some((scheme, rest)) if !scheme.is_empty() && !scheme.contains('/') => {
            rest.find('/').map_or("/", |start| &rest[start..])
        }
        _ => target,
    }
}

/// Classify a request URL. The query string is ignored.
#[must_use]
pub fn route(url: &str) -> Route {
    match path_of(url) {
        "/" | "/ultimate" => Route::Page(Page::Index),
        "/dashboard" => Route::Page(Page::Dashboard),
        "/test" => Route::Page(Page::Test),
        "/health" => Route::Fixture(Fixture::Health),
        "/api/students" => Route::Fixture(Fixture::Students),
        "/api/organizations" => Route::Fixture(Fixture::Organizations),
        "/api/techniques" => Route::Fixture(Fixture::Techniques),
        "/api/classes" => Route::Fixture(Fixture::Classes),
        "/api/billing-plans" => Route::Fixture(Fixture::BillingPlans),
        other => Route::Static(other.to_string()),
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use rstest::rstest;

    use super::*;

    #[rstest]
    #[case("/", Route::Page(Page::Index))]
    #[case("/ultimate", Route::Page(Page::Index))]
    #[case("/dashboard", Route::Page(Page::Dashboard))]
    #[case("/test", Route::Page(Page::Test))]
    #[case("/health", Route::Fixture(Fixture::Health))]
    #[case("/health?verbose=1", Route::Fixture(Fixture::Health))]
    #[case("/api/students", Route::Fixture(Fixture::Students))]
    #[case("/api/students?page=2&limit=10", Route::Fixture(Fixture::Students))]
    #[case("/api/organizations", Route::Fixture(Fixture::Organizations))]
    #[case("/api/techniques", Route::Fixture(Fixture::Techniques))]
    #[case("/api/classes", Route::Fixture(Fixture::Classes))]
    #[case("/api/billing-plans", Route::Fixture(Fixture::BillingPlans))]
    fn fixed_routes(#[case] url: &str, #[case] expected: Route) {
        assert_eq!(route(url), expected);
    }

    #[rstest]
    #[case("/dashboard/", "/dashboard/")]
    #[case("/api/students/42", "/api/students/42")]
    #[case("/css/app.css?v=3", "/css/app.css")]
    #[case("/HEALTH", "/HEALTH")]
    fn everything_else_is_static(#[case] url: &str, #[case] path: &str) {
        assert_eq!(route(url), Route::Static(path.to_string()));
    }

    #[test]
    fn path_of_strips_query_and_fragment() {
        assert_eq!(path_of("/a/b?c=d#e"), "/a/b");
        assert_eq!(path_of("/a#frag"), "/a");
        assert_eq!(path_of("?only=query"), "");
    }

    #[rstest]
    #[case("http://localhost/health", "/health")]
    #[case("http://localhost:3000/api/students?page=2", "/api/students")]
    #[case("https://example.com", "/")]
    #[case("http://localhost?x=1", "/")]
    #[case("/files/a://b", "/files/a://b")]
    fn path_of_strips_absolute_form_prefix(#[case] url: &str, #[case] path: &str) {
        assert_eq!(path_of(url), path);
    }

    #[test]
    fn absolute_form_targets_route_like_origin_form() {
        assert_eq!(
            route("http://localhost/health"),
            Route::Fixture(Fixture::Health)
        );
        assert_eq!(route("http://localhost:3000/"), Route::Page(Page::Index));
    }
}
