use http::HeaderMap;
use http::header::COOKIE;

/// Where the current flow's cookies come from.
///
/// The composition root picks the implementation for its execution context:
/// [`RequestCookies`] when handling an inbound request server-side,
/// [`StaticCookies`] for a cookie string captured elsewhere (e.g. a browser's
/// `document.cookie`). Extraction code never branches on the environment.
pub trait CookieSource {
    /// The raw `Cookie` header string, `""` when there are no cookies.
    fn read(&self) -> String;
}

/// Cookies of an inbound request, read from its headers.
pub struct RequestCookies<'a> {
    headers: &'a HeaderMap,
}

impl<'a> RequestCookies<'a> {
    pub fn new(headers: &'a HeaderMap) -> Self {
        Self { headers }
    }
}

impl CookieSource for RequestCookies<'_> {
    fn read(&self) -> String {
        // Clients may split cookies over several Cookie headers; join them
        // back into the single-header form.
        self.headers
            .get_all(COOKIE)
            .iter()
            .filter_map(|value| value.to_str().ok())
            .collect::<Vec<_>>()
            .join("; ")
    }
}

/// A cookie string the host captured up front.
pub struct StaticCookies(String);

impl StaticCookies {
    pub fn new(cookies: impl Into<String>) -> Self {
        Self(cookies.into())
    }
}

impl CookieSource for StaticCookies {
    fn read(&self) -> String {
        self.0.clone()
    }
}
