/*
[INPUT]:  Session cookies seeded by the caller or set by the backend
[OUTPUT]: Cookie header for credentialed requests
[POS]:    HTTP layer - ambient credential store
[UPDATE]: When changing how session cookies are attached or captured
*/

use std::sync::Arc;

use reqwest::cookie::{CookieStore, Jar};
use reqwest::header::{HeaderMap, HeaderValue, SET_COOKIE};
use url::Url;

/// Cookie jar shared by every clone of a client.
///
/// Only operations with [`crate::Credentials::Include`] read from or write
/// to it. Cookies are captured from the final response only; `Set-Cookie`
/// headers on intermediate redirect responses are not stored, unlike a
/// browser following the same redirect chain.
#[derive(Debug, Clone)]
pub struct Session {
    jar: Arc<Jar>,
    backend_url: Url,
}

impl Session {
    pub(crate) fn new(backend_url: Url) -> Self {
        Self {
            jar: Arc::new(Jar::default()),
            backend_url,
        }
    }

    /// Store a cookie (`name=value[; attributes]`) for the backend host.
    pub fn set_cookie(&self, cookie: &str) {
        self.jar.add_cookie_str(cookie, &self.backend_url);
    }

    /// The `Cookie` header that would accompany a credentialed backend request.
    pub fn cookie_header(&self) -> Option<String> {
        self.header_for(&self.backend_url)
            .and_then(|value| value.to_str().ok().map(str::to_string))
    }

    pub(crate) fn header_for(&self, url: &Url) -> Option<HeaderValue> {
        self.jar.cookies(url)
    }

    pub(crate) fn store_from(&self, headers: &HeaderMap, url: &Url) {
        let mut set_cookies = headers.get_all(SET_COOKIE).iter();
        self.jar.set_cookies(&mut set_cookies, url);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn session() -> Session {
        Session::new(Url::parse("http://localhost:8081/").expect("url"))
    }

    #[test]
    fn test_empty_session_has_no_cookie() {
        assert!(session().cookie_header().is_none());
    }

    #[test]
    fn test_set_cookie_is_visible_to_clones() {
        let session = session();
        let clone = session.clone();
        session.set_cookie("JSESSIONID=abc123");
        assert_eq!(clone.cookie_header().as_deref(), Some("JSESSIONID=abc123"));
    }

    #[test]
    fn test_store_from_response_headers() {
        let session = session();
        let mut headers = HeaderMap::new();
        headers.append(SET_COOKIE, HeaderValue::from_static("JSESSIONID=fromserver; Path=/"));
        let url = Url::parse("http://localhost:8081/api/filmes").expect("url");
        session.store_from(&headers, &url);
        assert_eq!(session.cookie_header().as_deref(), Some("JSESSIONID=fromserver"));
    }
}
