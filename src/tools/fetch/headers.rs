use super::identity::Identity;
use crate::types::Site;
use reqwest::header::{
    HeaderMap, HeaderName, HeaderValue, ACCEPT_LANGUAGE, COOKIE, DNT, REFERER, USER_AGENT,
};

const ACCEPT_LANGUAGE_VALUE: &str = "en-US,en;q=0.9";

/// Headers for a document fetch addressed to `site`.
pub(crate) fn document_headers(identity: &Identity, site: Site) -> HeaderMap {
    let mut headers = HeaderMap::new();
    insert_user_agent(&mut headers, &identity.user_agent);
    headers.insert(
        ACCEPT_LANGUAGE,
        HeaderValue::from_static(ACCEPT_LANGUAGE_VALUE),
    );
    headers.insert(REFERER, HeaderValue::from_static(site.referer()));
    insert_if_valid(&mut headers, COOKIE, &identity.cookie);
    headers.insert(DNT, HeaderValue::from_static("1"));
    headers
}

/// Headers for the reveal POST: identity plus the detail page as referer.
pub(crate) fn reveal_headers(identity: &Identity, referer: &str) -> HeaderMap {
    let mut headers = HeaderMap::new();
    insert_user_agent(&mut headers, &identity.user_agent);
    insert_if_valid(&mut headers, REFERER, referer);
    insert_if_valid(&mut headers, COOKIE, &identity.cookie);
    headers
}

fn insert_user_agent(headers: &mut HeaderMap, ua: &str) {
    headers.insert(
        USER_AGENT,
        HeaderValue::from_str(ua).unwrap_or(HeaderValue::from_static("Mozilla/5.0")),
    );
}

// Empty or non-visible-ASCII values are skipped silently.
fn insert_if_valid(headers: &mut HeaderMap, name: HeaderName, value: &str) {
    if value.is_empty() {
        return;
    }
    if let Ok(v) = HeaderValue::from_str(value) {
        headers.insert(name, v);
    }
}
