use reqwest::header::HeaderMap;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Method {
    Get,
    /// Form-urlencoded POST.
    Post,
}

/// One request handed to a [`super::Transport`].
#[derive(Debug, Clone)]
pub struct OutboundRequest {
    pub method: Method,
    pub url: String,
    pub headers: HeaderMap,
    /// Form fields, only sent with [`Method::Post`].
    pub form: Vec<(String, String)>,
}

impl OutboundRequest {
    pub fn get(url: &str, headers: HeaderMap) -> Self {
        Self {
            method: Method::Get,
            url: url.to_string(),
            headers,
            form: Vec::new(),
        }
    }

    pub fn post_form(url: &str, headers: HeaderMap, form: Vec<(String, String)>) -> Self {
        Self {
            method: Method::Post,
            url: url.to_string(),
            headers,
            form,
        }
    }

    pub fn header(&self, name: &str) -> Option<&str> {
        self.headers.get(name).and_then(|v| v.to_str().ok())
    }
}

/// Completed exchange after redirects were followed.
///
/// Any HTTP status counts as completed; only transport failures are errors.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TransportResponse {
    pub status: u16,
    /// URL of the last hop of the redirect chain.
    pub final_url: String,
    /// Raw `Set-Cookie` values of the final response.
    pub set_cookies: Vec<String>,
    pub body: String,
}
