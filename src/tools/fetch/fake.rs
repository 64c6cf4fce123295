//! Scripted in-memory transport for tests.

use super::client::Transport;
use super::types::{Method, OutboundRequest, TransportResponse};
use crate::error::{Result, ScoutError};
use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::Mutex;

enum Scripted {
    Respond(TransportResponse),
    Fail(String),
}

#[derive(Default)]
pub(crate) struct ScriptedTransport {
    routes: Mutex<HashMap<(Method, String), Scripted>>,
    log: Mutex<Vec<OutboundRequest>>,
}

impl ScriptedTransport {
    pub fn new() -> Self {
        Self::default()
    }

    fn script(&self, method: Method, url: &str, scripted: Scripted) {
        self.routes
            .lock()
            .unwrap()
            .insert((method, url.to_string()), scripted);
    }

    pub fn on_get(&self, url: &str, status: u16, body: &str) {
        self.on_get_with_cookies(url, status, body, &[]);
    }

    pub fn on_get_with_cookies(&self, url: &str, status: u16, body: &str, cookies: &[&str]) {
        self.script(
            Method::Get,
            url,
            Scripted::Respond(TransportResponse {
                status,
                final_url: url.to_string(),
                set_cookies: cookies.iter().map(|c| c.to_string()).collect(),
                body: body.to_string(),
            }),
        );
    }

    /// POST to `url` ends, after redirects, at `final_url`.
    pub fn on_post(&self, url: &str, final_url: &str) {
        self.on_post_with_cookies(url, final_url, &[]);
    }

    pub fn on_post_with_cookies(&self, url: &str, final_url: &str, cookies: &[&str]) {
        self.script(
            Method::Post,
            url,
            Scripted::Respond(TransportResponse {
                status: 200,
                final_url: final_url.to_string(),
                set_cookies: cookies.iter().map(|c| c.to_string()).collect(),
                body: String::new(),
            }),
        );
    }

    pub fn fail(&self, method: Method, url: &str, message: &str) {
        self.script(method, url, Scripted::Fail(message.to_string()));
    }

    pub fn requests(&self) -> Vec<OutboundRequest> {
        self.log.lock().unwrap().clone()
    }

    pub fn count(&self, method: Method, url: &str) -> usize {
        self.log
            .lock()
            .unwrap()
            .iter()
            .filter(|r| r.method == method && r.url == url)
            .count()
    }
}

#[async_trait]
impl Transport for ScriptedTransport {
    async fn send(&self, request: OutboundRequest) -> Result<TransportResponse> {
        let key = (request.method, request.url.clone());
        self.log.lock().unwrap().push(request);
        match self.routes.lock().unwrap().get(&key) {
            Some(Scripted::Respond(resp)) => Ok(resp.clone()),
            Some(Scripted::Fail(msg)) => Err(ScoutError::transport(&key.1, msg)),
            None => Err(ScoutError::transport(&key.1, "connection refused")),
        }
    }
}
