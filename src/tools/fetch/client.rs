use super::proxy::ProxyEndpoint;
use super::types::{Method, OutboundRequest, TransportResponse};
use crate::config::ScoutConfig;
use crate::error::{Result, ScoutError};
use async_trait::async_trait;
use reqwest::header::SET_COOKIE;
use reqwest::{redirect, Client};

/// The network seam: sends one request, follows redirects, never fails on status.
#[async_trait]
pub trait Transport: Send + Sync {
    async fn send(&self, request: OutboundRequest) -> Result<TransportResponse>;
}

pub struct ReqwestTransport {
    client: Client,
}

impl ReqwestTransport {
    pub fn new(cfg: &ScoutConfig) -> Result<Self> {
        Ok(Self {
            client: build_client(cfg)?,
        })
    }
}

/// Build the shared reqwest client from configuration.
pub(crate) fn build_client(cfg: &ScoutConfig) -> Result<Client> {
    let builder = Client::builder()
        .redirect(redirect::Policy::limited(cfg.max_redirects))
        .gzip(true)
        .brotli(true)
        .deflate(true)
        .timeout(cfg.request_timeout);

    // The configured proxy string is the only proxy surface.
    let builder = match &cfg.proxy {
        Some(raw) => {
            let endpoint = ProxyEndpoint::parse(raw)?;
            tracing::info!(proxy = %endpoint.address(), "routing requests through proxy");
            builder.proxy(endpoint.to_reqwest()?)
        }
        None => builder.no_proxy(),
    };

    builder
        .build()
        .map_err(|e| ScoutError::Config(format!("failed to build client: {e}")))
}

#[async_trait]
impl Transport for ReqwestTransport {
    async fn send(&self, request: OutboundRequest) -> Result<TransportResponse> {
        let url = request.url.clone();
        let builder = match request.method {
            Method::Get => self.client.get(&url),
            Method::Post => self.client.post(&url).form(&request.form),
        };

        let response = builder
            .headers(request.headers)
            .send()
            .await
            .map_err(|e| ScoutError::transport(&url, e))?;

        let status = response.status().as_u16();
        let final_url = response.url().to_string();
        let set_cookies = response
            .headers()
            .get_all(SET_COOKIE)
            .iter()
            .filter_map(|v| v.to_str().ok())
            .map(str::to_string)
            .collect();

        let body = response
            .text()
            .await
            .map_err(|e| ScoutError::transport(&url, e))?;

        Ok(TransportResponse {
            status,
            final_url,
            set_cookies,
            body,
        })
    }
}
