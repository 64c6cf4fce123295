mod client;
mod headers;
mod identity;
mod profile;
mod proxy;
mod utils;

#[cfg(test)]
pub(crate) mod fake;

pub mod types;

pub use client::{ReqwestTransport, Transport};
pub use identity::{Identity, IdentityRotator};
pub use profile::BrowserProfile;
pub use proxy::ProxyEndpoint;
pub use types::*;

use crate::error::Result;
use crate::session::Session;
use crate::tools::pacing::{Pacer, PacingWindow};
use crate::types::Site;
use std::sync::Arc;
use tracing::debug;

/// Paced, identity-carrying, cached document fetcher.
///
/// Order of a [`Fetcher::fetch`]:
/// 1. document cache lookup (hits skip pacing and the network)
/// 2. pacing delay
/// 3. GET with the current identity and the site's referer
/// 4. absorb `Set-Cookie`, rotate the user agent
/// 5. cache the body under the request URL
///
/// HTTP error statuses are returned as ordinary bodies; only transport
/// failures surface as errors, and they skip rotation.
pub struct Fetcher {
    transport: Arc<dyn Transport>,
    session: Arc<Session>,
    pacer: Pacer,
    pacing: PacingWindow,
}

impl Fetcher {
    pub fn new(
        transport: Arc<dyn Transport>,
        session: Arc<Session>,
        pacer: Pacer,
        pacing: PacingWindow,
    ) -> Self {
        Self {
            transport,
            session,
            pacer,
            pacing,
        }
    }

    pub fn session(&self) -> &Arc<Session> {
        &self.session
    }

    /// Fetch a document from `site`, consulting the document cache first.
    pub async fn fetch(&self, url: &str, site: Site) -> Result<String> {
        if let Some(body) = self.session.cache.documents.get(&url.to_string()) {
            debug!(url, "document cache hit");
            return Ok(body);
        }

        self.pacer.pause(&self.pacing).await;

        let identity = self.session.identity.current();
        let request = OutboundRequest::get(url, headers::document_headers(&identity, site));
        let response = self.transport.send(request).await?;

        self.session.identity.absorb_cookies(&response.set_cookies);
        self.session.identity.rotate();

        debug!(
            url,
            %site,
            status = response.status,
            bytes = response.body.len(),
            "fetched document"
        );

        self.session
            .cache
            .documents
            .put(url.to_string(), response.body.clone());
        Ok(response.body)
    }

    /// POST the reveal form to `url` and return where the redirect chain ended.
    ///
    /// Not cached and not paced. The chain ends off-site, so its cookies are
    /// never absorbed into the catalog identity.
    pub async fn reveal(&self, url: &str, referer: &str, field: (&str, &str)) -> Result<String> {
        let identity = self.session.identity.current();
        let form = vec![(field.0.to_string(), field.1.to_string())];
        let request =
            OutboundRequest::post_form(url, headers::reveal_headers(&identity, referer), form);
        let response = self.transport.send(request).await?;

        debug!(
            url,
            status = response.status,
            final_url = %response.final_url,
            "reveal chain completed"
        );
        Ok(response.final_url)
    }
}
