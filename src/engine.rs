use crate::config::{ExpiryPolicy, ScoutConfig};
use crate::error::{Result, ScoutError};
use crate::resolver::CouponResolver;
use crate::session::Session;
use crate::sites::strategy_for;
use crate::tools::fetch::{Fetcher, ReqwestTransport, Transport};
use crate::tools::pacing::Pacer;
use crate::types::*;
use std::sync::Arc;
use tracing::{debug, info};

/// Listing pipeline: cache → fetch → extract → resolve each candidate
/// serially → assemble → cache.
pub struct Engine {
    session: Arc<Session>,
    fetcher: Arc<Fetcher>,
    resolver: CouponResolver,
    pacer: Pacer,
    config: ScoutConfig,
}

impl Engine {
    /// Real network transport, wall-clock pacing, fresh session.
    pub fn new(config: ScoutConfig) -> Result<Self> {
        let transport = Arc::new(ReqwestTransport::new(&config)?);
        let session = Arc::new(Session::new(&config));
        Ok(Self::with_parts(config, transport, session, Pacer::tokio()))
    }

    pub fn with_parts(
        config: ScoutConfig,
        transport: Arc<dyn Transport>,
        session: Arc<Session>,
        pacer: Pacer,
    ) -> Self {
        let fetcher = Arc::new(Fetcher::new(
            transport,
            session.clone(),
            pacer.clone(),
            config.fetch_pacing,
        ));
        let resolver = CouponResolver::new(fetcher.clone(), pacer.clone(), config.resolve_pacing);
        Self {
            session,
            fetcher,
            resolver,
            pacer,
            config,
        }
    }

    pub fn session(&self) -> &Arc<Session> {
        &self.session
    }

    pub fn config(&self) -> &ScoutConfig {
        &self.config
    }

    /// Run one listing request, bounded by the configured pipeline deadline.
    pub async fn run(&self, request: &ListingRequest) -> Result<ListingResponse> {
        let deadline = self.config.pipeline_deadline;
        tokio::time::timeout(deadline, self.run_listing(request))
            .await
            .map_err(|_| ScoutError::DeadlineExceeded(deadline))?
    }

    async fn run_listing(&self, request: &ListingRequest) -> Result<ListingResponse> {
        let key = request.key();
        if let Some(mut hit) = self.session.cache.listings.get(&key) {
            debug!(url = %request.url, "listing cache hit");
            hit.cached = true;
            return Ok(hit);
        }

        let strategy = strategy_for(request.site);
        let html = self.fetcher.fetch(&request.url, request.site).await?;
        let candidates = strategy.extract_listing(&html, request.kind);
        debug!(
            url = %request.url,
            site = %request.site,
            candidates = candidates.len(),
            "extracted listing"
        );

        let total = candidates.len();
        let mut results = Vec::with_capacity(total);
        for (idx, course) in candidates.into_iter().enumerate() {
            let resolution = if course.detail_url.is_empty() {
                None
            } else {
                self.resolver.resolve(strategy, &course.detail_url).await
            };
            results.push(CourseResult::merge(course, resolution));

            if idx + 1 < total {
                self.pacer.pause(&self.config.between_pacing).await;
            }
        }

        let expired = results.iter().filter(|r| r.expired).count();
        if self.config.expiry_policy == ExpiryPolicy::Drop {
            results.retain(|r| !r.expired);
        }

        info!(
            url = %request.url,
            site = %request.site,
            candidates = total,
            expired,
            returned = results.len(),
            "listing assembled"
        );

        let response = ListingResponse {
            success: true,
            current_page: request.page,
            results,
            cached: false,
        };
        self.session.cache.listings.put(key, response.clone());
        Ok(response)
    }

    /// Resolve a single detail URL; the site is inferred from its host.
    pub async fn coupon(&self, detail_url: &str) -> Option<CouponResolution> {
        let site = Site::from_url(detail_url);
        self.resolver.resolve(strategy_for(site), detail_url).await
    }
}
