//! Coupon resolution: detail page → reveal POST → final destination URL.

use crate::sites::SiteStrategy;
use crate::tools::fetch::Fetcher;
use crate::tools::pacing::{Pacer, PacingWindow};
use crate::types::CouponResolution;
use std::sync::Arc;
use tracing::{debug, warn};

pub struct CouponResolver {
    fetcher: Arc<Fetcher>,
    pacer: Pacer,
    pacing: PacingWindow,
}

impl CouponResolver {
    pub fn new(fetcher: Arc<Fetcher>, pacer: Pacer, pacing: PacingWindow) -> Self {
        Self {
            fetcher,
            pacer,
            pacing,
        }
    }

    /// Resolve one course's coupon. `None` means expired, withdrawn or unreachable;
    /// this never fails.
    ///
    /// Successful resolutions are cached under the detail URL.
    pub async fn resolve(
        &self,
        strategy: &dyn SiteStrategy,
        detail_url: &str,
    ) -> Option<CouponResolution> {
        let coupons = &self.fetcher.session().cache.coupons;
        if let Some(hit) = coupons.get(&detail_url.to_string()) {
            debug!(detail_url, "coupon cache hit");
            return Some(hit);
        }

        self.pacer.pause(&self.pacing).await;

        let site = strategy.site();
        let html = match self.fetcher.fetch(detail_url, site).await {
            Ok(html) => html,
            Err(e) => {
                warn!(detail_url, %site, error = %e, "detail page fetch failed");
                return None;
            }
        };

        // Parse in its own scope: `scraper::Html` must not live across an await.
        let detail = strategy.inspect_detail(&html);
        let Some(reveal_url) = detail.reveal_url else {
            debug!(detail_url, %site, "no reveal button, treating as expired");
            return None;
        };

        let coupon_url = match self
            .fetcher
            .reveal(&reveal_url, detail_url, strategy.reveal_field())
            .await
        {
            Ok(url) => url,
            Err(e) => {
                warn!(detail_url, %site, error = %e, "reveal request failed");
                return None;
            }
        };

        let resolution = CouponResolution {
            coupon_url: Some(coupon_url),
            price: detail.price,
        };
        coupons.put(detail_url.to_string(), resolution.clone());
        Some(resolution)
    }
}
