//! JSON facade used by the CLI and by embedders that want wire-ready values.

use crate::engine::Engine;
use crate::types::*;
use serde::Serialize;
use serde_json::Value;
use std::time::Instant;
use tracing::{info, warn};

/* ------------ listing entrypoints ------------ */

/// Run one listing request; failures come back as `{"success": false, "error": ..}`.
pub async fn listing_response(engine: &Engine, request: &ListingRequest) -> Value {
    let start_time = Instant::now();
    let result = engine.run(request).await;
    let elapsed_ms = start_time.elapsed().as_millis() as u64;

    match result {
        Ok(resp) => {
            info!(
                url = %request.url,
                results = resp.results.len(),
                cached = resp.cached,
                elapsed_ms,
                "listing succeeded"
            );
            to_json(&resp)
        }
        Err(e) => {
            warn!(url = %request.url, error = %e, elapsed_ms, "listing failed");
            to_json(&ErrorResponse::new(e.to_string()))
        }
    }
}

/// Listing for a caller-supplied URL. `alternate` selects couponscorpion.
pub async fn listing_for_url(engine: &Engine, url: &str, alternate: bool) -> Value {
    let site = if alternate {
        Site::Couponscorpion
    } else {
        Site::Udemyfreebies
    };
    match ListingRequest::from_url(url, site) {
        Ok(request) => listing_response(engine, &request).await,
        Err(e) => to_json(&ErrorResponse::new(e.to_string())),
    }
}

pub async fn catalog(engine: &Engine, site: Site, page: u32) -> Value {
    listing_response(engine, &ListingRequest::catalog(site, page)).await
}

pub async fn search(engine: &Engine, site: Site, query: &str, page: u32) -> Value {
    match ListingRequest::search(site, query, page) {
        Ok(request) => listing_response(engine, &request).await,
        Err(e) => to_json(&ErrorResponse::new(e.to_string())),
    }
}

/* ------------ coupon entrypoint ------------ */

/// Resolve one detail URL. Never an error: unresolvable coupons are `expired`.
pub async fn coupon_response(engine: &Engine, detail_url: &str) -> Value {
    let resolution = engine.coupon(detail_url).await;
    if resolution.is_none() {
        info!(detail_url, "coupon unresolved");
    }
    to_json(&CouponResponse::from(resolution))
}

fn to_json<T: Serialize>(val: &T) -> Value {
    serde_json::to_value(val)
        .unwrap_or_else(|e| serde_json::json!({ "success": false, "error": e.to_string() }))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::ScoutConfig;
    use crate::session::Session;
    use crate::tools::fetch::fake::ScriptedTransport;
    use crate::tools::pacing::{Pacer, RecordingSleeper};
    use serde_json::json;
    use std::sync::Arc;

    const DETAIL: &str = "https://www.udemyfreebies.com/free-udemy-course/rust-basics";
    const OUT: &str = "https://www.udemyfreebies.com/out/rust-basics";
    const DEST: &str = "https://www.udemy.com/course/rust-basics/?couponCode=FREEBIE";

    fn engine(transport: Arc<ScriptedTransport>) -> Engine {
        let cfg = ScoutConfig::default();
        let session = Arc::new(Session::new(&cfg));
        Engine::with_parts(
            cfg,
            transport,
            session,
            Pacer::new(Arc::new(RecordingSleeper::default())),
        )
    }

    fn listing_html() -> String {
        format!(
            r#"<html><body><div class="theme-block">
                <small class="text-muted">today</small>
                <div class="coupon-name"><h4>Rust Basics</h4></div>
                <span><i class="fa fa-money"></i> $84.99 Free</span>
                <div class="coupon-details"><a href="{DETAIL}">Details</a></div>
            </div></body></html>"#
        )
    }

    fn detail_html() -> String {
        format!(
            r#"<html><body><span><i class="fa fa-money"></i> $84.99 Free</span>
               <a class="button-icon" href="{OUT}">Go</a></body></html>"#
        )
    }

    #[tokio::test]
    async fn catalog_serializes_wire_shape() {
        let transport = Arc::new(ScriptedTransport::new());
        transport.on_get(
            "https://www.udemyfreebies.com/free-udemy-courses/2",
            200,
            &listing_html(),
        );
        transport.on_get(DETAIL, 200, &detail_html());
        transport.on_post(OUT, DEST);
        let e = engine(transport);

        let v = catalog(&e, Site::Udemyfreebies, 2).await;
        assert_eq!(v["success"], json!(true));
        assert_eq!(v["currentPage"], json!(2));
        assert!(v.get("cached").is_none());

        let first = &v["results"][0];
        assert_eq!(first["id"], json!("rust-basics"));
        assert_eq!(first["title"], json!("Rust Basics"));
        assert_eq!(first["couponUrl"], json!(DEST));
        assert_eq!(first["price"], json!("$84"));
        assert_eq!(first["expired"], json!(false));
        assert_eq!(first["details"]["originalPrice"], json!("$84"));
        assert!(first.get("discount").is_none());

        let again = catalog(&e, Site::Udemyfreebies, 2).await;
        assert_eq!(again["cached"], json!(true));
    }

    #[tokio::test]
    async fn listing_failure_becomes_error_object() {
        let e = engine(Arc::new(ScriptedTransport::new()));
        let v = catalog(&e, Site::Couponscorpion, 1).await;
        assert_eq!(v["success"], json!(false));
        assert!(v["error"].as_str().unwrap().contains("couponscorpion.com"));
        assert!(v.get("results").is_none());
    }

    #[tokio::test]
    async fn listing_for_url_rejects_garbage() {
        let e = engine(Arc::new(ScriptedTransport::new()));
        let v = listing_for_url(&e, "not a url", true).await;
        assert_eq!(v["success"], json!(false));
    }

    #[tokio::test]
    async fn coupon_response_shapes() {
        let transport = Arc::new(ScriptedTransport::new());
        transport.on_get(DETAIL, 200, &detail_html());
        transport.on_post(OUT, DEST);
        let e = engine(transport);

        let ok = coupon_response(&e, DETAIL).await;
        assert_eq!(
            ok,
            json!({ "success": true, "couponUrl": DEST, "price": "$84", "expired": false })
        );

        let gone = coupon_response(&e, "https://couponscorpion.com/dev/gone/").await;
        assert_eq!(gone["success"], json!(false));
        assert_eq!(gone["expired"], json!(true));
        assert_eq!(gone["couponUrl"], Value::Null);
    }
}
