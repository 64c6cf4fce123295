//! Site Strategies
//!
//! One [`SiteStrategy`] per catalog site. A strategy knows the site's listing
//! layouts, what "free" looks like there, and where the detail page hides its
//! reveal button. It is pure HTML work; all I/O stays in the resolver and engine.

mod couponscorpion;
mod udemyfreebies;
mod utils;

pub use couponscorpion::Couponscorpion;
pub use udemyfreebies::Udemyfreebies;

use crate::types::{Course, ListingKind, Site};

/// What a detail page tells us before the reveal request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DetailPage {
    /// Target of the reveal affordance; `None` means expired or withdrawn.
    pub reveal_url: Option<String>,
    /// Listed price, or the site's sentinel when none is shown.
    pub price: String,
}

pub trait SiteStrategy: Send + Sync {
    fn site(&self) -> Site;

    /// Candidate courses in document order. Unknown layouts yield `[]`.
    fn extract_listing(&self, html: &str, kind: ListingKind) -> Vec<Course>;

    fn inspect_detail(&self, html: &str) -> DetailPage;

    /// Single form field the reveal endpoint expects.
    fn reveal_field(&self) -> (&'static str, &'static str);
}

static UDEMYFREEBIES: Udemyfreebies = Udemyfreebies;
static COUPONSCORPION: Couponscorpion = Couponscorpion;

pub fn strategy_for(site: Site) -> &'static dyn SiteStrategy {
    match site {
        Site::Udemyfreebies => &UDEMYFREEBIES,
        Site::Couponscorpion => &COUPONSCORPION,
    }
}
