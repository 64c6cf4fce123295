use crate::error::{Result, ScoutError};
use serde::{Deserialize, Serialize};
use std::fmt;
use url::Url;

/// Catalog sites we know how to scrape.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum Site {
    Udemyfreebies,
    Couponscorpion,
}

impl Site {
    pub fn host(&self) -> &'static str {
        match self {
            Site::Udemyfreebies => "www.udemyfreebies.com",
            Site::Couponscorpion => "couponscorpion.com",
        }
    }

    /// Referer sent with every document fetch addressed to this site.
    pub fn referer(&self) -> &'static str {
        match self {
            Site::Udemyfreebies => "https://www.udemyfreebies.com/",
            Site::Couponscorpion => "https://couponscorpion.com/",
        }
    }

    /// Guess the site from a course or listing URL. Anything that is not
    /// couponscorpion is treated as udemyfreebies.
    pub fn from_url(url: &str) -> Self {
        let host = Url::parse(url)
            .ok()
            .and_then(|u| u.host_str().map(|h| h.to_ascii_lowercase()));
        match host.as_deref() {
            Some(h) if h == "couponscorpion.com" || h.ends_with(".couponscorpion.com") => {
                Site::Couponscorpion
            }
            _ => Site::Udemyfreebies,
        }
    }

    /// Stable course identifier derived from the detail URL.
    pub fn course_id(&self, detail_url: &str) -> String {
        match self {
            Site::Couponscorpion => detail_url
                .strip_prefix(self.referer())
                .unwrap_or(detail_url)
                .trim_end_matches('/')
                .to_string(),
            Site::Udemyfreebies => detail_url
                .trim_end_matches('/')
                .rsplit('/')
                .next()
                .unwrap_or_default()
                .to_string(),
        }
    }
}

impl fmt::Display for Site {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Site::Udemyfreebies => write!(f, "udemyfreebies"),
            Site::Couponscorpion => write!(f, "couponscorpion"),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ListingKind {
    Catalog,
    Search,
}

/// Structured key for the listing-response cache.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ListingKey {
    pub site: Site,
    pub kind: ListingKind,
    pub url: String,
}

/// A fully-formed listing URL plus what we know about it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ListingRequest {
    pub site: Site,
    pub kind: ListingKind,
    pub url: String,
    pub page: u32,
}

impl ListingRequest {
    pub fn catalog(site: Site, page: u32) -> Self {
        let url = match site {
            Site::Udemyfreebies => {
                format!("https://www.udemyfreebies.com/free-udemy-courses/{page}")
            }
            Site::Couponscorpion => format!("https://couponscorpion.com/page/{page}/"),
        };
        Self {
            site,
            kind: ListingKind::Catalog,
            url,
            page,
        }
    }

    pub fn search(site: Site, query: &str, page: u32) -> Result<Self> {
        let url = match site {
            Site::Udemyfreebies => {
                let base = "https://www.udemyfreebies.com/search/";
                let mut u = Url::parse(base).map_err(|e| ScoutError::InvalidUrl(e.to_string()))?;
                u.path_segments_mut()
                    .map_err(|_| ScoutError::InvalidUrl(base.to_string()))?
                    .pop_if_empty()
                    .push(query)
                    .push(&page.to_string());
                u
            }
            Site::Couponscorpion => Url::parse_with_params(
                "https://couponscorpion.com/",
                &[
                    ("s", query),
                    ("post_type", "post"),
                    ("paged", &page.to_string()),
                ],
            )
            .map_err(|e| ScoutError::InvalidUrl(e.to_string()))?,
        };
        Ok(Self {
            site,
            kind: ListingKind::Search,
            url: url.to_string(),
            page,
        })
    }

    /// Classify an arbitrary listing URL for `site`.
    pub fn from_url(url: &str, site: Site) -> Result<Self> {
        let parsed = Url::parse(url).map_err(|_| ScoutError::InvalidUrl(url.to_string()))?;
        let segments: Vec<&str> = parsed
            .path_segments()
            .map(|s| s.filter(|seg| !seg.is_empty()).collect())
            .unwrap_or_default();

        let is_search = match site {
            Site::Couponscorpion => parsed.query_pairs().any(|(k, _)| k == "s"),
            Site::Udemyfreebies => segments.contains(&"search"),
        };

        let page = parsed
            .query_pairs()
            .find(|(k, _)| k == "paged")
            .and_then(|(_, v)| v.parse().ok())
            .or_else(|| segments.last().and_then(|s| s.parse().ok()))
            .unwrap_or(1);

        Ok(Self {
            site,
            kind: if is_search {
                ListingKind::Search
            } else {
                ListingKind::Catalog
            },
            url: url.to_string(),
            page,
        })
    }

    pub fn key(&self) -> ListingKey {
        ListingKey {
            site: self.site,
            kind: self.kind,
            url: self.url.clone(),
        }
    }
}

/// Best-effort course metadata; any field may be empty.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CourseDetails {
    pub language: String,
    pub instructor: String,
    pub rating: String,
    pub students: String,
    pub original_price: String,
}

/// One candidate course extracted from a listing page.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Course {
    pub id: String,
    pub title: String,
    pub date: String,
    pub category: String,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub discount: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub details: Option<CourseDetails>,
    pub detail_url: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CouponResolution {
    pub coupon_url: Option<String>,
    pub price: String,
}

/// A course merged with the outcome of its coupon resolution.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CourseResult {
    #[serde(flatten)]
    pub course: Course,
    pub coupon_url: Option<String>,
    pub price: Option<String>,
    pub expired: bool,
}

impl CourseResult {
    pub fn merge(course: Course, resolution: Option<CouponResolution>) -> Self {
        let (coupon_url, price) = match resolution {
            Some(r) => (r.coupon_url, Some(r.price)),
            None => (None, None),
        };
        Self {
            expired: coupon_url.is_none(),
            course,
            coupon_url,
            price,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ListingResponse {
    pub success: bool,
    pub current_page: u32,
    pub results: Vec<CourseResult>,
    #[serde(default, skip_serializing_if = "std::ops::Not::not")]
    pub cached: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CouponResponse {
    pub success: bool,
    pub coupon_url: Option<String>,
    pub price: Option<String>,
    pub expired: bool,
}

impl From<Option<CouponResolution>> for CouponResponse {
    fn from(resolution: Option<CouponResolution>) -> Self {
        match resolution {
            Some(CouponResolution {
                coupon_url: Some(url),
                price,
            }) => Self {
                success: true,
                coupon_url: Some(url),
                price: Some(price),
                expired: false,
            },
            Some(CouponResolution { price, .. }) => Self {
                success: false,
                coupon_url: None,
                price: Some(price),
                expired: true,
            },
            None => Self {
                success: false,
                coupon_url: None,
                price: None,
                expired: true,
            },
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub success: bool,
    pub error: String,
}

impl ErrorResponse {
    pub fn new(msg: impl Into<String>) -> Self {
        Self {
            success: false,
            error: msg.into(),
        }
    }
}
