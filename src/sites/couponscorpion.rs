use super::utils::*;
use super::{DetailPage, SiteStrategy};
use crate::selectors::*;
use crate::types::{Course, ListingKind, Site};
use scraper::{ElementRef, Html};

const PRICE_SENTINEL: &str = "$0";

/// Search results carry no discount badge; everything listed there is free.
const SEARCH_DISCOUNT: &str = "100% OFF";

/// couponscorpion.com: grid layout for catalog pages, list layout for search.
pub struct Couponscorpion;

impl Couponscorpion {
    fn catalog_course(&self, item: &ElementRef<'_>) -> Option<Course> {
        let title = first_text(item, &CS_CATALOG_TITLE);
        let discount = first_text(item, &CS_DISCOUNT);
        if title.is_empty() || !discount.contains("100%") {
            return None;
        }
        let detail_url = first_attr(item, &CS_CATALOG_TITLE, "href");
        Some(Course {
            id: Site::Couponscorpion.course_id(&detail_url),
            title,
            date: first_text(item, &CS_CATALOG_DATE).replace("ago", "").trim().to_string(),
            category: first_text(item, &CS_CATEGORY),
            discount,
            details: None,
            detail_url,
        })
    }

    fn search_course(&self, item: &ElementRef<'_>) -> Option<Course> {
        let title = first_text(item, &CS_SEARCH_TITLE);
        if title.is_empty() {
            return None;
        }
        let detail_url = first_attr(item, &CS_SEARCH_TITLE, "href");
        Some(Course {
            id: Site::Couponscorpion.course_id(&detail_url),
            title,
            date: first_text(item, &CS_SEARCH_DATE),
            category: first_text(item, &CS_CATEGORY),
            discount: SEARCH_DISCOUNT.to_string(),
            details: None,
            detail_url,
        })
    }
}

impl SiteStrategy for Couponscorpion {
    fn site(&self) -> Site {
        Site::Couponscorpion
    }

    fn extract_listing(&self, html: &str, kind: ListingKind) -> Vec<Course> {
        let doc = Html::parse_document(html);
        match kind {
            ListingKind::Catalog => doc
                .select(&CS_CATALOG_ITEM)
                .filter_map(|item| self.catalog_course(&item))
                .collect(),
            ListingKind::Search => doc
                .select(&CS_SEARCH_ITEM)
                .filter_map(|item| self.search_course(&item))
                .collect(),
        }
    }

    fn inspect_detail(&self, html: &str) -> DetailPage {
        let doc = Html::parse_document(html);
        let root = doc.root_element();

        let reveal_url = root
            .select(&CS_REVEAL)
            .next()
            .and_then(|a| a.value().attr("href"))
            .map(str::trim)
            .filter(|href| !href.is_empty())
            .map(str::to_string);

        let price = Some(first_text(&root, &CS_PRICE))
            .filter(|p| !p.is_empty())
            .unwrap_or_else(|| PRICE_SENTINEL.to_string());

        DetailPage { reveal_url, price }
    }

    fn reveal_field(&self) -> (&'static str, &'static str) {
        ("security", "1")
    }
}
