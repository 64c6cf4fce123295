use super::utils::*;
use super::{DetailPage, SiteStrategy};
use crate::selectors::*;
use crate::types::{Course, CourseDetails, ListingKind, Site};
use once_cell::sync::Lazy;
use regex::Regex;
use scraper::{ElementRef, Html};

const PRICE_SENTINEL: &str = "Free";

static FREE_LABEL: Lazy<Regex> = Lazy::new(|| Regex::new(r"(?i)free").expect("valid regex"));

/// udemyfreebies.com: catalog and search pages share one card layout.
pub struct Udemyfreebies;

impl Udemyfreebies {
    fn course_from_block(&self, block: &ElementRef<'_>) -> Option<Course> {
        let price_text = parent_text(block, &UF_PRICE_ICON);
        if !FREE_LABEL.is_match(&price_text) {
            return None;
        }

        let title = first_text(block, &UF_TITLE);
        if title.is_empty() {
            return None;
        }

        let detail_url = first_attr(block, &UF_DETAIL_LINK, "href");
        Some(Course {
            id: Site::Udemyfreebies.course_id(&detail_url),
            title,
            date: first_text(block, &UF_DATE),
            category: first_text(block, &UF_CATEGORY),
            discount: String::new(),
            details: Some(CourseDetails {
                language: strip_label(&parent_text(block, &UF_LANGUAGE_ICON), "Language:"),
                instructor: strip_label(&parent_text(block, &UF_INSTRUCTOR_ICON), "Instructor:"),
                rating: strip_label(&parent_text(block, &UF_RATING_ICON), "Rate:"),
                students: strip_label(&parent_text(block, &UF_STUDENTS_ICON), "Enroll:"),
                original_price: dollar_amount(&price_text)
                    .unwrap_or_else(|| PRICE_SENTINEL.to_string()),
            }),
            detail_url,
        })
    }
}

impl SiteStrategy for Udemyfreebies {
    fn site(&self) -> Site {
        Site::Udemyfreebies
    }

    fn extract_listing(&self, html: &str, _kind: ListingKind) -> Vec<Course> {
        let doc = Html::parse_document(html);
        doc.select(&UF_BLOCK)
            .filter_map(|block| self.course_from_block(&block))
            .collect()
    }

    fn inspect_detail(&self, html: &str) -> DetailPage {
        let doc = Html::parse_document(html);
        let root = doc.root_element();

        let reveal_url = root
            .select(&UF_REVEAL)
            .next()
            .and_then(|a| a.value().attr("href"))
            .map(|href| href.trim().to_string());

        let price = dollar_amount(&parent_text(&root, &UF_PRICE_ICON))
            .unwrap_or_else(|| PRICE_SENTINEL.to_string());

        DetailPage { reveal_url, price }
    }

    fn reveal_field(&self) -> (&'static str, &'static str) {
        ("security_check", "1")
    }
}
