use once_cell::sync::Lazy;
use regex::Regex;
use scraper::{ElementRef, Selector};

static DOLLAR_AMOUNT: Lazy<Regex> = Lazy::new(|| Regex::new(r"\$\d+").expect("valid regex"));

/// Element text with whitespace runs collapsed and ends trimmed.
pub(super) fn clean_text(el: &ElementRef<'_>) -> String {
    el.text()
        .flat_map(str::split_whitespace)
        .collect::<Vec<_>>()
        .join(" ")
}

/// Text of the first match under `root`, or `""`.
pub(super) fn first_text(root: &ElementRef<'_>, sel: &Selector) -> String {
    root.select(sel)
        .next()
        .map(|el| clean_text(&el))
        .unwrap_or_default()
}

/// Text of the parent of the first match under `root`, or `""`.
pub(super) fn parent_text(root: &ElementRef<'_>, sel: &Selector) -> String {
    root.select(sel)
        .next()
        .and_then(|el| el.parent())
        .and_then(ElementRef::wrap)
        .map(|p| clean_text(&p))
        .unwrap_or_default()
}

/// Attribute of the first match under `root`, or `""`.
pub(super) fn first_attr(root: &ElementRef<'_>, sel: &Selector, attr: &str) -> String {
    root.select(sel)
        .next()
        .and_then(|el| el.value().attr(attr))
        .map(|v| v.trim().to_string())
        .unwrap_or_default()
}

/// First `$<digits>` in `text`.
pub(super) fn dollar_amount(text: &str) -> Option<String> {
    DOLLAR_AMOUNT.find(text).map(|m| m.as_str().to_string())
}

/// Drop a leading `label` (case-insensitive) and surrounding whitespace.
pub(super) fn strip_label(text: &str, label: &str) -> String {
    let trimmed = text.trim();
    match trimmed.get(..label.len()) {
        Some(head) if head.eq_ignore_ascii_case(label) => trimmed[label.len()..].trim().to_string(),
        _ => trimmed.to_string(),
    }
}
