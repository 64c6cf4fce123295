//! Shared Selectors
//!
//! Every CSS selector the site strategies use, parsed once.

use once_cell::sync::Lazy;
use scraper::Selector;

fn sel(css: &str) -> Selector {
    Selector::parse(css).expect("valid selector")
}

/* ------------ udemyfreebies ------------ */

/// One course card on catalog and search pages.
pub static UF_BLOCK: Lazy<Selector> = Lazy::new(|| sel(".theme-block"));

/// Money icon; its parent holds the price label ("Free", "$84.99 Free", ...).
pub static UF_PRICE_ICON: Lazy<Selector> = Lazy::new(|| sel(".fa-money"));

pub static UF_DATE: Lazy<Selector> = Lazy::new(|| sel("small.text-muted"));
pub static UF_TITLE: Lazy<Selector> = Lazy::new(|| sel(".coupon-name h4"));
pub static UF_CATEGORY: Lazy<Selector> = Lazy::new(|| sel(".coupon-specility p"));
pub static UF_LANGUAGE_ICON: Lazy<Selector> = Lazy::new(|| sel("i.fa-comment"));
pub static UF_INSTRUCTOR_ICON: Lazy<Selector> = Lazy::new(|| sel("i.fa-user"));
pub static UF_RATING_ICON: Lazy<Selector> = Lazy::new(|| sel("i.fa-star"));
pub static UF_STUDENTS_ICON: Lazy<Selector> = Lazy::new(|| sel("i.fa-users"));
pub static UF_DETAIL_LINK: Lazy<Selector> = Lazy::new(|| sel(".coupon-details a[href]"));

/// Reveal button on a detail page.
pub static UF_REVEAL: Lazy<Selector> =
    Lazy::new(|| sel(r#"a.button-icon[href^="https://www.udemyfreebies.com/out/"]"#));

/* ------------ couponscorpion ------------ */

pub static CS_CATALOG_ITEM: Lazy<Selector> =
    Lazy::new(|| sel(".eq_grid.pt5 .col_item.offer_grid"));
pub static CS_SEARCH_ITEM: Lazy<Selector> = Lazy::new(|| sel(".news-community"));

pub static CS_CATALOG_TITLE: Lazy<Selector> = Lazy::new(|| sel("h3 a"));
pub static CS_SEARCH_TITLE: Lazy<Selector> = Lazy::new(|| sel("h2 a"));
pub static CS_CATALOG_DATE: Lazy<Selector> = Lazy::new(|| sel(".date_ago"));
pub static CS_SEARCH_DATE: Lazy<Selector> = Lazy::new(|| sel(".date_meta"));
pub static CS_DISCOUNT: Lazy<Selector> = Lazy::new(|| sel(".grid_onsale"));
pub static CS_CATEGORY: Lazy<Selector> = Lazy::new(|| sel(".cat_link_meta a"));

/// "Get coupon" button on a detail page.
pub static CS_REVEAL: Lazy<Selector> =
    Lazy::new(|| sel(".disablemobileborder .btn_offer_block"));
pub static CS_PRICE: Lazy<Selector> = Lazy::new(|| sel(".rh_regular_price"));
