//! PageFrame — standard root wrapper for every page.
//!
//! Guarantees two metadata attributes on the root DOM element:
//!   - `id`                  — `"{entity}--{category}"`, e.g. `"a003_product--list"`
//!   - `data-page-category`  — one of the PAGE_CAT_* constants

use super::page_standard::*;
use leptos::prelude::*;

/// BEM class for the page root by category.
pub fn page_class(category: &str) -> &'static str {
    match category {
        PAGE_CAT_SYSTEM => "page page--system",
        _ => "page",
    }
}

#[component]
pub fn PageFrame(
    /// HTML id in format `{entity}--{category}`.
    page_id: &'static str,
    /// One of the PAGE_CAT_* constants from `page_standard`.
    category: &'static str,
    children: Children,
) -> impl IntoView {
    debug_assert!(is_valid_page_id(page_id), "bad page id: {page_id}");
    debug_assert!(is_known_category(category), "unknown page category: {category}");

    view! {
        <div
            id=page_id
            class={page_class(category)}
            data-page-category=category
        >
            {children()}
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_app_pages_pass_frame_checks() {
        for (id, category) in [
            ("a003_product--list", PAGE_CAT_LIST),
            ("app--startup_error", PAGE_CAT_SYSTEM),
        ] {
            assert!(is_valid_page_id(id));
            assert!(is_known_category(category));
        }
        assert!(!is_known_category("legacy"));
    }

    #[test]
    fn test_page_class_by_category() {
        assert_eq!(page_class(PAGE_CAT_LIST), "page");
        assert_eq!(page_class(PAGE_CAT_SYSTEM), "page page--system");
    }
}
