//! Pattern-based markup extraction.
//!
//! This is a deliberate lightweight pattern-matcher, not an HTML/XML parser:
//! the feed and the article pages have one well-known shape each, and every
//! deviation degrades to a default or fallback instead of an error. Each
//! stage is a pure function so it can be tested on raw strings.

pub mod article;
pub mod feed;

pub use article::{extract_article, extract_body};
pub use feed::extract_items;

use once_cell::sync::Lazy;
use regex::Regex;

static CDATA_MARKERS: Lazy<Regex> = Lazy::new(|| Regex::new(r"<!\[CDATA\[|\]\]>").unwrap());
static ANY_TAG: Lazy<Regex> = Lazy::new(|| Regex::new(r"<[^>]+>").unwrap());
static WHITESPACE_RUN: Lazy<Regex> = Lazy::new(|| Regex::new(r"\s+").unwrap());

/// Strip literal CDATA wrapper markers, leaving the wrapped text in place.
pub(crate) fn strip_cdata(text: &str) -> String {
    CDATA_MARKERS.replace_all(text, "").into_owned()
}

/// Drop every remaining tag, keeping only text content.
pub(crate) fn strip_tags(text: &str) -> String {
    ANY_TAG.replace_all(text, "").into_owned()
}

/// Collapse whitespace runs to single spaces and trim the ends.
pub(crate) fn collapse_whitespace(text: &str) -> String {
    WHITESPACE_RUN.replace_all(text.trim(), " ").into_owned()
}

/// Tag-stripped, entity-decoded, whitespace-collapsed plain text.
pub(crate) fn clean_text(text: &str) -> String {
    let stripped = strip_tags(text);
    let decoded = html_escape::decode_html_entities(&stripped);
    collapse_whitespace(&decoded)
}
