//! Article-page extraction: isolate the main content span, then pull plain
//! text out of every text-bearing element inside it.

use once_cell::sync::Lazy;
use regex::Regex;
use tracing::{debug, warn};
use url::Url;

use crate::extract::clean_text;
use crate::fetcher::{fetch_with_retry, Fetcher, RetryPolicy};

/// Substituted when the article fetch fails and no fallback was given.
pub const FETCH_FAILED: &str = "Failed to load full article.";
/// Substituted when the content markers are missing and no fallback was given.
pub const CONTENT_UNAVAILABLE: &str = "Full content unavailable.";
/// Substituted when no paragraph survives cleaning and no fallback was given.
pub const NO_READABLE_CONTENT: &str = "No readable content found.";

/// The single span between the main-content marker and the footer/tags
/// markers of the assumed page layout.
static CONTENT_SPAN: Lazy<Regex> = Lazy::new(|| {
    Regex::new(
        r#"(?is)<p class="font-large">(.*?)<div class="entry-bottom mt-50 mb-30">.*?<div class="tags">"#,
    )
    .unwrap()
});

/// Opening tag of any text-bearing element kind we read paragraphs from.
static TEXT_TAG_OPEN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?i)<(p|span|div|h[1-6]|li|strong|em|b|i)\b[^>]*>").unwrap());

/// Hyperlinks are flattened to their inner text.
static ANCHOR: Lazy<Regex> = Lazy::new(|| Regex::new(r"(?is)<a[^>]*>(.*?)</a>").unwrap());

/// Fetch `url` and extract the article body as paragraph-separated plain
/// text.
///
/// Never fails: transport errors, missing markers, and empty extractions all
/// resolve to `fallback` (when non-empty) or to a fixed placeholder.
pub async fn extract_article(
    fetcher: &dyn Fetcher,
    url: &str,
    fallback: Option<&str>,
    policy: &RetryPolicy,
) -> String {
    // Items without a real link carry "#"; skip the pointless fetch.
    if !is_fetchable(url) {
        warn!(%url, "article link is not fetchable");
        return fallback_or(fallback, FETCH_FAILED);
    }

    match fetch_with_retry(fetcher, url, policy).await {
        Ok(html) => extract_body(&html, fallback),
        Err(err) => {
            warn!(%url, error = %err, "article fetch failed after retries");
            fallback_or(fallback, FETCH_FAILED)
        }
    }
}

/// Pure extraction stage: main-content span, then per-element text.
pub fn extract_body(html: &str, fallback: Option<&str>) -> String {
    let span = match CONTENT_SPAN.captures(html).and_then(|c| c.get(1)) {
        Some(m) => m.as_str(),
        None => {
            debug!("content markers not found in article page");
            return fallback_or(fallback, CONTENT_UNAVAILABLE);
        }
    };

    let paragraphs = paragraph_texts(span);
    if paragraphs.is_empty() {
        return fallback_or(fallback, NO_READABLE_CONTENT);
    }

    let mut out = String::new();
    for paragraph in paragraphs {
        out.push_str(&paragraph);
        out.push_str("\n\n");
    }
    out
}

/// Scan the content span for text-bearing elements, in document order.
///
/// Pairing is non-nested: an opening tag is paired with the next matching
/// close tag by name, and scanning resumes after it, so nested elements are
/// absorbed into their outermost match.
fn paragraph_texts(content: &str) -> Vec<String> {
    let mut texts = Vec::new();
    let mut pos = 0;

    while let Some(caps) = TEXT_TAG_OPEN.captures_at(content, pos) {
        let open = caps.get(0).expect("whole match");
        let name = caps.get(1).expect("tag name").as_str().to_ascii_lowercase();

        match find_close_tag(content, &name, open.end()) {
            Some(close_start) => {
                let inner = &content[open.end()..close_start];
                let flattened = ANCHOR.replace_all(inner, "$1");
                let text = clean_text(&flattened);
                if !text.is_empty() {
                    texts.push(text);
                }
                // Skip past "</name>"
                pos = close_start + name.len() + 3;
            }
            // Unclosed tag: move past the opener and keep scanning.
            None => pos = open.end(),
        }
    }

    texts
}

/// Case-insensitive search for `</name>` at or after `from`.
fn find_close_tag(haystack: &str, name: &str, from: usize) -> Option<usize> {
    let needle = format!("</{name}>");
    let h = haystack.as_bytes();
    let n = needle.as_bytes();
    if from + n.len() > h.len() {
        return None;
    }
    (from..=h.len() - n.len()).find(|&i| h[i..i + n.len()].eq_ignore_ascii_case(n))
}

fn is_fetchable(url: &str) -> bool {
    matches!(Url::parse(url), Ok(u) if u.scheme() == "http" || u.scheme() == "https")
}

fn fallback_or(fallback: Option<&str>, placeholder: &str) -> String {
    match fallback {
        Some(text) if !text.is_empty() => text.to_string(),
        _ => placeholder.to_string(),
    }
}
