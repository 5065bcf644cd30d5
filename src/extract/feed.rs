//! Feed-document extraction: item blocks first, then fields within each block.

use once_cell::sync::Lazy;
use regex::Regex;

use crate::config::ITEM_CAP;
use crate::domain::FeedItem;
use crate::extract::{clean_text, collapse_whitespace, strip_cdata};

pub const DEFAULT_TITLE: &str = "No title";
pub const DEFAULT_LINK: &str = "#";
pub const DEFAULT_DESCRIPTION: &str = "No description available.";

static ITEM_BLOCK: Lazy<Regex> = Lazy::new(|| Regex::new(r"(?is)<item>(.*?)</item>").unwrap());
static TITLE: Lazy<Regex> = Lazy::new(|| Regex::new(r"(?is)<title>(.*?)</title>").unwrap());
static LINK: Lazy<Regex> = Lazy::new(|| Regex::new(r"(?is)<link>(.*?)</link>").unwrap());
static DESCRIPTION: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?is)<description>(.*?)</description>").unwrap());
static DESCRIPTION_CONTAINER: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?is)<div>(.*?)</div>").unwrap());
static IMG_TAG: Lazy<Regex> = Lazy::new(|| Regex::new(r"(?i)<img[^>]*>").unwrap());
static MEDIA_URL: Lazy<Regex> =
    Lazy::new(|| Regex::new(r#"(?i)<media:content[^>]+url="([^"]+)""#).unwrap());

/// Extract article summaries from raw feed markup, in document order, capped
/// at [`ITEM_CAP`] items.
///
/// Pure over the input text and infallible: a missing sub-element degrades to
/// a per-field default, and a block matching none of the patterns still yields
/// an all-defaults item. Only the caller's fetch can fail.
pub fn extract_items(feed_text: &str) -> Vec<FeedItem> {
    ITEM_BLOCK
        .captures_iter(feed_text)
        .take(ITEM_CAP)
        .map(|caps| extract_item(caps.get(1).map_or("", |m| m.as_str())))
        .collect()
}

fn extract_item(block: &str) -> FeedItem {
    let title = first_capture(&TITLE, block)
        .map(|raw| collapse_whitespace(&html_escape::decode_html_entities(&strip_cdata(raw))))
        .filter(|t| !t.is_empty())
        .unwrap_or_else(|| DEFAULT_TITLE.to_string());

    let link = first_capture(&LINK, block)
        .map(|raw| strip_cdata(raw).trim().to_string())
        .filter(|l| !l.is_empty())
        .unwrap_or_else(|| DEFAULT_LINK.to_string());

    let description = first_capture(&DESCRIPTION, block)
        .map(extract_description)
        .filter(|d| !d.is_empty())
        .unwrap_or_else(|| DEFAULT_DESCRIPTION.to_string());

    let image_url = first_capture(&MEDIA_URL, block)
        .map(|url| url.trim().to_string())
        .filter(|url| !url.is_empty());

    FeedItem {
        title,
        link,
        description,
        image_url,
    }
}

/// Clean a raw `<description>` body.
///
/// When the description embeds a container tag the container's inner content
/// is the real summary; embedded image tags inside it are dropped before the
/// remaining tags are stripped.
fn extract_description(raw: &str) -> String {
    let unwrapped = strip_cdata(raw);
    let unwrapped = unwrapped.trim();

    match first_capture(&DESCRIPTION_CONTAINER, unwrapped) {
        Some(inner) => {
            let without_images = IMG_TAG.replace_all(inner, "");
            clean_text(&without_images)
        }
        None => clean_text(unwrapped),
    }
}

fn first_capture<'t>(re: &Regex, text: &'t str) -> Option<&'t str> {
    re.captures(text)
        .and_then(|caps| caps.get(1))
        .map(|m| m.as_str())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn item_block(inner: &str) -> String {
        format!("<item>{inner}</item>")
    }

    #[test]
    fn extracts_items_in_document_order() {
        let feed = "\
            <rss><channel>\
            <item><title>First</title><link>https://e.com/1</link><description>one</description></item>\
            <item><title>Second</title><link>https://e.com/2</link><description>two</description></item>\
            <item><title>Third</title><link>https://e.com/3</link><description>three</description></item>\
            </channel></rss>";

        let items = extract_items(feed);
        assert_eq!(items.len(), 3);
        assert_eq!(items[0].title, "First");
        assert_eq!(items[1].title, "Second");
        assert_eq!(items[2].title, "Third");
        assert_eq!(items[1].link, "https://e.com/2");
        assert_eq!(items[2].description, "three");
    }

    #[test]
    fn caps_at_fifty_items_keeping_the_first_fifty() {
        let mut feed = String::new();
        for i in 0..60 {
            feed.push_str(&item_block(&format!("<title>Item {i}</title>")));
        }

        let items = extract_items(&feed);
        assert_eq!(items.len(), 50);
        assert_eq!(items[0].title, "Item 0");
        assert_eq!(items[49].title, "Item 49");
    }

    #[test]
    fn missing_title_defaults() {
        let feed = item_block("<link>https://e.com</link><description>d</description>");
        let items = extract_items(&feed);
        assert_eq!(items[0].title, DEFAULT_TITLE);
    }

    #[test]
    fn empty_title_defaults() {
        let feed = item_block("<title>  </title>");
        let items = extract_items(&feed);
        assert_eq!(items[0].title, DEFAULT_TITLE);
    }

    #[test]
    fn missing_link_defaults_to_hash() {
        let feed = item_block("<title>t</title>");
        let items = extract_items(&feed);
        assert_eq!(items[0].link, DEFAULT_LINK);
    }

    #[test]
    fn cdata_wrappers_are_stripped() {
        let feed = item_block(
            "<title><![CDATA[Wrapped title]]></title>\
             <description><![CDATA[Wrapped <b>desc</b>]]></description>",
        );
        let items = extract_items(&feed);
        assert_eq!(items[0].title, "Wrapped title");
        assert_eq!(items[0].description, "Wrapped desc");
    }

    #[test]
    fn container_description_drops_embedded_image() {
        let feed = item_block(
            "<description><![CDATA[<div><img src=\"https://e.com/pic.jpg\">\
             Real <b>summary</b> text</div><span>outside</span>]]></description>",
        );
        let items = extract_items(&feed);
        assert_eq!(items[0].description, "Real summary text");
        assert!(!items[0].description.contains("pic.jpg"));
    }

    #[test]
    fn plain_description_strips_tags_and_collapses_whitespace() {
        let feed = item_block("<description>  a <b>b</b>\n\n c  </description>");
        let items = extract_items(&feed);
        assert_eq!(items[0].description, "a b c");
    }

    #[test]
    fn description_empty_after_cleaning_defaults() {
        let feed = item_block("<description><![CDATA[<span>   </span>]]></description>");
        let items = extract_items(&feed);
        assert_eq!(items[0].description, DEFAULT_DESCRIPTION);
    }

    #[test]
    fn media_enclosure_url_is_extracted() {
        let feed = item_block(
            "<title>t</title>\
             <media:content medium=\"image\" url=\"https://e.com/img.png\"/>",
        );
        let items = extract_items(&feed);
        assert_eq!(items[0].image_url.as_deref(), Some("https://e.com/img.png"));
    }

    #[test]
    fn missing_media_enclosure_leaves_image_absent() {
        let feed = item_block("<title>t</title>");
        let items = extract_items(&feed);
        assert!(items[0].image_url.is_none());
    }

    #[test]
    fn malformed_block_yields_all_defaults() {
        let feed = item_block("<unknown>junk</unknown>");
        let items = extract_items(&feed);
        assert_eq!(
            items[0],
            FeedItem {
                title: DEFAULT_TITLE.into(),
                link: DEFAULT_LINK.into(),
                description: DEFAULT_DESCRIPTION.into(),
                image_url: None,
            }
        );
    }

    #[test]
    fn html_entities_are_decoded() {
        let feed = item_block(
            "<title>Q&amp;A</title><description>Tom &amp; Jerry</description>",
        );
        let items = extract_items(&feed);
        assert_eq!(items[0].title, "Q&A");
        assert_eq!(items[0].description, "Tom & Jerry");
    }

    #[test]
    fn empty_input_yields_no_items() {
        assert!(extract_items("").is_empty());
        assert!(extract_items("<rss><channel></channel></rss>").is_empty());
    }
}
