/// One article summary extracted from the feed.
///
/// Immutable once produced. Missing fields in the source markup are filled
/// with placeholders at extraction time, so the UI never sees empty strings.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FeedItem {
    pub title: String,
    pub link: String,
    pub description: String,
    pub image_url: Option<String>,
}

impl FeedItem {
    /// Description truncated for the list view, on a char boundary.
    pub fn short_description(&self, max_chars: usize) -> String {
        if self.description.chars().count() <= max_chars {
            return self.description.clone();
        }
        let mut out: String = self.description.chars().take(max_chars).collect();
        out.push('…');
        out
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn item_with_description(description: &str) -> FeedItem {
        FeedItem {
            title: "t".into(),
            link: "https://example.com".into(),
            description: description.into(),
            image_url: None,
        }
    }

    #[test]
    fn short_description_returns_whole_text_when_under_limit() {
        let item = item_with_description("short");
        assert_eq!(item.short_description(200), "short");
    }

    #[test]
    fn short_description_truncates_with_ellipsis() {
        let item = item_with_description(&"x".repeat(250));
        let short = item.short_description(200);
        assert_eq!(short.chars().count(), 201);
        assert!(short.ends_with('…'));
    }

    #[test]
    fn short_description_respects_char_boundaries() {
        let item = item_with_description(&"é".repeat(250));
        let short = item.short_description(200);
        assert!(short.ends_with('…'));
        assert_eq!(short.chars().count(), 201);
    }
}
