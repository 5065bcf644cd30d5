/// A fully loaded article, produced lazily when the user opens an item.
///
/// At most one lives at a time; re-reading an item refetches rather than
/// reusing stale content.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Article {
    pub title: String,
    pub content: String,
}
