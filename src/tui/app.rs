use std::ops::Range;

use ratatui::widgets::ListState;

use crate::config::ITEMS_PER_PAGE;
use crate::domain::{Article, FeedItem};

/// Which projection the renderer produces.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum View {
    List,
    Article,
}

/// All presentation state, owned exclusively by the UI loop.
///
/// Every mutation goes through a transition method here; background tasks
/// never touch this struct directly, they report completions as messages that
/// the loop applies one at a time. The page cursor invariant is
/// `page * page_size < items.len()` whenever the collection is non-empty,
/// restored by clamping when a refresh shrinks the collection.
pub struct NewsApp {
    pub view: View,
    pub items: Vec<FeedItem>,
    pub page: usize,
    /// Absolute index of the selected item, kept within the visible page.
    pub selected: usize,
    pub current_article: Option<Article>,
    pub article_loading: bool,
    pub article_scroll: u16,
    pub status_message: Option<String>,
    pub is_refreshing: bool,
    pub should_quit: bool,
    pub list_state: ListState,
    page_size: usize,
}

impl NewsApp {
    pub fn new() -> Self {
        Self::with_page_size(ITEMS_PER_PAGE)
    }

    pub fn with_page_size(page_size: usize) -> Self {
        assert!(page_size > 0, "page size must be positive");
        Self {
            view: View::List,
            items: Vec::new(),
            page: 0,
            selected: 0,
            current_article: None,
            article_loading: false,
            article_scroll: 0,
            status_message: None,
            is_refreshing: false,
            should_quit: false,
            list_state: ListState::default(),
            page_size,
        }
    }

    // -- projections ---------------------------------------------------------

    pub fn visible_range(&self) -> Range<usize> {
        let start = (self.page * self.page_size).min(self.items.len());
        let end = (start + self.page_size).min(self.items.len());
        start..end
    }

    pub fn visible_items(&self) -> &[FeedItem] {
        &self.items[self.visible_range()]
    }

    pub fn has_prev_page(&self) -> bool {
        self.page > 0
    }

    pub fn has_next_page(&self) -> bool {
        (self.page + 1) * self.page_size < self.items.len()
    }

    pub fn page_count(&self) -> usize {
        self.items.len().div_ceil(self.page_size).max(1)
    }

    pub fn selected_item(&self) -> Option<&FeedItem> {
        self.items.get(self.selected)
    }

    // -- refresh -------------------------------------------------------------

    /// Replace the collection atomically with a freshly extracted sequence.
    ///
    /// Leaves the view alone so a refresh landing mid-read does not interrupt
    /// the reader, and clamps the cursor if the collection shrank under it.
    pub fn apply_items(&mut self, items: Vec<FeedItem>) {
        self.items = items;
        while self.page > 0 && self.page * self.page_size >= self.items.len() {
            self.page -= 1;
        }
        self.clamp_selection();
    }

    /// A failed refresh keeps the last-known-good list; a transient network
    /// blip should not blank a perfectly good screen.
    pub fn refresh_failed(&mut self, message: String) {
        self.is_refreshing = false;
        self.set_status(message);
    }

    // -- pagination (List view only) -----------------------------------------

    pub fn next_page(&mut self) {
        if self.view != View::List || !self.has_next_page() {
            return;
        }
        self.page += 1;
        self.selected = self.visible_range().start;
        self.sync_list_state();
    }

    pub fn prev_page(&mut self) {
        if self.view != View::List || !self.has_prev_page() {
            return;
        }
        self.page -= 1;
        self.selected = self.visible_range().start;
        self.sync_list_state();
    }

    // -- selection within the visible page -----------------------------------

    pub fn move_down(&mut self) {
        match self.view {
            View::List => {
                let range = self.visible_range();
                if range.is_empty() {
                    return;
                }
                self.selected = (self.selected + 1).min(range.end - 1);
                self.sync_list_state();
            }
            View::Article => {
                self.article_scroll = self.article_scroll.saturating_add(1);
            }
        }
    }

    pub fn move_up(&mut self) {
        match self.view {
            View::List => {
                let range = self.visible_range();
                if range.is_empty() {
                    return;
                }
                self.selected = self.selected.saturating_sub(1).max(range.start);
                self.sync_list_state();
            }
            View::Article => {
                self.article_scroll = self.article_scroll.saturating_sub(1);
            }
        }
    }

    // -- article reading -----------------------------------------------------

    /// Enter the Article view with the loading placeholder while the fetch
    /// runs in the background. No cached content survives a re-read: the
    /// previous article slot is cleared here.
    pub fn begin_read(&mut self) {
        if self.view != View::List {
            return;
        }
        self.current_article = None;
        self.article_loading = true;
        self.article_scroll = 0;
        self.view = View::Article;
    }

    /// Apply a resolved article. Last writer wins: whatever read completed
    /// most recently fills the single article slot.
    pub fn finish_read(&mut self, article: Article) {
        self.current_article = Some(article);
        self.article_loading = false;
        self.view = View::Article;
    }

    /// Return to the list, leaving the collection and the cursor untouched.
    pub fn back(&mut self) {
        if self.view != View::Article {
            return;
        }
        self.view = View::List;
        self.article_scroll = 0;
        self.sync_list_state();
    }

    // -- status --------------------------------------------------------------

    pub fn set_status(&mut self, message: String) {
        self.status_message = Some(message);
    }

    pub fn clear_status(&mut self) {
        self.status_message = None;
    }

    // -- internal ------------------------------------------------------------

    fn clamp_selection(&mut self) {
        let range = self.visible_range();
        if range.is_empty() {
            self.selected = 0;
            self.list_state.select(None);
            return;
        }
        self.selected = self.selected.clamp(range.start, range.end - 1);
        self.sync_list_state();
    }

    fn sync_list_state(&mut self) {
        let start = self.visible_range().start;
        self.list_state.select(Some(self.selected - start));
    }
}

impl Default for NewsApp {
    fn default() -> Self {
        Self::new()
    }
}
