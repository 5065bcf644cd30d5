//! # Newstray
//!
//! A compact terminal news reader for a single syndication feed.
//!
//! ## Architecture
//!
//! Newstray follows a small pipeline architecture:
//!
//! ```text
//! Fetcher → Extractor → State machine → Render
//! ```
//!
//! - [`fetcher`]: HTTP client behind an async trait, plus bounded retry
//! - [`extract`]: pattern-based feed and article extraction
//! - [`tui`]: terminal user interface built with ratatui
//!
//! Feed refresh and article loads run as background tokio tasks. Each task
//! finishes by sending exactly one message back to the UI loop, which applies
//! it as a single state update and re-renders. Rendering never performs I/O.
//!
//! ## Modules
//!
//! - [`app`]: application context and error types
//! - [`cli`]: command-line interface definitions
//! - [`config`]: runtime constants (page size, item cap, timeouts)
//! - [`domain`]: core domain models ([`FeedItem`](domain::FeedItem),
//!   [`Article`](domain::Article))
//! - [`extract`]: feed-item and article-body extraction
//! - [`fetcher`]: resilient HTTP fetching
//! - [`tui`]: terminal user interface

pub mod app;
pub mod cli;
pub mod config;
pub mod domain;
pub mod extract;
pub mod fetcher;
pub mod tui;
