pub mod article;
pub mod item;

pub use article::Article;
pub use item::FeedItem;
