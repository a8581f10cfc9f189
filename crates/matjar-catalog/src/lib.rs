pub mod client;
pub mod error;
pub mod feed;
pub mod loader;
pub mod storefront;

pub use client::CatalogClient;
pub use error::{CatalogError, CatalogUnavailable, FeedError, LookupError};
pub use feed::{render_feed, FeedChannel, RenderedFeed};
pub use loader::CatalogLoader;
pub use storefront::{slug_from_page, DetailView, SearchView, Storefront, Suggestion};
