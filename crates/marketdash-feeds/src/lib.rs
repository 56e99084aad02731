//! News feed ingestion for the market dashboard.
//!
//! [`FeedClient`] downloads RSS and Atom feeds for each configured category,
//! normalizes their entries into [`NewsItem`]s, drops duplicates and stale
//! stories, and caps each category. A failing feed never fails its category.

pub mod client;
pub mod error;
pub(crate) mod normalize;
pub mod parse;
pub mod published;
pub mod source;
pub mod types;

pub use client::FeedClient;
pub use error::FeedError;
pub use parse::parse_feed;
pub use published::{format_relative_age, format_relative_age_at, parse_published, relative_age};
pub use source::{feed_domain, publisher_label};
pub use types::{
    CategoryNews, IngestConfig, ItemLimits, NewsItem, PublishedAt, SkipReason, ELLIPSIS,
    LINK_PLACEHOLDER, SUMMARY_FALLBACK,
};
