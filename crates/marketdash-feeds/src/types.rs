use std::collections::HashMap;

use chrono::{DateTime, FixedOffset, TimeDelta, Utc};
use marketdash_core::{AppConfig, FeedsFile, PublisherLabel};

use crate::published::{format_relative_age_at, relative_age};

/// Link shown for items whose feed entry carried none.
pub const LINK_PLACEHOLDER: &str = "#";

/// Summary shown for items whose feed entry had no usable description.
pub const SUMMARY_FALLBACK: &str = "Click to read the full article.";

/// Marker appended to summaries cut at `max_summary_chars`.
pub const ELLIPSIS: &str = "...";

/// A normalized news headline ready for display.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewsItem {
    pub title: String,
    pub link: Option<String>,
    /// Plain text, never empty (see [`SUMMARY_FALLBACK`]).
    pub summary: String,
    pub published_at: Option<PublishedAt>,
    /// Publisher display name derived from the feed URL.
    pub source: String,
}

impl NewsItem {
    /// The link to render, falling back to [`LINK_PLACEHOLDER`].
    #[must_use]
    pub fn href(&self) -> &str {
        self.link.as_deref().unwrap_or(LINK_PLACEHOLDER)
    }

    /// Case-folded title prefix used to detect the same story across feeds.
    #[must_use]
    pub fn dedup_key(&self, key_chars: usize) -> String {
        self.title
            .chars()
            .take(key_chars)
            .collect::<String>()
            .to_lowercase()
    }

    /// True only when the item has a parsed date earlier than `cutoff`.
    /// Items without a usable date are never considered stale.
    #[must_use]
    pub fn is_older_than(&self, cutoff: DateTime<Utc>) -> bool {
        match &self.published_at {
            Some(PublishedAt::Parsed(at)) => at.with_timezone(&Utc) < cutoff,
            _ => false,
        }
    }

    /// Human-readable age such as `"3 hours ago"`, relative to `now`.
    #[must_use]
    pub fn relative_age_at(&self, now: DateTime<Utc>) -> String {
        match &self.published_at {
            Some(PublishedAt::Parsed(at)) => relative_age(*at, now),
            Some(PublishedAt::Raw(raw)) => format_relative_age_at(raw, now),
            None => format_relative_age_at("", now),
        }
    }
}

/// Publish date of an item: parsed when a known format matched, otherwise
/// the feed's text verbatim.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PublishedAt {
    Parsed(DateTime<FixedOffset>),
    Raw(String),
}

/// Why an entry did not make it into a category's results.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SkipReason {
    TitleTooShort,
    Duplicate,
    Stale,
}

/// Per-document extraction limits.
#[derive(Debug, Clone)]
pub struct ItemLimits {
    /// Entries read from one feed document; later entries are ignored.
    pub max_per_source: usize,
    pub min_title_chars: usize,
    pub max_summary_chars: usize,
}

impl Default for ItemLimits {
    fn default() -> Self {
        Self {
            max_per_source: 20,
            min_title_chars: 10,
            max_summary_chars: 500,
        }
    }
}

/// Everything the ingestor needs, passed in at construction.
#[derive(Debug, Clone)]
pub struct IngestConfig {
    pub user_agent: String,
    pub request_timeout_secs: u64,
    pub max_per_category: usize,
    pub dedup_key_chars: usize,
    pub limits: ItemLimits,
    pub publishers: Vec<PublisherLabel>,
    /// Category key to maximum item age in hours.
    pub recency_cutoffs: HashMap<String, u32>,
}

impl Default for IngestConfig {
    fn default() -> Self {
        Self {
            user_agent: marketdash_core::DEFAULT_USER_AGENT.to_string(),
            request_timeout_secs: 8,
            max_per_category: 10,
            dedup_key_chars: 50,
            limits: ItemLimits::default(),
            publishers: marketdash_core::default_publishers(),
            recency_cutoffs: HashMap::new(),
        }
    }
}

impl IngestConfig {
    /// Combine runtime settings with the catalog's publishers and cutoffs.
    #[must_use]
    pub fn from_catalog(app: &AppConfig, feeds: &FeedsFile) -> Self {
        let recency_cutoffs = feeds
            .categories
            .iter()
            .filter_map(|c| c.max_age_hours.map(|hours| (c.key.clone(), hours)))
            .collect();

        Self {
            user_agent: app.user_agent.clone(),
            request_timeout_secs: app.request_timeout_secs,
            max_per_category: app.max_per_category,
            limits: ItemLimits {
                max_per_source: app.max_per_source,
                ..ItemLimits::default()
            },
            publishers: feeds.publishers.clone(),
            recency_cutoffs,
            ..Self::default()
        }
    }

    /// Maximum age for items in `category`, if it has a cutoff.
    #[must_use]
    pub fn recency_cutoff(&self, category: &str) -> Option<TimeDelta> {
        self.recency_cutoffs
            .get(category)
            .map(|hours| TimeDelta::hours(i64::from(*hours)))
    }
}

/// One category's collected headlines.
#[derive(Debug, Clone)]
pub struct CategoryNews {
    pub key: String,
    pub label: String,
    pub items: Vec<NewsItem>,
}
