use std::collections::HashSet;
use std::time::Duration;

use chrono::{DateTime, Utc};
use futures::future::join_all;
use marketdash_core::CategoryFeeds;
use reqwest::header::{HeaderValue, ACCEPT};
use reqwest::Client;

use crate::error::FeedError;
use crate::parse::parse_feed;
use crate::source::publisher_label;
use crate::types::{CategoryNews, IngestConfig, NewsItem, SkipReason};

/// Media types advertised on every feed request.
const FEED_ACCEPT: &str = "application/rss+xml, application/xml, text/xml";

/// Fetches feeds and assembles per-category headline lists.
///
/// One instance holds a pooled `reqwest::Client` and is shared across all
/// categories of a run. Failures of individual feeds are logged and skipped;
/// only [`FeedClient::fetch_feed`] surfaces them to the caller.
#[derive(Debug, Clone)]
pub struct FeedClient {
    client: Client,
    config: IngestConfig,
}

impl FeedClient {
    /// Creates a `FeedClient` with the configured timeout and `User-Agent`.
    ///
    /// # Errors
    ///
    /// Returns [`FeedError::Client`] if the underlying `reqwest::Client`
    /// cannot be constructed (e.g., an invalid `User-Agent` value).
    pub fn new(config: IngestConfig) -> Result<Self, FeedError> {
        let client = Client::builder()
            .timeout(Duration::from_secs(config.request_timeout_secs))
            .user_agent(config.user_agent.as_str())
            .build()
            .map_err(FeedError::Client)?;
        Ok(Self { client, config })
    }

    #[must_use]
    pub fn config(&self) -> &IngestConfig {
        &self.config
    }

    /// Downloads and parses one feed.
    ///
    /// # Errors
    ///
    /// - [`FeedError::Http`] on network failure or timeout.
    /// - [`FeedError::UnexpectedStatus`] on any non-2xx response.
    /// - [`FeedError::Xml`] or [`FeedError::Malformed`] when the body is not a
    ///   usable feed document.
    pub async fn fetch_feed(&self, url: &str) -> Result<Vec<NewsItem>, FeedError> {
        let response = self
            .client
            .get(url)
            .header(ACCEPT, HeaderValue::from_static(FEED_ACCEPT))
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            return Err(FeedError::UnexpectedStatus {
                status: status.as_u16(),
                url: url.to_string(),
            });
        }

        let body = response.text().await?;
        let source = publisher_label(url, &self.config.publishers);
        parse_feed(&body, &source, &self.config.limits)
    }

    /// Collects up to `max_per_category` unique headlines for `category` from
    /// `urls`, in URL order. Never fails; a category whose feeds all fail is
    /// simply empty.
    pub async fn fetch_category(&self, category: &str, urls: &[String]) -> Vec<NewsItem> {
        self.fetch_category_at(category, urls, Utc::now()).await
    }

    /// [`Self::fetch_category`] with an explicit clock for the recency cutoff.
    pub async fn fetch_category_at(
        &self,
        category: &str,
        urls: &[String],
        now: DateTime<Utc>,
    ) -> Vec<NewsItem> {
        let cap = self.config.max_per_category;
        let cutoff = self.config.recency_cutoff(category).map(|age| now - age);

        let mut items = Vec::new();
        let mut seen = HashSet::new();
        let mut failed = 0usize;

        for url in urls {
            if items.len() >= cap {
                break;
            }

            let fetched = match self.fetch_feed(url).await {
                Ok(fetched) => fetched,
                Err(e) => {
                    failed += 1;
                    tracing::warn!(category, url = %url, kind = e.kind(), error = %e, "feed skipped");
                    continue;
                }
            };

            for item in fetched {
                if let Some(reason) = self.rejection(&item, cutoff, &seen) {
                    tracing::debug!(category, title = %item.title, ?reason, "dropping item");
                    continue;
                }
                seen.insert(item.dedup_key(self.config.dedup_key_chars));
                items.push(item);
                if items.len() >= cap {
                    break;
                }
            }
        }

        tracing::info!(
            category,
            count = items.len(),
            feeds = urls.len(),
            failed,
            "category collected"
        );
        items
    }

    fn rejection(
        &self,
        item: &NewsItem,
        cutoff: Option<DateTime<Utc>>,
        seen: &HashSet<String>,
    ) -> Option<SkipReason> {
        if cutoff.is_some_and(|cutoff| item.is_older_than(cutoff)) {
            return Some(SkipReason::Stale);
        }
        if seen.contains(&item.dedup_key(self.config.dedup_key_chars)) {
            return Some(SkipReason::Duplicate);
        }
        None
    }

    /// Runs [`Self::fetch_category`] for every category concurrently.
    /// Results are in the same order as `categories`.
    pub async fn fetch_all(&self, categories: &[CategoryFeeds]) -> Vec<CategoryNews> {
        let now = Utc::now();
        let fetches = categories.iter().map(|category| async move {
            let items = self.fetch_category_at(&category.key, &category.urls, now).await;
            CategoryNews {
                key: category.key.clone(),
                label: category.label.clone(),
                items,
            }
        });
        join_all(fetches).await
    }
}
