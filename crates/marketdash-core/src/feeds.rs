use std::collections::HashSet;
use std::path::Path;

use serde::{Deserialize, Serialize};
use url::Url;

use crate::ConfigError;

/// One topical news section and the feeds aggregated into it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CategoryFeeds {
    /// Stable key, also used as a CSS class in the rendered dashboard.
    pub key: String,
    /// Heading shown above the category's news card.
    pub label: String,
    /// Feed URLs in priority order. Earlier feeds win de-duplication ties.
    pub urls: Vec<String>,
    /// Items older than this many hours are dropped. `None` keeps everything.
    #[serde(default)]
    pub max_age_hours: Option<u32>,
}

/// Maps a substring of a feed's domain to a publisher display name.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PublisherLabel {
    pub pattern: String,
    pub label: String,
}

impl PublisherLabel {
    #[must_use]
    pub fn new(pattern: &str, label: &str) -> Self {
        Self {
            pattern: pattern.to_string(),
            label: label.to_string(),
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct FeedsFile {
    pub categories: Vec<CategoryFeeds>,
    #[serde(default = "default_publishers")]
    pub publishers: Vec<PublisherLabel>,
}

impl FeedsFile {
    /// Look up a category by key.
    #[must_use]
    pub fn category(&self, key: &str) -> Option<&CategoryFeeds> {
        self.categories.iter().find(|c| c.key == key)
    }
}

/// Publisher names for the domains the bundled catalog uses.
///
/// Order matters: the first pattern contained in the domain wins, so more
/// specific patterns come before broader ones.
#[must_use]
pub fn default_publishers() -> Vec<PublisherLabel> {
    vec![
        PublisherLabel::new("economictimes", "Economic Times"),
        PublisherLabel::new("moneycontrol", "MoneyControl"),
        PublisherLabel::new("livemint", "Mint"),
        PublisherLabel::new("business-standard", "Business Standard"),
        PublisherLabel::new("thehindubusinessline", "BusinessLine"),
        PublisherLabel::new("cnbc", "CNBC"),
        PublisherLabel::new("marketwatch", "MarketWatch"),
        PublisherLabel::new("dowjones", "MarketWatch"),
        PublisherLabel::new("reuters", "Reuters"),
        PublisherLabel::new("bloomberg", "Bloomberg"),
        PublisherLabel::new("yahoo", "Yahoo Finance"),
        PublisherLabel::new("ft.com", "Financial Times"),
        PublisherLabel::new("wsj", "Wall Street Journal"),
        PublisherLabel::new("bbc", "BBC"),
        PublisherLabel::new("aljazeera", "Al Jazeera"),
        PublisherLabel::new("news.google", "Google News"),
    ]
}

/// Load and validate the feed catalog from a YAML file.
///
/// # Errors
///
/// Returns `ConfigError` if the file cannot be read, parsed, or fails validation.
pub fn load_feeds(path: &Path) -> Result<FeedsFile, ConfigError> {
    let content = std::fs::read_to_string(path).map_err(|e| ConfigError::FeedsFileIo {
        path: path.display().to_string(),
        source: e,
    })?;

    parse_feeds(&content)
}

/// Parse and validate a feed catalog from YAML text.
///
/// # Errors
///
/// Returns `ConfigError` if the YAML is malformed or fails validation.
pub fn parse_feeds(yaml: &str) -> Result<FeedsFile, ConfigError> {
    let feeds_file: FeedsFile = serde_yaml::from_str(yaml).map_err(ConfigError::FeedsFileParse)?;
    validate_feeds(&feeds_file)?;
    Ok(feeds_file)
}

fn validate_feeds(feeds_file: &FeedsFile) -> Result<(), ConfigError> {
    if feeds_file.categories.is_empty() {
        return Err(ConfigError::Validation(
            "at least one category is required".to_string(),
        ));
    }

    let mut seen_keys = HashSet::new();

    for category in &feeds_file.categories {
        let key = category.key.trim();
        if key.is_empty() {
            return Err(ConfigError::Validation(
                "category key must be non-empty".to_string(),
            ));
        }

        if !seen_keys.insert(key.to_lowercase()) {
            return Err(ConfigError::Validation(format!(
                "duplicate category key: '{key}'"
            )));
        }

        for url in &category.urls {
            if !is_web_url(url) {
                return Err(ConfigError::Validation(format!(
                    "category '{key}' has non-http feed url '{url}'"
                )));
            }
        }

        if category.max_age_hours == Some(0) {
            return Err(ConfigError::Validation(format!(
                "category '{key}' has max_age_hours 0; omit it to disable the cutoff"
            )));
        }
    }

    for publisher in &feeds_file.publishers {
        if publisher.pattern.trim().is_empty() {
            return Err(ConfigError::Validation(format!(
                "publisher '{}' has an empty pattern",
                publisher.label
            )));
        }
    }

    Ok(())
}

/// Absolute `http`/`https` URL with a host.
fn is_web_url(raw: &str) -> bool {
    Url::parse(raw).is_ok_and(|url| {
        matches!(url.scheme(), "http" | "https") && url.host_str().is_some_and(|h| !h.is_empty())
    })
}

#[cfg(test)]
#[path = "feeds_test.rs"]
mod tests;
