//! Publisher labels derived from feed URLs.

use marketdash_core::PublisherLabel;
use reqwest::Url;

/// Extracts the feed host with a leading `www.` or `feeds.` removed.
///
/// Falls back to splitting the string by hand when it does not parse as a URL.
#[must_use]
pub fn feed_domain(feed_url: &str) -> String {
    let host = Url::parse(feed_url)
        .ok()
        .and_then(|u| u.host_str().map(str::to_owned))
        .unwrap_or_else(|| {
            feed_url
                .split("://")
                .last()
                .unwrap_or(feed_url)
                .split(['/', '?', '#'])
                .next()
                .unwrap_or(feed_url)
                .to_lowercase()
        });

    let host = host.strip_prefix("www.").unwrap_or(&host);
    let host = host.strip_prefix("feeds.").unwrap_or(host);
    host.to_string()
}

/// Display name for the publisher behind `feed_url`.
///
/// The first table entry whose pattern occurs in the stripped domain wins;
/// an unmatched domain is its own label.
#[must_use]
pub fn publisher_label(feed_url: &str, publishers: &[PublisherLabel]) -> String {
    let domain = feed_domain(feed_url);
    publishers
        .iter()
        .find(|p| domain.contains(&p.pattern.to_lowercase()))
        .map(|p| p.label.clone())
        .unwrap_or(domain)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn table() -> Vec<PublisherLabel> {
        marketdash_core::default_publishers()
    }

    #[test]
    fn strips_www_and_feeds_prefixes() {
        assert_eq!(feed_domain("https://www.cnbc.com/id/1/rss.html"), "cnbc.com");
        assert_eq!(
            feed_domain("https://feeds.bbci.co.uk/news/rss.xml"),
            "bbci.co.uk"
        );
        assert_eq!(
            feed_domain("https://www.feeds.example.org/rss"),
            "example.org"
        );
    }

    #[test]
    fn known_publishers_are_labelled() {
        assert_eq!(
            publisher_label("https://www.moneycontrol.com/rss/marketreports.xml", &table()),
            "MoneyControl"
        );
        assert_eq!(
            publisher_label(
                "https://economictimes.indiatimes.com/markets/rssfeeds/1977021501.cms",
                &table()
            ),
            "Economic Times"
        );
        assert_eq!(
            publisher_label("https://feeds.bbci.co.uk/news/world/rss.xml", &table()),
            "BBC"
        );
        assert_eq!(
            publisher_label("https://finance.yahoo.com/news/rssindex", &table()),
            "Yahoo Finance"
        );
    }

    #[test]
    fn first_matching_pattern_wins() {
        let publishers = vec![
            PublisherLabel::new("markets.example", "Example Markets"),
            PublisherLabel::new("example", "Example"),
        ];
        assert_eq!(
            publisher_label("https://markets.example.com/rss", &publishers),
            "Example Markets"
        );
        assert_eq!(
            publisher_label("https://news.example.com/rss", &publishers),
            "Example"
        );
    }

    #[test]
    fn unknown_domain_is_its_own_label() {
        assert_eq!(
            publisher_label("https://www.smallwire.net/feed", &table()),
            "smallwire.net"
        );
    }

    #[test]
    fn unparseable_url_still_yields_a_domain() {
        assert_eq!(feed_domain("www.Example.com/rss"), "example.com");
    }
}
