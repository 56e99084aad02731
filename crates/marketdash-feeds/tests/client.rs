//! Integration tests for `FeedClient`.
//!
//! Each test stands up `wiremock` servers as feed publishers, so no real
//! network traffic is made. Covers the category cap, cross-source
//! de-duplication, failure isolation, the recency cutoff, and the request
//! headers sent to publishers.

use std::collections::HashMap;
use std::time::Duration;

use chrono::{DateTime, TimeDelta, Utc};
use wiremock::matchers::{header, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

use marketdash_core::CategoryFeeds;
use marketdash_feeds::{FeedClient, FeedError, IngestConfig, PublishedAt};

const TEST_UA: &str = "marketdash-test/0.1";

fn test_config() -> IngestConfig {
    IngestConfig {
        user_agent: TEST_UA.to_string(),
        request_timeout_secs: 5,
        ..IngestConfig::default()
    }
}

fn test_client() -> FeedClient {
    FeedClient::new(test_config()).expect("failed to build test FeedClient")
}

fn fixed_now() -> DateTime<Utc> {
    DateTime::parse_from_rfc3339("2026-02-02T12:00:00Z")
        .unwrap()
        .with_timezone(&Utc)
}

/// One `<item>` with an optional RFC 2822 date.
fn item(title: &str, published: Option<DateTime<Utc>>) -> String {
    let date = published
        .map(|at| format!("<pubDate>{}</pubDate>", at.to_rfc2822()))
        .unwrap_or_default();
    format!(
        "<item><title>{title}</title><link>https://example.com/{}</link>\
         <description>About {title}</description>{date}</item>",
        title.len()
    )
}

fn rss(items: &[String]) -> String {
    format!(
        r#"<?xml version="1.0"?><rss version="2.0"><channel><title>Test</title>{}</channel></rss>"#,
        items.concat()
    )
}

fn headlines(prefix: &str, count: usize) -> Vec<String> {
    (1..=count)
        .map(|i| item(&format!("{prefix} headline number {i:02}"), None))
        .collect()
}

async fn serve(server: &MockServer, route: &str, body: String) {
    Mock::given(method("GET"))
        .and(path(route))
        .respond_with(ResponseTemplate::new(200).set_body_string(body))
        .mount(server)
        .await;
}

// ---------------------------------------------------------------------------
// Category cap
// ---------------------------------------------------------------------------

#[tokio::test]
async fn fetch_category_caps_at_ten_in_feed_order() {
    let server = MockServer::start().await;
    serve(&server, "/rss", rss(&headlines("Markets", 15))).await;

    let items = test_client()
        .fetch_category("markets", &[format!("{}/rss", server.uri())])
        .await;

    assert_eq!(items.len(), 10);
    for (i, item) in items.iter().enumerate() {
        assert_eq!(item.title, format!("Markets headline number {:02}", i + 1));
        assert_eq!(item.source, "127.0.0.1");
    }
}

#[tokio::test]
async fn fetch_category_stops_requesting_once_cap_is_reached() {
    let first = MockServer::start().await;
    let second = MockServer::start().await;
    serve(&first, "/rss", rss(&headlines("First", 12))).await;

    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(200).set_body_string(rss(&headlines("Second", 5))))
        .expect(0)
        .mount(&second)
        .await;

    let items = test_client()
        .fetch_category(
            "markets",
            &[format!("{}/rss", first.uri()), format!("{}/rss", second.uri())],
        )
        .await;

    assert_eq!(items.len(), 10);
    assert!(items.iter().all(|i| i.title.starts_with("First")));
}

// ---------------------------------------------------------------------------
// De-duplication
// ---------------------------------------------------------------------------

#[tokio::test]
async fn duplicate_titles_across_sources_are_dropped_case_insensitively() {
    let first = MockServer::start().await;
    let second = MockServer::start().await;
    serve(
        &first,
        "/rss",
        rss(&[
            item("Sensex Hits Record High On Bank Rally", None),
            item("Rupee weakens past 84 per dollar", None),
            item("Crude oil slips on demand worries", None),
        ]),
    )
    .await;
    serve(
        &second,
        "/rss",
        rss(&[
            item("SENSEX HITS RECORD HIGH ON BANK RALLY", None),
            item("Gold climbs as yields retreat", None),
        ]),
    )
    .await;

    let items = test_client()
        .fetch_category(
            "india",
            &[format!("{}/rss", first.uri()), format!("{}/rss", second.uri())],
        )
        .await;

    let titles: Vec<&str> = items.iter().map(|i| i.title.as_str()).collect();
    assert_eq!(
        titles,
        [
            "Sensex Hits Record High On Bank Rally",
            "Rupee weakens past 84 per dollar",
            "Crude oil slips on demand worries",
            "Gold climbs as yields retreat",
        ]
    );
}

#[tokio::test]
async fn case_only_duplicate_within_one_feed_keeps_first_occurrence() {
    let server = MockServer::start().await;
    serve(
        &server,
        "/rss",
        rss(&[
            item("Nifty opens flat ahead of RBI policy", None),
            item("Gold Prices Rise As Dollar Weakens", None),
            item("Tech stocks drag Nasdaq lower again", None),
            item("gold prices rise as dollar weakens", None),
            item("Oil steadies after three-day slide", None),
        ]),
    )
    .await;

    let items = test_client()
        .fetch_category("markets", &[format!("{}/rss", server.uri())])
        .await;

    let titles: Vec<&str> = items.iter().map(|i| i.title.as_str()).collect();
    assert_eq!(
        titles,
        [
            "Nifty opens flat ahead of RBI policy",
            "Gold Prices Rise As Dollar Weakens",
            "Tech stocks drag Nasdaq lower again",
            "Oil steadies after three-day slide",
        ]
    );
}

#[tokio::test]
async fn titles_sharing_a_fifty_char_prefix_are_duplicates() {
    let server = MockServer::start().await;
    let prefix = "Global markets close mixed as investors weigh the ";
    assert_eq!(prefix.chars().count(), 50);
    serve(
        &server,
        "/rss",
        rss(&[
            item(&format!("{prefix}latest inflation data"), None),
            item(&format!("{prefix}labour report"), None),
        ]),
    )
    .await;

    let items = test_client()
        .fetch_category("markets", &[format!("{}/rss", server.uri())])
        .await;

    assert_eq!(items.len(), 1);
    assert!(items[0].title.ends_with("inflation data"));
}

// ---------------------------------------------------------------------------
// Failure isolation
// ---------------------------------------------------------------------------

#[tokio::test]
async fn failing_sources_are_skipped() {
    let broken = MockServer::start().await;
    let working = MockServer::start().await;

    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(500))
        .mount(&broken)
        .await;
    serve(&working, "/rss", rss(&headlines("Working", 3))).await;

    let items = test_client()
        .fetch_category(
            "economic",
            &[
                "http://127.0.0.1:1/unreachable".to_string(),
                format!("{}/rss", broken.uri()),
                format!("{}/rss", working.uri()),
            ],
        )
        .await;

    assert_eq!(items.len(), 3);
    assert!(items.iter().all(|i| i.title.starts_with("Working")));
}

#[tokio::test]
async fn invalid_xml_source_is_skipped_and_sibling_kept() {
    let garbled = MockServer::start().await;
    let working = MockServer::start().await;
    serve(
        &garbled,
        "/rss",
        "<rss><channel><item><title>Half a feed</channel>".to_string(),
    )
    .await;
    serve(&working, "/rss", rss(&headlines("Valid", 2))).await;

    let items = test_client()
        .fetch_category(
            "corporate",
            &[format!("{}/rss", garbled.uri()), format!("{}/rss", working.uri())],
        )
        .await;

    assert_eq!(items.len(), 2);
    assert_eq!(items[0].title, "Valid headline number 01");
}

#[tokio::test]
async fn all_sources_failing_gives_empty_category() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(503))
        .mount(&server)
        .await;

    let items = test_client()
        .fetch_category(
            "geopolitical",
            &[
                format!("{}/a", server.uri()),
                format!("{}/b", server.uri()),
                "http://127.0.0.1:1/unreachable".to_string(),
            ],
        )
        .await;

    assert!(items.is_empty());
}

#[tokio::test]
async fn slow_source_times_out_and_is_skipped() {
    let slow = MockServer::start().await;
    let fast = MockServer::start().await;
    Mock::given(method("GET"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_string(rss(&headlines("Slow", 2)))
                .set_delay(Duration::from_secs(3)),
        )
        .mount(&slow)
        .await;
    serve(&fast, "/rss", rss(&headlines("Fast", 2))).await;

    let client = FeedClient::new(IngestConfig {
        request_timeout_secs: 1,
        ..test_config()
    })
    .unwrap();
    let items = client
        .fetch_category(
            "markets",
            &[format!("{}/rss", slow.uri()), format!("{}/rss", fast.uri())],
        )
        .await;

    assert_eq!(items.len(), 2);
    assert!(items.iter().all(|i| i.title.starts_with("Fast")));
}

#[tokio::test]
async fn fetch_feed_reports_status_errors() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(404))
        .mount(&server)
        .await;

    let err = test_client()
        .fetch_feed(&format!("{}/missing", server.uri()))
        .await
        .unwrap_err();

    assert!(err.is_fetch());
    assert!(
        matches!(err, FeedError::UnexpectedStatus { status: 404, .. }),
        "got {err:?}"
    );
}

// ---------------------------------------------------------------------------
// Recency cutoff
// ---------------------------------------------------------------------------

#[tokio::test]
async fn stale_items_are_dropped_and_undated_items_kept() {
    let now = fixed_now();
    let server = MockServer::start().await;
    serve(
        &server,
        "/rss",
        rss(&[
            item("Fresh story from two hours ago", Some(now - TimeDelta::hours(2))),
            item("Stale story from yesterday morning", Some(now - TimeDelta::hours(30))),
            item("Undated story with no pubDate", None),
            "<item><title>Story with an odd date</title><pubDate>last week</pubDate></item>"
                .to_string(),
        ]),
    )
    .await;

    let client = FeedClient::new(IngestConfig {
        recency_cutoffs: HashMap::from([("trending".to_string(), 24)]),
        ..test_config()
    })
    .unwrap();
    let urls = [format!("{}/rss", server.uri())];

    let trending = client.fetch_category_at("trending", &urls, now).await;
    let titles: Vec<&str> = trending.iter().map(|i| i.title.as_str()).collect();
    assert_eq!(
        titles,
        [
            "Fresh story from two hours ago",
            "Undated story with no pubDate",
            "Story with an odd date",
        ]
    );
    assert_eq!(
        trending[2].published_at,
        Some(PublishedAt::Raw("last week".to_string()))
    );

    // Categories without a cutoff keep everything.
    let markets = client.fetch_category_at("markets", &urls, now).await;
    assert_eq!(markets.len(), 4);
}

// ---------------------------------------------------------------------------
// Requests and fan-out
// ---------------------------------------------------------------------------

#[tokio::test]
async fn requests_carry_user_agent_and_accept_headers() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/rss"))
        .and(header("user-agent", TEST_UA))
        .respond_with(ResponseTemplate::new(200).set_body_string(rss(&headlines("Header", 1))))
        .expect(1)
        .mount(&server)
        .await;

    let items = test_client()
        .fetch_category("markets", &[format!("{}/rss", server.uri())])
        .await;
    assert_eq!(items.len(), 1);

    let requests = server.received_requests().await.unwrap();
    let accept = requests[0]
        .headers
        .get("accept")
        .and_then(|v| v.to_str().ok())
        .unwrap();
    assert_eq!(accept, "application/rss+xml, application/xml, text/xml");
}

#[tokio::test]
async fn fetch_all_returns_categories_in_catalog_order() {
    let server = MockServer::start().await;
    serve(&server, "/markets", rss(&headlines("Markets", 2))).await;
    serve(&server, "/india", rss(&headlines("India", 3))).await;

    let categories = vec![
        CategoryFeeds {
            key: "markets".to_string(),
            label: "Market Updates".to_string(),
            urls: vec![format!("{}/markets", server.uri())],
            max_age_hours: None,
        },
        CategoryFeeds {
            key: "empty".to_string(),
            label: "Nothing Configured".to_string(),
            urls: Vec::new(),
            max_age_hours: None,
        },
        CategoryFeeds {
            key: "india".to_string(),
            label: "Indian Markets".to_string(),
            urls: vec![format!("{}/india", server.uri())],
            max_age_hours: None,
        },
    ];

    let news = test_client().fetch_all(&categories).await;

    let keys: Vec<&str> = news.iter().map(|c| c.key.as_str()).collect();
    assert_eq!(keys, ["markets", "empty", "india"]);
    assert_eq!(news[0].items.len(), 2);
    assert!(news[1].items.is_empty());
    assert_eq!(news[2].items.len(), 3);
    assert_eq!(news[2].label, "Indian Markets");
}
