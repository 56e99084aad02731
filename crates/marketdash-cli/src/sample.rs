//! Canned headlines for `--offline` runs.

use chrono::{DateTime, Utc};
use marketdash_core::CategoryFeeds;
use marketdash_feeds::{CategoryNews, NewsItem, PublishedAt};

/// `(category key, [(title, summary, source)])`
type Canned = (&'static str, &'static [(&'static str, &'static str, &'static str)]);

const SAMPLE_NEWS: &[Canned] = &[
    (
        "markets",
        &[
            (
                "Global Stock Markets Rally on Positive Economic Data",
                "Major stock indices across the world posted gains today following better-than-expected economic indicators and corporate earnings reports...",
                "CNBC Markets",
            ),
            (
                "Tech Sector Leads Market Gains Amid AI Investment Surge",
                "Technology stocks outperformed broader markets as investors continue to pour capital into artificial intelligence sectors...",
                "MarketWatch",
            ),
            (
                "Emerging Markets Attract Record Foreign Investment",
                "Developing economy equity markets are experiencing unprecedented inflows as investors seek higher returns...",
                "CNBC Markets",
            ),
        ],
    ),
    (
        "economic",
        &[
            (
                "Federal Reserve Holds Interest Rates Steady at 4.25-4.50%",
                "Fed maintains current rate range while monitoring inflation trends and employment data for future policy decisions...",
                "Reuters Business",
            ),
            (
                "US Inflation Edges Up to 2.4% in Latest CPI Report",
                "Consumer Price Index shows modest increase driven by energy and housing costs while core inflation remains stable...",
                "Bloomberg Markets",
            ),
            (
                "Global Trade Activity Shows Signs of Strengthening",
                "International trade volumes improve as supply chains normalize and demand patterns stabilize across major economies...",
                "Reuters Business",
            ),
        ],
    ),
    (
        "india",
        &[
            (
                "Sensex Hits New Record High on Strong FII Inflows",
                "Indian equity benchmarks reach fresh peaks driven by robust foreign institutional investor participation...",
                "MoneyControl",
            ),
            (
                "RBI Holds Repo Rate at 6.50%, Focuses on Inflation Management",
                "Reserve Bank of India maintains key policy rate while emphasizing data-dependent approach to monetary decisions...",
                "Economic Times",
            ),
            (
                "IT Sector Shows Strong Demand Recovery in Key Markets",
                "Major Indian technology companies report improved deal pipelines and client spending in digital projects...",
                "MoneyControl",
            ),
        ],
    ),
    (
        "corporate",
        &[
            (
                "Major Tech Companies Report Better Than Expected Earnings",
                "Leading technology firms exceed analyst estimates with strong revenue growth from cloud and AI services...",
                "Reuters Companies",
            ),
            (
                "Renewable Energy Sector Sees Record Investment Activity",
                "Clean energy companies attract unprecedented capital commitments as sustainability focus intensifies...",
                "Yahoo Finance",
            ),
        ],
    ),
    (
        "geopolitical",
        &[
            (
                "International Climate Summit Produces New Commitments",
                "Global leaders announce enhanced pledges to reduce emissions and accelerate clean energy transition...",
                "Reuters World",
            ),
            (
                "Supply Chain Resilience Improves Across Key Industries",
                "International logistics networks show significant efficiency gains following infrastructure investments...",
                "Reuters World",
            ),
        ],
    ),
];

/// Sample news for each catalog category, stamped `now`. Categories with no
/// canned headlines come back empty.
#[must_use]
pub fn sample_news(categories: &[CategoryFeeds], now: DateTime<Utc>) -> Vec<CategoryNews> {
    categories
        .iter()
        .map(|category| {
            let items: Vec<NewsItem> = SAMPLE_NEWS
                .iter()
                .find(|(key, _)| *key == category.key)
                .map(|(_, entries)| {
                    entries
                        .iter()
                        .map(|(title, summary, source)| NewsItem {
                            title: (*title).to_string(),
                            link: None,
                            summary: (*summary).to_string(),
                            published_at: Some(PublishedAt::Parsed(now.fixed_offset())),
                            source: (*source).to_string(),
                        })
                        .collect()
                })
                .unwrap_or_default();

            CategoryNews {
                key: category.key.clone(),
                label: category.label.clone(),
                items,
            }
        })
        .collect()
}
