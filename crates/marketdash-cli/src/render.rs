//! Static HTML rendering of the dashboard.
//!
//! The page is a single self-contained document with inline CSS. Every value
//! interpolated into it passes through [`esc`], including feed text, labels
//! and links.

use std::borrow::Cow;

use chrono::{DateTime, FixedOffset, Utc};
use marketdash_feeds::{CategoryNews, NewsItem};
use quick_xml::escape::escape;

use crate::market::{Indicator, MarketSnapshot, Quote};

/// Offset of India Standard Time from UTC, in minutes.
pub const IST_OFFSET_MINUTES: i32 = 330;

const NO_NEWS: &str = "No news available";

const STYLESHEET: &str = r"
:root {
  --primary-bg: #0a0e27; --accent-bg: #1a2347;
  --text-primary: #e8edf5; --text-secondary: #a8b2d1;
  --accent-blue: #4a9eff; --accent-green: #00ff88; --accent-red: #ff4757;
  --accent-yellow: #ffd93d; --accent-pink: #f093fb; --accent-cyan: #4facfe;
  --accent-orange: #ff9f43; --border-color: rgba(74, 158, 255, 0.2);
}
* { margin: 0; padding: 0; box-sizing: border-box; }
body {
  font-family: 'IBM Plex Sans', system-ui, sans-serif;
  background: linear-gradient(135deg, #0a0e27 0%, #1a1f3a 50%, #0f1629 100%);
  color: var(--text-primary); min-height: 100vh; padding: 20px;
}
.container { max-width: 1600px; margin: 0 auto; }
header {
  text-align: center; margin-bottom: 30px; padding: 25px 20px;
  background: rgba(26, 35, 71, 0.5); border-radius: 15px;
  border: 1px solid var(--border-color);
}
h1 { font-size: 2.2em; font-weight: 900; color: var(--accent-blue); margin-bottom: 10px; }
.subtitle { font-family: monospace; font-size: 0.85em; color: var(--text-secondary); text-transform: uppercase; }
.timestamp { margin-top: 12px; font-family: monospace; font-size: 0.75em; color: var(--accent-blue); }
.section-title { font-size: 2em; font-weight: 900; margin: 20px 0; color: var(--accent-green); }
.indicators-grid { display: flex; gap: 15px; margin-bottom: 40px; overflow-x: auto; padding-bottom: 10px; }
.indicator-card {
  background: rgba(26, 35, 71, 0.6); padding: 15px 20px; border-radius: 12px;
  border: 1px solid var(--border-color); min-width: 180px; flex-shrink: 0;
  display: flex; flex-direction: column; justify-content: center;
  border-top: 2px solid var(--text-secondary);
}
.indicator-card.positive { border-top-color: var(--accent-green); }
.indicator-card.negative { border-top-color: var(--accent-red); }
.indicator-title { font-family: monospace; font-size: 0.7em; color: var(--text-secondary); text-transform: uppercase; margin-bottom: 8px; white-space: nowrap; }
.indicator-value { font-size: 1.4em; font-weight: 700; margin-bottom: 6px; white-space: nowrap; }
.indicator-change { font-family: monospace; font-size: 0.8em; padding: 3px 8px; border-radius: 4px; display: inline-block; white-space: nowrap; }
.indicator-updated { font-family: monospace; font-size: 0.65em; color: var(--text-secondary); margin-top: 4px; opacity: 0.7; }
.indicator-change.positive { color: var(--accent-green); background: rgba(0, 255, 136, 0.1); }
.indicator-change.negative { color: var(--accent-red); background: rgba(255, 71, 87, 0.1); }
.indicator-change.neutral { color: var(--text-secondary); background: rgba(168, 178, 209, 0.1); }
.news-section { margin-top: 60px; }
.news-grid { display: grid; grid-template-columns: repeat(auto-fit, minmax(450px, 1fr)); gap: 30px; margin-bottom: 40px; }
.news-category-card { background: rgba(26, 35, 71, 0.6); padding: 30px; border-radius: 15px; border: 1px solid var(--border-color); }
.category-header { margin-bottom: 25px; padding-bottom: 15px; border-bottom: 2px solid var(--accent-blue); }
.category-title { font-size: 1.6em; font-weight: 700; }
.trending .category-title { color: var(--accent-orange); }
.markets .category-title { color: var(--accent-red); }
.economic .category-title { color: var(--accent-pink); }
.india .category-title { color: var(--accent-yellow); }
.corporate .category-title { color: var(--accent-cyan); }
.geopolitical .category-title { color: var(--accent-green); }
.news-item { padding: 18px; margin-bottom: 15px; background: rgba(10, 14, 39, 0.4); border-radius: 10px; border-left: 3px solid var(--accent-blue); }
.news-item h3 { font-size: 1.05em; margin-bottom: 10px; line-height: 1.5; font-weight: 600; }
.news-item a { color: var(--text-primary); text-decoration: none; }
.news-item a:hover { color: var(--accent-blue); }
.news-meta { display: flex; gap: 15px; font-family: monospace; font-size: 0.75em; color: var(--text-secondary); margin-bottom: 10px; }
.news-source { color: var(--accent-blue); font-weight: 700; }
.news-summary { font-size: 0.9em; color: var(--text-secondary); line-height: 1.6; }
.no-news { color: var(--text-secondary); padding: 20px; text-align: center; }
footer { text-align: center; padding: 30px; color: var(--text-secondary); font-size: 0.85em; }
@media (max-width: 768px) { .news-grid { grid-template-columns: 1fr; } }
";

/// Everything shown on one generated page.
#[derive(Debug, Clone)]
pub struct Dashboard {
    /// Generation time in the display timezone.
    pub generated_at: DateTime<FixedOffset>,
    pub market: MarketSnapshot,
    pub news: Vec<CategoryNews>,
}

impl Dashboard {
    #[must_use]
    pub fn total_items(&self) -> usize {
        self.news.iter().map(|c| c.items.len()).sum()
    }
}

fn esc(raw: &str) -> Cow<'_, str> {
    escape(raw)
}

/// `IST` for UTC+05:30, otherwise a `UTC+HH:MM` label.
#[must_use]
pub fn zone_label(offset: &FixedOffset) -> String {
    let minutes = offset.local_minus_utc() / 60;
    if minutes == IST_OFFSET_MINUTES {
        return "IST".to_string();
    }
    if minutes == 0 {
        return "UTC".to_string();
    }
    let sign = if minutes < 0 { '-' } else { '+' };
    let minutes = minutes.abs();
    format!("UTC{sign}{:02}:{:02}", minutes / 60, minutes % 60)
}

/// `January 05, 2026 at 09:30 AM IST`
#[must_use]
pub fn format_generated_at(at: &DateTime<FixedOffset>) -> String {
    format!(
        "{} {}",
        at.format("%B %d, %Y at %I:%M %p"),
        zone_label(at.offset())
    )
}

/// Render the complete HTML document.
#[must_use]
pub fn render_dashboard(dashboard: &Dashboard) -> String {
    let now = dashboard.generated_at.with_timezone(&Utc);
    let mut html = String::with_capacity(32 * 1024);

    html.push_str(&format!(
        r#"<!DOCTYPE html>
<html lang="en">
<head>
<meta charset="UTF-8">
<meta name="viewport" content="width=device-width, initial-scale=1.0">
<meta name="description" content="Global market indicators and news impacting the Indian stock market">
<title>Global Market News &amp; Indicators Dashboard</title>
<style>{STYLESHEET}</style>
</head>
<body>
<div class="container">
<header>
<h1>🌍 Global Market Dashboard</h1>
<div class="subtitle">Live Indicators &amp; News Feed</div>
<div class="timestamp">📅 Last Updated: {}</div>
</header>
"#,
        esc(&format_generated_at(&dashboard.generated_at))
    ));

    html.push_str("<section class=\"indicators-section\">\n");
    html.push_str("<h2 class=\"section-title\">Live Market Indicators</h2>\n");
    html.push_str("<div class=\"indicators-grid\">\n");
    for quote in &dashboard.market.quotes {
        html.push_str(&quote_card(quote));
    }
    html.push_str("</div>\n</section>\n");

    for (title, indicators) in [
        ("🇺🇸 USA Economic Indicators", &dashboard.market.usa),
        ("🇮🇳 India Economic Indicators", &dashboard.market.india),
    ] {
        html.push_str("<section class=\"economic-indicators-section\">\n");
        html.push_str(&format!("<h2 class=\"section-title\">{}</h2>\n", esc(title)));
        html.push_str("<div class=\"indicators-grid\">\n");
        for indicator in indicators {
            html.push_str(&indicator_card(indicator));
        }
        html.push_str("</div>\n</section>\n");
    }

    html.push_str("<section class=\"news-section\">\n");
    html.push_str("<h2 class=\"section-title\">Global News Feed</h2>\n");
    html.push_str("<div class=\"news-grid\">\n");
    for category in &dashboard.news {
        html.push_str(&category_card(category, now));
    }
    html.push_str("</div>\n</section>\n");

    html.push_str(
        r"<footer>
<p>🔄 Sources: RSS and Atom feeds from the publishers named on each story</p>
<p>⚠️ Market figures are indicative placeholders. For informational purposes only. Not financial advice.</p>
</footer>
</div>
</body>
</html>
",
    );

    html
}

fn quote_card(quote: &Quote) -> String {
    let status = quote.status.css_class();
    format!(
        r#"<div class="indicator-card {status}">
<div class="indicator-title">{} {}</div>
<div class="indicator-value">{}</div>
<div class="indicator-change {status}">{} ({}%)</div>
</div>
"#,
        esc(quote.icon),
        esc(quote.name),
        esc(&quote.value),
        esc(&quote.change),
        esc(&quote.pchange),
    )
}

fn indicator_card(indicator: &Indicator) -> String {
    let status = indicator.status.css_class();
    format!(
        r#"<div class="indicator-card {status}">
<div class="indicator-title">{} {}</div>
<div class="indicator-value">{}</div>
<div class="indicator-change {status}">{}</div>
<div class="indicator-updated">{}</div>
</div>
"#,
        esc(indicator.icon),
        esc(indicator.name),
        esc(indicator.value),
        esc(indicator.detail),
        esc(indicator.updated),
    )
}

fn category_card(category: &CategoryNews, now: DateTime<Utc>) -> String {
    let mut card = format!(
        "<div class=\"news-category-card {}\">\n<div class=\"category-header\"><h3 class=\"category-title\">{}</h3></div>\n",
        esc(&category.key),
        esc(&category.label)
    );

    if category.items.is_empty() {
        card.push_str(&format!("<p class=\"no-news\">{NO_NEWS}</p>\n"));
    }
    for item in &category.items {
        card.push_str(&news_item(item, now));
    }

    card.push_str("</div>\n");
    card
}

fn news_item(item: &NewsItem, now: DateTime<Utc>) -> String {
    format!(
        r#"<div class="news-item">
<h3><a href="{}" target="_blank" rel="noopener">{}</a></h3>
<div class="news-meta"><span class="news-source">{}</span><span class="news-date">{}</span></div>
<p class="news-summary">{}</p>
</div>
"#,
        esc(item.href()),
        esc(&item.title),
        esc(&item.source),
        esc(&item.relative_age_at(now)),
        esc(&item.summary),
    )
}
