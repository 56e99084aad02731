//! Text cleanup and validation for raw feed entries.
//!
//! Feed text arrives with embedded markup, HTML entities (sometimes escaped
//! twice), and ragged whitespace. These helpers reduce it to plain text and
//! turn a [`RawEntry`] into a [`NewsItem`] or a [`SkipReason`].

use html_escape::decode_html_entities;
use reqwest::Url;

use crate::parse::RawEntry;
use crate::published::parse_published;
use crate::types::{ItemLimits, NewsItem, PublishedAt, SkipReason, ELLIPSIS, SUMMARY_FALLBACK};

/// Tags that separate words when stripped. Any other tag is removed outright.
const BREAKING_TAGS: &[&str] = &[
    "br", "p", "div", "li", "ul", "ol", "tr", "td", "th", "table", "h1", "h2", "h3", "h4",
    "h5", "h6", "blockquote", "hr", "img", "figure", "figcaption", "section", "article",
];

/// Normalizes one raw entry.
///
/// # Errors
///
/// Returns [`SkipReason::TitleTooShort`] when the cleaned title is shorter
/// than `limits.min_title_chars`.
pub(crate) fn normalize_entry(
    raw: RawEntry,
    source: &str,
    limits: &ItemLimits,
) -> Result<NewsItem, SkipReason> {
    let title = collapse_whitespace(&decode_entities(&raw.title));
    if title.chars().count() < limits.min_title_chars {
        return Err(SkipReason::TitleTooShort);
    }

    let summary = raw
        .summary
        .as_deref()
        .map(|text| clean_summary(text, limits.max_summary_chars))
        .filter(|text| !text.is_empty())
        .unwrap_or_else(|| SUMMARY_FALLBACK.to_string());

    let link = raw.link.as_deref().and_then(web_link);

    let published_at = raw
        .published
        .map(|text| text.trim().to_string())
        .filter(|text| !text.is_empty())
        .map(|text| match parse_published(&text) {
            Some(at) => PublishedAt::Parsed(at),
            None => PublishedAt::Raw(text),
        });

    Ok(NewsItem {
        title,
        link,
        summary,
        published_at,
        source: source.to_string(),
    })
}

/// Strip markup, decode entities, collapse whitespace, and cut to `max_chars`.
pub(crate) fn clean_summary(raw: &str, max_chars: usize) -> String {
    let text = collapse_whitespace(&decode_entities(&strip_html(raw)));
    truncate_chars(&text, max_chars)
}

/// Cut `text` to exactly `max_chars` characters plus [`ELLIPSIS`] when longer.
pub(crate) fn truncate_chars(text: &str, max_chars: usize) -> String {
    match text.char_indices().nth(max_chars) {
        Some((cut, _)) => format!("{}{ELLIPSIS}", &text[..cut]),
        None => text.to_string(),
    }
}

/// Remove HTML tags. Block-level tags and `<br>` become a space so
/// `a<br>b` keeps two words.
pub(crate) fn strip_html(html: &str) -> String {
    let mut out = String::with_capacity(html.len());
    let mut tag: Option<String> = None;
    for ch in html.chars() {
        if let Some(inner) = tag.as_mut() {
            if ch == '>' {
                if breaks_words(inner) {
                    out.push(' ');
                }
                tag = None;
            } else {
                inner.push(ch);
            }
        } else if ch == '<' {
            tag = Some(String::new());
        } else {
            out.push(ch);
        }
    }
    out
}

fn breaks_words(tag: &str) -> bool {
    let name: String = tag
        .trim_start_matches('/')
        .chars()
        .take_while(char::is_ascii_alphanumeric)
        .collect();
    BREAKING_TAGS
        .iter()
        .any(|known| known.eq_ignore_ascii_case(&name))
}

pub(crate) fn collapse_whitespace(text: &str) -> String {
    text.split_whitespace().collect::<Vec<_>>().join(" ")
}

/// Decode HTML character references, leaving anything unrecognized verbatim.
///
/// A bare `&` (as in `S&P 500`) is common in feed text and passes through.
pub(crate) fn decode_entities(raw: &str) -> String {
    decode_html_entities(raw).into_owned()
}

/// Keep `href` only when it is an absolute `http` or `https` URL.
fn web_link(href: &str) -> Option<String> {
    let decoded = decode_entities(href.trim());
    let url = Url::parse(&decoded).ok()?;
    matches!(url.scheme(), "http" | "https").then_some(decoded)
}
