//! RSS 2.0, RSS 1.0 (RDF) and Atom document parsing.
//!
//! Elements are matched on their local names, so `dc:date`,
//! `content:encoded` and default-namespaced Atom documents need no special
//! handling. The reader produces `RawEntry` values which the normalize
//! module turns into [`NewsItem`]s.

use std::borrow::Cow;

use quick_xml::events::{BytesStart, Event};
use quick_xml::Reader;

use crate::error::FeedError;
use crate::normalize::normalize_entry;
use crate::types::{ItemLimits, NewsItem};

/// Unprocessed fields of one `<item>` or `<entry>`.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub(crate) struct RawEntry {
    pub(crate) title: String,
    pub(crate) link: Option<String>,
    pub(crate) summary: Option<String>,
    pub(crate) published: Option<String>,
}

/// Entry child elements we read. Lower rank wins when several are present.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Field {
    Title,
    Link,
    Summary(u8),
    Published(u8),
}

impl Field {
    fn from_local_name(name: &[u8]) -> Option<Self> {
        match name {
            b"title" => Some(Self::Title),
            b"link" => Some(Self::Link),
            b"description" => Some(Self::Summary(0)),
            b"summary" => Some(Self::Summary(1)),
            b"content" | b"encoded" => Some(Self::Summary(2)),
            b"pubDate" => Some(Self::Published(0)),
            b"date" => Some(Self::Published(1)),
            b"published" => Some(Self::Published(2)),
            b"updated" => Some(Self::Published(3)),
            _ => None,
        }
    }
}

#[derive(Debug, Default)]
struct EntryBuilder {
    title: Option<String>,
    link: Option<String>,
    summary: Option<(u8, String)>,
    published: Option<(u8, String)>,
}

impl EntryBuilder {
    fn set(&mut self, field: Field, text: String) {
        if text.is_empty() {
            return;
        }
        match field {
            Field::Title => {
                self.title.get_or_insert(text);
            }
            Field::Link => {
                self.link.get_or_insert(text);
            }
            Field::Summary(rank) => {
                if self.summary.as_ref().is_none_or(|(held, _)| rank < *held) {
                    self.summary = Some((rank, text));
                }
            }
            Field::Published(rank) => {
                if self.published.as_ref().is_none_or(|(held, _)| rank < *held) {
                    self.published = Some((rank, text));
                }
            }
        }
    }

    fn finish(self) -> RawEntry {
        RawEntry {
            title: self.title.unwrap_or_default(),
            link: self.link,
            summary: self.summary.map(|(_, text)| text),
            published: self.published.map(|(_, text)| text),
        }
    }
}

/// Field currently being read, with the stack depth of its element.
struct OpenField {
    field: Field,
    depth: usize,
    chunks: Vec<String>,
}

/// Atom `<link href="..."/>`: the first link with no `rel` or
/// `rel="alternate"` is the article link.
fn atom_href(element: &BytesStart<'_>) -> Option<String> {
    let mut href = None;
    let mut rel = None;
    for attr in element.attributes().flatten() {
        match attr.key.local_name().as_ref() {
            b"href" => href = Some(String::from_utf8_lossy(&attr.value).into_owned()),
            b"rel" => rel = Some(String::from_utf8_lossy(&attr.value).into_owned()),
            _ => {}
        }
    }
    match rel.as_deref() {
        None | Some("alternate") => href,
        Some(_) => None,
    }
}

fn is_entry(name: &[u8]) -> bool {
    name == b"item" || name == b"entry"
}

/// Read up to `max_entries` entries from a feed document.
///
/// The whole document is still read so that a truncated or ill-formed
/// body is reported even when the cap was reached early.
///
/// # Errors
///
/// Returns [`FeedError::Xml`] for syntax errors and mismatched tags, and
/// [`FeedError::Malformed`] when the document has no root element or ends
/// with elements still open.
pub(crate) fn read_entries(xml: &str, max_entries: usize) -> Result<Vec<RawEntry>, FeedError> {
    let mut reader = Reader::from_str(xml);
    reader.config_mut().trim_text(true);

    let mut entries = Vec::new();
    let mut stack: Vec<Vec<u8>> = Vec::new();
    let mut saw_root = false;
    let mut entry: Option<(usize, EntryBuilder)> = None;
    let mut open_field: Option<OpenField> = None;

    loop {
        match reader.read_event()? {
            Event::Start(e) => {
                let name = e.local_name().as_ref().to_vec();
                saw_root = true;

                if entry.is_none() {
                    let under_channel = stack.last().is_some_and(|p| p == b"channel");
                    if is_entry(&name) && (stack.len() == 1 || under_channel) {
                        entry = Some((stack.len() + 1, EntryBuilder::default()));
                    }
                } else if let Some((entry_depth, builder)) = &mut entry {
                    if open_field.is_none() && stack.len() == *entry_depth {
                        if let Some(field) = Field::from_local_name(&name) {
                            if field == Field::Link {
                                if let Some(href) = atom_href(&e) {
                                    builder.set(Field::Link, href);
                                }
                            }
                            open_field = Some(OpenField {
                                field,
                                depth: stack.len() + 1,
                                chunks: Vec::new(),
                            });
                        }
                    }
                }

                stack.push(name);
            }
            Event::Empty(e) => {
                saw_root = true;
                if let Some((entry_depth, builder)) = &mut entry {
                    if open_field.is_none()
                        && stack.len() == *entry_depth
                        && e.local_name().as_ref() == b"link"
                    {
                        if let Some(href) = atom_href(&e) {
                            builder.set(Field::Link, href);
                        }
                    }
                }
            }
            Event::Text(e) => {
                if let Some(open) = &mut open_field {
                    let text = e
                        .unescape()
                        .unwrap_or_else(|_| Cow::Owned(String::from_utf8_lossy(&e).into_owned()));
                    open.chunks.push(text.into_owned());
                }
            }
            Event::CData(e) => {
                if let Some(open) = &mut open_field {
                    open.chunks.push(String::from_utf8_lossy(&e).into_owned());
                }
            }
            Event::End(_) => {
                let depth = stack.len();
                stack.pop();

                if open_field.as_ref().is_some_and(|open| open.depth == depth) {
                    if let (Some(open), Some((_, builder))) = (open_field.take(), &mut entry) {
                        builder.set(open.field, open.chunks.join(" ").trim().to_string());
                    }
                }

                if entry.as_ref().is_some_and(|(entry_depth, _)| *entry_depth == depth) {
                    if let Some((_, builder)) = entry.take() {
                        if entries.len() < max_entries {
                            entries.push(builder.finish());
                        }
                    }
                }
            }
            Event::Eof => break,
            _ => {}
        }
    }

    if !saw_root {
        return Err(FeedError::Malformed("document has no root element".to_string()));
    }
    if let Some(open) = stack.last() {
        return Err(FeedError::Malformed(format!(
            "document ended inside <{}>",
            String::from_utf8_lossy(open)
        )));
    }

    Ok(entries)
}

/// Parse one feed document into normalized items attributed to `source`.
///
/// Entries that fail validation are skipped and logged at debug level.
///
/// # Errors
///
/// Returns [`FeedError`] if the document is not well-formed XML or is
/// truncated.
pub fn parse_feed(xml: &str, source: &str, limits: &ItemLimits) -> Result<Vec<NewsItem>, FeedError> {
    let entries = read_entries(xml, limits.max_per_source)?;
    let mut items = Vec::with_capacity(entries.len());

    for raw in entries {
        let title = raw.title.clone();
        match normalize_entry(raw, source, limits) {
            Ok(item) => items.push(item),
            Err(reason) => {
                tracing::debug!(source, title = %title, ?reason, "skipping feed entry");
            }
        }
    }

    Ok(items)
}

#[cfg(test)]
#[path = "parse_test.rs"]
mod tests;
