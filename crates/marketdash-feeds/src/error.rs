use thiserror::Error;

#[derive(Debug, Error)]
pub enum FeedError {
    /// Network, TLS, or timeout failure from the underlying HTTP client.
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("unexpected HTTP status {status} from {url}")]
    UnexpectedStatus { status: u16, url: String },

    #[error("XML parse error: {0}")]
    Xml(#[from] quick_xml::Error),

    /// Well-formed so far, but not a usable document (truncated, empty).
    #[error("malformed feed: {0}")]
    Malformed(String),

    #[error("could not build HTTP client: {0}")]
    Client(#[source] reqwest::Error),
}

impl FeedError {
    /// True for failures to obtain a response body.
    #[must_use]
    pub fn is_fetch(&self) -> bool {
        matches!(self, Self::Http(_) | Self::UnexpectedStatus { .. })
    }

    /// True for failures to interpret a response body.
    #[must_use]
    pub fn is_parse(&self) -> bool {
        matches!(self, Self::Xml(_) | Self::Malformed(_))
    }

    /// Short label used in log fields.
    #[must_use]
    pub fn kind(&self) -> &'static str {
        match self {
            Self::Http(_) | Self::UnexpectedStatus { .. } => "fetch",
            Self::Xml(_) | Self::Malformed(_) => "parse",
            Self::Client(_) => "client",
        }
    }
}
