use std::path::PathBuf;

/// Browser-like `User-Agent` sent with every feed request. Several publishers
/// reject requests from unknown clients.
pub const DEFAULT_USER_AGENT: &str =
    "Mozilla/5.0 (Windows NT 10.0; Win64; x64) AppleWebKit/537.36 (KHTML, like Gecko) Chrome/124.0.0.0 Safari/537.36";

#[derive(Debug, Clone)]
pub struct AppConfig {
    pub feeds_path: PathBuf,
    pub output_path: PathBuf,
    pub log_level: String,
    pub request_timeout_secs: u64,
    pub user_agent: String,
    pub max_per_category: usize,
    pub max_per_source: usize,
    /// Offset from UTC used for the "generated at" header, in minutes.
    pub display_utc_offset_minutes: i32,
}
