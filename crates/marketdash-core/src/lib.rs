//! Configuration shared by the marketdash crates.
//!
//! Runtime settings come from environment variables (see [`load_app_config`]);
//! the feed catalog comes from a YAML file (see [`load_feeds`]).

pub mod app_config;
pub mod config;
pub mod error;
pub mod feeds;

pub use app_config::{AppConfig, DEFAULT_USER_AGENT};
pub use config::{load_app_config, load_app_config_from_env};
pub use error::ConfigError;
pub use feeds::{
    default_publishers, load_feeds, parse_feeds, CategoryFeeds, FeedsFile, PublisherLabel,
};
