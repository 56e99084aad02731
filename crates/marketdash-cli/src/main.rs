mod market;
mod render;
mod sample;

use std::path::PathBuf;

use anyhow::Context;
use chrono::{FixedOffset, Utc};
use clap::{Args, Parser, Subcommand};
use marketdash_core::{load_app_config, load_feeds, AppConfig, FeedsFile};
use marketdash_feeds::{FeedClient, IngestConfig};
use tracing_subscriber::EnvFilter;

use crate::render::{render_dashboard, Dashboard};

#[derive(Debug, Parser)]
#[command(name = "marketdash")]
#[command(about = "Global market news and indicators dashboard generator")]
#[command(args_conflicts_with_subcommands = true)]
struct Cli {
    /// Feed catalog YAML (overrides `MARKETDASH_FEEDS_PATH`)
    #[arg(long, global = true)]
    feeds: Option<PathBuf>,

    #[command(flatten)]
    generate: GenerateArgs,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Debug, Subcommand)]
enum Commands {
    /// Fetch every category and write the HTML dashboard (the default)
    Generate(GenerateArgs),
    /// Fetch a single category and print its headlines
    Fetch {
        /// Category key from the feed catalog
        #[arg(long)]
        category: String,
    },
    /// List configured categories and their feed URLs
    Feeds,
}

#[derive(Debug, Default, Args)]
struct GenerateArgs {
    /// Where to write the HTML (overrides `MARKETDASH_OUTPUT_PATH`)
    #[arg(long)]
    output: Option<PathBuf>,

    /// Use built-in sample headlines instead of fetching feeds
    #[arg(long)]
    offline: bool,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    let config = load_app_config()?;

    let env_filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(config.log_level.clone()))?;
    tracing_subscriber::fmt().with_env_filter(env_filter).init();

    let feeds_path = cli.feeds.unwrap_or_else(|| config.feeds_path.clone());
    let catalog = load_feeds(&feeds_path)
        .with_context(|| format!("failed to load feed catalog {}", feeds_path.display()))?;

    match cli.command {
        Some(Commands::Generate(args)) => run_generate(&config, &catalog, args).await,
        Some(Commands::Fetch { category }) => run_fetch(&config, &catalog, &category).await,
        Some(Commands::Feeds) => {
            print_feeds(&catalog);
            Ok(())
        }
        None => run_generate(&config, &catalog, cli.generate).await,
    }
}

fn build_client(config: &AppConfig, catalog: &FeedsFile) -> anyhow::Result<FeedClient> {
    FeedClient::new(IngestConfig::from_catalog(config, catalog))
        .context("failed to build feed HTTP client")
}

async fn run_generate(
    config: &AppConfig,
    catalog: &FeedsFile,
    args: GenerateArgs,
) -> anyhow::Result<()> {
    let offset = FixedOffset::east_opt(config.display_utc_offset_minutes * 60)
        .context("display UTC offset is out of range")?;
    let now = Utc::now();

    let news = if args.offline {
        tracing::info!("offline mode: using sample headlines");
        sample::sample_news(&catalog.categories, now)
    } else {
        build_client(config, catalog)?
            .fetch_all(&catalog.categories)
            .await
    };

    let dashboard = Dashboard {
        generated_at: now.with_timezone(&offset),
        market: market::snapshot(&mut rand::rng()),
        news,
    };
    let html = render_dashboard(&dashboard);

    let output = args.output.unwrap_or_else(|| config.output_path.clone());
    tokio::fs::write(&output, html)
        .await
        .with_context(|| format!("failed to write dashboard to {}", output.display()))?;

    tracing::info!(
        path = %output.display(),
        items = dashboard.total_items(),
        "dashboard written"
    );

    println!("Dashboard written to {}", output.display());
    println!(
        "  generated: {}",
        render::format_generated_at(&dashboard.generated_at)
    );
    println!(
        "  indicators: {} quotes, {} USA, {} India",
        dashboard.market.quotes.len(),
        dashboard.market.usa.len(),
        dashboard.market.india.len()
    );
    for category in &dashboard.news {
        println!("  {:<14} {:>3} items", category.key, category.items.len());
    }
    println!("  total: {} news items", dashboard.total_items());

    Ok(())
}

async fn run_fetch(config: &AppConfig, catalog: &FeedsFile, key: &str) -> anyhow::Result<()> {
    let Some(category) = catalog.category(key) else {
        let known: Vec<&str> = catalog.categories.iter().map(|c| c.key.as_str()).collect();
        anyhow::bail!("unknown category '{key}' (known: {})", known.join(", "));
    };

    let client = build_client(config, catalog)?;
    let items = client.fetch_category(&category.key, &category.urls).await;
    let now = Utc::now();

    println!("{} ({} items)", category.label, items.len());
    for (i, item) in items.iter().enumerate() {
        println!("{:>2}. {}", i + 1, item.title);
        println!("    {} | {}", item.source, item.relative_age_at(now));
        println!("    {}", item.href());
    }

    Ok(())
}

fn print_feeds(catalog: &FeedsFile) {
    for category in &catalog.categories {
        let cutoff = category
            .max_age_hours
            .map(|h| format!(" (last {h}h)"))
            .unwrap_or_default();
        println!("{} [{}]{cutoff}", category.label, category.key);
        for url in &category.urls {
            println!("  {url}");
        }
    }
}

#[cfg(test)]
mod tests;
