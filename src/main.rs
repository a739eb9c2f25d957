mod crawler;
mod error;
mod extract;
mod fetch;
mod record;
mod settings;
mod target;

use std::time::Instant;

use anyhow::Context;
use clap::Parser;
use tracing::info;

use crate::crawler::Crawler;
use crate::fetch::HttpFetcher;
use crate::settings::Settings;
use crate::target::Target;

#[derive(Parser)]
#[command(
    name = "sqlfuncs",
    about = "Scrape SQL function documentation into a JSON catalog"
)]
struct Cli {
    /// Database whose manual is crawled
    #[arg(value_enum, default_value = "mysql")]
    target: Target,
    /// Start from this URL instead of the official index page
    #[arg(long)]
    seed: Option<String>,
}

fn main() -> anyhow::Result<()> {
    // stdout carries the JSON catalog and nothing else.
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info".into()),
        )
        .init();

    let t0 = Instant::now();
    let cli = Cli::parse();
    let settings = Settings::load();

    let profile = cli.target.profile().with_seed(cli.seed);
    info!("Crawling {:?} docs from {}", cli.target, profile.seed_url);

    let fetcher = HttpFetcher::new(&settings).context("Failed to build HTTP client")?;
    let funcs = Crawler::new(fetcher, profile)
        .run()
        .with_context(|| format!("Crawl of {:?} documentation failed", cli.target))?;

    let json = record::to_json(&funcs).context("Failed to encode catalog")?;
    println!("{}", json);

    info!(
        "Emitted {} functions in {:.1}s",
        funcs.len(),
        t0.elapsed().as_secs_f64()
    );
    Ok(())
}
