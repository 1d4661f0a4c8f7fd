//! cg-exporter CLI
//!
//! Fetches a bounded window of score-listing pages from a Cardinal-Gate
//! IIDX profile and writes BATCH-MANUAL export files.

use std::path::PathBuf;

use clap::{Parser, Subcommand};
use scraper::Html;

use cg_exporter::{
    config::Config,
    error::Result,
    models::{BatchManual, PageInfo},
    pipeline::{CrawlOptions, LogSink, crawl_scores},
    services::ScoreExtractor,
    storage::LocalExportStorage,
    utils::http::{self, HttpPageSource, PageSource},
};

/// cg-export - Cardinal-Gate IIDX score exporter
#[derive(Parser, Debug)]
#[command(
    name = "cg-export",
    version,
    about = "Exports Cardinal-Gate IIDX scores as Tachi BATCH-MANUAL JSON"
)]
struct Cli {
    /// Path to the configuration file
    #[arg(short, long, default_value = "config.toml")]
    config: PathBuf,

    /// Enable verbose logging
    #[arg(short, long)]
    verbose: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Crawl the score listing and write export files
    Export {
        /// Profile listing URL, e.g. https://ganymede-cg.net/iidx/profile
        url: String,

        /// Page to start from (the listing's own pager takes precedence)
        #[arg(long, default_value_t = 1)]
        from_page: u32,

        /// Override the configured output directory
        #[arg(long)]
        output_dir: Option<PathBuf>,
    },

    /// Fetch one page and report the planned page range without exporting
    Probe {
        /// Profile listing URL
        url: String,

        /// Page to probe
        #[arg(long, default_value_t = 1)]
        from_page: u32,
    },

    /// Validate the configuration file
    Validate,
}

/// Initialize logging based on verbosity flag.
fn init_logging(verbose: bool) {
    let level = if verbose { "debug" } else { "info" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(level))
        .format_timestamp_secs()
        .init();
}

/// Fetch the starting page and derive the listing position from its pager.
async fn probe_page_info(source: &HttpPageSource, from_page: u32) -> Result<PageInfo> {
    let body = source.fetch(from_page).await?;
    let document = Html::parse_document(&body);
    PageInfo::from_document(&document)
}

/// Main entry point for the CLI application.
#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let config = Config::load_or_default(&cli.config);
    config.validate()?;

    match cli.command {
        Command::Export {
            url,
            from_page,
            output_dir,
        } => {
            let client = http::create_client(&config.crawler)?;
            let source = HttpPageSource::new(client, &url)?;

            log::info!("Probing {} for page info...", url);
            let page_info = probe_page_info(&source, from_page).await?;
            let queue = page_info.queue(config.crawler.page_limit);
            log::info!(
                "Listing has {} page(s); exporting pages {}-{}",
                page_info.total_pages,
                queue.first().copied().unwrap_or(from_page),
                queue.last().copied().unwrap_or(from_page)
            );

            let extractor = ScoreExtractor::new()?;
            let options = CrawlOptions::from(&config.crawler);
            let result = crawl_scores(&source, &extractor, page_info, &options, &LogSink).await?;

            let documents = BatchManual::from_result(&result);
            if documents.is_empty() {
                log::warn!("No scores found; nothing to export.");
                return Ok(());
            }

            let out_dir = output_dir.unwrap_or_else(|| config.export.output_dir.clone());
            let storage = LocalExportStorage::new(out_dir);
            for path in storage.write_all(&documents).await? {
                log::info!("Wrote {}", path.display());
            }
            log::info!(
                "File(s) should be ready to be uploaded to https://kamai.tachi.ac/import/batch-manual"
            );
        }

        Command::Probe { url, from_page } => {
            let client = http::create_client(&config.crawler)?;
            let source = HttpPageSource::new(client, &url)?;

            let page_info = probe_page_info(&source, from_page).await?;
            let queue = page_info.queue(config.crawler.page_limit);
            log::info!(
                "Page {} of {}; an export would visit pages {}-{} ({} page(s))",
                page_info.current_page,
                page_info.total_pages,
                queue.first().copied().unwrap_or(from_page),
                queue.last().copied().unwrap_or(from_page),
                queue.len()
            );
        }

        Command::Validate => {
            // Config was already validated above; check that the markup
            // contract compiles too.
            ScoreExtractor::new()?;
            log::info!("All validations passed!");
        }
    }

    log::info!("Done!");

    Ok(())
}
