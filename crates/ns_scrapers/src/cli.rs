use clap::Args;
use ns_core::{NewsReport, Result};

use crate::manager::NewsFetcher;

#[derive(Args, Debug, Clone)]
pub struct FetchArgs {
    /// Company to search the news for
    pub company: String,
}

/// Runs the whole pipeline once and prints the report as JSON.
pub async fn handle_fetch(args: FetchArgs, fetcher: &NewsFetcher) -> Result<()> {
    let report = fetcher.fetch_report(&args.company).await?;
    println!("{}", render_report(&report)?);
    Ok(())
}

fn render_report(report: &NewsReport) -> Result<String> {
    Ok(serde_json::to_string_pretty(report)?)
}
