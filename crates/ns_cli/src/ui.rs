use anyhow::anyhow;
use clap::Args;
use crossterm::style::Stylize;
use ns_core::{audio_file_name, NewsReport};
use reqwest::Client;
use std::fmt::Write as _;
use std::io::Write;
use std::path::PathBuf;
use url::Url;

const FETCH_ERROR: &str = "Error fetching news. Please check the backend or try again.";

#[derive(Args, Debug)]
pub struct UiArgs {
    /// Address of a running `ns serve`
    #[arg(long, default_value = "http://localhost:8001")]
    pub base_url: String,
    /// Where the downloaded audio is written
    #[arg(long, default_value = ".")]
    pub out_dir: PathBuf,
    #[arg(default_value = "")]
    pub company: String,
}

pub async fn run(args: &UiArgs) -> anyhow::Result<()> {
    let mut stdout = std::io::stdout();
    run_with(args, &mut stdout).await
}

async fn run_with(args: &UiArgs, out: &mut impl Write) -> anyhow::Result<()> {
    writeln!(out, "{}", "📢 AI-Powered News Analysis".bold())?;

    if args.company.is_empty() {
        writeln!(out, "{}", "⚠️ Please enter a company name.".yellow())?;
        return Ok(());
    }
    writeln!(
        out,
        "Fetching AI-generated summaries, sentiment, and audio for {}...",
        args.company
    )?;

    let client = Client::new();
    let report = match fetch_report(&client, args).await {
        Ok(report) => report,
        Err(e) => {
            tracing::debug!("News request failed: {}", e);
            writeln!(out, "{}", FETCH_ERROR.red())?;
            return Ok(());
        }
    };
    write!(out, "{}", render_report(&report))?;

    match download_audio(&client, args).await {
        Ok(path) => writeln!(out, "🔊 Audio saved to {}", path.display())?,
        Err(e) => writeln!(out, "{}", format!("🔇 Audio unavailable: {}", e).yellow())?,
    }
    Ok(())
}

fn endpoint(base_url: &str, route: &str, company: &str) -> anyhow::Result<Url> {
    let mut url = Url::parse(base_url)?;
    url.path_segments_mut()
        .map_err(|_| anyhow!("{} cannot be a base URL", base_url))?
        .pop_if_empty()
        .push(route)
        .push(company);
    Ok(url)
}

async fn fetch_report(client: &Client, args: &UiArgs) -> anyhow::Result<NewsReport> {
    let url = endpoint(&args.base_url, "news", &args.company)?;
    let report = client
        .get(url)
        .send()
        .await?
        .error_for_status()?
        .json()
        .await?;
    Ok(report)
}

async fn download_audio(client: &Client, args: &UiArgs) -> anyhow::Result<PathBuf> {
    let url = endpoint(&args.base_url, "tts", &args.company)?;
    let bytes = client
        .get(url)
        .send()
        .await?
        .error_for_status()?
        .bytes()
        .await?;
    let path = args.out_dir.join(audio_file_name(&args.company));
    tokio::fs::write(&path, &bytes).await?;
    Ok(path)
}

fn render_report(report: &NewsReport) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "\n{}", format!("📰 News Articles for {}", report.company).bold());

    for (idx, article) in report.articles.iter().enumerate() {
        let _ = writeln!(out, "\n{}", format!("{}. {}", idx + 1, article.title).bold());
        let _ = writeln!(out, "{} {}", "Summary:".bold(), article.summary);
        let _ = writeln!(out, "{} {}", "Sentiment:".bold(), article.sentiment);
        let topics: Vec<&str> = article.topics.iter().map(String::as_str).collect();
        let _ = writeln!(out, "{} {}", "Topics:".bold(), topics.join(", "));
        let _ = writeln!(out, "{}", "---".dark_grey());
    }

    let distribution = &report.sentiment_distribution;
    let _ = writeln!(out, "\n{}", "📊 Sentiment Analysis".bold());
    let _ = writeln!(out, "✅ {} {}", "Positive:".green(), distribution.positive);
    let _ = writeln!(out, "⚖️ {} {}", "Neutral:".blue(), distribution.neutral);
    let _ = writeln!(out, "❌ {} {}", "Negative:".red(), distribution.negative);

    let _ = writeln!(out, "\n{}", "📈 Final Sentiment Summary".bold());
    let _ = writeln!(out, "📌 {}", report.final_sentiment);
    let _ = writeln!(out, "🌍 {}", report.final_sentiment_translated.as_str().italic());
    out
}
