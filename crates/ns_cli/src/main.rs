use anyhow::Context;
use clap::Parser;
use ns_inference::{Config, InferenceConfig};
use ns_scrapers::{init_logging, BingNewsScraper, FetchArgs, FetcherConfig, NewsFetcher};
use ns_web::{create_app, AppState};
use std::path::PathBuf;
use std::sync::Arc;
use tracing::{info, Level};

mod ui;

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    #[arg(long, default_value = "hosted", help = "Models to run the pipeline with. Available models: hosted (default), dummy")]
    model: String,
    /// Hugging Face API token for the hosted models
    #[arg(long)]
    api_key: Option<String>,
    #[arg(long)]
    summarizer_url: Option<String>,
    #[arg(long)]
    ner_url: Option<String>,
    #[arg(long, default_value = "file", help = "Where spoken summaries are kept: file (default), memory")]
    storage: String,
    /// Directory of the audio files for the file storage
    #[arg(long, default_value = ".")]
    audio_dir: PathBuf,
    /// Headlines analysed per report
    #[arg(long, default_value_t = 10)]
    max_articles: usize,
    /// Language of the translated verdict and its audio
    #[arg(long, default_value = "hi")]
    language: String,
    #[arg(long, default_value = "info")]
    log_level: Level,
    #[command(subcommand)]
    command: Commands,
}

#[derive(clap::Subcommand, Debug)]
enum Commands {
    /// Serve the news and speech API
    Serve {
        #[arg(long, default_value = "0.0.0.0")]
        host: String,
        #[arg(long, default_value_t = 8001)]
        port: u16,
    },
    /// Build one report in-process and print it
    Fetch(FetchArgs),
    /// Terminal client for a running server
    Ui(ui::UiArgs),
}

impl Cli {
    fn model_config(&self) -> Config {
        Config {
            api_key: self.api_key.clone(),
            model_name: Some(self.model.clone()),
            inference_config: InferenceConfig {
                summarizer_url: self.summarizer_url.clone(),
                ner_url: self.ner_url.clone(),
                ..Default::default()
            },
        }
    }

    fn fetcher_config(&self) -> FetcherConfig {
        FetcherConfig {
            max_articles: self.max_articles,
            target_language: self.language.clone(),
        }
    }
}

async fn build_state(cli: &Cli) -> anyhow::Result<AppState> {
    let models = ns_inference::create_models(Some(cli.model_config())).await?;
    info!(
        "🧠 Models initialized (summarizer: {}, entities: {})",
        models.summarizer.name(),
        models.entities.name()
    );

    let audio = ns_storage::create_audio_store(&cli.storage, Some(cli.audio_dir.clone()))?;
    info!("💾 Audio storage ready (using {})", cli.storage);

    let scraper = Arc::new(BingNewsScraper::new()?);
    let fetcher = NewsFetcher::new(scraper, models, audio.clone()).with_config(cli.fetcher_config());
    Ok(AppState {
        fetcher: Arc::new(fetcher),
        audio,
    })
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    init_logging(cli.log_level);

    match &cli.command {
        Commands::Serve { host, port } => {
            let state = build_state(&cli).await?;
            let app = create_app(state);
            let addr = format!("{}:{}", host, port);
            let listener = tokio::net::TcpListener::bind(&addr)
                .await
                .with_context(|| format!("Failed to bind {}", addr))?;
            info!("🚀 Listening on http://{}", addr);
            axum::serve(listener, app).await?;
        }
        Commands::Fetch(args) => {
            let state = build_state(&cli).await?;
            ns_scrapers::handle_fetch(args.clone(), &state.fetcher).await?;
        }
        Commands::Ui(args) => {
            ui::run(args).await?;
        }
    }

    Ok(())
}
