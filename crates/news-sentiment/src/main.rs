//! News Sentiment API - Entry Point

use std::net::{IpAddr, SocketAddr};

use clap::Parser;
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

use news_sentiment::{Config, NewsSentimentAnalyzer, config, server::ApiServer};

#[derive(Parser, Debug)]
#[command(name = "news-sentiment")]
#[command(about = "Search news headlines and score their sentiment")]
#[command(version)]
struct Cli {
    /// NewsAPI key
    #[arg(long, env = "NEWS_API_KEY", hide_env_values = true)]
    api_key: Option<String>,

    /// Override the news search endpoint
    #[arg(long, env = "NEWS_API_URL")]
    news_api_url: Option<String>,

    /// Bind address
    #[arg(long, default_value = config::server::HOST, env = "HOST")]
    host: IpAddr,

    /// HTTP server port
    #[arg(long, default_value_t = config::server::PORT, env = "PORT")]
    port: u16,

    /// Log level (trace, debug, info, warn, error)
    #[arg(long, default_value = "info", env = "RUST_LOG")]
    log_level: String,

    /// Output logs as JSON
    #[arg(long)]
    json_logs: bool,
}

fn init_tracing(log_level: &str, json: bool) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(log_level));

    let subscriber = tracing_subscriber::registry().with(filter);

    if json {
        subscriber.with(tracing_subscriber::fmt::layer().json()).init();
    } else {
        subscriber.with(tracing_subscriber::fmt::layer().compact()).init();
    }
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenv::dotenv().ok();
    let cli = Cli::parse();

    init_tracing(&cli.log_level, cli.json_logs);

    tracing::info!(version = env!("CARGO_PKG_VERSION"), "Starting news sentiment API");

    let mut config = Config::new(cli.api_key);
    if let Some(url) = cli.news_api_url {
        url::Url::parse(&url)?;
        config = config.with_news_api_url(url);
    }
    if !config.has_api_key() {
        tracing::warn!("NEWS_API_KEY is not set; /analyze will answer 500 until it is");
    }

    let analyzer = NewsSentimentAnalyzer::from_config(config)?;
    let server = ApiServer::new(analyzer);

    server.run(SocketAddr::new(cli.host, cli.port)).await
}
