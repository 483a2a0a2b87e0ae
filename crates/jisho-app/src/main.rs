use std::num::NonZeroUsize;

use anyhow::Context;
use clap::{Parser, ValueEnum};
use jisho_client::JishoClient;
use jisho_config::Config;
use jisho_core::{Lookup, LookupSource, QueryValidator};
use tracing_subscriber::EnvFilter;

pub mod feedback;

use self::feedback::Feedback;

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum LogFormat {
    Text,
    Json,
}

/// Look up a Japanese or English term on Jisho.org and print launcher feedback
#[derive(Parser, Debug)]
#[command(name = "jisho", version, about)]
struct Cli {
    /// Search query, as typed into the launcher
    query: Option<String>,

    /// Maximum number of results to emit (at least 1)
    #[arg(long)]
    max_results: Option<NonZeroUsize>,

    /// Override the search endpoint
    #[arg(long)]
    api_url: Option<String>,

    /// Log output format (logs go to stderr)
    #[arg(long, value_enum, default_value_t = LogFormat::Text)]
    log_format: LogFormat,

    /// Pretty-print the feedback JSON
    #[arg(long)]
    pretty: bool,
}

impl Cli {
    /// Command line flags win over the environment
    fn apply(&self, config: &mut Config) {
        if let Some(max_results) = self.max_results {
            config.max_results = max_results.get();
        }
        if let Some(api_url) = &self.api_url {
            config.network.api_url = api_url.clone();
        }
    }
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();
    let cli = Cli::parse();
    init_tracing(cli.log_format);

    let mut config = Config::new();
    cli.apply(&mut config);

    run(cli.query.as_deref(), &config, cli.pretty).await
}

fn init_tracing(format: LogFormat) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    let subscriber = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr);

    match format {
        LogFormat::Text => subscriber
            .with_ansi(atty::is(atty::Stream::Stderr))
            .init(),
        LogFormat::Json => subscriber.json().init(),
    }
}

async fn run(query: Option<&str>, config: &Config, pretty: bool) -> anyhow::Result<()> {
    // Nothing is printed for a query the launcher should not act on
    if !QueryValidator::new().is_valid(query) {
        tracing::debug!("No valid query, exiting");
        return Ok(());
    }

    let client = JishoClient::new(&config.network).context("Failed to build HTTP client")?;

    let items = Lookup::new(&client, config.max_results)
        .run(query)
        .await
        .context("Dictionary lookup failed")?;
    tracing::info!("Emitting {} results", items.len());

    let feedback = Feedback::new(items, &client.metadata());
    println!("{}", feedback.to_json(pretty)?);

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cli_defaults() {
        let cli = Cli::try_parse_from(["jisho", "猫"]).unwrap();

        assert_eq!(cli.query.as_deref(), Some("猫"));
        assert_eq!(cli.log_format, LogFormat::Text);
        assert!(!cli.pretty);

        let mut config = Config::default();
        cli.apply(&mut config);
        assert_eq!(config, Config::default());
    }

    #[test]
    fn test_cli_without_query() {
        let cli = Cli::try_parse_from(["jisho"]).unwrap();
        assert_eq!(cli.query, None);
    }

    #[test]
    fn test_cli_overrides_config() {
        let cli = Cli::try_parse_from([
            "jisho",
            "--max-results",
            "3",
            "--api-url",
            "http://localhost:9000/search",
            "--log-format",
            "json",
            "ねこ",
        ])
        .unwrap();

        let mut config = Config::default();
        cli.apply(&mut config);
        assert_eq!(config.max_results, 3);
        assert_eq!(config.network.api_url, "http://localhost:9000/search");
        assert_eq!(cli.log_format, LogFormat::Json);
    }

    #[test]
    fn test_cli_rejects_zero_max_results() {
        assert!(Cli::try_parse_from(["jisho", "--max-results", "0", "猫"]).is_err());
        assert!(Cli::try_parse_from(["jisho", "--max-results", "-1", "猫"]).is_err());

        let cli = Cli::try_parse_from(["jisho", "--max-results", "1", "猫"]).unwrap();
        let mut config = Config::default();
        cli.apply(&mut config);
        assert_eq!(config.max_results, 1);
    }

    #[tokio::test]
    async fn test_invalid_query_makes_no_request() {
        // Unreachable endpoint: reaching it would fail the run
        let mut config = Config::default();
        config.network.api_url = "http://127.0.0.1:1/search".to_string();

        assert!(run(None, &config, false).await.is_ok());
        assert!(run(Some("'"), &config, false).await.is_ok());
        assert!(run(Some("\""), &config, false).await.is_ok());
    }

    #[tokio::test]
    async fn test_fetch_failure_is_surfaced() {
        let mut config = Config::default();
        config.network.api_url = "http://127.0.0.1:1/search".to_string();

        assert!(run(Some("猫"), &config, false).await.is_err());
    }
}
