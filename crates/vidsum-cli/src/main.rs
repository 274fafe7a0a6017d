use std::path::PathBuf;

use clap::{builder::PossibleValuesParser, Parser, Subcommand};
use vidsum_cli::{client::DEFAULT_BASE_URL, Controller, DocumentView, Outcome, VideosClient};

#[derive(Debug, Parser)]
#[command(name = "vidsum-cli")]
#[command(about = "Fetch and render the daily video digest for a topic")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Debug, Subcommand)]
enum Commands {
    /// Fetch the digest for a topic and print it as HTML
    Fetch {
        /// Topic to fetch; omitting it aborts without contacting the server
        #[arg(long, value_parser = PossibleValuesParser::new(vidsum_core::TOPIC_KEYS))]
        topic: Option<String>,
        /// Server base URL
        #[arg(long, env = "VIDSUM_BASE_URL", default_value = DEFAULT_BASE_URL)]
        base_url: String,
        /// Write a standalone HTML page here instead of printing the fragment
        #[arg(long)]
        out: Option<PathBuf>,
        #[arg(long, default_value_t = 10)]
        timeout_secs: u64,
    },
    /// List the topics the server recognizes
    Topics,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    match cli.command {
        Commands::Fetch {
            topic,
            base_url,
            out,
            timeout_secs,
        } => run_fetch(topic.as_deref(), &base_url, out, timeout_secs).await,
        Commands::Topics => {
            for topic in vidsum_core::TOPIC_KEYS {
                println!("{topic}");
            }
            Ok(())
        }
    }
}

async fn run_fetch(
    topic: Option<&str>,
    base_url: &str,
    out: Option<PathBuf>,
    timeout_secs: u64,
) -> anyhow::Result<()> {
    let client = VideosClient::new(base_url, timeout_secs)?;
    let mut controller = Controller::new(client, DocumentView::new(std::io::stderr()));

    let status = match controller.activate(topic).await {
        Outcome::Aborted => anyhow::bail!(
            "no topic selected; pass --topic with one of: {}",
            vidsum_core::TOPIC_KEYS.join(", ")
        ),
        Outcome::Rendered { count } => {
            tracing::info!(count, "rendered digest");
            Ok(())
        }
        Outcome::ApiError { status, message } => {
            Err(anyhow::anyhow!("server responded {status}: {message}"))
        }
        Outcome::ConnectionFailed => Err(anyhow::anyhow!("could not reach server at {base_url}")),
    };

    let view = controller.into_view();
    match out {
        Some(path) => {
            let title = format!("今日新知影片摘要：{}", topic.unwrap_or_default());
            std::fs::write(&path, view.to_document(&title))?;
            tracing::info!(path = %path.display(), "wrote digest page");
        }
        None => {
            if !view.header().is_empty() {
                println!("{}", view.header());
            }
            print!("{}", view.results());
        }
    }

    status
}
