use clap::Parser;
use tracing_subscriber::EnvFilter;

use dynamo_backend_client::backend::client::{BackendClient, VersionLookup};

#[derive(Parser)]
#[command(name = "dynamo-backend-client")]
#[command(version, about = "Fetch a Dynamo NIM version record from the backend")]
struct Cli {
    /// NIM identifier (e.g., "llama3")
    nim: String,

    /// Version label (e.g., "v1")
    version: String,

    /// Backend base URL; defaults to $DYNAMO_BACKEND_URL
    #[arg(long)]
    backend_url: Option<String>,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    tokio::runtime::Builder::new_multi_thread()
        .enable_all()
        .build()?
        .block_on(run(cli))
}

async fn run(cli: Cli) -> anyhow::Result<()> {
    let client = match cli.backend_url {
        Some(url) => BackendClient::new(&url),
        None => BackendClient::from_env()?,
    };

    let record = client.lookup_version(&cli.nim, &cli.version).await?;
    println!("{}", serde_json::to_string_pretty(&record)?);

    Ok(())
}
