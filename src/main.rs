use clap::Parser;
use eyre::{Context, Result};
use tracing::{info, level_filters::LevelFilter};
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter, Layer};

use ghostmesh_monitor::listener::{self, StopReason};

#[derive(Parser, Debug)]
#[command(author, version, about = "Listen to a GhostMesh node's event stream", long_about = None)]
struct Args {
    /// Host of the GhostMesh node
    #[arg(long, default_value = "127.0.0.1")]
    host: String,

    /// Port of the GhostMesh node's dashboard server
    #[arg(long, default_value_t = 8071)]
    port: u16,
}

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();
    let env_log = EnvFilter::try_from_default_env();

    if let Ok(filter) = env_log {
        tracing_subscriber::registry()
            .with(
                fmt::layer()
                    .event_format(
                        tracing_subscriber::fmt::format()
                            .with_file(true)
                            .with_line_number(true),
                    )
                    .with_filter(filter),
            )
            .init();
    } else {
        tracing_subscriber::registry()
            .with(
                fmt::layer()
                    .event_format(
                        tracing_subscriber::fmt::format()
                            .with_file(true)
                            .with_line_number(true),
                    )
                    .with_filter(LevelFilter::INFO),
            )
            .init();
    }

    let args = Args::parse();
    let uri = listener::ws_uri(&args.host, args.port);
    info!("Connecting to {uri}...");

    let stopped = listener::listen(&uri)
        .await
        .with_context(|| format!("listening on {uri} failed"))?;

    match stopped {
        StopReason::ServerClosed => info!("Connection closed by server."),
        StopReason::Interrupted => info!("Exiting..."),
    }

    Ok(())
}
