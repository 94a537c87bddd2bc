use anyhow::Result;
use axum::Router;
use clap::Parser;
use std::net::SocketAddr;
use std::path::PathBuf;
use tracing_subscriber::{fmt, EnvFilter};
use search_core::loader::load_index;
use server::build_app;
use tokio::net::TcpListener;

#[derive(Parser)]
struct Args {
    /// File listing the documents to index
    #[arg(long, conflicts_with = "dir")]
    docs: Option<PathBuf>,
    /// Index every file below this directory
    #[arg(long)]
    dir: Option<PathBuf>,
    /// Noise-word file; a built-in English list is used when omitted
    #[arg(long)]
    noise: Option<PathBuf>,
    /// Host to bind
    #[arg(long, default_value = "0.0.0.0")]
    host: String,
    /// Port to bind
    #[arg(long, default_value_t = 8080)]
    port: u16,
}

#[tokio::main]
async fn main() -> Result<()> {
    fmt().with_env_filter(EnvFilter::from_default_env()).init();
    let args = Args::parse();
    let index = load_index(args.docs.as_deref(), args.dir.as_deref(), args.noise.as_deref())?;
    tracing::info!(documents = index.num_documents(), keywords = index.num_keywords(), "index built");
    let app: Router = build_app(index);

    let addr: SocketAddr = format!("{}:{}", args.host, args.port).parse()?;
    let listener = TcpListener::bind(addr).await?;
    tracing::info!(%addr, "server listening");
    axum::serve(listener, app).await?;
    Ok(())
}
