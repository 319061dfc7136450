// src/main.rs
use anyhow::{Context, Result};
use clap::Parser;
use crtsh_ls::cli::Cli;
use crtsh_ls::client::CrtShClient;
use crtsh_ls::config::Config;
use crtsh_ls::pipeline;
use crtsh_ls::render::LineRenderer;
use std::io::Write;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<()> {
    // Parse CLI arguments
    let cli = Cli::parse();

    // Initialize logging. Diagnostics go to stderr so rendered lines on
    // stdout stay clean.
    let env_filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(cli.log_level()));

    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_writer(std::io::stderr)
        .init();

    let config = Config::from_cli(&cli)?;
    let renderer = LineRenderer::new(&config.format)?;
    let client = CrtShClient::new(config.base_uri.clone(), config.timeout)?;

    // Fetch and buffer the whole body. Ctrl-C aborts the outstanding network
    // call; once the body is buffered, the decode/render phase runs to
    // completion so partial output is still produced.
    let body = tokio::select! {
        body = async {
            let response = client.fetch_cert_stream(&cli.domain).await?;
            response.bytes().await.context("error reading cert stream")
        } => body?,
        _ = tokio::signal::ctrl_c() => {
            anyhow::bail!("interrupted");
        }
    };

    let stdout = std::io::stdout();
    let mut out = stdout.lock();
    let rendered = pipeline::process_body(&body, &renderer, config.only_valid, &mut out)?;
    out.flush()?;

    tracing::debug!("Rendered {rendered} certificate records");

    Ok(())
}
