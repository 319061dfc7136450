// src/config.rs

use anyhow::{Context, Result};
use std::time::Duration;
use url::Url;

use crate::cli::Cli;

/// Resolved run configuration, built once from the CLI surface and handed to
/// the client and renderer as plain values.
#[derive(Debug, Clone)]
pub struct Config {
    /// Upstream crt.sh endpoint. Must be an absolute URL.
    pub base_uri: Url,
    /// Network request timeout. Zero means the transport default.
    pub timeout: Duration,
    /// Drop certificates whose validity window has already ended.
    pub only_valid: bool,
    /// Output template source, one line per record.
    pub format: String,
}

impl Config {
    pub fn from_cli(cli: &Cli) -> Result<Self> {
        let base_uri = Url::parse(&cli.base_uri)
            .with_context(|| format!("unable to parse base URI ({})", cli.base_uri))?;

        Ok(Self {
            base_uri,
            timeout: cli.timeout,
            only_valid: cli.only_valid,
            format: cli.format.clone(),
        })
    }
}
