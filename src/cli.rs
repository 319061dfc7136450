// src/cli.rs
use clap::Parser;
use std::time::Duration;

pub const DEFAULT_FORMAT: &str =
    "{{ padlen(name_value, 20) }}\t{{ not_before }}\t{{ not_after }}";

/// crtsh-ls: list certificates from the crt.sh database
///
/// <DOMAIN> is "%.github.com" to show all subdomains of github.com
/// or "github.com" to show a single domain's certificates.
#[derive(Parser, Debug, Clone)]
#[command(name = "crtsh-ls")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Domain or pattern to look up ("%" is the upstream wildcard)
    pub domain: String,

    /// Output formatting (minijinja template).
    /// Possible items are issuer_ca_id, issuer_name, name_value, min_cert_id,
    /// min_entry_timestamp, not_before, not_after.
    #[arg(short = 'f', long = "format", env = "FORMAT", default_value = DEFAULT_FORMAT)]
    pub format: String,

    /// Debug output
    #[arg(short = 'd', long = "debug", env = "DEBUG")]
    pub debug: bool,

    /// Request timeout ("10s", "500ms", or plain seconds; 0 uses the transport default)
    #[arg(
        short = 't',
        long = "timeout",
        env = "TIMEOUT",
        default_value = "30s",
        value_parser = parse_timeout
    )]
    pub timeout: Duration,

    /// Only display still (date) valid certificates
    #[arg(long = "only-valid", env = "ONLY_VALID")]
    pub only_valid: bool,

    /// Upstream crt.sh endpoint
    #[arg(long = "base-uri", env = "CRTSH_BASE_URI", default_value = "https://crt.sh/")]
    pub base_uri: String,
}

impl Cli {
    /// Determine log level based on the debug flag
    pub fn log_level(&self) -> &str {
        if self.debug { "debug" } else { "info" }
    }
}

/// Parse a timeout value: "500ms", "10s", or a bare number of seconds.
fn parse_timeout(value: &str) -> Result<Duration, String> {
    let value = value.trim();
    let parse = |digits: &str| {
        digits
            .trim()
            .parse::<u64>()
            .map_err(|e| format!("invalid timeout {value:?}: {e}"))
    };

    if let Some(ms) = value.strip_suffix("ms") {
        parse(ms).map(Duration::from_millis)
    } else if let Some(secs) = value.strip_suffix('s') {
        parse(secs).map(Duration::from_secs)
    } else {
        parse(value).map(Duration::from_secs)
    }
}
