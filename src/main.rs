use std::net::SocketAddr;

use anyhow::Result;
use clap::Parser;
use release_board::config::{DEFAULT_BIND, DEFAULT_TIMEOUT_SECS, ServerConfig};

/// release-board - a dashboard of the latest GitHub releases
///
/// Serves a single HTML page listing the newest release, notes and
/// downloads for a built-in list of repositories.
///
/// Examples:
///   release-board                         # listen on 0.0.0.0:8787
///   release-board --bind 127.0.0.1:3000   # listen locally only
#[derive(Parser, Debug)]
#[command(author, version = env!("RELEASE_BOARD_VERSION"), about)]
struct Cli {
    /// Address to listen on
    #[arg(
        long,
        short = 'b',
        env = "RELEASE_BOARD_BIND",
        value_name = "ADDR",
        default_value = DEFAULT_BIND
    )]
    pub bind: SocketAddr,

    /// GitHub API URL (defaults to https://api.github.com)
    #[arg(long = "api-url", env = "RELEASE_BOARD_API_URL", value_name = "URL")]
    pub api_url: Option<String>,

    /// Per-lookup network timeout in seconds
    #[arg(
        long,
        env = "RELEASE_BOARD_TIMEOUT_SECS",
        value_name = "SECS",
        default_value_t = DEFAULT_TIMEOUT_SECS
    )]
    pub timeout: u64,
}

#[tokio::main]
async fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();
    let cli = Cli::parse();

    let config = ServerConfig::new(cli.bind, cli.api_url, cli.timeout)?;
    release_board::server::serve(config).await
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::Parser;

    #[test]
    fn test_cli_defaults() {
        let cli = Cli::try_parse_from(["release-board"]).unwrap();
        assert_eq!(cli.bind, DEFAULT_BIND.parse::<SocketAddr>().unwrap());
        assert_eq!(cli.api_url, None);
        assert_eq!(cli.timeout, DEFAULT_TIMEOUT_SECS);
    }

    #[test]
    fn test_cli_bind_parsing() {
        let cli = Cli::try_parse_from(["release-board", "--bind", "127.0.0.1:3000"]).unwrap();
        assert_eq!(cli.bind, "127.0.0.1:3000".parse::<SocketAddr>().unwrap());
    }

    #[test]
    fn test_cli_api_url_and_timeout() {
        let cli = Cli::try_parse_from([
            "release-board",
            "--api-url",
            "http://localhost:9999",
            "--timeout",
            "5",
        ])
        .unwrap();
        assert_eq!(cli.api_url.as_deref(), Some("http://localhost:9999"));
        assert_eq!(cli.timeout, 5);
    }

    #[test]
    fn test_cli_rejects_bad_bind() {
        let result = Cli::try_parse_from(["release-board", "--bind", "not-an-addr"]);
        assert!(result.is_err());
    }
}
