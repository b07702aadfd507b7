//! Command-line configuration for the server binary.

use clap::Parser;
use std::net::SocketAddr;
use std::path::PathBuf;

#[derive(Parser, Debug, Clone)]
#[clap(
    name = "ad-platforms",
    about = "Search advertising platforms by location",
    version
)]
pub struct Config {
    /// Address the HTTP server listens on
    #[clap(long, default_value = "127.0.0.1:8080")]
    pub bind: SocketAddr,

    /// Catalogue file to load before accepting requests
    #[clap(long)]
    pub catalogue: Option<PathBuf>,

    /// Maximum log level (trace, debug, info, warn, error)
    #[clap(long, default_value = "info")]
    pub log_level: tracing::Level,
}

#[cfg(test)]
mod tests {
    use super::Config;
    use clap::Parser;
    use std::path::PathBuf;

    #[test]
    fn test_defaults() {
        let config = Config::try_parse_from(["ad-platforms"]).unwrap();

        assert_eq!(config.bind, "127.0.0.1:8080".parse().unwrap());
        assert!(config.catalogue.is_none());
        assert_eq!(config.log_level, tracing::Level::INFO);
    }

    #[test]
    fn test_all_flags() {
        let config = Config::try_parse_from([
            "ad-platforms",
            "--bind",
            "0.0.0.0:5000",
            "--catalogue",
            "platforms.txt",
            "--log-level",
            "debug",
        ])
        .unwrap();

        assert_eq!(config.bind, "0.0.0.0:5000".parse().unwrap());
        assert_eq!(config.catalogue, Some(PathBuf::from("platforms.txt")));
        assert_eq!(config.log_level, tracing::Level::DEBUG);
    }

    #[test]
    fn test_invalid_bind_is_rejected() {
        assert!(Config::try_parse_from(["ad-platforms", "--bind", "not-an-addr"]).is_err());
    }
}
