//! Configuration and CLI argument handling

use clap::Parser;

/// CLI argument parsing structure
#[derive(Parser, Debug)]
#[command(name = "coffee-machine")]
#[command(about = "An HTTP-controlled coffee machine with resource tracking and custom recipes")]
#[command(version)]
pub struct Config {
    /// Port to bind the server to
    #[arg(short, long, default_value = "9080")]
    pub port: u16,

    /// Host address to bind to
    #[arg(long, default_value = "0.0.0.0")]
    pub host: String,

    /// Number of worker threads serving requests
    #[arg(short, long, default_value = "2", value_parser = clap::value_parser!(u16).range(1..))]
    pub threads: u16,

    /// Enable verbose logging
    #[arg(short, long)]
    pub verbose: bool,
}

impl Config {
    /// Parse configuration from command line arguments
    pub fn parse() -> Self {
        Parser::parse()
    }

    /// Get the server address as a formatted string
    pub fn address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }

    /// Get the appropriate log level based on verbose flag
    pub fn log_level(&self) -> &'static str {
        if self.verbose { "debug" } else { "info" }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_the_machine_port() {
        let config = Config::try_parse_from(["coffee-machine"]).unwrap();
        assert_eq!(config.address(), "0.0.0.0:9080");
        assert_eq!(config.threads, 2);
        assert_eq!(config.log_level(), "info");
    }

    #[test]
    fn zero_threads_is_rejected() {
        assert!(Config::try_parse_from(["coffee-machine", "--threads", "0"]).is_err());
    }

    #[test]
    fn verbose_switches_to_debug() {
        let config = Config::try_parse_from(["coffee-machine", "-v", "-p", "8080"]).unwrap();
        assert_eq!(config.log_level(), "debug");
        assert_eq!(config.port, 8080);
    }
}
