use crate::config::DEFAULT_API_BASE;
use crate::domain::ports::ConfigProvider;
use crate::utils::error::Result;
use crate::utils::validation::{validate_non_empty_string, validate_url, Validate};
use clap::{Parser, Subcommand};

#[derive(Debug, Clone, Parser)]
#[command(name = "sec-insight")]
#[command(about = "CLI for the SEC Insight filing-tracker API")]
pub struct CliConfig {
    /// Base address of the backend
    #[arg(long, default_value = DEFAULT_API_BASE)]
    pub api_base: String,

    #[arg(long, help = "Enable verbose output")]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Clone, Subcommand)]
pub enum Command {
    /// Start tracking a ticker and list its recent filings
    Track { ticker: String },
    /// Analyze one filing by document URL
    Analyze {
        url: String,
        ticker: String,
        form: String,
    },
    /// Run a company-wide analysis for a ticker
    AnalyzeCompany { ticker: String },
    /// Show filings detected since the last poll
    Feed,
    /// List the tickers currently being tracked
    Tracked,
}

impl ConfigProvider for CliConfig {
    fn api_base(&self) -> &str {
        &self.api_base
    }
}

impl Validate for CliConfig {
    fn validate(&self) -> Result<()> {
        validate_url("api_base", &self.api_base)?;

        // The client sends values through opaquely; only catch arguments
        // that could never be meant.
        match &self.command {
            Command::Track { ticker } | Command::AnalyzeCompany { ticker } => {
                validate_non_empty_string("ticker", ticker)
            }
            Command::Analyze { url, ticker, form } => {
                validate_url("url", url)?;
                validate_non_empty_string("ticker", ticker)?;
                validate_non_empty_string("form", form)
            }
            Command::Feed | Command::Tracked => Ok(()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = CliConfig::parse_from(["sec-insight", "feed"]);
        assert_eq!(config.api_base, DEFAULT_API_BASE);
        assert!(!config.verbose);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_validate_rejects_bad_base() {
        let config = CliConfig::parse_from(["sec-insight", "--api-base", "not a url", "tracked"]);
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_validate_rejects_blank_ticker() {
        let config = CliConfig::parse_from(["sec-insight", "track", " "]);
        assert!(config.validate().is_err());
    }
}
